use serde::{Deserialize, Serialize};

/// Feature-support flags advertised by a profile owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityFlags {
    /// Storage service sync.
    #[serde(rename = "storage", deserialize_with = "crate::codec::null_as_default")]
    pub storage: bool,
    /// Storage service encryption v2.
    #[serde(rename = "ssre2", deserialize_with = "crate::codec::null_as_default")]
    pub storage_service_encryption_v2: bool,
    #[serde(rename = "extralock", deserialize_with = "crate::codec::null_as_default")]
    pub extralock: bool,
}

impl CapabilityFlags {
    pub fn new(storage: bool, storage_service_encryption_v2: bool, extralock: bool) -> Self {
        Self {
            storage,
            storage_service_encryption_v2,
            extralock,
        }
    }
}
