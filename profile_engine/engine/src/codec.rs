//! Wire helpers shared by the profile types.
//!
//! Byte buffers travel as standard, padded base64 strings.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Deserialize;

use crate::error::Result;

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_bytes(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

/// Serde adapter for `Option<Vec<u8>>` fields; `null` and absent both map to `None`.
pub mod base64_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => s.serialize_str(&super::encode_bytes(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|text| super::decode_bytes(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Deserialize a plain field, reading `null` as the type's default.
pub fn null_as_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
