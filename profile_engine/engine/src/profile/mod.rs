//! Profile snapshot as returned by the directory service.
//!
//! Every wire key is spelled out on its field. Absent or `null` optional
//! keys decode to `None`, absent or `null` flags to `false` and absent or
//! `null` badges to an empty list. `None` values are left out when encoding.

pub mod badge;
pub mod capabilities;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codec;
use crate::credential::ExpiringProfileKeyCredentialResponse;
use crate::error::Result;
use crate::service_id::ServiceId;

pub use badge::BadgeDescriptor;
pub use capabilities::CapabilityFlags;

/// Another account's public profile. Fields are fixed once decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(rename = "identityKey", skip_serializing_if = "Option::is_none")]
    identity_key: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "about", skip_serializing_if = "Option::is_none")]
    about: Option<String>,
    #[serde(rename = "aboutEmoji", skip_serializing_if = "Option::is_none")]
    about_emoji: Option<String>,
    #[serde(
        rename = "paymentAddress",
        with = "codec::base64_opt",
        skip_serializing_if = "Option::is_none"
    )]
    payment_address: Option<Vec<u8>>,
    #[serde(rename = "avatar", skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    #[serde(rename = "unidentifiedAccess", skip_serializing_if = "Option::is_none")]
    unidentified_access: Option<String>,
    #[serde(
        rename = "unrestrictedUnidentifiedAccess",
        deserialize_with = "codec::null_as_default"
    )]
    unrestricted_unidentified_access: bool,
    #[serde(rename = "capabilities", skip_serializing_if = "Option::is_none")]
    capabilities: Option<CapabilityFlags>,
    #[serde(rename = "uuid", skip_serializing_if = "Option::is_none")]
    service_id: Option<ServiceId>,
    #[serde(
        rename = "credential",
        with = "codec::base64_opt",
        skip_serializing_if = "Option::is_none"
    )]
    credential: Option<Vec<u8>>,
    #[serde(rename = "badges", deserialize_with = "codec::null_as_default")]
    badges: Vec<BadgeDescriptor>,
    #[serde(rename = "phoneNumberSharing", skip_serializing_if = "Option::is_none")]
    phone_number_sharing: Option<String>,
}

impl ProfileRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn identity_key(&self) -> Option<&str> {
        self.identity_key.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    pub fn about_emoji(&self) -> Option<&str> {
        self.about_emoji.as_deref()
    }

    pub fn payment_address(&self) -> Option<&[u8]> {
        self.payment_address.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn unidentified_access(&self) -> Option<&str> {
        self.unidentified_access.as_deref()
    }

    pub fn is_unrestricted_unidentified_access(&self) -> bool {
        self.unrestricted_unidentified_access
    }

    pub fn capabilities(&self) -> Option<&CapabilityFlags> {
        self.capabilities.as_ref()
    }

    pub fn service_id(&self) -> Option<ServiceId> {
        self.service_id
    }

    /// Raw credential bytes exactly as received.
    pub fn credential(&self) -> Option<&[u8]> {
        self.credential.as_deref()
    }

    /// Badges in server order.
    pub fn badges(&self) -> &[BadgeDescriptor] {
        &self.badges
    }

    pub fn phone_number_sharing(&self) -> Option<&str> {
        self.phone_number_sharing.as_deref()
    }

    /// Decode the attached credential response.
    ///
    /// Returns `None` when no credential was sent. A credential that fails to
    /// decode is logged at WARN and also yields `None`; callers treat the two
    /// cases the same. Parses on every call.
    pub fn expiring_profile_key_credential_response(
        &self,
    ) -> Option<ExpiringProfileKeyCredentialResponse> {
        let bytes = match self.credential.as_deref() {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return None,
        };

        match ExpiringProfileKeyCredentialResponse::from_bytes(bytes) {
            Ok(response) => {
                debug!(
                    expiration = response.credential_expiration_time(),
                    "decoded profile credential response"
                );
                Some(response)
            }
            Err(e) => {
                warn!(
                    service_id = ?self.service_id,
                    len = bytes.len(),
                    error = %e,
                    "discarding malformed profile credential"
                );
                None
            }
        }
    }
}

/// Which request variant produced a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Profile,
    ProfileAndCredential,
}

/// A decoded profile paired with the request that fetched it.
///
/// Serializes exactly like the inner [`ProfileRecord`]; the request type is
/// never written and a `requestType` key on input is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileResponse {
    profile: ProfileRecord,
    #[serde(skip)]
    request_type: Option<RequestType>,
}

impl ProfileResponse {
    pub fn new(profile: ProfileRecord) -> Self {
        Self {
            profile,
            request_type: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(ProfileRecord::from_json(json)?))
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    pub fn into_profile(self) -> ProfileRecord {
        self.profile
    }

    /// `None` until the issuing caller tags the response.
    pub fn request_type(&self) -> Option<RequestType> {
        self.request_type
    }

    pub fn set_request_type(&mut self, request_type: RequestType) {
        self.request_type = Some(request_type);
    }
}

impl std::ops::Deref for ProfileResponse {
    type Target = ProfileRecord;

    fn deref(&self) -> &ProfileRecord {
        &self.profile
    }
}
