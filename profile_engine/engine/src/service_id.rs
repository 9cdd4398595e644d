//! Typed service identifiers and their string/binary codecs.
//!
//! An ACI is written as a bare UUID, a PNI carries a `PNI:` prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{ProfileError, Result};

const PNI_PREFIX: &str = "PNI:";
const PNI_TAG: u8 = 0x01;

/// Identity of an account on the directory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    /// Account identity.
    Aci(Uuid),
    /// Phone number identity.
    Pni(Uuid),
}

impl ServiceId {
    pub fn uuid(&self) -> Uuid {
        match self {
            ServiceId::Aci(uuid) | ServiceId::Pni(uuid) => *uuid,
        }
    }

    pub fn is_aci(&self) -> bool {
        matches!(self, ServiceId::Aci(_))
    }

    /// Binary form: 16 raw bytes for an ACI, a kind byte plus 16 bytes for a PNI.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            ServiceId::Aci(uuid) => uuid.as_bytes().to_vec(),
            ServiceId::Pni(uuid) => {
                let mut out = Vec::with_capacity(17);
                out.push(PNI_TAG);
                out.extend_from_slice(uuid.as_bytes());
                out
            }
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            b if b.len() == 16 => Ok(ServiceId::Aci(uuid_from_slice(b)?)),
            [PNI_TAG, rest @ ..] if rest.len() == 16 => Ok(ServiceId::Pni(uuid_from_slice(rest)?)),
            _ => Err(ProfileError::InvalidServiceId(format!(
                "unexpected binary service id of {} bytes",
                bytes.len()
            ))),
        }
    }
}

fn uuid_from_slice(bytes: &[u8]) -> Result<Uuid> {
    Uuid::from_slice(bytes).map_err(|e| ProfileError::InvalidServiceId(e.to_string()))
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceId::Aci(uuid) => write!(f, "{}", uuid.hyphenated()),
            ServiceId::Pni(uuid) => write!(f, "{}{}", PNI_PREFIX, uuid.hyphenated()),
        }
    }
}

impl FromStr for ServiceId {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        let (raw, pni) = match s.strip_prefix(PNI_PREFIX) {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let uuid = Uuid::parse_str(raw)
            .map_err(|e| ProfileError::InvalidServiceId(format!("{s:?}: {e}")))?;

        Ok(if pni { ServiceId::Pni(uuid) } else { ServiceId::Aci(uuid) })
    }
}

impl Serialize for ServiceId {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServiceId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
