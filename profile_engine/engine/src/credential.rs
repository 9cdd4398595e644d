//! Expiring profile-key credential response.
//!
//! The directory service returns this as an opaque byte blob alongside a
//! profile. Layout (bincode, fixed-width little-endian, no trailing bytes):
//!
//! - `version`: one byte, always `CREDENTIAL_VERSION`
//! - `blinded_credential`: four 32-byte group elements
//! - `credential_expiration_time`: u64 epoch seconds, day aligned
//! - `proof`: u64 length prefix followed by the issuance proof

use bincode::Options;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

pub const CREDENTIAL_VERSION: u8 = 0;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Upper bound on an encoded response; also caps the proof length prefix.
const MAX_ENCODED_LEN: u64 = 4096;

/// Blinded credential as issued by the server, one 32-byte encoding per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindedCredential {
    pub elements: [[u8; 32]; 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringProfileKeyCredentialResponse {
    version: u8,
    blinded_credential: BlindedCredential,
    credential_expiration_time: u64,
    proof: Vec<u8>,
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_ENCODED_LEN)
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

impl ExpiringProfileKeyCredentialResponse {
    pub fn new(
        blinded_credential: BlindedCredential,
        credential_expiration_time: u64,
        proof: Vec<u8>,
    ) -> Self {
        Self {
            version: CREDENTIAL_VERSION,
            blinded_credential,
            credential_expiration_time,
            proof,
        }
    }

    /// Parse and structurally check an encoded response.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let response: Self = codec().deserialize(bytes)?;

        if response.version != CREDENTIAL_VERSION {
            return Err(ProfileError::InvalidCredential(format!(
                "unsupported version {}",
                response.version
            )));
        }
        if response.credential_expiration_time % SECONDS_PER_DAY != 0 {
            return Err(ProfileError::InvalidCredential(format!(
                "expiration {} is not day aligned",
                response.credential_expiration_time
            )));
        }
        if response.proof.is_empty() {
            return Err(ProfileError::InvalidCredential("empty issuance proof".into()));
        }

        Ok(response)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(codec().serialize(self)?)
    }

    pub fn blinded_credential(&self) -> &BlindedCredential {
        &self.blinded_credential
    }

    /// Expiration in seconds since the Unix epoch.
    pub fn credential_expiration_time(&self) -> u64 {
        self.credential_expiration_time
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.credential_expiration_time).ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    pub fn proof(&self) -> &[u8] {
        &self.proof
    }
}
