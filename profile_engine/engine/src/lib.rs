//! Profile Engine Core Library
//!
//! Wire model for profiles fetched from the directory service, plus the
//! codecs for the identifiers and credential blobs they carry.

pub mod codec;
pub mod credential;
pub mod error;
pub mod logging;
pub mod profile;
pub mod service_id;

pub use credential::{BlindedCredential, ExpiringProfileKeyCredentialResponse};
pub use error::{ProfileError, Result};
pub use profile::{BadgeDescriptor, CapabilityFlags, ProfileRecord, ProfileResponse, RequestType};
pub use service_id::ServiceId;

#[cfg(test)]
mod tests;
