//! Centralized profile engine error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// Service identifier string or bytes could not be parsed.
    #[error("Invalid service id: {0}")]
    InvalidServiceId(String),
    /// Credential bytes do not form a valid expiring profile-key credential response.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerdeError(String),
    /// Byte field was not valid base64.
    #[error("Base64 error: {0}")]
    Base64Error(#[from] base64::DecodeError),
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::SerdeError(err.to_string())
    }
}

impl From<bincode::Error> for ProfileError {
    fn from(err: bincode::Error) -> Self {
        ProfileError::InvalidCredential(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
