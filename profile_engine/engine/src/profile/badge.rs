use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One badge attached to a profile.
///
/// Values are kept exactly as the server sent them; `expiration` and
/// `duration_seconds` are not checked against each other. A `null` string,
/// list, flag or duration decodes to its empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeDescriptor {
    #[serde(rename = "id", deserialize_with = "crate::codec::null_as_default")]
    pub id: String,
    #[serde(rename = "category", deserialize_with = "crate::codec::null_as_default")]
    pub category: String,
    #[serde(rename = "name", deserialize_with = "crate::codec::null_as_default")]
    pub name: String,
    #[serde(rename = "description", deserialize_with = "crate::codec::null_as_default")]
    pub description: String,
    /// Artwork variants; position maps to the server's fixed sprite slots.
    #[serde(rename = "sprites6", deserialize_with = "crate::codec::null_as_default")]
    pub sprite_references: Vec<String>,
    /// Epoch seconds as an exact decimal.
    #[serde(rename = "expiration")]
    pub expiration: Option<Number>,
    #[serde(rename = "visible", deserialize_with = "crate::codec::null_as_default")]
    pub visible: bool,
    #[serde(rename = "duration", deserialize_with = "crate::codec::null_as_default")]
    pub duration_seconds: i64,
}

impl BadgeDescriptor {
    /// Expiration as a timestamp. Digits past nanoseconds are dropped.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let number = self.expiration.as_ref()?;
        if let Some(secs) = number.as_i64() {
            return DateTime::from_timestamp(secs, 0);
        }

        let text = number.to_string();
        match text.split_once('.') {
            Some((whole, frac))
                if !whole.starts_with('-') && frac.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let nanos: String = frac.chars().chain(std::iter::repeat('0')).take(9).collect();
                DateTime::from_timestamp(whole.parse().ok()?, nanos.parse().ok()?)
            }
            _ => {
                // exponent or negative forms
                let value = number.as_f64()?;
                let secs = value.floor();
                let nanos = (((value - secs) * 1e9) as u32).min(999_999_999);
                DateTime::from_timestamp(secs as i64, nanos)
            }
        }
    }
}
