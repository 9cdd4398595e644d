use serde_json::json;

use super::log_capture::count_warnings;
use super::profile_codec_test::{credential_bytes, full_profile_json};
use crate::codec::encode_bytes;
use crate::credential::{ExpiringProfileKeyCredentialResponse, SECONDS_PER_DAY};
use crate::profile::ProfileRecord;

fn profile_with_credential(bytes: &[u8]) -> ProfileRecord {
    serde_json::from_value(json!({ "credential": encode_bytes(bytes) })).unwrap()
}

#[test]
fn test_absent_credential_is_silent() {
    let profile = ProfileRecord::default();
    let (response, warnings) = count_warnings(|| profile.expiring_profile_key_credential_response());

    assert!(response.is_none());
    assert_eq!(warnings, 0);
}

#[test]
fn test_empty_credential_is_silent() {
    let profile = profile_with_credential(&[]);
    assert_eq!(profile.credential(), Some(&[][..]));

    let (response, warnings) = count_warnings(|| profile.expiring_profile_key_credential_response());

    assert!(response.is_none());
    assert_eq!(warnings, 0);
}

#[test]
fn test_malformed_credential_warns_once_and_yields_none() {
    let profile = profile_with_credential(&[0x00, 0x01, 0x02, 0x03]);
    let (response, warnings) = count_warnings(|| profile.expiring_profile_key_credential_response());

    assert!(response.is_none());
    assert_eq!(warnings, 1);
}

#[test]
fn test_truncated_credential_warns() {
    let mut bytes = credential_bytes();
    bytes.truncate(bytes.len() / 2);
    let profile = profile_with_credential(&bytes);

    let (response, warnings) = count_warnings(|| profile.expiring_profile_key_credential_response());

    assert!(response.is_none());
    assert_eq!(warnings, 1);
}

#[test]
fn test_valid_credential_decodes_deterministically() {
    let profile: ProfileRecord = serde_json::from_value(full_profile_json()).unwrap();

    let (first, warnings) = count_warnings(|| profile.expiring_profile_key_credential_response());
    let second = profile.expiring_profile_key_credential_response();

    let first = first.expect("credential should decode");
    assert_eq!(warnings, 0);
    assert_eq!(Some(&first), second.as_ref());
    assert_eq!(first.credential_expiration_time(), 19_800 * SECONDS_PER_DAY);
    assert_eq!(first.blinded_credential().elements[2], [3; 32]);
    assert_eq!(first.proof(), &[9; 64][..]);
    assert_eq!(
        first,
        ExpiringProfileKeyCredentialResponse::from_bytes(&credential_bytes()).unwrap()
    );
}
