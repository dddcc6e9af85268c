//! Work with the DICOM `UniqueIdentifier` value representation, including
//! generation of the fresh UIDs that every phantom file needs.

use rand::Rng;
use regex::Regex;

use crate::{DataError, ValueRepresentation};

/// Converts a list of UIDs into a `UniqueIdentifier` value, rejecting any UID
/// that is not valid.
///
pub fn to_bytes(uids: &[&str]) -> Result<Vec<u8>, DataError> {
  for uid in uids {
    if !is_valid(uid) {
      return Err(DataError::new_value_invalid(format!(
        "UniqueIdentifier is invalid: '{}'",
        uid
      )));
    }
  }

  let mut bytes = uids.join("\\").into_bytes();
  ValueRepresentation::UniqueIdentifier.pad_bytes_to_even_length(&mut bytes);

  Ok(bytes)
}

static VALID_UID_REGEX: std::sync::LazyLock<Regex> =
  std::sync::LazyLock::new(|| {
    Regex::new("^(0|[1-9][0-9]*)(\\.(0|[1-9][0-9]*))*$").unwrap()
  });

/// Returns whether the given string is a valid UID: up to 64 characters of
/// period-separated numeric components, where a component only starts with a
/// zero when the zero is its sole digit.
///
pub fn is_valid(uid: &str) -> bool {
  uid.len() <= 64 && VALID_UID_REGEX.is_match(uid)
}

/// Generates a random 64-character UID underneath the given root prefix,
/// which must itself be a valid UID no longer than 60 characters so that at
/// least three random digits follow it.
///
pub fn new(root_prefix: &str) -> Result<String, DataError> {
  if root_prefix.len() > 60 || !is_valid(root_prefix) {
    return Err(DataError::new_value_invalid(format!(
      "UID root prefix is invalid: '{}'",
      root_prefix
    )));
  }

  let mut rng = rand::thread_rng();

  // The new component's first digit is nonzero so it has no leading zero
  let mut uid = format!("{}.{}", root_prefix, rng.gen_range(1u8..=9));

  while uid.len() < 64 {
    uid.push(char::from(b'0' + rng.gen_range(0u8..10)));
  }

  Ok(uid)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_bytes_test() {
    assert_eq!(to_bytes(&[]), Ok(vec![]));

    assert_eq!(to_bytes(&["1.0"]), Ok(b"1.0\0".to_vec()));

    assert_eq!(
      to_bytes(&["1.2.840.10008.1.2.1"]),
      Ok(b"1.2.840.10008.1.2.1\0".to_vec())
    );

    assert_eq!(
      to_bytes(&["1.00"]),
      Err(DataError::new_value_invalid(
        "UniqueIdentifier is invalid: '1.00'".to_string()
      ))
    );
  }

  #[test]
  fn is_valid_test() {
    assert!(is_valid("1.2.826.0.1.3680043.10.1953.1"));
    assert!(is_valid("0"));

    assert!(!is_valid(""));
    assert!(!is_valid("1."));
    assert!(!is_valid("1.01"));
    assert!(!is_valid(&"1".repeat(65)));
  }

  #[test]
  fn new_test() {
    let uid = new("1.2.826.0.1.3680043.10.1953.1").unwrap();

    assert_eq!(uid.len(), 64);
    assert!(uid.starts_with("1.2.826.0.1.3680043.10.1953.1."));
    assert!(is_valid(&uid));

    assert_ne!(new("1.2").unwrap(), new("1.2").unwrap());

    assert!(new("1.").is_err());
    assert!(new(&"1".repeat(61)).is_err());
  }
}
