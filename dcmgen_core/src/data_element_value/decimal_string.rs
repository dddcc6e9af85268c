//! Work with the DICOM `DecimalString` value representation.

use crate::{utils, DataError};

/// Converts a `DecimalString` value to a list of floats.
///
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<f64>, DataError> {
  let decimal_string = std::str::from_utf8(bytes).map_err(|_| {
    DataError::new_value_invalid("DecimalString is invalid UTF-8".to_string())
  })?;

  let decimal_string = utils::trim_end_whitespace(decimal_string);

  decimal_string
    .split('\\')
    .map(|s| s.trim())
    .filter(|s| !s.is_empty())
    .map(|s| s.parse::<f64>())
    .collect::<Result<Vec<f64>, _>>()
    .map_err(|_| {
      DataError::new_value_invalid(format!(
        "DecimalString is invalid: '{}'",
        decimal_string
      ))
    })
}

/// Converts a list of floats to a `DecimalString` value. A value whose
/// shortest representation exceeds the 16 characters allowed by the VR is an
/// error.
///
pub fn to_bytes(values: &[f64]) -> Result<Vec<u8>, DataError> {
  let values: Vec<String> = values
    .iter()
    .map(|f| {
      let decimal_value = f.to_string();
      let exponential_value = format!("{:e}", f);

      let value = if decimal_value.len() < exponential_value.len() {
        // When exponential notation isn't in use, trim unnecessary zeros and
        // decimal point characters from the end of the string
        if decimal_value.contains('.') {
          decimal_value
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
        } else {
          decimal_value
        }
      } else {
        exponential_value
      };

      if value.len() > 16 {
        return Err(DataError::new_value_invalid(format!(
          "DecimalString value does not fit in 16 characters: '{}'",
          value
        )));
      }

      Ok(value)
    })
    .collect::<Result<Vec<String>, DataError>>()?;

  let mut bytes = values.join("\\").into_bytes();

  if bytes.len() % 2 == 1 {
    bytes.push(0x20);
  }

  Ok(bytes)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_bytes_test() {
    assert_eq!(from_bytes(&[]), Ok(vec![]));

    assert_eq!(from_bytes(b"0.625\\0.625 "), Ok(vec![0.625, 0.625]));

    assert_eq!(from_bytes(b"1.25"), Ok(vec![1.25]));

    assert_eq!(
      from_bytes(b"abc"),
      Err(DataError::new_value_invalid(
        "DecimalString is invalid: 'abc'".to_string()
      ))
    );
  }

  #[test]
  fn to_bytes_test() {
    assert_eq!(to_bytes(&[]), Ok(b"".to_vec()));

    assert_eq!(to_bytes(&[1.25]), Ok(b"1.25".to_vec()));

    assert_eq!(to_bytes(&[0.625, 0.625]), Ok(b"0.625\\0.625 ".to_vec()));

    assert_eq!(to_bytes(&[-0.0001]), Ok(b"-1e-4 ".to_vec()));

    assert_eq!(
      to_bytes(&[1.0000000000000002]),
      Err(DataError::new_value_invalid(
        "DecimalString value does not fit in 16 characters: \
         '1.0000000000000002'"
          .to_string()
      ))
    );
  }
}
