//! Work with the DICOM `Date` value representation.

use crate::DataError;

/// A structured date that can be converted to a `Date` value.
///
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredDate {
  pub year: u16,
  pub month: u8,
  pub day: u8,
}

impl StructuredDate {
  /// Converts a structured date to a `Date` value, formatted as `YYYYMMDD`.
  ///
  pub fn to_bytes(&self) -> Result<Vec<u8>, DataError> {
    if self.year > 9999 {
      return Err(DataError::new_value_invalid(format!(
        "Date's year is invalid: {}",
        self.year
      )));
    }

    if !(1..=12).contains(&self.month) {
      return Err(DataError::new_value_invalid(format!(
        "Date's month is invalid: {}",
        self.month
      )));
    }

    if !(1..=31).contains(&self.day) {
      return Err(DataError::new_value_invalid(format!(
        "Date's day is invalid: {}",
        self.day
      )));
    }

    Ok(
      format!("{:04}{:02}{:02}", self.year, self.month, self.day)
        .into_bytes(),
    )
  }
}
