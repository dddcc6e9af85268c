//! Work with the DICOM `Time` value representation.

use crate::DataError;

/// A structured time that can be converted to a `Time` data element value.
/// The minute and second components are optional, but a second value is only
/// permitted when a minute value is present.
///
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredTime {
  pub hour: u8,
  pub minute: Option<u8>,
  pub second: Option<f64>,
}

impl StructuredTime {
  /// Converts a structured time to a `Time` value.
  ///
  pub fn to_bytes(&self) -> Result<Vec<u8>, DataError> {
    Ok(self.to_time_string()?.into_bytes())
  }

  /// Returns the string value of a structured time, formatted as `HHMMSS`
  /// with an optional fractional second part.
  ///
  pub fn to_time_string(&self) -> Result<String, DataError> {
    let has_second_without_minute =
      self.second.is_some() && self.minute.is_none();
    if has_second_without_minute {
      return Err(DataError::new_value_invalid(
        "Time minute value must be present when there is a second value"
          .to_string(),
      ));
    }

    if self.hour > 23 {
      return Err(DataError::new_value_invalid(format!(
        "Time hour value is invalid: {}",
        self.hour
      )));
    }

    let hour = format!("{:02}", self.hour);

    let minute = match self.minute {
      Some(minute) => {
        if minute > 59 {
          return Err(DataError::new_value_invalid(format!(
            "Time minute value is invalid: {}",
            minute
          )));
        }

        format!("{:02}", minute)
      }

      None => "".to_string(),
    };

    // A second value of exactly 60 is permitted in order to accommodate leap
    // seconds
    let second = match self.second {
      Some(second) => {
        if !(0.0..=60.0).contains(&second) {
          return Err(DataError::new_value_invalid(format!(
            "Time second value is invalid: {}",
            second
          )));
        }

        Self::format_second(second)
      }

      None => "".to_string(),
    };

    Ok(format!("{}{}{}", hour, minute, second))
  }

  /// Formats a second value as two integral digits followed by up to six
  /// fractional digits, with trailing zeros removed.
  ///
  fn format_second(second: f64) -> String {
    if second.fract() == 0.0 {
      format!("{:02}", second as u8)
    } else {
      format!("{:09.6}", second)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
    }
  }
}
