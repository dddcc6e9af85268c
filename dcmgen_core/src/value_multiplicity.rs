//! DICOM value multiplicity.

/// Describes DICOM value multiplicity, where the multiplicity is the number of
/// values that are allowed to be present in a data element. The `min` value is
/// always at least 1, and the maximum (if applicable) will always be greater
/// than or equal to `min`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ValueMultiplicity {
  pub min: u32,
  pub max: Option<u32>,
}

impl ValueMultiplicity {
  /// Returns whether the given number of values is allowed by this value
  /// multiplicity.
  ///
  pub fn contains(&self, count: usize) -> bool {
    count as u64 >= self.min as u64
      && match self.max {
        Some(max) => count as u64 <= max as u64,
        None => true,
      }
  }
}

impl std::fmt::Display for ValueMultiplicity {
  /// Returns a value multiplicity as a human-readable string, e.g. "1-3", or
  /// "2-n".
  ///
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    if self.min == 1 && self.max == Some(1) {
      return write!(f, "1");
    }

    let max = match self.max {
      Some(max) => max.to_string(),
      None => "n".to_string(),
    };

    write!(f, "{}-{}", self.min, max)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn contains_test() {
    let vm = ValueMultiplicity {
      min: 1,
      max: Some(1),
    };
    assert!(vm.contains(1));
    assert!(!vm.contains(0));
    assert!(!vm.contains(2));

    let vm = ValueMultiplicity { min: 2, max: None };
    assert!(vm.contains(2));
    assert!(vm.contains(100));
    assert!(!vm.contains(1));
  }

  #[test]
  fn to_string_test() {
    assert_eq!(
      ValueMultiplicity {
        min: 1,
        max: Some(1)
      }
      .to_string(),
      "1"
    );

    assert_eq!(
      ValueMultiplicity {
        min: 2,
        max: Some(2)
      }
      .to_string(),
      "2-2"
    );

    assert_eq!(ValueMultiplicity { min: 1, max: None }.to_string(), "1-n");
  }
}
