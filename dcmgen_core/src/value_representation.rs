//! DICOM value representations (VRs).
//!
//! See [section 6.2](https://dicom.nema.org/medical/dicom/current/output/chtml/part05/sect_6.2.html)
//! of the DICOM specification for VR definitions.

/// All DICOM value representations (VRs).
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueRepresentation {
  AgeString,
  ApplicationEntity,
  AttributeTag,
  CodeString,
  Date,
  DateTime,
  DecimalString,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  ShortText,
  SignedLong,
  SignedShort,
  SignedVeryLong,
  Time,
  UniqueIdentifier,
  UniversalResourceIdentifier,
  Unknown,
  UnlimitedCharacters,
  UnlimitedText,
  UnsignedLong,
  UnsignedShort,
  UnsignedVeryLong,
}

/// The restrictions that apply to the length of a value representation's data.
/// These restrictions are defined by the DICOM specification, and are enforced
/// when creating new values.
///
/// The restrictions are:
///
/// 1. The maximum number of bytes a value can have.
///
/// 2. Optionally, a number that the number of bytes must be an exact multiple
///    of.
///
/// 3. Optionally, for string-valued VRs, a limit on the number of characters
///    in the string. In multi-valued string VRs this limit applies to each
///    value individually.
///
#[derive(Debug, PartialEq)]
pub struct LengthRequirements {
  pub bytes_max: usize,
  pub bytes_multiple_of: Option<usize>,
  pub string_characters_max: Option<usize>,
}

impl std::fmt::Display for ValueRepresentation {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(unsafe { std::str::from_utf8_unchecked(&self.to_bytes()) })
  }
}

impl ValueRepresentation {
  /// Converts a value representation to its two-byte character representation.
  ///
  pub fn to_bytes(&self) -> [u8; 2] {
    *match self {
      ValueRepresentation::AgeString => b"AS",
      ValueRepresentation::ApplicationEntity => b"AE",
      ValueRepresentation::AttributeTag => b"AT",
      ValueRepresentation::CodeString => b"CS",
      ValueRepresentation::Date => b"DA",
      ValueRepresentation::DateTime => b"DT",
      ValueRepresentation::DecimalString => b"DS",
      ValueRepresentation::FloatingPointDouble => b"FD",
      ValueRepresentation::FloatingPointSingle => b"FL",
      ValueRepresentation::IntegerString => b"IS",
      ValueRepresentation::LongString => b"LO",
      ValueRepresentation::LongText => b"LT",
      ValueRepresentation::OtherByteString => b"OB",
      ValueRepresentation::OtherDoubleString => b"OD",
      ValueRepresentation::OtherFloatString => b"OF",
      ValueRepresentation::OtherLongString => b"OL",
      ValueRepresentation::OtherVeryLongString => b"OV",
      ValueRepresentation::OtherWordString => b"OW",
      ValueRepresentation::PersonName => b"PN",
      ValueRepresentation::Sequence => b"SQ",
      ValueRepresentation::ShortString => b"SH",
      ValueRepresentation::ShortText => b"ST",
      ValueRepresentation::SignedLong => b"SL",
      ValueRepresentation::SignedShort => b"SS",
      ValueRepresentation::SignedVeryLong => b"SV",
      ValueRepresentation::Time => b"TM",
      ValueRepresentation::UniqueIdentifier => b"UI",
      ValueRepresentation::UniversalResourceIdentifier => b"UR",
      ValueRepresentation::Unknown => b"UN",
      ValueRepresentation::UnlimitedCharacters => b"UC",
      ValueRepresentation::UnlimitedText => b"UT",
      ValueRepresentation::UnsignedLong => b"UL",
      ValueRepresentation::UnsignedShort => b"US",
      ValueRepresentation::UnsignedVeryLong => b"UV",
    }
  }

  /// Returns whether a value representation stores string data.
  ///
  pub fn is_string(self) -> bool {
    self == ValueRepresentation::AgeString
      || self == ValueRepresentation::ApplicationEntity
      || self == ValueRepresentation::CodeString
      || self == ValueRepresentation::Date
      || self == ValueRepresentation::DateTime
      || self == ValueRepresentation::DecimalString
      || self == ValueRepresentation::IntegerString
      || self == ValueRepresentation::LongString
      || self == ValueRepresentation::LongText
      || self == ValueRepresentation::PersonName
      || self == ValueRepresentation::ShortString
      || self == ValueRepresentation::ShortText
      || self == ValueRepresentation::Time
      || self == ValueRepresentation::UniqueIdentifier
      || self == ValueRepresentation::UniversalResourceIdentifier
      || self == ValueRepresentation::UnlimitedCharacters
      || self == ValueRepresentation::UnlimitedText
  }

  /// Returns whether a value representation stores string data that is UTF-8
  /// encoded and can therefore store any Unicode codepoint.
  ///
  pub fn is_encoded_string(self) -> bool {
    self == ValueRepresentation::LongString
      || self == ValueRepresentation::LongText
      || self == ValueRepresentation::PersonName
      || self == ValueRepresentation::ShortString
      || self == ValueRepresentation::ShortText
      || self == ValueRepresentation::UnlimitedCharacters
      || self == ValueRepresentation::UnlimitedText
  }

  /// Appends the correct padding byte for the given value representation if
  /// the bytes are not of even length.
  ///
  pub fn pad_bytes_to_even_length(self, bytes: &mut Vec<u8>) {
    if bytes.len() % 2 == 0 {
      return;
    }

    // UI uses a zero byte as padding
    if self == ValueRepresentation::UniqueIdentifier {
      bytes.push(0);
    }
    // String values use a space as padding. The rest do not use any padding.
    else if self.is_string() {
      bytes.push(0x20);
    }
  }

  /// Returns the length requirements for a value representation. See the
  /// [`LengthRequirements`] type for details.
  ///
  pub fn length_requirements(self) -> LengthRequirements {
    let (bytes_max, bytes_multiple_of, string_characters_max) = match self {
      ValueRepresentation::AgeString => (4, None, None),
      ValueRepresentation::ApplicationEntity => (16, None, None),
      ValueRepresentation::AttributeTag => (0xFFFC, Some(4), None),
      ValueRepresentation::CodeString => (0xFFFE, None, Some(16)),
      ValueRepresentation::Date => (8, None, None),
      ValueRepresentation::DateTime => (26, None, None),
      ValueRepresentation::DecimalString => (0xFFFE, None, Some(16)),
      ValueRepresentation::FloatingPointDouble => (0xFFF8, Some(8), None),
      ValueRepresentation::FloatingPointSingle => (0xFFFC, Some(4), None),
      ValueRepresentation::IntegerString => (0xFFFE, None, Some(12)),
      ValueRepresentation::LongString => (0xFFFE, None, Some(64)),
      ValueRepresentation::LongText => (0xFFFE, None, Some(10_240)),
      ValueRepresentation::OtherByteString => (0xFFFFFFFE, Some(2), None),
      ValueRepresentation::OtherDoubleString => (0xFFFFFFF8, Some(8), None),
      ValueRepresentation::OtherFloatString => (0xFFFFFFFC, Some(4), None),
      ValueRepresentation::OtherLongString => (0xFFFFFFFC, Some(4), None),
      ValueRepresentation::OtherVeryLongString => (0xFFFFFFF8, Some(8), None),
      ValueRepresentation::OtherWordString => (0xFFFFFFFE, Some(2), None),
      ValueRepresentation::PersonName => (0xFFFE, None, Some(324)),
      ValueRepresentation::Sequence => (0, None, None),
      ValueRepresentation::ShortString => (0xFFFE, None, Some(16)),
      ValueRepresentation::ShortText => (0xFFFE, None, Some(1024)),
      ValueRepresentation::SignedLong => (0xFFFC, Some(4), None),
      ValueRepresentation::SignedShort => (0xFFFE, Some(2), None),
      ValueRepresentation::SignedVeryLong => (0xFFFFFFF8, Some(8), None),
      ValueRepresentation::Time => (14, None, None),
      ValueRepresentation::UniqueIdentifier => (0xFFFE, None, Some(64)),
      ValueRepresentation::UniversalResourceIdentifier => {
        (0xFFFFFFFE, None, None)
      }
      ValueRepresentation::Unknown => (0xFFFFFFFE, None, None),
      ValueRepresentation::UnlimitedCharacters => (0xFFFFFFFE, None, None),
      ValueRepresentation::UnlimitedText => (0xFFFFFFFE, None, None),
      ValueRepresentation::UnsignedLong => (0xFFFC, Some(4), None),
      ValueRepresentation::UnsignedShort => (0xFFFE, Some(2), None),
      ValueRepresentation::UnsignedVeryLong => (0xFFF8, Some(8), None),
    };

    LengthRequirements {
      bytes_max,
      bytes_multiple_of,
      string_characters_max,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_string_test() {
    assert_eq!(ValueRepresentation::CodeString.to_string(), "CS");
    assert_eq!(ValueRepresentation::OtherWordString.to_string(), "OW");
    assert_eq!(ValueRepresentation::UniqueIdentifier.to_string(), "UI");
  }

  #[test]
  fn is_string_test() {
    assert!(ValueRepresentation::LongString.is_string());
    assert!(ValueRepresentation::Date.is_string());

    assert!(!ValueRepresentation::UnsignedShort.is_string());
    assert!(!ValueRepresentation::OtherWordString.is_string());
  }

  #[test]
  fn is_encoded_string_test() {
    assert!(ValueRepresentation::PersonName.is_encoded_string());

    assert!(!ValueRepresentation::UniqueIdentifier.is_encoded_string());
    assert!(!ValueRepresentation::CodeString.is_encoded_string());
  }

  #[test]
  fn pad_bytes_to_even_length_test() {
    let mut bytes = vec![];
    ValueRepresentation::LongString.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![]);

    let mut bytes = vec![0x41];
    ValueRepresentation::LongString.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![0x41, 0x20]);

    let mut bytes = vec![0x41];
    ValueRepresentation::UniqueIdentifier.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![0x41, 0x00]);

    let mut bytes = vec![0x41, 0x42];
    ValueRepresentation::OtherWordString.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![0x41, 0x42]);
  }

  #[test]
  fn length_requirements_test() {
    assert_eq!(
      ValueRepresentation::Date.length_requirements(),
      LengthRequirements {
        bytes_max: 8,
        bytes_multiple_of: None,
        string_characters_max: None,
      }
    );

    assert_eq!(
      ValueRepresentation::UnsignedShort.length_requirements(),
      LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: Some(2),
        string_characters_max: None,
      }
    );

    assert_eq!(
      ValueRepresentation::DecimalString.length_requirements(),
      LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: None,
        string_characters_max: Some(16),
      }
    );
  }
}
