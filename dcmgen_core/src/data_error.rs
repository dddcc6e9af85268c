//! Provides the [`DataError`] type that describes the errors that can occur
//! when working with data sets and data elements.

use crate::{dictionary, DataElementTag, ValueRepresentation};

/// An error that occurred when retrieving or creating data elements in data
/// sets. An error can be one of the following types:
///
/// 1. **Tag not present**. When retrieving a value, the requested tag was not
///    present in the data set.
///
/// 2. **Value not present**. When retrieving a value, the requested type is
///    not present. E.g. tried to retrieve an integer value when the data
///    element value contains a string.
///
/// 3. **Multiplicity mismatch**. When creating a value, it did not have the
///    multiplicity required by its dictionary entry.
///
/// 4. **Value invalid**. When creating a value, the supplied input was not
///    valid for the type of data element being created.
///
/// 5. **Value length invalid**. When creating a value, the supplied data did
///    not meet a required length constraint for the value representation.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DataError(RawDataError);

#[derive(Clone, Debug, PartialEq)]
enum RawDataError {
  TagNotPresent {
    tag: Option<DataElementTag>,
  },
  ValueNotPresent {
    tag: Option<DataElementTag>,
  },
  MultiplicityMismatch {
    tag: Option<DataElementTag>,
  },
  ValueInvalid {
    details: String,
    tag: Option<DataElementTag>,
  },
  ValueLengthInvalid {
    vr: ValueRepresentation,
    length: usize,
    details: String,
    tag: Option<DataElementTag>,
  },
}

impl std::fmt::Display for DataError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let error = match &self.0 {
      RawDataError::TagNotPresent { .. }
      | RawDataError::ValueNotPresent { .. }
      | RawDataError::MultiplicityMismatch { .. } => self.name().to_string(),
      RawDataError::ValueInvalid { details, .. }
      | RawDataError::ValueLengthInvalid { details, .. } => {
        format!("{}, details: {}", self.name(), details)
      }
    };

    write!(f, "DICOM data error: {}", error)
  }
}

impl DataError {
  /// Constructs a new 'Tag not present' data error.
  ///
  pub fn new_tag_not_present() -> Self {
    Self(RawDataError::TagNotPresent { tag: None })
  }

  /// Constructs a new 'Value not present' data error.
  ///
  pub fn new_value_not_present() -> Self {
    Self(RawDataError::ValueNotPresent { tag: None })
  }

  /// Constructs a new 'Multiplicity mismatch' data error.
  ///
  pub fn new_multiplicity_mismatch() -> Self {
    Self(RawDataError::MultiplicityMismatch { tag: None })
  }

  /// Constructs a new 'Value invalid' data error.
  ///
  pub fn new_value_invalid(details: String) -> Self {
    Self(RawDataError::ValueInvalid { details, tag: None })
  }

  /// Constructs a new 'Value length invalid' data error.
  ///
  pub fn new_value_length_invalid(
    vr: ValueRepresentation,
    length: usize,
    details: String,
  ) -> Self {
    Self(RawDataError::ValueLengthInvalid {
      vr,
      length,
      details,
      tag: None,
    })
  }

  /// Adds the tag of the data element that a data error relates to. This
  /// should be included wherever possible to make troubleshooting easier.
  ///
  pub fn with_tag(self, tag: DataElementTag) -> Self {
    let tag = Some(tag);

    match self.0 {
      RawDataError::TagNotPresent { .. } => {
        Self(RawDataError::TagNotPresent { tag })
      }
      RawDataError::ValueNotPresent { .. } => {
        Self(RawDataError::ValueNotPresent { tag })
      }
      RawDataError::MultiplicityMismatch { .. } => {
        Self(RawDataError::MultiplicityMismatch { tag })
      }
      RawDataError::ValueInvalid { details, .. } => {
        Self(RawDataError::ValueInvalid { details, tag })
      }
      RawDataError::ValueLengthInvalid {
        vr,
        length,
        details,
        ..
      } => Self(RawDataError::ValueLengthInvalid {
        vr,
        length,
        details,
        tag,
      }),
    }
  }

  /// Returns the name of a data error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match &self.0 {
      RawDataError::TagNotPresent { .. } => "Tag not present",
      RawDataError::ValueNotPresent { .. } => "Value not present",
      RawDataError::MultiplicityMismatch { .. } => "Multiplicity mismatch",
      RawDataError::ValueInvalid { .. } => "Invalid value",
      RawDataError::ValueLengthInvalid { .. } => "Invalid value length",
    }
  }
}

impl crate::DcmgenError for DataError {
  /// Returns lines of text that describe a DICOM data error in a
  /// human-readable format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("DICOM data error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    match &self.0 {
      RawDataError::TagNotPresent { tag: Some(tag) }
      | RawDataError::ValueNotPresent { tag: Some(tag) }
      | RawDataError::MultiplicityMismatch { tag: Some(tag) }
      | RawDataError::ValueInvalid { tag: Some(tag), .. }
      | RawDataError::ValueLengthInvalid { tag: Some(tag), .. } => {
        lines.push(format!("  Tag: {}", tag));
        lines.push(format!("  Name: {}", dictionary::tag_name(*tag)));
      }
      _ => (),
    };

    match &self.0 {
      RawDataError::ValueInvalid { details, .. } => {
        lines.push(format!("  Details: {}", details))
      }
      RawDataError::ValueLengthInvalid {
        vr,
        length,
        details,
        ..
      } => {
        lines.push(format!("  VR: {}", vr));
        lines.push(format!("  Length: {} bytes", length));
        lines.push(format!("  Details: {}", details));
      }
      _ => (),
    };

    lines
  }
}
