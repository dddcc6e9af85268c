//! Defines the type used to describe errors that can occur when writing DICOM
//! P10 data.

use dcmgen_core::DataError;

/// An error that occurred when serializing or writing DICOM P10 data.
///
#[derive(Clone, Debug, PartialEq)]
pub enum P10Error {
  /// This error occurs when a DICOM P10 write is unable to serialize the data
  /// it is given, e.g. a data element value is too long to be expressed in
  /// the transfer syntax being written.
  DataInvalid { when: String, details: String },

  /// This error occurs when there is an error with an underlying file or file
  /// stream.
  FileError { when: String, details: String },
}

impl std::fmt::Display for P10Error {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "DICOM P10 error: {}", self.name())
  }
}

impl P10Error {
  /// Constructs a new [`P10Error::DataInvalid`] from a data error that
  /// occurred during the specified action.
  ///
  pub fn from_data_error(when: &str, error: DataError) -> Self {
    P10Error::DataInvalid {
      when: when.to_string(),
      details: error.to_string(),
    }
  }

  /// Returns the name of the error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      P10Error::DataInvalid { .. } => "Invalid data",
      P10Error::FileError { .. } => "File I/O failure",
    }
  }
}

impl dcmgen_core::DcmgenError for P10Error {
  /// Returns lines of text that describe a DICOM P10 error in a
  /// human-readable format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let (when, details) = match self {
      P10Error::DataInvalid { when, details }
      | P10Error::FileError { when, details } => (when, details),
    };

    vec![
      format!("DICOM P10 error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
      format!("  When: {}", when),
      format!("  Details: {}", details),
    ]
  }
}
