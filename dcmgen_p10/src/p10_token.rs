//! Defines the various tokens of DICOM P10 data that are emitted when a data
//! set is converted to the DICOM P10 format by the `p10_write` module.

use std::rc::Rc;

use dcmgen_core::{DataElementTag, DataSet, ValueRepresentation};

use crate::internal::data_element_header::DataElementHeader;

/// A DICOM P10 token is the smallest piece of structured DICOM P10 data. A
/// stream of these tokens is the result of converting a data set into the
/// DICOM P10 format for transmission or serialization.
///
#[derive(Clone, Debug, PartialEq)]
pub enum P10Token {
  /// The 128-byte File Preamble and the "DICM" prefix, which are present at
  /// the start of DICOM P10 data. The content of the File Preamble's bytes
  /// are application-defined, and in many cases are unused and set to zero.
  FilePreambleAndDICMPrefix { preamble: Box<[u8; 128]> },

  /// The File Meta Information data set for the DICOM P10.
  FileMetaInformation { data_set: DataSet },

  /// The start of the next data element. This token is always followed by a
  /// [`P10Token::DataElementValueBytes`] token containing the value bytes for
  /// the data element.
  DataElementHeader {
    tag: DataElementTag,
    vr: ValueRepresentation,
    length: u32,
  },

  /// Raw data for the value of the current data element.
  DataElementValueBytes {
    tag: DataElementTag,
    vr: ValueRepresentation,
    data: Rc<Vec<u8>>,
  },

  /// The end of the DICOM P10 data has been reached.
  End,
}

impl std::fmt::Display for P10Token {
  /// Converts a DICOM P10 token to a human-readable string.
  ///
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let s = match self {
      P10Token::FilePreambleAndDICMPrefix { .. } => {
        "FilePreambleAndDICMPrefix".to_string()
      }

      P10Token::FileMetaInformation { data_set } => format!(
        "FileMetaInformation: {} data elements",
        data_set.size()
      ),

      P10Token::DataElementHeader { tag, vr, length } => format!(
        "DataElementHeader: {}, length: {} bytes",
        DataElementHeader {
          tag: *tag,
          vr: *vr,
          length: *length
        },
        length
      ),

      P10Token::DataElementValueBytes { data, .. } => {
        format!("DataElementValueBytes: {} bytes of data", data.len())
      }

      P10Token::End => "End".to_string(),
    };

    write!(f, "{}", s)
  }
}
