//! Writes data sets out to the DICOM Part 10 (P10) binary format used to
//! store and transmit DICOM-based medical imaging information.

pub mod p10_error;
pub mod p10_token;
pub mod p10_write;
pub mod p10_write_config;
pub mod uids;

mod internal;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use dcmgen_core::DataSet;

pub use p10_error::P10Error;
pub use p10_token::P10Token;
pub use p10_write_config::P10WriteConfig;

/// Writes a data set to a DICOM P10 file.
///
pub fn write_file<P: AsRef<Path>>(
  filename: P,
  data_set: &DataSet,
  config: Option<P10WriteConfig>,
) -> Result<(), P10Error> {
  let mut file = File::create(filename).map_err(|e| P10Error::FileError {
    when: "Opening file".to_string(),
    details: e.to_string(),
  })?;

  write_stream(&mut file, data_set, config)
}

/// Writes a data set as DICOM P10 bytes directly to a write stream.
///
pub fn write_stream(
  stream: &mut dyn Write,
  data_set: &DataSet,
  config: Option<P10WriteConfig>,
) -> Result<(), P10Error> {
  let config = config.unwrap_or_default();

  let tokens = p10_write::data_set_to_tokens(data_set, &config)?;

  for token in tokens {
    let bytes = p10_write::token_to_bytes(&token)?;

    stream
      .write_all(&bytes)
      .map_err(|e| P10Error::FileError {
        when: "Writing DICOM P10 data to stream".to_string(),
        details: e.to_string(),
      })?;
  }

  stream.flush().map_err(|e| P10Error::FileError {
    when: "Writing DICOM P10 data to stream".to_string(),
    details: e.to_string(),
  })
}

/// Converts a data set to in-memory DICOM P10 bytes.
///
pub fn data_set_to_bytes(
  data_set: &DataSet,
  config: Option<P10WriteConfig>,
) -> Result<Vec<u8>, P10Error> {
  let mut bytes = vec![];
  write_stream(&mut bytes, data_set, config)?;

  Ok(bytes)
}

/// Adds DICOM P10 serialization functions onto [`DataSet`].
///
pub trait DataSetP10Extensions
where
  Self: Sized,
{
  /// Writes this data set to a DICOM P10 file.
  ///
  fn write_p10_file<P: AsRef<Path>>(
    &self,
    filename: P,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error>;

  /// Writes this data set as DICOM P10 bytes directly to a write stream.
  ///
  fn write_p10_stream(
    &self,
    stream: &mut dyn Write,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error>;

  /// Converts this data set to in-memory DICOM P10 bytes.
  ///
  fn to_p10_bytes(
    &self,
    config: Option<P10WriteConfig>,
  ) -> Result<Vec<u8>, P10Error>;
}

impl DataSetP10Extensions for DataSet {
  fn write_p10_file<P: AsRef<Path>>(
    &self,
    filename: P,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error> {
    write_file(filename, self, config)
  }

  fn write_p10_stream(
    &self,
    stream: &mut dyn Write,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error> {
    write_stream(stream, self, config)
  }

  fn to_p10_bytes(
    &self,
    config: Option<P10WriteConfig>,
  ) -> Result<Vec<u8>, P10Error> {
    data_set_to_bytes(self, config)
  }
}
