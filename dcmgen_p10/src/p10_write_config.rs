pub use crate::uids;

/// Configuration used when writing DICOM P10 data.
///
#[derive(Clone, Debug, PartialEq)]
pub struct P10WriteConfig {
  pub(crate) implementation_class_uid: String,
  pub(crate) implementation_version_name: String,
}

impl Default for P10WriteConfig {
  fn default() -> Self {
    Self {
      implementation_class_uid: uids::DCMGEN_IMPLEMENTATION_CLASS_UID
        .to_string(),
      implementation_version_name: uids::DCMGEN_IMPLEMENTATION_VERSION_NAME
        .to_string(),
    }
  }
}

impl P10WriteConfig {
  /// The implementation class UID that will be included in the File Meta
  /// Information header of serialized DICOM P10 data.
  ///
  /// Defaults to the value of [`uids::DCMGEN_IMPLEMENTATION_CLASS_UID`].
  ///
  pub fn implementation_class_uid(mut self, value: String) -> Self {
    self.implementation_class_uid = value;
    self
  }

  /// The implementation version name that will be included in the File Meta
  /// Information header of serialized DICOM P10 data.
  ///
  /// Defaults to the value of [`uids::DCMGEN_IMPLEMENTATION_VERSION_NAME`].
  ///
  pub fn implementation_version_name(mut self, value: String) -> Self {
    self.implementation_version_name = value;
    self
  }
}
