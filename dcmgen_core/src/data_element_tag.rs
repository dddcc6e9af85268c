//! A DICOM data element tag, defined as 16-bit `group` and `element` values.

/// A data element tag that is defined by `group` and `element` values, each of
/// which is a 16-bit unsigned integer.
///
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataElementTag {
  pub group: u16,
  pub element: u16,
}

impl std::fmt::Display for DataElementTag {
  /// Formats a data element tag as `"($GROUP,$ELEMENT)"`, e.g.`"(0008,0020)"`.
  ///
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "({:04X},{:04X})", self.group, self.element)
  }
}

impl DataElementTag {
  /// Creates a new data element tag with the given group and element values.
  ///
  pub const fn new(group: u16, element: u16) -> Self {
    Self { group, element }
  }

  /// Returns whether the tag is part of File Meta Information, which is
  /// determined by the group number equaling 2.
  ///
  pub fn is_file_meta_information(&self) -> bool {
    self.group == 0x0002
  }

  /// Converts a tag to a single 32-bit integer where the group is in the high
  /// 16 bits and the element is in the low 16 bits.
  ///
  pub fn to_int(&self) -> u32 {
    ((self.group as u32) << 16) | self.element as u32
  }
}
