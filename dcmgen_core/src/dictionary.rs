//! The subset of the DICOM data element dictionary used when generating CT
//! phantom files.
//!
//! Ref: PS3.6 6.

use crate::{DataElementTag, ValueMultiplicity, ValueRepresentation};

/// A single entry in the data element dictionary, holding the tag, display
/// name, allowed VRs, and value multiplicity of a data element.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
  pub tag: DataElementTag,
  pub name: &'static str,
  pub vrs: &'static [ValueRepresentation],
  pub multiplicity: ValueMultiplicity,
}

const fn item(
  group: u16,
  element: u16,
  name: &'static str,
  vrs: &'static [ValueRepresentation],
  min: u32,
  max: Option<u32>,
) -> Item {
  Item {
    tag: DataElementTag::new(group, element),
    name,
    vrs,
    multiplicity: ValueMultiplicity { min, max },
  }
}

pub const FILE_META_INFORMATION_GROUP_LENGTH: Item = item(
  0x0002,
  0x0000,
  "File Meta Information Group Length",
  &[ValueRepresentation::UnsignedLong],
  1,
  Some(1),
);

pub const FILE_META_INFORMATION_VERSION: Item = item(
  0x0002,
  0x0001,
  "File Meta Information Version",
  &[ValueRepresentation::OtherByteString],
  1,
  Some(1),
);

pub const MEDIA_STORAGE_SOP_CLASS_UID: Item = item(
  0x0002,
  0x0002,
  "Media Storage SOP Class UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Item = item(
  0x0002,
  0x0003,
  "Media Storage SOP Instance UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const TRANSFER_SYNTAX_UID: Item = item(
  0x0002,
  0x0010,
  "Transfer Syntax UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const IMPLEMENTATION_CLASS_UID: Item = item(
  0x0002,
  0x0012,
  "Implementation Class UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const IMPLEMENTATION_VERSION_NAME: Item = item(
  0x0002,
  0x0013,
  "Implementation Version Name",
  &[ValueRepresentation::ShortString],
  1,
  Some(1),
);

pub const SOP_CLASS_UID: Item = item(
  0x0008,
  0x0016,
  "SOP Class UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const SOP_INSTANCE_UID: Item = item(
  0x0008,
  0x0018,
  "SOP Instance UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const STUDY_DATE: Item = item(
  0x0008,
  0x0020,
  "Study Date",
  &[ValueRepresentation::Date],
  1,
  Some(1),
);

pub const STUDY_TIME: Item = item(
  0x0008,
  0x0030,
  "Study Time",
  &[ValueRepresentation::Time],
  1,
  Some(1),
);

pub const MODALITY: Item = item(
  0x0008,
  0x0060,
  "Modality",
  &[ValueRepresentation::CodeString],
  1,
  Some(1),
);

pub const MANUFACTURER: Item = item(
  0x0008,
  0x0070,
  "Manufacturer",
  &[ValueRepresentation::LongString],
  1,
  Some(1),
);

pub const STUDY_DESCRIPTION: Item = item(
  0x0008,
  0x1030,
  "Study Description",
  &[ValueRepresentation::LongString],
  1,
  Some(1),
);

pub const SERIES_DESCRIPTION: Item = item(
  0x0008,
  0x103E,
  "Series Description",
  &[ValueRepresentation::LongString],
  1,
  Some(1),
);

pub const PATIENT_NAME: Item = item(
  0x0010,
  0x0010,
  "Patient's Name",
  &[ValueRepresentation::PersonName],
  1,
  Some(1),
);

pub const PATIENT_ID: Item = item(
  0x0010,
  0x0020,
  "Patient ID",
  &[ValueRepresentation::LongString],
  1,
  Some(1),
);

pub const PATIENT_BIRTH_DATE: Item = item(
  0x0010,
  0x0030,
  "Patient's Birth Date",
  &[ValueRepresentation::Date],
  1,
  Some(1),
);

pub const PATIENT_SEX: Item = item(
  0x0010,
  0x0040,
  "Patient's Sex",
  &[ValueRepresentation::CodeString],
  1,
  Some(1),
);

pub const SLICE_THICKNESS: Item = item(
  0x0018,
  0x0050,
  "Slice Thickness",
  &[ValueRepresentation::DecimalString],
  1,
  Some(1),
);

pub const STUDY_INSTANCE_UID: Item = item(
  0x0020,
  0x000D,
  "Study Instance UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const SERIES_INSTANCE_UID: Item = item(
  0x0020,
  0x000E,
  "Series Instance UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const SERIES_NUMBER: Item = item(
  0x0020,
  0x0011,
  "Series Number",
  &[ValueRepresentation::IntegerString],
  1,
  Some(1),
);

pub const INSTANCE_NUMBER: Item = item(
  0x0020,
  0x0013,
  "Instance Number",
  &[ValueRepresentation::IntegerString],
  1,
  Some(1),
);

pub const FRAME_OF_REFERENCE_UID: Item = item(
  0x0020,
  0x0052,
  "Frame of Reference UID",
  &[ValueRepresentation::UniqueIdentifier],
  1,
  Some(1),
);

pub const SAMPLES_PER_PIXEL: Item = item(
  0x0028,
  0x0002,
  "Samples per Pixel",
  &[ValueRepresentation::UnsignedShort],
  1,
  Some(1),
);

pub const PHOTOMETRIC_INTERPRETATION: Item = item(
  0x0028,
  0x0004,
  "Photometric Interpretation",
  &[ValueRepresentation::CodeString],
  1,
  Some(1),
);

pub const ROWS: Item = item(
  0x0028,
  0x0010,
  "Rows",
  &[ValueRepresentation::UnsignedShort],
  1,
  Some(1),
);

pub const COLUMNS: Item = item(
  0x0028,
  0x0011,
  "Columns",
  &[ValueRepresentation::UnsignedShort],
  1,
  Some(1),
);

pub const PIXEL_SPACING: Item = item(
  0x0028,
  0x0030,
  "Pixel Spacing",
  &[ValueRepresentation::DecimalString],
  2,
  Some(2),
);

pub const BITS_ALLOCATED: Item = item(
  0x0028,
  0x0100,
  "Bits Allocated",
  &[ValueRepresentation::UnsignedShort],
  1,
  Some(1),
);

pub const BITS_STORED: Item = item(
  0x0028,
  0x0101,
  "Bits Stored",
  &[ValueRepresentation::UnsignedShort],
  1,
  Some(1),
);

pub const HIGH_BIT: Item = item(
  0x0028,
  0x0102,
  "High Bit",
  &[ValueRepresentation::UnsignedShort],
  1,
  Some(1),
);

pub const PIXEL_REPRESENTATION: Item = item(
  0x0028,
  0x0103,
  "Pixel Representation",
  &[ValueRepresentation::UnsignedShort],
  1,
  Some(1),
);

pub const PIXEL_DATA: Item = item(
  0x7FE0,
  0x0010,
  "Pixel Data",
  &[
    ValueRepresentation::OtherByteString,
    ValueRepresentation::OtherWordString,
  ],
  1,
  Some(1),
);

/// All dictionary entries known to this library, in ascending tag order.
///
pub const ALL_ITEMS: [&Item; 35] = [
  &FILE_META_INFORMATION_GROUP_LENGTH,
  &FILE_META_INFORMATION_VERSION,
  &MEDIA_STORAGE_SOP_CLASS_UID,
  &MEDIA_STORAGE_SOP_INSTANCE_UID,
  &TRANSFER_SYNTAX_UID,
  &IMPLEMENTATION_CLASS_UID,
  &IMPLEMENTATION_VERSION_NAME,
  &SOP_CLASS_UID,
  &SOP_INSTANCE_UID,
  &STUDY_DATE,
  &STUDY_TIME,
  &MODALITY,
  &MANUFACTURER,
  &STUDY_DESCRIPTION,
  &SERIES_DESCRIPTION,
  &PATIENT_NAME,
  &PATIENT_ID,
  &PATIENT_BIRTH_DATE,
  &PATIENT_SEX,
  &SLICE_THICKNESS,
  &STUDY_INSTANCE_UID,
  &SERIES_INSTANCE_UID,
  &SERIES_NUMBER,
  &INSTANCE_NUMBER,
  &FRAME_OF_REFERENCE_UID,
  &SAMPLES_PER_PIXEL,
  &PHOTOMETRIC_INTERPRETATION,
  &ROWS,
  &COLUMNS,
  &PIXEL_SPACING,
  &BITS_ALLOCATED,
  &BITS_STORED,
  &HIGH_BIT,
  &PIXEL_REPRESENTATION,
  &PIXEL_DATA,
];

/// Returns the display name for a data element tag, or `"unknown_tag"` if the
/// tag isn't in the dictionary.
///
pub fn tag_name(tag: DataElementTag) -> &'static str {
  for entry in ALL_ITEMS {
    if entry.tag == tag {
      return entry.name;
    }
  }

  "unknown_tag"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tag_name_test() {
    assert_eq!(tag_name(ROWS.tag), "Rows");
    assert_eq!(tag_name(PIXEL_DATA.tag), "Pixel Data");
    assert_eq!(tag_name(DataElementTag::new(0x1234, 0x5678)), "unknown_tag");
  }

  #[test]
  fn all_items_are_in_ascending_tag_order_test() {
    for window in ALL_ITEMS.windows(2) {
      assert!(window[0].tag < window[1].tag);
    }
  }
}
