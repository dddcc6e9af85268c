//! Describes a single synthetic axial CT image and converts it to a DICOM
//! data set ready for serialization.

use chrono::{Datelike, Timelike};

use dcmgen_core::data_element_value::unique_identifier;
use dcmgen_core::{
  dictionary, DataElementValue, DataError, DataSet, PersonNameComponents,
  StructuredDate, StructuredPersonName, StructuredTime,
};
use dcmgen_p10::uids;

use crate::phantom;

/// A single synthetic axial CT image of a circular phantom, along with the
/// patient, study, and series details it belongs to.
///
pub struct CtImage {
  pub sop_instance_uid: String,
  pub study_instance_uid: String,
  pub series_instance_uid: String,
  pub frame_of_reference_uid: String,
  pub study_date: StructuredDate,
  pub study_time: StructuredTime,
  pub rows: u16,
  pub columns: u16,
  pub pixel_data: Vec<i16>,
}

impl CtImage {
  /// Creates a new CT image of the given size with freshly generated UIDs, a
  /// study date and time of now, and synthesized phantom pixel data.
  ///
  pub fn new(rows: u16, columns: u16) -> Result<Self, DataError> {
    let now = chrono::Local::now();

    let study_date = StructuredDate {
      year: now.year() as u16,
      month: now.month() as u8,
      day: now.day() as u8,
    };

    let study_time = StructuredTime {
      hour: now.hour() as u8,
      minute: Some(now.minute() as u8),
      second: Some(now.second() as f64),
    };

    let pixel_data = phantom::synthesize_grid(
      usize::from(rows),
      usize::from(columns),
      &mut rand::thread_rng(),
    );

    Ok(Self {
      sop_instance_uid: new_uid()?,
      study_instance_uid: new_uid()?,
      series_instance_uid: new_uid()?,
      frame_of_reference_uid: new_uid()?,
      study_date,
      study_time,
      rows,
      columns,
      pixel_data,
    })
  }

  /// Converts a CT image to a data set holding all of its data elements,
  /// ready to be serialized to the DICOM P10 format.
  ///
  pub fn into_data_set(self) -> Result<DataSet, DataError> {
    let mut data_set = DataSet::new();

    data_set.insert_string_value(
      &dictionary::SOP_CLASS_UID,
      &[uids::CT_IMAGE_STORAGE_SOP_CLASS_UID],
    )?;
    data_set.insert_string_value(
      &dictionary::SOP_INSTANCE_UID,
      &[self.sop_instance_uid.as_str()],
    )?;

    data_set.insert_person_name_value(
      &dictionary::PATIENT_NAME,
      &[StructuredPersonName {
        alphabetic: Some(PersonNameComponents {
          last_name: "John".to_string(),
          first_name: "oe".to_string(),
          ..Default::default()
        }),
        ideographic: None,
        phonetic: None,
      }],
    )?;
    data_set.insert_string_value(&dictionary::PATIENT_ID, &["123456"])?;
    data_set.insert_date_value(
      &dictionary::PATIENT_BIRTH_DATE,
      &StructuredDate {
        year: 1990,
        month: 1,
        day: 1,
      },
    )?;
    data_set.insert_string_value(&dictionary::PATIENT_SEX, &["M"])?;

    data_set.insert_date_value(&dictionary::STUDY_DATE, &self.study_date)?;
    data_set.insert_time_value(&dictionary::STUDY_TIME, &self.study_time)?;

    data_set.insert_string_value(&dictionary::MODALITY, &["CT"])?;
    data_set
      .insert_string_value(&dictionary::MANUFACTURER, &["TestManufacturer"])?;
    data_set.insert_string_value(
      &dictionary::STUDY_DESCRIPTION,
      &["CT Chest Study"],
    )?;
    data_set
      .insert_string_value(&dictionary::SERIES_DESCRIPTION, &["Axial CT"])?;

    data_set.insert_string_value(
      &dictionary::STUDY_INSTANCE_UID,
      &[self.study_instance_uid.as_str()],
    )?;
    data_set.insert_string_value(
      &dictionary::SERIES_INSTANCE_UID,
      &[self.series_instance_uid.as_str()],
    )?;
    data_set.insert_string_value(
      &dictionary::FRAME_OF_REFERENCE_UID,
      &[self.frame_of_reference_uid.as_str()],
    )?;

    data_set.insert_int_value(&dictionary::SERIES_NUMBER, &[1])?;
    data_set.insert_int_value(&dictionary::INSTANCE_NUMBER, &[1])?;

    data_set.insert_float_value(&dictionary::SLICE_THICKNESS, &[1.25])?;

    data_set.insert_int_value(&dictionary::SAMPLES_PER_PIXEL, &[1])?;
    data_set.insert_string_value(
      &dictionary::PHOTOMETRIC_INTERPRETATION,
      &["MONOCHROME2"],
    )?;
    data_set
      .insert_int_value(&dictionary::ROWS, &[i32::from(self.rows)])?;
    data_set
      .insert_int_value(&dictionary::COLUMNS, &[i32::from(self.columns)])?;
    data_set
      .insert_float_value(&dictionary::PIXEL_SPACING, &[0.625, 0.625])?;
    data_set.insert_int_value(&dictionary::BITS_ALLOCATED, &[16])?;
    data_set.insert_int_value(&dictionary::BITS_STORED, &[16])?;
    data_set.insert_int_value(&dictionary::HIGH_BIT, &[15])?;
    data_set.insert_int_value(&dictionary::PIXEL_REPRESENTATION, &[1])?;

    let pixel_data = DataElementValue::new_other_word_string(
      phantom::samples_to_bytes(&self.pixel_data),
    )
    .map_err(|e| e.with_tag(dictionary::PIXEL_DATA.tag))?;
    data_set.insert(dictionary::PIXEL_DATA.tag, pixel_data);

    Ok(data_set)
  }
}

/// Generates a new UID underneath the dcmgen root UID prefix.
///
fn new_uid() -> Result<String, DataError> {
  unique_identifier::new(uids::DCMGEN_ROOT_UID_PREFIX)
}

#[cfg(test)]
mod tests {
  use dcmgen_core::DataElementTag;
  use dcmgen_p10::DataSetP10Extensions;

  use super::*;

  #[test]
  fn into_data_set_test() {
    let image = CtImage::new(16, 16).unwrap();
    let study_instance_uid = image.study_instance_uid.clone();

    let data_set = image.into_data_set().unwrap();

    assert_eq!(data_set.size(), 28);

    assert_eq!(
      data_set.get_string(dictionary::SOP_CLASS_UID.tag),
      Ok("1.2.840.10008.5.1.4.1.1.2".to_string())
    );
    assert_eq!(
      data_set.get_string(dictionary::STUDY_INSTANCE_UID.tag),
      Ok(study_instance_uid)
    );
    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("John^oe".to_string())
    );
    assert_eq!(data_set.get_int(dictionary::ROWS.tag), Ok(16));
    assert_eq!(
      data_set.get_int(dictionary::PIXEL_REPRESENTATION.tag),
      Ok(1)
    );

    assert_eq!(
      data_set
        .get_value(dictionary::PIXEL_DATA.tag)
        .unwrap()
        .bytes()
        .len(),
      16 * 16 * 2
    );
  }

  #[test]
  fn serializes_every_data_element_test() {
    let image = CtImage::new(8, 8).unwrap();

    let sop_instance_uid = image.sop_instance_uid.clone();
    let study_instance_uid = image.study_instance_uid.clone();
    let series_instance_uid = image.series_instance_uid.clone();
    let frame_of_reference_uid = image.frame_of_reference_uid.clone();
    let study_date_bytes = image.study_date.to_bytes().unwrap();
    let study_time_bytes = image.study_time.to_bytes().unwrap();
    let pixel_data_bytes = phantom::samples_to_bytes(&image.pixel_data);

    let bytes = image
      .into_data_set()
      .unwrap()
      .to_p10_bytes(None)
      .unwrap();

    assert_eq!(bytes[0..128], [0u8; 128]);
    assert_eq!(&bytes[128..132], b"DICM");

    let mut offset = 132;

    // File Meta Information
    let (tag, vr, value) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag);
    assert_eq!(vr, "UL");
    let group_length =
      u32::from_le_bytes([value[0], value[1], value[2], value[3]]) as usize;

    let fmi_start = offset;

    let (tag, vr, value) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::FILE_META_INFORMATION_VERSION.tag);
    assert_eq!(vr, "OB");
    assert_eq!(value, [0x00, 0x01]);

    let (tag, _, value) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::MEDIA_STORAGE_SOP_CLASS_UID.tag);
    assert_eq!(value, b"1.2.840.10008.5.1.4.1.1.2\0");

    let (tag, _, value) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::MEDIA_STORAGE_SOP_INSTANCE_UID.tag);
    assert_eq!(value, sop_instance_uid.as_bytes());

    let (tag, _, value) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::TRANSFER_SYNTAX_UID.tag);
    assert_eq!(value, b"1.2.840.10008.1.2.1\0");

    let (tag, _, _) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::IMPLEMENTATION_CLASS_UID.tag);

    let (tag, vr, _) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::IMPLEMENTATION_VERSION_NAME.tag);
    assert_eq!(vr, "SH");

    assert_eq!(offset - fmi_start, group_length);

    // The main data set, in ascending tag order
    let expected: [(&dictionary::Item, &str, &[u8]); 27] = [
      (
        &dictionary::SOP_CLASS_UID,
        "UI",
        b"1.2.840.10008.5.1.4.1.1.2\0",
      ),
      (&dictionary::SOP_INSTANCE_UID, "UI", sop_instance_uid.as_bytes()),
      (&dictionary::STUDY_DATE, "DA", &study_date_bytes),
      (&dictionary::STUDY_TIME, "TM", &study_time_bytes),
      (&dictionary::MODALITY, "CS", b"CT"),
      (&dictionary::MANUFACTURER, "LO", b"TestManufacturer"),
      (&dictionary::STUDY_DESCRIPTION, "LO", b"CT Chest Study"),
      (&dictionary::SERIES_DESCRIPTION, "LO", b"Axial CT"),
      (&dictionary::PATIENT_NAME, "PN", b"John^oe "),
      (&dictionary::PATIENT_ID, "LO", b"123456"),
      (&dictionary::PATIENT_BIRTH_DATE, "DA", b"19900101"),
      (&dictionary::PATIENT_SEX, "CS", b"M "),
      (&dictionary::SLICE_THICKNESS, "DS", b"1.25"),
      (
        &dictionary::STUDY_INSTANCE_UID,
        "UI",
        study_instance_uid.as_bytes(),
      ),
      (
        &dictionary::SERIES_INSTANCE_UID,
        "UI",
        series_instance_uid.as_bytes(),
      ),
      (&dictionary::SERIES_NUMBER, "IS", b"1 "),
      (&dictionary::INSTANCE_NUMBER, "IS", b"1 "),
      (
        &dictionary::FRAME_OF_REFERENCE_UID,
        "UI",
        frame_of_reference_uid.as_bytes(),
      ),
      (&dictionary::SAMPLES_PER_PIXEL, "US", &[0x01, 0x00]),
      (&dictionary::PHOTOMETRIC_INTERPRETATION, "CS", b"MONOCHROME2 "),
      (&dictionary::ROWS, "US", &[0x08, 0x00]),
      (&dictionary::COLUMNS, "US", &[0x08, 0x00]),
      (&dictionary::PIXEL_SPACING, "DS", b"0.625\\0.625 "),
      (&dictionary::BITS_ALLOCATED, "US", &[0x10, 0x00]),
      (&dictionary::BITS_STORED, "US", &[0x10, 0x00]),
      (&dictionary::HIGH_BIT, "US", &[0x0F, 0x00]),
      (&dictionary::PIXEL_REPRESENTATION, "US", &[0x01, 0x00]),
    ];

    for (item, expected_vr, expected_value) in expected {
      let (tag, vr, value) = read_element(&bytes, &mut offset);
      assert_eq!(tag, item.tag);
      assert_eq!(vr, expected_vr);
      assert_eq!(value, expected_value);
    }

    let (tag, vr, value) = read_element(&bytes, &mut offset);
    assert_eq!(tag, dictionary::PIXEL_DATA.tag);
    assert_eq!(vr, "OW");
    assert_eq!(value.len(), 8 * 8 * 2);
    assert_eq!(value, pixel_data_bytes);

    assert_eq!(offset, bytes.len());
  }

  /// Reads the next 'Explicit VR Little Endian' data element out of the given
  /// bytes.
  ///
  fn read_element<'a>(
    bytes: &'a [u8],
    offset: &mut usize,
  ) -> (DataElementTag, String, &'a [u8]) {
    let tag =
      DataElementTag::new(read_u16(bytes, offset), read_u16(bytes, offset));

    let vr = String::from_utf8(bytes[*offset..*offset + 2].to_vec()).unwrap();
    *offset += 2;

    let length = match vr.as_str() {
      "OB" | "OW" => {
        *offset += 2;

        let length = u32::from_le_bytes(
          bytes[*offset..*offset + 4].try_into().unwrap(),
        ) as usize;
        *offset += 4;

        length
      }
      _ => usize::from(read_u16(bytes, offset)),
    };

    let value = &bytes[*offset..*offset + length];
    *offset += length;

    (tag, vr, value)
  }

  fn read_u16(bytes: &[u8], offset: &mut usize) -> u16 {
    let value = u16::from_le_bytes([bytes[*offset], bytes[*offset + 1]]);
    *offset += 2;

    value
  }

  #[test]
  fn generates_distinct_uids_test() {
    let a = CtImage::new(16, 16).unwrap();
    let b = CtImage::new(16, 16).unwrap();

    assert_ne!(a.sop_instance_uid, b.sop_instance_uid);
    assert_ne!(a.sop_instance_uid, a.study_instance_uid);
  }
}
