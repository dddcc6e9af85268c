//! Converts data sets into DICOM P10 tokens and serializes those tokens into
//! raw DICOM P10 bytes.

use byteorder::{ByteOrder, LittleEndian};

use dcmgen_core::{
  dictionary, transfer_syntax, DataElementTag, DataElementValue, DataSet,
  ValueRepresentation,
};

use crate::internal::data_element_header::{DataElementHeader, ValueLengthSize};
use crate::{P10Error, P10Token, P10WriteConfig};

/// Converts a data set directly to DICOM P10 tokens. The tokens are emitted
/// in the order they are serialized: the File Preamble and "DICM" prefix,
/// the File Meta Information, the main data set's data elements in ascending
/// tag order, and finally [`P10Token::End`].
///
pub fn data_set_to_tokens(
  data_set: &DataSet,
  config: &P10WriteConfig,
) -> Result<Vec<P10Token>, P10Error> {
  let mut tokens = vec![P10Token::FilePreambleAndDICMPrefix {
    preamble: Box::new([0; 128]),
  }];

  tokens.push(P10Token::FileMetaInformation {
    data_set: build_file_meta_information(data_set, config)?,
  });

  for (tag, value) in data_set.iter() {
    if tag.is_file_meta_information() {
      continue;
    }

    let vr = value.value_representation();
    let data = value.bytes().clone();

    let length = u32::try_from(data.len()).map_err(|_| {
      value_length_invalid_error(*tag, vr, data.len(), u64::from(u32::MAX))
    })?;

    tokens.push(P10Token::DataElementHeader {
      tag: *tag,
      vr,
      length,
    });
    tokens.push(P10Token::DataElementValueBytes {
      tag: *tag,
      vr,
      data,
    });
  }

  tokens.push(P10Token::End);

  Ok(tokens)
}

/// Returns the File Meta Information data set to serialize for the given main
/// data set. This takes the group 2 data elements present in the data set,
/// mirrors the SOP Class UID and SOP Instance UID into their Media Storage
/// counterparts, and sets the File Meta Information Version, the transfer
/// syntax, and the implementation details from the write config.
///
fn build_file_meta_information(
  data_set: &DataSet,
  config: &P10WriteConfig,
) -> Result<DataSet, P10Error> {
  let when = "Constructing File Meta Information";

  let mut fmi = data_set.file_meta_information();

  let fmi_version = DataElementValue::new_other_byte_string(vec![0x00, 0x01])
    .map_err(|e| {
      P10Error::from_data_error(
        when,
        e.with_tag(dictionary::FILE_META_INFORMATION_VERSION.tag),
      )
    })?;
  fmi.insert(dictionary::FILE_META_INFORMATION_VERSION.tag, fmi_version);

  fmi
    .insert_string_value(
      &dictionary::TRANSFER_SYNTAX_UID,
      &[transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid],
    )
    .map_err(|e| P10Error::from_data_error(when, e))?;

  fmi
    .insert_string_value(
      &dictionary::IMPLEMENTATION_CLASS_UID,
      &[config.implementation_class_uid.as_str()],
    )
    .map_err(|e| P10Error::from_data_error(when, e))?;

  fmi
    .insert_string_value(
      &dictionary::IMPLEMENTATION_VERSION_NAME,
      &[config.implementation_version_name.as_str()],
    )
    .map_err(|e| P10Error::from_data_error(when, e))?;

  // The group length is calculated fresh at serialization time
  fmi.delete(dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag);

  Ok(fmi)
}

/// Serializes a single DICOM P10 token to raw DICOM P10 bytes.
///
pub fn token_to_bytes(token: &P10Token) -> Result<Vec<u8>, P10Error> {
  match token {
    P10Token::FilePreambleAndDICMPrefix { preamble } => {
      let mut bytes = Vec::with_capacity(132);
      bytes.extend_from_slice(preamble.as_slice());
      bytes.extend_from_slice(b"DICM");

      Ok(bytes)
    }

    P10Token::FileMetaInformation { data_set } => {
      file_meta_information_to_bytes(data_set)
    }

    P10Token::DataElementHeader { tag, vr, length } => {
      data_element_header_to_bytes(*tag, *vr, *length)
    }

    P10Token::DataElementValueBytes { data, .. } => Ok(data.to_vec()),

    P10Token::End => Ok(vec![]),
  }
}

/// Serializes File Meta Information to raw DICOM P10 bytes. The *'(0002,0000)
/// File Meta Information Group Length'* data element is placed first and
/// holds the number of bytes taken by the rest of the group 2 data elements.
///
fn file_meta_information_to_bytes(
  data_set: &DataSet,
) -> Result<Vec<u8>, P10Error> {
  let mut group_bytes = vec![];

  for (tag, value) in data_set.iter() {
    if *tag == dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag {
      continue;
    }

    let vr = value.value_representation();
    let value_bytes = value.bytes();

    let length = u32::try_from(value_bytes.len()).map_err(|_| {
      value_length_invalid_error(
        *tag,
        vr,
        value_bytes.len(),
        u64::from(u32::MAX),
      )
    })?;

    group_bytes.extend_from_slice(&data_element_header_to_bytes(
      *tag, vr, length,
    )?);
    group_bytes.extend_from_slice(value_bytes);
  }

  let mut bytes = data_element_header_to_bytes(
    dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag,
    ValueRepresentation::UnsignedLong,
    4,
  )?;

  let mut group_length = [0u8; 4];
  LittleEndian::write_u32(&mut group_length, group_bytes.len() as u32);
  bytes.extend_from_slice(&group_length);

  bytes.extend_from_slice(&group_bytes);

  Ok(bytes)
}

/// Serializes a data element header to raw DICOM P10 bytes using the 'Explicit
/// VR Little Endian' transfer syntax. VRs that store their value length in 16
/// bits error when the length exceeds what 16 bits can express.
///
fn data_element_header_to_bytes(
  tag: DataElementTag,
  vr: ValueRepresentation,
  length: u32,
) -> Result<Vec<u8>, P10Error> {
  let mut bytes = vec![0u8; 6];

  LittleEndian::write_u16(&mut bytes[0..2], tag.group);
  LittleEndian::write_u16(&mut bytes[2..4], tag.element);
  bytes[4..6].copy_from_slice(&vr.to_bytes());

  match DataElementHeader::value_length_size(vr) {
    ValueLengthSize::U16 => {
      let length = u16::try_from(length).map_err(|_| {
        value_length_invalid_error(
          tag,
          vr,
          length as usize,
          u64::from(u16::MAX),
        )
      })?;

      bytes.extend_from_slice(&length.to_le_bytes());
    }

    ValueLengthSize::U32 => {
      bytes.extend_from_slice(&[0, 0]);
      bytes.extend_from_slice(&length.to_le_bytes());
    }
  }

  Ok(bytes)
}

fn value_length_invalid_error(
  tag: DataElementTag,
  vr: ValueRepresentation,
  length: usize,
  max: u64,
) -> P10Error {
  P10Error::DataInvalid {
    when: "Serializing data element header".to_string(),
    details: format!(
      "Length of {} bytes for {} {} exceeds the maximum of {} bytes",
      length,
      tag,
      vr,
      max
    ),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn data_element_header_to_bytes_test() {
    assert_eq!(
      data_element_header_to_bytes(
        dictionary::MODALITY.tag,
        ValueRepresentation::CodeString,
        2
      ),
      Ok(vec![0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00])
    );

    assert_eq!(
      data_element_header_to_bytes(
        dictionary::PIXEL_DATA.tag,
        ValueRepresentation::OtherWordString,
        0x80000
      ),
      Ok(vec![
        0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00, 0x00, 0x00, 0x00, 0x08,
        0x00
      ])
    );

    assert_eq!(
      data_element_header_to_bytes(
        dictionary::MODALITY.tag,
        ValueRepresentation::CodeString,
        0x10000
      ),
      Err(P10Error::DataInvalid {
        when: "Serializing data element header".to_string(),
        details: "Length of 65536 bytes for (0008,0060) CS exceeds the \
                  maximum of 65535 bytes"
          .to_string(),
      })
    );
  }

  #[test]
  fn file_meta_information_to_bytes_test() {
    let mut fmi = DataSet::new();
    fmi
      .insert_string_value(
        &dictionary::TRANSFER_SYNTAX_UID,
        &[transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid],
      )
      .unwrap();

    let mut expected = vec![
      0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x1C, 0x00, 0x00,
      0x00, 0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
    ];
    expected.extend_from_slice(b"1.2.840.10008.1.2.1\0");

    assert_eq!(file_meta_information_to_bytes(&fmi), Ok(expected));
  }

  #[test]
  fn data_set_to_tokens_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::MODALITY, &["CT"])
      .unwrap();
    data_set
      .insert_string_value(
        &dictionary::SOP_CLASS_UID,
        &[crate::uids::CT_IMAGE_STORAGE_SOP_CLASS_UID],
      )
      .unwrap();
    data_set
      .insert_string_value(&dictionary::SOP_INSTANCE_UID, &["1.2.3.4"])
      .unwrap();

    let tokens =
      data_set_to_tokens(&data_set, &P10WriteConfig::default()).unwrap();

    assert_eq!(tokens.len(), 9);

    assert_eq!(
      tokens[0],
      P10Token::FilePreambleAndDICMPrefix {
        preamble: Box::new([0; 128])
      }
    );

    match &tokens[1] {
      P10Token::FileMetaInformation { data_set: fmi } => {
        assert_eq!(fmi.size(), 6);
        assert_eq!(
          fmi.get_string(dictionary::MEDIA_STORAGE_SOP_CLASS_UID.tag),
          Ok(crate::uids::CT_IMAGE_STORAGE_SOP_CLASS_UID.to_string())
        );
        assert_eq!(
          fmi.get_string(dictionary::MEDIA_STORAGE_SOP_INSTANCE_UID.tag),
          Ok("1.2.3.4".to_string())
        );
        assert_eq!(
          fmi.get_string(dictionary::TRANSFER_SYNTAX_UID.tag),
          Ok(transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid.to_string())
        );
        assert_eq!(
          fmi.get_string(dictionary::IMPLEMENTATION_CLASS_UID.tag),
          Ok(crate::uids::DCMGEN_IMPLEMENTATION_CLASS_UID.to_string())
        );
      }
      token => panic!("Unexpected token: {}", token),
    }

    // The main data set's elements follow in ascending tag order, with the
    // group 2 elements excluded
    assert_eq!(
      tokens[2],
      P10Token::DataElementHeader {
        tag: dictionary::SOP_CLASS_UID.tag,
        vr: ValueRepresentation::UniqueIdentifier,
        length: 26,
      }
    );
    assert_eq!(
      tokens[4],
      P10Token::DataElementHeader {
        tag: dictionary::SOP_INSTANCE_UID.tag,
        vr: ValueRepresentation::UniqueIdentifier,
        length: 8,
      }
    );
    assert_eq!(
      tokens[6],
      P10Token::DataElementHeader {
        tag: dictionary::MODALITY.tag,
        vr: ValueRepresentation::CodeString,
        length: 2,
      }
    );

    assert_eq!(tokens[8], P10Token::End);
  }
}
