//! A data element value that holds validated bytes for a DICOM value
//! representation. Data element values are usually stored in a [`DataSet`]
//! which maps data element tags to data element values.

use std::rc::Rc;

use byteorder::ByteOrder;

use crate::{DataError, StructuredDate, StructuredTime, ValueRepresentation};

pub mod date;
pub mod decimal_string;
pub mod integer_string;
pub mod person_name;
pub mod time;
pub mod unique_identifier;

/// A DICOM data element value holding raw bytes for a specific VR. When the VR
/// is a string type the bytes are UTF-8 encoded. The data is always little
/// endian.
///
/// Sequences and encapsulated pixel data are not representable: generated
/// phantom files contain only flat data sets of binary values.
///
/// Ref: PS3.5 6.2.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DataElementValue {
  vr: ValueRepresentation,
  bytes: Rc<Vec<u8>>,
}

impl DataElementValue {
  /// Constructs a new data element value with the specified `vr` and `bytes`.
  /// Returns an error if the bytes are invalid for the VR, e.g. a length
  /// constraint is violated, or string bytes contain disallowed characters.
  ///
  pub fn new_binary(
    vr: ValueRepresentation,
    bytes: Rc<Vec<u8>>,
  ) -> Result<Self, DataError> {
    if vr == ValueRepresentation::Sequence {
      return Err(DataError::new_value_invalid(format!(
        "Value representation '{}' is not valid for binary data",
        vr
      )));
    }

    if vr.is_encoded_string() {
      if std::str::from_utf8(&bytes).is_err() {
        return Err(DataError::new_value_invalid(format!(
          "Bytes for '{}' are not valid UTF-8",
          vr
        )));
      }
    } else if vr.is_string() {
      let invalid_byte = (*bytes).iter().find(|b| {
        **b != 0x00
          && **b != 0x09
          && **b != 0x0A
          && **b != 0x0C
          && **b != 0x0D
          && **b != 0x1B
          && (**b < 0x20 || **b > 0x7E)
      });

      if let Some(invalid_byte) = invalid_byte {
        return Err(DataError::new_value_invalid(format!(
          "Bytes for '{}' has disallowed byte: 0x{:02X}",
          vr, *invalid_byte
        )));
      }
    }

    let value = Self::new_binary_unchecked(vr, bytes);

    value.validate_length()?;

    Ok(value)
  }

  /// Constructs a new data element value similar to [`Self::new_binary`], but
  /// does not validate `vr` or `bytes`.
  ///
  pub fn new_binary_unchecked(
    vr: ValueRepresentation,
    bytes: Rc<Vec<u8>>,
  ) -> Self {
    Self { vr, bytes }
  }

  /// Creates a new `CodeString` data element value.
  ///
  pub fn new_code_string(value: &[&str]) -> Result<Self, DataError> {
    new_string_list(
      ValueRepresentation::CodeString,
      &value.iter().map(|s| s.trim()).collect::<Vec<&str>>(),
    )
  }

  /// Creates a new `Date` data element value.
  ///
  pub fn new_date(value: &StructuredDate) -> Result<Self, DataError> {
    let bytes = value.to_bytes()?;

    Ok(Self::new_binary_unchecked(
      ValueRepresentation::Date,
      Rc::new(bytes),
    ))
  }

  /// Creates a new `DecimalString` data element value.
  ///
  pub fn new_decimal_string(value: &[f64]) -> Result<Self, DataError> {
    let bytes = decimal_string::to_bytes(value)?;

    Self::new_binary(ValueRepresentation::DecimalString, Rc::new(bytes))
  }

  /// Creates a new `IntegerString` data element value.
  ///
  pub fn new_integer_string(value: &[i32]) -> Result<Self, DataError> {
    let bytes = integer_string::to_bytes(value);

    Self::new_binary(ValueRepresentation::IntegerString, Rc::new(bytes))
  }

  /// Creates a new `LongString` data element value.
  ///
  pub fn new_long_string(value: &[&str]) -> Result<Self, DataError> {
    new_string_list(
      ValueRepresentation::LongString,
      &value.iter().map(|s| s.trim()).collect::<Vec<&str>>(),
    )
  }

  /// Creates a new `OtherByteString` data element value.
  ///
  pub fn new_other_byte_string(value: Vec<u8>) -> Result<Self, DataError> {
    Self::new_binary(ValueRepresentation::OtherByteString, Rc::new(value))
  }

  /// Creates a new `OtherWordString` data element value.
  ///
  pub fn new_other_word_string(value: Vec<u8>) -> Result<Self, DataError> {
    Self::new_binary(ValueRepresentation::OtherWordString, Rc::new(value))
  }

  /// Creates a new `PersonName` data element value.
  ///
  pub fn new_person_name(
    value: &[person_name::StructuredPersonName],
  ) -> Result<Self, DataError> {
    let bytes = person_name::to_bytes(value)?;

    Ok(Self::new_binary_unchecked(
      ValueRepresentation::PersonName,
      Rc::new(bytes),
    ))
  }

  /// Creates a new `ShortString` data element value.
  ///
  pub fn new_short_string(value: &[&str]) -> Result<Self, DataError> {
    new_string_list(
      ValueRepresentation::ShortString,
      &value.iter().map(|s| s.trim()).collect::<Vec<&str>>(),
    )
  }

  /// Creates a new `SignedShort` data element value.
  ///
  pub fn new_signed_short(value: &[i16]) -> Result<Self, DataError> {
    let mut bytes = vec![0; value.len() * 2];
    byteorder::LittleEndian::write_i16_into(value, &mut bytes);

    Self::new_binary(ValueRepresentation::SignedShort, Rc::new(bytes))
  }

  /// Creates a new `Time` data element value.
  ///
  pub fn new_time(value: &StructuredTime) -> Result<Self, DataError> {
    let bytes = value.to_bytes()?;

    Ok(Self::new_binary_unchecked(
      ValueRepresentation::Time,
      Rc::new(bytes),
    ))
  }

  /// Creates a new `UniqueIdentifier` data element value.
  ///
  pub fn new_unique_identifier(value: &[&str]) -> Result<Self, DataError> {
    let bytes = unique_identifier::to_bytes(value)?;

    Self::new_binary(ValueRepresentation::UniqueIdentifier, Rc::new(bytes))
  }

  /// Creates a new `UnsignedLong` data element value.
  ///
  pub fn new_unsigned_long(value: &[u32]) -> Result<Self, DataError> {
    let mut bytes = vec![0; value.len() * 4];
    byteorder::LittleEndian::write_u32_into(value, &mut bytes);

    Self::new_binary(ValueRepresentation::UnsignedLong, Rc::new(bytes))
  }

  /// Creates a new `UnsignedShort` data element value.
  ///
  pub fn new_unsigned_short(value: &[u16]) -> Result<Self, DataError> {
    let mut bytes = vec![0; value.len() * 2];
    byteorder::LittleEndian::write_u16_into(value, &mut bytes);

    Self::new_binary(ValueRepresentation::UnsignedShort, Rc::new(bytes))
  }

  /// Returns the value representation of a data element value.
  ///
  pub fn value_representation(&self) -> ValueRepresentation {
    self.vr
  }

  /// Returns the raw bytes of a data element value.
  ///
  pub fn bytes(&self) -> &Rc<Vec<u8>> {
    &self.bytes
  }

  /// Returns the value of a data element that holds a single string.
  ///
  pub fn get_string(&self) -> Result<String, DataError> {
    if !self.vr.is_string() {
      return Err(DataError::new_value_not_present());
    }

    let string = std::str::from_utf8(&self.bytes)
      .map_err(|_| DataError::new_value_invalid("Invalid UTF-8".to_string()))?;

    let string = crate::utils::trim_end_whitespace(string);

    if string.contains('\\') {
      return Err(DataError::new_multiplicity_mismatch());
    }

    Ok(string.to_string())
  }

  /// Returns the value of a data element that holds a single integer.
  ///
  pub fn get_int(&self) -> Result<i64, DataError> {
    let ints: Vec<i64> = match self.vr {
      ValueRepresentation::IntegerString => integer_string::from_bytes(
        &self.bytes,
      )?
      .iter()
      .map(|i| *i as i64)
      .collect(),

      ValueRepresentation::SignedShort => self
        .bytes
        .chunks_exact(2)
        .map(|chunk| byteorder::LittleEndian::read_i16(chunk) as i64)
        .collect(),

      ValueRepresentation::UnsignedShort => self
        .bytes
        .chunks_exact(2)
        .map(|chunk| byteorder::LittleEndian::read_u16(chunk) as i64)
        .collect(),

      ValueRepresentation::UnsignedLong => self
        .bytes
        .chunks_exact(4)
        .map(|chunk| byteorder::LittleEndian::read_u32(chunk) as i64)
        .collect(),

      _ => return Err(DataError::new_value_not_present()),
    };

    match ints.as_slice() {
      [i] => Ok(*i),
      _ => Err(DataError::new_multiplicity_mismatch()),
    }
  }

  /// Validates the number of bytes in a data element value against the length
  /// requirements of its value representation.
  ///
  fn validate_length(&self) -> Result<(), DataError> {
    let length = self.bytes.len();
    let requirements = self.vr.length_requirements();

    if length > requirements.bytes_max {
      return Err(DataError::new_value_length_invalid(
        self.vr,
        length,
        format!("Exceeds the maximum of {} bytes", requirements.bytes_max),
      ));
    }

    if let Some(multiple_of) = requirements.bytes_multiple_of {
      if length % multiple_of != 0 {
        return Err(DataError::new_value_length_invalid(
          self.vr,
          length,
          format!("Is not a multiple of {} bytes", multiple_of),
        ));
      }
    }

    Ok(())
  }
}

/// Creates a new value for a string-valued VR that allows multiplicity,
/// joining the individual values with the `\` character and padding to even
/// length.
///
fn new_string_list(
  vr: ValueRepresentation,
  value: &[&str],
) -> Result<DataElementValue, DataError> {
  let string_characters_max = vr
    .length_requirements()
    .string_characters_max
    .unwrap_or(0xFFFFFFFE);

  // Check no values exceed the max length or contain backslashes that would
  // affect the multiplicity once joined together
  for s in value.iter() {
    if s.len() > string_characters_max {
      return Err(DataError::new_value_invalid(format!(
        "String list item is longer than the max length of {}",
        string_characters_max
      )));
    }

    if s.contains('\\') {
      return Err(DataError::new_value_invalid(
        "String list item contains backslashes".to_string(),
      ));
    }
  }

  let mut bytes = value.join("\\").into_bytes();
  vr.pad_bytes_to_even_length(&mut bytes);

  DataElementValue::new_binary(vr, Rc::new(bytes))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_code_string_test() {
    assert_eq!(
      DataElementValue::new_code_string(&["CT"]).unwrap().bytes(),
      &Rc::new(b"CT".to_vec())
    );

    assert_eq!(
      DataElementValue::new_code_string(&[" MONOCHROME2 "])
        .unwrap()
        .bytes(),
      &Rc::new(b"MONOCHROME2 ".to_vec())
    );

    assert!(DataElementValue::new_code_string(&[
      "A_VALUE_THAT_IS_FAR_TOO_LONG"
    ])
    .is_err());
  }

  #[test]
  fn new_unsigned_short_test() {
    let value = DataElementValue::new_unsigned_short(&[512]).unwrap();

    assert_eq!(
      value.value_representation(),
      ValueRepresentation::UnsignedShort
    );
    assert_eq!(value.bytes(), &Rc::new(vec![0x00, 0x02]));
    assert_eq!(value.get_int(), Ok(512));
  }

  #[test]
  fn new_signed_short_test() {
    assert_eq!(
      DataElementValue::new_signed_short(&[-500]).unwrap().bytes(),
      &Rc::new(vec![0x0C, 0xFE])
    );
  }

  #[test]
  fn new_unsigned_long_test() {
    assert_eq!(
      DataElementValue::new_unsigned_long(&[198]).unwrap().bytes(),
      &Rc::new(vec![0xC6, 0x00, 0x00, 0x00])
    );
  }

  #[test]
  fn new_decimal_string_test() {
    assert_eq!(
      DataElementValue::new_decimal_string(&[0.625, 0.625])
        .unwrap()
        .bytes(),
      &Rc::new(b"0.625\\0.625 ".to_vec())
    );

    assert!(
      DataElementValue::new_decimal_string(&[1.0000000000000002]).is_err()
    );
  }

  #[test]
  fn new_integer_string_test() {
    let value = DataElementValue::new_integer_string(&[1]).unwrap();

    assert_eq!(value.bytes(), &Rc::new(b"1 ".to_vec()));
    assert_eq!(value.get_int(), Ok(1));
  }

  #[test]
  fn new_other_byte_string_test() {
    let value = DataElementValue::new_other_byte_string(vec![0x00, 0x01])
      .unwrap();

    assert_eq!(
      value.value_representation(),
      ValueRepresentation::OtherByteString
    );
    assert_eq!(value.bytes(), &Rc::new(vec![0x00, 0x01]));

    assert!(DataElementValue::new_other_byte_string(vec![0x00]).is_err());
  }

  #[test]
  fn new_other_word_string_test() {
    assert!(DataElementValue::new_other_word_string(vec![1, 2, 3]).is_err());

    assert_eq!(
      DataElementValue::new_other_word_string(vec![1, 2, 3, 4])
        .unwrap()
        .value_representation(),
      ValueRepresentation::OtherWordString
    );
  }

  #[test]
  fn get_string_test() {
    let value = DataElementValue::new_long_string(&["TestManufacturer"])
      .unwrap();

    assert_eq!(value.get_string(), Ok("TestManufacturer".to_string()));

    let value = DataElementValue::new_unsigned_short(&[1]).unwrap();
    assert_eq!(
      value.get_string(),
      Err(DataError::new_value_not_present())
    );
  }

  #[test]
  fn validate_length_test() {
    assert_eq!(
      DataElementValue::new_binary(
        ValueRepresentation::Date,
        Rc::new(b"2024010199".to_vec())
      ),
      Err(DataError::new_value_length_invalid(
        ValueRepresentation::Date,
        10,
        "Exceeds the maximum of 8 bytes".to_string()
      ))
    );
  }
}
