//! A DICOM data set, defined as a map of data element tags to data element
//! values.

use std::collections::BTreeMap;

use crate::{
  dictionary, DataElementTag, DataElementValue, DataError, StructuredDate,
  StructuredPersonName, StructuredTime, ValueRepresentation,
};

/// A DICOM data set that is a mapping of data element tags to data element
/// values. Iteration is always in ascending tag order.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet(BTreeMap<DataElementTag, DataElementValue>);

impl FromIterator<(DataElementTag, DataElementValue)> for DataSet {
  fn from_iter<T: IntoIterator<Item = (DataElementTag, DataElementValue)>>(
    iter: T,
  ) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl DataSet {
  /// Returns a new empty data set.
  ///
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Returns the number of data elements in a data set.
  ///
  pub fn size(&self) -> usize {
    self.0.len()
  }

  /// Returns whether a data set is empty and contains no data elements.
  ///
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns whether a data element with the specified tag exists in a data
  /// set.
  ///
  pub fn has(&self, tag: DataElementTag) -> bool {
    self.0.contains_key(&tag)
  }

  /// Returns an iterator over the data elements in a data set, in ascending
  /// tag order.
  ///
  pub fn iter(
    &self,
  ) -> impl Iterator<Item = (&DataElementTag, &DataElementValue)> {
    self.0.iter()
  }

  /// Inserts a data element tag and value into a data set. If there is
  /// already a value for the tag then it is replaced with the new value.
  ///
  pub fn insert(&mut self, tag: DataElementTag, value: DataElementValue) {
    self.0.insert(tag, value);
  }

  /// Removes the data element with the specified tag, if present.
  ///
  pub fn delete(&mut self, tag: DataElementTag) {
    self.0.remove(&tag);
  }

  /// Inserts a data element with a string value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry,
  /// which determines the VR to use.
  ///
  pub fn insert_string_value(
    &mut self,
    item: &dictionary::Item,
    value: &[&str],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len()) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::CodeString] => {
        DataElementValue::new_code_string(value)
      }
      [ValueRepresentation::LongString] => {
        DataElementValue::new_long_string(value)
      }
      [ValueRepresentation::ShortString] => {
        DataElementValue::new_short_string(value)
      }
      [ValueRepresentation::UniqueIdentifier] => {
        DataElementValue::new_unique_identifier(value)
      }
      _ => return invalid_insert_error(item),
    }
    .map_err(|e| e.with_tag(item.tag))?;

    self.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a person name value into a data set. The
  /// data element being inserted must be referenced through its dictionary
  /// entry.
  ///
  pub fn insert_person_name_value(
    &mut self,
    item: &dictionary::Item,
    value: &[StructuredPersonName],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len()) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::PersonName] => {
        DataElementValue::new_person_name(value)
      }
      _ => return invalid_insert_error(item),
    }
    .map_err(|e| e.with_tag(item.tag))?;

    self.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a date value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  ///
  pub fn insert_date_value(
    &mut self,
    item: &dictionary::Item,
    value: &StructuredDate,
  ) -> Result<(), DataError> {
    let value = match item.vrs {
      [ValueRepresentation::Date] => DataElementValue::new_date(value),
      _ => return invalid_insert_error(item),
    }
    .map_err(|e| e.with_tag(item.tag))?;

    self.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with a time value into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  ///
  pub fn insert_time_value(
    &mut self,
    item: &dictionary::Item,
    value: &StructuredTime,
  ) -> Result<(), DataError> {
    let value = match item.vrs {
      [ValueRepresentation::Time] => DataElementValue::new_time(value),
      _ => return invalid_insert_error(item),
    }
    .map_err(|e| e.with_tag(item.tag))?;

    self.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with integer values into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  /// This method automatically determines the correct VR to use for the new
  /// data element.
  ///
  pub fn insert_int_value(
    &mut self,
    item: &dictionary::Item,
    value: &[i32],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len()) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::IntegerString] => {
        DataElementValue::new_integer_string(value)
      }
      [ValueRepresentation::SignedShort] => {
        let value = int_list_into::<i16>(item, value)?;
        DataElementValue::new_signed_short(&value)
      }
      [ValueRepresentation::UnsignedShort] => {
        let value = int_list_into::<u16>(item, value)?;
        DataElementValue::new_unsigned_short(&value)
      }
      [ValueRepresentation::UnsignedLong] => {
        let value = int_list_into::<u32>(item, value)?;
        DataElementValue::new_unsigned_long(&value)
      }
      _ => return invalid_insert_error(item),
    }
    .map_err(|e| e.with_tag(item.tag))?;

    self.insert(item.tag, value);

    Ok(())
  }

  /// Inserts a data element with float values into a data set. The data
  /// element being inserted must be referenced through its dictionary entry.
  ///
  pub fn insert_float_value(
    &mut self,
    item: &dictionary::Item,
    value: &[f64],
  ) -> Result<(), DataError> {
    if !item.multiplicity.contains(value.len()) {
      return invalid_insert_error(item);
    }

    let value = match item.vrs {
      [ValueRepresentation::DecimalString] => {
        DataElementValue::new_decimal_string(value)
      }
      _ => return invalid_insert_error(item),
    }
    .map_err(|e| e.with_tag(item.tag))?;

    self.insert(item.tag, value);

    Ok(())
  }

  /// Returns the data element value for the specified tag.
  ///
  pub fn get_value(
    &self,
    tag: DataElementTag,
  ) -> Result<&DataElementValue, DataError> {
    self
      .0
      .get(&tag)
      .ok_or_else(|| DataError::new_tag_not_present().with_tag(tag))
  }

  /// Returns the single string value for the specified tag.
  ///
  pub fn get_string(&self, tag: DataElementTag) -> Result<String, DataError> {
    self
      .get_value(tag)?
      .get_string()
      .map_err(|e| e.with_tag(tag))
  }

  /// Returns the single integer value for the specified tag.
  ///
  pub fn get_int(&self, tag: DataElementTag) -> Result<i64, DataError> {
    self.get_value(tag)?.get_int().map_err(|e| e.with_tag(tag))
  }

  /// Returns a new data set containing the File Meta Information data
  /// elements in this data set, i.e. those where the data element tag group
  /// equals 2.
  ///
  /// This function also sets the *'(0002,0002) Media Storage SOP Class UID'*
  /// and *'(0002,0003) Media Storage SOP Instance UID'* data elements to
  /// match the *'(0008,0016) SOP Class UID'* and *'(0008,0018) SOP Instance
  /// UID'* data elements in this data set.
  ///
  pub fn file_meta_information(&self) -> DataSet {
    let mut file_meta_information: DataSet = self
      .0
      .range((
        std::ops::Bound::Included(DataElementTag::new(2, 0x0000)),
        std::ops::Bound::Included(DataElementTag::new(2, 0xFFFF)),
      ))
      .map(|(tag, value)| (*tag, value.clone()))
      .collect();

    if let Ok(value) = self.get_value(dictionary::SOP_CLASS_UID.tag) {
      file_meta_information
        .insert(dictionary::MEDIA_STORAGE_SOP_CLASS_UID.tag, value.clone());
    } else {
      file_meta_information.delete(dictionary::MEDIA_STORAGE_SOP_CLASS_UID.tag);
    }

    if let Ok(value) = self.get_value(dictionary::SOP_INSTANCE_UID.tag) {
      file_meta_information.insert(
        dictionary::MEDIA_STORAGE_SOP_INSTANCE_UID.tag,
        value.clone(),
      );
    } else {
      file_meta_information
        .delete(dictionary::MEDIA_STORAGE_SOP_INSTANCE_UID.tag);
    }

    file_meta_information
  }
}

/// Converts a list of ints into the integer type required by a data element's
/// VR, erroring when a value is out of range.
///
fn int_list_into<T: TryFrom<i32>>(
  item: &dictionary::Item,
  value: &[i32],
) -> Result<Vec<T>, DataError> {
  value
    .iter()
    .map(|i| T::try_from(*i))
    .collect::<Result<Vec<T>, _>>()
    .map_err(|_| {
      DataError::new_value_invalid("Int value is out of range".to_string())
        .with_tag(item.tag)
    })
}

fn invalid_insert_error(item: &dictionary::Item) -> Result<(), DataError> {
  Err(DataError::new_multiplicity_mismatch().with_tag(item.tag))
}
