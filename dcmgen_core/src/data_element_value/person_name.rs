//! Work with the DICOM `PersonName` value representation.

use crate::DataError;

/// The components of a single person name.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonNameComponents {
  pub last_name: String,
  pub first_name: String,
  pub middle_name: String,
  pub prefix: String,
  pub suffix: String,
}

/// A structured person name that can be converted to a `PersonName` value.
/// Person name values have three variants: alphabetic, ideographic, and
/// phonetic. All variants are optional, however it is common for only the
/// alphabetic variant to be used.
///
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredPersonName {
  pub alphabetic: Option<PersonNameComponents>,
  pub ideographic: Option<PersonNameComponents>,
  pub phonetic: Option<PersonNameComponents>,
}

/// Converts a list of structured person names to a `PersonName` value. Each
/// name's component groups are joined with the `=` character and each group's
/// components with the `^` character, with trailing separators removed.
///
pub fn to_bytes(values: &[StructuredPersonName]) -> Result<Vec<u8>, DataError> {
  let names: Result<Vec<String>, DataError> = values
    .iter()
    .map(|value| {
      let component_groups: Result<Vec<String>, DataError> =
        [&value.alphabetic, &value.ideographic, &value.phonetic]
          .iter()
          .map(|component_group| match component_group {
            Some(components) => components_to_string(components),
            None => Ok("".to_string()),
          })
          .collect();

      Ok(component_groups?.join("=").trim_end_matches('=').to_string())
    })
    .collect();

  let mut bytes = names?.join("\\").into_bytes();

  if bytes.len() % 2 == 1 {
    bytes.push(0x20);
  }

  Ok(bytes)
}

fn components_to_string(
  components: &PersonNameComponents,
) -> Result<String, DataError> {
  let components: [&str; 5] = [
    components.last_name.trim_end_matches(' '),
    components.first_name.trim_end_matches(' '),
    components.middle_name.trim_end_matches(' '),
    components.prefix.trim_end_matches(' '),
    components.suffix.trim_end_matches(' '),
  ];

  for component in components {
    if component.len() > 64 {
      return Err(DataError::new_value_invalid(
        "PersonName component is longer than 64 characters".to_string(),
      ));
    }

    if component.contains(['^', '=', '\\']) {
      return Err(DataError::new_value_invalid(
        "PersonName component contains disallowed characters".to_string(),
      ));
    }
  }

  Ok(
    components
      .join("^")
      .trim_end_matches('^')
      .to_string(),
  )
}
