//! Core DICOM data model for the dcmgen CT phantom generator: data element
//! tags, value representations, data element values, data sets, and UID
//! generation.

pub mod data_element_tag;
pub mod data_element_value;
pub mod data_error;
pub mod data_set;
pub mod dictionary;
pub mod error;
pub mod transfer_syntax;
pub(crate) mod utils;
pub mod value_multiplicity;
pub mod value_representation;

pub use data_element_tag::DataElementTag;
pub use data_element_value::date::StructuredDate;
pub use data_element_value::person_name::{
  PersonNameComponents, StructuredPersonName,
};
pub use data_element_value::time::StructuredTime;
pub use data_element_value::DataElementValue;
pub use data_error::DataError;
pub use data_set::DataSet;
pub use error::DcmgenError;
pub use transfer_syntax::TransferSyntax;
pub use value_multiplicity::ValueMultiplicity;
pub use value_representation::ValueRepresentation;
