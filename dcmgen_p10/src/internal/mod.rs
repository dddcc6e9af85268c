pub mod data_element_header;
