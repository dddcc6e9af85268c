//! Defines dcmgen's root UID prefix and the implementation details that are
//! stored into the File Meta Information of DICOM P10 it serializes.

/// dcmgen's unique root UID prefix. This was allocated via Medical
/// Connections' FreeUID service:
/// <https://www.medicalconnections.co.uk/FreeUID.html>.
///
pub const DCMGEN_ROOT_UID_PREFIX: &str = "1.2.826.0.1.3680043.10.1953.1";

/// dcmgen's implementation class UID that is included in the File Meta
/// Information header of DICOM P10 data it serializes.
///
pub const DCMGEN_IMPLEMENTATION_CLASS_UID: &str =
  "1.2.826.0.1.3680043.10.1953.1.0";

/// dcmgen's implementation version name that is included in the File Meta
/// Information header of DICOM P10 data it serializes.
///
pub static DCMGEN_IMPLEMENTATION_VERSION_NAME: std::sync::LazyLock<String> =
  std::sync::LazyLock::new(|| format!("DCMGEN {}", env!("CARGO_PKG_VERSION")));

/// The SOP Class UID for CT Image Storage.
///
pub const CT_IMAGE_STORAGE_SOP_CLASS_UID: &str = "1.2.840.10008.5.1.4.1.1.2";
