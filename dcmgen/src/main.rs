//! Generates a synthetic CT DICOM file containing a circular phantom, for
//! use as test input by other DICOM tooling.

mod ct_image;
mod phantom;

use dcmgen_core::DcmgenError;
use dcmgen_p10::DataSetP10Extensions;

use ct_image::CtImage;

const OUTPUT_FILENAME: &str = "test_ct.dcm";

const ROWS: u16 = 512;
const COLUMNS: u16 = 512;

fn main() -> Result<(), ()> {
  let task_description = format!("generating \"{}\"", OUTPUT_FILENAME);

  let data_set =
    match CtImage::new(ROWS, COLUMNS).and_then(CtImage::into_data_set) {
      Ok(data_set) => data_set,
      Err(e) => {
        e.print(&task_description);
        return Err(());
      }
    };

  match data_set.write_p10_file(OUTPUT_FILENAME, None) {
    Ok(()) => {
      println!("DICOM file created: {}", OUTPUT_FILENAME);
      Ok(())
    }

    Err(e) => {
      e.print(&task_description);
      Err(())
    }
  }
}
