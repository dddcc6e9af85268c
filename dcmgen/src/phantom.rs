//! Synthesizes the pixel data for a circular CT phantom that has an
//! anatomy-like structure: a dense outer ring with internal varied density.

use byteorder::{ByteOrder, LittleEndian};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// The standard deviation of the Gaussian noise added to every pixel for
/// realism. The noise has a mean of zero.
///
pub const NOISE_STANDARD_DEVIATION: f64 = 20.0;

static NOISE_DISTRIBUTION: std::sync::LazyLock<Normal<f64>> =
  std::sync::LazyLock::new(|| {
    Normal::new(0.0, NOISE_STANDARD_DEVIATION).unwrap()
  });

/// Synthesizes a circular phantom of the given size, returning its signed
/// 16-bit pixel samples in row-major order.
///
/// Each pixel's base value is determined by its distance from the center of
/// the image, where the image spans -1 to +1 on both axes, with Gaussian
/// noise then added on top.
///
pub fn synthesize_grid<R: Rng>(
  rows: usize,
  columns: usize,
  rng: &mut R,
) -> Vec<i16> {
  let mut samples = Vec::with_capacity(rows * columns);

  for row in 0..rows {
    let y = linspace(row, rows);

    for column in 0..columns {
      let x = linspace(column, columns);

      let distance = (x * x + y * y).sqrt();

      // Truncate the noise toward zero and wrap it into the i16 range, then
      // add it to the base value with wrapping arithmetic
      let noise = NOISE_DISTRIBUTION.sample(rng) as i64 as i16;

      samples.push(base_value(distance).wrapping_add(noise));
    }
  }

  samples
}

/// Converts phantom pixel samples to little endian bytes ready to be stored
/// in a *'(7FE0,0010) Pixel Data'* data element.
///
pub fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
  let mut bytes = vec![0u8; samples.len() * 2];
  LittleEndian::write_i16_into(samples, &mut bytes);

  bytes
}

/// Returns the point at the given index of a grid axis with the given number
/// of points, where the axis spans -1 to +1 inclusive.
///
fn linspace(index: usize, count: usize) -> f64 {
  if count < 2 {
    return -1.0;
  }

  -1.0 + 2.0 * index as f64 / (count - 1) as f64
}

/// Returns the base value for a pixel at the given distance from the center
/// of the phantom. Later zones overwrite earlier ones where they overlap.
///
fn base_value(distance: f64) -> i16 {
  let mut value = 0;

  if distance < 0.8 {
    value = 400; // Internal tissue
  }

  if distance < 0.75 {
    value = 200; // Soft tissue
  }

  if distance > 0.8 && distance < 0.85 {
    value = 1000; // Bone ring
  }

  if distance < 0.2 {
    value = 800; // Heart/organ
  }

  if distance < 0.1 {
    value = -500; // Air/lungs
  }

  value
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn base_value_test() {
    assert_eq!(base_value(0.0), -500);
    assert_eq!(base_value(0.15), 800);
    assert_eq!(base_value(0.5), 200);
    assert_eq!(base_value(0.78), 400);
    assert_eq!(base_value(0.82), 1000);
    assert_eq!(base_value(0.9), 0);

    // The bone ring's bounds are exclusive
    assert_eq!(base_value(0.8), 0);
    assert_eq!(base_value(0.85), 0);
  }

  #[test]
  fn linspace_test() {
    assert_eq!(linspace(0, 512), -1.0);
    assert_eq!(linspace(511, 512), 1.0);
    assert_eq!(linspace(2, 5), 0.0);
  }

  #[test]
  fn synthesize_grid_test() {
    let mut rng = StdRng::seed_from_u64(12345);

    let samples = synthesize_grid(512, 512, &mut rng);

    assert_eq!(samples.len(), 512 * 512);

    // The center of the grid is in the air/lungs zone and the corners are
    // outside the phantom, in both cases offset by noise
    let center = samples[256 * 512 + 256];
    assert!((center as f64 + 500.0).abs() < 150.0);

    let corner = samples[0];
    assert!((corner as f64).abs() < 150.0);
  }

  #[test]
  fn samples_to_bytes_test() {
    assert_eq!(
      samples_to_bytes(&[-500, 1000]),
      vec![0x0C, 0xFE, 0xE8, 0x03]
    );
  }
}
