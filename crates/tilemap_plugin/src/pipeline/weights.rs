//! Stage 1: Weights
//!
//! Thresholds the continuous noise field into the binary weight grid at the
//! current pan offset. Pure function of (noise, offset, noise_scale): the
//! incremental panning used by the scroller and a direct sample at the same
//! cumulative offset produce identical grids.

use glam::Vec2;

use super::types::NoiseSource;
use crate::types::WeightGrid;

/// Fill `grid` with thresholded noise samples.
///
/// Sample (i, j) reads the field at
/// `(offset.x + (i+1)/noise_scale, offset.y + (j+1)/noise_scale)`; the +1
/// keeps the lattice away from the field's origin, where many noise
/// functions degenerate. The continuous value is rounded to the nearest
/// integer, yielding exactly 0 or 1.
pub fn sample_weights<S: NoiseSource>(
  grid: &mut WeightGrid,
  noise: &S,
  offset: Vec2,
  noise_scale: f32,
) {
  let side = grid.samples_per_side();

  for i in 0..side {
    for j in 0..side {
      let x = offset.x + (i + 1) as f32 / noise_scale;
      let y = offset.y + (j + 1) as f32 / noise_scale;
      let value = noise.sample(x, y);
      debug_assert!(
        (0.0..=1.0).contains(&value),
        "noise sample out of [0, 1]: {value}"
      );
      grid.set(i, j, value.round() as u8);
    }
  }
}

#[cfg(test)]
#[path = "weights_test.rs"]
mod weights_test;
