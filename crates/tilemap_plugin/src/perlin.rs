//! Default noise collaborator backed by the `noise` crate.

use noise::{NoiseFn, Perlin};

use crate::pipeline::NoiseSource;

/// Perlin noise field remapped to the [0, 1] contract.
///
/// `Perlin::get` returns values in [-1, 1]; the remap keeps the field
/// centered so roughly half of all thresholded weights come out occupied.
#[derive(Clone)]
pub struct PerlinField {
  perlin: Perlin,
}

impl PerlinField {
  pub fn new(seed: u32) -> Self {
    Self {
      perlin: Perlin::new(seed),
    }
  }
}

impl Default for PerlinField {
  fn default() -> Self {
    Self::new(Perlin::DEFAULT_SEED)
  }
}

impl NoiseSource for PerlinField {
  fn sample(&self, x: f32, y: f32) -> f32 {
    let value = self.perlin.get([x as f64, y as f64]) as f32;
    (0.5 * (value + 1.0)).clamp(0.0, 1.0)
  }
}

#[cfg(test)]
#[path = "perlin_test.rs"]
mod perlin_test;
