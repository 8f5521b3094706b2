//! Simple deterministic noise fields for testing and debugging.
//!
//! These produce predictable weight patterns without a real noise function,
//! which makes pipeline behavior easy to verify: a uniform field exercises
//! the all-empty/all-full cases, a checker exercises every mixed case.

use crate::pipeline::NoiseSource;

/// Field returning the same value everywhere.
///
/// 0.0 produces an empty grid, 1.0 a full one.
#[derive(Clone, Copy, Debug)]
pub struct UniformField {
  pub value: f32,
}

impl UniformField {
  pub fn new(value: f32) -> Self {
    Self { value }
  }
}

impl NoiseSource for UniformField {
  fn sample(&self, _x: f32, _y: f32) -> f32 {
    self.value
  }
}

/// Axis-aligned checkerboard with the given tile period.
#[derive(Clone, Copy, Debug)]
pub struct CheckerField {
  pub period: f32,
}

impl CheckerField {
  pub fn new(period: f32) -> Self {
    Self { period }
  }
}

impl NoiseSource for CheckerField {
  fn sample(&self, x: f32, y: f32) -> f32 {
    let tile = (x / self.period).floor() + (y / self.period).floor();
    if (tile as i64).rem_euclid(2) == 0 {
      1.0
    } else {
      0.0
    }
  }
}

/// Half-plane split: 1.0 at and above the x threshold, 0.0 below.
///
/// Useful for pinning down exactly where the weights stage samples.
#[derive(Clone, Copy, Debug)]
pub struct SplitField {
  pub threshold: f32,
}

impl SplitField {
  pub fn new(threshold: f32) -> Self {
    Self { threshold }
  }
}

impl NoiseSource for SplitField {
  fn sample(&self, x: f32, _y: f32) -> f32 {
    if x >= self.threshold {
      1.0
    } else {
      0.0
    }
  }
}

#[cfg(test)]
#[path = "field_samplers_test.rs"]
mod field_samplers_test;
