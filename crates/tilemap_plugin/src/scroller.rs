//! Tick-driven regeneration scheduler.
//!
//! The scroller is a two-state driver: idle between ticks, regenerating
//! synchronously to completion once the accumulated time reaches the
//! configured delay. There are no intermediate suspension points, so a
//! regeneration can never observe another in flight.

use glam::Vec2;

use crate::generator::TilemapGenerator;
use crate::pipeline::NoiseSource;
use crate::types::{ConfigError, MeshBuffers, TilemapConfig, WeightGrid};

/// Owns a generator, the persisted pan offset, and the tick timer.
///
/// Construction runs the first generation pass unconditionally, regardless
/// of step and delay, so a mesh exists before the first tick. Afterwards
/// the offset advances by `pan_step` on each scheduled pass; it persists
/// across passes and resets only by rebuilding the scroller.
pub struct TilemapScroller {
  generator: TilemapGenerator,
  offset: Vec2,
  timer: f32,
}

impl TilemapScroller {
  /// Build the scroller and generate the initial mesh at offset zero.
  pub fn new<S: NoiseSource>(config: TilemapConfig, noise: &S) -> Result<Self, ConfigError> {
    let mut generator = TilemapGenerator::new(config)?;
    generator.regenerate(noise, Vec2::ZERO);
    Ok(Self {
      generator,
      offset: Vec2::ZERO,
      timer: 0.0,
    })
  }

  /// Advance the scheduler by `dt` seconds.
  ///
  /// A zero pan step disables animation entirely; the timer does not even
  /// accrue. Otherwise, once the accumulated time reaches the configured
  /// delay, the offset advances by the step, the pipeline reruns, and the
  /// timer resets. Returns true when a pass ran.
  pub fn tick<S: NoiseSource>(&mut self, dt: f32, noise: &S) -> bool {
    let config = self.generator.config();
    if config.pan_step == Vec2::ZERO {
      return false;
    }

    self.timer += dt;
    if self.timer < config.regen_delay {
      return false;
    }

    self.offset += config.pan_step;
    self.generator.regenerate(noise, self.offset);
    self.timer = 0.0;
    true
  }

  /// Cumulative pan offset of the most recent pass.
  pub fn offset(&self) -> Vec2 {
    self.offset
  }

  pub fn generator(&self) -> &TilemapGenerator {
    &self.generator
  }

  pub fn mesh(&self) -> &MeshBuffers {
    self.generator.mesh()
  }

  pub fn weights(&self) -> &WeightGrid {
    self.generator.weights()
  }
}

#[cfg(test)]
#[path = "scroller_test.rs"]
mod scroller_test;
