//! Generator state: validated config plus the owned, reusable buffers.

use glam::Vec2;

use crate::pipeline::{self, NoiseSource};
use crate::types::{ConfigError, MeshBuffers, RegenStats, TilemapConfig, WeightGrid};

/// Owns the weight grid and mesh buffers for one tilemap.
///
/// Buffers are sized once from the validated config and overwritten in
/// place by every [`regenerate`](Self::regenerate) call; the grid dimension
/// is immutable after construction. The accessors are read-only so debug
/// overlays can observe weights and vertices without the generator ever
/// depending on whether an observer is attached.
pub struct TilemapGenerator {
  config: TilemapConfig,
  weights: WeightGrid,
  mesh: MeshBuffers,
}

impl TilemapGenerator {
  /// Validate the config and allocate the fixed-size buffers.
  pub fn new(config: TilemapConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self {
      weights: WeightGrid::new(config.grid_size),
      mesh: MeshBuffers::with_grid_size(config.grid_size),
      config,
    })
  }

  /// Run one full pipeline pass at the given pan offset.
  pub fn regenerate<S: NoiseSource>(&mut self, noise: &S, offset: Vec2) -> &MeshBuffers {
    pipeline::regenerate(&self.config, noise, offset, &mut self.weights, &mut self.mesh);
    &self.mesh
  }

  /// Run one pass and report per-pass stats.
  pub fn regenerate_timed<S: NoiseSource>(
    &mut self,
    noise: &S,
    offset: Vec2,
  ) -> (&MeshBuffers, RegenStats) {
    let stats =
      pipeline::regenerate_timed(&self.config, noise, offset, &mut self.weights, &mut self.mesh);
    (&self.mesh, stats)
  }

  pub fn config(&self) -> &TilemapConfig {
    &self.config
  }

  /// Read-only view of the last pass's weight grid.
  pub fn weights(&self) -> &WeightGrid {
    &self.weights
  }

  /// Read-only view of the last pass's mesh buffers.
  pub fn mesh(&self) -> &MeshBuffers {
    &self.mesh
  }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
