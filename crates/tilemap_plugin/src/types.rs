//! Core data types for tilemap meshing.

use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::constants::{sample_count, vertex_capacity, MAX_GRID_SIZE};

/// Configuration rejected at validation time.
///
/// Misconfiguration surfaces as an error instead of being clamped; clamping
/// would mask the caller's mistake.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  #[error("grid size must be in 1..={MAX_GRID_SIZE}, got {0}")]
  GridSize(u32),

  #[error("cell scale must be positive, got {0}")]
  CellScale(f32),

  #[error("noise scale must be positive, got {0}")]
  NoiseScale(f32),

  #[error("regeneration delay must be positive, got {0}")]
  RegenDelay(f32),
}

/// Configuration for tilemap generation.
#[derive(Clone, Debug)]
pub struct TilemapConfig {
  /// Grid dimension N: the tilemap has N×N cells and (N+1)² weight samples.
  pub grid_size: u32,

  /// Uniform world-space scale of one cell.
  pub cell_scale: f32,

  /// Noise coordinate divisor: grid coordinate (i+1) maps to noise
  /// coordinate (i+1)/noise_scale. Larger values produce smoother fields.
  pub noise_scale: f32,

  /// Pan offset increment applied on each scheduled regeneration.
  /// Zero disables animation entirely.
  pub pan_step: Vec2,

  /// Seconds between scheduled regenerations.
  pub regen_delay: f32,
}

impl Default for TilemapConfig {
  fn default() -> Self {
    Self {
      grid_size: 10,
      cell_scale: 1.0,
      noise_scale: 5.0,
      pan_step: Vec2::ZERO,
      regen_delay: 1.0,
    }
  }
}

impl TilemapConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_grid_size(mut self, grid_size: u32) -> Self {
    self.grid_size = grid_size;
    self
  }

  pub fn with_cell_scale(mut self, cell_scale: f32) -> Self {
    self.cell_scale = cell_scale;
    self
  }

  pub fn with_noise_scale(mut self, noise_scale: f32) -> Self {
    self.noise_scale = noise_scale;
    self
  }

  pub fn with_pan_step(mut self, pan_step: Vec2) -> Self {
    self.pan_step = pan_step;
    self
  }

  pub fn with_regen_delay(mut self, regen_delay: f32) -> Self {
    self.regen_delay = regen_delay;
    self
  }

  /// Validate before any buffer allocation.
  ///
  /// The `!(x > 0.0)` form also rejects NaN.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
      return Err(ConfigError::GridSize(self.grid_size));
    }
    if !(self.cell_scale > 0.0) {
      return Err(ConfigError::CellScale(self.cell_scale));
    }
    if !(self.noise_scale > 0.0) {
      return Err(ConfigError::NoiseScale(self.noise_scale));
    }
    if !(self.regen_delay > 0.0) {
      return Err(ConfigError::RegenDelay(self.regen_delay));
    }
    Ok(())
  }
}

/// Binary occupancy grid of (N+1)×(N+1) samples.
///
/// Sized once at initialization and overwritten in place on every
/// regeneration; never resized afterwards. Each entry is 0 or 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightGrid {
  grid_size: u32,
  weights: Vec<u8>,
}

impl WeightGrid {
  pub fn new(grid_size: u32) -> Self {
    Self {
      grid_size,
      weights: vec![0; sample_count(grid_size)],
    }
  }

  /// Grid dimension N (cells per side).
  pub fn grid_size(&self) -> u32 {
    self.grid_size
  }

  /// Samples per side: N+1.
  pub fn samples_per_side(&self) -> u32 {
    self.grid_size + 1
  }

  #[inline(always)]
  fn index(&self, i: u32, j: u32) -> usize {
    debug_assert!(i <= self.grid_size && j <= self.grid_size);
    (i * (self.grid_size + 1) + j) as usize
  }

  /// Weight at sample (i, j), always 0 or 1.
  #[inline(always)]
  pub fn get(&self, i: u32, j: u32) -> u8 {
    self.weights[self.index(i, j)]
  }

  #[inline(always)]
  pub(crate) fn set(&mut self, i: u32, j: u32, weight: u8) {
    debug_assert!(weight <= 1, "weight must be binary, got {weight}");
    let idx = self.index(i, j);
    self.weights[idx] = weight;
  }

  /// Row-major sample view for read-only observers (debug overlays).
  pub fn as_slice(&self) -> &[u8] {
    &self.weights
  }
}

/// Generated mesh buffers: positions, triangle indices, and UVs.
///
/// Positions and UVs have fixed capacity N×N×8 and are fully overwritten
/// every pass; indices are rebuilt from empty. `clear` keeps capacity so a
/// regeneration never reallocates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
  /// One 3D position per vertex slot, world-space, y = 0 plane.
  pub positions: Vec<Vec3>,

  /// Flat vertex-buffer indices, 3 per triangle, append-only per pass.
  pub indices: Vec<u32>,

  /// One UV per vertex slot, parallel to `positions`.
  pub uvs: Vec<Vec2>,
}

impl MeshBuffers {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-size position and UV buffers for the given grid.
  pub fn with_grid_size(grid_size: u32) -> Self {
    let capacity = vertex_capacity(grid_size);
    Self {
      positions: vec![Vec3::ZERO; capacity],
      indices: Vec::new(),
      uvs: vec![Vec2::ZERO; capacity],
    }
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.indices.clear();
    self.uvs.clear();
  }

  /// Returns true if no triangles were generated.
  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Statistics from one regeneration pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegenStats {
  /// Triangles emitted by the pass.
  pub triangle_count: usize,
  /// Total pass time in microseconds.
  pub total_us: u64,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
