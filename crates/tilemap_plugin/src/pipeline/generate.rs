//! Pipeline orchestration: one full regeneration pass.
//!
//! Runs weights → classify/mesh → UV projection synchronously to
//! completion. The pass is idempotent and total, so there is no retry or
//! cancellation path; a failed tick simply reruns on the next one.

use glam::Vec2;

use super::mesh::{emit_triangles, emit_vertices};
use super::types::NoiseSource;
use super::uv::project_uvs;
use super::weights::sample_weights;
use crate::types::{MeshBuffers, RegenStats, TilemapConfig, WeightGrid};

/// Run all pipeline stages for one pass.
///
/// `weights` and `mesh` are overwritten in place; `config` must already be
/// validated (the generator does this at construction).
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "pipeline::regenerate")
)]
pub fn regenerate<S: NoiseSource>(
  config: &TilemapConfig,
  noise: &S,
  offset: Vec2,
  weights: &mut WeightGrid,
  mesh: &mut MeshBuffers,
) {
  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("sample_weights").entered();
    sample_weights(weights, noise, offset, config.noise_scale);
  }

  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("emit_cells").entered();
    emit_vertices(&mut mesh.positions, config.grid_size, config.cell_scale);
    emit_triangles(&mut mesh.indices, weights);
  }

  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("project_uvs").entered();
    project_uvs(&mut mesh.uvs, &mesh.positions);
  }
}

/// Same as [`regenerate`] but returns per-pass stats.
pub fn regenerate_timed<S: NoiseSource>(
  config: &TilemapConfig,
  noise: &S,
  offset: Vec2,
  weights: &mut WeightGrid,
  mesh: &mut MeshBuffers,
) -> RegenStats {
  use web_time::Instant;

  let start = Instant::now();
  regenerate(config, noise, offset, weights, mesh);

  RegenStats {
    triangle_count: mesh.triangle_count(),
    total_us: start.elapsed().as_micros() as u64,
  }
}
