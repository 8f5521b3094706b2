//! Stage 4: UV Projection
//!
//! Each vertex's planar (x, z) becomes its texture coordinate, unscaled, so
//! tiling is proportional to the cell scale. No normalization to [0, 1] is
//! performed; the consuming material is expected to wrap.

use glam::{Vec2, Vec3};

/// Project the position buffer into the parallel UV buffer.
pub fn project_uvs(uvs: &mut Vec<Vec2>, positions: &[Vec3]) {
  uvs.clear();
  uvs.extend(positions.iter().map(|p| Vec2::new(p.x, p.z)));
}

#[cfg(test)]
#[path = "uv_test.rs"]
mod uv_test;
