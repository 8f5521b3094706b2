//! Stage 3: Cell Meshing
//!
//! Two passes over the cells, matching the buffer layout in
//! [`crate::constants`]:
//!
//! 1. vertex pass — every cell writes its 8 local vertices (4 corners + 4
//!    edge midpoints) into its fixed slot block, unconditionally
//! 2. triangle pass — every cell is classified and the case's triangles are
//!    appended to the index buffer, offset to the cell's base slot
//!
//! The vertex pass visits every cell, so no stale positions survive a
//! regeneration. Triangles never reference slots outside the issuing cell's
//! block.

use glam::Vec3;
use smallvec::SmallVec;

use super::classify::classify_cell;
use crate::case_table::CASE_TRIANGLES;
use crate::constants::{cell_base_index, vertex_capacity};
use crate::types::WeightGrid;

/// Write the 8 local vertices of cell (i, j) into its slot block.
///
/// Slots counter-clockwise from the origin corner: 0 = a, 2 = b, 4 = c,
/// 6 = d, odd slots the midpoints between them.
pub fn emit_cell_vertices(
  positions: &mut [Vec3],
  i: u32,
  j: u32,
  grid_size: u32,
  cell_scale: f32,
) {
  let a = Vec3::new(i as f32, 0.0, j as f32) * cell_scale;
  let b = Vec3::new(i as f32, 0.0, j as f32 + 1.0) * cell_scale;
  let c = Vec3::new(i as f32 + 1.0, 0.0, j as f32 + 1.0) * cell_scale;
  let d = Vec3::new(i as f32 + 1.0, 0.0, j as f32) * cell_scale;

  let base = cell_base_index(i, j, grid_size);
  positions[base] = a;
  positions[base + 1] = a.lerp(b, 0.5);
  positions[base + 2] = b;
  positions[base + 3] = b.lerp(c, 0.5);
  positions[base + 4] = c;
  positions[base + 5] = c.lerp(d, 0.5);
  positions[base + 6] = d;
  positions[base + 7] = d.lerp(a, 0.5);
}

/// Vertex pass: fill the whole position buffer.
pub fn emit_vertices(positions: &mut Vec<Vec3>, grid_size: u32, cell_scale: f32) {
  positions.resize(vertex_capacity(grid_size), Vec3::ZERO);
  for i in 0..grid_size {
    for j in 0..grid_size {
      emit_cell_vertices(positions, i, j, grid_size, cell_scale);
    }
  }
}

/// Triangle indices for one cell, offset to its base slot.
///
/// At most 3 triangles (9 indices) per cell. An out-of-range code means the
/// classifier is broken; that is a fatal defect, not a recoverable input.
pub fn cell_triangles(code: u8, base: usize) -> SmallVec<[u32; 9]> {
  assert!(code < 16, "case code {code} out of range: classifier defect");
  let mut indices = SmallVec::new();
  for tri in CASE_TRIANGLES[code as usize] {
    for &slot in tri {
      indices.push((base + slot as usize) as u32);
    }
  }
  indices
}

/// Triangle pass: classify every cell and rebuild the index buffer.
pub fn emit_triangles(indices: &mut Vec<u32>, grid: &WeightGrid) {
  indices.clear();

  let grid_size = grid.grid_size();
  for i in 0..grid_size {
    for j in 0..grid_size {
      let code = classify_cell(grid, i, j);
      let base = cell_base_index(i, j, grid_size);
      indices.extend_from_slice(&cell_triangles(code, base));
      debug_assert!(indices.len() % 3 == 0);
    }
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
