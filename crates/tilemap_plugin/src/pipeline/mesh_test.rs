use glam::Vec3;

use super::{cell_triangles, emit_cell_vertices, emit_triangles, emit_vertices};
use crate::constants::{cell_base_index, vertex_capacity};
use crate::types::WeightGrid;

#[test]
fn test_local_vertex_layout() {
  let mut positions = vec![Vec3::ZERO; vertex_capacity(2)];
  emit_cell_vertices(&mut positions, 1, 0, 2, 1.0);

  let base = cell_base_index(1, 0, 2);
  assert_eq!(positions[base], Vec3::new(1.0, 0.0, 0.0)); // a
  assert_eq!(positions[base + 1], Vec3::new(1.0, 0.0, 0.5)); // mid(a, b)
  assert_eq!(positions[base + 2], Vec3::new(1.0, 0.0, 1.0)); // b
  assert_eq!(positions[base + 3], Vec3::new(1.5, 0.0, 1.0)); // mid(b, c)
  assert_eq!(positions[base + 4], Vec3::new(2.0, 0.0, 1.0)); // c
  assert_eq!(positions[base + 5], Vec3::new(2.0, 0.0, 0.5)); // mid(c, d)
  assert_eq!(positions[base + 6], Vec3::new(2.0, 0.0, 0.0)); // d
  assert_eq!(positions[base + 7], Vec3::new(1.5, 0.0, 0.0)); // mid(d, a)
}

#[test]
fn test_cell_scale_applies_to_every_vertex() {
  let mut positions = vec![Vec3::ZERO; vertex_capacity(1)];
  emit_cell_vertices(&mut positions, 0, 0, 1, 2.5);

  assert_eq!(positions[4], Vec3::new(2.5, 0.0, 2.5)); // corner c
  assert_eq!(positions[5], Vec3::new(2.5, 0.0, 1.25)); // mid(c, d)
  assert!(positions.iter().all(|p| p.y == 0.0));
}

#[test]
fn test_emit_vertices_fills_every_slot() {
  let mut positions = Vec::new();
  emit_vertices(&mut positions, 3, 1.0);
  assert_eq!(positions.len(), vertex_capacity(3));

  // Adjacent cells duplicate coincident corners rather than sharing slots:
  // cell (0,0) corner c equals cell (1,1) corner a.
  let c_of_origin = positions[cell_base_index(0, 0, 3) + 4];
  let a_of_diagonal = positions[cell_base_index(1, 1, 3)];
  assert_eq!(c_of_origin, a_of_diagonal);
}

#[test]
fn test_cell_triangles_offsets_to_base() {
  let indices = cell_triangles(1, 16);
  assert_eq!(indices.as_slice(), &[16, 17, 23]);

  let indices = cell_triangles(0, 16);
  assert!(indices.is_empty());

  let indices = cell_triangles(15, 8);
  assert_eq!(indices.as_slice(), &[8, 10, 12, 8, 12, 14]);
}

#[test]
#[should_panic(expected = "classifier defect")]
fn test_out_of_range_code_panics() {
  cell_triangles(16, 0);
}

#[test]
fn test_spec_example_grid() {
  // N = 2 with weights W[i][j]:
  //   W[0] = [0, 1, 0]
  //   W[1] = [1, 1, 0]
  //   W[2] = [0, 0, 1]
  let mut grid = WeightGrid::new(2);
  grid.set(0, 1, 1);
  grid.set(1, 0, 1);
  grid.set(1, 1, 1);
  grid.set(2, 2, 1);

  let mut indices = Vec::new();
  emit_triangles(&mut indices, &grid);

  // cell (0,0): a=0 b=1 c=1 d=1 -> code 14 -> (1,2,4)(1,4,7)(4,6,7)
  let base = cell_base_index(0, 0, 2) as u32;
  assert_eq!(
    &indices[0..9],
    &[
      base + 1,
      base + 2,
      base + 4,
      base + 1,
      base + 4,
      base + 7,
      base + 4,
      base + 6,
      base + 7
    ]
  );

  // cell (1,1): a=1 b=0 c=1 d=0 -> code 5 -> (0,1,7)(3,4,5)
  let base = cell_base_index(1, 1, 2) as u32;
  let tail = &indices[indices.len() - 6..];
  assert_eq!(
    tail,
    &[base, base + 1, base + 7, base + 3, base + 4, base + 5]
  );
}

#[test]
fn test_triangles_never_span_cells() {
  let mut grid = WeightGrid::new(4);
  // Mixed pattern touching many cases
  for i in 0..=4 {
    for j in 0..=4 {
      grid.set(i, j, ((i * 3 + j * 5) % 2) as u8);
    }
  }

  let mut indices = Vec::new();
  emit_triangles(&mut indices, &grid);
  assert_eq!(indices.len() % 3, 0);

  for tri in indices.chunks_exact(3) {
    let block = tri[0] as usize / 8;
    for &idx in tri {
      assert!((idx as usize) < vertex_capacity(4));
      assert_eq!(
        idx as usize / 8,
        block,
        "triangle {:?} spans two cells",
        tri
      );
    }
  }
}

#[test]
fn test_index_buffer_rebuilt_from_empty() {
  let mut grid = WeightGrid::new(2);
  for i in 0..=2 {
    for j in 0..=2 {
      grid.set(i, j, 1);
    }
  }

  let mut indices = Vec::new();
  emit_triangles(&mut indices, &grid);
  let full = indices.clone();
  assert_eq!(full.len(), 2 * 2 * 2 * 3); // two triangles per full cell

  // Re-running must not append
  emit_triangles(&mut indices, &grid);
  assert_eq!(indices, full);
}

#[test]
fn test_triangle_pass_is_deterministic() {
  let mut grid = WeightGrid::new(6);
  for i in 0..=6 {
    for j in 0..=6 {
      grid.set(i, j, ((i * i + j) % 2) as u8);
    }
  }

  let mut first = Vec::new();
  let mut second = Vec::new();
  emit_triangles(&mut first, &grid);
  emit_triangles(&mut second, &grid);
  assert_eq!(first, second);
}
