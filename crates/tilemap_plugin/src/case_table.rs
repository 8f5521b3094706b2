//! Precomputed triangulation table for the 16 marching-squares cases.
//!
//! # Cell Topology
//!
//! Corner weights are read counter-clockwise from the cell origin and packed
//! into a 4-bit case code: `code = a + 2b + 4c + 8d`. Bit k of the code is
//! the weight at the k-th corner.
//!
//! ```text
//!   b(2)───3───c(4)         Corners (grid coords):
//!    │           │            a = (i,   j)     bit 0
//!    1           5            b = (i,   j+1)   bit 1
//!    │           │            c = (i+1, j+1)   bit 2
//!   a(0)───7───d(6)          d = (i+1, j)     bit 3
//!
//!   j (z) axis up, i (x) axis right.
//! ```
//!
//! The numbers in parentheses are the 8 local vertex slots: even slots are
//! the corners, odd slots the edge midpoints between them. Every case
//! triangulates some subset of this octagon.
//!
//! # Winding
//!
//! All entries wind the same way as case 1 (corner `a` with its two adjacent
//! midpoints), so every emitted triangle faces the same side of the plane.
//! A single backwards entry would silently flip normals for that case.
//!
//! # Saddle Resolution
//!
//! The two diagonal cases (codes 5 = a+c and 10 = b+d) are ambiguous: the
//! occupied corners could be joined across the cell or left as two separate
//! corner triangles. This table fixes the disconnected resolution for both
//! diagonals, without sampling a center value to disambiguate. The choice is
//! load-bearing: complementary codes do not tile to the full quad for this
//! pair, and changing it alters the generated topology.

/// Triangle triples per case, as local vertex slots 0-7.
///
/// Indexed by the 4-bit case code. Slot values are added to the owning
/// cell's base offset before being appended to the index buffer.
pub const CASE_TRIANGLES: [&[[u8; 3]]; 16] = [
  &[],                                  // 0: empty
  &[[0, 1, 7]],                         // 1: a
  &[[1, 2, 3]],                         // 2: b
  &[[0, 2, 7], [2, 3, 7]],              // 3: a+b
  &[[3, 4, 5]],                         // 4: c
  &[[0, 1, 7], [3, 4, 5]],              // 5: a+c (saddle)
  &[[1, 2, 4], [1, 4, 5]],              // 6: b+c
  &[[0, 2, 7], [2, 5, 7], [2, 4, 5]],   // 7: a+b+c
  &[[5, 6, 7]],                         // 8: d
  &[[0, 1, 5], [0, 5, 6]],              // 9: a+d
  &[[1, 2, 3], [5, 6, 7]],              // 10: b+d (saddle)
  &[[0, 2, 3], [0, 3, 5], [0, 5, 6]],   // 11: a+b+d
  &[[3, 4, 6], [3, 6, 7]],              // 12: c+d
  &[[0, 1, 6], [1, 3, 6], [3, 4, 6]],   // 13: a+c+d
  &[[1, 2, 4], [1, 4, 7], [4, 6, 7]],   // 14: b+c+d
  &[[0, 2, 4], [0, 4, 6]],              // 15: full quad
];

/// Planar offset of local vertex slot `k` within the unit cell, as (di, dj).
#[inline(always)]
pub const fn local_vertex_offset(k: u8) -> [f32; 2] {
  match k {
    0 => [0.0, 0.0],
    1 => [0.0, 0.5],
    2 => [0.0, 1.0],
    3 => [0.5, 1.0],
    4 => [1.0, 1.0],
    5 => [1.0, 0.5],
    6 => [1.0, 0.0],
    7 => [0.5, 0.0],
    _ => panic!("local vertex slot out of range"),
  }
}

#[cfg(test)]
#[path = "case_table_test.rs"]
mod case_table_test;
