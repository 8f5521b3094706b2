//! Stage 2: Classify
//!
//! Packs each cell's four corner weights into a 4-bit case code. Pure
//! lookup-and-combine with no failure modes: codes 0 (empty) and 15 (full)
//! are as legal as any other. Codes are recomputed from the weight grid on
//! every pass; weights change between passes, so nothing here may be
//! cached.

use crate::types::WeightGrid;

/// Corner weights of cell (i, j), counter-clockwise from the cell origin:
/// a = W[i,j], b = W[i,j+1], c = W[i+1,j+1], d = W[i+1,j].
#[inline]
pub fn corner_weights(grid: &WeightGrid, i: u32, j: u32) -> [u8; 4] {
  [
    grid.get(i, j),
    grid.get(i, j + 1),
    grid.get(i + 1, j + 1),
    grid.get(i + 1, j),
  ]
}

/// Case code for one cell: `a + 2b + 4c + 8d`.
///
/// Bit k of the code is the weight at the k-th corner, so the code is always
/// in [0, 15] for binary weights.
#[inline]
pub fn cell_code(corners: [u8; 4]) -> u8 {
  let [a, b, c, d] = corners;
  debug_assert!(
    a <= 1 && b <= 1 && c <= 1 && d <= 1,
    "non-binary corner weights: {corners:?}"
  );
  a + 2 * b + 4 * c + 8 * d
}

/// Classify cell (i, j) of the grid.
#[inline]
pub fn classify_cell(grid: &WeightGrid, i: u32, j: u32) -> u8 {
  cell_code(corner_weights(grid, i, j))
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
