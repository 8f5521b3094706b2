//! Buffer layout constants for the tilemap grid.
//!
//! A grid of size N partitions the plane into N×N cells sampled at
//! (N+1)×(N+1) points. Every cell owns a fixed block of 8 vertex slots in the
//! flat vertex buffer; slots are never shared between neighboring cells, even
//! where positions coincide. Downstream normal calculation relies on the
//! per-cell slots, so coincident vertices stay duplicated.
//!
//! # Vertex Buffer Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  cell (0,0)      cell (0,1)     ...     cell (N-1,N-1)   │
//! │  [0..8)          [8..16)                [N*N*8-8..N*N*8) │
//! │                                                          │
//! │  slot k of cell (i,j):  i*N*8 + j*8 + k                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

/// Vertex slots allocated per cell: 4 corners + 4 edge midpoints.
pub const VERTS_PER_CELL: usize = 8;

/// Upper bound on the configurable grid dimension.
pub const MAX_GRID_SIZE: u32 = 100;

/// Flat vertex-buffer index of slot 0 of cell (i, j).
#[inline(always)]
pub const fn cell_base_index(i: u32, j: u32, grid_size: u32) -> usize {
  (i as usize * grid_size as usize + j as usize) * VERTS_PER_CELL
}

/// Total vertex slots for a grid of the given size.
#[inline(always)]
pub const fn vertex_capacity(grid_size: u32) -> usize {
  grid_size as usize * grid_size as usize * VERTS_PER_CELL
}

/// Number of weight samples for a grid of the given size: (N+1)².
#[inline(always)]
pub const fn sample_count(grid_size: u32) -> usize {
  (grid_size as usize + 1) * (grid_size as usize + 1)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
