//! tilemap_plugin - Engine-independent marching-squares tilemap meshing
//!
//! This crate generates a triangulated, texturable surface mesh from a 2D
//! scalar field. A grid of binary occupancy samples is classified into one
//! of 16 per-cell configurations, and each configuration maps to a fixed
//! triangulation of the cell's 8-vertex layout (4 corners + 4 edge
//! midpoints). Panning the sampled field over time produces a scrolling,
//! animated terrain surface.
//!
//! # Features
//!
//! - **Fixed-layout meshing**: 8 vertex slots per cell, never welded across
//!   neighbors, so the whole mesh uses one flat indexing scheme
//! - **16-case triangulation table**: constant lookup, consistent winding,
//!   fixed saddle resolution
//! - **Incremental panning**: a tick scheduler advances the pan offset and
//!   regenerates in place, with no drift versus direct sampling
//! - **Pluggable noise**: any deterministic `[0, 1]` field via
//!   [`NoiseSource`]; Perlin included
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec2;
//! use tilemap_plugin::{PerlinField, TilemapConfig, TilemapScroller};
//!
//! let config = TilemapConfig::default()
//!     .with_grid_size(32)
//!     .with_pan_step(Vec2::splat(0.1));
//! let noise = PerlinField::new(42);
//!
//! let mut scroller = TilemapScroller::new(config, &noise)?;
//! // Per-frame driver:
//! if scroller.tick(dt, &noise) {
//!     let mesh = scroller.mesh();
//!     // upload mesh.positions / mesh.indices / mesh.uvs,
//!     // recompute normals and bounds renderer-side
//! }
//! ```

pub mod case_table;
pub mod constants;
pub mod types;

// Re-export commonly used items
pub use case_table::{local_vertex_offset, CASE_TRIANGLES};
pub use constants::{cell_base_index, vertex_capacity, MAX_GRID_SIZE, VERTS_PER_CELL};
pub use types::{ConfigError, MeshBuffers, RegenStats, TilemapConfig, WeightGrid};

// Generation pipeline
pub mod pipeline;
pub use pipeline::NoiseSource;

// Generator state and tick scheduler
pub mod generator;
pub mod scroller;
pub use generator::TilemapGenerator;
pub use scroller::TilemapScroller;

// Noise fields
pub mod field_samplers;
pub mod perlin;
pub use field_samplers::{CheckerField, SplitField, UniformField};
pub use perlin::PerlinField;
