//! Tilemap generation pipeline.
//!
//! Four stages run in strict sequence over shared grid-sized buffers on
//! every regeneration:
//!
//! ```text
//! ┌───────────┐     ┌──────────┐     ┌──────────────┐     ┌───────────┐
//! │  Weights  ├────►│ Classify ├────►│ Cell Meshing ├────►│ UV Project│
//! └───────────┘     └──────────┘     └──────────────┘     └───────────┘
//!      │                  │                  │                   │
//! WeightGrid         case code          positions +          uvs (x, z)
//! (N+1)² of 0/1      per cell 0..16     indices
//! ```
//!
//! 1. **Weights**: threshold a continuous noise field into (N+1)² binary
//!    samples at the current pan offset
//! 2. **Classify**: pack each cell's four corner weights into a 4-bit case
//!    code (recomputed every pass, never cached)
//! 3. **Cell Meshing**: emit the fixed 8-vertex layout per cell and append
//!    the triangles of [`crate::case_table::CASE_TRIANGLES`]
//! 4. **UV Project**: copy each vertex's planar (x, z) into the UV buffer
//!
//! The whole pass is synchronous and total: no stage suspends, fails, or
//! reads a buffer a later stage has not fully written.

pub mod types;

// Stage implementations
pub mod classify;
pub mod generate;
pub mod mesh;
pub mod uv;
pub mod weights;


// Re-exports
pub use generate::{regenerate, regenerate_timed};
pub use types::NoiseSource;
