//! Pipeline collaborator traits.

/// Continuous 2D noise field sampled by the weights stage.
///
/// The only required contract: deterministic, continuous, and values in
/// [0, 1]. Any smooth pseudo-random field generator satisfies it, which
/// keeps the pipeline a pure function of its inputs: identical offsets
/// reproduce identical weight grids.
pub trait NoiseSource: Send + Sync {
  /// Sample the field at (x, y). Must return a value in [0, 1].
  fn sample(&self, x: f32, y: f32) -> f32;
}

/// Blanket impl for boxed trait objects.
impl NoiseSource for Box<dyn NoiseSource> {
  fn sample(&self, x: f32, y: f32) -> f32 {
    (**self).sample(x, y)
  }
}
