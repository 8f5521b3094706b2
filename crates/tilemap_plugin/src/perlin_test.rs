use super::PerlinField;
use crate::pipeline::NoiseSource;

#[test]
fn test_samples_stay_in_unit_range() {
  let field = PerlinField::new(42);
  for i in 0..50 {
    for j in 0..50 {
      let v = field.sample(i as f32 * 0.37, j as f32 * 0.53);
      assert!((0.0..=1.0).contains(&v), "sample {} out of range", v);
    }
  }
}

#[test]
fn test_deterministic_per_seed() {
  let a = PerlinField::new(7);
  let b = PerlinField::new(7);
  assert_eq!(a.sample(1.23, 4.56), b.sample(1.23, 4.56));
}

#[test]
fn test_seeds_differ() {
  let a = PerlinField::new(1);
  let b = PerlinField::new(2);
  let differs = (0..32).any(|k| {
    let x = 0.31 * k as f32;
    a.sample(x, x * 0.7) != b.sample(x, x * 0.7)
  });
  assert!(differs);
}
