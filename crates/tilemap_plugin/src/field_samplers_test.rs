use super::*;

#[test]
fn test_uniform_field() {
  let field = UniformField::new(0.25);
  assert_eq!(field.sample(0.0, 0.0), 0.25);
  assert_eq!(field.sample(-100.0, 37.5), 0.25);
}

#[test]
fn test_checker_field_alternates() {
  let field = CheckerField::new(1.0);
  assert_eq!(field.sample(0.5, 0.5), 1.0);
  assert_eq!(field.sample(1.5, 0.5), 0.0);
  assert_eq!(field.sample(1.5, 1.5), 1.0);
  assert_eq!(field.sample(-0.5, 0.5), 0.0);
}

#[test]
fn test_split_field_threshold() {
  let field = SplitField::new(2.0);
  assert_eq!(field.sample(1.99, 0.0), 0.0);
  assert_eq!(field.sample(2.0, 0.0), 1.0);
  assert_eq!(field.sample(5.0, -3.0), 1.0);
}
