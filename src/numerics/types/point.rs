// src/numerics/types/point.rs
// Point3 is an alias for Vector3; transforms pick point or direction semantics by method.

use super::vector::Vector3;

/// Point3 is an alias to Vector3 to represent positions in space.
///
/// Pass it to `Matrix4::transform_point`; use a plain `Vector3` with
/// `Matrix4::transform_direction` when translation must not apply.
pub type Point3<T = f32> = Vector3<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::matrix::Matrix4;

    #[test]
    fn test_point_alias_behaviour() {
        let p: Point3 = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.x, 1.0_f32);
    }

    #[test]
    fn test_point_moves_direction_does_not() {
        let t = Matrix4::translation(3.0_f32, 0.0, 0.0);
        let p: Point3 = Point3::new(1.0, 0.0, 0.0);

        assert_eq!(t.transform_point(p), Point3::new(4.0, 0.0, 0.0));
        assert_eq!(t.transform_direction(p), Vector3::new(1.0, 0.0, 0.0));
    }
}
