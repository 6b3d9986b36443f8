// src/numerics/types/traits.rs
// Scalar trait shared by every numeric type, plus the "apply to vector" capability.

use core::fmt;

use super::vector::Vector3;

/// FloatingPoint is the scalar trait for the numerics types.
///
/// We require Copy, PartialOrd, Display and the basic arithmetic ops on Self,
/// plus the handful of transcendental functions the transforms need.
pub trait FloatingPoint:
Copy + PartialOrd + fmt::Debug + fmt::Display + From<f32>
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    /// Returns `(sin, cos)` of an angle in radians.
    fn sin_cos(self) -> (Self, Self);
    fn to_radians(self) -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn abs(self) -> Self { f32::abs(self) }
    fn sin_cos(self) -> (Self, Self) { f32::sin_cos(self) }
    fn to_radians(self) -> Self { f32::to_radians(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn abs(self) -> Self { f64::abs(self) }
    fn sin_cos(self) -> (Self, Self) { f64::sin_cos(self) }
    fn to_radians(self) -> Self { f64::to_radians(self) }
}

/// Anything that maps a `Vector3` to a new `Vector3`.
///
/// `Matrix3` applies its linear part; `Matrix4` treats the vector as a point
/// (translation included, homogeneous divide applied).
pub trait ApplyToVector<T: FloatingPoint = f32> {
    fn apply(&self, v: Vector3<T>) -> Vector3<T>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(<f32 as FloatingPoint>::zero(), 0.0);
        assert_eq!(<f64 as FloatingPoint>::one(), 1.0);
    }

    #[test]
    fn test_degrees_to_radians() {
        let r = FloatingPoint::to_radians(180.0_f32);
        assert!((r - core::f32::consts::PI).abs() < 1e-6);

        let (s, c) = FloatingPoint::sin_cos(FloatingPoint::to_radians(90.0_f64));
        assert!((s - 1.0).abs() < 1e-12);
        assert!(c.abs() < 1e-12);
    }
}
