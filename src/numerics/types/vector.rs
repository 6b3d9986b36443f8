// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use super::traits::FloatingPoint;

/// Vector3 is a simple 3D vector type with template-able numeric type.
///
/// Every operation returns a new value; fields may be read (and written) freely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Vector3<T>
where
    T: FloatingPoint + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(&self.x, &self.y, &self.z), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T) as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self x other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length. Zero only for the zero vector.
    pub fn magnitude(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A zero-length vector normalizes to the zero vector instead of dividing by zero.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > T::zero() {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        } else {
            Self::zero()
        }
    }
}

impl<T: FloatingPoint> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Formats as `(x, y, z)` with two decimal digits.
impl<T: FloatingPoint> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

// Conversions between Vector3<T> and tuples / arrays

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::from(*tuple)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::from(*array)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_vector_add_sub() {
        let a = Vector3::new(1.0_f32, 2.0_f32, 3.0_f32);
        let b = Vector3::new(4.0_f32, 5.0_f32, 6.0_f32);

        let sum = a + b;
        assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

        let diff = sum - a;
        assert_eq!(diff, b);

        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_dot_and_cross() {
        let v1 = Vector3::new(3.0_f32, 4.0, 5.0);
        let v2 = Vector3::new(1.0_f32, 2.0, 3.0);

        assert_eq!(v1.dot(&v2), 26.0);
        assert_eq!(v1.cross(&v2), Vector3::new(2.0, -4.0, 2.0));

        // Right-handed basis
        let x = Vector3::new(1.0_f32, 0.0, 0.0);
        let y = Vector3::new(0.0_f32, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let a = Vector3::new(1.0_f32, 2.0_f32, 3.0_f32);
        assert!(approx_eq(a.length_squared(), 14.0));
        assert!(approx_eq(a.magnitude(), 14.0_f32.sqrt()));

        let n = Vector3::new(0.0_f32, 3.0, 4.0).normalize();
        assert!(approx_eq(n.x, 0.0));
        assert!(approx_eq(n.y, 0.6));
        assert!(approx_eq(n.z, 0.8));
        assert!(approx_eq(n.magnitude(), 1.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let z = Vector3::<f32>::zero().normalize();
        assert_eq!(z, Vector3::new(0.0, 0.0, 0.0));
        assert!(!z.x.is_nan() && !z.y.is_nan() && !z.z.is_nan());
    }

    #[test]
    fn test_display_two_decimals() {
        let v = Vector3::new(3.0_f32, 4.0, 5.0);
        assert_eq!(v.to_string(), "(3.00, 4.00, 5.00)");

        let w = Vector3::new(0.1234_f32, -1.5, 7.071_068);
        assert_eq!(format!("{}", w), "(0.12, -1.50, 7.07)");
    }

    #[test]
    fn test_vector_generic_type() {
        let v_default: Vector3 = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(v_default.z, 1.0_f32);

        let v64: Vector3<f64> = Vector3::new(1.0, 2.0, 3.0);
        let w64: Vector3<f64> = Vector3::new(3.0, 2.0, 1.0);
        assert_eq!(v64 + w64, Vector3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let tup = (1.0f32, 2.0f32, 3.0f32);
        let v: Vector3<f32> = tup.into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let back: (f32, f32, f32) = v.into();
        assert_eq!(back, tup);

        let arr = [7.0f32, 8.0, 9.0];
        let v = Vector3::from(&arr);
        let back: [f32; 3] = (&v).into();
        assert_eq!(back, arr);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let v = Vector3::new(1.5f32, -2.0f32, 3.25f32);

        let encoded = bincode::serde::encode_to_vec(v, config).expect("serialize failed");
        let (decoded, _len): (Vector3<f32>, _) =
            bincode::serde::decode_from_slice(&encoded, config).expect("deserialize failed");

        assert_eq!(v, decoded);
    }
}
