// src/numerics/types/matrix.rs
// Fixed-size square matrices (3x3 and 4x4) for linear and affine transforms.
//
// Storage is row-major, indexed as (row, column). Transforms follow the
// column-vector convention `M * v`, so `T * R * S` applies S first.

use core::fmt;
use core::ops::{Index, IndexMut, Mul};

use crate::numerics::error::ShapeError;
use crate::numerics::types::traits::{ApplyToVector, FloatingPoint};
use crate::numerics::types::vector::Vector3;

/// Below this magnitude the homogeneous `w` is replaced by 1 instead of dividing by it.
pub const HOMOGENEOUS_W_EPSILON: f32 = 1e-5;

/// Square numeric grid of fixed dimension `N`.
///
/// Values are copied in on construction. Factories and products always return a
/// fresh matrix; `set` / `IndexMut` exist for building a grid before handing it out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SquareMatrix<T: FloatingPoint, const N: usize> {
    data: [[T; N]; N],
}

/// 3x3 linear transform (no translation, no homogeneous coordinate).
pub type Matrix3<T = f32> = SquareMatrix<T, 3>;

/// 4x4 affine / projective transform.
pub type Matrix4<T = f32> = SquareMatrix<T, 4>;

impl<T: FloatingPoint, const N: usize> SquareMatrix<T, N> {
    /// Construct from a grid whose shape is already fixed by the type.
    pub fn new(data: [[T; N]; N]) -> Self {
        Self { data }
    }

    /// Construct from an arbitrary grid of rows, rejecting anything that is not `N x N`.
    pub fn try_from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, ShapeError> {
        if rows.len() != N {
            tracing::debug!(expected = N, found = rows.len(), "rejecting matrix grid: wrong row count");
            return Err(ShapeError::RowCount { expected: N, found: rows.len() });
        }

        let mut m = Self::zero();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != N {
                tracing::debug!(expected = N, row = i, found = row.len(), "rejecting matrix grid: wrong row length");
                return Err(ShapeError::RowLength { row: i, expected: N, found: row.len() });
            }
            m.data[i].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [[T::zero(); N]; N] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row][col] = value;
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; N] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; N] {
        core::array::from_fn(|i| self.data[i][idx])
    }

    /// The whole grid, row-major.
    pub fn rows(&self) -> &[[T; N]; N] {
        &self.data
    }

    /// Matrix product `self * rhs`: `r[i][j] = sum_k self[i][k] * rhs[k][j]`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut result = Self::zero();
        for (i, row) in result.data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                *cell = sum;
            }
        }
        result
    }

    pub fn transpose(&self) -> Self {
        Self { data: core::array::from_fn(|i| self.column(i)) }
    }

    // Both callers have N >= 3.
    fn diagonal_scale(sx: T, sy: T, sz: T) -> Self {
        let mut m = Self::identity();
        m.data[0][0] = sx;
        m.data[1][1] = sy;
        m.data[2][2] = sz;
        m
    }

    /// Right-handed rotation by `degrees` in the plane spanned by axes `a` -> `b`.
    fn plane_rotation(degrees: T, a: usize, b: usize) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let mut m = Self::identity();
        m.data[a][a] = c;
        m.data[a][b] = -s;
        m.data[b][a] = s;
        m.data[b][b] = c;
        m
    }

    fn linear_apply(&self, v: Vector3<T>) -> Vector3<T> {
        let d = &self.data;
        Vector3::new(
            d[0][0] * v.x + d[0][1] * v.y + d[0][2] * v.z,
            d[1][0] * v.x + d[1][1] * v.y + d[1][2] * v.z,
            d[2][0] * v.x + d[2][1] * v.y + d[2][2] * v.z,
        )
    }
}

impl<T: FloatingPoint> Matrix3<T> {
    /// Non-uniform scale along the principal axes.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Self::diagonal_scale(sx, sy, sz)
    }

    /// Rotation about the X axis, angle in degrees.
    ///
    /// The 3x3 type only carries the X rotation; use `Matrix4` for Y and Z.
    pub fn rotation_x(degrees: T) -> Self {
        Self::plane_rotation(degrees, 1, 2)
    }

    /// `M * v`, purely linear.
    pub fn multiply_vector(&self, v: Vector3<T>) -> Vector3<T> {
        self.linear_apply(v)
    }

    pub fn to_row_major_array(&self) -> [T; 9] {
        core::array::from_fn(|i| self.data[i / 3][i % 3])
    }
}

impl<T: FloatingPoint> Matrix4<T> {
    /// Scale with diagonal `(sx, sy, sz, 1)`.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Self::diagonal_scale(sx, sy, sz)
    }

    /// Rotation about the X axis, angle in degrees.
    pub fn rotation_x(degrees: T) -> Self {
        Self::plane_rotation(degrees, 1, 2)
    }

    /// Rotation about the Y axis, angle in degrees.
    pub fn rotation_y(degrees: T) -> Self {
        Self::plane_rotation(degrees, 2, 0)
    }

    /// Rotation about the Z axis, angle in degrees.
    pub fn rotation_z(degrees: T) -> Self {
        Self::plane_rotation(degrees, 0, 1)
    }

    /// Identity with the last column set to `(x, y, z, 1)`.
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m.data[0][3] = x;
        m.data[1][3] = y;
        m.data[2][3] = z;
        m
    }

    /// Transform `(x, y, z, 1)` and divide by the resulting `w`.
    ///
    /// When `|w| < HOMOGENEOUS_W_EPSILON` the divide uses `w = 1` instead.
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let d = &self.data;
        let mut w = d[3][0] * v.x + d[3][1] * v.y + d[3][2] * v.z + d[3][3];
        if w.abs() < T::from(HOMOGENEOUS_W_EPSILON) {
            tracing::trace!(w = %w, "near-zero homogeneous w, substituting 1");
            w = T::one();
        }

        Vector3::new(
            (d[0][0] * v.x + d[0][1] * v.y + d[0][2] * v.z + d[0][3]) / w,
            (d[1][0] * v.x + d[1][1] * v.y + d[1][2] * v.z + d[1][3]) / w,
            (d[2][0] * v.x + d[2][1] * v.y + d[2][2] * v.z + d[2][3]) / w,
        )
    }

    /// Transform a position. Same as `transform_vector`; translation is included.
    pub fn transform_point(&self, p: Vector3<T>) -> Vector3<T> {
        self.transform_vector(p)
    }

    /// Transform a direction: upper-left 3x3 only, no translation, no divide.
    pub fn transform_direction(&self, d: Vector3<T>) -> Vector3<T> {
        self.linear_apply(d)
    }

    /// Upper-left 3x3 block.
    pub fn linear_part(&self) -> Matrix3<T> {
        SquareMatrix::new(core::array::from_fn(|i| {
            core::array::from_fn(|j| self.data[i][j])
        }))
    }

    /// Row-major 16-float buffer.
    pub fn to_row_major_array(&self) -> [T; 16] {
        core::array::from_fn(|i| self.data[i / 4][i % 4])
    }

    /// Column-major 16-float buffer, the layout GL-style uniforms expect untransposed.
    pub fn to_column_major_array(&self) -> [T; 16] {
        core::array::from_fn(|i| self.data[i % 4][i / 4])
    }
}

impl<T: FloatingPoint, const N: usize> Default for SquareMatrix<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint, const N: usize> Index<(usize, usize)> for SquareMatrix<T, N> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T: FloatingPoint, const N: usize> IndexMut<(usize, usize)> for SquareMatrix<T, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T: FloatingPoint, const N: usize> From<[[T; N]; N]> for SquareMatrix<T, N> {
    fn from(data: [[T; N]; N]) -> Self {
        Self::new(data)
    }
}

impl<T: FloatingPoint, const N: usize> TryFrom<Vec<Vec<T>>> for SquareMatrix<T, N> {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        Self::try_from_rows(&rows)
    }
}

impl<T: FloatingPoint, const N: usize> Mul for SquareMatrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: FloatingPoint, const N: usize> Mul for &SquareMatrix<T, N> {
    type Output = SquareMatrix<T, N>;

    fn mul(self, rhs: Self) -> SquareMatrix<T, N> {
        self.multiply(rhs)
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.multiply_vector(rhs)
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix4<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.transform_point(rhs)
    }
}

impl<T: FloatingPoint> ApplyToVector<T> for Matrix3<T> {
    fn apply(&self, v: Vector3<T>) -> Vector3<T> {
        self.multiply_vector(v)
    }
}

impl<T: FloatingPoint> ApplyToVector<T> for Matrix4<T> {
    fn apply(&self, v: Vector3<T>) -> Vector3<T> {
        self.transform_point(v)
    }
}

/// Three lines of `[a b c]`, two decimals each.
impl<T: FloatingPoint> fmt::Display for Matrix3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "[{:.2} {:.2} {:.2}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Four lines of `[a, b, c, d]`, each value right-aligned to width 8 with three decimals.
impl<T: FloatingPoint> fmt::Display for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "[{:8.3}, {:8.3}, {:8.3}, {:8.3}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T, const N: usize> serde::Serialize for SquareMatrix<T, N>
where
    T: FloatingPoint + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.data.iter().map(|row| row.as_slice()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for SquareMatrix<T, N>
where
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <Vec<Vec<T>> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from_rows(&rows).map_err(serde::de::Error::custom)
    }
}
