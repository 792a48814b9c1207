//! Square matrices.

use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;

/// A 2x2 matrix stored as two row vectors.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix2 {
    row_1: Vector2,
    row_2: Vector2,
}

/// A 3x3 matrix stored as three row vectors.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    row_1: Vector3,
    row_2: Vector3,
    row_3: Vector3,
}

/// A 4x4 matrix stored as four row vectors.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    row_1: Vector4,
    row_2: Vector4,
    row_3: Vector4,
    row_4: Vector4,
}

impl Matrix2 {
    /// Creates a new matrix with the given elements in row-major order.
    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32) -> Self {
        Self::from_rows(Vector2::new(m11, m12), Vector2::new(m21, m22))
    }

    /// Creates a new matrix with the given rows.
    #[inline]
    pub const fn from_rows(row_1: Vector2, row_2: Vector2) -> Self {
        Self { row_1, row_2 }
    }

    /// Creates a new matrix with the given columns.
    #[inline]
    pub const fn from_columns(column_1: Vector2, column_2: Vector2) -> Self {
        Self::new(column_1.x(), column_2.x(), column_1.y(), column_2.y())
    }

    /// Creates a new matrix with the given diagonal and zero elsewhere.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector2) -> Self {
        Self::new(diagonal.x(), 0.0, 0.0, diagonal.y())
    }

    /// Creates a new identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Creates a new matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_rows(Vector2::zeros(), Vector2::zeros())
    }

    /// Creates a new matrix applying a counterclockwise rotation by the
    /// given angle in radians.
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    /// The first row.
    #[inline]
    pub const fn row_1(&self) -> &Vector2 {
        &self.row_1
    }

    /// The second row.
    #[inline]
    pub const fn row_2(&self) -> &Vector2 {
        &self.row_2
    }

    /// Sets the first row.
    #[inline]
    pub const fn set_row_1(&mut self, row: Vector2) {
        self.row_1 = row;
    }

    /// Sets the second row.
    #[inline]
    pub const fn set_row_2(&mut self, row: Vector2) {
        self.row_2 = row;
    }

    /// The first column.
    #[inline]
    pub const fn column_1(&self) -> Vector2 {
        Vector2::new(self.row_1.x(), self.row_2.x())
    }

    /// The second column.
    #[inline]
    pub const fn column_2(&self) -> Vector2 {
        Vector2::new(self.row_1.y(), self.row_2.y())
    }

    /// Returns the row at index `i`.
    ///
    /// # Panics
    /// If `i` is not smaller than 2.
    pub fn row(&self, i: usize) -> &Vector2 {
        match i {
            0 => &self.row_1,
            1 => &self.row_2,
            _ => panic!("index out of bounds"),
        }
    }

    /// Sets the row at index `i`.
    ///
    /// # Panics
    /// If `i` is not smaller than 2.
    pub fn set_row(&mut self, i: usize, row: Vector2) {
        match i {
            0 => self.row_1 = row,
            1 => self.row_2 = row,
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the column at index `j`.
    ///
    /// # Panics
    /// If `j` is not smaller than 2.
    pub fn column(&self, j: usize) -> Vector2 {
        Vector2::new(self.row_1[j], self.row_2[j])
    }

    /// Sets the column at index `j`.
    ///
    /// # Panics
    /// If `j` is not smaller than 2.
    pub fn set_column(&mut self, j: usize, column: Vector2) {
        self.row_1[j] = column.x();
        self.row_2[j] = column.y();
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not smaller than 2.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.row(i)[j]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not smaller than 2.
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        match i {
            0 => &mut self.row_1[j],
            1 => &mut self.row_2[j],
            _ => panic!("index out of bounds"),
        }
    }

    /// The diagonal of the matrix.
    #[inline]
    pub const fn diagonal(&self) -> Vector2 {
        Vector2::new(self.row_1.x(), self.row_2.y())
    }

    /// Sets the diagonal of the matrix.
    #[inline]
    pub const fn set_diagonal(&mut self, diagonal: &Vector2) {
        *self.row_1.x_mut() = diagonal.x();
        *self.row_2.y_mut() = diagonal.y();
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::from_columns(self.row_1, self.row_2)
    }

    /// Computes the trace (sum of diagonal elements) of the matrix.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.row_1.x() + self.row_2.y()
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.row_1.x() * self.row_2.y() - self.row_1.y() * self.row_2.x()
    }

    /// Computes the adjugate of the matrix.
    #[inline]
    pub fn adjoint(&self) -> Self {
        Self::new(
            self.row_2.y(),
            -self.row_1.y(),
            -self.row_2.x(),
            self.row_1.x(),
        )
    }

    /// Computes the inverse of the matrix, or the zero matrix if the
    /// matrix is singular.
    pub fn inverted(&self) -> Self {
        let determinant = self.determinant();
        if determinant == 0.0 {
            Self::zeros()
        } else {
            self.adjoint() / determinant
        }
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::from_rows(self.row_1.mapped(&mut f), self.row_2.mapped(&mut f))
    }

    /// Creates a new matrix with the elements read from the given slice in
    /// row-major order.
    ///
    /// # Panics
    /// If the slice does not have exactly 4 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        match *slice {
            [m11, m12, m21, m22] => Self::new(m11, m12, m21, m22),
            _ => panic!("slice must have exactly 4 elements"),
        }
    }

    /// Writes the elements of the matrix into the given slice in row-major
    /// order.
    ///
    /// # Panics
    /// If the slice does not have exactly 4 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        assert!(slice.len() == 4, "slice must have exactly 4 elements");
        self.row_1.write_to_slice(&mut slice[..2]);
        self.row_2.write_to_slice(&mut slice[2..]);
    }
}

impl From<[f32; 4]> for Matrix2 {
    #[inline]
    fn from([m11, m12, m21, m22]: [f32; 4]) -> Self {
        Self::new(m11, m12, m21, m22)
    }
}

impl From<Matrix2> for [f32; 4] {
    #[inline]
    fn from(matrix: Matrix2) -> Self {
        [
            matrix.row_1.x(),
            matrix.row_1.y(),
            matrix.row_2.x(),
            matrix.row_2.y(),
        ]
    }
}

impl_binop!(Add, add, Matrix2, Matrix2, Matrix2, |a, b| {
    Matrix2::from_rows(a.row_1 + b.row_1, a.row_2 + b.row_2)
});

impl_binop!(Sub, sub, Matrix2, Matrix2, Matrix2, |a, b| {
    Matrix2::from_rows(a.row_1 - b.row_1, a.row_2 - b.row_2)
});

impl_binop!(Mul, mul, Matrix2, f32, Matrix2, |a, b| {
    Matrix2::from_rows(a.row_1 * *b, a.row_2 * *b)
});

impl_binop!(Mul, mul, f32, Matrix2, Matrix2, |a, b| { b * *a });

impl_binop!(Div, div, Matrix2, f32, Matrix2, |a, b| {
    Matrix2::from_rows(a.row_1 / *b, a.row_2 / *b)
});

impl_binop_assign!(AddAssign, add_assign, Matrix2, Matrix2, |a, b| {
    a.row_1 += b.row_1;
    a.row_2 += b.row_2;
});

impl_binop_assign!(SubAssign, sub_assign, Matrix2, Matrix2, |a, b| {
    a.row_1 -= b.row_1;
    a.row_2 -= b.row_2;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix2, f32, |a, b| {
    a.row_1 *= *b;
    a.row_2 *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Matrix2, f32, |a, b| {
    a.row_1 /= *b;
    a.row_2 /= *b;
});

impl_unary_op!(Neg, neg, Matrix2, Matrix2, |val| {
    Matrix2::from_rows(-val.row_1, -val.row_2)
});

impl_binop!(Mul, mul, Matrix2, Matrix2, Matrix2, |a, b| {
    let column_1 = b.column_1();
    let column_2 = b.column_2();
    Matrix2::from_rows(
        Vector2::new(a.row_1.dot(&column_1), a.row_1.dot(&column_2)),
        Vector2::new(a.row_2.dot(&column_1), a.row_2.dot(&column_2)),
    )
});

impl_binop!(Mul, mul, Matrix2, Vector2, Vector2, |a, b| {
    Vector2::new(a.row_1.dot(b), a.row_2.dot(b))
});

impl_binop!(Mul, mul, Vector2, Matrix2, Vector2, |a, b| {
    Vector2::new(a.dot(&b.column_1()), a.dot(&b.column_2()))
});

impl_abs_diff_eq!(Matrix2, |a, b, epsilon| {
    a.row_1.abs_diff_eq(&b.row_1, epsilon) && a.row_2.abs_diff_eq(&b.row_2, epsilon)
});

impl_relative_eq!(Matrix2, |a, b, epsilon, max_relative| {
    a.row_1.relative_eq(&b.row_1, epsilon, max_relative)
        && a.row_2.relative_eq(&b.row_2, epsilon, max_relative)
});

impl_hash!(Matrix2, |m| [
    m.row_1.x(),
    m.row_1.y(),
    m.row_2.x(),
    m.row_2.y(),
]);

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.row_1, self.row_2)
    }
}

impl Matrix3 {
    /// Creates a new matrix with the given elements in row-major order.
    #[inline]
    pub const fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self::from_rows(
            Vector3::new(m11, m12, m13),
            Vector3::new(m21, m22, m23),
            Vector3::new(m31, m32, m33),
        )
    }

    /// Creates a new matrix with the given rows.
    #[inline]
    pub const fn from_rows(row_1: Vector3, row_2: Vector3, row_3: Vector3) -> Self {
        Self { row_1, row_2, row_3 }
    }

    /// Creates a new matrix with the given columns.
    #[inline]
    pub const fn from_columns(column_1: Vector3, column_2: Vector3, column_3: Vector3) -> Self {
        Self::new(
            column_1.x(),
            column_2.x(),
            column_3.x(),
            column_1.y(),
            column_2.y(),
            column_3.y(),
            column_1.z(),
            column_2.z(),
            column_3.z(),
        )
    }

    /// Creates a new matrix with the given diagonal and zero elsewhere.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector3) -> Self {
        Self::new(
            diagonal.x(),
            0.0,
            0.0,
            0.0,
            diagonal.y(),
            0.0,
            0.0,
            0.0,
            diagonal.z(),
        )
    }

    /// Creates a new matrix with the given 2x2 matrix as the upper left
    /// block and the remaining elements as in the identity matrix.
    #[inline]
    pub const fn from_matrix2(matrix: &Matrix2) -> Self {
        Self::new(
            matrix.row_1().x(),
            matrix.row_1().y(),
            0.0,
            matrix.row_2().x(),
            matrix.row_2().y(),
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Creates a new identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_diagonal(&Vector3::ones())
    }

    /// Creates a new matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_rows(Vector3::zeros(), Vector3::zeros(), Vector3::zeros())
    }

    /// Creates a new matrix applying a rotation by the given angle in
    /// radians about the x-axis.
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, sin, cos)
    }

    /// Creates a new matrix applying a rotation by the given angle in
    /// radians about the y-axis.
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, 0.0, sin, 0.0, 1.0, 0.0, -sin, 0.0, cos)
    }

    /// Creates a new matrix applying a rotation by the given angle in
    /// radians about the z-axis.
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0)
    }

    /// The first row.
    #[inline]
    pub const fn row_1(&self) -> &Vector3 {
        &self.row_1
    }

    /// The second row.
    #[inline]
    pub const fn row_2(&self) -> &Vector3 {
        &self.row_2
    }

    /// The third row.
    #[inline]
    pub const fn row_3(&self) -> &Vector3 {
        &self.row_3
    }

    /// Sets the first row.
    #[inline]
    pub const fn set_row_1(&mut self, row: Vector3) {
        self.row_1 = row;
    }

    /// Sets the second row.
    #[inline]
    pub const fn set_row_2(&mut self, row: Vector3) {
        self.row_2 = row;
    }

    /// Sets the third row.
    #[inline]
    pub const fn set_row_3(&mut self, row: Vector3) {
        self.row_3 = row;
    }

    /// The first column.
    #[inline]
    pub const fn column_1(&self) -> Vector3 {
        Vector3::new(self.row_1.x(), self.row_2.x(), self.row_3.x())
    }

    /// The second column.
    #[inline]
    pub const fn column_2(&self) -> Vector3 {
        Vector3::new(self.row_1.y(), self.row_2.y(), self.row_3.y())
    }

    /// The third column.
    #[inline]
    pub const fn column_3(&self) -> Vector3 {
        Vector3::new(self.row_1.z(), self.row_2.z(), self.row_3.z())
    }

    /// Returns the row at index `i`.
    ///
    /// # Panics
    /// If `i` is not smaller than 3.
    pub fn row(&self, i: usize) -> &Vector3 {
        match i {
            0 => &self.row_1,
            1 => &self.row_2,
            2 => &self.row_3,
            _ => panic!("index out of bounds"),
        }
    }

    /// Sets the row at index `i`.
    ///
    /// # Panics
    /// If `i` is not smaller than 3.
    pub fn set_row(&mut self, i: usize, row: Vector3) {
        match i {
            0 => self.row_1 = row,
            1 => self.row_2 = row,
            2 => self.row_3 = row,
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the column at index `j`.
    ///
    /// # Panics
    /// If `j` is not smaller than 3.
    pub fn column(&self, j: usize) -> Vector3 {
        Vector3::new(self.row_1[j], self.row_2[j], self.row_3[j])
    }

    /// Sets the column at index `j`.
    ///
    /// # Panics
    /// If `j` is not smaller than 3.
    pub fn set_column(&mut self, j: usize, column: Vector3) {
        self.row_1[j] = column.x();
        self.row_2[j] = column.y();
        self.row_3[j] = column.z();
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not smaller than 3.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.row(i)[j]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not smaller than 3.
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        match i {
            0 => &mut self.row_1[j],
            1 => &mut self.row_2[j],
            2 => &mut self.row_3[j],
            _ => panic!("index out of bounds"),
        }
    }

    /// The diagonal of the matrix.
    #[inline]
    pub const fn diagonal(&self) -> Vector3 {
        Vector3::new(self.row_1.x(), self.row_2.y(), self.row_3.z())
    }

    /// Sets the diagonal of the matrix.
    #[inline]
    pub const fn set_diagonal(&mut self, diagonal: &Vector3) {
        *self.row_1.x_mut() = diagonal.x();
        *self.row_2.y_mut() = diagonal.y();
        *self.row_3.z_mut() = diagonal.z();
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::from_columns(self.row_1, self.row_2, self.row_3)
    }

    /// Computes the trace (sum of diagonal elements) of the matrix.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.row_1.x() + self.row_2.y() + self.row_3.z()
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        let (a, b, c) = (self.row_1.x(), self.row_1.y(), self.row_1.z());
        let (d, e, f) = (self.row_2.x(), self.row_2.y(), self.row_2.z());
        let (g, h, i) = (self.row_3.x(), self.row_3.y(), self.row_3.z());
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Computes the adjugate of the matrix.
    pub fn adjoint(&self) -> Self {
        let (a, b, c) = (self.row_1.x(), self.row_1.y(), self.row_1.z());
        let (d, e, f) = (self.row_2.x(), self.row_2.y(), self.row_2.z());
        let (g, h, i) = (self.row_3.x(), self.row_3.y(), self.row_3.z());
        Self::new(
            e * i - f * h,
            c * h - b * i,
            b * f - c * e,
            f * g - d * i,
            a * i - c * g,
            c * d - a * f,
            d * h - e * g,
            b * g - a * h,
            a * e - b * d,
        )
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Panics
    /// If the matrix is singular.
    pub fn inverted(&self) -> Self {
        let determinant = self.determinant();
        assert!(
            determinant != 0.0,
            "matrix is singular and cannot be inverted"
        );
        self.adjoint() / determinant
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::from_rows(
            self.row_1.mapped(&mut f),
            self.row_2.mapped(&mut f),
            self.row_3.mapped(&mut f),
        )
    }

    /// Creates a new matrix with the elements read from the given slice in
    /// row-major order.
    ///
    /// # Panics
    /// If the slice does not have exactly 9 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() == 9, "slice must have exactly 9 elements");
        Self::from_rows(
            Vector3::from_slice(&slice[..3]),
            Vector3::from_slice(&slice[3..6]),
            Vector3::from_slice(&slice[6..]),
        )
    }

    /// Writes the elements of the matrix into the given slice in row-major
    /// order.
    ///
    /// # Panics
    /// If the slice does not have exactly 9 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        assert!(slice.len() == 9, "slice must have exactly 9 elements");
        self.row_1.write_to_slice(&mut slice[..3]);
        self.row_2.write_to_slice(&mut slice[3..6]);
        self.row_3.write_to_slice(&mut slice[6..]);
    }
}

impl From<[f32; 9]> for Matrix3 {
    #[inline]
    fn from(elements: [f32; 9]) -> Self {
        Self::from_slice(&elements)
    }
}

impl From<Matrix3> for [f32; 9] {
    #[inline]
    fn from(matrix: Matrix3) -> Self {
        let mut elements = [0.0; 9];
        matrix.write_to_slice(&mut elements);
        elements
    }
}

impl_binop!(Add, add, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_rows(a.row_1 + b.row_1, a.row_2 + b.row_2, a.row_3 + b.row_3)
});

impl_binop!(Sub, sub, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_rows(a.row_1 - b.row_1, a.row_2 - b.row_2, a.row_3 - b.row_3)
});

impl_binop!(Mul, mul, Matrix3, f32, Matrix3, |a, b| {
    Matrix3::from_rows(a.row_1 * *b, a.row_2 * *b, a.row_3 * *b)
});

impl_binop!(Mul, mul, f32, Matrix3, Matrix3, |a, b| { b * *a });

impl_binop!(Div, div, Matrix3, f32, Matrix3, |a, b| {
    Matrix3::from_rows(a.row_1 / *b, a.row_2 / *b, a.row_3 / *b)
});

impl_binop_assign!(AddAssign, add_assign, Matrix3, Matrix3, |a, b| {
    a.row_1 += b.row_1;
    a.row_2 += b.row_2;
    a.row_3 += b.row_3;
});

impl_binop_assign!(SubAssign, sub_assign, Matrix3, Matrix3, |a, b| {
    a.row_1 -= b.row_1;
    a.row_2 -= b.row_2;
    a.row_3 -= b.row_3;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix3, f32, |a, b| {
    a.row_1 *= *b;
    a.row_2 *= *b;
    a.row_3 *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Matrix3, f32, |a, b| {
    a.row_1 /= *b;
    a.row_2 /= *b;
    a.row_3 /= *b;
});

impl_unary_op!(Neg, neg, Matrix3, Matrix3, |val| {
    Matrix3::from_rows(-val.row_1, -val.row_2, -val.row_3)
});

impl_binop!(Mul, mul, Matrix3, Matrix3, Matrix3, |a, b| {
    let column_1 = b.column_1();
    let column_2 = b.column_2();
    let column_3 = b.column_3();
    Matrix3::from_rows(
        Vector3::new(
            a.row_1.dot(&column_1),
            a.row_1.dot(&column_2),
            a.row_1.dot(&column_3),
        ),
        Vector3::new(
            a.row_2.dot(&column_1),
            a.row_2.dot(&column_2),
            a.row_2.dot(&column_3),
        ),
        Vector3::new(
            a.row_3.dot(&column_1),
            a.row_3.dot(&column_2),
            a.row_3.dot(&column_3),
        ),
    )
});

impl_binop!(Mul, mul, Matrix3, Vector3, Vector3, |a, b| {
    Vector3::new(a.row_1.dot(b), a.row_2.dot(b), a.row_3.dot(b))
});

impl_binop!(Mul, mul, Vector3, Matrix3, Vector3, |a, b| {
    Vector3::new(
        a.dot(&b.column_1()),
        a.dot(&b.column_2()),
        a.dot(&b.column_3()),
    )
});

impl_abs_diff_eq!(Matrix3, |a, b, epsilon| {
    a.row_1.abs_diff_eq(&b.row_1, epsilon)
        && a.row_2.abs_diff_eq(&b.row_2, epsilon)
        && a.row_3.abs_diff_eq(&b.row_3, epsilon)
});

impl_relative_eq!(Matrix3, |a, b, epsilon, max_relative| {
    a.row_1.relative_eq(&b.row_1, epsilon, max_relative)
        && a.row_2.relative_eq(&b.row_2, epsilon, max_relative)
        && a.row_3.relative_eq(&b.row_3, epsilon, max_relative)
});

impl_hash!(Matrix3, |m| [
    m.row_1.x(),
    m.row_1.y(),
    m.row_1.z(),
    m.row_2.x(),
    m.row_2.y(),
    m.row_2.z(),
    m.row_3.x(),
    m.row_3.y(),
    m.row_3.z(),
]);

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.row_1, self.row_2, self.row_3)
    }
}

impl Matrix4 {
    /// Creates a new matrix with the given elements in row-major order.
    #[inline]
    pub const fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m14: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m24: f32,
        m31: f32,
        m32: f32,
        m33: f32,
        m34: f32,
        m41: f32,
        m42: f32,
        m43: f32,
        m44: f32,
    ) -> Self {
        Self::from_rows(
            Vector4::new(m11, m12, m13, m14),
            Vector4::new(m21, m22, m23, m24),
            Vector4::new(m31, m32, m33, m34),
            Vector4::new(m41, m42, m43, m44),
        )
    }

    /// Creates a new matrix with the given rows.
    #[inline]
    pub const fn from_rows(
        row_1: Vector4,
        row_2: Vector4,
        row_3: Vector4,
        row_4: Vector4,
    ) -> Self {
        Self {
            row_1,
            row_2,
            row_3,
            row_4,
        }
    }

    /// Creates a new matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self::new(
            column_1.x(),
            column_2.x(),
            column_3.x(),
            column_4.x(),
            column_1.y(),
            column_2.y(),
            column_3.y(),
            column_4.y(),
            column_1.z(),
            column_2.z(),
            column_3.z(),
            column_4.z(),
            column_1.w(),
            column_2.w(),
            column_3.w(),
            column_4.w(),
        )
    }

    /// Creates a new matrix with the given diagonal and zero elsewhere.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut matrix = Self::zeros();
        matrix.set_diagonal(diagonal);
        matrix
    }

    /// Creates a new matrix with the given 3x3 matrix as the upper left
    /// block and the remaining elements as in the identity matrix.
    #[inline]
    pub const fn from_matrix3(matrix: &Matrix3) -> Self {
        Self::from_rows(
            matrix.row_1().extended(0.0),
            matrix.row_2().extended(0.0),
            matrix.row_3().extended(0.0),
            Vector4::unit_w(),
        )
    }

    /// Creates a new identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_diagonal(&Vector4::ones())
    }

    /// Creates a new matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_rows(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a new right-handed view matrix for a camera at `eye` looking
    /// towards `at`, for use with row vectors.
    pub fn look_at(eye: &Vector3, at: &Vector3, up: &Vector3) -> Self {
        let z = (eye - at).normalized();
        let x = up.cross(&z).normalized();
        let y = z.cross(&x).normalized();
        Self::new(
            x.x(),
            y.x(),
            z.x(),
            0.0,
            x.y(),
            y.y(),
            z.y(),
            0.0,
            x.z(),
            y.z(),
            z.z(),
            0.0,
            -x.dot(eye),
            -y.dot(eye),
            -z.dot(eye),
            1.0,
        )
    }

    /// Creates a new right-handed perspective projection matrix from the
    /// given vertical field of view in radians, width-to-height aspect
    /// ratio and near and far plane distances, for use with row vectors.
    pub fn from_perspective_fov(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let y = (fov * 0.5).tan().recip();
        let x = y / aspect;
        let depth = near - far;
        Self::new(
            x,
            0.0,
            0.0,
            0.0,
            0.0,
            y,
            0.0,
            0.0,
            0.0,
            0.0,
            (far + near) / depth,
            -1.0,
            0.0,
            0.0,
            (2.0 * far * near) / depth,
            0.0,
        )
    }

    /// Creates a new matrix applying the given translation to row vectors.
    #[inline]
    pub const fn from_translation(translation: &Vector3) -> Self {
        Self::from_rows(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            translation.extended(1.0),
        )
    }

    /// Creates a new matrix applying the given scaling along each axis.
    #[inline]
    pub const fn from_nonuniform_scale(scale: &Vector3) -> Self {
        Self::from_diagonal(&scale.extended(1.0))
    }

    /// Creates a new matrix applying the rotation represented by the given
    /// quaternion to row vectors.
    ///
    /// The quaternion is not normalized first, so a non-unit quaternion
    /// yields a correspondingly scaled transform.
    pub fn from_quaternion(quaternion: &Quaternion) -> Self {
        let (x, y, z, w) = (
            quaternion.x(),
            quaternion.y(),
            quaternion.z(),
            quaternion.w(),
        );
        let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
        let (xy, xz, xw) = (x * y, x * z, x * w);
        let (yz, yw, zw) = (y * z, y * w, z * w);
        let s = 2.0 / (xx + yy + zz + ww);

        Self::new(
            1.0 - s * (yy + zz),
            s * (xy + zw),
            s * (xz - yw),
            0.0,
            s * (xy - zw),
            1.0 - s * (xx + zz),
            s * (yz + xw),
            0.0,
            s * (xz + yw),
            s * (yz - xw),
            1.0 - s * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// The first row.
    #[inline]
    pub const fn row_1(&self) -> &Vector4 {
        &self.row_1
    }

    /// The second row.
    #[inline]
    pub const fn row_2(&self) -> &Vector4 {
        &self.row_2
    }

    /// The third row.
    #[inline]
    pub const fn row_3(&self) -> &Vector4 {
        &self.row_3
    }

    /// The fourth row.
    #[inline]
    pub const fn row_4(&self) -> &Vector4 {
        &self.row_4
    }

    /// Sets the first row.
    #[inline]
    pub const fn set_row_1(&mut self, row: Vector4) {
        self.row_1 = row;
    }

    /// Sets the second row.
    #[inline]
    pub const fn set_row_2(&mut self, row: Vector4) {
        self.row_2 = row;
    }

    /// Sets the third row.
    #[inline]
    pub const fn set_row_3(&mut self, row: Vector4) {
        self.row_3 = row;
    }

    /// Sets the fourth row.
    #[inline]
    pub const fn set_row_4(&mut self, row: Vector4) {
        self.row_4 = row;
    }

    /// The first column.
    #[inline]
    pub const fn column_1(&self) -> Vector4 {
        Vector4::new(
            self.row_1.x(),
            self.row_2.x(),
            self.row_3.x(),
            self.row_4.x(),
        )
    }

    /// The second column.
    #[inline]
    pub const fn column_2(&self) -> Vector4 {
        Vector4::new(
            self.row_1.y(),
            self.row_2.y(),
            self.row_3.y(),
            self.row_4.y(),
        )
    }

    /// The third column.
    #[inline]
    pub const fn column_3(&self) -> Vector4 {
        Vector4::new(
            self.row_1.z(),
            self.row_2.z(),
            self.row_3.z(),
            self.row_4.z(),
        )
    }

    /// The fourth column.
    #[inline]
    pub const fn column_4(&self) -> Vector4 {
        Vector4::new(
            self.row_1.w(),
            self.row_2.w(),
            self.row_3.w(),
            self.row_4.w(),
        )
    }

    /// Returns the row at index `i`.
    ///
    /// # Panics
    /// If `i` is not smaller than 4.
    pub fn row(&self, i: usize) -> &Vector4 {
        match i {
            0 => &self.row_1,
            1 => &self.row_2,
            2 => &self.row_3,
            3 => &self.row_4,
            _ => panic!("index out of bounds"),
        }
    }

    /// Sets the row at index `i`.
    ///
    /// # Panics
    /// If `i` is not smaller than 4.
    pub fn set_row(&mut self, i: usize, row: Vector4) {
        match i {
            0 => self.row_1 = row,
            1 => self.row_2 = row,
            2 => self.row_3 = row,
            3 => self.row_4 = row,
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the column at index `j`.
    ///
    /// # Panics
    /// If `j` is not smaller than 4.
    pub fn column(&self, j: usize) -> Vector4 {
        Vector4::new(self.row_1[j], self.row_2[j], self.row_3[j], self.row_4[j])
    }

    /// Sets the column at index `j`.
    ///
    /// # Panics
    /// If `j` is not smaller than 4.
    pub fn set_column(&mut self, j: usize, column: Vector4) {
        self.row_1[j] = column.x();
        self.row_2[j] = column.y();
        self.row_3[j] = column.z();
        self.row_4[j] = column.w();
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not smaller than 4.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.row(i)[j]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not smaller than 4.
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        match i {
            0 => &mut self.row_1[j],
            1 => &mut self.row_2[j],
            2 => &mut self.row_3[j],
            3 => &mut self.row_4[j],
            _ => panic!("index out of bounds"),
        }
    }

    /// The diagonal of the matrix.
    #[inline]
    pub const fn diagonal(&self) -> Vector4 {
        Vector4::new(
            self.row_1.x(),
            self.row_2.y(),
            self.row_3.z(),
            self.row_4.w(),
        )
    }

    /// Sets the diagonal of the matrix.
    #[inline]
    pub const fn set_diagonal(&mut self, diagonal: &Vector4) {
        *self.row_1.x_mut() = diagonal.x();
        *self.row_2.y_mut() = diagonal.y();
        *self.row_3.z_mut() = diagonal.z();
        *self.row_4.w_mut() = diagonal.w();
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::from_columns(self.row_1, self.row_2, self.row_3, self.row_4)
    }

    /// Computes the trace (sum of diagonal elements) of the matrix.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.row_1.x() + self.row_2.y() + self.row_3.z() + self.row_4.w()
    }

    /// Computes the determinant of the matrix by cofactor expansion along
    /// the first row, sharing the 2x2 sub-determinants of the lower rows.
    pub fn determinant(&self) -> f32 {
        let (r3, r4) = (&self.row_3, &self.row_4);
        let a = r3.z() * r4.w() - r3.w() * r4.z();
        let b = r3.y() * r4.w() - r3.w() * r4.y();
        let c = r3.y() * r4.z() - r3.z() * r4.y();
        let d = r3.x() * r4.w() - r3.w() * r4.x();
        let e = r3.x() * r4.z() - r3.z() * r4.x();
        let f = r3.x() * r4.y() - r3.y() * r4.x();

        let (r1, r2) = (&self.row_1, &self.row_2);
        r1.x() * (r2.y() * a - r2.z() * b + r2.w() * c)
            - r1.y() * (r2.x() * a - r2.z() * d + r2.w() * e)
            + r1.z() * (r2.x() * b - r2.y() * d + r2.w() * f)
            - r1.w() * (r2.x() * c - r2.y() * e + r2.z() * f)
    }

    /// Computes the adjugate of the matrix.
    pub fn adjoint(&self) -> Self {
        let mut adjoint = Self::zeros();
        for i in 0..4 {
            for j in 0..4 {
                *adjoint.element_mut(i, j) = self.cofactor(j, i);
            }
        }
        adjoint
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Panics
    /// If the matrix is singular.
    pub fn inverted(&self) -> Self {
        let determinant = self.determinant();
        assert!(
            determinant != 0.0,
            "matrix is singular and cannot be inverted"
        );
        self.adjoint() / determinant
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::from_rows(
            self.row_1.mapped(&mut f),
            self.row_2.mapped(&mut f),
            self.row_3.mapped(&mut f),
            self.row_4.mapped(&mut f),
        )
    }

    /// Creates a new matrix with the elements read from the given slice in
    /// row-major order.
    ///
    /// # Panics
    /// If the slice does not have exactly 16 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() == 16, "slice must have exactly 16 elements");
        Self::from_rows(
            Vector4::from_slice(&slice[..4]),
            Vector4::from_slice(&slice[4..8]),
            Vector4::from_slice(&slice[8..12]),
            Vector4::from_slice(&slice[12..]),
        )
    }

    /// Writes the elements of the matrix into the given slice in row-major
    /// order.
    ///
    /// # Panics
    /// If the slice does not have exactly 16 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        assert!(slice.len() == 16, "slice must have exactly 16 elements");
        self.row_1.write_to_slice(&mut slice[..4]);
        self.row_2.write_to_slice(&mut slice[4..8]);
        self.row_3.write_to_slice(&mut slice[8..12]);
        self.row_4.write_to_slice(&mut slice[12..]);
    }

    // Signed determinant of the 3x3 minor left by removing row `i` and
    // column `j`.
    fn cofactor(&self, i: usize, j: usize) -> f32 {
        let mut minor = [0.0; 9];
        let mut k = 0;
        for row in 0..4 {
            if row == i {
                continue;
            }
            for col in 0..4 {
                if col == j {
                    continue;
                }
                minor[k] = self.element(row, col);
                k += 1;
            }
        }
        let det = minor[0] * (minor[4] * minor[8] - minor[5] * minor[7])
            - minor[1] * (minor[3] * minor[8] - minor[5] * minor[6])
            + minor[2] * (minor[3] * minor[7] - minor[4] * minor[6]);
        if (i + j) % 2 == 0 { det } else { -det }
    }
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(elements: [f32; 16]) -> Self {
        Self::from_slice(&elements)
    }
}

impl From<Matrix4> for [f32; 16] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        let mut elements = [0.0; 16];
        matrix.write_to_slice(&mut elements);
        elements
    }
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_rows(
        a.row_1 + b.row_1,
        a.row_2 + b.row_2,
        a.row_3 + b.row_3,
        a.row_4 + b.row_4,
    )
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_rows(
        a.row_1 - b.row_1,
        a.row_2 - b.row_2,
        a.row_3 - b.row_3,
        a.row_4 - b.row_4,
    )
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    Matrix4::from_rows(a.row_1 * *b, a.row_2 * *b, a.row_3 * *b, a.row_4 * *b)
});

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |a, b| { b * *a });

impl_binop!(Div, div, Matrix4, f32, Matrix4, |a, b| {
    Matrix4::from_rows(a.row_1 / *b, a.row_2 / *b, a.row_3 / *b, a.row_4 / *b)
});

impl_binop_assign!(AddAssign, add_assign, Matrix4, Matrix4, |a, b| {
    a.row_1 += b.row_1;
    a.row_2 += b.row_2;
    a.row_3 += b.row_3;
    a.row_4 += b.row_4;
});

impl_binop_assign!(SubAssign, sub_assign, Matrix4, Matrix4, |a, b| {
    a.row_1 -= b.row_1;
    a.row_2 -= b.row_2;
    a.row_3 -= b.row_3;
    a.row_4 -= b.row_4;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, f32, |a, b| {
    a.row_1 *= *b;
    a.row_2 *= *b;
    a.row_3 *= *b;
    a.row_4 *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Matrix4, f32, |a, b| {
    a.row_1 /= *b;
    a.row_2 /= *b;
    a.row_3 /= *b;
    a.row_4 /= *b;
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| {
    Matrix4::from_rows(-val.row_1, -val.row_2, -val.row_3, -val.row_4)
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    let column_1 = b.column_1();
    let column_2 = b.column_2();
    let column_3 = b.column_3();
    let column_4 = b.column_4();
    Matrix4::from_rows(
        Vector4::new(
            a.row_1.dot(&column_1),
            a.row_1.dot(&column_2),
            a.row_1.dot(&column_3),
            a.row_1.dot(&column_4),
        ),
        Vector4::new(
            a.row_2.dot(&column_1),
            a.row_2.dot(&column_2),
            a.row_2.dot(&column_3),
            a.row_2.dot(&column_4),
        ),
        Vector4::new(
            a.row_3.dot(&column_1),
            a.row_3.dot(&column_2),
            a.row_3.dot(&column_3),
            a.row_3.dot(&column_4),
        ),
        Vector4::new(
            a.row_4.dot(&column_1),
            a.row_4.dot(&column_2),
            a.row_4.dot(&column_3),
            a.row_4.dot(&column_4),
        ),
    )
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    Vector4::new(
        a.row_1.dot(b),
        a.row_2.dot(b),
        a.row_3.dot(b),
        a.row_4.dot(b),
    )
});

impl_binop!(Mul, mul, Vector4, Matrix4, Vector4, |a, b| {
    Vector4::new(
        a.dot(&b.column_1()),
        a.dot(&b.column_2()),
        a.dot(&b.column_3()),
        a.dot(&b.column_4()),
    )
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.row_1.abs_diff_eq(&b.row_1, epsilon)
        && a.row_2.abs_diff_eq(&b.row_2, epsilon)
        && a.row_3.abs_diff_eq(&b.row_3, epsilon)
        && a.row_4.abs_diff_eq(&b.row_4, epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.row_1.relative_eq(&b.row_1, epsilon, max_relative)
        && a.row_2.relative_eq(&b.row_2, epsilon, max_relative)
        && a.row_3.relative_eq(&b.row_3, epsilon, max_relative)
        && a.row_4.relative_eq(&b.row_4, epsilon, max_relative)
});

impl_hash!(Matrix4, |m| [
    m.row_1.x(),
    m.row_1.y(),
    m.row_1.z(),
    m.row_1.w(),
    m.row_2.x(),
    m.row_2.y(),
    m.row_2.z(),
    m.row_2.w(),
    m.row_3.x(),
    m.row_3.y(),
    m.row_3.z(),
    m.row_3.w(),
    m.row_4.x(),
    m.row_4.y(),
    m.row_4.z(),
    m.row_4.w(),
]);

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            self.row_1, self.row_2, self.row_3, self.row_4
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;
    const INVERSE_EPSILON: f32 = 1e-4;

    #[test]
    fn creating_matrix2_identity_gives_identity_matrix() {
        let identity = Matrix2::identity();
        assert_eq!(identity.row_1(), &Vector2::new(1.0, 0.0));
        assert_eq!(identity.row_2(), &Vector2::new(0.0, 1.0));
    }

    #[test]
    fn multiplying_matrix2_identities_gives_identity() {
        assert_eq!(Matrix2::identity() * Matrix2::identity(), Matrix2::identity());
    }

    #[test]
    fn creating_matrix2_from_columns_transposes_rows() {
        let matrix = Matrix2::from_columns(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        assert_eq!(matrix, Matrix2::new(1.0, 3.0, 2.0, 4.0));
    }

    #[test]
    fn matrix2_columns_are_read_from_rows() {
        let matrix = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(matrix.column_1(), Vector2::new(1.0, 3.0));
        assert_eq!(matrix.column_2(), Vector2::new(2.0, 4.0));
    }

    #[test]
    fn transposing_matrix_twice_gives_original() {
        let m2 = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m2.transposed().transposed(), m2);

        let m3 = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m3.transposed().transposed(), m3);

        let m4 = Matrix4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(9.0, 10.0, 11.0, 12.0),
            Vector4::new(13.0, 14.0, 15.0, 16.0),
        );
        assert_eq!(m4.transposed().transposed(), m4);
    }

    #[test]
    fn matrix2_determinant_is_cross_difference() {
        assert_eq!(Matrix2::new(3.0, 1.0, 4.0, 2.0).determinant(), 2.0);
    }

    #[test]
    fn inverting_matrix2_gives_multiplicative_inverse() {
        let matrix = Matrix2::new(3.0, 1.0, 4.0, 2.0);
        assert_abs_diff_eq!(
            matrix * matrix.inverted(),
            Matrix2::identity(),
            epsilon = INVERSE_EPSILON
        );
    }

    #[test]
    fn inverting_singular_matrix2_gives_zero_matrix() {
        let singular = Matrix2::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(singular.inverted(), Matrix2::zeros());
    }

    #[test]
    fn matrix2_rotation_by_quarter_turn_maps_x_axis_to_y_axis() {
        let rotation = Matrix2::from_angle(std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(
            rotation * Vector2::unit_x(),
            Vector2::unit_y(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn matrix3_determinant_of_diagonal_matrix_is_product_of_diagonal() {
        let matrix = Matrix3::from_diagonal(&Vector3::new(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(matrix.determinant(), 24.0, epsilon = EPSILON);
    }

    #[test]
    fn inverting_matrix3_gives_multiplicative_inverse() {
        let matrix = Matrix3::new(2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0);
        assert_abs_diff_eq!(
            matrix * matrix.inverted(),
            Matrix3::identity(),
            epsilon = INVERSE_EPSILON
        );
    }

    #[test]
    #[should_panic(expected = "matrix is singular and cannot be inverted")]
    fn inverting_singular_matrix3_panics() {
        Matrix3::zeros().inverted();
    }

    #[test]
    fn matrix3_adjoint_times_matrix_is_determinant_times_identity() {
        let matrix = Matrix3::new(2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0);
        let product = matrix.adjoint() * matrix;
        assert_abs_diff_eq!(
            product,
            Matrix3::identity() * matrix.determinant(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn matrix3_rotation_about_z_maps_x_axis_to_y_axis() {
        let rotation = Matrix3::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(
            rotation * Vector3::unit_x(),
            Vector3::unit_y(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn matrix4_determinant_of_identity_is_one() {
        assert_eq!(Matrix4::identity().determinant(), 1.0);
    }

    #[test]
    fn inverting_matrix4_gives_multiplicative_inverse() {
        let matrix = Matrix4::from_rows(
            Vector4::new(2.0, 0.0, 0.0, 1.0),
            Vector4::new(0.0, 3.0, 1.0, 0.0),
            Vector4::new(1.0, 0.0, 4.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 5.0),
        );
        assert_abs_diff_eq!(
            matrix * matrix.inverted(),
            Matrix4::identity(),
            epsilon = INVERSE_EPSILON
        );
    }

    #[test]
    #[should_panic(expected = "matrix is singular and cannot be inverted")]
    fn inverting_singular_matrix4_panics() {
        Matrix4::zeros().inverted();
    }

    #[test]
    fn matrix_trace_sums_diagonal() {
        assert_eq!(Matrix2::new(1.0, 5.0, 6.0, 2.0).trace(), 3.0);
        assert_eq!(
            Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 3.0)).trace(),
            6.0
        );
        assert_eq!(Matrix4::identity().trace(), 4.0);
    }

    #[test]
    fn translating_row_vector_moves_point() {
        let translation = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        let point = Vector3::new(4.0, 5.0, 6.0).extended(1.0);
        assert_abs_diff_eq!(
            point * translation,
            Vector4::new(5.0, 7.0, 9.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn nonuniform_scaling_scales_each_axis() {
        let scale = Matrix4::from_nonuniform_scale(&Vector3::new(2.0, 3.0, 4.0));
        let point = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_abs_diff_eq!(
            point * scale,
            Vector4::new(2.0, 3.0, 4.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        let view = Matrix4::look_at(&eye, &Vector3::zeros(), &Vector3::unit_y());
        let mapped = eye.extended(1.0) * view;
        assert_abs_diff_eq!(mapped, Vector4::unit_w(), epsilon = EPSILON);
    }

    #[test]
    fn perspective_projection_maps_near_plane_center_to_negative_unit_depth() {
        let projection =
            Matrix4::from_perspective_fov(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let projected = Vector4::new(0.0, 0.0, -0.1, 1.0) * projection;
        assert_abs_diff_eq!(projected.z() / projected.w(), -1.0, epsilon = 1e-4);
    }

    #[test]
    fn matrix_vector_multiplication_matches_row_dot_products() {
        let matrix = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let vector = Vector3::new(1.0, 0.0, -1.0);
        assert_eq!(matrix * vector, Vector3::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn row_vector_matrix_multiplication_uses_columns() {
        let matrix = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let vector = Vector2::new(1.0, 1.0);
        assert_eq!(vector * matrix, Vector2::new(4.0, 6.0));
    }

    #[test]
    fn embedding_matrix2_in_matrix3_pads_with_identity() {
        let embedded = Matrix3::from_matrix2(&Matrix2::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            embedded,
            Matrix3::new(1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn setting_matrix_column_writes_through_rows() {
        let mut matrix = Matrix3::zeros();
        matrix.set_column(1, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(matrix.column(1), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(matrix.row_1(), &Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn accessing_matrix_element_out_of_bounds_panics() {
        let matrix = Matrix2::identity();
        matrix.element(2, 0);
    }

    #[test]
    fn matrix_roundtrips_through_slice() {
        let matrix = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let mut buffer = [0.0; 9];
        matrix.write_to_slice(&mut buffer);
        assert_eq!(Matrix3::from_slice(&buffer), matrix);
    }

    #[test]
    fn matrix_addition_commutes() {
        let a = Matrix3::new(1.0, -2.0, 3.0, 0.5, 4.0, -1.0, 2.5, 0.0, 6.0);
        let b = Matrix3::new(-4.0, 5.0, 0.5, 1.0, -3.0, 2.0, 0.0, 7.0, -6.5);
        assert_eq!(a + b, b + a);

        let c = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let d = Matrix2::new(-0.5, 6.0, 1.5, -2.0);
        assert_eq!(c + d, d + c);
    }

    #[test]
    fn formatting_matrix_puts_each_row_on_its_own_line() {
        assert_eq!(
            Matrix2::new(1.0, 2.0, 3.0, 4.0).to_string(),
            "(1, 2)\n(3, 4)"
        );
    }

    #[test]
    fn quaternion_rotation_matrix_matches_axis_rotation() {
        let angle = 0.7;
        let quaternion = Quaternion::from_euler_angles(&Vector3::new(0.0, 0.0, angle));
        let from_quaternion = Matrix4::from_quaternion(&quaternion);
        let from_axis = Matrix4::from_matrix3(&Matrix3::from_rotation_z(angle));
        // Row-vector convention transposes the column-vector rotation.
        assert_abs_diff_eq!(
            from_quaternion,
            from_axis.transposed(),
            epsilon = 1e-5
        );
    }
}
