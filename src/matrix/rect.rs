//! Non-square matrices.

use crate::matrix::{Matrix2, Matrix3, Matrix4};
use crate::vector::{Vector2, Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;

// The six non-square shapes differ only in their dimensions, so the whole
// common surface is generated from one description per type.
macro_rules! define_rect_matrix {
    (
        $(#[$attributes:meta])*
        $name:ident {
            dimensions: $nrows:literal x $ncols:literal ($nelem:literal elements),
            row: $rowvec:ident,
            column: $colvec:ident,
            transposed: $transposed:ident,
            rows: [$($row:ident, $set_row:ident, $i:tt, $ord:literal);+],
            columns: [$($column:ident),+],
        }
    ) => {
        $(#[$attributes])*
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
        pub struct $name {
            $($row: $rowvec,)+
        }

        impl $name {
            /// Creates a new matrix with the given rows.
            #[inline]
            pub const fn from_rows($($row: $rowvec),+) -> Self {
                Self { $($row),+ }
            }

            /// Creates a new matrix with the given columns.
            #[inline]
            pub fn from_columns($($column: $colvec),+) -> Self {
                $transposed::from_rows($($column),+).transposed()
            }

            /// Creates a new matrix with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self {
                    $($row: $rowvec::zeros(),)+
                }
            }

            $(
                #[doc = concat!("The ", $ord, " row.")]
                #[inline]
                pub const fn $row(&self) -> &$rowvec {
                    &self.$row
                }

                #[doc = concat!("Sets the ", $ord, " row.")]
                #[inline]
                pub const fn $set_row(&mut self, row: $rowvec) {
                    self.$row = row;
                }
            )+

            /// Returns the row at index `i`.
            ///
            /// # Panics
            #[doc = concat!("If `i` is not smaller than ", $nrows, ".")]
            pub fn row(&self, i: usize) -> &$rowvec {
                match i {
                    $($i => &self.$row,)+
                    _ => panic!("index out of bounds"),
                }
            }

            /// Sets the row at index `i`.
            ///
            /// # Panics
            #[doc = concat!("If `i` is not smaller than ", $nrows, ".")]
            pub fn set_row(&mut self, i: usize, row: $rowvec) {
                match i {
                    $($i => self.$row = row,)+
                    _ => panic!("index out of bounds"),
                }
            }

            /// Returns the column at index `j`.
            ///
            /// # Panics
            #[doc = concat!("If `j` is not smaller than ", $ncols, ".")]
            pub fn column(&self, j: usize) -> $colvec {
                let mut column = $colvec::zeros();
                for i in 0..$nrows {
                    column[i] = self.element(i, j);
                }
                column
            }

            /// Sets the column at index `j`.
            ///
            /// # Panics
            #[doc = concat!("If `j` is not smaller than ", $ncols, ".")]
            pub fn set_column(&mut self, j: usize, column: $colvec) {
                for i in 0..$nrows {
                    *self.element_mut(i, j) = column[i];
                }
            }

            /// Returns the element at row `i` and column `j`.
            ///
            /// # Panics
            /// If `i` or `j` is out of bounds.
            #[inline]
            pub fn element(&self, i: usize, j: usize) -> f32 {
                self.row(i)[j]
            }

            /// Returns a mutable reference to the element at row `i` and
            /// column `j`.
            ///
            /// # Panics
            /// If `i` or `j` is out of bounds.
            pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
                match i {
                    $($i => &mut self.$row[j],)+
                    _ => panic!("index out of bounds"),
                }
            }

            /// Computes the transpose of the matrix.
            pub fn transposed(&self) -> $transposed {
                let mut transposed = $transposed::zeros();
                for i in 0..$nrows {
                    for j in 0..$ncols {
                        *transposed.element_mut(j, i) = self.element(i, j);
                    }
                }
                transposed
            }

            /// Returns a matrix with the given closure applied to each
            /// element.
            #[inline]
            pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
                Self {
                    $($row: self.$row.mapped(&mut f),)+
                }
            }

            /// Creates a new matrix with the elements read from the given
            /// slice in row-major order.
            ///
            /// # Panics
            #[doc = concat!("If the slice does not have exactly ", $nelem, " elements.")]
            pub fn from_slice(slice: &[f32]) -> Self {
                assert!(
                    slice.len() == $nelem,
                    concat!("slice must have exactly ", $nelem, " elements")
                );
                let mut matrix = Self::zeros();
                for (i, chunk) in slice.chunks_exact($ncols).enumerate() {
                    matrix.set_row(i, $rowvec::from_slice(chunk));
                }
                matrix
            }

            /// Writes the elements of the matrix into the given slice in
            /// row-major order.
            ///
            /// # Panics
            #[doc = concat!("If the slice does not have exactly ", $nelem, " elements.")]
            pub fn write_to_slice(&self, slice: &mut [f32]) {
                assert!(
                    slice.len() == $nelem,
                    concat!("slice must have exactly ", $nelem, " elements")
                );
                for (i, chunk) in slice.chunks_exact_mut($ncols).enumerate() {
                    self.row(i).write_to_slice(chunk);
                }
            }
        }

        impl From<[f32; $nelem]> for $name {
            #[inline]
            fn from(elements: [f32; $nelem]) -> Self {
                Self::from_slice(&elements)
            }
        }

        impl From<$name> for [f32; $nelem] {
            #[inline]
            fn from(matrix: $name) -> Self {
                let mut elements = [0.0; $nelem];
                matrix.write_to_slice(&mut elements);
                elements
            }
        }

        impl_binop!(Add, add, $name, $name, $name, |a, b| {
            $name::from_rows($(a.$row + b.$row),+)
        });

        impl_binop!(Sub, sub, $name, $name, $name, |a, b| {
            $name::from_rows($(a.$row - b.$row),+)
        });

        impl_binop!(Mul, mul, $name, f32, $name, |a, b| {
            $name::from_rows($(a.$row * *b),+)
        });

        impl_binop!(Mul, mul, f32, $name, $name, |a, b| { b * *a });

        impl_binop!(Div, div, $name, f32, $name, |a, b| {
            $name::from_rows($(a.$row / *b),+)
        });

        impl_binop_assign!(AddAssign, add_assign, $name, $name, |a, b| {
            $(a.$row += b.$row;)+
        });

        impl_binop_assign!(SubAssign, sub_assign, $name, $name, |a, b| {
            $(a.$row -= b.$row;)+
        });

        impl_binop_assign!(MulAssign, mul_assign, $name, f32, |a, b| {
            $(a.$row *= *b;)+
        });

        impl_binop_assign!(DivAssign, div_assign, $name, f32, |a, b| {
            $(a.$row /= *b;)+
        });

        impl_abs_diff_eq!($name, |a, b, epsilon| {
            true $(&& a.$row.abs_diff_eq(&b.$row, epsilon))+
        });

        impl_relative_eq!($name, |a, b, epsilon, max_relative| {
            true $(&& a.$row.relative_eq(&b.$row, epsilon, max_relative))+
        });

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                for i in 0..$nrows {
                    for j in 0..$ncols {
                        state.write_u32($crate::scalar::canonical_bits(self.element(i, j)));
                    }
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.row(0))?;
                for i in 1..$nrows {
                    write!(f, "\n{}", self.row(i))?;
                }
                Ok(())
            }
        }
    };
}

// Matrix product with the inner dimension checked by the vector types:
// element (i, j) of the product is the dot product of the left factor's
// row `i` with the right factor's column `j`.
macro_rules! impl_matmul {
    ($tl:ty, $tr:ty, $to:ty, $nrows:literal x $ncols:literal) => {
        impl_binop!(Mul, mul, $tl, $tr, $to, |a, b| {
            let mut product = <$to>::zeros();
            for i in 0..$nrows {
                for j in 0..$ncols {
                    *product.element_mut(i, j) = a.row(i).dot(&b.column(j));
                }
            }
            product
        });
    };
}

// Matrix times column vector.
macro_rules! impl_matvec {
    ($tl:ty, $tr:ty, $to:ty, $nrows:literal) => {
        impl_binop!(Mul, mul, $tl, $tr, $to, |a, b| {
            let mut product = <$to>::zeros();
            for i in 0..$nrows {
                product[i] = a.row(i).dot(b);
            }
            product
        });
    };
}

// Row vector times matrix.
macro_rules! impl_vecmat {
    ($tl:ty, $tr:ty, $to:ty, $ncols:literal) => {
        impl_binop!(Mul, mul, $tl, $tr, $to, |a, b| {
            let mut product = <$to>::zeros();
            for j in 0..$ncols {
                product[j] = a.dot(&b.column(j));
            }
            product
        });
    };
}

define_rect_matrix!(
    /// A 2x3 matrix stored as two row vectors.
    Matrix2x3 {
        dimensions: 2 x 3 (6 elements),
        row: Vector3,
        column: Vector2,
        transposed: Matrix3x2,
        rows: [row_1, set_row_1, 0, "first"; row_2, set_row_2, 1, "second"],
        columns: [column_1, column_2, column_3],
    }
);

define_rect_matrix!(
    /// A 2x4 matrix stored as two row vectors.
    Matrix2x4 {
        dimensions: 2 x 4 (8 elements),
        row: Vector4,
        column: Vector2,
        transposed: Matrix4x2,
        rows: [row_1, set_row_1, 0, "first"; row_2, set_row_2, 1, "second"],
        columns: [column_1, column_2, column_3, column_4],
    }
);

define_rect_matrix!(
    /// A 3x2 matrix stored as three row vectors.
    Matrix3x2 {
        dimensions: 3 x 2 (6 elements),
        row: Vector2,
        column: Vector3,
        transposed: Matrix2x3,
        rows: [
            row_1, set_row_1, 0, "first";
            row_2, set_row_2, 1, "second";
            row_3, set_row_3, 2, "third"
        ],
        columns: [column_1, column_2],
    }
);

define_rect_matrix!(
    /// A 3x4 matrix stored as three row vectors.
    Matrix3x4 {
        dimensions: 3 x 4 (12 elements),
        row: Vector4,
        column: Vector3,
        transposed: Matrix4x3,
        rows: [
            row_1, set_row_1, 0, "first";
            row_2, set_row_2, 1, "second";
            row_3, set_row_3, 2, "third"
        ],
        columns: [column_1, column_2, column_3, column_4],
    }
);

define_rect_matrix!(
    /// A 4x2 matrix stored as four row vectors.
    Matrix4x2 {
        dimensions: 4 x 2 (8 elements),
        row: Vector2,
        column: Vector4,
        transposed: Matrix2x4,
        rows: [
            row_1, set_row_1, 0, "first";
            row_2, set_row_2, 1, "second";
            row_3, set_row_3, 2, "third";
            row_4, set_row_4, 3, "fourth"
        ],
        columns: [column_1, column_2],
    }
);

define_rect_matrix!(
    /// A 4x3 matrix stored as four row vectors.
    Matrix4x3 {
        dimensions: 4 x 3 (12 elements),
        row: Vector3,
        column: Vector4,
        transposed: Matrix3x4,
        rows: [
            row_1, set_row_1, 0, "first";
            row_2, set_row_2, 1, "second";
            row_3, set_row_3, 2, "third";
            row_4, set_row_4, 3, "fourth"
        ],
        columns: [column_1, column_2, column_3],
    }
);

impl_matmul!(Matrix2, Matrix2x3, Matrix2x3, 2 x 3);
impl_matmul!(Matrix2, Matrix2x4, Matrix2x4, 2 x 4);
impl_matmul!(Matrix2x3, Matrix3, Matrix2x3, 2 x 3);
impl_matmul!(Matrix2x3, Matrix3x2, Matrix2, 2 x 2);
impl_matmul!(Matrix2x3, Matrix3x4, Matrix2x4, 2 x 4);
impl_matmul!(Matrix2x4, Matrix4, Matrix2x4, 2 x 4);
impl_matmul!(Matrix2x4, Matrix4x2, Matrix2, 2 x 2);
impl_matmul!(Matrix2x4, Matrix4x3, Matrix2x3, 2 x 3);
impl_matmul!(Matrix3, Matrix3x2, Matrix3x2, 3 x 2);
impl_matmul!(Matrix3, Matrix3x4, Matrix3x4, 3 x 4);
impl_matmul!(Matrix3x2, Matrix2, Matrix3x2, 3 x 2);
impl_matmul!(Matrix3x2, Matrix2x3, Matrix3, 3 x 3);
impl_matmul!(Matrix3x2, Matrix2x4, Matrix3x4, 3 x 4);
impl_matmul!(Matrix3x4, Matrix4, Matrix3x4, 3 x 4);
impl_matmul!(Matrix3x4, Matrix4x2, Matrix3x2, 3 x 2);
impl_matmul!(Matrix3x4, Matrix4x3, Matrix3, 3 x 3);
impl_matmul!(Matrix4, Matrix4x2, Matrix4x2, 4 x 2);
impl_matmul!(Matrix4, Matrix4x3, Matrix4x3, 4 x 3);
impl_matmul!(Matrix4x2, Matrix2, Matrix4x2, 4 x 2);
impl_matmul!(Matrix4x2, Matrix2x3, Matrix4x3, 4 x 3);
impl_matmul!(Matrix4x2, Matrix2x4, Matrix4, 4 x 4);
impl_matmul!(Matrix4x3, Matrix3, Matrix4x3, 4 x 3);
impl_matmul!(Matrix4x3, Matrix3x2, Matrix4x2, 4 x 2);
impl_matmul!(Matrix4x3, Matrix3x4, Matrix4, 4 x 4);

impl_matvec!(Matrix2x3, Vector3, Vector2, 2);
impl_matvec!(Matrix2x4, Vector4, Vector2, 2);
impl_matvec!(Matrix3x2, Vector2, Vector3, 3);
impl_matvec!(Matrix3x4, Vector4, Vector3, 3);
impl_matvec!(Matrix4x2, Vector2, Vector4, 4);
impl_matvec!(Matrix4x3, Vector3, Vector4, 4);

impl_vecmat!(Vector2, Matrix2x3, Vector3, 3);
impl_vecmat!(Vector2, Matrix2x4, Vector4, 4);
impl_vecmat!(Vector3, Matrix3x2, Vector2, 2);
impl_vecmat!(Vector3, Matrix3x4, Vector4, 4);
impl_vecmat!(Vector4, Matrix4x2, Vector2, 2);
impl_vecmat!(Vector4, Matrix4x3, Vector3, 3);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn creating_rect_matrix_from_columns_transposes_rows() {
        let matrix = Matrix2x3::from_columns(
            Vector2::new(1.0, 4.0),
            Vector2::new(2.0, 5.0),
            Vector2::new(3.0, 6.0),
        );
        assert_eq!(matrix.row_1(), &Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(matrix.row_2(), &Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn transposing_rect_matrix_swaps_rows_and_columns() {
        let matrix = Matrix2x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        );
        let transposed = matrix.transposed();
        assert_eq!(transposed.row_1(), &Vector2::new(1.0, 4.0));
        assert_eq!(transposed.row_2(), &Vector2::new(2.0, 5.0));
        assert_eq!(transposed.row_3(), &Vector2::new(3.0, 6.0));
    }

    #[test]
    fn transposing_rect_matrix_twice_gives_original() {
        let m2x3 = Matrix2x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        );
        assert_eq!(m2x3.transposed().transposed(), m2x3);

        let m2x4 = Matrix2x4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
        );
        assert_eq!(m2x4.transposed().transposed(), m2x4);

        let m3x2 = Matrix3x2::from_rows(
            Vector2::new(1.0, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(5.0, 6.0),
        );
        assert_eq!(m3x2.transposed().transposed(), m3x2);

        let m3x4 = Matrix3x4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(9.0, 10.0, 11.0, 12.0),
        );
        assert_eq!(m3x4.transposed().transposed(), m3x4);

        let m4x2 = Matrix4x2::from_rows(
            Vector2::new(1.0, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(5.0, 6.0),
            Vector2::new(7.0, 8.0),
        );
        assert_eq!(m4x2.transposed().transposed(), m4x2);

        let m4x3 = Matrix4x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
            Vector3::new(10.0, 11.0, 12.0),
        );
        assert_eq!(m4x3.transposed().transposed(), m4x3);
    }

    #[test]
    fn multiplying_2x3_with_3x2_gives_2x2() {
        let a = Matrix2x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        );
        let b = Matrix3x2::from_rows(
            Vector2::new(7.0, 8.0),
            Vector2::new(9.0, 10.0),
            Vector2::new(11.0, 12.0),
        );
        assert_abs_diff_eq!(
            a * b,
            Matrix2::new(58.0, 64.0, 139.0, 154.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn multiplying_by_identity_on_the_right_preserves_rect_matrix() {
        let a = Matrix2x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        );
        assert_abs_diff_eq!(a * Matrix3::identity(), a, epsilon = EPSILON);
    }

    #[test]
    fn multiplying_2x4_with_4x3_gives_2x3() {
        let a = Matrix2x4::from_rows(
            Vector4::new(1.0, 0.0, 2.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 2.0),
        );
        let b = Matrix4x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
            Vector3::new(10.0, 11.0, 12.0),
        );
        let product = a * b;
        assert_abs_diff_eq!(
            product.row_1(),
            &Vector3::new(15.0, 18.0, 21.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            product.row_2(),
            &Vector3::new(24.0, 27.0, 30.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn multiplying_4x2_with_2x4_gives_4x4() {
        let a = Matrix4x2::from_rows(
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 0.0),
        );
        let b = Matrix2x4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
        );
        let product = a * b;
        assert_eq!(product.row_1(), &Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(product.row_2(), &Vector4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(product.row_3(), &Vector4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(product.row_4(), &Vector4::zeros());
    }

    #[test]
    fn product_transpose_reverses_factor_order() {
        let a = Matrix2x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        );
        let b = Matrix3x4::from_rows(
            Vector4::new(1.0, 0.0, 2.0, 1.0),
            Vector4::new(0.0, 1.0, 1.0, 0.0),
            Vector4::new(2.0, 1.0, 0.0, 1.0),
        );
        assert_abs_diff_eq!(
            (a * b).transposed(),
            b.transposed() * a.transposed(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rect_matrix_times_column_vector_contracts_columns() {
        let matrix = Matrix3x2::from_rows(
            Vector2::new(1.0, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(5.0, 6.0),
        );
        assert_eq!(
            matrix * Vector2::new(1.0, -1.0),
            Vector3::new(-1.0, -1.0, -1.0)
        );
    }

    #[test]
    fn row_vector_times_rect_matrix_contracts_rows() {
        let matrix = Matrix2x3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        );
        assert_eq!(
            Vector2::new(1.0, 1.0) * matrix,
            Vector3::new(5.0, 7.0, 9.0)
        );
    }

    #[test]
    fn adding_rect_matrices_adds_rows() {
        let a = Matrix3x2::from_rows(
            Vector2::new(1.0, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(5.0, 6.0),
        );
        let sum = a + a;
        assert_eq!(sum.row_2(), &Vector2::new(6.0, 8.0));
    }

    #[test]
    fn scaling_rect_matrix_scales_every_element() {
        let a = Matrix4x2::from_rows(
            Vector2::new(1.0, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(5.0, 6.0),
            Vector2::new(7.0, 8.0),
        );
        assert_eq!((a * 2.0).element(3, 1), 16.0);
        assert_eq!((a / 2.0).element(0, 0), 0.5);
    }

    #[test]
    fn setting_rect_matrix_column_writes_through_rows() {
        let mut matrix = Matrix4x3::zeros();
        matrix.set_column(2, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(matrix.column(2), Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(matrix.row_3(), &Vector3::new(0.0, 0.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn accessing_rect_matrix_row_out_of_bounds_panics() {
        let matrix = Matrix2x3::zeros();
        matrix.row(2);
    }

    #[test]
    fn rect_matrix_roundtrips_through_slice() {
        let matrix = Matrix3x4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(9.0, 10.0, 11.0, 12.0),
        );
        let mut buffer = [0.0; 12];
        matrix.write_to_slice(&mut buffer);
        assert_eq!(Matrix3x4::from_slice(&buffer), matrix);
    }

    #[test]
    #[should_panic(expected = "slice must have exactly 6 elements")]
    fn creating_rect_matrix_from_short_slice_panics() {
        Matrix2x3::from_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn formatting_rect_matrix_puts_each_row_on_its_own_line() {
        let matrix = Matrix3x2::from_rows(
            Vector2::new(1.0, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(5.0, 6.0),
        );
        assert_eq!(matrix.to_string(), "(1, 2)\n(3, 4)\n(5, 6)");
    }
}
