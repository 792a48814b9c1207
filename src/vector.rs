//! Vectors.

use crate::matrix::{Matrix2, Matrix3, Matrix4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 2]", from = "[f32; 2]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    x: f32,
    y: f32,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 3]", from = "[f32; 3]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with all components at the minimum finite value.
    #[inline]
    pub const fn min() -> Self {
        Self::same(f32::MIN)
    }

    /// Creates a new vector with all components at the maximum finite value.
    #[inline]
    pub const fn max() -> Self {
        Self::same(f32::MAX)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Computes the normalized version of the vector. A vector with zero
    /// norm stays zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm > 0.0 { self / norm } else { Self::zeros() }
    }

    /// Normalizes the vector in place. A vector with zero norm stays zero.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the projection of this vector onto another.
    #[inline]
    pub fn projected_onto(&self, against: &Self) -> Self {
        against * (self.dot(against) / against.norm_squared())
    }

    /// Computes the angle in radians between this vector and another, or
    /// zero if either vector has zero norm.
    pub fn angle_to(&self, other: &Self) -> f32 {
        let norm_product_squared = self.norm_squared() * other.norm_squared();
        if norm_product_squared == 0.0 {
            0.0
        } else {
            (self.dot(other) / norm_product_squared.sqrt()).acos()
        }
    }

    /// Computes the distance between the points at this vector and another.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self - other).norm()
    }

    /// Computes the square of the distance between the points at this
    /// vector and another.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> f32 {
        (self - other).norm_squared()
    }

    /// Computes the perpendicular distance from the point at this vector to
    /// the line through the two given points.
    pub fn distance_to_line(&self, line_start: &Self, line_end: &Self) -> f32 {
        self.rejection_from_line(line_start, line_end).norm()
    }

    /// Computes the square of the perpendicular distance from the point at
    /// this vector to the line through the two given points.
    pub fn distance_squared_to_line(&self, line_start: &Self, line_end: &Self) -> f32 {
        self.rejection_from_line(line_start, line_end).norm_squared()
    }

    /// Whether the points at this vector and another are within the given
    /// distance of each other.
    #[inline]
    pub fn within_range(&self, other: &Self, range: f32) -> bool {
        self.distance_squared_to(other) <= range * range
    }

    /// Returns a vector with each component clamped to the given interval.
    #[inline]
    pub fn clamped(&self, min: f32, max: f32) -> Self {
        self.mapped(|component| component.clamp(min, max))
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(f32::abs)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Computes the sum of all components.
    #[inline]
    pub fn component_sum(&self) -> f32 {
        self.x + self.y
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Computes the outer product of this vector with another, producing a
    /// matrix whose row `i` is `self[i]` times the other vector.
    #[inline]
    pub fn outer(&self, other: &Self) -> Matrix2 {
        Matrix2::from_rows(other * self.x, other * self.y)
    }

    /// Creates a new vector with the components read from the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 2 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        match *slice {
            [x, y] => Self::new(x, y),
            _ => panic!("slice must have exactly 2 elements"),
        }
    }

    /// Writes the components of the vector into the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 2 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        match slice {
            [x, y] => {
                *x = self.x;
                *y = self.y;
            }
            _ => panic!("slice must have exactly 2 elements"),
        }
    }

    fn rejection_from_line(&self, line_start: &Self, line_end: &Self) -> Self {
        let to_point = self - line_start;
        let line = line_end - line_start;
        to_point - to_point.projected_onto(&line)
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| { b * *a });

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x / b, a.y / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.x *= b;
    a.y *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.x /= b;
    a.y /= b;
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    f32::abs_diff_eq(&a.x, &b.x, epsilon) && f32::abs_diff_eq(&a.y, &b.y, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    f32::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && f32::relative_eq(&a.y, &b.y, epsilon, max_relative)
});

impl_hash!(Vector2, |v| [v.x, v.y]);

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector from a 2D vector and a z-component.
    #[inline]
    pub const fn from_parts(xy: Vector2, z: f32) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with all components at the minimum finite value.
    #[inline]
    pub const fn min() -> Self {
        Self::same(f32::MIN)
    }

    /// Creates a new vector with all components at the maximum finite value.
    #[inline]
    pub const fn max() -> Self {
        Self::same(f32::MAX)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// The x- and y-components as a 2D vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The x- and z-components as a 2D vector.
    #[inline]
    pub const fn xz(&self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }

    /// The y- and z-components as a 2D vector.
    #[inline]
    pub const fn yz(&self) -> Vector2 {
        Vector2::new(self.y, self.z)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the normalized version of the vector. A vector with zero
    /// norm stays zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm > 0.0 { self / norm } else { Self::zeros() }
    }

    /// Normalizes the vector in place. A vector with zero norm stays zero.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the projection of this vector onto another.
    #[inline]
    pub fn projected_onto(&self, against: &Self) -> Self {
        against * (self.dot(against) / against.norm_squared())
    }

    /// Computes the angle in radians between this vector and another, or
    /// zero if either vector has zero norm.
    pub fn angle_to(&self, other: &Self) -> f32 {
        let norm_product_squared = self.norm_squared() * other.norm_squared();
        if norm_product_squared == 0.0 {
            0.0
        } else {
            (self.dot(other) / norm_product_squared.sqrt()).acos()
        }
    }

    /// Computes the distance between the points at this vector and another.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self - other).norm()
    }

    /// Computes the square of the distance between the points at this
    /// vector and another.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> f32 {
        (self - other).norm_squared()
    }

    /// Computes the perpendicular distance from the point at this vector to
    /// the line through the two given points.
    pub fn distance_to_line(&self, line_start: &Self, line_end: &Self) -> f32 {
        self.rejection_from_line(line_start, line_end).norm()
    }

    /// Computes the square of the perpendicular distance from the point at
    /// this vector to the line through the two given points.
    pub fn distance_squared_to_line(&self, line_start: &Self, line_end: &Self) -> f32 {
        self.rejection_from_line(line_start, line_end).norm_squared()
    }

    /// Whether the points at this vector and another are within the given
    /// distance of each other.
    #[inline]
    pub fn within_range(&self, other: &Self, range: f32) -> bool {
        self.distance_squared_to(other) <= range * range
    }

    /// Returns a vector with each component clamped to the given interval.
    #[inline]
    pub fn clamped(&self, min: f32, max: f32) -> Self {
        self.mapped(|component| component.clamp(min, max))
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(f32::abs)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Computes the sum of all components.
    #[inline]
    pub fn component_sum(&self) -> f32 {
        self.x + self.y + self.z
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Computes the outer product of this vector with another, producing a
    /// matrix whose row `i` is `self[i]` times the other vector.
    #[inline]
    pub fn outer(&self, other: &Self) -> Matrix3 {
        Matrix3::from_rows(other * self.x, other * self.y, other * self.z)
    }

    /// Creates a new vector with the components read from the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 3 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        match *slice {
            [x, y, z] => Self::new(x, y, z),
            _ => panic!("slice must have exactly 3 elements"),
        }
    }

    /// Writes the components of the vector into the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 3 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        match slice {
            [x, y, z] => {
                *x = self.x;
                *y = self.y;
                *z = self.z;
            }
            _ => panic!("slice must have exactly 3 elements"),
        }
    }

    fn rejection_from_line(&self, line_start: &Self, line_end: &Self) -> Self {
        let to_point = self - line_start;
        let line = line_end - line_start;
        to_point - to_point.projected_onto(&line)
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { b * *a });

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    f32::abs_diff_eq(&a.x, &b.x, epsilon)
        && f32::abs_diff_eq(&a.y, &b.y, epsilon)
        && f32::abs_diff_eq(&a.z, &b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    f32::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && f32::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && f32::relative_eq(&a.z, &b.z, epsilon, max_relative)
});

impl_hash!(Vector3, |v| [v.x, v.y, v.z]);

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector from a 3D vector and a w-component.
    #[inline]
    pub const fn from_parts(xyz: Vector3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with all components at the minimum finite value.
    #[inline]
    pub const fn min() -> Self {
        Self::same(f32::MIN)
    }

    /// Creates a new vector with all components at the maximum finite value.
    #[inline]
    pub const fn max() -> Self {
        Self::same(f32::MAX)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }

    /// The x- and y-components as a 2D vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The z- and w-components as a 2D vector.
    #[inline]
    pub const fn zw(&self) -> Vector2 {
        Vector2::new(self.z, self.w)
    }

    /// The x-, y- and z-components as a 3D vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Computes the normalized version of the vector. A vector with zero
    /// norm stays zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm > 0.0 { self / norm } else { Self::zeros() }
    }

    /// Normalizes the vector in place. A vector with zero norm stays zero.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the projection of this vector onto another.
    #[inline]
    pub fn projected_onto(&self, against: &Self) -> Self {
        against * (self.dot(against) / against.norm_squared())
    }

    /// Computes the angle in radians between this vector and another, or
    /// zero if either vector has zero norm.
    pub fn angle_to(&self, other: &Self) -> f32 {
        let norm_product_squared = self.norm_squared() * other.norm_squared();
        if norm_product_squared == 0.0 {
            0.0
        } else {
            (self.dot(other) / norm_product_squared.sqrt()).acos()
        }
    }

    /// Computes the distance between the points at this vector and another.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self - other).norm()
    }

    /// Computes the square of the distance between the points at this
    /// vector and another.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> f32 {
        (self - other).norm_squared()
    }

    /// Whether the points at this vector and another are within the given
    /// distance of each other.
    #[inline]
    pub fn within_range(&self, other: &Self, range: f32) -> bool {
        self.distance_squared_to(other) <= range * range
    }

    /// Returns a vector with each component clamped to the given interval.
    #[inline]
    pub fn clamped(&self, min: f32, max: f32) -> Self {
        self.mapped(|component| component.clamp(min, max))
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(f32::abs)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }

    /// Computes the sum of all components.
    #[inline]
    pub fn component_sum(&self) -> f32 {
        self.x + self.y + self.z + self.w
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Computes the outer product of this vector with another, producing a
    /// matrix whose row `i` is `self[i]` times the other vector.
    #[inline]
    pub fn outer(&self, other: &Self) -> Matrix4 {
        Matrix4::from_rows(
            other * self.x,
            other * self.y,
            other * self.z,
            other * self.w,
        )
    }

    /// Creates a new vector with the components read from the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 4 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        match *slice {
            [x, y, z, w] => Self::new(x, y, z, w),
            _ => panic!("slice must have exactly 4 elements"),
        }
    }

    /// Writes the components of the vector into the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 4 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        match slice {
            [x, y, z, w] => {
                *x = self.x;
                *y = self.y;
                *z = self.z;
                *w = self.w;
            }
            _ => panic!("slice must have exactly 4 elements"),
        }
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| { b * *a });

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
    a.w *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
    a.w /= b;
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    f32::abs_diff_eq(&a.x, &b.x, epsilon)
        && f32::abs_diff_eq(&a.y, &b.y, epsilon)
        && f32::abs_diff_eq(&a.z, &b.z, epsilon)
        && f32::abs_diff_eq(&a.w, &b.w, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    f32::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && f32::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && f32::relative_eq(&a.z, &b.z, epsilon, max_relative)
        && f32::relative_eq(&a.w, &b.w, epsilon, max_relative)
});

impl_hash!(Vector4, |v| [v.x, v.y, v.z, v.w]);

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn creating_vector3_from_parts_appends_z_component() {
        let v = Vector3::from_parts(Vector2::new(1.0, 2.0), 3.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn extending_vector2_appends_z_component() {
        assert_eq!(
            Vector2::new(1.0, 2.0).extended(3.0),
            Vector3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn vector_addition_commutes() {
        let a = Vector3::new(1.0, -2.0, 3.5);
        let b = Vector3::new(0.5, 4.0, -1.0);
        assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn subtracting_vector_from_itself_gives_zero() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(&a - &a, Vector4::zeros());
    }

    #[test]
    fn scalar_multiplication_works_in_both_orders() {
        let a = Vector2::new(1.5, -2.0);
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!(&a * 2.0, Vector2::new(3.0, -4.0));
    }

    #[test]
    fn dot_product_is_symmetric() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 5.0, 0.5);
        assert_abs_diff_eq!(a.dot(&b), b.dot(&a), epsilon = EPSILON);
    }

    #[test]
    fn cross_product_of_x_and_y_axes_gives_z_axis() {
        let cross = Vector3::unit_x().cross(&Vector3::unit_y());
        assert_abs_diff_eq!(cross, Vector3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn cross_product_is_anti_commutative() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 5.0, 0.5);
        assert_abs_diff_eq!(a.cross(&b), -b.cross(&a), epsilon = EPSILON);
    }

    #[test]
    fn cross_product_is_orthogonal_to_both_operands() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 5.0, 0.5);
        let cross = a.cross(&b);
        assert_abs_diff_eq!(cross.dot(&a), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(cross.dot(&b), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector_gives_unit_norm() {
        let normalized = Vector3::new(3.0, -4.0, 12.0).normalized();
        assert_abs_diff_eq!(normalized.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_gives_zero_vector() {
        assert_eq!(Vector3::zeros().normalized(), Vector3::zeros());
        assert_eq!(Vector2::zeros().normalized(), Vector2::zeros());
        assert_eq!(Vector4::zeros().normalized(), Vector4::zeros());
    }

    #[test]
    fn normalizing_in_place_matches_normalized() {
        let v = Vector2::new(3.0, 4.0);
        let mut w = v;
        w.normalize();
        assert_eq!(w, v.normalized());
    }

    #[test]
    fn projecting_onto_axis_extracts_component() {
        let v = Vector3::new(2.0, 3.0, 4.0);
        let projection = v.projected_onto(&Vector3::new(0.0, 2.0, 0.0));
        assert_abs_diff_eq!(
            projection,
            Vector3::new(0.0, 3.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn angle_between_orthogonal_vectors_is_quarter_turn() {
        let angle = Vector2::unit_x().angle_to(&Vector2::unit_y());
        assert_abs_diff_eq!(angle, std::f32::consts::FRAC_PI_2, epsilon = EPSILON);
    }

    #[test]
    fn angle_to_zero_vector_is_zero() {
        assert_eq!(Vector3::unit_x().angle_to(&Vector3::zeros()), 0.0);
    }

    #[test]
    fn distance_between_points_matches_norm_of_difference() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_abs_diff_eq!(a.distance_to(&b), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.distance_squared_to(&b), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn distance_to_line_is_perpendicular_distance() {
        let point = Vector2::new(0.0, 3.0);
        let distance =
            point.distance_to_line(&Vector2::new(-1.0, 0.0), &Vector2::new(5.0, 0.0));
        assert_abs_diff_eq!(distance, 3.0, epsilon = EPSILON);
    }

    #[test]
    fn within_range_includes_boundary() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(3.0, 4.0);
        assert!(a.within_range(&b, 5.0));
        assert!(!a.within_range(&b, 4.9));
    }

    #[test]
    fn clamping_vector_clamps_each_component() {
        let clamped = Vector3::new(-2.0, 0.5, 7.0).clamped(-1.0, 1.0);
        assert_eq!(clamped, Vector3::new(-1.0, 0.5, 1.0));
    }

    #[test]
    fn component_sum_adds_all_components() {
        assert_eq!(Vector4::new(1.0, 2.0, 3.0, 4.0).component_sum(), 10.0);
    }

    #[test]
    fn outer_product_of_vector2s_fills_matrix_rows() {
        let product = Vector2::new(1.0, 2.0).outer(&Vector2::new(3.0, 4.0));
        assert_eq!(product.row_1(), &Vector2::new(3.0, 4.0));
        assert_eq!(product.row_2(), &Vector2::new(6.0, 8.0));
    }

    #[test]
    fn indexing_vector_accesses_components_in_order() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_vector2_out_of_bounds_panics() {
        let v = Vector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn vector_roundtrips_through_slice() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let mut buffer = [0.0; 3];
        v.write_to_slice(&mut buffer);
        assert_eq!(Vector3::from_slice(&buffer), v);
    }

    #[test]
    #[should_panic(expected = "slice must have exactly 3 elements")]
    fn creating_vector3_from_short_slice_panics() {
        Vector3::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn formatting_vector_lists_components_in_parentheses() {
        assert_eq!(Vector2::new(1.0, -2.5).to_string(), "(1, -2.5)");
    }

    #[test]
    fn swizzling_vector4_extracts_expected_components() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.zw(), Vector2::new(3.0, 4.0));
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }
}
