//! Quaternions.

use crate::vector::{Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut};

/// A quaternion with a vector part and a scalar part, in single
/// precision.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    xyz: Vector3,
    w: f32,
}

impl Quaternion {
    /// Creates a new quaternion with the given components. The scalar
    /// part comes last.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            xyz: Vector3::new(x, y, z),
            w,
        }
    }

    /// Creates a new quaternion from a vector part and a scalar part.
    #[inline]
    pub const fn from_parts(xyz: Vector3, w: f32) -> Self {
        Self { xyz, w }
    }

    /// Creates a new quaternion with the components of the given vector,
    /// taking the scalar part from the last component.
    #[inline]
    pub const fn from_vector(vector: &Vector4) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), vector.w())
    }

    /// The identity quaternion, representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_parts(Vector3::zeros(), 1.0)
    }

    /// Creates a new quaternion with all components zero.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_parts(Vector3::zeros(), 0.0)
    }

    /// The quaternion unit i.
    #[inline]
    pub const fn i() -> Self {
        Self::from_parts(Vector3::unit_x(), 0.0)
    }

    /// The quaternion unit j.
    #[inline]
    pub const fn j() -> Self {
        Self::from_parts(Vector3::unit_y(), 0.0)
    }

    /// The quaternion unit k.
    #[inline]
    pub const fn k() -> Self {
        Self::from_parts(Vector3::unit_z(), 0.0)
    }

    /// Creates a new rotation quaternion from intrinsic Euler angles in
    /// radians, applied around the x-, y- and z-axis in that order.
    pub fn from_euler_angles(angles: &Vector3) -> Self {
        let half = angles * 0.5;
        let (sx, cx) = half.x().sin_cos();
        let (sy, cy) = half.y().sin_cos();
        let (sz, cz) = half.z().sin_cos();
        Self::new(
            (sx * cy * cz) + (cx * sy * sz),
            (cx * sy * cz) - (sx * cy * sz),
            (cx * cy * sz) + (sx * sy * cz),
            (cx * cy * cz) - (sx * sy * sz),
        )
    }

    /// The first component of the vector part.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.xyz.x()
    }

    /// The second component of the vector part.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.xyz.y()
    }

    /// The third component of the vector part.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.xyz.z()
    }

    /// The scalar part.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// The vector part.
    #[inline]
    pub const fn xyz(&self) -> &Vector3 {
        &self.xyz
    }

    /// A mutable reference to the vector part.
    #[inline]
    pub const fn xyz_mut(&mut self) -> &mut Vector3 {
        &mut self.xyz
    }

    /// A mutable reference to the scalar part.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }

    /// Computes the magnitude of the quaternion.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Computes the square of the magnitude of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.xyz.norm_squared() + self.w * self.w
    }

    /// Computes the conjugate, with the vector part negated.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(-self.xyz, self.w)
    }

    /// Computes the multiplicative inverse, or the zero quaternion if the
    /// quaternion has zero magnitude.
    pub fn inverse(&self) -> Self {
        let magnitude_squared = self.magnitude_squared();
        if magnitude_squared != 0.0 {
            self.conjugate() / magnitude_squared
        } else {
            Self::zeros()
        }
    }

    /// Returns the normalized version of the quaternion, or the zero
    /// quaternion if the magnitude is zero.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Self::zeros()
        } else {
            self / magnitude
        }
    }

    /// Normalizes the quaternion in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the quaternion exponential.
    ///
    /// The vector part of the input is divided by its norm, so a
    /// quaternion with zero vector part yields NaN components.
    pub fn exp(&self) -> Self {
        let angle = self.xyz.norm();
        let result = Self::from_parts((self.xyz / angle) * angle.sin(), angle.cos());
        result * self.w.exp()
    }

    /// Computes the quaternion logarithm.
    pub fn ln(&self) -> Self {
        let magnitude = self.magnitude();
        Self::from_parts(
            self.xyz.normalized() * (self.w / magnitude).acos(),
            magnitude.ln(),
        )
    }

    /// Creates a new quaternion with the components read from the given
    /// slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 4 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        match *slice {
            [x, y, z, w] => Self::new(x, y, z, w),
            _ => panic!("slice must have exactly 4 elements"),
        }
    }

    /// Writes the components of the quaternion into the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 4 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        match slice {
            [x, y, z, w] => {
                *x = self.x();
                *y = self.y();
                *z = self.z();
                *w = self.w;
            }
            _ => panic!("slice must have exactly 4 elements"),
        }
    }

    /// The components of the quaternion as a vector, with the scalar part
    /// last.
    #[inline]
    pub const fn to_vector(&self) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), self.w)
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        [
            quaternion.x(),
            quaternion.y(),
            quaternion.z(),
            quaternion.w,
        ]
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_parts(a.xyz + b.xyz, a.w + b.w)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_parts(a.xyz - b.xyz, a.w - b.w)
});

// Hamilton product.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_parts(
        a.xyz * b.w + b.xyz * a.w + a.xyz.cross(&b.xyz),
        a.w * b.w - a.xyz.dot(&b.xyz),
    )
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    Quaternion::from_parts(a.xyz * b, a.w * b)
});

impl_binop!(Mul, mul, f32, Quaternion, Quaternion, |a, b| { b * *a });

impl_binop!(Div, div, Quaternion, f32, Quaternion, |a, b| {
    assert!(*b != 0.0, "division of quaternion by zero");
    Quaternion::from_parts(a.xyz / b, a.w / b)
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    a.xyz += b.xyz;
    a.w += b.w;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    a.xyz -= b.xyz;
    a.w -= b.w;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, f32, |a, b| {
    a.xyz *= *b;
    a.w *= b;
});

impl_binop_assign!(DivAssign, div_assign, Quaternion, f32, |a, b| {
    *a = *a / b;
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::from_parts(-val.xyz, -val.w)
});

impl Index<usize> for Quaternion {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0..=2 => &self.xyz[index],
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Quaternion {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0..=2 => &mut self.xyz[index],
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    Vector3::abs_diff_eq(&a.xyz, &b.xyz, epsilon) && f32::abs_diff_eq(&a.w, &b.w, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    Vector3::relative_eq(&a.xyz, &b.xyz, epsilon, max_relative)
        && f32::relative_eq(&a.w, &b.w, epsilon, max_relative)
});

impl_hash!(Quaternion, |q| [q.x(), q.y(), q.z(), q.w]);

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:+}i{:+}j{:+}k",
            self.w,
            self.x(),
            self.y(),
            self.z()
        )
    }
}
