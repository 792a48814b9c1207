//! Complex numbers.

use crate::matrix::Matrix2;
use crate::vector::Vector2;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::f32::consts::{FRAC_PI_2, LN_2, LN_10, PI};
use std::ops::{Index, IndexMut};

/// A complex number with single-precision real and imaginary parts.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 2]", from = "[f32; 2]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Complex {
    re: f32,
    im: f32,
}

impl Complex {
    /// Creates a new complex number with the given real and imaginary
    /// parts.
    #[inline]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Creates a new complex number on the real axis.
    #[inline]
    pub const fn real(re: f32) -> Self {
        Self::new(re, 0.0)
    }

    /// Creates a new complex number on the imaginary axis.
    #[inline]
    pub const fn imaginary(im: f32) -> Self {
        Self::new(0.0, im)
    }

    /// The imaginary unit.
    #[inline]
    pub const fn i() -> Self {
        Self::imaginary(1.0)
    }

    /// Creates a new complex number with both parts zero.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a new complex number with both parts one.
    #[inline]
    pub const fn ones() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Creates a new complex number from a vector holding the real and
    /// imaginary parts.
    #[inline]
    pub const fn from_vector(vector: &Vector2) -> Self {
        Self::new(vector.x(), vector.y())
    }

    /// The real part.
    #[inline]
    pub const fn re(&self) -> f32 {
        self.re
    }

    /// The imaginary part.
    #[inline]
    pub const fn im(&self) -> f32 {
        self.im
    }

    /// A mutable reference to the real part.
    #[inline]
    pub const fn re_mut(&mut self) -> &mut f32 {
        &mut self.re
    }

    /// A mutable reference to the imaginary part.
    #[inline]
    pub const fn im_mut(&mut self) -> &mut f32 {
        &mut self.im
    }

    /// Computes the magnitude (modulus) of the complex number.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Computes the square of the magnitude of the complex number.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    /// Computes the argument (phase angle) of the complex number in
    /// radians.
    #[inline]
    pub fn arg(&self) -> f32 {
        self.im.atan2(self.re)
    }

    /// Computes the complex conjugate.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Computes the principal square root of the complex number.
    ///
    /// A number on the real axis takes the real shortcut of
    /// [`sqrt_real`](Self::sqrt_real); otherwise the root is obtained from
    /// the half-angle identity on the magnitude and real part.
    pub fn sqrt(&self) -> Self {
        if self.im == 0.0 {
            return Self::sqrt_real(self.re);
        }
        let magnitude = self.magnitude();
        Self::new(
            ((self.re + magnitude) * 0.5).sqrt(),
            ((-self.re + magnitude) * 0.5).sqrt(),
        )
    }

    /// Computes the square root of a real number, which is purely
    /// imaginary for negative input.
    pub fn sqrt_real(n: f32) -> Self {
        if n < 0.0 {
            Self::imaginary((-n).sqrt())
        } else {
            Self::real(n.sqrt())
        }
    }

    /// Computes the complex exponential.
    pub fn exp(&self) -> Self {
        let scale = self.re.exp();
        Self::new(scale * self.im.cos(), scale * self.im.sin())
    }

    /// Computes the principal natural logarithm.
    pub fn ln(&self) -> Self {
        Self::new(self.magnitude_squared().ln() * 0.5, self.arg())
    }

    /// Computes the principal natural logarithm of a real number, which
    /// has imaginary part pi for negative input.
    pub fn ln_real(a: f32) -> Self {
        if a < 0.0 {
            Self::new((-a).ln(), PI)
        } else {
            Self::real(a.ln())
        }
    }

    /// Computes the logarithm with the given complex base, as the ratio of
    /// principal logarithms.
    pub fn log(&self, base: &Self) -> Self {
        self.ln() / base.ln()
    }

    /// Computes the logarithm with the given real base.
    pub fn log_base(&self, base: f32) -> Self {
        let ln = self.ln();
        if base < 0.0 {
            ln / Self::new((-base).ln(), PI)
        } else {
            ln / base.ln()
        }
    }

    /// Computes the logarithm of a real number with the given real base.
    pub fn log_real(base: f32, a: f32) -> Self {
        Self::ln_real(a) / Self::ln_real(base)
    }

    /// Computes the logarithm of a real number with the given complex
    /// base. The numerator is the plain real logarithm, so negative input
    /// yields NaN parts.
    pub fn log_of_real(base: &Self, a: f32) -> Self {
        a.ln() / base.ln()
    }

    /// Computes the base 2 logarithm.
    pub fn log2(&self) -> Self {
        self.ln() / LN_2
    }

    /// Computes the base 2 logarithm of a real number.
    pub fn log2_real(a: f32) -> Self {
        if a < 0.0 {
            Self::new((-a).ln() / LN_2, PI / LN_2)
        } else {
            Self::real(a.ln() / LN_2)
        }
    }

    /// Computes the base 10 logarithm.
    pub fn log10(&self) -> Self {
        self.ln() / LN_10
    }

    /// Computes the base 10 logarithm of a real number.
    pub fn log10_real(a: f32) -> Self {
        if a < 0.0 {
            Self::new((-a).ln() / LN_10, PI / LN_10)
        } else {
            Self::real(a.ln() / LN_10)
        }
    }

    /// Computes the logarithm with base i, the principal logarithm
    /// divided by `ln(i) = i * pi / 2`.
    pub fn log_i(&self) -> Self {
        let ln = self.ln();
        let scale = FRAC_PI_2.recip();
        Self::new(ln.im * scale, -ln.re * scale)
    }

    /// Computes the base i logarithm of a real number.
    pub fn log_i_real(a: f32) -> Self {
        if a < 0.0 {
            Self::ln_real(a) / Self::imaginary(FRAC_PI_2)
        } else {
            Self::imaginary(-a.ln() * FRAC_PI_2.recip())
        }
    }

    /// Raises the complex number to an integer power by binary
    /// exponentiation. A negative exponent gives the reciprocal of the
    /// positive power.
    pub fn powi(&self, exponent: i32) -> Self {
        let power = self.powu(exponent.unsigned_abs());
        if exponent < 0 { 1.0 / power } else { power }
    }

    fn powu(&self, exponent: u32) -> Self {
        if exponent <= 1 {
            return if exponent == 0 { Self::real(1.0) } else { *self };
        }
        let partial = self.powu(exponent >> 1);
        let mut result = partial * partial;
        if exponent & 1 == 1 {
            result *= self;
        }
        result
    }

    /// Raises the complex number to a real power via the principal
    /// logarithm.
    pub fn powf(&self, exponent: f32) -> Self {
        (self.ln() * exponent).exp()
    }

    /// Raises the complex number to a complex power via the principal
    /// logarithm.
    pub fn powc(&self, exponent: &Self) -> Self {
        let ln = self.ln();
        let real_part = (ln * exponent.re).exp();
        let imaginary_part = Self::new(-ln.im * exponent.im, ln.re * exponent.im).exp();
        imaginary_part * real_part
    }

    /// Raises a real base to a complex power using the polar form
    /// directly.
    pub fn real_pow(base: f32, exponent: &Self) -> Self {
        let angle = exponent.im * base.ln();
        let scale = base.powf(exponent.re);
        Self::new(scale * angle.cos(), scale * angle.sin())
    }

    /// Computes the complex sine.
    pub fn sin(&self) -> Self {
        Self::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    /// Computes the complex cosine.
    pub fn cos(&self) -> Self {
        Self::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    /// Computes the complex tangent.
    pub fn tan(&self) -> Self {
        let denom = (2.0 * self.re).cos() + (2.0 * self.im).cosh();
        Self::new((2.0 * self.re).sin() / denom, (2.0 * self.im).sinh() / denom)
    }

    /// Converts the complex number to the 2x2 rotation-scaling matrix that
    /// represents multiplication by it.
    #[inline]
    pub const fn to_rotation_matrix(&self) -> Matrix2 {
        Matrix2::new(self.re, -self.im, self.im, self.re)
    }

    /// The real and imaginary parts as a vector.
    #[inline]
    pub const fn to_vector(&self) -> Vector2 {
        Vector2::new(self.re, self.im)
    }

    /// Creates a new complex number with the parts read from the given
    /// slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 2 elements.
    pub fn from_slice(slice: &[f32]) -> Self {
        match *slice {
            [re, im] => Self::new(re, im),
            _ => panic!("slice must have exactly 2 elements"),
        }
    }

    /// Writes the parts of the complex number into the given slice.
    ///
    /// # Panics
    /// If the slice does not have exactly 2 elements.
    pub fn write_to_slice(&self, slice: &mut [f32]) {
        match slice {
            [re, im] => {
                *re = self.re;
                *im = self.im;
            }
            _ => panic!("slice must have exactly 2 elements"),
        }
    }
}

impl From<f32> for Complex {
    #[inline]
    fn from(re: f32) -> Self {
        Self::real(re)
    }
}

impl From<[f32; 2]> for Complex {
    #[inline]
    fn from([re, im]: [f32; 2]) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex> for [f32; 2] {
    #[inline]
    fn from(complex: Complex) -> Self {
        [complex.re, complex.im]
    }
}

impl_binop!(Add, add, Complex, Complex, Complex, |a, b| {
    Complex::new(a.re + b.re, a.im + b.im)
});

impl_binop!(Add, add, Complex, f32, Complex, |a, b| {
    Complex::new(a.re + b, a.im)
});

impl_binop!(Add, add, f32, Complex, Complex, |a, b| { b + *a });

impl_binop!(Sub, sub, Complex, Complex, Complex, |a, b| {
    Complex::new(a.re - b.re, a.im - b.im)
});

impl_binop!(Sub, sub, Complex, f32, Complex, |a, b| {
    Complex::new(a.re - b, a.im)
});

impl_binop!(Sub, sub, f32, Complex, Complex, |a, b| {
    Complex::new(a - b.re, -b.im)
});

impl_binop!(Mul, mul, Complex, Complex, Complex, |a, b| {
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
});

impl_binop!(Mul, mul, Complex, f32, Complex, |a, b| {
    Complex::new(a.re * b, a.im * b)
});

impl_binop!(Mul, mul, f32, Complex, Complex, |a, b| { b * *a });

impl_binop!(Div, div, Complex, Complex, Complex, |a, b| {
    let m = b.magnitude_squared();
    Complex::new(
        (a.re * b.re + a.im * b.im) / m,
        (a.im * b.re - a.re * b.im) / m,
    )
});

impl_binop!(Div, div, Complex, f32, Complex, |a, b| {
    Complex::new(a.re / b, a.im / b)
});

// Dividing a real by a complex number short-circuits to two real
// divisions when the divisor lies on the real axis; the result matches
// the general formula.
impl_binop!(Div, div, f32, Complex, Complex, |a, b| {
    if b.im != 0.0 {
        let m = b.magnitude_squared();
        Complex::new(a * b.re / m, -(a * b.im) / m)
    } else {
        Complex::real(a / b.re)
    }
});

impl_binop_assign!(AddAssign, add_assign, Complex, Complex, |a, b| {
    a.re += b.re;
    a.im += b.im;
});

impl_binop_assign!(AddAssign, add_assign, Complex, f32, |a, b| {
    a.re += b;
});

impl_binop_assign!(SubAssign, sub_assign, Complex, Complex, |a, b| {
    a.re -= b.re;
    a.im -= b.im;
});

impl_binop_assign!(SubAssign, sub_assign, Complex, f32, |a, b| {
    a.re -= b;
});

impl_binop_assign!(MulAssign, mul_assign, Complex, Complex, |a, b| {
    let re = a.re;
    a.re = re * b.re - a.im * b.im;
    a.im = re * b.im + a.im * b.re;
});

impl_binop_assign!(MulAssign, mul_assign, Complex, f32, |a, b| {
    a.re *= b;
    a.im *= b;
});

impl_binop_assign!(DivAssign, div_assign, Complex, f32, |a, b| {
    a.re /= b;
    a.im /= b;
});

impl_unary_op!(Neg, neg, Complex, Complex, |val| {
    Complex::new(-val.re, -val.im)
});

impl Index<usize> for Complex {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.re,
            1 => &self.im,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Complex {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.re,
            1 => &mut self.im,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Complex, |a, b, epsilon| {
    f32::abs_diff_eq(&a.re, &b.re, epsilon) && f32::abs_diff_eq(&a.im, &b.im, epsilon)
});

impl_relative_eq!(Complex, |a, b, epsilon, max_relative| {
    f32::relative_eq(&a.re, &b.re, epsilon, max_relative)
        && f32::relative_eq(&a.im, &b.im, epsilon, max_relative)
});

impl_hash!(Complex, |c| [c.re, c.im]);

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn squaring_imaginary_unit_gives_negative_one() {
        assert_eq!(Complex::i() * Complex::i(), Complex::real(-1.0));
    }

    #[test]
    fn square_root_of_negative_four_is_two_i() {
        assert_eq!(Complex::sqrt_real(-4.0), Complex::imaginary(2.0));
    }

    #[test]
    fn square_root_on_real_axis_takes_real_shortcut() {
        assert_eq!(Complex::real(9.0).sqrt(), Complex::real(3.0));
        assert_eq!(Complex::real(-9.0).sqrt(), Complex::imaginary(3.0));
    }

    #[test]
    fn squaring_square_root_recovers_input() {
        let z = Complex::new(3.0, 4.0);
        let root = z.sqrt();
        assert_abs_diff_eq!(root * root, z, epsilon = 1e-5);
    }

    #[test]
    fn exponential_of_log_recovers_input() {
        let z = Complex::new(1.5, -2.0);
        assert_abs_diff_eq!(z.ln().exp(), z, epsilon = 1e-5);
    }

    #[test]
    fn log_of_negative_real_has_pi_imaginary_part() {
        let log = Complex::ln_real(-1.0);
        assert_abs_diff_eq!(log.re(), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(log.im(), std::f32::consts::PI, epsilon = EPSILON);
    }

    #[test]
    fn exponential_of_imaginary_angle_lies_on_unit_circle() {
        let z = Complex::imaginary(0.7).exp();
        assert_abs_diff_eq!(z.magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(z.arg(), 0.7, epsilon = EPSILON);
    }

    #[test]
    fn base_i_log_of_i_is_one() {
        assert_abs_diff_eq!(Complex::i().log_i(), Complex::real(1.0), epsilon = EPSILON);
    }

    #[test]
    fn log2_of_real_power_of_two_is_exponent() {
        assert_abs_diff_eq!(
            Complex::log2_real(8.0),
            Complex::real(3.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn integer_power_matches_repeated_multiplication() {
        let z = Complex::new(1.0, 2.0);
        assert_abs_diff_eq!(z.powi(5), z * z * z * z * z, epsilon = 1e-3);
    }

    #[test]
    fn negative_integer_power_is_reciprocal_of_positive_power() {
        let z = Complex::new(1.0, 2.0);
        assert_abs_diff_eq!(
            z.powi(-2) * z.powi(2),
            Complex::real(1.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn zeroth_power_is_real_unit() {
        assert_eq!(Complex::new(3.0, 4.0).powi(0), Complex::real(1.0));
    }

    #[test]
    fn most_negative_integer_power_does_not_overflow_exponent() {
        assert_eq!(Complex::real(1.0).powi(i32::MIN), Complex::real(1.0));
    }

    #[test]
    fn complex_power_with_real_exponent_matches_real_power() {
        let z = Complex::new(2.0, 1.0);
        assert_abs_diff_eq!(z.powc(&Complex::real(2.0)), z.powf(2.0), epsilon = 1e-4);
    }

    #[test]
    fn real_base_power_with_real_exponent_matches_plain_power() {
        assert_abs_diff_eq!(
            Complex::real_pow(2.0, &Complex::real(3.0)),
            Complex::real(8.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn dividing_real_by_real_axis_complex_takes_fast_path() {
        let quotient = 6.0 / Complex::real(2.0);
        assert_eq!(quotient, Complex::real(3.0));

        // The general formula agrees with the shortcut.
        let general = Complex::real(6.0) / Complex::real(2.0);
        assert_abs_diff_eq!(quotient, general, epsilon = EPSILON);
    }

    #[test]
    fn dividing_by_conjugate_pair_gives_real_quotient() {
        let z = Complex::new(3.0, 4.0);
        let quotient = z * z.conjugate() / z.magnitude_squared();
        assert_abs_diff_eq!(quotient, Complex::real(1.0), epsilon = EPSILON);
    }

    #[test]
    fn complex_addition_commutes() {
        let a = Complex::new(1.5, -2.0);
        let b = Complex::new(-0.5, 4.0);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn adding_real_shifts_only_real_part() {
        assert_eq!(Complex::new(1.0, 2.0) + 3.0, Complex::new(4.0, 2.0));
        assert_eq!(3.0 - Complex::new(1.0, 2.0), Complex::new(2.0, -2.0));
    }

    #[test]
    fn sine_of_real_argument_matches_real_sine() {
        assert_abs_diff_eq!(
            Complex::real(0.5).sin(),
            Complex::real(0.5_f32.sin()),
            epsilon = EPSILON
        );
    }

    #[test]
    fn tangent_is_sine_over_cosine() {
        let z = Complex::new(0.4, 0.3);
        assert_abs_diff_eq!(z.tan(), z.sin() / z.cos(), epsilon = 1e-5);
    }

    #[test]
    fn rotation_matrix_of_unit_complex_matches_angle_rotation() {
        let angle = 0.8;
        let rotation = Complex::imaginary(angle).exp().to_rotation_matrix();
        assert_abs_diff_eq!(rotation, Matrix2::from_angle(angle), epsilon = EPSILON);
    }

    #[test]
    fn formatting_appends_signed_imaginary_part() {
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Complex::new(1.5, 2.0).to_string(), "1.5+2i");
    }

    #[test]
    fn complex_roundtrips_through_vector_and_slice() {
        let z = Complex::new(1.0, 2.0);
        assert_eq!(Complex::from_vector(&z.to_vector()), z);

        let mut buffer = [0.0; 2];
        z.write_to_slice(&mut buffer);
        assert_eq!(Complex::from_slice(&buffer), z);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_complex_out_of_bounds_panics() {
        let z = Complex::i();
        let _ = z[2];
    }
}
