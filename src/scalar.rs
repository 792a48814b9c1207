//! Scalar helper functions.

use num_traits::Float;
use std::ops::{Add, Div, Mul};

/// Computes the unnormalized sinc function `sin(a) / a`, with the
/// removable singularity at zero evaluating to one.
#[inline]
pub fn sinc(a: f32) -> f32 {
    if a != 0.0 { a.sin() / a } else { 1.0 }
}

/// Computes the secant of the given angle in radians.
#[inline]
pub fn sec(a: f32) -> f32 {
    a.cos().recip()
}

/// Computes the cosecant of the given angle in radians.
#[inline]
pub fn csc(a: f32) -> f32 {
    a.sin().recip()
}

/// Computes the cotangent of the given angle in radians.
#[inline]
pub fn cot(a: f32) -> f32 {
    a.tan().recip()
}

/// Converts the given angle from degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Converts the given angle from radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Clamps the given value to the interval `[0, 1]`.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Computes the arithmetic mean of the given values, or zero if the slice
/// is empty.
pub fn mean<F: Float>(values: &[F]) -> F {
    if values.is_empty() {
        return F::zero();
    }
    let sum = values.iter().fold(F::zero(), |sum, &value| sum + value);
    sum / F::from(values.len()).unwrap()
}

/// Computes the population variance of the given values, or zero if the
/// slice is empty.
pub fn variance<F: Float>(values: &[F]) -> F {
    if values.is_empty() {
        return F::zero();
    }
    let mu = mean(values);
    let sum = values.iter().fold(F::zero(), |sum, &value| {
        let deviation = value - mu;
        sum + deviation * deviation
    });
    sum / F::from(values.len()).unwrap()
}

/// Computes the population standard deviation of the given values, or zero
/// if the slice is empty.
pub fn std_dev<F: Float>(values: &[F]) -> F {
    variance(values).sqrt()
}

/// Computes the two real roots of the quadratic equation
/// `a * x^2 + b * x + c = 0`.
///
/// Both roots are NaN when the discriminant is negative.
///
/// # Panics
/// If `a` is zero.
pub fn quadratic_roots(a: f32, b: f32, c: f32) -> (f32, f32) {
    assert!(a != 0.0, "coefficient of quadratic term is zero");
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        (f32::NAN, f32::NAN)
    } else {
        let sqrt_discriminant = discriminant.sqrt();
        let denom = 2.0 * a;
        ((-b + sqrt_discriminant) / denom, (-b - sqrt_discriminant) / denom)
    }
}

/// Evaluates the truncated Taylor series of the exponential-style map
/// `identity + x + x^2/2! + .. + x^n/n!` at `x = start`, using `n` terms
/// beyond the identity.
///
/// Works for any type with multiplication, addition and division by a
/// float scalar, such as floats, complex numbers, quaternions and square
/// matrices.
pub fn taylor<T>(start: T, identity: T, n: u32) -> T
where
    T: Copy + Add<Output = T> + Mul<Output = T> + Div<f32, Output = T>,
{
    let mut factorial: u64 = 1;
    let mut power = start;
    let mut sum = identity;
    if n >= 1 {
        sum = sum + power;
    }
    for i in 2..=n {
        power = power * start;
        factorial *= u64::from(i);
        sum = sum + power / (factorial as f32);
    }
    sum
}

/// Returns the bits of the given float with negative zero mapped to
/// positive zero, for hashing consistent with `==`.
#[inline]
pub fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn sinc_at_zero_is_one() {
        assert_eq!(sinc(0.0), 1.0);
    }

    #[test]
    fn sinc_away_from_zero_is_sin_over_arg() {
        assert_abs_diff_eq!(sinc(1.5), 1.5_f32.sin() / 1.5, epsilon = EPSILON);
    }

    #[test]
    fn clamping_to_unit_interval_works() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.5), 1.0);
    }

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(mean::<f32>(&[]), 0.0);
    }

    #[test]
    fn mean_of_values_is_arithmetic_mean() {
        assert_abs_diff_eq!(mean(&[1.0_f32, 2.0, 3.0, 4.0]), 2.5, epsilon = EPSILON);
    }

    #[test]
    fn variance_of_constant_values_is_zero() {
        assert_abs_diff_eq!(variance(&[3.0_f32, 3.0, 3.0]), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn std_dev_matches_square_root_of_variance() {
        let values = [1.0_f32, 2.0, 4.0, 8.0];
        assert_abs_diff_eq!(
            std_dev(&values),
            variance(&values).sqrt(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn quadratic_roots_of_factored_polynomial_are_recovered() {
        // (x - 2)(x + 3) = x^2 + x - 6
        let (x0, x1) = quadratic_roots(1.0, 1.0, -6.0);
        assert_abs_diff_eq!(x0, 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(x1, -3.0, epsilon = EPSILON);
    }

    #[test]
    fn quadratic_roots_with_negative_discriminant_are_nan() {
        let (x0, x1) = quadratic_roots(1.0, 0.0, 1.0);
        assert!(x0.is_nan());
        assert!(x1.is_nan());
    }

    #[test]
    #[should_panic(expected = "coefficient of quadratic term is zero")]
    fn quadratic_roots_of_linear_equation_panics() {
        quadratic_roots(0.0, 1.0, 2.0);
    }

    #[test]
    fn taylor_series_of_scalar_exponential_converges() {
        assert_abs_diff_eq!(taylor(1.0_f32, 1.0, 12), 1.0_f32.exp(), epsilon = 1e-5);
    }

    #[test]
    fn taylor_series_with_zero_terms_is_identity() {
        assert_eq!(taylor(2.0_f32, 1.0, 0), 1.0);
    }

    #[test]
    fn canonical_bits_identify_positive_and_negative_zero() {
        assert_eq!(canonical_bits(-0.0), canonical_bits(0.0));
        assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
    }
}
