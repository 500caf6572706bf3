/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Above this many steps, [`repeated_multiply`] hands over to `f64::powf`.
pub const MAX_REPEATED_MULTIPLICATIONS: u64 = 1_000_000;

/// Converts an `f64` to `i64` if the value is finite, whole, and within the
/// range where every integer is exactly representable.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i64)`: The integer value.
/// - `None`: If `value` is non-finite, fractional, or beyond `±(2^53 - 1)`.
///
/// ## Example
/// ```
/// use radica::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(-12.0), Some(-12));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is `0`.
///
/// ## Example
/// ```
/// use radica::util::num::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// ```
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Rounds `value` to `places` decimal places, halves away from zero.
///
/// Values too large to scale without overflowing are returned unchanged, as
/// are non-finite values.
///
/// ## Example
/// ```
/// use radica::util::num::round_to_places;
///
/// assert_eq!(round_to_places(2.080_083_823, 4), 2.0801);
/// assert_eq!(round_to_places(-1.234_56, 2), -1.23);
/// ```
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Raises `base` to a non-negative integer power by repeated multiplication.
///
/// The magnitude is multiplied `count` times and the sign applied at the end,
/// which gives the same result as multiplying the signed base. A base of
/// magnitude one needs no loop, and the loop stops early once the product
/// reaches zero or leaves the finite range. Counts above
/// [`MAX_REPEATED_MULTIPLICATIONS`] fall back to `f64::powf`.
///
/// ## Example
/// ```
/// use radica::util::num::repeated_multiply;
///
/// assert_eq!(repeated_multiply(2.0, 10), 1024.0);
/// assert_eq!(repeated_multiply(-2.0, 3), -8.0);
/// assert_eq!(repeated_multiply(7.0, 0), 1.0);
/// assert_eq!(repeated_multiply(-1.0, 2_000_000_001), -1.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::float_cmp)]
pub fn repeated_multiply(base: f64, count: u64) -> f64 {
    let magnitude = base.abs();
    let product = if magnitude == 1.0 {
        1.0
    } else if count > MAX_REPEATED_MULTIPLICATIONS {
        magnitude.powf(count as f64)
    } else {
        let mut acc = 1.0;
        for _ in 0..count {
            acc *= magnitude;
            if acc == 0.0 || !acc.is_finite() {
                break;
            }
        }
        acc
    };

    if base.is_sign_negative() && count % 2 == 1 {
        -product
    } else {
        product
    }
}
