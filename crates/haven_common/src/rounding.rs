//! Decimal rounding for display values.
//!
//! Rounds half-to-even on the exact binary value of the input, which gives
//! the same answers as a correctly rounded decimal conversion: a value is
//! only treated as a tie when it sits exactly halfway between two
//! candidates. `0.0625` rounds to `0.062`, while `0.0005` (stored as
//! slightly more than one half-thousandth) rounds up to `0.001`.

/// Places used for every score in API responses.
pub const DISPLAY_PLACES: u32 = 3;

/// Round `value` to `places` decimal places.
///
/// Non-finite values are returned unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        // Already integral at this scale
        return value;
    }

    let floor = scaled.floor();
    let frac = scaled - floor;

    let rounded = if frac > 0.5 {
        floor + 1.0
    } else if frac < 0.5 {
        floor
    } else {
        // The product itself was rounded; its residual says which side of
        // the half the exact value lies on.
        let residual = value.mul_add(factor, -scaled);
        if residual > 0.0 {
            floor + 1.0
        } else if residual < 0.0 {
            floor
        } else if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    };

    let result = rounded / factor;
    // Keep the sign of negative values that round to zero
    if result == 0.0 && value.is_sign_negative() {
        -0.0
    } else {
        result
    }
}

/// Round to the display precision.
pub fn round_display(value: f64) -> f64 {
    round_to(value, DISPLAY_PLACES)
}
