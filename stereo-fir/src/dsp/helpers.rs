//! Q1.15 conversion helpers for host-side coefficient and sample preparation.

use super::intrinsics::saturate16_i32;

/// Scale factor of the Q1.15 format.
const Q15_SCALE: f32 = 32768.0;

/// Convert a float in `[-1.0, 1.0)` to Q1.15, rounding to nearest.
///
/// Out-of-range inputs saturate; `1.0` maps to `32767`. `NaN` maps to `0`.
#[inline]
pub fn q15_from_f32(value: f32) -> i16 {
    saturate16_i32(libm::roundf(value * Q15_SCALE) as i32)
}

/// Convert a Q1.15 value to a float in `[-1.0, 1.0)`.
#[inline]
pub fn q15_to_f32(value: i16) -> f32 {
    value as f32 / Q15_SCALE
}
