//! Output quantization: the fixed-point arithmetic unit.
//!
//! Turns a full-precision partial sum into a Q1.15 output sample by shifting
//! out the product scale growth, optionally rounding half-up, then either
//! saturating or wrapping to 16 bits.

use thiserror::Error;

use crate::constants::{DEFAULT_ACCUMULATOR_BITS, DEFAULT_OUT_SHIFT, MIN_ACCUMULATOR_BITS};
use crate::dsp::intrinsics::{saturate16, wrap16};

/// Rejected [`OutputFormat`] parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("accumulator width {bits} outside {min}..=64 bits", min = MIN_ACCUMULATOR_BITS)]
    AccumulatorWidth { bits: u32 },
    #[error("output shift {shift} does not fit a {bits}-bit accumulator")]
    ShiftTooWide { shift: u32, bits: u32 },
}

/// Quantization settings applied to every output sample.
///
/// The default shifts by 15, rounds half-up and saturates, on a 64-bit
/// accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    out_shift: u32,
    round: bool,
    saturate: bool,
    accumulator_bits: u32,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat {
            out_shift: DEFAULT_OUT_SHIFT,
            round: true,
            saturate: true,
            accumulator_bits: DEFAULT_ACCUMULATOR_BITS,
        }
    }
}

impl OutputFormat {
    /// Create a format with rounding and saturation enabled.
    pub fn new(out_shift: u32, accumulator_bits: u32) -> Result<Self, ConfigError> {
        if !(MIN_ACCUMULATOR_BITS..=64).contains(&accumulator_bits) {
            log::warn!("rejecting accumulator width of {} bits", accumulator_bits);
            return Err(ConfigError::AccumulatorWidth {
                bits: accumulator_bits,
            });
        }
        if out_shift >= accumulator_bits {
            log::warn!(
                "rejecting output shift {} for {}-bit accumulator",
                out_shift,
                accumulator_bits
            );
            return Err(ConfigError::ShiftTooWide {
                shift: out_shift,
                bits: accumulator_bits,
            });
        }
        Ok(OutputFormat {
            out_shift,
            accumulator_bits,
            ..OutputFormat::default()
        })
    }

    /// Enable or disable round-half-up before the shift.
    pub const fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Enable or disable saturation. When disabled, results wrap to 16 bits.
    pub const fn with_saturation(mut self, saturate: bool) -> Self {
        self.saturate = saturate;
        self
    }

    pub const fn out_shift(&self) -> u32 {
        self.out_shift
    }

    pub const fn rounding(&self) -> bool {
        self.round
    }

    pub const fn saturation(&self) -> bool {
        self.saturate
    }

    pub const fn accumulator_bits(&self) -> u32 {
        self.accumulator_bits
    }

    /// Reduce a partial sum to an output sample.
    ///
    /// Rounding adds `1 << (out_shift - 1)` before an arithmetic right shift,
    /// so ties go towards positive infinity. The bias is added at 128 bits so
    /// a sum at the top of the accumulator range cannot overflow.
    pub fn quantize(&self, acc: i64) -> i16 {
        let bias = if self.round && self.out_shift > 0 {
            1i128 << (self.out_shift - 1)
        } else {
            0
        };
        let shifted = ((acc as i128 + bias) >> self.out_shift) as i64;
        if self.saturate {
            saturate16(shifted)
        } else {
            wrap16(shifted)
        }
    }
}
