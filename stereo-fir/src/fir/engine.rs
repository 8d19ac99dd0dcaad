//! Transposed-form convolution pipeline for one channel.
//!
//! Instead of a sample delay line, the engine keeps one running partial sum
//! per tap. Every accepted sample `x` updates all of them at once:
//!
//! ```text
//! acc'[k]   = x * h[k] + acc[k + 1]     k = 0 .. N-2
//! acc'[N-1] = x * h[N-1]
//! y         = quantize(acc'[0])
//! ```
//!
//! Each product is folded in with the coefficient that was current when the
//! sample arrived, so a coefficient change only affects contributions from
//! later samples. Partial sums already in flight keep their old weighting.

use super::format::OutputFormat;
use crate::dsp::intrinsics::wrap_to_width;

/// Per-channel FIR state: `N` wide partial sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvolutionEngine<const N: usize> {
    acc: [i64; N],
}

impl<const N: usize> Default for ConvolutionEngine<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ConvolutionEngine<N> {
    /// Create an engine with all partial sums at zero.
    ///
    /// `N` must be at least 1; a zero-tap engine fails to compile:
    ///
    /// ```compile_fail
    /// let _ = stereo_fir::fir::ConvolutionEngine::<0>::new();
    /// ```
    pub const fn new() -> Self {
        const { assert!(N >= 1, "FIR engine needs at least one tap") };
        ConvolutionEngine { acc: [0; N] }
    }

    /// Advance the pipeline by one sample and return the output for it.
    ///
    /// Walking `k` upwards updates in place without a second buffer: slot
    /// `k + 1` is read before it is overwritten.
    pub fn advance(&mut self, x: i16, taps: &[i16; N], format: &OutputFormat) -> i16 {
        let bits = format.accumulator_bits();
        let x = x as i64;
        for k in 0..N - 1 {
            let product = x * taps[k] as i64;
            self.acc[k] = wrap_to_width(product.wrapping_add(self.acc[k + 1]), bits);
        }
        self.acc[N - 1] = wrap_to_width(x * taps[N - 1] as i64, bits);
        format.quantize(self.acc[0])
    }

    /// One pipeline step with the clear flag applied.
    ///
    /// A set `clear` discards all partial sums, including the contribution of
    /// `x`, and yields the quantized zero.
    pub fn step(&mut self, x: i16, taps: &[i16; N], format: &OutputFormat, clear: bool) -> i16 {
        if clear {
            self.reset();
            format.quantize(0)
        } else {
            self.advance(x, taps, format)
        }
    }

    /// Zero every partial sum.
    pub fn reset(&mut self) {
        self.acc = [0; N];
    }

    /// Current partial sums, `acc[0]` first.
    pub fn partial_sums(&self) -> &[i64; N] {
        &self.acc
    }

    /// `true` when no convolution history is pending.
    pub fn is_idle(&self) -> bool {
        self.acc.iter().all(|&a| a == 0)
    }
}
