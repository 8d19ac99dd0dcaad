//! Coefficient memory shared by both channels.

use core::ops::Deref;

use super::map::Access;
use crate::constants::Q15_ONE;

/// Fixed-capacity table of signed Q1.15 taps.
///
/// Only the control-plane write path mutates it. The convolution engines see
/// it through a [`CoefficientSnapshot`] taken once per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientStore<const N: usize> {
    taps: [i16; N],
}

/// Immutable copy of every tap, as seen by one convolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoefficientSnapshot<const N: usize>([i16; N]);

impl<const N: usize> Deref for CoefficientSnapshot<N> {
    type Target = [i16; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> Default for CoefficientStore<N> {
    fn default() -> Self {
        Self::unity()
    }
}

impl<const N: usize> CoefficientStore<N> {
    /// Pass-through set: tap 0 at unity gain, every other tap zero.
    pub const fn unity() -> Self {
        const { assert!(N >= 1, "coefficient store needs at least one tap") };
        let mut taps = [0; N];
        taps[0] = Q15_ONE;
        CoefficientStore { taps }
    }

    /// All taps zero.
    pub const fn zeroed() -> Self {
        const { assert!(N >= 1, "coefficient store needs at least one tap") };
        CoefficientStore { taps: [0; N] }
    }

    /// Tap value, or `None` past the last tap.
    pub fn read(&self, index: usize) -> Option<i16> {
        self.taps.get(index).copied()
    }

    /// Store `value` at `index`. Out-of-range writes are dropped.
    pub fn write(&mut self, index: usize, value: i16) -> Access {
        match self.taps.get_mut(index) {
            Some(tap) => {
                *tap = value;
                Access::Applied
            }
            None => Access::Ignored,
        }
    }

    /// Write `values` to taps `0..values.len()`, one tap at a time.
    ///
    /// Returns how many taps were applied; values past the last tap are dropped.
    pub fn load(&mut self, values: &[i16]) -> usize {
        let mut applied = 0;
        for (i, &value) in values.iter().enumerate() {
            if self.write(i, value) == Access::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Zero every tap.
    pub fn clear(&mut self) {
        self.taps = [0; N];
    }

    pub fn snapshot(&self) -> CoefficientSnapshot<N> {
        CoefficientSnapshot(self.taps)
    }
}
