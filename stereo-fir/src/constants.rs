/// Tap count of the production coefficient memory.
pub const DEFAULT_TAPS: usize = 129;

/// Tap count used by the reduced testbench configuration.
pub const TESTBENCH_TAPS: usize = 16;

/// Largest Q1.15 value, the closest representable value to 1.0.
pub const Q15_ONE: i16 = i16::MAX;

/// Right shift that brings a Q1.15 × Q1.15 product back to Q1.15.
pub const DEFAULT_OUT_SHIFT: u32 = 15;

/// Width of the modelled partial-sum accumulators, in bits.
pub const DEFAULT_ACCUMULATOR_BITS: u32 = 64;

/// Narrowest accumulator that still holds a full Q1.15 × Q1.15 product plus a sign bit.
pub const MIN_ACCUMULATOR_BITS: u32 = 33;
