//! Saturation and wrap primitives with ARM DSP fast paths.
//!
//! On `thumbv7em` targets (Cortex-M4/M7 with DSP extension) the 32-bit
//! saturation compiles to a single `SSAT`. Everywhere else the pure-Rust
//! fallback is used, which is also what the host tests exercise.

/// Saturate an `i32` to `i16` range (`-32768..=32767`).
///
/// Maps to ARM `SSAT #16`.
#[inline(always)]
pub fn saturate16_i32(val: i32) -> i16 {
    #[cfg(all(target_arch = "arm", target_feature = "dsp"))]
    {
        let out: i32;
        unsafe {
            core::arch::asm!(
                "ssat {out}, #16, {val}",
                out = out(reg) out,
                val = in(reg) val,
            );
        }
        out as i16
    }
    #[cfg(not(all(target_arch = "arm", target_feature = "dsp")))]
    {
        if val > i16::MAX as i32 {
            i16::MAX
        } else if val < i16::MIN as i32 {
            i16::MIN
        } else {
            val as i16
        }
    }
}

/// Saturate a wide accumulator value to `i16` range.
///
/// Values that already fit in 32 bits take the [`saturate16_i32`] path.
#[inline(always)]
pub fn saturate16(val: i64) -> i16 {
    if val > i32::MAX as i64 {
        i16::MAX
    } else if val < i32::MIN as i64 {
        i16::MIN
    } else {
        saturate16_i32(val as i32)
    }
}

/// Keep the low 16 bits of `val` (two's-complement wraparound).
#[inline(always)]
pub fn wrap16(val: i64) -> i16 {
    val as i16
}

/// Sign-extend the low `bits` bits of `val`, discarding everything above.
///
/// Models a two's-complement register of width `bits`. `bits >= 64` is the
/// identity.
#[inline(always)]
pub fn wrap_to_width(val: i64, bits: u32) -> i64 {
    if bits >= 64 {
        val
    } else {
        let unused = 64 - bits;
        (val << unused) >> unused
    }
}
