//! Control-plane address map.
//!
//! Byte addresses on a 32-bit register bus. Every register is one 32-bit word.

/// Control register.
/// - Bit 1 — CLEAR (zero both channels' partial sums while set)
/// - Bit 0 — ENABLE (accept and produce stream samples)
///
/// Remaining bits are stored and read back but have no effect.
pub const CTRL: u32 = 0x00;

/// First coefficient register. Tap `i` lives at `COEFF_BASE + COEFF_STRIDE * i`.
/// - Bits 15:0 — signed Q1.15 tap value (sign-extended on read)
pub const COEFF_BASE: u32 = 0x10;

/// Byte distance between consecutive coefficient registers.
pub const COEFF_STRIDE: u32 = 4;

// ── CTRL bits ──────────────────────────────────────────────────────────────

pub const CTRL_ENABLE: u32 = 1 << 0;
pub const CTRL_CLEAR: u32 = 1 << 1;

/// Value of `CTRL` after reset: streaming enabled, clear released.
pub const CTRL_RESET: u32 = CTRL_ENABLE;

/// Byte address of coefficient tap `index`.
///
/// Meaningful for `index < (u32::MAX - COEFF_BASE) / COEFF_STRIDE`; larger
/// indices wrap around the 32-bit address space instead of panicking.
pub const fn coeff_addr(index: usize) -> u32 {
    COEFF_BASE.wrapping_add(COEFF_STRIDE.wrapping_mul(index as u32))
}
