use super::registers::{CTRL_CLEAR, CTRL_ENABLE, CTRL_RESET};

/// The `CTRL` register: stream enable and state clear.
///
/// Holds the full 32-bit word last written; only [`CTRL_ENABLE`] and
/// [`CTRL_CLEAR`] are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRegister {
    raw: u32,
}

impl Default for ControlRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlRegister {
    /// Register in its reset state (enabled, not clearing).
    pub const fn new() -> Self {
        ControlRegister { raw: CTRL_RESET }
    }

    pub const fn raw(&self) -> u32 {
        self.raw
    }

    pub fn write(&mut self, raw: u32) {
        self.raw = raw;
    }

    /// Stream samples are accepted and produced.
    pub const fn enabled(&self) -> bool {
        self.raw & CTRL_ENABLE != 0
    }

    /// Partial sums are held at zero.
    pub const fn clearing(&self) -> bool {
        self.raw & CTRL_CLEAR != 0
    }

    pub fn set_enable(&mut self, enable: bool) {
        self.set_bit(CTRL_ENABLE, enable);
    }

    pub fn set_clear(&mut self, clear: bool) {
        self.set_bit(CTRL_CLEAR, clear);
    }

    fn set_bit(&mut self, mask: u32, value: bool) {
        if value {
            self.raw |= mask;
        } else {
            self.raw &= !mask;
        }
    }
}
