//! Address decode from control-plane bus words to register storage.

use super::coefficients::{CoefficientSnapshot, CoefficientStore};
use super::control::ControlRegister;
use super::registers::{COEFF_BASE, COEFF_STRIDE, CTRL};

/// Result of a register write.
///
/// Writes to unmapped addresses or past the last tap are dropped without
/// signalling a fault on the bus; this records which path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Applied,
    Ignored,
}

/// What a byte address selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Control,
    /// Tap index. It may still lie past the end of the store.
    Coefficient(usize),
    Unmapped,
}

impl Target {
    pub fn decode(addr: u32) -> Self {
        if addr == CTRL {
            Target::Control
        } else if addr >= COEFF_BASE {
            Target::Coefficient(((addr - COEFF_BASE) / COEFF_STRIDE) as usize)
        } else {
            Target::Unmapped
        }
    }
}

/// Word-addressed register space seen by the control-plane adapter.
pub trait RegisterMap {
    /// Read the 32-bit word at `addr`. Unmapped addresses read as zero.
    fn read(&self, addr: u32) -> u32;

    /// Write the 32-bit word `data` to `addr`.
    fn write(&mut self, addr: u32, data: u32) -> Access;
}

/// Control register plus coefficient memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile<const N: usize> {
    control: ControlRegister,
    coefficients: CoefficientStore<N>,
}

impl<const N: usize> Default for RegisterFile<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RegisterFile<N> {
    /// Reset state: enabled, pass-through coefficients.
    pub const fn new() -> Self {
        RegisterFile {
            control: ControlRegister::new(),
            coefficients: CoefficientStore::unity(),
        }
    }

    pub fn control(&self) -> ControlRegister {
        self.control
    }

    pub fn coefficients(&self) -> &CoefficientStore<N> {
        &self.coefficients
    }

    pub fn snapshot(&self) -> CoefficientSnapshot<N> {
        self.coefficients.snapshot()
    }
}

impl<const N: usize> RegisterMap for RegisterFile<N> {
    fn read(&self, addr: u32) -> u32 {
        match Target::decode(addr) {
            Target::Control => self.control.raw(),
            // Sign-extend the Q1.15 tap to the full bus word
            Target::Coefficient(index) => self.coefficients.read(index).map_or(0, |v| v as i32 as u32),
            Target::Unmapped => 0,
        }
    }

    fn write(&mut self, addr: u32, data: u32) -> Access {
        let access = match Target::decode(addr) {
            Target::Control => {
                self.control.write(data);
                log::debug!(
                    "ctrl <- {:#010x} (enable={}, clear={})",
                    data,
                    self.control.enabled(),
                    self.control.clearing()
                );
                Access::Applied
            }
            Target::Coefficient(index) => {
                let value = data as u16 as i16;
                let access = self.coefficients.write(index, value);
                if access == Access::Applied {
                    log::debug!("coeff[{}] <- {}", index, value);
                }
                access
            }
            Target::Unmapped => Access::Ignored,
        };
        if access == Access::Ignored {
            log::trace!("dropped write of {:#010x} to {:#06x}", data, addr);
        }
        access
    }
}
