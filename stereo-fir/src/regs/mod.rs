//! Register-mapped configuration state.
//!
//! | Address | Register |
//! |---------|----------|
//! | `0x00` | [`ControlRegister`] |
//! | `0x10 + 4·i` | coefficient tap `i` in [`CoefficientStore`] |
//! | anything else | reads as zero, writes dropped |

pub mod registers;
mod control;
mod coefficients;
mod map;

pub use control::ControlRegister;
pub use coefficients::{CoefficientSnapshot, CoefficientStore};
pub use map::{Access, RegisterFile, RegisterMap, Target};
