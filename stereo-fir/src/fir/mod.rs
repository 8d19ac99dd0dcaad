//! Per-channel FIR arithmetic.
//!
//! - [`ConvolutionEngine`]: transposed-form partial-sum pipeline
//! - [`OutputFormat`]: shift, round and saturate stage applied to each output

mod engine;
mod format;

pub use engine::ConvolutionEngine;
pub use format::{ConfigError, OutputFormat};
