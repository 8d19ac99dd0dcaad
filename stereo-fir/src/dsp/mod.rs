//! Fixed-point primitives shared by the convolution pipeline.

pub mod intrinsics;

#[cfg(feature = "dsp")]
pub mod helpers;
