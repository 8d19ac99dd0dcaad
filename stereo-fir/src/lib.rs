//! # stereo-fir
//!
//! A `no_std`, zero-allocation model of a streaming stereo FIR filter core
//! with a runtime-programmable coefficient memory. Two 16-bit channels share
//! one coefficient set; the host configures the core over an address-mapped
//! control plane and streams interleaved stereo words through a ready/valid
//! port.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Arithmetic | [`dsp`] | Saturation and wrap primitives, Q1.15 conversions |
//! | Filter | [`fir`] | Transposed-form convolution engine and output quantization |
//! | Registers | [`regs`] | Control register, coefficient store, address decode |
//! | Buses | [`io`] | Control-plane and streaming adapters, stereo packing |
//! | Core | [`filter`] | [`FirCore`](filter::FirCore): everything advanced one step at a time |
//!
//! ## Quick start
//!
//! ```
//! use stereo_fir::filter::{Fir16, StepInputs};
//! use stereo_fir::io::{StereoFrame, StreamBeat, WriteRequest};
//! use stereo_fir::regs::registers::coeff_addr;
//!
//! let mut fir = Fir16::new();
//!
//! // Halve tap 0; the write commits at the end of the step
//! let out = fir.step(&StepInputs {
//!     write: Some(WriteRequest { addr: coeff_addr(0), data: 0x4000 }),
//!     ..StepInputs::default()
//! });
//! assert!(out.write_accepted);
//!
//! // Consume the ack and push one stereo frame in the same step
//! let out = fir.step(&StepInputs {
//!     write_ack_ready: true,
//!     stream_in: Some(StreamBeat::from_frame(StereoFrame::new(1000, -1000), false)),
//!     ..StepInputs::default()
//! });
//! assert!(out.write_ack.is_some() && out.stream_in_accepted);
//! assert_eq!(fir.stream_out().unwrap().frame(), StereoFrame::new(500, -500));
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `dsp` | yes | Float ⇄ Q1.15 conversion helpers (requires `libm`) |
//!
//! ## Numeric parameters
//!
//! - **Sample / tap format:** Q1.15 (`i16`)
//! - **Accumulators:** 64-bit, configurable down to 33 bits ([`fir::OutputFormat`])
//! - **Output:** `>> 15`, round half-up, saturate to `i16`
//! - **Taps:** 129 in production ([`constants::DEFAULT_TAPS`]), 16 in testbenches

#![no_std]

pub mod constants;
pub mod dsp;
pub mod fir;
pub mod regs;
pub mod io;
pub mod filter;
