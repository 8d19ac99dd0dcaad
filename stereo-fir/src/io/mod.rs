//! Bus adapters between the host and the filter core.
//!
//! ## Components
//!
//! | Adapter | Direction | Description |
//! |---------|-----------|-------------|
//! | [`ControlPlane`] | host ⇄ registers | Two-phase write and read channels, one transaction each |
//! | [`StreamPort`] | host → core → host | Ready/valid input and output with a single output register |
//!
//! ## Utilities
//!
//! - [`interleave`] — Stereo frame packing for stream words
//! - [`handshake`] — The `Idle → Awaiting → Idle` response slot behind every channel

pub mod interleave;
pub mod handshake;
pub mod control_plane;
pub mod stream;

pub use control_plane::{ControlPlane, ControlPlaneInputs, ControlPlaneOutputs, ReadData, WriteAck, WriteRequest};
pub use interleave::{StereoFrame, StreamBeat};
pub use stream::{StreamOutputs, StreamPort};
