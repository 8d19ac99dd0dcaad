//! The complete stereo filter core, advanced one discrete step at a time.
//!
//! [`FirCore`] owns the register file, two [`ConvolutionEngine`]s and both
//! bus adapters. [`FirCore::step`] is the single clock: every transition for
//! step `t + 1` depends only on the state at `t` and what the host offers
//! during `t`.
//!
//! Within one step:
//!
//! 1. The control register and a coefficient snapshot are sampled.
//! 2. The stream port accepts at most one input. On acceptance both engines
//!    advance with the sampled coefficients. While `clear` is set the partial
//!    sums are zeroed, with or without an accepted input.
//! 3. The control plane serves a read, then commits a write. A write landing
//!    in this step is first seen by the engines in the next step.
//!
//! # Example
//!
//! ```
//! use stereo_fir::filter::{Fir16, StepInputs};
//! use stereo_fir::io::{StereoFrame, StreamBeat};
//!
//! let mut fir = Fir16::new();
//! let impulse = StreamBeat::from_frame(StereoFrame::new(i16::MAX, 0), false);
//! let out = fir.step(&StepInputs {
//!     stream_in: Some(impulse),
//!     ..StepInputs::default()
//! });
//! assert!(out.stream_in_accepted);
//!
//! let produced = fir.stream_out().unwrap().frame();
//! assert_eq!(produced, StereoFrame::new(32766, 0));
//! ```

use crate::constants::{DEFAULT_TAPS, TESTBENCH_TAPS};
use crate::fir::{ConvolutionEngine, OutputFormat};
use crate::io::{
    ControlPlane, ControlPlaneInputs, ReadData, StereoFrame, StreamBeat, StreamPort, WriteAck,
    WriteRequest,
};
use crate::regs::{ControlRegister, RegisterFile};

#[cfg(test)]
mod testbench;

/// Core with the production coefficient memory.
pub type Fir129 = FirCore<DEFAULT_TAPS>;

/// Core with the reduced testbench coefficient memory.
pub type Fir16 = FirCore<TESTBENCH_TAPS>;

/// Everything the host offers during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInputs {
    pub write: Option<WriteRequest>,
    pub write_ack_ready: bool,
    pub read: Option<u32>,
    pub read_data_ready: bool,
    pub stream_in: Option<StreamBeat>,
    pub stream_out_ready: bool,
}

/// Transfers completed during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutputs {
    pub write_accepted: bool,
    pub write_ack: Option<WriteAck>,
    pub read_accepted: bool,
    pub read_data: Option<ReadData>,
    pub stream_in_accepted: bool,
    pub stream_out: Option<StreamBeat>,
}

/// Stereo FIR core with `N` shared coefficient taps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirCore<const N: usize> {
    regs: RegisterFile<N>,
    format: OutputFormat,
    left: ConvolutionEngine<N>,
    right: ConvolutionEngine<N>,
    control_plane: ControlPlane,
    stream: StreamPort,
    steps: u64,
}

impl<const N: usize> Default for FirCore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FirCore<N> {
    /// Core in its reset state with the default output format.
    pub fn new() -> Self {
        Self::with_format(OutputFormat::default())
    }

    /// Core in its reset state with a custom output format.
    pub fn with_format(format: OutputFormat) -> Self {
        log::debug!(
            "fir core: {} taps, shift {}, round={}, saturate={}, {}-bit accumulators",
            N,
            format.out_shift(),
            format.rounding(),
            format.saturation(),
            format.accumulator_bits()
        );
        FirCore {
            regs: RegisterFile::new(),
            format,
            left: ConvolutionEngine::new(),
            right: ConvolutionEngine::new(),
            control_plane: ControlPlane::new(),
            stream: StreamPort::new(),
            steps: 0,
        }
    }

    /// Advance every component by one step.
    pub fn step(&mut self, inputs: &StepInputs) -> StepOutputs {
        let ctrl = self.regs.control();
        let taps = self.regs.snapshot();
        let enabled = ctrl.enabled();
        let clear = ctrl.clearing();

        let (left, right, format) = (&mut self.left, &mut self.right, &self.format);
        let stream = self
            .stream
            .tick(enabled, inputs.stream_in, inputs.stream_out_ready, |beat| {
                let frame = beat.frame();
                let produced = StereoFrame::new(
                    left.step(frame.left, &taps, format, clear),
                    right.step(frame.right, &taps, format, clear),
                );
                StreamBeat::from_frame(produced, beat.last)
            });
        if clear && !stream.accepted {
            self.left.reset();
            self.right.reset();
        }

        let bus = self.control_plane.tick(
            &mut self.regs,
            &ControlPlaneInputs {
                write: inputs.write,
                write_ack_ready: inputs.write_ack_ready,
                read: inputs.read,
                read_data_ready: inputs.read_data_ready,
            },
        );

        self.steps += 1;
        StepOutputs {
            write_accepted: bus.write_accepted,
            write_ack: bus.write_ack,
            read_accepted: bus.read_accepted,
            read_data: bus.read_data,
            stream_in_accepted: stream.accepted,
            stream_out: stream.delivered,
        }
    }

    /// A write offered in the next step would be accepted.
    pub fn write_ready(&self) -> bool {
        self.control_plane.write_ready()
    }

    /// A read offered in the next step would be accepted.
    pub fn read_ready(&self) -> bool {
        self.control_plane.read_ready()
    }

    /// Write ack currently presented to the host.
    pub fn pending_write_ack(&self) -> Option<WriteAck> {
        self.control_plane.write_ack()
    }

    /// Read response currently presented to the host.
    pub fn pending_read_data(&self) -> Option<ReadData> {
        self.control_plane.read_data()
    }

    /// A stream input offered in the next step would be accepted, given
    /// whether the sink will be ready in that step.
    pub fn stream_in_ready(&self, stream_out_ready: bool) -> bool {
        self.stream
            .input_ready(self.regs.control().enabled(), stream_out_ready)
    }

    /// Stream output currently presented as valid.
    pub fn stream_out(&self) -> Option<StreamBeat> {
        self.stream.output(self.regs.control().enabled())
    }

    pub fn control(&self) -> ControlRegister {
        self.regs.control()
    }

    pub fn register_file(&self) -> &RegisterFile<N> {
        &self.regs
    }

    pub fn format(&self) -> &OutputFormat {
        &self.format
    }

    /// Left and right convolution engines.
    pub fn engines(&self) -> (&ConvolutionEngine<N>, &ConvolutionEngine<N>) {
        (&self.left, &self.right)
    }

    /// Number of steps taken since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
