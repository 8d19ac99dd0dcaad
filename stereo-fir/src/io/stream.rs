//! Streaming bus adapter: ready/valid on both sides with one output register.
//!
//! ```text
//!  stream in ──► [ accept ] ──► process() ──► [ output register ] ──► stream out
//!                  ▲                                  │
//!                  └──────── ready = enable && (register free || draining)
//! ```
//!
//! Accepting an input is exactly one call of the processing closure; its
//! result becomes valid on the output from the next step. While `enable` is
//! clear nothing is accepted and a held output is not presented, but it is
//! kept and reappears once streaming is re-enabled.

use super::handshake::Handshake;
use super::interleave::StreamBeat;

/// Transfers completed on the streaming bus during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamOutputs {
    pub accepted: bool,
    /// Output beat consumed by the downstream sink this step.
    pub delivered: Option<StreamBeat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamPort {
    output: Handshake<StreamBeat>,
}

impl StreamPort {
    pub const fn new() -> Self {
        StreamPort {
            output: Handshake::Idle,
        }
    }

    /// An input offered this step would be accepted.
    ///
    /// A held output only blocks the input if the sink is not draining it in
    /// the same step.
    pub fn input_ready(&self, enabled: bool, output_ready: bool) -> bool {
        enabled && (self.output.is_idle() || output_ready)
    }

    /// Output beat currently presented as valid.
    pub fn output(&self, enabled: bool) -> Option<StreamBeat> {
        if enabled {
            self.output.presented()
        } else {
            None
        }
    }

    /// `true` when a produced beat is waiting for the sink, whether or not
    /// it is currently presented.
    pub fn output_pending(&self) -> bool {
        !self.output.is_idle()
    }

    /// Advance the port by one step.
    ///
    /// `process` runs once if and only if `input` is accepted. The end-of-block
    /// marker of the input is carried to the produced beat unchanged.
    pub fn tick<F>(
        &mut self,
        enabled: bool,
        input: Option<StreamBeat>,
        output_ready: bool,
        process: F,
    ) -> StreamOutputs
    where
        F: FnOnce(StreamBeat) -> StreamBeat,
    {
        let input_ready = self.input_ready(enabled, output_ready);
        let delivered = self.output.retire(enabled && output_ready);

        let mut accepted = false;
        if let (true, Some(beat)) = (input_ready, input) {
            let produced = process(beat);
            self.output.issue(StreamBeat {
                last: beat.last,
                ..produced
            });
            accepted = true;
        }

        StreamOutputs { accepted, delivered }
    }
}
