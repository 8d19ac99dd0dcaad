//! Host-side driver used by the core's tests.
//!
//! Retries every offer until the core accepts it, the way a well-behaved
//! host does on real hardware.

use super::{FirCore, StepInputs};
use crate::io::{StereoFrame, StreamBeat, WriteAck, WriteRequest};
use crate::regs::registers::coeff_addr;

/// Upper bound on steps spent waiting for a single handshake.
const MAX_WAIT: usize = 16;

pub(crate) struct Host<const N: usize> {
    pub fir: FirCore<N>,
}

impl<const N: usize> Host<N> {
    pub fn new() -> Self {
        Host { fir: FirCore::new() }
    }

    pub fn with_core(fir: FirCore<N>) -> Self {
        Host { fir }
    }

    /// Issue one write and consume its ack.
    pub fn write(&mut self, addr: u32, data: u32) -> WriteAck {
        let offer = StepInputs {
            write: Some(WriteRequest { addr, data }),
            ..StepInputs::default()
        };
        let mut accepted = false;
        for _ in 0..MAX_WAIT {
            if self.fir.step(&offer).write_accepted {
                accepted = true;
                break;
            }
        }
        assert!(accepted, "write to {addr:#x} never accepted");

        let consume = StepInputs {
            write_ack_ready: true,
            ..StepInputs::default()
        };
        for _ in 0..MAX_WAIT {
            if let Some(ack) = self.fir.step(&consume).write_ack {
                return ack;
            }
        }
        panic!("write to {addr:#x} never acknowledged");
    }

    /// Issue one read and consume its response.
    pub fn read(&mut self, addr: u32) -> u32 {
        let offer = StepInputs {
            read: Some(addr),
            ..StepInputs::default()
        };
        let mut accepted = false;
        for _ in 0..MAX_WAIT {
            if self.fir.step(&offer).read_accepted {
                accepted = true;
                break;
            }
        }
        assert!(accepted, "read of {addr:#x} never accepted");

        let consume = StepInputs {
            read_data_ready: true,
            ..StepInputs::default()
        };
        for _ in 0..MAX_WAIT {
            if let Some(resp) = self.fir.step(&consume).read_data {
                return resp.data;
            }
        }
        panic!("read of {addr:#x} never answered");
    }

    /// Program taps `0..taps.len()`.
    pub fn load_taps(&mut self, taps: &[i16]) {
        for (i, &tap) in taps.iter().enumerate() {
            self.write(coeff_addr(i), tap as u16 as u32);
        }
    }

    /// Stream one frame through with a draining sink and return the frame
    /// it produced.
    pub fn process(&mut self, frame: StereoFrame) -> StereoFrame {
        let out = self.fir.step(&StepInputs {
            stream_in: Some(StreamBeat::from_frame(frame, false)),
            stream_out_ready: true,
            ..StepInputs::default()
        });
        assert!(out.stream_in_accepted, "stream input refused");
        match self.fir.stream_out() {
            Some(beat) => beat.frame(),
            None => panic!("accepted input produced no output"),
        }
    }

    /// Stream a mono sequence on both channels, returning the left outputs.
    pub fn process_mono(&mut self, xs: &[i16], ys: &mut [i16]) {
        for (y, &x) in ys.iter_mut().zip(xs.iter()) {
            *y = self.process(StereoFrame::new(x, x)).left;
        }
    }

    /// Step once with nothing offered.
    pub fn idle(&mut self) {
        self.fir.step(&StepInputs::default());
    }
}
