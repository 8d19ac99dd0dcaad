//! Control-plane bus adapter.
//!
//! Two independent channels, each allowing a single transaction in flight:
//!
//! - **Write:** address and data must be offered in the same step. They
//!   travel together in one [`WriteRequest`], so an address offered without
//!   data cannot be expressed at all and needs no stalled-channel state. The
//!   decoded write commits at the end of the accepting step and a
//!   [`WriteAck`] is held valid from the next step until the host consumes
//!   it. No new write is accepted while an ack is outstanding.
//! - **Read:** the response is sampled when the address is accepted and held
//!   valid until consumed. No new read is accepted while it is outstanding.
//!
//! An offer that is not accepted changes nothing; the host re-offers it on a
//! later step.

use super::handshake::Handshake;
use crate::regs::{Access, RegisterMap};

/// Address and data offered together on the write channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteRequest {
    pub addr: u32,
    pub data: u32,
}

/// Write response. `access` records whether the write landed or was dropped;
/// the bus response itself is always OK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteAck {
    pub addr: u32,
    pub access: Access,
}

/// Read response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadData {
    pub addr: u32,
    pub data: u32,
}

/// What the host offers on the control plane during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlPlaneInputs {
    pub write: Option<WriteRequest>,
    pub write_ack_ready: bool,
    pub read: Option<u32>,
    pub read_data_ready: bool,
}

/// Transfers completed on the control plane during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlPlaneOutputs {
    pub write_accepted: bool,
    /// Ack consumed by the host this step.
    pub write_ack: Option<WriteAck>,
    pub read_accepted: bool,
    /// Read response consumed by the host this step.
    pub read_data: Option<ReadData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlPlane {
    write: Handshake<WriteAck>,
    read: Handshake<ReadData>,
}

impl ControlPlane {
    pub const fn new() -> Self {
        ControlPlane {
            write: Handshake::Idle,
            read: Handshake::Idle,
        }
    }

    /// A write offered this step would be accepted.
    pub fn write_ready(&self) -> bool {
        self.write.is_idle()
    }

    /// A read offered this step would be accepted.
    pub fn read_ready(&self) -> bool {
        self.read.is_idle()
    }

    /// Write ack currently held valid.
    pub fn write_ack(&self) -> Option<WriteAck> {
        self.write.presented()
    }

    /// Read response currently held valid.
    pub fn read_data(&self) -> Option<ReadData> {
        self.read.presented()
    }

    /// Advance both channels by one step.
    ///
    /// Readiness comes from the state at the start of the step, so a
    /// response consumed in this step frees its channel for the next one.
    /// The read is served before the write commits: a read and a write
    /// accepted together see the register contents from before the write.
    pub fn tick<R: RegisterMap>(&mut self, regs: &mut R, inputs: &ControlPlaneInputs) -> ControlPlaneOutputs {
        let write_ready = self.write_ready();
        let read_ready = self.read_ready();

        let mut out = ControlPlaneOutputs {
            write_ack: self.write.retire(inputs.write_ack_ready),
            read_data: self.read.retire(inputs.read_data_ready),
            ..ControlPlaneOutputs::default()
        };

        if let (true, Some(addr)) = (read_ready, inputs.read) {
            let data = regs.read(addr);
            self.read.issue(ReadData { addr, data });
            out.read_accepted = true;
        }

        if let (true, Some(req)) = (write_ready, inputs.write) {
            let access = regs.write(req.addr, req.data);
            self.write.issue(WriteAck {
                addr: req.addr,
                access,
            });
            out.write_accepted = true;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::registers::{coeff_addr, CTRL};
    use crate::regs::RegisterFile;

    fn write(addr: u32, data: u32) -> ControlPlaneInputs {
        ControlPlaneInputs {
            write: Some(WriteRequest { addr, data }),
            ..ControlPlaneInputs::default()
        }
    }

    fn read(addr: u32) -> ControlPlaneInputs {
        ControlPlaneInputs {
            read: Some(addr),
            ..ControlPlaneInputs::default()
        }
    }

    #[test]
    fn write_commits_and_acks_next_step() {
        let mut regs = RegisterFile::<16>::new();
        let mut bus = ControlPlane::new();

        let out = bus.tick(&mut regs, &write(coeff_addr(2), 1234));
        assert!(out.write_accepted);
        assert_eq!(out.write_ack, None);
        assert_eq!(regs.coefficients().read(2), Some(1234));
        assert_eq!(
            bus.write_ack(),
            Some(WriteAck {
                addr: coeff_addr(2),
                access: Access::Applied
            })
        );

        let out = bus.tick(
            &mut regs,
            &ControlPlaneInputs {
                write_ack_ready: true,
                ..ControlPlaneInputs::default()
            },
        );
        assert_eq!(out.write_ack.map(|ack| ack.access), Some(Access::Applied));
        assert!(bus.write_ready());
    }

    #[test]
    fn pending_ack_blocks_next_write() {
        let mut regs = RegisterFile::<16>::new();
        let mut bus = ControlPlane::new();

        bus.tick(&mut regs, &write(coeff_addr(0), 1));
        // Ack not consumed: a second write is refused, repeatedly
        for _ in 0..3 {
            let out = bus.tick(&mut regs, &write(coeff_addr(0), 2));
            assert!(!out.write_accepted);
            assert_eq!(regs.coefficients().read(0), Some(1));
        }

        // Consuming the ack while offering the write still refuses it this step
        let mut offer = write(coeff_addr(0), 2);
        offer.write_ack_ready = true;
        let out = bus.tick(&mut regs, &offer);
        assert!(out.write_ack.is_some());
        assert!(!out.write_accepted);

        let out = bus.tick(&mut regs, &offer);
        assert!(out.write_accepted);
        assert_eq!(regs.coefficients().read(0), Some(2));
    }

    #[test]
    fn dropped_write_is_still_acknowledged() {
        let mut regs = RegisterFile::<16>::new();
        let mut bus = ControlPlane::new();

        let out = bus.tick(&mut regs, &write(0x08, 0xFFFF));
        assert!(out.write_accepted);
        assert_eq!(bus.write_ack().map(|ack| ack.access), Some(Access::Ignored));

        bus.tick(&mut regs, &ControlPlaneInputs::default());
        assert_eq!(bus.write_ack().map(|ack| ack.access), Some(Access::Ignored));
        assert_eq!(regs, RegisterFile::<16>::new());
    }

    #[test]
    fn read_response_held_until_consumed() {
        let mut regs = RegisterFile::<16>::new();
        regs.write(coeff_addr(1), 0xFFFF_FF00);
        let mut bus = ControlPlane::new();

        let out = bus.tick(&mut regs, &read(coeff_addr(1)));
        assert!(out.read_accepted);
        assert_eq!(out.read_data, None);

        // Response survives steps without rready, and blocks new reads
        let out = bus.tick(&mut regs, &read(CTRL));
        assert!(!out.read_accepted);
        assert_eq!(bus.read_data().map(|r| r.data), Some(0xFFFF_FF00));

        let out = bus.tick(
            &mut regs,
            &ControlPlaneInputs {
                read_data_ready: true,
                ..ControlPlaneInputs::default()
            },
        );
        assert_eq!(
            out.read_data,
            Some(ReadData {
                addr: coeff_addr(1),
                data: 0xFFFF_FF00
            })
        );
        assert!(bus.read_ready());
    }

    #[test]
    fn same_step_read_sees_value_before_write() {
        let mut regs = RegisterFile::<16>::new();
        let mut bus = ControlPlane::new();

        let mut offer = write(CTRL, 0x2);
        offer.read = Some(CTRL);
        let out = bus.tick(&mut regs, &offer);
        assert!(out.write_accepted && out.read_accepted);
        assert_eq!(bus.read_data().map(|r| r.data), Some(0x1));
        assert_eq!(regs.read(CTRL), 0x2);
    }

    #[test]
    fn channels_are_independent() {
        let mut regs = RegisterFile::<16>::new();
        let mut bus = ControlPlane::new();

        bus.tick(&mut regs, &write(CTRL, 0x3));
        // Write ack outstanding; reads still flow
        for _ in 0..2 {
            let out = bus.tick(
                &mut regs,
                &ControlPlaneInputs {
                    read: Some(CTRL),
                    read_data_ready: true,
                    ..ControlPlaneInputs::default()
                },
            );
            assert!(out.read_accepted || out.read_data.is_some());
        }
        assert!(bus.write_ack().is_some());
    }
}
