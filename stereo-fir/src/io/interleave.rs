//! Stereo sample packing for the streaming bus.
//!
//! ## Word format
//!
//! Each `u32` stream word carries one stereo frame:
//! - Upper 16 bits (bits 16–31): left channel sample (`i16`)
//! - Lower 16 bits (bits 0–15): right channel sample (`i16`)

/// One sample per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StereoFrame {
    pub left: i16,
    pub right: i16,
}

impl StereoFrame {
    pub const fn new(left: i16, right: i16) -> Self {
        StereoFrame { left, right }
    }

    /// Pack as `(left << 16) | (right & 0xFFFF)`.
    pub const fn pack(self) -> u32 {
        ((self.left as u16 as u32) << 16) | (self.right as u16 as u32)
    }

    pub const fn unpack(word: u32) -> Self {
        StereoFrame {
            left: (word >> 16) as i16,
            right: word as i16,
        }
    }
}

/// One streaming transfer: a packed stereo word plus the end-of-block marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamBeat {
    pub data: u32,
    pub last: bool,
}

impl StreamBeat {
    pub const fn new(data: u32, last: bool) -> Self {
        StreamBeat { data, last }
    }

    pub const fn from_frame(frame: StereoFrame, last: bool) -> Self {
        StreamBeat {
            data: frame.pack(),
            last,
        }
    }

    pub const fn frame(&self) -> StereoFrame {
        StereoFrame::unpack(self.data)
    }
}
