//! Single-entry response register shared by every bus channel.
//!
//! ```text
//!            issue()                     retire(ready = true)
//!   Idle ───────────────► Awaiting(T) ─────────────────────► Idle
//!                           │    ▲
//!                           └────┘ retire(ready = false)
//! ```

/// One response slot: either free or holding a response the host has not
/// consumed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handshake<T> {
    Idle,
    Awaiting(T),
}

impl<T> Default for Handshake<T> {
    fn default() -> Self {
        Handshake::Idle
    }
}

impl<T: Copy> Handshake<T> {
    pub const fn is_idle(&self) -> bool {
        matches!(self, Handshake::Idle)
    }

    /// The response currently held valid, if any.
    pub fn presented(&self) -> Option<T> {
        match *self {
            Handshake::Idle => None,
            Handshake::Awaiting(response) => Some(response),
        }
    }

    /// Hand the held response to the host if it is ready for it.
    pub fn retire(&mut self, ready: bool) -> Option<T> {
        match *self {
            Handshake::Awaiting(response) if ready => {
                *self = Handshake::Idle;
                Some(response)
            }
            _ => None,
        }
    }

    /// Hold a new response. The slot must be free.
    pub fn issue(&mut self, response: T) {
        debug_assert!(self.is_idle(), "response slot already occupied");
        *self = Handshake::Awaiting(response);
    }
}
