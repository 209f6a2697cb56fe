//! Rolling sequence-number counter.
//!
//! Every emitted frame carries a 1-byte sequence number that the device
//! echoes in its reply, letting the session layer correlate responses.
//! The firmware reserves 0xFF for an out-of-band marker, so the counter
//! only takes values 0-254 and wraps early: the usable space has 255
//! distinct values, not 256.

/// Highest value the counter emits; advancing past it wraps to 0.
pub const SEQ_MAX: u8 = 254;

/// Owned sequence-counter state.
///
/// One instance per logical command-issuing context. Methods take
/// `&mut self`, so concurrent contexts must serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeqCounter {
    value: u8,
}

impl SeqCounter {
    /// Counter at 0, the process-start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter seeded at `seed`, for deterministic tests and resumed
    /// sessions. Seeds past [`SEQ_MAX`] wrap into the valid range.
    pub fn starting_at(seed: u8) -> Self {
        Self {
            value: seed % (SEQ_MAX + 1),
        }
    }

    /// Current value without consuming it.
    pub fn peek(&self) -> u8 {
        self.value
    }

    /// Returns the current value, then advances, wrapping from 254 to 0.
    pub fn next(&mut self) -> u8 {
        let value = self.value;
        self.value = if self.value >= SEQ_MAX {
            0
        } else {
            self.value + 1
        };
        value
    }
}
