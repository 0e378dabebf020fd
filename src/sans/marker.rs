//! Classifying the first word of a frame.

use tartan_bitfield::bitfield;

/// Word announcing a unit coming online.
pub const ANNOUNCE: u16 = 0xD00F;
/// Word for the second handshake step.
pub const HANDSHAKE_2: u16 = 0xF00D;
/// Word for the third handshake step.
pub const HANDSHAKE_3: u16 = 0xFEED;
/// Word completing the handshake.
pub const HANDSHAKE_DONE: u16 = 0xFADE;
/// Word entering or leaving logging mode.
pub const LOG_TOGGLE: u16 = 0xDEAD;

/// The meaning of a frame's first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Announce,
    Handshake2,
    Handshake3,
    HandshakeDone,
    LogToggle,
    /// Any other word; log payload if the owning unit is logging.
    Data,
}

impl Marker {
    /// Classify a frame's first word against the fixed marker set.
    pub fn classify(word: u16) -> Self {
        match word {
            ANNOUNCE => Self::Announce,
            HANDSHAKE_2 => Self::Handshake2,
            HANDSHAKE_3 => Self::Handshake3,
            HANDSHAKE_DONE => Self::HandshakeDone,
            LOG_TOGGLE => Self::LogToggle,
            _ => Self::Data,
        }
    }
}

/// The first word of a data frame, holding up to two log bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload(pub u16);

impl Payload {
    /// The log bytes carried, low byte first. Zero bytes are padding and are
    /// skipped.
    pub fn bytes(self) -> impl Iterator<Item = u8> {
        bitfield! {
            struct Word(u16) {
                [0..8] low: u8,
                [8..16] high: u8,
            }
        }

        let word = Word(self.0);

        [word.low(), word.high()].into_iter().filter(|b| *b != 0)
    }
}
