//! Reading bus frames.

use zerocopy::FromBytes;

/// Number of bytes in a frame.
pub const FRAME_SIZE: usize = 4;

/// A 4-byte window of the bus, read as two little-endian words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// The marker or log payload word (`w0`).
    pub word: u16,
    /// The candidate unit identifier (`w1`).
    pub unit: u16,
}

#[repr(C, packed)]
#[derive(FromBytes)]
struct RawFrame {
    word: [u8; 2],
    unit: [u8; 2],
}

impl Frame {
    /// Decode a frame from a window of bytes.
    pub fn decode(r: [u8; FRAME_SIZE]) -> Self {
        let RawFrame { word, unit } = zerocopy::transmute!(r);

        Self {
            word: u16::from_le_bytes(word),
            unit: u16::from_le_bytes(unit),
        }
    }

    /// Read the frame starting at byte offset `i`, if 4 bytes remain there.
    pub fn read(r: &[u8], i: usize) -> Option<Self> {
        let end = i.checked_add(FRAME_SIZE)?;
        let window = r.get(i..end)?;

        Some(Self::decode(window.try_into().ok()?))
    }
}
