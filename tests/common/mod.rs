#![allow(dead_code)]

use buslog::{
    avec::Observer,
    sans::marker::{ANNOUNCE, HANDSHAKE_2, HANDSHAKE_3, HANDSHAKE_DONE, LOG_TOGGLE},
};

/// Encode a frame as it appears on the bus.
pub fn frame(word: u16, unit: u16) -> [u8; 4] {
    let [a, b] = word.to_le_bytes();
    let [c, d] = unit.to_le_bytes();
    [a, b, c, d]
}

/// Encode a data frame carrying two log bytes.
pub fn data(low: u8, high: u8, unit: u16) -> [u8; 4] {
    frame(u16::from_le_bytes([low, high]), unit)
}

/// Frames announcing a unit and completing its handshake.
pub fn handshake(unit: u16) -> Vec<u8> {
    [ANNOUNCE, HANDSHAKE_2, HANDSHAKE_3, HANDSHAKE_DONE]
        .into_iter()
        .flat_map(|word| frame(word, unit))
        .collect()
}

pub fn toggle(unit: u16) -> [u8; 4] {
    frame(LOG_TOGGLE, unit)
}

/// Notifications received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Detected(usize, u16),
    Initialized(usize, u16),
    Duplicate(u16, usize),
    Toggled(usize, bool),
    Progress(usize, Option<usize>),
}

#[derive(Debug, Default)]
pub struct Recorder(pub Vec<Note>);

impl Observer for Recorder {
    fn unit_detected(&mut self, unit: usize, hardware: u16) {
        self.0.push(Note::Detected(unit, hardware));
    }
    fn unit_initialized(&mut self, unit: usize, hardware: u16) {
        self.0.push(Note::Initialized(unit, hardware));
    }
    fn duplicate_announce(&mut self, hardware: u16, offset: usize) {
        self.0.push(Note::Duplicate(hardware, offset));
    }
    fn logging_toggled(&mut self, unit: usize, logging: bool) {
        self.0.push(Note::Toggled(unit, logging));
    }
    fn progress(&mut self, offset: usize, total: Option<usize>) {
        self.0.push(Note::Progress(offset, total));
    }
}
