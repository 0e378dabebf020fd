//! Applying frames to the units they belong to.

use super::{
    frame::{FRAME_SIZE, Frame},
    marker::{Marker, Payload},
    registry::{DuplicateUnit, Registry},
    unit::{StateAliasing, UnitState},
};

/// The outcome of offering a frame to a [`Scanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The frame was applied. The next frame starts 4 bytes later.
    Accepted(Event),
    /// The frame does not fit any unit's state. The next frame starts 1 byte
    /// later.
    Rejected(Rejection),
}

impl Step {
    /// Number of bytes consumed from the bus.
    pub fn consumed(&self) -> usize {
        match self {
            Self::Accepted(_) => FRAME_SIZE,
            Self::Rejected(_) => 1,
        }
    }
}

/// The effect of an accepted frame. Units are named by logical identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A new unit announced itself.
    Detected { unit: usize, hardware: u16 },
    /// A unit advanced an intermediate handshake step.
    Handshake { unit: usize, state: UnitState },
    /// A unit completed its handshake.
    Initialized { unit: usize, hardware: u16 },
    /// A unit entered or left logging mode.
    Toggled { unit: usize, logging: bool },
    /// Log bytes were appended to a unit.
    Logged { unit: usize, payload: Payload },
}

/// Why a frame was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// An already-known unit announced itself again, possibly after a reset.
    DuplicateAnnounce { hardware: u16 },
    /// No unit has this hardware identifier.
    UnknownUnit { hardware: u16 },
    /// The marker is not valid in the unit's current state.
    Unexpected {
        unit: usize,
        state: UnitState,
        marker: Marker,
    },
}

/// The scan state: every unit seen so far, and the byte offset of the next
/// frame.
#[derive(Debug, Default)]
pub struct Scanner {
    registry: Registry,
    offset: usize,
    aliasing: StateAliasing,
}

impl Scanner {
    /// A scanner at offset zero with no units.
    pub fn new(aliasing: StateAliasing) -> Self {
        Self {
            registry: Registry::new(),
            offset: 0,
            aliasing,
        }
    }

    /// Byte offset at which the next frame must be read.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Units detected so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Offer the frame read at [`Scanner::offset`], advancing the offset by
    /// the bytes it consumed.
    pub fn advance(&mut self, frame: Frame) -> Step {
        let step = self.apply(frame);
        self.offset += step.consumed();
        step
    }

    /// End the scan, returning the units detected.
    pub fn finish(self) -> Registry {
        self.registry
    }

    fn apply(&mut self, Frame { word, unit: hardware }: Frame) -> Step {
        let marker = Marker::classify(word);

        if marker == Marker::Announce {
            return match self.registry.register(hardware) {
                Ok(unit) => Step::Accepted(Event::Detected {
                    unit: unit.id(),
                    hardware,
                }),
                Err(DuplicateUnit(hardware)) => {
                    Step::Rejected(Rejection::DuplicateAnnounce { hardware })
                }
            };
        }

        let Some(unit) = self.registry.get_mut(hardware) else {
            return Step::Rejected(Rejection::UnknownUnit { hardware });
        };

        let (id, state) = (unit.id(), unit.state());

        let Some(next) = state.successor(marker, self.aliasing) else {
            return Step::Rejected(Rejection::Unexpected {
                unit: id,
                state,
                marker,
            });
        };

        unit.set_state(next);

        let event = match marker {
            Marker::HandshakeDone => Event::Initialized { unit: id, hardware },
            Marker::LogToggle => Event::Toggled {
                unit: id,
                logging: next == UnitState::Logging,
            },
            Marker::Data => {
                let payload = Payload(word);
                unit.append(payload);
                Event::Logged { unit: id, payload }
            }
            _ => Event::Handshake {
                unit: id,
                state: next,
            },
        };

        Step::Accepted(event)
    }
}
