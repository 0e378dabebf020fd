//! Units and their handshake and logging states.

use alloc::string::String;

use super::marker::{Marker, Payload};

/// The progress of a unit through its handshake, and afterward, whether it is
/// logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    /// Announced, awaiting the second handshake step.
    Detect1,
    /// Awaiting the third handshake step.
    Detect2,
    /// Awaiting handshake completion.
    Detect3,
    /// Handshake complete, not logging.
    Idle,
    /// Handshake complete, data frames carry log bytes.
    Logging,
}

/// How transition preconditions compare states.
///
/// The tool this format comes from numbered `Idle` the same as `Detect2` and
/// `Logging` the same as `Detect3`, so a steady-state unit would also accept
/// stray handshake markers (and a mid-handshake unit would accept toggles and
/// data). [`StateAliasing::Aliased`] reproduces that for parity with its
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateAliasing {
    /// Every state is distinct.
    #[default]
    Distinct,
    /// `Idle` matches `Detect2`, and `Logging` matches `Detect3`.
    Aliased,
}

impl StateAliasing {
    /// Whether `state` satisfies a precondition requiring `required`.
    pub fn matches(self, state: UnitState, required: UnitState) -> bool {
        match self {
            Self::Distinct => state == required,
            Self::Aliased => alias_class(state) == alias_class(required),
        }
    }
}

fn alias_class(state: UnitState) -> u8 {
    match state {
        UnitState::Detect1 => 1,
        UnitState::Detect2 | UnitState::Idle => 2,
        UnitState::Detect3 | UnitState::Logging => 3,
    }
}

impl UnitState {
    /// The state following a frame classified as `marker`, or `None` if the
    /// frame is not accepted in this state.
    ///
    /// Announce frames are never accepted by a known unit.
    pub fn successor(self, marker: Marker, aliasing: StateAliasing) -> Option<Self> {
        use UnitState::*;

        let is = |required| aliasing.matches(self, required);

        let next = match marker {
            Marker::Handshake2 if is(Detect1) => Detect2,
            Marker::Handshake3 if is(Detect2) => Detect3,
            Marker::HandshakeDone if is(Detect3) => Idle,
            Marker::LogToggle if is(Logging) => Idle,
            Marker::LogToggle if is(Idle) => Logging,
            Marker::Data if is(Logging) => self,
            _ => return None,
        };

        Some(next)
    }
}

/// A device observed on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    id: usize,
    hardware: u16,
    state: UnitState,
    log: String,
}

impl Unit {
    pub(super) fn new(id: usize, hardware: u16) -> Self {
        Self {
            id,
            hardware,
            state: UnitState::Detect1,
            log: String::new(),
        }
    }

    /// Logical identifier, assigned in order of detection from zero.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Hardware identifier, as announced on the bus.
    pub fn hardware(&self) -> u16 {
        self.hardware
    }

    /// Current handshake or logging state.
    pub fn state(&self) -> UnitState {
        self.state
    }

    /// Log text accumulated so far.
    ///
    /// Each log byte becomes one character by its Latin-1 code point, so
    /// ASCII text is reproduced exactly.
    pub fn log(&self) -> &str {
        &self.log
    }

    pub(super) fn set_state(&mut self, state: UnitState) {
        self.state = state;
    }

    pub(super) fn append(&mut self, payload: Payload) {
        self.log.extend(payload.bytes().map(char::from));
    }
}
