use buslog::sans::{
    Scanner,
    frame::Frame,
    marker::{Marker, Payload},
    registry::{DuplicateUnit, Registry},
    scanner::{Event, Rejection, Step},
    unit::{StateAliasing, UnitState},
};

mod common;

use common::{data, frame, handshake, toggle};

#[test]
fn frame_words_are_little_endian() {
    let r = [0x0F, 0xD0, 0x01, 0x00, 0xFF];

    assert_eq!(
        Frame::read(&r, 0),
        Some(Frame {
            word: 0xD00F,
            unit: 0x0001
        })
    );
    assert_eq!(
        Frame::read(&r, 1),
        Some(Frame {
            word: 0x01D0,
            unit: 0xFF00
        })
    );
    assert_eq!(Frame::read(&r, 2), None);
    assert_eq!(Frame::read(&r, usize::MAX), None);
}

#[test]
fn classify_markers() {
    assert_eq!(Marker::classify(0xD00F), Marker::Announce);
    assert_eq!(Marker::classify(0xF00D), Marker::Handshake2);
    assert_eq!(Marker::classify(0xFEED), Marker::Handshake3);
    assert_eq!(Marker::classify(0xFADE), Marker::HandshakeDone);
    assert_eq!(Marker::classify(0xDEAD), Marker::LogToggle);
    assert_eq!(Marker::classify(0x0FD0), Marker::Data);
    assert_eq!(Marker::classify(0x0000), Marker::Data);
}

#[test]
fn payload_skips_zero_bytes() {
    let bytes = |word| Payload(word).bytes().collect::<Vec<_>>();

    assert_eq!(bytes(0x6548), b"He");
    assert_eq!(bytes(0x0041), b"A");
    assert_eq!(bytes(0x4200), b"B");
    assert_eq!(bytes(0x0000), b"");
}

#[test]
fn distinct_transition_table() {
    use Marker::*;
    use UnitState::*;

    let states = [Detect1, Detect2, Detect3, Idle, Logging];
    let markers = [Announce, Handshake2, Handshake3, HandshakeDone, LogToggle, Data];

    for state in states {
        for marker in markers {
            let expected = match (marker, state) {
                (Handshake2, Detect1) => Some(Detect2),
                (Handshake3, Detect2) => Some(Detect3),
                (HandshakeDone, Detect3) => Some(Idle),
                (LogToggle, Idle) => Some(Logging),
                (LogToggle, Logging) => Some(Idle),
                (Data, Logging) => Some(Logging),
                _ => None,
            };

            assert_eq!(
                state.successor(marker, StateAliasing::Distinct),
                expected,
                "{marker:?} in {state:?}"
            );
        }
    }
}

#[test]
fn aliased_states_accept_stray_markers() {
    use Marker::*;
    use UnitState::*;

    let aliased = StateAliasing::Aliased;

    assert_eq!(Idle.successor(Handshake3, aliased), Some(Detect3));
    assert_eq!(Logging.successor(HandshakeDone, aliased), Some(Idle));
    assert_eq!(Detect2.successor(LogToggle, aliased), Some(Logging));
    assert_eq!(Detect3.successor(LogToggle, aliased), Some(Idle));
    assert_eq!(Detect3.successor(Data, aliased), Some(Detect3));
    assert_eq!(Detect1.successor(LogToggle, aliased), None);
    assert_eq!(Idle.successor(Data, aliased), None);
}

#[test]
fn registry_assigns_ids_in_detection_order() {
    let mut registry = Registry::new();

    assert_eq!(registry.register(0x0030).map(|u| u.id()), Ok(0));
    assert_eq!(registry.register(0x0010).map(|u| u.id()), Ok(1));
    assert_eq!(registry.register(0x0020).map(|u| u.id()), Ok(2));
    assert_eq!(
        registry.register(0x0010).map(|u| u.id()),
        Err(DuplicateUnit(0x0010))
    );

    let hardware: Vec<_> = registry.units().iter().map(|u| u.hardware()).collect();
    assert_eq!(hardware, [0x0030, 0x0010, 0x0020]);

    assert_eq!(registry.get(0x0020).map(|u| u.id()), Some(2));
    assert_eq!(registry.get(0x0040), None);
    assert_eq!(registry.get(0x0030).map(|u| u.state()), Some(UnitState::Detect1));
}

/// Feed a buffer to a scanner one window at a time, as the drivers do.
fn drive(scanner: &mut Scanner, r: &[u8]) -> Vec<Step> {
    let mut steps = Vec::new();

    while let Some(frame) = Frame::read(r, scanner.offset()) {
        steps.push(scanner.advance(frame));
    }

    steps
}

#[test]
fn accepted_frames_advance_four_bytes() {
    let mut scanner = Scanner::default();
    let steps = drive(&mut scanner, &handshake(1));

    assert_eq!(
        steps,
        [
            Step::Accepted(Event::Detected {
                unit: 0,
                hardware: 1
            }),
            Step::Accepted(Event::Handshake {
                unit: 0,
                state: UnitState::Detect2
            }),
            Step::Accepted(Event::Handshake {
                unit: 0,
                state: UnitState::Detect3
            }),
            Step::Accepted(Event::Initialized {
                unit: 0,
                hardware: 1
            }),
        ]
    );
    assert_eq!(scanner.offset(), 16);
}

#[test]
fn data_while_idle_advances_one_byte() {
    let mut scanner = Scanner::default();
    drive(&mut scanner, &handshake(1));

    let step = scanner.advance(Frame::decode(data(b'H', b'e', 1)));

    assert_eq!(
        step,
        Step::Rejected(Rejection::Unexpected {
            unit: 0,
            state: UnitState::Idle,
            marker: Marker::Data
        })
    );
    assert_eq!(scanner.offset(), 17);
    assert_eq!(scanner.registry().units()[0].log(), "");
}

#[test]
fn duplicate_announce_leaves_unit_untouched() {
    let mut scanner = Scanner::default();
    drive(&mut scanner, &handshake(1));
    scanner.advance(Frame::decode(toggle(1)));
    scanner.advance(Frame::decode(data(b'H', b'i', 1)));

    let before = scanner.registry().clone();
    let step = scanner.advance(Frame::decode(frame(0xD00F, 1)));

    assert_eq!(
        step,
        Step::Rejected(Rejection::DuplicateAnnounce { hardware: 1 })
    );
    assert_eq!(scanner.offset(), 25);
    assert_eq!(scanner.registry(), &before);
}

#[test]
fn frames_for_unknown_units_are_rejected() {
    let mut scanner = Scanner::default();

    for word in [0xF00D, 0xFEED, 0xFADE, 0xDEAD, 0x6548] {
        assert_eq!(
            scanner.advance(Frame::decode(frame(word, 4))),
            Step::Rejected(Rejection::UnknownUnit { hardware: 4 })
        );
    }

    assert_eq!(scanner.offset(), 5);
    assert!(scanner.finish().is_empty());
}

#[test]
fn logged_event_carries_payload() {
    let mut scanner = Scanner::default();
    drive(&mut scanner, &handshake(2));

    assert_eq!(
        scanner.advance(Frame::decode(toggle(2))),
        Step::Accepted(Event::Toggled {
            unit: 0,
            logging: true
        })
    );
    assert_eq!(
        scanner.advance(Frame::decode(data(b'O', b'K', 2))),
        Step::Accepted(Event::Logged {
            unit: 0,
            payload: Payload(0x4B4F)
        })
    );
    assert_eq!(scanner.registry().units()[0].log(), "OK");
}

#[test]
fn scan_always_terminates_within_buffer_length() {
    // Noise with handshakes mixed in, from a fixed linear congruential sequence.
    let mut seed: u32 = 0x2545_F491;
    let mut r: Vec<u8> = (0..4096)
        .map(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) as u8
        })
        .collect();
    r.splice(100..100, handshake(0x0BAD));
    r.splice(700..700, toggle(0x0BAD));

    let mut scanner = Scanner::default();
    let mut previous = 0;
    let mut steps = 0;

    while let Some(frame) = Frame::read(&r, scanner.offset()) {
        scanner.advance(frame);
        assert!(scanner.offset() > previous);
        previous = scanner.offset();
        steps += 1;
    }

    assert!(steps <= r.len());
    assert!(scanner.offset() + 4 > r.len());
    assert_eq!(scanner.registry().units()[0].hardware(), 0x0BAD);
}
