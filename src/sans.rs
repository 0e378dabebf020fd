//! Internal state machine for implementing scanners.
//!
//! This module is intended for applications that need fine control over the
//! scan, such as those feeding bytes from a live capture. See [`crate::avec`]
//! for implementations covering common scanning patterns.
//!
//! # Architecture
//!
//! The bus carries 4-byte [`frame::Frame`]s of two little-endian words. The
//! first word is either one of five fixed markers or, for a unit currently
//! logging, two bytes of log text. The second word always names the unit the
//! frame belongs to.
//!
//! Frame boundaries are not marked on the wire. A [`Scanner`] is therefore
//! fed overlapping windows: every frame it is given yields a [`scanner::Step`]
//! that either accepts the frame (consuming 4 bytes) or rejects it (consuming
//! 1 byte, so the next window starts one byte later). The scanner tracks the
//! resulting byte offset, but reading the bytes at that offset is left to the
//! caller:
//!
//! - Reading a window from the current [`Scanner::offset`], including
//! buffering as necessary.
//!
//! - Ending the scan once fewer than 4 bytes remain.
//!
//! Implementers are recommended to begin by studying and modifying a driver
//! from the [`crate::avec`] module.

pub mod frame;
pub mod marker;
pub mod registry;
pub mod scanner;
pub mod unit;

pub use scanner::Scanner;
