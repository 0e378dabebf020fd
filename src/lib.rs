#![no_std]

//! Per-device log extraction from shared debug bus captures.
//!
//! Several devices ("units") share one debug data line. Each announces itself
//! with a fixed four-marker handshake, then toggles in and out of a logging
//! mode in which the bus words it owns carry raw log bytes. Buslog scans a
//! capture of that line and rebuilds one ordered text log per unit.
//!
//! Most users should begin with the scanning functions in the [`avec`]
//! module. The underlying state machine is exposed in [`sans`] for
//! applications that need to drive the scan themselves (for example, over a
//! live capture).
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based scanning, capture loading, and log output
//! (default).
//! - `cli`: build the `buslog` command-line tool (default).

extern crate alloc;

pub mod avec;
pub mod sans;
