//! Convenience interfaces for common scanning patterns.
//!
//! The functions in this module drive a [`Scanner`] over a byte slice or a
//! reader, publishing notifications to an [`Observer`] and returning the
//! detected units. With the `std` feature, [`capture`] loads bytes from a
//! logic analyzer export and [`report`] writes the extracted logs.

#[cfg(feature = "std")]
pub mod capture;
#[cfg(feature = "std")]
pub mod reader;
#[cfg(feature = "std")]
pub mod report;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::scan as scan_reader;
pub use slice::scan as scan_slice;

use log::{debug, info, warn};

use crate::sans::{
    Scanner,
    scanner::{Event, Rejection, Step},
    unit::StateAliasing,
};

/// Settings for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Bytes between progress notifications, or zero for none.
    pub progress_interval: usize,
    /// How transition preconditions compare unit states.
    pub aliasing: StateAliasing,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            progress_interval: 1024 * 1024,
            aliasing: StateAliasing::Distinct,
        }
    }
}

/// Receive notifications as a scan proceeds.
///
/// Notifications are purely observational. The default implementation of
/// each method ignores them.
#[allow(unused_variables)]
pub trait Observer {
    /// A unit announced itself and was assigned a logical identifier.
    fn unit_detected(&mut self, unit: usize, hardware: u16) {}
    /// A unit completed its handshake.
    fn unit_initialized(&mut self, unit: usize, hardware: u16) {}
    /// A known unit announced itself again at a byte offset. The frame was
    /// discarded.
    fn duplicate_announce(&mut self, hardware: u16, offset: usize) {}
    /// A unit entered or left logging mode.
    fn logging_toggled(&mut self, unit: usize, logging: bool) {}
    /// The scan passed a progress interval. `total` is the capture length,
    /// when known.
    fn progress(&mut self, offset: usize, total: Option<usize>) {}
}

impl Observer for () {}

/// An [`Observer`] forwarding notifications to the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Observer for Logger {
    fn unit_detected(&mut self, unit: usize, hardware: u16) {
        info!("Detected unit {unit} with hardware identifier {hardware:#06x}");
    }

    fn unit_initialized(&mut self, unit: usize, hardware: u16) {
        info!("Fully initialized unit {unit} with hardware identifier {hardware:#06x}");
    }

    fn duplicate_announce(&mut self, hardware: u16, offset: usize) {
        warn!("Unit with hardware identifier {hardware:#06x} is already known (offset {offset}), reset happening?");
    }

    fn logging_toggled(&mut self, unit: usize, logging: bool) {
        debug!("Unit {unit} {} logging", if logging { "started" } else { "stopped" });
    }

    fn progress(&mut self, offset: usize, total: Option<usize>) {
        match total {
            Some(total) => info!("Processed {offset} out of {total} bytes"),
            None => info!("Processed {offset} bytes"),
        }
    }
}

/// Publish a step taken from byte offset `offset` to an observer.
fn publish(step: &Step, offset: usize, o: &mut impl Observer) {
    match *step {
        Step::Accepted(Event::Detected { unit, hardware }) => o.unit_detected(unit, hardware),
        Step::Accepted(Event::Initialized { unit, hardware }) => {
            o.unit_initialized(unit, hardware)
        }
        Step::Accepted(Event::Toggled { unit, logging }) => o.logging_toggled(unit, logging),
        Step::Rejected(Rejection::DuplicateAnnounce { hardware }) => {
            o.duplicate_announce(hardware, offset)
        }
        _ => {}
    }
}

/// Tracker of the next offset at which to report progress.
struct Progress {
    interval: usize,
    next: usize,
}

impl Progress {
    fn new(interval: usize) -> Self {
        Self {
            interval,
            next: interval,
        }
    }

    /// Report progress if the scanner has crossed the next interval boundary.
    fn update(&mut self, scanner: &Scanner, total: Option<usize>, o: &mut impl Observer) {
        let offset = scanner.offset();

        if self.interval != 0 && offset >= self.next {
            o.progress(offset, total);
            self.next = (offset / self.interval + 1) * self.interval;
        }
    }
}
