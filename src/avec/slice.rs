//! Slice-based scanner implementation.

use crate::sans::{Scanner, frame::Frame, registry::Registry};

use super::{Observer, Options, Progress, publish};

/// Scan a slice of a capture, publishing notifications to an observer.
///
/// Bytes trailing the last complete frame are ignored.
///
/// This method is also re-exported as `buslog::avec::scan_slice`.
pub fn scan(r: &[u8], options: &Options, o: &mut impl Observer) -> Registry {
    let mut scanner = Scanner::new(options.aliasing);
    let mut progress = Progress::new(options.progress_interval);

    while let Some(frame) = Frame::read(r, scanner.offset()) {
        let offset = scanner.offset();
        let step = scanner.advance(frame);

        publish(&step, offset, o);
        progress.update(&scanner, Some(r.len()), o);
    }

    scanner.finish()
}
