//! Reader-based scanner implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::sans::{
    Scanner,
    frame::{FRAME_SIZE, Frame},
    registry::Registry,
};

use super::{Observer, Options, Progress, publish};

extern crate std;

/// Errors occurring while scanning from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Scan a capture from a reader, publishing notifications to an observer.
///
/// Bytes are read a few at a time, so wrap unbuffered sources in a
/// [`std::io::BufReader`]. The scan ends when the reader does; a trailing
/// partial frame is ignored.
///
/// This method is also re-exported as `buslog::avec::scan_reader`.
///
/// _Requires Cargo feature `std`._
pub fn scan(r: &mut impl Read, options: &Options, o: &mut impl Observer) -> Result<Registry, Error> {
    let mut scanner = Scanner::new(options.aliasing);
    let mut progress = Progress::new(options.progress_interval);

    let mut window = [0; FRAME_SIZE];

    if !fill(r, &mut window)? {
        return Ok(scanner.finish());
    }

    loop {
        let offset = scanner.offset();
        let step = scanner.advance(Frame::decode(window));

        publish(&step, offset, o);
        progress.update(&scanner, None, o);

        // Slide the window past the consumed bytes and refill its tail.
        let n = step.consumed();
        window.copy_within(n.., 0);

        if !fill(r, &mut window[FRAME_SIZE - n..])? {
            break;
        }
    }

    Ok(scanner.finish())
}

/// Fill a buffer from a reader, returning false if the reader ended first.
fn fill(r: &mut impl Read, buf: &mut [u8]) -> Result<bool, Error> {
    match r.read_exact(buf) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(err) => Err(err)?,
    }
}
