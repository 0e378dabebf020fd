//! Writing extracted logs.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    vec::Vec,
};

use crate::sans::unit::Unit;

extern crate std;

/// Write the logs of every unit to one writer, each under a header naming
/// its logical identifier.
pub fn write_combined(w: &mut impl Write, units: &[Unit]) -> io::Result<()> {
    for unit in units {
        write!(w, "\n\n\nLog of unit {}: \n", unit.id())?;
        w.write_all(unit.log().as_bytes())?;
    }

    w.flush()
}

/// Write the log of each unit to its own file in a directory, creating the
/// directory if necessary.
///
/// Returns the paths written, in detection order.
pub fn write_split(dir: impl AsRef<Path>, units: &[Unit]) -> io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    units
        .iter()
        .map(|unit| -> io::Result<PathBuf> {
            let path = dir.join(split_file_name(unit));
            let mut w = BufWriter::new(File::create(&path)?);
            w.write_all(unit.log().as_bytes())?;
            w.flush()?;
            Ok(path)
        })
        .collect()
}

/// File name used by [`write_split`] for a unit.
pub fn split_file_name(unit: &Unit) -> PathBuf {
    PathBuf::from(std::format!("unit-{}.log", unit.id()))
}

/// Dump the decoded bytes of a capture, for inspection with other tools.
pub fn write_raw(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}
