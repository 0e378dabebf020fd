use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context;
use buslog::{
    avec::{
        self, Logger, Options,
        capture::{self, CaptureOptions},
        report,
    },
    sans::unit::{StateAliasing, Unit},
};
use clap::Parser;
use log::info;

/// Extract per-unit debug logs from a logic analyzer capture of a shared
/// debug bus.
#[derive(Parser, Debug)]
#[command(name = "buslog", version, long_about = None)]
struct Args {
    /// Path to the logic trace in CSV format
    #[arg(short, long = "input-csv")]
    input_csv: PathBuf,

    /// Where to store the extracted log (a directory with --split)
    #[arg(short, long)]
    output: PathBuf,

    /// Zero-based index of the CSV column holding data bytes
    #[arg(long, default_value_t = 2)]
    column: usize,

    /// The CSV has no header row
    #[arg(long)]
    no_headers: bool,

    /// Write one file per unit into the output directory
    #[arg(long)]
    split: bool,

    /// Also dump the decoded capture bytes to this path
    #[arg(long)]
    raw: Option<PathBuf>,

    /// Bytes between progress messages (0 disables them)
    #[arg(long, default_value_t = 1024 * 1024)]
    progress_interval: usize,

    /// Treat Idle as Detect2 and Logging as Detect3 when matching markers,
    /// as older tools did
    #[arg(long)]
    legacy_state_aliasing: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layout of the capture table.
    fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            column: self.column,
            has_headers: !self.no_headers,
            ..CaptureOptions::default()
        }
    }

    /// Settings for the scan.
    fn scan_options(&self) -> Options {
        Options {
            progress_interval: self.progress_interval,
            aliasing: if self.legacy_state_aliasing {
                StateAliasing::Aliased
            } else {
                StateAliasing::Distinct
            },
        }
    }

    /// Write unit logs to the output path, as one file or a directory of them.
    fn write_logs(&self, units: &[Unit]) -> anyhow::Result<()> {
        if self.split {
            let paths = report::write_split(&self.output, units)
                .with_context(|| format!("Failed to write logs to {}", self.output.display()))?;

            for path in paths {
                info!("Wrote {}", path.display());
            }
        } else {
            let file = File::create(&self.output)
                .with_context(|| format!("Failed to create {}", self.output.display()))?;

            report::write_combined(&mut BufWriter::new(file), units)
                .with_context(|| format!("Failed to write logs to {}", self.output.display()))?;
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let bytes = capture::load(&args.input_csv, &args.capture_options())
        .with_context(|| format!("Failed to load capture {}", args.input_csv.display()))?;
    info!("Loaded {} bytes from {}", bytes.len(), args.input_csv.display());

    if let Some(raw) = &args.raw {
        report::write_raw(raw, &bytes)
            .with_context(|| format!("Failed to write raw bytes to {}", raw.display()))?;
    }

    let registry = avec::scan_slice(&bytes, &args.scan_options(), &mut Logger);
    info!("Found {} unit(s)", registry.len());

    args.write_logs(registry.units())
}
