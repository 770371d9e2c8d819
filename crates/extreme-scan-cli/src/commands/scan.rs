//! Scan command - classify a directory of PNGs and mark the extreme ones.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use extreme_scan_adapters::{FsImageSource, FsMarker};
use extreme_scan_core::{ExtremesClassifier, ExtremesConfig, ScanOptions, ScanSummary, Scanner};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::output::ConsoleReporter;

/// Hardcoded default values.
mod defaults {
    pub const THRESHOLD: f64 = extreme_scan_core::classifier::DEFAULT_THRESHOLD;
}

/// Parse and validate a threshold percentage (0.0-100.0).
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=100.0"))
    }
}

/// Arguments for a directory scan.
#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Directory containing the PNG files to scan
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Flag images whose near-black or near-white share exceeds this percentage (0.0-100.0)
    #[arg(long, value_name = "PERCENT", value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Report flagged files without renaming them
    #[arg(long)]
    pub dry_run: bool,

    /// Show a progress bar instead of per-file lines
    #[arg(long)]
    pub progress: bool,

    /// Suppress per-file output
    #[arg(short, long)]
    pub quiet: bool,
}

impl ScanArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    ///
    /// Boolean flags can only be switched on by config; a flag passed on the
    /// command line always stays on.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        args.threshold = args.threshold.or(config.scan.threshold);

        if !args.dry_run {
            args.dry_run = config.scan.dry_run.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }
        if !args.quiet {
            args.quiet = config.output.quiet.unwrap_or(false);
        }

        args
    }

    /// Get threshold with fallback to hardcoded default.
    fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(defaults::THRESHOLD)
    }
}

/// Run the scan command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &ScanArgs) -> Result<ScanSummary> {
    let source = FsImageSource::open(&args.dir)?;

    let threshold = args.threshold();
    info!(
        "Scanning {} with threshold {threshold}%{}",
        args.dir.display(),
        if args.dry_run { " (dry run)" } else { "" }
    );

    let scanner = Scanner::new(
        ExtremesClassifier::new(ExtremesConfig { threshold }),
        ScanOptions {
            dry_run: args.dry_run,
        },
    );

    let show_bar = args.progress && !args.quiet;
    let reporter = ConsoleReporter::stdout(args.quiet, show_bar);

    let summary = scanner
        .run(&source, &FsMarker::new(), &reporter)
        .with_context(|| format!("Scan of {} failed", args.dir.display()))?;

    debug!("Scan summary: {summary:?}");
    Ok(summary)
}
