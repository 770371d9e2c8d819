//! CLI command definitions and handlers.

pub mod scan;

use clap::Parser;

/// Extreme Scan - flag and mark images with too many near-black or near-white pixels
#[derive(Parser)]
#[command(name = "extreme-scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scan arguments (directory, threshold, flags).
    #[command(flatten)]
    pub scan: scan::ScanArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The scan ran to completion, whatever it found.
    Success,
    /// The scan could not start.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::SUCCESS,
            ExitCode::Error => Self::FAILURE,
        }
    }
}
