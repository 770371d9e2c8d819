//! Console progress reporter.
//!
//! Prints the human-readable scan report to stdout. With a progress bar the
//! per-file lines are replaced by the bar, and only flagged or failed files
//! are printed above it.

use std::io::{self, Write};
use std::sync::Mutex;

use extreme_scan_core::{
    FileOutcome, MarkOutcome, PixelClassification, ProgressEvent, ProgressSink, ScanSummary,
};
use indicatif::{ProgressBar, ProgressStyle};
use time::macros::format_description;
use tracing::debug;

/// Console adapter for scan progress.
pub struct ConsoleReporter {
    writer: Mutex<Box<dyn Write + Send>>,
    bar: Option<ProgressBar>,
    quiet: bool,
}

impl ConsoleReporter {
    /// Creates a reporter writing to stdout.
    ///
    /// # Arguments
    ///
    /// * `quiet` - If true, suppress per-file output
    /// * `show_bar` - If true, show a progress bar instead of per-file lines
    #[must_use]
    pub fn stdout(quiet: bool, show_bar: bool) -> Self {
        Self::new(Box::new(io::stdout()), quiet, show_bar)
    }

    /// Creates a reporter writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, quiet: bool, show_bar: bool) -> Self {
        let bar = (show_bar && !quiet).then(|| {
            let bar = ProgressBar::new(0);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                bar.set_style(style.progress_chars("#>-"));
            }
            bar
        });

        Self {
            writer: Mutex::new(writer),
            bar,
            quiet,
        }
    }

    /// Writes text without a trailing newline, keeping it clear of the bar.
    fn emit(&self, text: &str) {
        let write = || {
            let mut writer = self
                .writer
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Err(e) = writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
                debug!("Failed to write report: {e}");
            }
        };

        match &self.bar {
            Some(bar) => bar.suspend(write),
            None => write(),
        }
    }

    fn on_file_finished(&self, name: &str, outcome: &FileOutcome) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            match outcome {
                FileOutcome::Clean { .. } => {}
                FileOutcome::Flagged {
                    classification,
                    mark,
                } => self.emit(&format!("{name}\n{}", flagged_lines(classification, mark))),
                FileOutcome::Failed { error } => {
                    self.emit(&format!("Error processing {name}: {error}\n"));
                }
            }
            return;
        }

        match outcome {
            FileOutcome::Clean { .. } => self.emit(" - OK\n"),
            FileOutcome::Flagged {
                classification,
                mark,
            } => self.emit(&format!("\n{}", flagged_lines(classification, mark))),
            FileOutcome::Failed { error } => {
                self.emit(&format!("\nError processing {name}: {error}\n"));
            }
        }
    }
}

impl ProgressSink for ConsoleReporter {
    fn on_event(&self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::Started { source } => {
                self.emit(&format!(
                    "\nStarting scan at {}\nScanning folder: {source}\n\n",
                    clock_time()
                ));
            }
            ProgressEvent::Listed { total } => {
                if let Some(bar) = &self.bar {
                    bar.set_length(total as u64);
                }
                self.emit(&format!("Found {total} PNG files to process\n\n"));
            }
            ProgressEvent::FileStarted { name, index, total } => {
                if self.quiet {
                    return;
                }
                match &self.bar {
                    Some(bar) => bar.set_message(name),
                    None => self.emit(&format!("Processing {index}/{total}: {name}")),
                }
            }
            ProgressEvent::FileFinished { name, outcome } => {
                if !self.quiet {
                    self.on_file_finished(&name, outcome);
                }
            }
            ProgressEvent::Finished { summary } => {
                if let Some(bar) = &self.bar {
                    bar.finish_and_clear();
                }
                self.emit(&summary_lines(&summary, &clock_time()));
            }
        }
    }
}

/// Detail lines for a flagged file, each indented and newline-terminated.
fn flagged_lines(classification: &PixelClassification, mark: &MarkOutcome) -> String {
    let mut lines = format!(
        "  Near-black: {:.1}%\n  Pure black: {:.1}%\n  Near-white: {:.1}%\n  Pure white: {:.1}%\n",
        classification.near_black_percentage,
        classification.pure_black_percentage,
        classification.near_white_percentage,
        classification.pure_white_percentage,
    );

    match mark {
        MarkOutcome::Renamed { to } => {
            let new_name = to.file_name().unwrap_or(to.as_os_str()).to_string_lossy();
            lines.push_str(&format!("  Renamed to {new_name}\n"));
        }
        MarkOutcome::Skipped { would_be } => {
            let new_name = would_be
                .file_name()
                .unwrap_or(would_be.as_os_str())
                .to_string_lossy();
            lines.push_str(&format!("  Would rename to {new_name}\n"));
        }
        MarkOutcome::Failed { error } if error.is_permission_denied() => {
            lines.push_str("  Permission denied when renaming\n");
        }
        MarkOutcome::Failed { error } => {
            lines.push_str(&format!("  Rename failed: {error}\n"));
        }
        MarkOutcome::AlreadyMarked => {}
    }

    lines
}

/// Closing report lines.
fn summary_lines(summary: &ScanSummary, finished_at: &str) -> String {
    let mut lines = format!(
        "\nScan completed at {finished_at}\nTotal files: {}\nFiles with issues: {}\n",
        summary.total,
        summary.problem_files()
    );
    if summary.rename_failures > 0 {
        lines.push_str(&format!("Rename failures: {}\n", summary.rename_failures));
    }
    lines
}

/// Current wall-clock time as `HH:MM:SS`, local if the offset is known, else UTC.
fn clock_time() -> String {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|e| {
        debug!("Local offset unavailable, using UTC: {e}");
        time::OffsetDateTime::now_utc()
    });
    match now.format(format_description!("[hour]:[minute]:[second]")) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("00:00:00")
        }
    }
}
