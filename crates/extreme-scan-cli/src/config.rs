//! Configuration file support for extreme-scan.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/extreme-scan/config.toml` (lowest priority)
//! - Project-local: `.extreme-scan.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

/// File name of the project-local config.
const PROJECT_CONFIG_NAME: &str = ".extreme-scan.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scan behaviour.
    pub scan: ScanConfig,
    /// Console output settings.
    pub output: OutputConfig,
}

/// Scan behaviour configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Flag threshold in percent (0.0-100.0).
    pub threshold: Option<f64>,
    /// Report without renaming.
    pub dry_run: Option<bool>,
}

/// Console output configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Show progress bar.
    pub progress: Option<bool>,
    /// Suppress per-file output.
    pub quiet: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Missing files are silently ignored. Invalid values are reported as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
            config.scan.threshold = None;
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.scan.threshold {
            if !(0.0..=100.0).contains(&t) {
                return Err(format!("scan.threshold must be 0.0-100.0, got {t}"));
            }
        }
        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.scan.threshold = other.scan.threshold.or(self.scan.threshold);
        self.scan.dry_run = other.scan.dry_run.or(self.scan.dry_run);

        self.output.progress = other.output.progress.or(self.output.progress);
        self.output.quiet = other.output.quiet.or(self.output.quiet);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("extreme-scan").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for the project config in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(PROJECT_CONFIG_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.scan.threshold.is_none());
        assert!(config.scan.dry_run.is_none());
        assert!(config.output.quiet.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(config.scan.threshold.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[scan]
threshold = 7.5
dry_run = true

[output]
progress = true
quiet = false
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.scan.threshold, Some(7.5));
        assert_eq!(config.scan.dry_run, Some(true));
        assert_eq!(config.output.progress, Some(true));
        assert_eq!(config.output.quiet, Some(false));
    }

    #[test]
    fn test_merge_override_wins() {
        let mut base: AppConfig = toml::from_str(
            r"
[scan]
threshold = 5.0
dry_run = true
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[scan]
threshold = 10.0

[output]
quiet = true
",
        )
        .expect("parse override");

        base.merge(override_config);

        assert_eq!(base.scan.threshold, Some(10.0));
        assert_eq!(base.scan.dry_run, Some(true));
        assert_eq!(base.output.quiet, Some(true));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str("[scan]\nthreshold = 3.0\n").expect("parse base");
        base.merge(AppConfig::default());
        assert_eq!(base.scan.threshold, Some(3.0));
    }

    #[test]
    fn test_invalid_field_type_handled() {
        // String instead of float
        let result: Result<AppConfig, _> = toml::from_str("[scan]\nthreshold = \"high\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_integer_threshold_accepted() {
        let config: AppConfig = toml::from_str("[scan]\nthreshold = 5\n").expect("parse integer");
        assert_eq!(config.scan.threshold, Some(5.0));
    }

    #[test]
    fn test_invalid_toml_syntax_handled() {
        let result: Result<AppConfig, _> = toml::from_str("[scan\nthreshold = 5.0\n");
        assert!(result.is_err(), "invalid TOML should return error");
    }

    #[test]
    fn test_validate_threshold_out_of_range() {
        let mut config = AppConfig::default();
        config.scan.threshold = Some(150.0);

        let result = config.validate();
        assert!(result.unwrap_err().contains("scan.threshold"));
    }

    #[test]
    fn test_validate_empty_config_passes() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_find_config_in_parents() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(PROJECT_CONFIG_NAME), "").unwrap();

        let found = find_config_in_parents(&nested).unwrap();
        assert_eq!(found, root.path().join(PROJECT_CONFIG_NAME));
    }

    #[test]
    fn test_load_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(load_file(&path).is_none());
    }
}
