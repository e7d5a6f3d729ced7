//! Settings file for `wallet-inspect`.
//!
//! Settings are read from `--config` when given, otherwise from the
//! platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/io.wallet-inspect.wallet-inspect/
//! - Windows: %APPDATA%/wallet-inspect/config/
//! - Linux: ~/.config/wallet-inspect/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wallet_selectors::Environment;

const APP_QUALIFIER: &str = "io";
const APP_ORG: &str = "wallet-inspect";
const APP_NAME: &str = "wallet-inspect";
const CONFIG_FILENAME: &str = "settings.toml";

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Contents of `settings.toml`.
///
/// ```toml
/// [environment]
/// supports_webhid = true
/// in_test = false
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Host capabilities the accessors cannot read from the snapshot.
    pub environment: Environment,
    pub output: OutputSettings,
}

/// Default settings file location.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `explicit`, or from [`settings_path`] when `None`.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be parsed
/// - The platform-specific directory cannot be determined
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                warn!("could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };
    load_settings_from(&path)
}

fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file found, using defaults");
            Settings::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings file, using defaults");
            Settings::default()
        }
    }
}

fn parse_settings(content: &str, path: &Path) -> Settings {
    match toml::from_str(content) {
        Ok(settings) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse settings file, using defaults");
            Settings::default()
        }
    }
}
