//! Runtime settings: defaults, then a TOML file, then `APP__*` environment
//! overrides. Front ends apply their command-line flags last.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{error::SettingsError, list_screen::LazyListWindow, DEFAULT_USER_COUNT};

pub const SETTINGS_FILE_NAME: &str = "demo_app.toml";
pub const APP_DIR_NAME: &str = "user-directory-demo";

pub const ENV_USER_COUNT: &str = "APP__USER_COUNT";
pub const ENV_SEED: &str = "APP__SEED";
pub const ENV_ROW_HEIGHT: &str = "APP__ROW_HEIGHT";
pub const ENV_OVERSCAN_ROWS: &str = "APP__OVERSCAN_ROWS";
pub const ENV_ASSET_DIR: &str = "APP__ASSET_DIR";
pub const ENV_LOG_FILTER: &str = "APP__LOG_FILTER";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user_count: usize,
    /// Fixed generator seed; random names on every launch when unset.
    pub seed: Option<u64>,
    pub row_height: f32,
    pub overscan_rows: usize,
    /// Directory holding image assets such as `android_circle.png`.
    pub asset_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            seed: None,
            row_height: 64.0,
            overscan_rows: 2,
            asset_dir: None,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `APP__*` overrides found through `lookup`. Blank values are
    /// ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(v) = read(ENV_USER_COUNT) {
            self.user_count = parse_env(ENV_USER_COUNT, &v)?;
        }
        if let Some(v) = read(ENV_SEED) {
            self.seed = Some(parse_env(ENV_SEED, &v)?);
        }
        if let Some(v) = read(ENV_ROW_HEIGHT) {
            self.row_height = parse_env(ENV_ROW_HEIGHT, &v)?;
        }
        if let Some(v) = read(ENV_OVERSCAN_ROWS) {
            self.overscan_rows = parse_env(ENV_OVERSCAN_ROWS, &v)?;
        }
        if let Some(v) = read(ENV_ASSET_DIR) {
            self.asset_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = read(ENV_LOG_FILTER) {
            self.log_filter = v;
        }
        Ok(())
    }

    pub fn list_window(&self) -> LazyListWindow {
        LazyListWindow::new(self.row_height, self.overscan_rows)
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: &str) -> Result<T, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidEnv {
            key,
            value: value.to_string(),
        })
}

/// Candidate settings files, most specific first.
pub fn settings_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME));
    }
    paths
}

/// Loads settings from `explicit_path` (which must exist) or from the first
/// existing search path, then applies environment overrides.
pub fn load_settings(explicit_path: Option<&Path>) -> Result<Settings, SettingsError> {
    let file = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => settings_search_paths().into_iter().find(|path| path.is_file()),
    };

    let mut settings = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings file");
            Settings::from_file(&path)?
        }
        None => Settings::default(),
    };

    settings.apply_env_overrides(|key| std::env::var(key).ok())?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
