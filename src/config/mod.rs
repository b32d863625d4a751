//! Configuration management module.
//!
//! This module handles loading and saving the banner preferences file,
//! including the display policy, theme, screen-reader mode and terminal
//! background. It also acts as the preference store the banner writes its
//! "show once" state back to.

mod error;

pub use error::ConfigError;

use crate::banner::preference::BANNER_KEY;
use crate::banner::{BannerConfig, PreferenceStore};
use crate::error::AppError;
use crate::ui::TerminalBackground;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/condensed-banner";

/// How the terminal background is determined.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSetting {
    #[default]
    Auto,
    Dark,
    Light,
}

impl BackgroundSetting {
    /// Resolve to a concrete background, inspecting the environment for
    /// `auto`.
    ///
    pub fn resolve(&self) -> TerminalBackground {
        match self {
            BackgroundSetting::Auto => TerminalBackground::detect(),
            BackgroundSetting::Dark => TerminalBackground::Dark,
            BackgroundSetting::Light => TerminalBackground::Light,
        }
    }
}

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub banner: Option<BannerConfig>,
    pub theme_name: String,
    pub screen_reader: bool,
    pub background: BackgroundSetting,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct FileSpec {
    #[serde(default = "default_banner")]
    pub banner: Option<BannerConfig>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub screen_reader: bool,
    #[serde(default)]
    pub background: BackgroundSetting,
}

impl Default for FileSpec {
    fn default() -> Self {
        FileSpec {
            banner: default_banner(),
            theme_name: default_theme_name(),
            screen_reader: false,
            background: BackgroundSetting::default(),
        }
    }
}

fn default_banner() -> Option<BannerConfig> {
    Some(BannerConfig::Once)
}

fn default_theme_name() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        let defaults = FileSpec::default();
        Config {
            banner: defaults.banner,
            theme_name: defaults.theme_name,
            screen_reader: defaults.screen_reader,
            background: defaults.background,
            file_path: None,
        }
    }

    /// Load an existing configuration from the custom directory if provided,
    /// or from the default directory. A missing file leaves the defaults in
    /// place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));

        if let Some(data) = Config::read_file(&file_path)? {
            self.banner = data.banner;
            self.theme_name = data.theme_name;
            self.screen_reader = data.screen_reader;
            self.background = data.background;
        } else {
            debug!("No configuration at {}; using defaults.", file_path.display());
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Return the path of the configuration file, once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Read and parse the file at `file_path`, returning `None` if it does
    /// not exist.
    ///
    fn read_file(file_path: &Path) -> Result<Option<FileSpec>, ConfigError> {
        if !file_path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        Ok(Some(data))
    }

    /// Serialize the data and write it to `file_path`, creating the parent
    /// directory if it doesn't exist.
    ///
    fn write_file(file_path: &Path, data: &FileSpec) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}

impl PreferenceStore for Config {
    /// Re-read the file so that edits made since start-up survive, update the
    /// single key and write it back.
    ///
    fn write_key(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let mut data = Config::read_file(file_path)?.unwrap_or_default();
        match key {
            BANNER_KEY => data.banner = Some(value.parse()?),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Config::write_file(file_path, &data)
    }
}
