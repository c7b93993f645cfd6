use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{currency::LocaleConfig, errors::ScheduleError};

const CONFIG_DIR_NAME: &str = "schedules_core";
const CONFIG_FILE_NAME: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const DEFAULT_DATE_FORMAT: &str = "MM/dd/yyyy";

/// User preferences that shape how the schedules table is derived and shown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Date pattern such as `MM/dd/yyyy` or `yyyy-MM-dd`.
    pub date_format: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub allow_completed: bool,
    pub minimal: bool,
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
            decimal_separator: '.',
            grouping_separator: ',',
            allow_completed: true,
            minimal: false,
            ui_color_enabled: true,
        }
    }
}

impl Config {
    /// Number formatting preferences derived from this config.
    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            language_tag: self.locale.clone(),
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
        }
    }

    /// The configured date pattern, falling back to the default when blank.
    pub fn effective_date_format(&self) -> &str {
        if self.date_format.trim().is_empty() {
            DEFAULT_DATE_FORMAT
        } else {
            &self.date_format
        }
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ScheduleError> {
        let base = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("no configuration directory available".into()))?
            .join(CONFIG_DIR_NAME);
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ScheduleError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE_NAME),
        })
    }

    pub fn load(&self) -> Result<Config, ScheduleError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::info!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ScheduleError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ScheduleError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
