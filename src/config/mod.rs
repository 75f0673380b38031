use crate::errors::{AppError, AppResult};
use crate::models::shift::WorkDuration;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Ceiling used when the config file does not set one.
pub const DEFAULT_CEILING: &str = "23:45";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_work_hours")]
    pub daily_work_hours: u32,
    #[serde(default = "default_work_minutes")]
    pub daily_work_minutes: u32,
    #[serde(default = "default_ceiling")]
    pub ceiling: String,
    #[serde(default = "default_late_exit_hour")]
    pub late_exit_hour: u32,
    #[serde(default = "default_csv_file_name")]
    pub csv_file_name: String,
}

fn default_work_hours() -> u32 {
    7
}
fn default_work_minutes() -> u32 {
    36
}
fn default_ceiling() -> String {
    DEFAULT_CEILING.to_string()
}
fn default_late_exit_hour() -> u32 {
    18
}
fn default_csv_file_name() -> String {
    "slot_straordinario.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_work_hours: default_work_hours(),
            daily_work_minutes: default_work_minutes(),
            ceiling: default_ceiling(),
            late_exit_hour: default_late_exit_hour(),
            csv_file_name: default_csv_file_name(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rexittime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rexittime.conf")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file means defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range checks on the configured values.
    pub fn validate(&self) -> AppResult<()> {
        self.work_duration()
            .map_err(|_| {
                AppError::Config(format!(
                    "daily work must be 0-24 hours and 0-59 minutes, got {}h {}m",
                    self.daily_work_hours, self.daily_work_minutes
                ))
            })?;

        self.ceiling_time()
            .map_err(|_| AppError::Config(format!("invalid ceiling '{}'", self.ceiling)))?;

        if self.late_exit_hour > 23 {
            return Err(AppError::Config(format!(
                "late_exit_hour must be 0-23, got {}",
                self.late_exit_hour
            )));
        }

        Ok(())
    }

    pub fn work_duration(&self) -> AppResult<WorkDuration> {
        WorkDuration::new(self.daily_work_hours, self.daily_work_minutes)
    }

    pub fn ceiling_time(&self) -> AppResult<TimeOfDay> {
        parse_time(&self.ceiling)
    }

    /// Write the default configuration file (skipped in test mode).
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Self::default();

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
