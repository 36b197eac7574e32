use crate::domain::appliance::MIN_MANUFACTURE_YEAR;
use crate::domain::ports::{FixedClock, ReferenceClock, SystemClock};
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::first_day_of;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
/// Earliest pinned date for which both records' sentinel values still satisfy their rules.
const MIN_REFERENCE_YEAR: i32 = MIN_MANUFACTURE_YEAR;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Pins "today" for every date rule. Unset means the system date.
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl RecordsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecordError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| RecordError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate_config()?;
        Ok(config)
    }

    pub fn validate_config(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(RecordError::ConfigError {
                message: format!(
                    "Unsupported logging.level '{}'. Valid levels: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if let Some(date) = self.clock.reference_date {
            let earliest = first_day_of(MIN_REFERENCE_YEAR);
            if date < earliest {
                return Err(RecordError::ConfigError {
                    message: format!(
                        "clock.reference_date {} is earlier than {}",
                        date, earliest
                    ),
                });
            }
        }

        Ok(())
    }

    pub fn clock(&self) -> ReferenceClock {
        match self.clock.reference_date {
            Some(date) => ReferenceClock::Fixed(FixedClock(date)),
            None => ReferenceClock::System(SystemClock),
        }
    }
}
