use crate::errors::{AppError, AppResult};
use crate::utils::time::normalize_hhmm;
use serde::{Deserialize, Serialize};

/// User preferences stored under `office_settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_work_hours")]
    pub default_work_hours: f64,
    #[serde(default = "default_exit_calculator_time")]
    pub exit_calculator_time: String, // "HH:MM"
}

fn default_work_hours() -> f64 {
    6.0
}
fn default_exit_calculator_time() -> String {
    "18:00".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_work_hours: default_work_hours(),
            exit_calculator_time: default_exit_calculator_time(),
        }
    }
}

impl AppSettings {
    /// Copy with new work hours; accepts 0 < hours <= 24.
    pub fn with_work_hours(&self, hours: f64) -> AppResult<Self> {
        if !hours.is_finite() || hours <= 0.0 || hours > 24.0 {
            return Err(AppError::InvalidWorkHours(hours));
        }
        Ok(Self {
            default_work_hours: hours,
            ..self.clone()
        })
    }

    pub fn with_exit_time(&self, time: &str) -> AppResult<Self> {
        Ok(Self {
            exit_calculator_time: normalize_hhmm(time)?,
            ..self.clone()
        })
    }
}
