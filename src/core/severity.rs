//! Severity levels for log records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Ok = 0,
    Debug = 1,
    Error = 2,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Ok => "Ok",
            Severity::Debug => "Debug",
            Severity::Error => "Error",
        }
    }

    /// Console color for this severity
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Ok => Green,
            Severity::Debug => Yellow,
            Severity::Error => Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(Severity::Ok),
            "debug" => Ok(Severity::Debug),
            "error" => Ok(Severity::Error),
            _ => Err(LoggerError::severity(s)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        match value {
            0 => Ok(Severity::Ok),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Error),
            _ => Err(LoggerError::severity(value.to_string())),
        }
    }
}
