use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Static bank-transfer details shown on the form. Not part of the state
/// machine; every field can be overridden from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInstructions {
    pub headline: String,
    pub lead: String,
    pub notice: String,
    pub account_number: String,
    pub bank_name: String,
    pub account_name: String,
    pub amount: String,
}

impl Default for PaymentInstructions {
    fn default() -> Self {
        Self {
            headline: "Make Payment to Complete Activation".to_string(),
            lead: "Please make a payment of 20,000 naira to complete your activation".to_string(),
            notice: "A settlement fee of NGN 20,000.00 is required to authorize withdrawals. \
                     This fee will be credited back with your withdrawal once authorized."
                .to_string(),
            account_number: "1002830115".to_string(),
            bank_name: "Sparkle".to_string(),
            account_name: "Joel Samuel".to_string(),
            amount: "20,000 naira".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub instructions: PaymentInstructions,
}

impl Config {
    /// Loads `explicit` if given (it must exist), otherwise the default
    /// location if a file is there, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "payconfirm")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.yaml"))
}

pub fn default_log_path() -> PathBuf {
    project_dirs()
        .map(|d| d.data_local_dir().join("payconfirm.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("payconfirm.log"))
}
