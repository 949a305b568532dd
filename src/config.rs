// src/config.rs
//
// Runtime configuration loaded from config.yaml. Every section is optional
// and falls back to the reference defaults.

use crate::battery::{Battery, CheckId};
use crate::types::Parameters;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parameters: Parameters,
    pub scenarios: ScenarioConfig,
    pub checks: ChecksConfig,
    pub batch: BatchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub save_reports: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            input_dir: "scenarios".to_string(),
            output_dir: "reports".to_string(),
            save_reports: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Check names removed from the battery, e.g. `MicroDopplerCheck`.
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "dep_check_emulator=info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        self.disabled_checks()?;
        Ok(())
    }

    pub fn disabled_checks(&self) -> Result<Vec<CheckId>> {
        self.checks
            .disabled
            .iter()
            .map(|name| name.parse::<CheckId>().map_err(anyhow::Error::msg))
            .collect()
    }

    pub fn battery(&self) -> Result<Battery> {
        Ok(Battery::without(&self.disabled_checks()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_takes_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.parameters, Parameters::default());
        assert_eq!(config.scenarios.input_dir, "scenarios");
        assert!(config.batch.parallel);
        assert_eq!(config.battery().unwrap().len(), 15);
    }

    #[test]
    fn test_partial_parameters_and_disabled_checks() {
        let yaml = r#"
parameters:
  implausibleVyLa: 6.5
  elevation:
    dxLimits: [0.0, 80.0]
checks:
  disabled: [MicroDopplerCheck, RadarOnlyNLD]
batch:
  parallel: false
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.parameters.implausible_vy_la, 6.5);
        assert_eq!(config.parameters.elevation.dx_limits, [0.0, 80.0]);
        assert_eq!(config.parameters.elevation.dz_thresholds, [2.0, 3.0]);
        assert_eq!(config.parameters.min_vru_micro_doppler_cycles, 1);
        assert!(!config.batch.parallel);

        let battery = config.battery().unwrap();
        assert_eq!(battery.len(), 13);
    }

    #[test]
    fn test_unknown_check_name_rejected() {
        let err = Config::from_yaml("checks:\n  disabled: [applyMagicCheck]\n").unwrap_err();
        assert!(err.to_string().contains("applyMagicCheck"), "got: {err}");
    }

    #[test]
    fn test_degenerate_elevation_table_rejected() {
        let yaml = "parameters:\n  elevation:\n    dxLimits: [40.0, 40.0]\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("config.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
