// src/scenarios.rs
//
// Scenario discovery on disk and per-scenario JSON report output.

use crate::config::ScenarioConfig;
use crate::pipeline::CycleInputs;
use crate::report::{Report, ReportSummary};
use crate::snapshot::{DocumentFormat, Snapshot};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// One named set of cycle inputs, from a file or a built-in preset.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub inputs: CycleInputs,
}

/// Written next to each evaluated scenario when `save_reports` is on.
#[derive(Debug, Serialize)]
pub struct ScenarioReport<'a> {
    pub scenario: &'a str,
    pub summary: ReportSummary,
    pub fire_rate: f64,
    pub affected_functions: Vec<&'static str>,
    pub report: &'a Report,
}

pub struct ScenarioStore {
    config: ScenarioConfig,
}

impl ScenarioStore {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    /// Snapshot documents under `input_dir`, sorted by path. A missing
    /// directory yields an empty list.
    pub fn find_scenario_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.config.input_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| DocumentFormat::from_path(p).is_some())
            .collect();
        files.sort();

        info!("Found {} scenario file(s) in {}", files.len(), self.config.input_dir);
        files
    }

    /// Loads every discoverable document. Invalid ones are logged and skipped.
    pub fn load_all(&self) -> Vec<Scenario> {
        self.find_scenario_files()
            .into_iter()
            .filter_map(|path| match Snapshot::load(&path) {
                Ok(snapshot) => Some(Scenario {
                    name: scenario_name(&path),
                    inputs: snapshot.into_inputs(),
                }),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .collect()
    }

    pub fn save_report(&self, scenario: &Scenario, report: &Report) -> Result<PathBuf> {
        let dir = Path::new(&self.config.output_dir);
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let doc = ScenarioReport {
            scenario: &scenario.name,
            summary: report.summary(),
            fire_rate: report.fire_rate(),
            affected_functions: report
                .affected_functions()
                .iter()
                .map(|f| f.as_str())
                .collect(),
            report,
        };

        let path = dir.join(format!("{}_report.json", sanitize(&scenario.name)));
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

fn scenario_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
