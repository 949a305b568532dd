// src/report.rs
//
// Report aggregation: ordered check results, fired / not-fired partitions,
// summary counts and the legacy text rendering.

use crate::battery::{AffectedFunction, CheckId, Consequence};
use crate::pipeline::CycleInputs;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub check: CheckId,
    pub fired: bool,
    pub description: String,
    pub consequence: Consequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub fired: usize,
    pub not_fired: usize,
    pub total: usize,
}

/// Outcome of one battery run, in battery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn get(&self, check: CheckId) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.check == check)
    }

    pub fn is_fired(&self, check: CheckId) -> bool {
        self.get(check).map(|r| r.fired).unwrap_or(false)
    }

    pub fn fired(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.fired)
    }

    pub fn not_fired(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.fired)
    }

    pub fn summary(&self) -> ReportSummary {
        let fired = self.fired().count();
        ReportSummary {
            fired,
            not_fired: self.results.len() - fired,
            total: self.results.len(),
        }
    }

    pub fn fire_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.summary().fired as f64 / self.results.len() as f64
    }

    /// Union of the functions disqualified by fired checks.
    pub fn affected_functions(&self) -> BTreeSet<AffectedFunction> {
        self.fired()
            .flat_map(|r| r.consequence.affected_functions().iter().copied())
            .collect()
    }

    /// Legacy text layout, as a `Display` value.
    pub fn text<'a>(&'a self, header: &'a TrackHeader) -> TextReport<'a> {
        TextReport {
            report: self,
            header,
        }
    }

    pub fn render_text(&self, header: &TrackHeader) -> String {
        self.text(header).to_string()
    }
}

pub struct TextReport<'a> {
    report: &'a Report,
    header: &'a TrackHeader,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.header;
        writeln!(out, "=== AUTOMOTIVE PERCEPTION FUNCTION EVALUATION RESULTS ({}) ===", h.source)?;
        writeln!(out)?;
        writeln!(out, "Object Type: {}", if h.is_vru { "VRU" } else { "Non-VRU" })?;
        writeln!(out, "Position: ({:.2}, {:.2}) m", h.x, h.y)?;
        writeln!(out, "Velocity: ({:.2}, {:.2}) m/s", h.vx, h.vy)?;
        writeln!(out, "Abs Vel Over Ground: ({:.2}, {:.2}) m/s", h.ground_vx, h.ground_vy)?;
        writeln!(out, "RCS: {:.2} dBm²", h.rcs)?;
        writeln!(out, "Age: {} cycles", h.age)?;
        writeln!(out)?;

        let summary = self.report.summary();
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out, "ACTIVE FUNCTIONS ({}):", summary.fired)?;
        writeln!(out, "{rule}")?;
        for r in self.report.fired() {
            writeln!(out, "✓ {} - {}", r.check, r.description)?;
        }

        writeln!(out)?;
        writeln!(out, "INACTIVE FUNCTIONS ({}):", summary.not_fired)?;
        writeln!(out, "{rule}")?;
        for r in self.report.not_fired() {
            writeln!(out, "✗ {} - {}", r.check, r.description)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "SUMMARY: {} out of {} functions would execute their main logic.",
            summary.fired, summary.total
        )
    }
}

/// Object fields echoed at the top of the text report.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackHeader {
    pub source: String,
    pub is_vru: bool,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub ground_vx: f64,
    pub ground_vy: f64,
    pub rcs: f64,
    pub age: u32,
}

impl TrackHeader {
    pub fn from_inputs(source: impl Into<String>, inputs: &CycleInputs) -> Self {
        let t = &inputs.track;
        Self {
            source: source.into(),
            is_vru: t.is_vru,
            x: t.state.x,
            y: t.state.y,
            vx: t.state.vx,
            vy: t.state.vy,
            ground_vx: inputs.ground.vx,
            ground_vy: inputs.ground.vy,
            rcs: t.rcs,
            age: t.num_cycles_existing,
        }
    }
}
