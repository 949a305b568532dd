// src/pipeline/evaluator.rs
//
// Evaluation orchestration. One call per track per cycle:
//
//   CycleInputs → FrameContext (derived quantities) → Battery → Report
//
// Tracks are independent, so a batch is spread across rayon workers with
// only the parameter bundle shared read-only.

use super::frame_context::{CycleInputs, FrameContext};
use super::metrics::BatteryMetrics;
use crate::battery::Battery;
use crate::report::Report;
use crate::types::Parameters;
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct RuleEvaluator {
    battery: Battery,
    params: Parameters,
    metrics: BatteryMetrics,
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new(Parameters::default(), Battery::standard())
    }
}

impl RuleEvaluator {
    pub fn new(params: Parameters, battery: Battery) -> Self {
        info!(
            "rule evaluator ready: {} checks | micro-doppler={} | dx/dy relevance={}/{} m",
            battery.len(),
            params.micro_doppler_check_enabled,
            params.innovation_dx_relevance,
            params.innovation_dy_relevance,
        );
        Self {
            battery,
            params,
            metrics: BatteryMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &BatteryMetrics {
        &self.metrics
    }

    pub fn evaluate(&self, inputs: &CycleInputs) -> Report {
        let ctx = FrameContext::new(inputs, &self.params);
        let report = self.battery.evaluate(&ctx);
        self.metrics.record(&report);

        let summary = report.summary();
        debug!(
            "track x={:.1} y={:.1} age={} → {}/{} checks fired",
            inputs.track.state.x,
            inputs.track.state.y,
            inputs.track.num_cycles_existing,
            summary.fired,
            summary.total
        );
        report
    }

    /// Evaluates every track in parallel. Reports come back in input order.
    pub fn evaluate_batch(&self, batch: &[CycleInputs]) -> Vec<Report> {
        let reports: Vec<Report> = batch.par_iter().map(|inputs| self.evaluate(inputs)).collect();
        info!("batch of {} tracks evaluated", reports.len());
        reports
    }
}
