// src/pipeline/metrics.rs
//
// Battery observability. Counters are shared across batch worker threads
// and exported as a serialisable summary at the end of a run.

use crate::battery::CheckId;
use crate::report::Report;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct BatteryMetrics {
    pub tracks_evaluated: Arc<AtomicU64>,
    pub checks_evaluated: Arc<AtomicU64>,
    pub checks_fired: Arc<AtomicU64>,
    /// Indexed by [`CheckId::index`]
    pub fires_per_check: Arc<[AtomicU64; CheckId::ALL.len()]>,
    pub started_at: Instant,
}

impl Default for BatteryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryMetrics {
    pub fn new() -> Self {
        Self {
            tracks_evaluated: Arc::new(AtomicU64::new(0)),
            checks_evaluated: Arc::new(AtomicU64::new(0)),
            checks_fired: Arc::new(AtomicU64::new(0)),
            fires_per_check: Arc::new(std::array::from_fn(|_| AtomicU64::new(0))),
            started_at: Instant::now(),
        }
    }

    pub fn record(&self, report: &Report) {
        let summary = report.summary();
        self.tracks_evaluated.fetch_add(1, Ordering::Relaxed);
        self.checks_evaluated
            .fetch_add(summary.total as u64, Ordering::Relaxed);
        self.checks_fired
            .fetch_add(summary.fired as u64, Ordering::Relaxed);
        for r in report.fired() {
            self.fires_per_check[r.check.index()].fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn fire_count(&self, check: CheckId) -> u64 {
        self.fires_per_check[check.index()].load(Ordering::Relaxed)
    }

    pub fn tracks_per_sec(&self) -> f64 {
        let tracks = self.tracks_evaluated.load(Ordering::Relaxed);
        let elapsed = self.started_at.elapsed().as_secs_f64();
        if elapsed > 0.01 {
            tracks as f64 / elapsed
        } else {
            0.0
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        let fires_per_check = CheckId::ALL
            .iter()
            .filter_map(|id| {
                let n = self.fire_count(*id);
                (n > 0).then(|| (id.as_str().to_string(), n))
            })
            .collect();

        MetricsSummary {
            tracks_evaluated: self.tracks_evaluated.load(Ordering::Relaxed),
            checks_evaluated: self.checks_evaluated.load(Ordering::Relaxed),
            checks_fired: self.checks_fired.load(Ordering::Relaxed),
            fires_per_check,
            tracks_per_sec: self.tracks_per_sec(),
            elapsed_secs: self.started_at.elapsed().as_secs_f64(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub tracks_evaluated: u64,
    pub checks_evaluated: u64,
    pub checks_fired: u64,
    /// Checks that never fired are omitted.
    pub fires_per_check: BTreeMap<String, u64>,
    pub tracks_per_sec: f64,
    pub elapsed_secs: f64,
}
