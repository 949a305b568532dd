// src/pipeline/mod.rs

pub mod evaluator;
pub mod frame_context;
pub mod metrics;

pub use evaluator::RuleEvaluator;
pub use frame_context::{CycleInputs, FrameContext};
pub use metrics::{BatteryMetrics, MetricsSummary};
