// src/lib.rs

pub mod analysis;
pub mod battery;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod presets;
pub mod report;
pub mod scenarios;
pub mod snapshot;
pub mod types;

pub use battery::{Battery, CheckId};
pub use config::Config;
pub use pipeline::{CycleInputs, RuleEvaluator};
pub use report::{Report, TextReport, TrackHeader};
pub use snapshot::Snapshot;
