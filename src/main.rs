// src/main.rs

use anyhow::Result;
use dep_check_emulator::config::Config;
use dep_check_emulator::pipeline::{CycleInputs, RuleEvaluator};
use dep_check_emulator::presets;
use dep_check_emulator::report::{Report, TrackHeader};
use dep_check_emulator::scenarios::ScenarioStore;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config_path = std::env::var("DEP_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config_found = Path::new(&config_path).exists();
    let config = if config_found {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🚗 DEP check emulator starting");
    if config_found {
        info!("✓ Configuration loaded from {}", config_path);
    } else {
        warn!("{} not found, using reference parameters", config_path);
    }

    let battery = config.battery()?;
    if battery.len() < 15 {
        info!("Disabled checks: {}", config.checks.disabled.join(", "));
    }
    let evaluator = RuleEvaluator::new(config.parameters.clone(), battery);

    let store = ScenarioStore::new(config.scenarios.clone());
    let mut scenarios = store.load_all();
    if scenarios.is_empty() {
        info!(
            "No scenarios in {}, evaluating built-in presets",
            config.scenarios.input_dir
        );
        scenarios = presets::all();
    }

    let inputs: Vec<CycleInputs> = scenarios.iter().map(|s| s.inputs.clone()).collect();
    let reports: Vec<Report> = if config.batch.parallel {
        evaluator.evaluate_batch(&inputs)
    } else {
        inputs.iter().map(|i| evaluator.evaluate(i)).collect()
    };

    for (scenario, report) in scenarios.iter().zip(&reports) {
        let header = TrackHeader::from_inputs(&scenario.name, &scenario.inputs);
        println!("{}", report.text(&header));

        let summary = report.summary();
        let affected: Vec<&str> = report
            .affected_functions()
            .iter()
            .map(|f| f.as_str())
            .collect();
        if affected.is_empty() {
            info!(
                "{}: {}/{} checks fired, no function disqualified",
                scenario.name, summary.fired, summary.total
            );
        } else {
            warn!(
                "{}: {}/{} checks fired, disqualified for {}",
                scenario.name,
                summary.fired,
                summary.total,
                affected.join(", ")
            );
        }

        if config.scenarios.save_reports {
            match store.save_report(scenario, report) {
                Ok(path) => info!("  Report written to {}", path.display()),
                Err(e) => warn!("  Failed to write report for {}: {:#}", scenario.name, e),
            }
        }
    }

    let metrics = evaluator.metrics().summary();
    info!("\n========================================");
    info!("  Tracks evaluated: {}", metrics.tracks_evaluated);
    info!(
        "  Checks fired: {} of {} evaluated",
        metrics.checks_fired, metrics.checks_evaluated
    );
    for (check, count) in &metrics.fires_per_check {
        info!("    {}: {}", check, count);
    }
    info!("  Throughput: {:.1} tracks/s", metrics.tracks_per_sec);
    info!("========================================");

    Ok(())
}
