// src/battery/mod.rs
//
// The ordered check battery. Order is the report order; every check reads
// the same frame context, so reordering never changes an outcome.

pub mod checks;
pub mod rule;

pub use rule::{AffectedFunction, CheckId, Consequence, Outcome, Predicate, Rule};

use crate::pipeline::FrameContext;
use crate::report::{CheckResult, Report};
use tracing::debug;

// ============================================================================
// STANDARD TABLE
// ============================================================================

pub static STANDARD_BATTERY: [Rule; 15] = [
    Rule {
        id: CheckId::SuppressedUntilNextVideoUpdate,
        predicate: checks::suppressed_until_next_video_update,
        fired_text: "Object is suppressed until next video update",
        not_fired_text: "Object is not suppressed",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::PostProcessVideoOtc,
        predicate: checks::post_process_video_otc,
        fired_text: "Object is suppressed due to video OTC post processing",
        not_fired_text: "Object is not suppressed due to video OTC",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::MovingTowardsEgoLane,
        predicate: checks::moving_towards_ego_lane,
        fired_text: "Object is moving towards ego lane",
        not_fired_text: "Object is not moving towards ego lane",
        consequence: Consequence::Informational,
    },
    Rule {
        id: CheckId::DepObjProbablyVideoGhost,
        predicate: checks::dep_obj_probably_video_ghost,
        fired_text: "Object is probably a video ghost",
        not_fired_text: "Object is probably not a video ghost",
        consequence: Consequence::Informational,
    },
    Rule {
        id: CheckId::StatLocHighMDopplerOutgoingVr,
        predicate: checks::stat_loc_high_mdoppler_outgoing_vr,
        fired_text: "VRU with stat loc and high micro doppler",
        not_fired_text: "Conditions not met",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::FastWnjMeasuredRatio,
        predicate: checks::fast_wnj_measured_ratio,
        fired_text: "Fast WNJ with insufficient measurement ratio",
        not_fired_text: "Measurement ratio is sufficient",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::NonCrossingObject,
        predicate: checks::non_crossing_object,
        fired_text: "Object appears crossing but is probably not moving",
        not_fired_text: "Object crossing behavior is consistent",
        consequence: Consequence::DisqualifiesVyDependent,
    },
    Rule {
        id: CheckId::MicroDopplerCheck,
        predicate: checks::micro_doppler_check,
        fired_text: "VRU missing expected micro-doppler signatures",
        not_fired_text: "VRU conditions not met for micro-doppler check",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::RadarOnlyRcsAndDrInnovation,
        predicate: checks::radar_only_rcs_and_dr_innovation,
        fired_text: "Radar-only object with high innovation and low RCS",
        not_fired_text: "Conditions not met",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::ElevationCheck,
        predicate: checks::elevation_check,
        fired_text: "Object elevation is inappropriate (too high)",
        not_fired_text: "Object elevation is appropriate",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::InnovationCheck,
        predicate: checks::innovation_check,
        fired_text: "Object has high dx innovation in relevant range",
        not_fired_text: "Innovation is within acceptable limits",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::ImplausibleVyVru,
        predicate: checks::implausible_vy_vru,
        fired_text: "VRU with implausible VY velocity",
        not_fired_text: "VRU VY velocity is plausible",
        consequence: Consequence::DisqualifiesAebAndAcc,
    },
    Rule {
        id: CheckId::ImplausibleVideoTtcForVru,
        predicate: checks::implausible_video_ttc_for_vru,
        fired_text: "VRU with implausible video TTC",
        not_fired_text: "Video TTC is plausible",
        consequence: Consequence::DisqualifiesAeb,
    },
    Rule {
        id: CheckId::RadarOnlyNld,
        predicate: checks::radar_only_nld,
        fired_text: "Radar-only object is NLD candidate",
        not_fired_text: "Radar-only object is not NLD candidate",
        consequence: Consequence::DisqualifiesAebAndAcc,
    },
    Rule {
        id: CheckId::RadarOnlyStationary,
        predicate: checks::radar_only_stationary,
        fired_text: "Radar-only stationary object",
        not_fired_text: "Radar-only object is not stationary",
        consequence: Consequence::DisqualifiesAebAndAcc,
    },
];

// ============================================================================
// BATTERY
// ============================================================================

/// An ordered subset of [`STANDARD_BATTERY`].
#[derive(Debug, Clone)]
pub struct Battery {
    rules: Vec<Rule>,
}

impl Default for Battery {
    fn default() -> Self {
        Self::standard()
    }
}

impl Battery {
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_BATTERY.to_vec(),
        }
    }

    /// Standard battery minus `disabled`, order preserved.
    pub fn without(disabled: &[CheckId]) -> Self {
        let rules = STANDARD_BATTERY
            .iter()
            .filter(|rule| !disabled.contains(&rule.id))
            .copied()
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule once against `ctx`. Each rule lands in exactly one
    /// of the report's two partitions.
    pub fn evaluate(&self, ctx: &FrameContext<'_>) -> Report {
        let results = self
            .rules
            .iter()
            .map(|rule| {
                let (fired, text) = rule.evaluate(ctx);
                debug!(
                    "check {} → {} ({})",
                    rule.id,
                    if fired { "FIRED" } else { "not fired" },
                    text
                );
                CheckResult {
                    check: rule.id,
                    fired,
                    description: text.to_string(),
                    consequence: rule.consequence,
                }
            })
            .collect();

        Report::new(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CycleInputs;
    use crate::types::Parameters;

    #[test]
    fn test_standard_order_matches_check_ids() {
        let ids: Vec<CheckId> = STANDARD_BATTERY.iter().map(|r| r.id).collect();
        assert_eq!(ids, CheckId::ALL.to_vec());
    }

    #[test]
    fn test_every_check_lands_in_exactly_one_partition() {
        let inputs = CycleInputs::default();
        let params = Parameters::default();
        let ctx = FrameContext::new(&inputs, &params);

        let report = Battery::standard().evaluate(&ctx);
        let summary = report.summary();
        assert_eq!(summary.total, 15);
        assert_eq!(summary.fired + summary.not_fired, 15);

        for id in CheckId::ALL {
            let hits = report.results().iter().filter(|r| r.check == id).count();
            assert_eq!(hits, 1, "{id} should appear exactly once");
        }
    }

    #[test]
    fn test_without_drops_named_checks_only() {
        let battery = Battery::without(&[CheckId::MicroDopplerCheck, CheckId::RadarOnlyNld]);
        assert_eq!(battery.len(), 13);
        assert!(battery.rules().iter().all(|r| r.id != CheckId::MicroDopplerCheck));
        assert_eq!(battery.rules()[0].id, CheckId::SuppressedUntilNextVideoUpdate);
        assert_eq!(battery.rules()[12].id, CheckId::RadarOnlyStationary);
    }

    #[test]
    fn test_gated_reason_replaces_not_fired_text() {
        let mut inputs = CycleInputs::default();
        inputs.track.sensor.total_video_updates = 4;
        let params = Parameters::default();
        let ctx = FrameContext::new(&inputs, &params);

        let report = Battery::standard().evaluate(&ctx);
        let nld = report
            .get(CheckId::RadarOnlyNld)
            .expect("NLD result should be present");
        assert!(!nld.fired);
        assert_eq!(nld.description, "Object is not radar-only");

        let elevation = report.get(CheckId::ElevationCheck).expect("elevation result");
        assert_eq!(elevation.description, "Elevation check preconditions not met");
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut inputs = CycleInputs::default();
        inputs.track.is_vru = true;
        inputs.track.state.y = 1.0;
        inputs.track.state.vy = -2.0;
        let params = Parameters::default();
        let ctx = FrameContext::new(&inputs, &params);

        let battery = Battery::standard();
        assert_eq!(battery.evaluate(&ctx), battery.evaluate(&ctx));
    }
}
