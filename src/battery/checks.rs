// src/battery/checks.rs
//
// Predicates of the post-processing check battery. Each one reads the
// shared frame context and never mutates anything. The measurement ratio
// division is only reached once age > 1.

use super::rule::Outcome;
use crate::pipeline::FrameContext;
use crate::types::FilterType;
use tracing::trace;

// ============================================================================
// CONSTANTS
// ============================================================================

const VERY_LOW_RCS: f64 = -15.0;

// FastWnjMeasuredRatio
const FAST_WNJ_MIN_ABS_VY: f64 = 4.6;
const FAST_WNJ_MAX_AGE: u32 = 255;
const FAST_WNJ_MIN_MEASURED_RATIO: f64 = 0.7;
const FAST_WNJ_MAX_VIDEO_UPDATES: u32 = 5;

// MicroDopplerCheck
const MD_MIN_EXPECTED_VR_COUNT: u32 = 2;
const MD_OLD_OBJECT_AGE: u32 = 12;
const MD_OLD_OBJECT_FC_UPDATES: u32 = 8;
const MD_OLD_OBJECT_MAX_VY: f64 = 3.2;
const MD_YOUNG_OBJECT_MAX_VY: f64 = 99.0;
const MD_CROSSING_MIN_VY: f64 = 0.5;
const MD_CROSSING_MAX_VX: f64 = 4.0;
const MD_STATIONARY_MAX_SPEED: f64 = 0.5;

// RadarOnlyRcsAndDrInnovation
const RADAR_ONLY_MAX_DR_INNOVATION: f64 = 1.2;

// RadarOnlyNLD
const NLD_MIN_AGE: u32 = 3;
const NLD_MATURE_AGE: u32 = 30;
const NLD_CLOSE_MIN_ABS_VY: f64 = 3.0;
const NLD_CLOSE_MAX_X: f64 = 8.0;
const NLD_CLOSE_MAX_ABS_Y: f64 = 4.0;

// ============================================================================
// UPSTREAM FLAGS
// ============================================================================

pub fn suppressed_until_next_video_update(ctx: &FrameContext<'_>) -> Outcome {
    Outcome::from_bool(ctx.track.flags.suppressed_until_next_video_update)
}

pub fn post_process_video_otc(ctx: &FrameContext<'_>) -> Outcome {
    Outcome::from_bool(ctx.track.flags.suppressed_due_to_video_otc)
}

// ============================================================================
// GEOMETRY / MOTION
// ============================================================================

/// Lateral position and (relative or ground) lateral velocity of opposite sign.
pub fn moving_towards_ego_lane(ctx: &FrameContext<'_>) -> Outcome {
    let dy = ctx.track.state.y;
    Outcome::from_bool(dy * ctx.track.state.vy < 0.0 || dy * ctx.ground.vy < 0.0)
}

pub fn dep_obj_probably_video_ghost(ctx: &FrameContext<'_>) -> Outcome {
    Outcome::from_bool(ctx.derived.video_ghost)
}

pub fn stat_loc_high_mdoppler_outgoing_vr(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    Outcome::from_bool(
        t.is_vru
            && ctx.ground.vx < 0.2
            && ctx.ground.vy > 1.0
            && t.state.y.abs() < 0.5
            && t.flags.updated_with_stat_loc_high_mdoppler_outgoing_vr,
    )
}

/// Fast crossing WNJ object measured by radar in too few of its cycles.
pub fn fast_wnj_measured_ratio(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    let age = t.num_cycles_existing;

    if !(t.filter_type == FilterType::Wnj
        && ctx.ground.vy.abs() > FAST_WNJ_MIN_ABS_VY
        && age < FAST_WNJ_MAX_AGE)
    {
        return Outcome::Gated("Not a fast crossing WNJ object");
    }
    if age <= 1 {
        return Outcome::Gated("Object too young");
    }

    let ratio = t.sensor.total_radar_updates as f64 / (age as f64 + 1.0);
    trace!("fast WNJ measured ratio {:.3}", ratio);

    Outcome::from_bool(
        ratio < FAST_WNJ_MIN_MEASURED_RATIO
            && t.sensor.total_video_updates <= FAST_WNJ_MAX_VIDEO_UPDATES,
    )
}

/// Appears to cross, but movement probabilities and radar evidence say
/// the object is standing.
pub fn non_crossing_object(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    let appears_crossing = ctx.ground.vy > 0.5;
    let prob_moving_low = t.prob_currently_moving < 0.1 && t.prob_has_been_moving < 0.1;
    let not_moving_for_radar = t.sensor.front_center_radar_updates > 0
        && t.number_micro_doppler_cycles == 0
        && t.oncoming_location_cycles == 0;

    Outcome::from_bool(appears_crossing && prob_moving_low && not_moving_for_radar)
}

// ============================================================================
// MICRO-DOPPLER
// ============================================================================

/// Upper |vy| bound for the crossing sub-check. Old, well-measured objects
/// get a tight bound; young ones are effectively unbounded.
pub fn crossing_vy_upper_bound(ctx: &FrameContext<'_>) -> f64 {
    let is_old = ctx.track.num_cycles_existing > MD_OLD_OBJECT_AGE
        && ctx.track.sensor.front_center_radar_updates > MD_OLD_OBJECT_FC_UPDATES;
    if is_old {
        MD_OLD_OBJECT_MAX_VY
    } else {
        MD_YOUNG_OBJECT_MAX_VY
    }
}

pub fn crossing_vru_satisfied(ctx: &FrameContext<'_>) -> bool {
    let g = ctx.ground;
    g.vy > MD_CROSSING_MIN_VY
        && g.vy < crossing_vy_upper_bound(ctx)
        && g.vx < MD_CROSSING_MAX_VX
        && ctx.params.micro_doppler_on_crossing_vru
}

pub fn stationary_vru_satisfied(ctx: &FrameContext<'_>) -> bool {
    ctx.ground.vx < MD_STATIONARY_MAX_SPEED
        && ctx.ground.vy < MD_STATIONARY_MAX_SPEED
        && ctx.params.micro_doppler_on_stationary_vru
}

/// VRU seen by the front-center radar, never by a corner radar, and
/// missing the micro-doppler signature its expected VR should produce.
pub fn micro_doppler_check(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    let p = ctx.params;

    let preconditions = p.micro_doppler_check_enabled
        && t.is_vru
        && t.expected_vr_counter >= MD_MIN_EXPECTED_VR_COUNT
        && t.sensor.front_center_radar_updates > 0
        && t.sensor.front_left_corner_updates < 1
        && t.sensor.front_right_corner_updates < 1
        && t.number_micro_doppler_cycles < p.min_vru_micro_doppler_cycles;

    if !preconditions {
        return Outcome::Gated("Micro-doppler check conditions not met");
    }

    Outcome::from_bool(crossing_vru_satisfied(ctx) || stationary_vru_satisfied(ctx))
}

// ============================================================================
// RADAR-ONLY / INNOVATION / ELEVATION
// ============================================================================

pub fn radar_only_rcs_and_dr_innovation(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    let front_center_radar_only = t.sensor.is_radar_only() && t.sensor.front_center_radar_updates > 0;
    Outcome::from_bool(
        front_center_radar_only
            && t.avg_dx_innovation.abs() > RADAR_ONLY_MAX_DR_INNOVATION
            && t.rcs < VERY_LOW_RCS,
    )
}

pub fn elevation_check(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    if !(t.state.x > 0.0 && t.elevation_valid && (ctx.is_stationary_video_confirmed() || t.is_vru)) {
        return Outcome::Gated("Elevation check preconditions not met");
    }
    Outcome::from_bool(t.elevation > ctx.derived.elevation_limit)
}

pub fn innovation_check(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    let relevant = t.state.x.abs() < ctx.params.innovation_dx_relevance
        && t.state.y.abs() < ctx.params.innovation_dy_relevance;
    Outcome::from_bool(relevant && t.avg_dx_innovation.abs() > ctx.derived.innovation_threshold)
}

pub fn implausible_vy_vru(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    Outcome::from_bool(
        t.is_vru
            && ctx.ground.vy > ctx.params.implausible_vy_la
            && t.filter_type == FilterType::La
            && !ctx.derived.ego_turning,
    )
}

/// VRU updated by video this cycle whose inverse TTC was never measured.
pub fn implausible_video_ttc_for_vru(ctx: &FrameContext<'_>) -> Outcome {
    let t = ctx.track;
    Outcome::from_bool(
        t.is_vru && t.sensor.cycles_since_last_video < 1 && t.video_inv_ttc.is_unmeasured(),
    )
}

pub fn is_in_nld_relevant_area(ctx: &FrameContext<'_>) -> bool {
    let s = ctx.track.state;
    (s.y.abs() <= 1.25 && s.x < 120.0) || (s.y.abs() <= 6.0 && s.x < 10.0)
}

pub fn is_measured_sufficiently(ctx: &FrameContext<'_>) -> bool {
    let age = ctx.track.num_cycles_existing;
    ctx.track.sensor.total_radar_updates >= age || age >= NLD_MATURE_AGE
}

pub fn is_close_with_high_lateral_velocity(ctx: &FrameContext<'_>) -> bool {
    let s = ctx.track.state;
    s.vy.abs() > NLD_CLOSE_MIN_ABS_VY && s.x < NLD_CLOSE_MAX_X && s.y.abs() < NLD_CLOSE_MAX_ABS_Y
}

pub fn radar_only_nld(ctx: &FrameContext<'_>) -> Outcome {
    if !ctx.is_radar_only() {
        return Outcome::Gated("Object is not radar-only");
    }

    let nld_candidate = !ctx.derived.ego_driving_straight
        || !is_in_nld_relevant_area(ctx)
        || ctx.track.num_cycles_existing < NLD_MIN_AGE
        || !is_measured_sufficiently(ctx);

    Outcome::from_bool(nld_candidate || is_close_with_high_lateral_velocity(ctx))
}

pub fn radar_only_stationary(ctx: &FrameContext<'_>) -> Outcome {
    if !ctx.is_radar_only() {
        return Outcome::Gated("Object is not radar-only");
    }
    Outcome::from_bool(ctx.ground.vx < 0.3 && ctx.ground.vy < 0.3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CycleInputs;
    use crate::types::{EgoMotion, GroundVelocity, InverseTtc, Parameters};

    fn eval(inputs: &CycleInputs, check: fn(&FrameContext<'_>) -> Outcome) -> Outcome {
        let params = Parameters::default();
        let ctx = FrameContext::new(inputs, &params);
        check(&ctx)
    }

    fn fast_wnj(age: u32, radar: u32, video: u32) -> CycleInputs {
        let mut inputs = CycleInputs::default();
        inputs.track.filter_type = FilterType::Wnj;
        inputs.track.num_cycles_existing = age;
        inputs.track.sensor.total_radar_updates = radar;
        inputs.track.sensor.total_video_updates = video;
        inputs.ground = GroundVelocity::new(0.0, -5.0);
        inputs
    }

    fn micro_doppler_vru(age: u32, fc_updates: u32, ground: GroundVelocity) -> CycleInputs {
        let mut inputs = CycleInputs::default();
        inputs.track.is_vru = true;
        inputs.track.num_cycles_existing = age;
        inputs.track.expected_vr_counter = 5;
        inputs.track.sensor.front_center_radar_updates = fc_updates;
        inputs.ground = ground;
        inputs
    }

    // ────────────────────────────────────────────────────────────
    // FastWnjMeasuredRatio
    // ────────────────────────────────────────────────────────────

    #[test]
    fn test_fast_wnj_age_one_never_fires() {
        let outcome = eval(&fast_wnj(1, 0, 0), fast_wnj_measured_ratio);
        assert_eq!(outcome, Outcome::Gated("Object too young"));
    }

    #[test]
    fn test_fast_wnj_fires_on_low_ratio() {
        // 1 / 3 ≈ 0.33 < 0.7
        assert!(eval(&fast_wnj(2, 1, 5), fast_wnj_measured_ratio).is_fired());
    }

    #[test]
    fn test_fast_wnj_boundaries() {
        // 7 / 10 = 0.7 is not below 0.7
        assert!(!eval(&fast_wnj(9, 7, 0), fast_wnj_measured_ratio).is_fired());
        // six video updates
        assert!(!eval(&fast_wnj(2, 1, 6), fast_wnj_measured_ratio).is_fired());
        // age 255 is out of range
        assert_eq!(
            eval(&fast_wnj(255, 1, 0), fast_wnj_measured_ratio),
            Outcome::Gated("Not a fast crossing WNJ object")
        );
    }

    #[test]
    fn test_fast_wnj_requires_wnj_filter() {
        let mut inputs = fast_wnj(2, 1, 5);
        inputs.track.filter_type = FilterType::La;
        assert!(!eval(&inputs, fast_wnj_measured_ratio).is_fired());
    }

    // ────────────────────────────────────────────────────────────
    // MicroDopplerCheck
    // ────────────────────────────────────────────────────────────

    #[test]
    fn test_micro_doppler_old_object_upper_bound() {
        let inputs = micro_doppler_vru(13, 9, GroundVelocity::new(1.0, 3.5));
        let params = Parameters::default();
        let ctx = FrameContext::new(&inputs, &params);
        assert_eq!(crossing_vy_upper_bound(&ctx), 3.2);
        assert!(!crossing_vru_satisfied(&ctx));
        assert!(!micro_doppler_check(&ctx).is_fired());
    }

    #[test]
    fn test_micro_doppler_young_object_unbounded() {
        let inputs = micro_doppler_vru(5, 9, GroundVelocity::new(1.0, 3.5));
        let params = Parameters::default();
        let ctx = FrameContext::new(&inputs, &params);
        assert_eq!(crossing_vy_upper_bound(&ctx), 99.0);
        assert!(crossing_vru_satisfied(&ctx));
        assert!(micro_doppler_check(&ctx).is_fired());
    }

    #[test]
    fn test_micro_doppler_stationary_vru() {
        let inputs = micro_doppler_vru(20, 20, GroundVelocity::new(0.1, 0.1));
        assert!(eval(&inputs, micro_doppler_check).is_fired());

        let params = Parameters {
            micro_doppler_on_stationary_vru: false,
            ..Default::default()
        };
        let ctx = FrameContext::new(&inputs, &params);
        assert!(!micro_doppler_check(&ctx).is_fired());
    }

    #[test]
    fn test_micro_doppler_gated_by_corner_radar() {
        let mut inputs = micro_doppler_vru(5, 3, GroundVelocity::new(1.0, 2.0));
        inputs.track.sensor.front_left_corner_updates = 1;
        assert_eq!(
            eval(&inputs, micro_doppler_check),
            Outcome::Gated("Micro-doppler check conditions not met")
        );
    }

    #[test]
    fn test_micro_doppler_disabled() {
        let inputs = micro_doppler_vru(5, 3, GroundVelocity::new(1.0, 2.0));
        let params = Parameters {
            micro_doppler_check_enabled: false,
            ..Default::default()
        };
        let ctx = FrameContext::new(&inputs, &params);
        assert!(!micro_doppler_check(&ctx).is_fired());
    }

    // ────────────────────────────────────────────────────────────
    // Geometry / flags
    // ────────────────────────────────────────────────────────────

    #[test]
    fn test_moving_towards_ego_lane_either_velocity() {
        let mut inputs = CycleInputs::default();
        inputs.track.state.y = 1.5;
        inputs.track.state.vy = 3.0;
        inputs.ground = GroundVelocity::new(0.0, 3.0);
        assert!(!eval(&inputs, moving_towards_ego_lane).is_fired());

        inputs.ground.vy = -0.5;
        assert!(eval(&inputs, moving_towards_ego_lane).is_fired());

        inputs.ground.vy = 0.5;
        inputs.track.state.vy = -0.1;
        assert!(eval(&inputs, moving_towards_ego_lane).is_fired());

        // on the ego centerline nothing moves "towards" it
        inputs.track.state.y = 0.0;
        assert!(!eval(&inputs, moving_towards_ego_lane).is_fired());
    }

    #[test]
    fn test_upstream_flags_pass_through() {
        let mut inputs = CycleInputs::default();
        assert!(!eval(&inputs, suppressed_until_next_video_update).is_fired());
        inputs.track.flags.suppressed_until_next_video_update = true;
        inputs.track.flags.suppressed_due_to_video_otc = true;
        assert!(eval(&inputs, suppressed_until_next_video_update).is_fired());
        assert!(eval(&inputs, post_process_video_otc).is_fired());
    }

    #[test]
    fn test_stat_loc_high_mdoppler() {
        let mut inputs = CycleInputs::default();
        inputs.track.is_vru = true;
        inputs.track.state.y = 0.3;
        inputs.track.flags.updated_with_stat_loc_high_mdoppler_outgoing_vr = true;
        inputs.ground = GroundVelocity::new(0.1, 1.5);
        assert!(eval(&inputs, stat_loc_high_mdoppler_outgoing_vr).is_fired());

        inputs.track.state.y = -0.5;
        assert!(!eval(&inputs, stat_loc_high_mdoppler_outgoing_vr).is_fired());
    }

    #[test]
    fn test_non_crossing_object() {
        let mut inputs = CycleInputs::default();
        inputs.track.sensor.front_center_radar_updates = 4;
        inputs.track.prob_currently_moving = 0.05;
        inputs.track.prob_has_been_moving = 0.05;
        inputs.ground = GroundVelocity::new(0.0, 0.8);
        assert!(eval(&inputs, non_crossing_object).is_fired());

        inputs.track.oncoming_location_cycles = 1;
        assert!(!eval(&inputs, non_crossing_object).is_fired());
    }

    // ────────────────────────────────────────────────────────────
    // Radar-only / innovation / elevation
    // ────────────────────────────────────────────────────────────

    #[test]
    fn test_radar_only_rcs_and_dr_innovation() {
        let mut inputs = CycleInputs::default();
        inputs.track.sensor.front_center_radar_updates = 3;
        inputs.track.avg_dx_innovation = -1.3;
        inputs.track.rcs = -16.0;
        assert!(eval(&inputs, radar_only_rcs_and_dr_innovation).is_fired());

        inputs.track.sensor.total_video_updates = 1;
        assert!(!eval(&inputs, radar_only_rcs_and_dr_innovation).is_fired());
    }

    #[test]
    fn test_elevation_check_limit_at_distance() {
        let mut inputs = CycleInputs::default();
        inputs.track.is_vru = true;
        inputs.track.elevation_valid = true;
        inputs.track.state.x = 50.0;
        inputs.track.elevation = 2.6;
        assert!(eval(&inputs, elevation_check).is_fired());

        inputs.track.elevation = 2.5;
        assert!(!eval(&inputs, elevation_check).is_fired(), "limit is exclusive");
    }

    #[test]
    fn test_elevation_check_stationary_video_confirmed_non_vru() {
        let mut inputs = CycleInputs::default();
        inputs.track.elevation_valid = true;
        inputs.track.state.x = 10.0;
        inputs.track.elevation = 5.0;
        inputs.track.sensor.cycles_since_last_video = 9;
        inputs.ground = GroundVelocity::new(0.5, 0.5);
        assert!(eval(&inputs, elevation_check).is_fired());

        inputs.track.sensor.cycles_since_last_video = 10;
        assert_eq!(
            eval(&inputs, elevation_check),
            Outcome::Gated("Elevation check preconditions not met")
        );
    }

    #[test]
    fn test_elevation_check_requires_positive_x() {
        let mut inputs = CycleInputs::default();
        inputs.track.is_vru = true;
        inputs.track.elevation_valid = true;
        inputs.track.elevation = 10.0;
        assert!(!eval(&inputs, elevation_check).is_fired());
    }

    #[test]
    fn test_innovation_check_uses_selected_threshold() {
        let mut inputs = CycleInputs::default();
        inputs.track.state.x = 10.0;
        inputs.track.is_vru = true;
        inputs.track.avg_dx_innovation = 1.55;
        // close VRU → 1.5
        assert!(eval(&inputs, innovation_check).is_fired());

        inputs.track.is_vru = false;
        // default → 1.6
        assert!(!eval(&inputs, innovation_check).is_fired());

        inputs.track.state.x = 60.0;
        inputs.track.avg_dx_innovation = 5.0;
        assert!(!eval(&inputs, innovation_check).is_fired(), "outside dx relevance");
    }

    #[test]
    fn test_implausible_vy_vru_suppressed_while_turning() {
        let mut inputs = CycleInputs::default();
        inputs.track.is_vru = true;
        inputs.ground = GroundVelocity::new(0.0, 9.0);
        assert!(eval(&inputs, implausible_vy_vru).is_fired());

        inputs.ego = EgoMotion {
            velocity_x: 10.0,
            acceleration_y: 0.0,
            yaw_rate: -0.2,
        };
        assert!(!eval(&inputs, implausible_vy_vru).is_fired());

        inputs.ego.yaw_rate = 0.1;
        inputs.track.filter_type = FilterType::Wnj;
        assert!(!eval(&inputs, implausible_vy_vru).is_fired());
    }

    #[test]
    fn test_implausible_video_ttc_for_vru() {
        let mut inputs = CycleInputs::default();
        inputs.track.is_vru = true;
        assert!(!eval(&inputs, implausible_video_ttc_for_vru).is_fired());

        inputs.track.video_inv_ttc = InverseTtc::Unmeasured;
        assert!(eval(&inputs, implausible_video_ttc_for_vru).is_fired());

        inputs.track.sensor.cycles_since_last_video = 1;
        assert!(!eval(&inputs, implausible_video_ttc_for_vru).is_fired());
    }

    // ────────────────────────────────────────────────────────────
    // RadarOnlyNLD / RadarOnlyStationary
    // ────────────────────────────────────────────────────────────

    fn settled_radar_only() -> CycleInputs {
        let mut inputs = CycleInputs::default();
        inputs.track.state.x = 40.0;
        inputs.track.state.y = 0.5;
        inputs.track.num_cycles_existing = 10;
        inputs.track.sensor.total_radar_updates = 10;
        inputs
    }

    #[test]
    fn test_radar_only_nld_settled_object_not_candidate() {
        assert_eq!(eval(&settled_radar_only(), radar_only_nld), Outcome::NotFired);
    }

    #[test]
    fn test_radar_only_nld_each_trigger() {
        let mut inputs = settled_radar_only();
        inputs.track.state.y = 2.0;
        assert!(eval(&inputs, radar_only_nld).is_fired(), "outside relevant area");

        let mut inputs = settled_radar_only();
        inputs.track.num_cycles_existing = 2;
        inputs.track.sensor.total_radar_updates = 2;
        assert!(eval(&inputs, radar_only_nld).is_fired(), "too young");

        let mut inputs = settled_radar_only();
        inputs.track.sensor.total_radar_updates = 9;
        assert!(eval(&inputs, radar_only_nld).is_fired(), "under-measured");

        let mut inputs = settled_radar_only();
        inputs.track.num_cycles_existing = 30;
        inputs.track.sensor.total_radar_updates = 5;
        assert!(!eval(&inputs, radar_only_nld).is_fired(), "mature objects count as measured");

        let mut inputs = settled_radar_only();
        inputs.ego = EgoMotion {
            velocity_x: 10.0,
            acceleration_y: 2.0,
            yaw_rate: 0.2,
        };
        assert!(eval(&inputs, radar_only_nld).is_fired(), "ego turning");

        let mut inputs = settled_radar_only();
        inputs.track.state.x = 5.0;
        inputs.track.state.vy = -3.5;
        assert!(eval(&inputs, radar_only_nld).is_fired(), "close and fast laterally");
    }

    #[test]
    fn test_radar_only_nld_gated_by_video() {
        let mut inputs = settled_radar_only();
        inputs.track.state.y = 2.0;
        inputs.track.sensor.total_video_updates = 1;
        assert_eq!(
            eval(&inputs, radar_only_nld),
            Outcome::Gated("Object is not radar-only")
        );
    }

    #[test]
    fn test_radar_only_stationary() {
        let mut inputs = CycleInputs::default();
        inputs.ground = GroundVelocity::new(0.2, 0.2);
        assert!(eval(&inputs, radar_only_stationary).is_fired());

        inputs.ground.vy = 0.3;
        assert_eq!(eval(&inputs, radar_only_stationary), Outcome::NotFired);

        inputs.track.sensor.total_video_updates = 2;
        assert_eq!(
            eval(&inputs, radar_only_stationary),
            Outcome::Gated("Object is not radar-only")
        );
    }
}
