// src/analysis/ego_motion.rs
//
// Ego-vehicle motion classification from the vehicle bus signals
// (longitudinal velocity, lateral acceleration, yaw rate).
//
// Two questions are answered here:
//   - is the ego vehicle driving straight? (turn radius / low lateral dynamics)
//   - is the ego vehicle turning hard? (|yaw rate| above 10°/s)

use crate::types::EgoMotion;
use std::f64::consts::PI;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Turn radius above which the ego path counts as straight (m)
pub const STRAIGHT_RADIUS_M: f64 = 2500.0;
/// Lateral acceleration below which low-dynamics driving counts as straight (m/s²)
pub const STRAIGHT_LATERAL_ACCEL: f64 = 0.15;
/// Yaw-rate bound paired with [`STRAIGHT_LATERAL_ACCEL`] (rad/s)
pub const STRAIGHT_YAW_RATE: f64 = 0.012;
/// 10°/s in rad/s
pub const TURNING_YAW_RATE: f64 = 10.0 * (PI / 180.0);

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Instantaneous turn radius `v / ω`. `None` when the yaw rate is exactly zero.
pub fn turn_radius(ego: &EgoMotion) -> Option<f64> {
    if ego.yaw_rate == 0.0 {
        None
    } else {
        Some(ego.velocity_x / ego.yaw_rate)
    }
}

/// Ego path is straight if the yaw rate is zero, the turn radius exceeds
/// 2500 m, or lateral dynamics are low.
///
/// The low-dynamics branch compares the *signed* yaw rate against 0.012, so
/// any negative yaw rate passes that half of the test regardless of
/// magnitude. Kept asymmetric on purpose; see DESIGN.md.
pub fn is_driving_straight(ego: &EgoMotion) -> bool {
    match turn_radius(ego) {
        None => true,
        Some(radius) => {
            radius.abs() > STRAIGHT_RADIUS_M
                || (ego.acceleration_y.abs() < STRAIGHT_LATERAL_ACCEL
                    && ego.yaw_rate < STRAIGHT_YAW_RATE)
        }
    }
}

/// |yaw rate| strictly above 10°/s.
pub fn is_turning(ego: &EgoMotion) -> bool {
    ego.yaw_rate.abs() > TURNING_YAW_RATE
}
