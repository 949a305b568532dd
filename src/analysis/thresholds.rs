// src/analysis/thresholds.rs
//
// Thresholds that depend on the object itself:
//   - elevation limit, linearly interpolated over longitudinal distance
//   - dx-innovation threshold, chosen by a priority-ordered rule list

use crate::types::{ElevationTable, ObjectTrack};

// ============================================================================
// ELEVATION LIMIT
// ============================================================================

/// Allowed elevation at longitudinal distance `dx`.
///
/// Linear through the two table points. `dx` is not clamped: outside the
/// breakpoints the line is extrapolated.
pub fn elevation_limit(dx: f64, table: &ElevationTable) -> f64 {
    let [d0, d1] = table.dx_limits;
    let [low, high] = table.dz_thresholds;
    let span = d1 - d0;
    if span == 0.0 {
        return low;
    }
    low + ((dx - d0) / span) * (high - low)
}

// ============================================================================
// INNOVATION THRESHOLD
// ============================================================================

pub const DEFAULT_DX_INNOVATION_THRESHOLD: f64 = 1.6;

/// One rung of the dx-innovation ladder.
#[derive(Clone, Copy)]
pub struct ThresholdRule {
    pub name: &'static str,
    pub applies: fn(&ObjectTrack) -> bool,
    pub threshold: f64,
}

impl std::fmt::Debug for ThresholdRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThresholdRule")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .finish()
    }
}

fn is_close_vru(track: &ObjectTrack) -> bool {
    track.state.x.abs() < 20.0 && track.is_vru
}

fn is_low_rcs_with_unreliable_vy(track: &ObjectTrack) -> bool {
    track.rcs < -5.0 && track.vy_unreliable_accumulated > 1.9
}

fn is_very_low_rcs(track: &ObjectTrack) -> bool {
    track.rcs < -15.0
}

/// Rungs overlap (a close VRU with very low RCS matches the first and the
/// third), so order is significant: first match wins.
pub static INNOVATION_THRESHOLD_LADDER: [ThresholdRule; 3] = [
    ThresholdRule {
        name: "close_vru",
        applies: is_close_vru,
        threshold: 1.5,
    },
    ThresholdRule {
        name: "low_rcs_vy_unreliable",
        applies: is_low_rcs_with_unreliable_vy,
        threshold: 1.1,
    },
    ThresholdRule {
        name: "very_low_rcs",
        applies: is_very_low_rcs,
        threshold: 1.5,
    },
];

/// The rung selected for `track`, or `None` when the default applies.
pub fn matching_innovation_rule(track: &ObjectTrack) -> Option<&'static ThresholdRule> {
    INNOVATION_THRESHOLD_LADDER
        .iter()
        .find(|rule| (rule.applies)(track))
}

pub fn innovation_threshold(track: &ObjectTrack) -> f64 {
    matching_innovation_rule(track)
        .map(|rule| rule.threshold)
        .unwrap_or(DEFAULT_DX_INNOVATION_THRESHOLD)
}
