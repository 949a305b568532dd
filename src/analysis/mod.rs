// src/analysis/mod.rs
//
// Derived quantities shared by several checks.
//
// Signal flow:
//   ObjectTrack ─┬→ video_ghost  ──────────┐
//                ├→ thresholds (innovation)├→ DerivedQuantities → battery
//                └→ thresholds (elevation) │
//   EgoMotion   ──→ ego_motion ────────────┘
//
// Everything here is a pure function of one cycle's inputs.

pub mod ego_motion;
pub mod thresholds;
pub mod video_ghost;

pub use ego_motion::{is_driving_straight, is_turning, turn_radius};
pub use thresholds::{elevation_limit, innovation_threshold, matching_innovation_rule};
pub use video_ghost::{is_probably_video_ghost, VideoGhostEvidence};

use crate::types::{EgoMotion, ObjectTrack, Parameters};
use tracing::debug;

/// Intermediate values computed once per cycle, before any check runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    pub video_ghost: bool,
    /// Elevation limit at the object's current longitudinal distance
    pub elevation_limit: f64,
    pub innovation_threshold: f64,
    pub ego_driving_straight: bool,
    pub ego_turning: bool,
}

impl DerivedQuantities {
    pub fn compute(track: &ObjectTrack, ego: &EgoMotion, params: &Parameters) -> Self {
        let evidence = VideoGhostEvidence::collect(track);
        let rung = matching_innovation_rule(track);

        let derived = Self {
            video_ghost: evidence.is_suspected(),
            elevation_limit: elevation_limit(track.state.x, &params.elevation),
            innovation_threshold: innovation_threshold(track),
            ego_driving_straight: is_driving_straight(ego),
            ego_turning: is_turning(ego),
        };

        debug!(
            "derived: ghost={} ({:?}) | dz_limit={:.3} | dx_inno_thr={:.2} ({}) | straight={} | turning={}",
            derived.video_ghost,
            evidence,
            derived.elevation_limit,
            derived.innovation_threshold,
            rung.map(|r| r.name).unwrap_or("default"),
            derived.ego_driving_straight,
            derived.ego_turning,
        );

        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_uses_object_distance_for_elevation() {
        let mut track = ObjectTrack::default();
        track.state.x = 25.0;
        let d = DerivedQuantities::compute(&track, &EgoMotion::default(), &Parameters::default());
        assert_eq!(d.elevation_limit, 2.25);
        assert_eq!(d.innovation_threshold, 1.6);
        assert!(d.ego_driving_straight);
        assert!(!d.ego_turning);
        assert!(!d.video_ghost);
    }
}
