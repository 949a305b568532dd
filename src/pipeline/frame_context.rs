// src/pipeline/frame_context.rs
//
// Single source of truth for one evaluation cycle. Every check reads the
// same snapshot and the same derived quantities, so check order can only
// affect report order, never outcomes.

use crate::analysis::DerivedQuantities;
use crate::types::{EgoMotion, GroundVelocity, ObjectTrack, Parameters};
use serde::{Deserialize, Serialize};

/// Per-track inputs of one cycle. `Parameters` are shared separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleInputs {
    pub track: ObjectTrack,
    pub ego: EgoMotion,
    pub ground: GroundVelocity,
}

impl CycleInputs {
    pub fn new(track: ObjectTrack, ego: EgoMotion, ground: GroundVelocity) -> Self {
        Self { track, ego, ground }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub track: &'a ObjectTrack,
    pub ego: &'a EgoMotion,
    pub ground: GroundVelocity,
    pub params: &'a Parameters,
    pub derived: DerivedQuantities,
}

impl<'a> FrameContext<'a> {
    pub fn new(inputs: &'a CycleInputs, params: &'a Parameters) -> Self {
        Self {
            track: &inputs.track,
            ego: &inputs.ego,
            ground: inputs.ground,
            params,
            derived: DerivedQuantities::compute(&inputs.track, &inputs.ego, params),
        }
    }

    pub fn is_radar_only(&self) -> bool {
        self.track.sensor.is_radar_only()
    }

    /// Near-zero ground speed and a video update within the last 10 cycles.
    pub fn is_stationary_video_confirmed(&self) -> bool {
        self.ground.vx < 1.0
            && self.ground.vy < 1.0
            && self.track.sensor.cycles_since_last_video < 10
    }
}
