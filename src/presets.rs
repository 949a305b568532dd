// src/presets.rs
//
// Built-in scenarios, evaluated when no scenario documents are found.

use crate::pipeline::CycleInputs;
use crate::scenarios::Scenario;
use crate::types::{EgoMotion, FilterType, GroundVelocity, ObjectKinematics, ObjectTrack};

/// Young VRU crossing from the right at 3 m/s, 25 m ahead, ego at 50 km/h.
pub fn fast_crossing_pedestrian() -> CycleInputs {
    let mut track = ObjectTrack {
        state: ObjectKinematics {
            x: 25.0,
            y: 1.5,
            vx: 0.5,
            vy: 3.0,
        },
        is_vru: true,
        rcs: -8.0,
        num_cycles_existing: 8,
        filter_type: FilterType::La,
        prob_has_been_moving: 0.3,
        prob_currently_moving: 0.2,
        elevation: 0.0,
        elevation_valid: true,
        avg_dx_innovation: 0.5,
        number_micro_doppler_cycles: 0,
        expected_vr_counter: 5,
        ..Default::default()
    };

    let sensor = &mut track.sensor;
    sensor.total_radar_updates = 5;
    sensor.total_video_updates = 3;
    sensor.front_center_radar_updates = 5;
    sensor.front_left_corner_updates = 0;
    sensor.front_right_corner_updates = 0;
    sensor.cycles_since_last_video = 2;
    sensor.cycles_since_last_radar = 0;
    sensor.good_quality_fused = true;
    sensor.trustworthy = true;

    CycleInputs::new(
        track,
        EgoMotion {
            velocity_x: 13.9,
            acceleration_y: 0.0,
            yaw_rate: 0.0,
        },
        GroundVelocity::new(0.5, 3.0),
    )
}

/// The crossing pedestrian with its video history removed and ground
/// speed reduced to a standstill.
pub fn radar_only_stationary() -> CycleInputs {
    let mut inputs = fast_crossing_pedestrian();
    inputs.track.sensor.total_video_updates = 0;
    inputs.ground = GroundVelocity::new(0.2, 0.2);
    inputs
}

pub fn all() -> Vec<Scenario> {
    [
        ("fast crossing pedestrian", fast_crossing_pedestrian()),
        ("radar-only stationary", radar_only_stationary()),
    ]
    .into_iter()
    .map(|(name, inputs)| Scenario {
        name: name.to_string(),
        inputs,
    })
    .collect()
}
