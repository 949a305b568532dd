// src/analysis/video_ghost.rs
//
// Video ghost suspicion: a track that lives almost entirely on video
// updates, has only just picked up its first front-center radar
// locations, never showed the micro-doppler signature the radar expected,
// and reflects almost nothing.

use crate::types::ObjectTrack;

const VERY_LOW_RCS: f64 = -15.0;

/// The individual sub-conditions, kept separate for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoGhostEvidence {
    /// 0 < front-center radar updates < 3, radar updated this cycle
    pub initial_radar_phase: bool,
    /// more than 3 video updates
    pub video_dominant: bool,
    /// no front corner radar update ever
    pub no_corner_confirmation: bool,
    /// micro-doppler expected but never seen
    pub no_expected_micro_doppler: bool,
    /// rcs < -15 dBm²
    pub very_low_rcs: bool,
}

impl VideoGhostEvidence {
    pub fn collect(track: &ObjectTrack) -> Self {
        let sensor = &track.sensor;
        Self {
            initial_radar_phase: sensor.front_center_radar_updates > 0
                && sensor.front_center_radar_updates < 3
                && sensor.cycles_since_last_radar == 0,
            video_dominant: sensor.total_video_updates > 3,
            no_corner_confirmation: sensor.has_no_corner_updates(),
            no_expected_micro_doppler: track.number_micro_doppler_cycles == 0
                && track.expected_vr_counter > 0,
            very_low_rcs: track.rcs < VERY_LOW_RCS,
        }
    }

    /// Video-dominant, uncorroborated by corner radar, early radar phase.
    pub fn is_almost_video_only(&self) -> bool {
        self.video_dominant && self.no_corner_confirmation && self.initial_radar_phase
    }

    pub fn is_suspected(&self) -> bool {
        self.is_almost_video_only() && self.no_expected_micro_doppler && self.very_low_rcs
    }
}

pub fn is_probably_video_ghost(track: &ObjectTrack) -> bool {
    VideoGhostEvidence::collect(track).is_suspected()
}
