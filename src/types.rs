// src/types.rs
//
// Per-cycle state model: one perceived object, its sensor-update history,
// ego motion, ground velocity and the tunable parameter bundle.
// Everything here is produced upstream, read-only during evaluation.

use crate::error::InputError;
use serde::{Deserialize, Serialize};

// ============================================================================
// OBJECT KINEMATICS
// ============================================================================

/// Position and velocity relative to the ego vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectKinematics {
    /// Longitudinal position (m)
    pub x: f64,
    /// Lateral position (m)
    pub y: f64,
    /// Longitudinal velocity (m/s)
    pub vx: f64,
    /// Lateral velocity (m/s)
    pub vy: f64,
}

// ============================================================================
// SENSOR UPDATE HISTORY
// ============================================================================

/// Per-modality update counters maintained by the tracker.
///
/// The "since last" counters are reset upstream on a fresh update of that
/// modality; nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SensorUpdateHistory {
    #[serde(alias = "total_num_radar_updates")]
    pub total_radar_updates: u32,
    #[serde(alias = "total_num_video_updates")]
    pub total_video_updates: u32,
    #[serde(alias = "total_num_front_center_location_radar_updates")]
    pub front_center_radar_updates: u32,
    #[serde(alias = "total_num_front_left_corner_updates")]
    pub front_left_corner_updates: u32,
    #[serde(alias = "total_num_front_right_corner_updates")]
    pub front_right_corner_updates: u32,
    #[serde(alias = "updates_since_last_video_update")]
    pub cycles_since_last_video: u32,
    #[serde(alias = "updates_since_last_radar_update")]
    pub cycles_since_last_radar: u32,

    // Populated by the tracker, not read by any check.
    #[serde(alias = "updates_since_last_front_center_video_update")]
    pub cycles_since_last_front_center_video: u32,
    #[serde(alias = "updates_since_last_front_center_location_radar_update")]
    pub cycles_since_last_front_center_radar: u32,
    #[serde(alias = "updates_since_last_front_left_corner_update")]
    pub cycles_since_last_front_left_corner: u32,
    #[serde(alias = "updates_since_last_front_right_corner_update")]
    pub cycles_since_last_front_right_corner: u32,
    #[serde(alias = "updates_since_last_update")]
    pub cycles_since_last_update: u32,

    #[serde(alias = "is_good_quality_fused_object")]
    pub good_quality_fused: bool,
    #[serde(alias = "is_trustworthy_object")]
    pub trustworthy: bool,
}

impl SensorUpdateHistory {
    /// No video measurement has ever been associated.
    pub fn is_radar_only(&self) -> bool {
        self.total_video_updates == 0
    }

    /// Neither front corner radar has ever updated the track.
    pub fn has_no_corner_updates(&self) -> bool {
        self.front_left_corner_updates == 0 && self.front_right_corner_updates == 0
    }
}

// ============================================================================
// CLASSIFICATION ENUMS
// ============================================================================

/// Motion model applied to the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    /// Linear acceleration
    #[default]
    #[serde(rename = "LA")]
    La,
    /// White-noise jerk
    #[serde(rename = "WNJ")]
    Wnj,
    /// Kalman
    #[serde(rename = "KF")]
    Kf,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::La => "LA",
            Self::Wnj => "WNJ",
            Self::Kf => "KF",
        }
    }
}

/// Most probable conditional object type reported by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectClass {
    #[default]
    Pedestrian,
    Car,
    Truck,
    #[serde(rename = "2WHEELER")]
    TwoWheeler,
    #[serde(other)]
    Unknown,
}

/// Video inverse time-to-collision.
///
/// The tracker encodes "never measured" as the largest float32; that state
/// is kept explicit here so no check compares against a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum InverseTtc {
    Unmeasured,
    Measured(f64),
}

impl InverseTtc {
    pub fn is_unmeasured(&self) -> bool {
        matches!(self, Self::Unmeasured)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Unmeasured => None,
            Self::Measured(v) => Some(*v),
        }
    }
}

impl Default for InverseTtc {
    fn default() -> Self {
        Self::Measured(0.0)
    }
}

/// Values within float32 precision of `f32::MAX`, or above it, are the
/// tracker's "never measured" marker.
const UNMEASURED_INV_TTC_FLOOR: f64 = f32::MAX as f64 * (1.0 - f32::EPSILON as f64);

impl From<Option<f64>> for InverseTtc {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && v < UNMEASURED_INV_TTC_FLOOR => Self::Measured(v),
            _ => Self::Unmeasured,
        }
    }
}

impl From<InverseTtc> for Option<f64> {
    fn from(value: InverseTtc) -> Self {
        value.value()
    }
}

// ============================================================================
// OBJECT TRACK
// ============================================================================

/// Flags set by earlier post-processing stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuppressionFlags {
    #[serde(alias = "is_suppressed_until_next_video_update")]
    pub suppressed_until_next_video_update: bool,
    #[serde(alias = "is_suppressed_due_to_video_otc_post_processing")]
    pub suppressed_due_to_video_otc: bool,
    #[serde(alias = "is_updated_with_stat_loc_with_high_mdoppler_with_outgoing_vr")]
    pub updated_with_stat_loc_high_mdoppler_outgoing_vr: bool,
    #[serde(alias = "is_orientation_implausible_compared_2_vid")]
    pub orientation_implausible_vs_video: bool,
}

/// Tracker bookkeeping carried through unchanged. No check reads these, but
/// collectors populate them and documents round-trip them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackAuxiliary {
    pub radar_based_innovation: [f64; 2],
    pub video_based_innovation: [f64; 2],
    pub radar_raw_alpha_innovation: f64,
    pub video_raw_alpha_innovation: f64,
    pub split_counter: u32,
    pub stopping_split_counter: u32,
    pub stationary_locations_only_counter: u32,
    #[serde(alias = "non_plausible_location_cnt")]
    pub non_plausible_location_count: u32,
    #[serde(alias = "bad_sensor_based_inno_count")]
    pub bad_sensor_based_innovation_count: u32,
    pub vy_inconsistent: u32,
    pub object_orientation_unreliable_count: u32,
    pub num_cycles_no_orientation_update: u32,
    pub num_consecutive_cycles_without_oncoming_locations: u32,
    pub transferred_from_sep_cycle: u32,
    pub most_probable_conditional_type: ObjectClass,
    pub p_non_obstacle_rcs_only_classifier: f64,
    pub length: f64,
    pub width: f64,
    pub yaw_angle: f64,
    pub facing_angle: f64,
    pub w_exist_of_associated_video_object: f64,
    pub recently_used_video_measurement_handle_valid: bool,
    pub recently_used_video_measurement_handle: u32,
    #[serde(alias = "object_id_10bit")]
    pub object_id: u16,
    pub created_by_video_with_high_vy: bool,
    pub num_cycles_since_last_video_update_with_angular_velocity: u32,
}

impl Default for TrackAuxiliary {
    fn default() -> Self {
        Self {
            radar_based_innovation: [0.0; 2],
            video_based_innovation: [0.0; 2],
            radar_raw_alpha_innovation: 0.0,
            video_raw_alpha_innovation: 0.0,
            split_counter: 0,
            stopping_split_counter: 0,
            stationary_locations_only_counter: 0,
            non_plausible_location_count: 0,
            bad_sensor_based_innovation_count: 0,
            vy_inconsistent: 0,
            object_orientation_unreliable_count: 0,
            num_cycles_no_orientation_update: 0,
            num_consecutive_cycles_without_oncoming_locations: 0,
            transferred_from_sep_cycle: 0,
            most_probable_conditional_type: ObjectClass::Pedestrian,
            p_non_obstacle_rcs_only_classifier: 0.0,
            length: 1.8,
            width: 0.6,
            yaw_angle: 0.0,
            facing_angle: 0.0,
            w_exist_of_associated_video_object: 0.0,
            recently_used_video_measurement_handle_valid: false,
            recently_used_video_measurement_handle: 0,
            object_id: 1,
            created_by_video_with_high_vy: false,
            num_cycles_since_last_video_update_with_angular_velocity: 0,
        }
    }
}

/// One perceived object as handed over by the fusion tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectTrack {
    pub state: ObjectKinematics,
    #[serde(alias = "sensor_filter_fus_helper")]
    pub sensor: SensorUpdateHistory,
    #[serde(alias = "is_object_vru")]
    pub is_vru: bool,
    /// Radar cross-section (dBm²)
    pub rcs: f64,
    /// Age in cycles
    #[serde(alias = "num_cycles_existing")]
    pub num_cycles_existing: u32,
    #[serde(alias = "filter_type")]
    pub filter_type: FilterType,
    #[serde(alias = "prob_has_been_observed_moving")]
    pub prob_has_been_moving: f64,
    #[serde(alias = "prob_is_currently_moving")]
    pub prob_currently_moving: f64,
    /// Elevation above ground (m)
    pub elevation: f64,
    #[serde(alias = "elevation_is_valid")]
    pub elevation_valid: bool,
    #[serde(alias = "number_micro_doppler_cycles")]
    pub number_micro_doppler_cycles: u32,
    #[serde(alias = "expected_vr_high_enough_for_mu_doppler_counter")]
    pub expected_vr_counter: u32,
    #[serde(alias = "avg_dx_innovation")]
    pub avg_dx_innovation: f64,
    #[serde(alias = "vy_unreliable_accumulated")]
    pub vy_unreliable_accumulated: f64,
    #[serde(alias = "video_inv_ttc")]
    pub video_inv_ttc: InverseTtc,
    #[serde(flatten)]
    pub flags: SuppressionFlags,
    #[serde(alias = "total_num_cycles_with_oncoming_locations")]
    pub oncoming_location_cycles: u32,
    #[serde(flatten)]
    pub aux: TrackAuxiliary,
}

impl ObjectTrack {
    /// Collector-side plausibility check. The evaluation itself never clamps
    /// or rejects values.
    pub fn validate(&self) -> Result<(), InputError> {
        let s = &self.state;
        for (field, value) in [
            ("state.x", s.x),
            ("state.y", s.y),
            ("state.vx", s.vx),
            ("state.vy", s.vy),
            ("rcs", self.rcs),
            ("elevation", self.elevation),
            ("avgDxInnovation", self.avg_dx_innovation),
            ("vyUnreliableAccumulated", self.vy_unreliable_accumulated),
        ] {
            if !value.is_finite() {
                return Err(InputError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        for (field, p) in [
            ("probHasBeenMoving", self.prob_has_been_moving),
            ("probCurrentlyMoving", self.prob_currently_moving),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(InputError::invalid(field, format!("must be in [0, 1], got {p}")));
            }
        }

        Ok(())
    }
}

// ============================================================================
// EGO MOTION / GROUND VELOCITY
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EgoMotion {
    /// Longitudinal velocity (m/s)
    #[serde(alias = "velocity_x")]
    pub velocity_x: f64,
    /// Lateral acceleration (m/s²)
    #[serde(alias = "acceleration_y")]
    pub acceleration_y: f64,
    /// Yaw rate (rad/s)
    #[serde(alias = "yaw_rate")]
    pub yaw_rate: f64,
}

/// Absolute object velocity over ground, independent of the relative
/// velocity in [`ObjectKinematics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GroundVelocity {
    pub vx: f64,
    pub vy: f64,
}

impl GroundVelocity {
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }
}

impl From<[f64; 2]> for GroundVelocity {
    fn from([vx, vy]: [f64; 2]) -> Self {
        Self { vx, vy }
    }
}

impl From<GroundVelocity> for [f64; 2] {
    fn from(v: GroundVelocity) -> Self {
        [v.vx, v.vy]
    }
}

// ============================================================================
// PARAMETERS
// ============================================================================

/// Two-point distance → elevation-limit table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElevationTable {
    /// Distance breakpoints (m)
    #[serde(alias = "elevation_check_dx_limits")]
    pub dx_limits: [f64; 2],
    /// Elevation limits at the breakpoints (m)
    #[serde(alias = "elevation_check_dz_thresholds")]
    pub dz_thresholds: [f64; 2],
}

impl Default for ElevationTable {
    fn default() -> Self {
        Self {
            dx_limits: [0.0, 100.0],
            dz_thresholds: [2.0, 3.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameters {
    #[serde(alias = "is_micro_doppler_check_enabled")]
    pub micro_doppler_check_enabled: bool,
    pub min_vru_micro_doppler_cycles: u32,
    #[serde(alias = "is_micro_doppler_check_on_crossing_vru_applied")]
    pub micro_doppler_on_crossing_vru: bool,
    #[serde(alias = "is_micro_doppler_check_on_stationary_vru_applied")]
    pub micro_doppler_on_stationary_vru: bool,
    #[serde(alias = "innovation_check_dx_threshold")]
    pub innovation_dx_relevance: f64,
    #[serde(alias = "innovation_check_dy_threshold")]
    pub innovation_dy_relevance: f64,
    #[serde(alias = "implausible_vy_thresh_la_hypo")]
    pub implausible_vy_la: f64,
    #[serde(alias = "implausible_rcs_thresh")]
    pub implausible_rcs: f64,
    #[serde(alias = "split_detection_cnt_max_val")]
    pub split_detection_count_max: u32,
    pub max_longitudinal_distance_for_rcs_countermeasure: f64,
    pub elevation: ElevationTable,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            micro_doppler_check_enabled: true,
            min_vru_micro_doppler_cycles: 1,
            micro_doppler_on_crossing_vru: true,
            micro_doppler_on_stationary_vru: true,
            innovation_dx_relevance: 50.0,
            innovation_dy_relevance: 50.0,
            implausible_vy_la: 8.0,
            implausible_rcs: -9.5,
            split_detection_count_max: 3,
            max_longitudinal_distance_for_rcs_countermeasure: 20.0,
            elevation: ElevationTable::default(),
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("innovationDxRelevance", self.innovation_dx_relevance),
            ("innovationDyRelevance", self.innovation_dy_relevance),
            ("implausibleVyLa", self.implausible_vy_la),
            ("implausibleRcs", self.implausible_rcs),
        ] {
            if !value.is_finite() {
                return Err(InputError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        let [d0, d1] = self.elevation.dx_limits;
        if !(d0.is_finite() && d1.is_finite()) || d1 <= d0 {
            return Err(InputError::invalid(
                "elevation.dxLimits",
                format!("breakpoints must be finite and increasing, got [{d0}, {d1}]"),
            ));
        }
        if self.elevation.dz_thresholds.iter().any(|z| !z.is_finite()) {
            return Err(InputError::invalid("elevation.dzThresholds", "must be finite"));
        }

        Ok(())
    }
}
