// src/battery/rule.rs
//
// Table entry types for the check battery.

use crate::pipeline::FrameContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CHECK IDENTIFIERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CheckId {
    SuppressedUntilNextVideoUpdate,
    PostProcessVideoOtc,
    MovingTowardsEgoLane,
    DepObjProbablyVideoGhost,
    StatLocHighMDopplerOutgoingVr,
    FastWnjMeasuredRatio,
    NonCrossingObject,
    MicroDopplerCheck,
    RadarOnlyRcsAndDrInnovation,
    ElevationCheck,
    InnovationCheck,
    ImplausibleVyVru,
    ImplausibleVideoTtcForVru,
    #[serde(rename = "RadarOnlyNLD")]
    RadarOnlyNld,
    RadarOnlyStationary,
}

impl CheckId {
    pub const ALL: [CheckId; 15] = [
        Self::SuppressedUntilNextVideoUpdate,
        Self::PostProcessVideoOtc,
        Self::MovingTowardsEgoLane,
        Self::DepObjProbablyVideoGhost,
        Self::StatLocHighMDopplerOutgoingVr,
        Self::FastWnjMeasuredRatio,
        Self::NonCrossingObject,
        Self::MicroDopplerCheck,
        Self::RadarOnlyRcsAndDrInnovation,
        Self::ElevationCheck,
        Self::InnovationCheck,
        Self::ImplausibleVyVru,
        Self::ImplausibleVideoTtcForVru,
        Self::RadarOnlyNld,
        Self::RadarOnlyStationary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuppressedUntilNextVideoUpdate => "SuppressedUntilNextVideoUpdate",
            Self::PostProcessVideoOtc => "PostProcessVideoOtc",
            Self::MovingTowardsEgoLane => "MovingTowardsEgoLane",
            Self::DepObjProbablyVideoGhost => "DepObjProbablyVideoGhost",
            Self::StatLocHighMDopplerOutgoingVr => "StatLocHighMDopplerOutgoingVr",
            Self::FastWnjMeasuredRatio => "FastWnjMeasuredRatio",
            Self::NonCrossingObject => "NonCrossingObject",
            Self::MicroDopplerCheck => "MicroDopplerCheck",
            Self::RadarOnlyRcsAndDrInnovation => "RadarOnlyRcsAndDrInnovation",
            Self::ElevationCheck => "ElevationCheck",
            Self::InnovationCheck => "InnovationCheck",
            Self::ImplausibleVyVru => "ImplausibleVyVru",
            Self::ImplausibleVideoTtcForVru => "ImplausibleVideoTtcForVru",
            Self::RadarOnlyNld => "RadarOnlyNLD",
            Self::RadarOnlyStationary => "RadarOnlyStationary",
        }
    }

    /// Position in [`CheckId::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown check `{s}`"))
    }
}

// ============================================================================
// CONSEQUENCES
// ============================================================================

/// Downstream function that a fired check disqualifies the object for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AffectedFunction {
    Aeb,
    Acc,
    VyDependent,
}

impl AffectedFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aeb => "AEB",
            Self::Acc => "ACC",
            Self::VyDependent => "VY_DEPENDENT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consequence {
    /// Classification only, nothing is disqualified.
    Informational,
    DisqualifiesAeb,
    DisqualifiesAebAndAcc,
    DisqualifiesVyDependent,
}

impl Consequence {
    pub fn affected_functions(&self) -> &'static [AffectedFunction] {
        match self {
            Self::Informational => &[],
            Self::DisqualifiesAeb => &[AffectedFunction::Aeb],
            Self::DisqualifiesAebAndAcc => &[AffectedFunction::Aeb, AffectedFunction::Acc],
            Self::DisqualifiesVyDependent => &[AffectedFunction::VyDependent],
        }
    }
}

// ============================================================================
// OUTCOME / RULE
// ============================================================================

/// Result of one predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Fired,
    NotFired,
    /// A gating precondition failed; carries the specific reason.
    Gated(&'static str),
}

impl Outcome {
    pub fn from_bool(fired: bool) -> Self {
        if fired {
            Self::Fired
        } else {
            Self::NotFired
        }
    }

    pub fn is_fired(&self) -> bool {
        matches!(self, Self::Fired)
    }
}

pub type Predicate = fn(&FrameContext<'_>) -> Outcome;

/// One named entry of the battery.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: CheckId,
    pub predicate: Predicate,
    pub fired_text: &'static str,
    pub not_fired_text: &'static str,
    pub consequence: Consequence,
}

impl Rule {
    /// Runs the predicate; returns whether it fired and the matching text.
    pub fn evaluate(&self, ctx: &FrameContext<'_>) -> (bool, &'static str) {
        match (self.predicate)(ctx) {
            Outcome::Fired => (true, self.fired_text),
            Outcome::NotFired => (false, self.not_fired_text),
            Outcome::Gated(reason) => (false, reason),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("consequence", &self.consequence)
            .finish()
    }
}
