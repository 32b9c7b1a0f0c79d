//! Archetype behavior policies as data.
//!
//! A monster class is an [`ArchetypeKind`]; its behavior is an [`Archetype`]:
//! the item-use profile copied onto every spawned monster, plus the
//! [`TierTable`] the runtime evaluator walks each turn.
mod table;

pub use table::{
    Affordability, AbilityChoice, CapabilityQuery, MissPolicy, Tier, TierTable, TargetRule,
};

use crate::error::{ErrorSeverity, GameError};
use crate::state::HeuristicProfile;

/// Monster classes with a built-in policy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArchetypeKind {
    Controller,
    Defender,
    Punisher,
    Weakener,
    SkeletonBoss,
    SkeletonArcher,
    SkeletonSpearman,
    SkeletonWarrior,
}

/// Full behavior definition of one archetype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub profile: HeuristicProfile,
    pub table: TierTable,
}

impl Archetype {
    pub fn new(profile: HeuristicProfile, table: TierTable) -> Self {
        Self { profile, table }
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        self.profile
            .validate()
            .map_err(|err| PolicyError::InvalidProfile(err.to_string()))?;
        self.table.validate()
    }
}

/// Malformed tier tables or profiles.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("tier {index}: threshold {value} is outside [0, 1]")]
    ThresholdOutOfRange { index: usize, value: f64 },

    #[error("tier {index}: threshold must be below the previous tier's")]
    ThresholdsNotDescending { index: usize },

    #[error("tier {index}: ability choice is empty")]
    EmptyChoice { index: usize },

    #[error("fallback target rule must select a target")]
    UntargetedFallback,

    #[error("invalid heuristic profile: {0}")]
    InvalidProfile(String),
}

impl GameError for PolicyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ThresholdOutOfRange { .. } => "POLICY_THRESHOLD_OUT_OF_RANGE",
            Self::ThresholdsNotDescending { .. } => "POLICY_THRESHOLDS_NOT_DESCENDING",
            Self::EmptyChoice { .. } => "POLICY_EMPTY_CHOICE",
            Self::UntargetedFallback => "POLICY_UNTARGETED_FALLBACK",
            Self::InvalidProfile(_) => "POLICY_INVALID_PROFILE",
        }
    }
}
