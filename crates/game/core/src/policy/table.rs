//! Tier tables: the data half of an archetype's behavior.
//!
//! # Design
//!
//! - **Tier**: `(threshold, choice, target)`. A tier matches a draw `r` when
//!   `r > threshold`, so a draw equal to a threshold lands in the lower band.
//! - **AbilityChoice**: either capability queries tried in order, or one
//!   ability named outright.
//! - **TierTable**: ordered tiers plus the knobs that differ between archetype
//!   families (affordability comparison, what a candidate-less tier does,
//!   short-circuit size and fallback target).
//!
//! The evaluator that walks a table lives in the runtime crate; this module is
//! plain data so it can be serialized and validated by content loaders.

use crate::policy::PolicyError;
use crate::state::{Ability, Capability, StatKind};

/// Flag query over an ability's capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityQuery {
    pub require: Capability,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude: Capability,
}

impl CapabilityQuery {
    /// Offensive abilities that apply no status.
    pub const PURE_OFFENSIVE: Self = Self::new(Capability::OFFENSIVE, Capability::STATUS_EFFECT);
    /// Status-applying abilities that are not defensive.
    pub const OFFENSIVE_STATUS: Self = Self::new(Capability::STATUS_EFFECT, Capability::DEFENSIVE);
    pub const DEFENSIVE: Self = Self::new(Capability::DEFENSIVE, Capability::empty());
    pub const CROWD_CONTROL: Self = Self::new(Capability::CROWD_CONTROL, Capability::empty());

    pub const fn new(require: Capability, exclude: Capability) -> Self {
        Self { require, exclude }
    }

    pub fn matches(&self, ability: &Ability) -> bool {
        ability.capabilities.contains(self.require)
            && !ability.capabilities.intersects(self.exclude)
    }
}

/// Which abilities a tier may pick from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityChoice {
    /// Queries tried in order; the first one with an affordable match wins and
    /// one of its matches is picked uniformly.
    Query(Vec<CapabilityQuery>),
    /// Exactly this ability, if owned and affordable.
    Named(String),
}

impl AbilityChoice {
    pub fn query(query: CapabilityQuery) -> Self {
        Self::Query(vec![query])
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// How a tier picks its target from the opposing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetRule {
    /// Self-targeted or targetless; the decision carries no target.
    None,
    /// Living enemy with the lowest (or highest) value of `stat`.
    Extreme { stat: StatKind, prefer_lowest: bool },
    /// Random crowd-controlled enemy, else the stat extreme.
    CrowdControlledOr { stat: StatKind, prefer_lowest: bool },
    /// Random enemy free of crowd control, else the stat extreme.
    NotCrowdControlledOr { stat: StatKind, prefer_lowest: bool },
    /// Uniformly random living enemy.
    Random,
}

impl TargetRule {
    pub const fn lowest(stat: StatKind) -> Self {
        Self::Extreme {
            stat,
            prefer_lowest: true,
        }
    }

    pub const fn highest(stat: StatKind) -> Self {
        Self::Extreme {
            stat,
            prefer_lowest: false,
        }
    }
}

/// What happens when the matched tier has no affordable candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissPolicy {
    /// Fall straight back to the base attack.
    #[default]
    BaseAttack,
    /// Keep walking the lower tiers that still match the draw.
    NextTier,
}

/// Cost comparison used by the affordability filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Affordability {
    /// `cost <= AP`
    #[default]
    AtMost,
    /// `cost < AP`
    StrictlyBelow,
}

impl Affordability {
    /// The base attack passes regardless of its cost.
    pub fn allows(&self, ability: &Ability, ability_points: u32) -> bool {
        if ability.is_base_attack() {
            return true;
        }
        match self {
            Self::AtMost => ability.cost <= ability_points,
            Self::StrictlyBelow => ability.cost < ability_points,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tier {
    /// Exclusive lower bound on the draw.
    pub threshold: f64,
    pub choice: AbilityChoice,
    pub target: TargetRule,
}

impl Tier {
    pub fn new(threshold: f64, choice: AbilityChoice, target: TargetRule) -> Self {
        Self {
            threshold,
            choice,
            target,
        }
    }

    pub fn matches(&self, draw: f64) -> bool {
        draw > self.threshold
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierTable {
    /// Evaluated top-down; thresholds strictly descending.
    pub tiers: Vec<Tier>,
    /// Affordable-ability count below which the table is skipped entirely.
    /// Zero disables the short-circuit.
    pub min_affordable: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub affordability: Affordability,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_miss: MissPolicy,
    /// Target of the base attack whenever the table falls back.
    pub fallback_target: TargetRule,
}

impl TierTable {
    pub fn new(tiers: Vec<Tier>, min_affordable: usize) -> Self {
        Self {
            tiers,
            min_affordable,
            affordability: Affordability::AtMost,
            on_miss: MissPolicy::BaseAttack,
            fallback_target: TargetRule::lowest(StatKind::Health),
        }
    }

    pub fn with_affordability(mut self, affordability: Affordability) -> Self {
        self.affordability = affordability;
        self
    }

    pub fn with_miss_policy(mut self, on_miss: MissPolicy) -> Self {
        self.on_miss = on_miss;
        self
    }

    pub fn with_fallback_target(mut self, target: TargetRule) -> Self {
        self.fallback_target = target;
        self
    }

    /// Tiers matching `draw` with their indices, top-down.
    ///
    /// Thresholds descend, so once a tier matches every later one matches
    /// too: the iterator skips the leading misses and yields the rest.
    pub fn matching(&self, draw: f64) -> impl Iterator<Item = (usize, &Tier)> {
        self.tiers
            .iter()
            .enumerate()
            .skip_while(move |(_, tier)| !tier.matches(draw))
    }

    /// Checks thresholds and choices. Loaders call this on content tables.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let mut previous: Option<f64> = None;
        for (index, tier) in self.tiers.iter().enumerate() {
            if !(0.0..=1.0).contains(&tier.threshold) {
                return Err(PolicyError::ThresholdOutOfRange {
                    index,
                    value: tier.threshold,
                });
            }
            if previous.is_some_and(|prev| tier.threshold >= prev) {
                return Err(PolicyError::ThresholdsNotDescending { index });
            }
            match &tier.choice {
                AbilityChoice::Query(queries) if queries.is_empty() => {
                    return Err(PolicyError::EmptyChoice { index });
                }
                AbilityChoice::Named(name) if name.is_empty() => {
                    return Err(PolicyError::EmptyChoice { index });
                }
                _ => {}
            }
            previous = Some(tier.threshold);
        }
        if self.fallback_target == TargetRule::None {
            return Err(PolicyError::UntargetedFallback);
        }
        Ok(())
    }
}
