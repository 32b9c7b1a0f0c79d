use std::fmt;

/// Stable identifier for a combatant, unique across both sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl CombatantId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer resource meter (health, ability points) tracked per combatant.
///
/// Invariant: `current <= maximum`. Constructors clamp, mutators saturate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter starting at its maximum.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// `current / maximum`, or `None` for a zero-capacity meter.
    pub fn fraction(&self) -> Option<f64> {
        if self.maximum == 0 {
            None
        } else {
            Some(f64::from(self.current) / f64::from(self.maximum))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    /// Sets the current value, clamped to the maximum.
    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }

    /// Applies a signed delta, saturating at zero and at the maximum.
    pub fn apply_delta(&mut self, delta: i32) {
        let next = i64::from(self.current) + i64::from(delta);
        self.current = next.clamp(0, i64::from(self.maximum)) as u32;
    }
}
