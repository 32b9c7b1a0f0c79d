//! Combat resolution used by executors.
//!
//! Pure functions only: the decision layer never calls these, executors do
//! once a decision has been validated.
//!
//! - `calculate_damage`: ability magnitude against the target's defense
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;

pub use damage::{DamageParams, apply_damage, calculate_damage};
