//! Soldier and paladin ability definitions.

use game_core::{Ability, Capability, StatusKind};

pub const HAM_STRING: &str = "HamString";
pub const LUNGE: &str = "Lunge";
pub const SNIPE: &str = "Snipe";
pub const MULTI_SHOT: &str = "MultiShot";
pub const POISON_SHOT: &str = "PoisonShot";
pub const DEFEND: &str = "Defend";
pub const SHIELD_BASH: &str = "ShieldBash";
pub const HOLY_SMITE: &str = "HolySmite";
pub const HEAL: &str = "Heal";

/// Defense granted by the standard Defend.
pub const DEFEND_STRENGTH: i32 = 3;

pub fn ham_string() -> Ability {
    Ability::new(HAM_STRING, Capability::OFFENSIVE, 4, 6)
}

pub fn lunge() -> Ability {
    Ability::new(LUNGE, Capability::OFFENSIVE, 4, 5)
}

pub fn snipe() -> Ability {
    Ability::new(SNIPE, Capability::OFFENSIVE, 4, 5)
}

pub fn multi_shot() -> Ability {
    Ability::new(MULTI_SHOT, Capability::OFFENSIVE, 3, 4)
}

pub fn poison_shot() -> Ability {
    Ability::new(
        POISON_SHOT,
        Capability::OFFENSIVE | Capability::STATUS_EFFECT,
        3,
        2,
    )
    .applying(StatusKind::Poisoned)
}

/// Free self-buff raising defense until the caster's next turn.
pub fn defend(strength: i32) -> Ability {
    Ability::new(
        DEFEND,
        Capability::DEFENSIVE | Capability::STATUS_EFFECT,
        0,
        strength,
    )
    .applying(StatusKind::Defending)
}

pub fn shield_bash() -> Ability {
    Ability::new(
        SHIELD_BASH,
        Capability::OFFENSIVE | Capability::STATUS_EFFECT | Capability::CROWD_CONTROL,
        3,
        2,
    )
    .applying(StatusKind::Stunned)
}

pub fn holy_smite() -> Ability {
    Ability::new(HOLY_SMITE, Capability::OFFENSIVE, 4, 8)
}

pub fn heal() -> Ability {
    Ability::new(HEAL, Capability::DEFENSIVE, 4, 2)
}
