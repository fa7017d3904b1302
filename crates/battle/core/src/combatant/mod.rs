//! Combatants - the two sides of a battle.
//!
//! A [`Combatant`] stores only its base stats, equipment, current HP and the
//! modifiers accumulated from the environment. Total stats are recomputed on
//! every call and never cached:
//!
//! ```text
//! total_attack  = base.attack + environment.attack_bonus + weapon.attack_bonus
//! total_defense = max(0, base.defense + armor.defense_bonus - environment.defense_penalty)
//! total_speed   = max(1, base.speed + armor.speed_penalty + weapon.speed_penalty)
//! ```
//!
//! Invariant: `0 <= current_hp <= max_hp`. A combatant at 0 HP is dead: it
//! takes no further actions and receives no further environment effects.

mod charge;
mod opponent;

pub use charge::ChargeState;
pub use opponent::OpponentKind;

use crate::action::{ActionUnavailable, PlayerAction};
use crate::combat::{DamageMultiplier, apply_damage, calculate_damage};
use crate::config::BattleConfig;
use crate::environment::{Environment, EnvironmentEffect};
use crate::equipment::Loadout;

/// Minimum total speed, regardless of equipment penalties.
const MIN_SPEED: i32 = 1;

/// Which side of the battle a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other side.
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Unmodified stat line of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl BaseStats {
    /// The player warrior before equipment.
    pub const WARRIOR: Self = Self::new(100, 1, 1, 50);

    pub const fn new(max_hp: u32, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            max_hp,
            attack,
            defense,
            speed,
        }
    }
}

/// Modifiers accumulated from the environment over the course of a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentModifiers {
    pub attack_bonus: i32,
    pub defense_penalty: i32,
    /// HP drained by the environment so far.
    pub hp_lost: u32,
}

/// Result of one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Attack value before the defender's multiplier and defense.
    pub incoming_attack: i32,

    /// Damage dealt by the hit: `max(0, round(incoming * multiplier) - defense)`.
    /// Not capped by the target's remaining HP.
    pub damage: u32,

    /// HP actually removed from the target (at most its remaining HP).
    pub hp_lost: u32,

    /// Whether a pending charge was consumed by this attack.
    pub charged: bool,

    /// Multiplier applied for the defender.
    pub multiplier: DamageMultiplier,

    /// Target HP after the hit.
    pub target_hp: u32,
}

/// One side of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    side: Side,
    base: BaseStats,
    loadout: Loadout,
    current_hp: u32,
    environment: EnvironmentModifiers,
    charge: ChargeState,
}

impl Combatant {
    /// Creates a combatant at full HP.
    pub fn new(name: impl Into<String>, side: Side, base: BaseStats, loadout: Loadout) -> Self {
        Self {
            name: name.into(),
            side,
            base,
            loadout,
            current_hp: base.max_hp,
            environment: EnvironmentModifiers::default(),
            charge: ChargeState::READY,
        }
    }

    /// Creates the player warrior wearing `loadout`.
    pub fn warrior(loadout: Loadout) -> Self {
        Self::new("Warrior", Side::Player, BaseStats::WARRIOR, loadout)
    }

    /// Creates an opponent from the catalog.
    pub fn opponent(kind: OpponentKind) -> Self {
        Self::new(kind.name(), Side::Opponent, kind.base_stats(), Loadout::empty())
    }

    /// Overrides current HP (clamped to `max_hp`).
    pub fn with_current_hp(mut self, hp: u32) -> Self {
        self.current_hp = hp.min(self.base.max_hp);
        self
    }

    pub(crate) fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.base.max_hp
    }

    /// Check if combatant is alive (HP > 0)
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn is_charging(&self) -> bool {
        self.charge.is_charging
    }

    pub fn can_charge(&self) -> bool {
        self.charge.can_charge
    }

    pub fn charge_state(&self) -> ChargeState {
        self.charge
    }

    pub fn environment_modifiers(&self) -> &EnvironmentModifiers {
        &self.environment
    }

    // ========================================================================
    // Derived stats
    // ========================================================================

    pub fn total_attack(&self) -> i32 {
        self.base.attack + self.environment.attack_bonus + self.loadout.attack_bonus()
    }

    pub fn total_defense(&self) -> i32 {
        let defense =
            self.base.defense + self.loadout.defense_bonus() - self.environment.defense_penalty;
        defense.max(0)
    }

    pub fn total_speed(&self) -> i32 {
        (self.base.speed + self.loadout.speed_delta()).max(MIN_SPEED)
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Checks whether `action` may be declared in the current state.
    pub fn can_choose(&self, action: PlayerAction) -> Result<(), ActionUnavailable> {
        match action {
            PlayerAction::Attack | PlayerAction::Defend => Ok(()),
            PlayerAction::Charge if self.charge.can_charge => Ok(()),
            PlayerAction::Charge if self.charge.is_charging => {
                Err(ActionUnavailable::AlreadyCharging)
            }
            PlayerAction::Charge => Err(ActionUnavailable::ChargeOnCooldown),
        }
    }

    /// Attacks `target`.
    ///
    /// A pending charge multiplies total attack by `rules.charge_multiplier`
    /// and is consumed. The target's `multiplier` (halved when defending) is
    /// applied before its defense is subtracted.
    pub fn attack(
        &mut self,
        target: &mut Combatant,
        multiplier: DamageMultiplier,
        rules: &BattleConfig,
    ) -> AttackOutcome {
        let charged = self.charge.consume();
        let incoming_attack = if charged {
            self.total_attack().saturating_mul(rules.charge_multiplier)
        } else {
            self.total_attack()
        };

        let damage = calculate_damage(incoming_attack, multiplier, target.total_defense());
        let hp_lost = target.take_damage(damage);

        AttackOutcome {
            incoming_attack,
            damage,
            hp_lost,
            charged,
            multiplier,
            target_hp: target.current_hp,
        }
    }

    /// Raises guard. Returns the multiplier for damage received this turn.
    pub fn defend(&self, rules: &BattleConfig) -> DamageMultiplier {
        rules.defend_multiplier()
    }

    /// Declares a charge. Fails without changing state when unavailable.
    pub fn charge(&mut self) -> bool {
        self.charge.begin()
    }

    /// Removes `damage` HP (floored at 0) and returns the HP actually lost.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = apply_damage(self.current_hp, damage);
        before - self.current_hp
    }

    /// Applies one turn of `environment` to this combatant.
    ///
    /// Dead combatants are unaffected. Returns the effect actually applied.
    pub fn apply_environment_effect(&mut self, environment: Environment) -> EnvironmentEffect {
        if !self.is_alive() {
            return EnvironmentEffect::NONE;
        }

        let effect = environment.effect_for(self.side);
        let hp_lost = self.take_damage(effect.hp_loss);
        self.environment.hp_lost += hp_lost;
        self.environment.attack_bonus += effect.attack_gain;
        self.environment.defense_penalty += effect.defense_loss;

        EnvironmentEffect {
            hp_loss: hp_lost,
            ..effect
        }
    }

    /// End-of-turn charge refresh.
    pub fn update_charge_availability(&mut self) {
        self.charge.refresh();
    }

    /// Read-only view for presentation layers.
    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            name: self.name.clone(),
            side: self.side,
            current_hp: self.current_hp,
            max_hp: self.base.max_hp,
            attack: self.total_attack(),
            defense: self.total_defense(),
            speed: self.total_speed(),
            is_charging: self.charge.is_charging,
            can_charge: self.charge.can_charge,
        }
    }
}

/// Point-in-time view of a combatant's totals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSnapshot {
    pub name: String,
    pub side: Side,
    pub current_hp: u32,
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub is_charging: bool,
    pub can_charge: bool,
}
