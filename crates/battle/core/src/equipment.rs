//! Equipment carried into battle.
//!
//! Weapons and armor are closed sets of variants with fixed modifiers. A
//! combatant holds at most one of each; equipping a new piece replaces the
//! old one rather than stacking with it.

/// Weapon types and the offensive modifiers they grant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    /// Quick and precise strikes.
    Dagger,
    /// Balanced offensive weapon.
    Sword,
    /// Devastating but slow attacks.
    BattleAxe,
}

impl WeaponKind {
    /// Display name of the weapon.
    pub const fn name(&self) -> &'static str {
        match self {
            WeaponKind::Dagger => "Dagger",
            WeaponKind::Sword => "Sword",
            WeaponKind::BattleAxe => "Battle Axe",
        }
    }

    /// Flavor text shown when picking equipment.
    pub const fn description(&self) -> &'static str {
        match self {
            WeaponKind::Dagger => "Quick and precise strikes",
            WeaponKind::Sword => "Balanced offensive weapon",
            WeaponKind::BattleAxe => "Devastating but slow attacks",
        }
    }

    /// Fixed stat modifiers of this weapon.
    pub const fn modifier(&self) -> WeaponModifier {
        let (attack_bonus, speed_penalty) = match self {
            WeaponKind::Dagger => (20, 0),
            WeaponKind::Sword => (30, -10),
            WeaponKind::BattleAxe => (40, -20),
        };

        WeaponModifier {
            name: self.name(),
            attack_bonus,
            speed_penalty,
        }
    }
}

/// Armor types and the defensive modifiers they grant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorKind {
    /// Swift and agile protection.
    Light,
    /// Balanced defense and mobility.
    Medium,
    /// Maximum protection, reduced speed.
    Heavy,
}

impl ArmorKind {
    /// Display name of the armor.
    pub const fn name(&self) -> &'static str {
        match self {
            ArmorKind::Light => "Light Armor",
            ArmorKind::Medium => "Medium Armor",
            ArmorKind::Heavy => "Heavy Armor",
        }
    }

    /// Flavor text shown when picking equipment.
    pub const fn description(&self) -> &'static str {
        match self {
            ArmorKind::Light => "Swift and agile protection",
            ArmorKind::Medium => "Balanced defense and mobility",
            ArmorKind::Heavy => "Maximum protection, reduced speed",
        }
    }

    /// Fixed stat modifiers of this armor.
    pub const fn modifier(&self) -> ArmorModifier {
        let (defense_bonus, speed_penalty) = match self {
            ArmorKind::Light => (20, -5),
            ArmorKind::Medium => (30, -15),
            ArmorKind::Heavy => (40, -25),
        };

        ArmorModifier {
            name: self.name(),
            defense_bonus,
            speed_penalty,
        }
    }
}

/// Offensive modifier granted by a weapon.
///
/// `speed_penalty` is stored as a signed delta (usually zero or negative)
/// and added to the wearer's base speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponModifier {
    pub name: &'static str,
    pub attack_bonus: i32,
    pub speed_penalty: i32,
}

/// Defensive modifier granted by armor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmorModifier {
    pub name: &'static str,
    pub defense_bonus: i32,
    pub speed_penalty: i32,
}

/// Equipment worn by a combatant.
///
/// Chosen once before the battle starts and never mutated by the battle
/// itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    /// Currently equipped weapon.
    pub weapon: Option<WeaponKind>,

    /// Currently equipped armor.
    pub armor: Option<ArmorKind>,
}

impl Loadout {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a loadout.
    pub fn builder() -> LoadoutBuilder {
        LoadoutBuilder::default()
    }

    /// Equips a weapon, returning the previously equipped weapon if any.
    pub fn equip_weapon(&mut self, weapon: WeaponKind) -> Option<WeaponKind> {
        self.weapon.replace(weapon)
    }

    /// Equips armor, returning the previously equipped armor if any.
    pub fn equip_armor(&mut self, armor: ArmorKind) -> Option<ArmorKind> {
        self.armor.replace(armor)
    }

    /// Attack bonus contributed by the weapon (0 when unarmed).
    pub fn attack_bonus(&self) -> i32 {
        self.weapon.map_or(0, |weapon| weapon.modifier().attack_bonus)
    }

    /// Defense bonus contributed by the armor (0 when unarmored).
    pub fn defense_bonus(&self) -> i32 {
        self.armor.map_or(0, |armor| armor.modifier().defense_bonus)
    }

    /// Combined speed delta of weapon and armor.
    pub fn speed_delta(&self) -> i32 {
        let weapon = self.weapon.map_or(0, |weapon| weapon.modifier().speed_penalty);
        let armor = self.armor.map_or(0, |armor| armor.modifier().speed_penalty);
        weapon + armor
    }
}

/// Builder for constructing a loadout.
#[derive(Default)]
pub struct LoadoutBuilder {
    weapon: Option<WeaponKind>,
    armor: Option<ArmorKind>,
}

impl LoadoutBuilder {
    /// Sets the weapon.
    pub fn weapon(mut self, weapon: WeaponKind) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Sets the armor.
    pub fn armor(mut self, armor: ArmorKind) -> Self {
        self.armor = Some(armor);
        self
    }

    /// Builds the loadout.
    pub fn build(self) -> Loadout {
        Loadout {
            weapon: self.weapon,
            armor: self.armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn equipping_replaces_instead_of_stacking() {
        let mut loadout = Loadout::builder().weapon(WeaponKind::Dagger).build();

        let previous = loadout.equip_weapon(WeaponKind::BattleAxe);

        assert_eq!(previous, Some(WeaponKind::Dagger));
        assert_eq!(loadout.attack_bonus(), 40);
        assert_eq!(loadout.speed_delta(), -20);
    }

    #[test]
    fn empty_loadout_contributes_nothing() {
        let loadout = Loadout::empty();
        assert_eq!(loadout.attack_bonus(), 0);
        assert_eq!(loadout.defense_bonus(), 0);
        assert_eq!(loadout.speed_delta(), 0);
    }

    #[test]
    fn dagger_and_light_armor_modifiers() {
        let loadout = Loadout::builder()
            .weapon(WeaponKind::Dagger)
            .armor(ArmorKind::Light)
            .build();

        assert_eq!(loadout.attack_bonus(), 20);
        assert_eq!(loadout.defense_bonus(), 20);
        assert_eq!(loadout.speed_delta(), -5);
    }

    #[test]
    fn heavier_gear_never_speeds_up() {
        for armor in ArmorKind::iter() {
            assert!(armor.modifier().speed_penalty <= 0, "{armor} speeds up");
        }
        for weapon in WeaponKind::iter() {
            assert!(weapon.modifier().speed_penalty <= 0, "{weapon} speeds up");
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("battle_axe".parse::<WeaponKind>(), Ok(WeaponKind::BattleAxe));
        assert_eq!("HEAVY".parse::<ArmorKind>(), Ok(ArmorKind::Heavy));
        assert!("shield".parse::<ArmorKind>().is_err());
    }
}
