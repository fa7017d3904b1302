//! Damage calculation and application.

// ============================================================================
// Damage Multiplier
// ============================================================================

/// Scaling applied to an incoming attack before defense is subtracted.
///
/// Stored as an integer percentage so the calculation stays exact
/// (`100` = full damage, `50` = halved by a defend).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageMultiplier(pub u32);

impl DamageMultiplier {
    /// No reduction.
    pub const FULL: Self = Self(100);

    /// Damage halved, as granted by a defend action.
    pub const HALVED: Self = Self(50);

    /// Creates a multiplier from a whole percentage.
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent)
    }

    /// Returns the multiplier as a whole percentage.
    pub const fn percent(self) -> u32 {
        self.0
    }

    /// Returns true if this multiplier reduces damage.
    pub const fn is_reduced(self) -> bool {
        self.0 < Self::FULL.0
    }

    /// Scales `value` by this multiplier, rounding half up.
    pub const fn scale(self, value: u32) -> u32 {
        let scaled = (value as u64 * self.0 as u64 + 50) / 100;
        if scaled > u32::MAX as u64 {
            u32::MAX
        } else {
            scaled as u32
        }
    }
}

impl Default for DamageMultiplier {
    fn default() -> Self {
        Self::FULL
    }
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// scaled = round(max(incoming_attack, 0) × multiplier)
/// final_damage = max(0, scaled - max(defense, 0))
/// ```
///
/// # Arguments
///
/// * `incoming_attack` - Attacker's total attack (already tripled if charged)
/// * `multiplier` - Defender's damage multiplier for this hit
/// * `defense` - Defender's total defense
///
/// # Returns
///
/// Final damage value, never negative
pub fn calculate_damage(incoming_attack: i32, multiplier: DamageMultiplier, defense: i32) -> u32 {
    let incoming = incoming_attack.max(0) as u32;
    let scaled = multiplier.scale(incoming);

    scaled.saturating_sub(defense.max(0) as u32)
}

/// Apply damage to current HP.
///
/// # Arguments
///
/// * `current_hp` - Current HP value
/// * `damage` - Damage to apply
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
