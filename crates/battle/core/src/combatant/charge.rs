//! Charge state machine.
//!
//! ```text
//!           charge()               charged attack
//! Ready ─────────────▶ Charging ──────────────────▶ Ready
//!
//! Cooldown (!is_charging && !can_charge) ── end of turn ──▶ Ready
//! ```
//!
//! While charging, `can_charge` stays false, so a second charge cannot be
//! declared until the pending one is delivered.

/// Charge bookkeeping for one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargeState {
    /// A charge has been declared and the next attack will be multiplied.
    pub is_charging: bool,

    /// A charge may be declared this turn.
    pub can_charge: bool,
}

impl ChargeState {
    /// Fresh state: not charging, charge available.
    pub const READY: Self = Self {
        is_charging: false,
        can_charge: true,
    };

    /// Starts a charge. Returns false and leaves the state untouched when a
    /// charge is not currently available.
    pub fn begin(&mut self) -> bool {
        if !self.can_charge {
            return false;
        }

        self.is_charging = true;
        self.can_charge = false;
        true
    }

    /// Consumes a pending charge, returning whether one was pending.
    pub fn consume(&mut self) -> bool {
        if !self.is_charging {
            return false;
        }

        self.is_charging = false;
        self.can_charge = true;
        true
    }

    /// End-of-turn refresh: a finished cooldown makes charging available again.
    pub fn refresh(&mut self) {
        if !self.is_charging && !self.can_charge {
            self.can_charge = true;
        }
    }
}

impl Default for ChargeState {
    fn default() -> Self {
        Self::READY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_fails_while_unavailable() {
        let mut state = ChargeState::READY;
        assert!(state.begin());

        let before = state;
        assert!(!state.begin());
        assert_eq!(state, before);
    }

    #[test]
    fn refresh_keeps_pending_charge() {
        let mut state = ChargeState::READY;
        state.begin();
        state.refresh();

        assert!(state.is_charging);
        assert!(!state.can_charge);
    }

    #[test]
    fn consume_clears_charge_and_cooldown() {
        let mut state = ChargeState::READY;
        state.begin();

        assert!(state.consume());
        assert_eq!(state, ChargeState::READY);
        assert!(!state.consume());
    }

    #[test]
    fn refresh_ends_cooldown() {
        let mut state = ChargeState {
            is_charging: false,
            can_charge: false,
        };
        state.refresh();
        assert!(state.can_charge);
    }
}
