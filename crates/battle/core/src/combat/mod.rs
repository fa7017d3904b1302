//! Combat resolution system.
//!
//! This module provides pure functions for resolving a single hit.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `calculate_damage`: Incoming attack scaled by a multiplier, minus defense
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;

pub use damage::{DamageMultiplier, apply_damage, calculate_damage};
