use tracing::{info, warn};

use crate::error::BattleError;
use crate::meal::Meal;

pub const ARENA_CAPACITY: usize = 2;

/// Transient holder of the 0..=2 meals prepped to fight, in slot order
/// (A then B). Plain `&mut` state; the service wraps one instance in a lock
/// so prepare/battle/clear serialize against each other.
#[derive(Default)]
pub struct Arena {
    slots: Vec<Meal>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `meal` to the next open slot.
    pub fn prepare(&mut self, meal: Meal) -> Result<(), BattleError> {
        if self.slots.len() >= ARENA_CAPACITY {
            warn!(meal = %meal.name, "combatant list is full");
            return Err(BattleError::ArenaFull);
        }
        if self.slots.iter().any(|c| c.id == meal.id) {
            return Err(BattleError::Duplicate(format!(
                "Meal with ID {} already exists in combatants",
                meal.id
            )));
        }
        // Stale reference guard: a meal soft-deleted after lookup never enters.
        if meal.deleted {
            return Err(BattleError::NotFound(format!(
                "Meal with ID {} not found",
                meal.id
            )));
        }

        info!(meal = %meal.name, slot = self.slots.len(), "combatant prepped");
        self.slots.push(meal);
        Ok(())
    }

    pub fn combatants(&self) -> &[Meal] {
        &self.slots
    }

    /// Idempotent; clearing an already-empty arena is a no-op worth a warning.
    pub fn clear(&mut self) {
        if self.slots.is_empty() {
            warn!("clearing empty combatants list");
        } else {
            info!("clearing combatants list");
        }
        self.slots.clear();
    }

    pub fn is_ready(&self) -> bool {
        self.slots.len() == ARENA_CAPACITY
    }
}
