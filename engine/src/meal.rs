use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::BattleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(pub u64);

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    /// Score multiplier: harder-to-make meals fight less effectively.
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Low => 1.0,
            Difficulty::Med => 0.85,
            Difficulty::High => 0.7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        }
    }
}

impl FromStr for Difficulty {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            other => Err(BattleError::Validation(format!(
                "Invalid difficulty level: {other}. Must be 'LOW', 'MED', or 'HIGH'."
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
}

impl Meal {
    pub fn battles(&self) -> u64 {
        self.wins + self.losses
    }
}

#[derive(Default)]
struct StoreInner {
    meals: IndexMap<MealId, Meal>,
    next_id: u64,
}

/// Durable meal catalog with soft delete and battle stats. Interior mutex so
/// the store can be shared across threads behind `&self`; each operation is
/// one critical section, which keeps per-row stat increments lost-update free.
#[derive(Default)]
pub struct MealStore {
    inner: Mutex<StoreInner>,
}

impl MealStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(
        &self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<MealId, BattleError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(BattleError::Validation(format!(
                "Invalid price: {price}. Price must be a positive number."
            )));
        }

        let mut inner = self.locked();
        let clash = inner
            .meals
            .values()
            .any(|m| !m.deleted && m.name == name);
        if clash {
            return Err(BattleError::Duplicate(format!(
                "Meal with name '{name}' already exists"
            )));
        }

        inner.next_id += 1;
        let id = MealId(inner.next_id);
        inner.meals.insert(
            id,
            Meal {
                id,
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                price,
                difficulty,
                deleted: false,
                wins: 0,
                losses: 0,
            },
        );
        info!(%id, name, "meal created");
        Ok(id)
    }

    pub fn get_by_id(&self, id: MealId) -> Result<Meal, BattleError> {
        let inner = self.locked();
        match inner.meals.get(&id) {
            Some(m) if !m.deleted => Ok(m.clone()),
            _ => Err(BattleError::NotFound(format!("Meal with ID {id} not found"))),
        }
    }

    /// Case-preserving exact-match lookup among live meals.
    pub fn get_by_name(&self, name: &str) -> Result<Meal, BattleError> {
        let inner = self.locked();
        inner
            .meals
            .values()
            .find(|m| !m.deleted && m.name == name)
            .cloned()
            .ok_or_else(|| BattleError::NotFound(format!("Meal with name '{name}' not found")))
    }

    /// Soft delete: the meal disappears from lookups, battles, and the
    /// leaderboard, but its stat row is retained until `clear_all`.
    pub fn delete(&self, id: MealId) -> Result<(), BattleError> {
        let mut inner = self.locked();
        match inner.meals.get_mut(&id) {
            Some(m) if m.deleted => Err(BattleError::NotFound(format!(
                "Meal with ID {id} has already been deleted"
            ))),
            Some(m) => {
                m.deleted = true;
                info!(%id, "meal deleted");
                Ok(())
            }
            None => Err(BattleError::NotFound(format!("Meal with ID {id} not found"))),
        }
    }

    /// Physical wipe of catalog and stats. Reset flows only; the caller is
    /// responsible for clearing any arena slots that referenced these meals.
    pub fn clear_all(&self) {
        let mut inner = self.locked();
        let n = inner.meals.len();
        inner.meals.clear();
        info!(wiped = n, "meal catalog cleared");
    }

    /// Increment winner.wins and loser.losses in one critical section. A side
    /// that no longer resolves to a live meal (deleted mid-battle) is skipped
    /// with a warning; the battle outcome itself remains valid.
    pub fn record_result(&self, winner: MealId, loser: MealId) {
        let mut inner = self.locked();
        match inner.meals.get_mut(&winner) {
            Some(m) if !m.deleted => m.wins += 1,
            _ => warn!(%winner, "winner no longer live; dropping win increment"),
        }
        match inner.meals.get_mut(&loser) {
            Some(m) if !m.deleted => m.losses += 1,
            _ => warn!(%loser, "loser no longer live; dropping loss increment"),
        }
    }

    /// Live meals in id order (ids are assigned monotonically).
    pub fn snapshot_live(&self) -> Vec<Meal> {
        let inner = self.locked();
        inner
            .meals
            .values()
            .filter(|m| !m.deleted)
            .cloned()
            .collect()
    }
}
