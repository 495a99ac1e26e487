use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::arena::Arena;
use crate::battle::{BattleOutcome, resolve};
use crate::error::BattleError;
use crate::leaderboard::{LeaderboardRow, SortBy, leaderboard};
use crate::meal::{Difficulty, Meal, MealId, MealStore};
use crate::{ChaChaRandom, RandomSource};

struct ArenaCell {
    arena: Arena,
    rng: Box<dyn RandomSource + Send>,
}

/// The upward API surface a boundary layer (HTTP or CLI) calls into.
///
/// One instance per logical arena. The arena and the random source live
/// behind a single mutex, so a battle's read-score-draw-record-clear sequence
/// is one critical section and concurrent prepares can never double-fill a
/// slot. Construct per test for isolation; share via `Arc` in a server.
pub struct BattleService {
    store: MealStore,
    cell: Mutex<ArenaCell>,
}

impl BattleService {
    pub fn new(rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            store: MealStore::new(),
            cell: Mutex::new(ArenaCell {
                arena: Arena::new(),
                rng,
            }),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Box::new(ChaChaRandom::from_seed(seed)))
    }

    pub fn from_entropy() -> Self {
        Self::new(Box::new(ChaChaRandom::from_entropy()))
    }

    fn locked(&self) -> MutexGuard<'_, ArenaCell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /* ---------------- catalog ---------------- */

    pub fn create_meal(
        &self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<MealId, BattleError> {
        self.store.create(name, cuisine, price, difficulty)
    }

    pub fn get_meal_by_id(&self, id: MealId) -> Result<Meal, BattleError> {
        self.store.get_by_id(id)
    }

    pub fn get_meal_by_name(&self, name: &str) -> Result<Meal, BattleError> {
        self.store.get_by_name(name)
    }

    /// Soft delete. Succeeds even while the meal sits in an arena slot; the
    /// slot goes stale and the battle's bookkeeping drops that side.
    pub fn delete_meal(&self, id: MealId) -> Result<(), BattleError> {
        self.store.delete(id)
    }

    /// Full catalog wipe. Also empties the arena, whose slot references would
    /// otherwise dangle.
    pub fn clear_meals(&self) {
        self.store.clear_all();
        self.locked().arena.clear();
    }

    /* ---------------- arena ---------------- */

    pub fn prep_combatant_by_id(&self, id: MealId) -> Result<(), BattleError> {
        let meal = self.store.get_by_id(id)?;
        self.locked().arena.prepare(meal)
    }

    pub fn prep_combatant_by_name(&self, name: &str) -> Result<(), BattleError> {
        let meal = self.store.get_by_name(name)?;
        self.locked().arena.prepare(meal)
    }

    pub fn list_combatants(&self) -> Vec<Meal> {
        self.locked().arena.combatants().to_vec()
    }

    pub fn clear_combatants(&self) {
        self.locked().arena.clear();
    }

    /* ---------------- battle & leaderboard ---------------- */

    pub fn battle(&self) -> Result<BattleOutcome, BattleError> {
        let mut cell = self.locked();
        let ArenaCell { arena, rng } = &mut *cell;
        resolve(arena, &self.store, rng.as_mut())
    }

    pub fn leaderboard(&self, sort: SortBy) -> Vec<LeaderboardRow> {
        leaderboard(&self.store, sort)
    }

    pub fn store(&self) -> &MealStore {
        &self.store
    }
}
