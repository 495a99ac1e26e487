use std::time::SystemTime;

use serde::Serialize;
use tracing::info;

use crate::RandomSource;
use crate::arena::Arena;
use crate::error::BattleError;
use crate::meal::{Meal, MealId, MealStore};

/// What a resolved battle reports back. Transient: only the stat increments
/// it already applied are durable.
#[derive(Debug, Clone, Serialize)]
pub struct BattleOutcome {
    pub winner_id: MealId,
    pub winner_name: String,
    pub loser_id: MealId,
    pub loser_name: String,
    /// Probability that slot A won, in (0, 1).
    pub win_prob_a: f64,
    /// The uniform draw in [0, 1) compared against `win_prob_a`.
    pub roll: f64,
    pub at: SystemTime,
}

/// Fighting strength of a meal: strictly increasing in price, scaled by the
/// cuisine name length, taxed by difficulty (LOW >= MED >= HIGH at equal
/// price). Positive for any meal that passed create-time validation.
pub fn battle_score(meal: &Meal) -> f64 {
    let cuisine_weight = meal.cuisine.chars().count().max(1) as f64;
    meal.price * cuisine_weight * meal.difficulty.multiplier()
}

/// Resolve a battle between the two prepped combatants: score both, draw a
/// winner, record the result, and empty the arena.
pub fn resolve(
    arena: &mut Arena,
    store: &MealStore,
    rng: &mut dyn RandomSource,
) -> Result<BattleOutcome, BattleError> {
    info!("Two meals enter, one meal leaves!");

    if !arena.is_ready() {
        // Leaves any lone combatant prepped.
        return Err(BattleError::InsufficientCombatants);
    }
    let a = arena.combatants()[0].clone();
    let b = arena.combatants()[1].clone();
    info!(a = %a.name, b = %b.name, "battle started");

    let score_a = battle_score(&a);
    let score_b = battle_score(&b);
    info!(meal = %a.name, score = score_a, "battle score");
    info!(meal = %b.name, score = score_b, "battle score");
    if score_a <= 0.0 || score_b <= 0.0 {
        return Err(BattleError::Invariant(format!(
            "non-positive battle score ({score_a} vs {score_b})"
        )));
    }

    let win_prob_a = score_a / (score_a + score_b);
    let roll = rng.next();
    info!(win_prob_a, roll, "drawing winner");

    let (winner, loser) = if roll < win_prob_a { (a, b) } else { (b, a) };
    info!(winner = %winner.name, "the winner is decided");

    // Drop-and-log inside: a side deleted mid-battle loses its increment only.
    store.record_result(winner.id, loser.id);

    // Unconditional, so the arena never retains stale combatants.
    arena.clear();

    Ok(BattleOutcome {
        winner_id: winner.id,
        winner_name: winner.name,
        loser_id: loser.id,
        loser_name: loser.name,
        win_prob_a,
        roll,
        at: SystemTime::now(),
    })
}
