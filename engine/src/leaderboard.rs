use serde::{Deserialize, Serialize};

use crate::meal::{Difficulty, Meal, MealId, MealStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Wins,
    WinPct,
}

/// Derived ranking entry, recomputed per query and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub id: MealId,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub wins: u64,
    pub losses: u64,
    pub battles: u64,
    pub win_pct: f64,
}

impl LeaderboardRow {
    fn from_meal(meal: Meal) -> Self {
        let battles = meal.battles();
        let win_pct = if battles > 0 {
            meal.wins as f64 / battles as f64
        } else {
            0.0
        };
        Self {
            id: meal.id,
            name: meal.name,
            cuisine: meal.cuisine,
            price: meal.price,
            difficulty: meal.difficulty,
            wins: meal.wins,
            losses: meal.losses,
            battles,
            win_pct,
        }
    }
}

/// Rank all live meals, zero-battle meals included (they carry win_pct 0 and
/// therefore sort after every meal with a recorded win). Ties break by
/// descending wins, then ascending id, for full determinism.
pub fn leaderboard(store: &MealStore, sort: SortBy) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = store
        .snapshot_live()
        .into_iter()
        .map(LeaderboardRow::from_meal)
        .collect();

    match sort {
        SortBy::WinPct => rows.sort_by(|a, b| {
            b.win_pct
                .total_cmp(&a.win_pct)
                .then(b.wins.cmp(&a.wins))
                .then(a.id.cmp(&b.id))
        }),
        SortBy::Wins => rows.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then(b.win_pct.total_cmp(&a.win_pct))
                .then(a.id.cmp(&b.id))
        }),
    }
    rows
}
