use std::collections::HashSet;

use engine::content::{builtin_roster, parse_roster};
use engine::{BattleService, SortBy};

#[test]
fn builtin_roster_parses_and_names_are_unique() {
    let roster = parse_roster(builtin_roster()).expect("builtin roster parses");
    assert!(roster.len() >= 2);

    let names: HashSet<&str> = roster.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names.len(), roster.len());
    assert!(roster.iter().all(|e| e.price > 0.0));
}

#[test]
fn builtin_roster_seeds_a_service() {
    let roster = parse_roster(builtin_roster()).expect("builtin roster parses");
    let service = BattleService::with_seed(2025);
    for entry in &roster {
        service
            .create_meal(&entry.name, &entry.cuisine, entry.price, entry.difficulty)
            .expect("create");
    }
    assert_eq!(service.leaderboard(SortBy::Wins).len(), roster.len());
}
