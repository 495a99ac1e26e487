use engine::meal::{Difficulty, Meal, MealId};
use engine::{Arena, BattleError};

fn meal(id: u64, name: &str) -> Meal {
    Meal {
        id: MealId(id),
        name: name.to_string(),
        cuisine: "Test".to_string(),
        price: 10.0,
        difficulty: Difficulty::Med,
        deleted: false,
        wins: 0,
        losses: 0,
    }
}

#[test]
fn slots_fill_in_order_a_then_b() {
    let mut arena = Arena::new();
    assert!(!arena.is_ready());
    arena.prepare(meal(1, "First")).expect("slot a");
    assert!(!arena.is_ready());
    arena.prepare(meal(2, "Second")).expect("slot b");
    assert!(arena.is_ready());

    let names: Vec<&str> = arena.combatants().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn third_prepare_hits_capacity() {
    let mut arena = Arena::new();
    arena.prepare(meal(1, "A")).expect("a");
    arena.prepare(meal(2, "B")).expect("b");

    let err = arena.prepare(meal(3, "C")).unwrap_err();
    assert_eq!(err, BattleError::ArenaFull);
    assert_eq!(arena.combatants().len(), 2);

    // Capacity frees up after a clear.
    arena.clear();
    arena.prepare(meal(3, "C")).expect("after clear");
}

#[test]
fn same_meal_cannot_occupy_two_slots() {
    let mut arena = Arena::new();
    arena.prepare(meal(1, "A")).expect("a");
    let err = arena.prepare(meal(1, "A")).unwrap_err();
    assert!(matches!(err, BattleError::Duplicate(_)));
    assert_eq!(arena.combatants().len(), 1);
}

#[test]
fn stale_deleted_meal_rejected() {
    let mut arena = Arena::new();
    let mut stale = meal(7, "Ghost");
    stale.deleted = true;
    let err = arena.prepare(stale).unwrap_err();
    assert!(matches!(err, BattleError::NotFound(_)));
    assert!(arena.combatants().is_empty());
}

#[test]
fn clear_is_idempotent() {
    let mut arena = Arena::new();
    arena.clear();
    arena.prepare(meal(1, "A")).expect("a");
    arena.clear();
    assert!(arena.combatants().is_empty());
    arena.clear();
    assert!(arena.combatants().is_empty());
}
