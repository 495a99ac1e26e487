use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn duel_with_fixed_seed_prints_an_outcome() {
    let mut cmd = Command::cargo_bin("cli").expect("binary");
    cmd.args([
        "duel",
        "--meal-a",
        "Spaghetti:Italian:12.99:MED",
        "--meal-b",
        "Sushi:Japanese:15.49:HIGH",
        "--seed",
        "7",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("winner_name"));
}

#[test]
fn duel_rejects_malformed_meal_spec() {
    let mut cmd = Command::cargo_bin("cli").expect("binary");
    cmd.args(["duel", "--meal-a", "Spaghetti", "--meal-b", "Sushi:Japanese:15.49:HIGH"]);
    cmd.assert().failure();
}

#[test]
fn tournament_prints_a_leaderboard() {
    let mut cmd = Command::cargo_bin("cli").expect("binary");
    cmd.args(["tournament", "--battles", "6", "--seed", "11"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("win_pct"))
        .stdout(predicate::str::contains("defeats"));
}

#[test]
fn roster_dump_emits_json() {
    let mut cmd = Command::cargo_bin("cli").expect("binary");
    cmd.args(["roster-dump"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pad Thai"));
}
