use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use engine::content::{RosterEntry, builtin_roster, load_roster, parse_roster};
use engine::{BattleService, Difficulty, MealId, SortBy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, ValueEnum)]
enum Sort {
    Wins,
    WinPct,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create two meals, prep both, and resolve a single battle
    Duel {
        /// Slot A combatant as name:cuisine:price:difficulty
        #[arg(long)]
        meal_a: String,
        /// Slot B combatant as name:cuisine:price:difficulty
        #[arg(long)]
        meal_b: String,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Pretty-print the outcome JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Seed a roster, run repeated battles, and print the leaderboard
    Tournament {
        /// Path to a roster JSON file (defaults to the built-in roster)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Number of battles to run
        #[arg(long, default_value_t = 20)]
        battles: u32,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Leaderboard ordering
        #[arg(long, value_enum, default_value_t = Sort::WinPct)]
        sort: Sort,
    },
    /// Print the built-in sample roster JSON (stdout)
    RosterDump {
        /// Pretty-print JSON
        #[arg(long, default_value_t = true)]
        pretty: bool,
    },
}

#[derive(Parser)]
#[command(name = "mealbattle-cli")]
#[command(about = "Meal battle CLI harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn to_sort(s: Sort) -> SortBy {
    match s {
        Sort::Wins => SortBy::Wins,
        Sort::WinPct => SortBy::WinPct,
    }
}

/// Parse "name:cuisine:price:difficulty" into a roster entry.
fn parse_meal_spec(spec: &str) -> anyhow::Result<RosterEntry> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [name, cuisine, price, difficulty] = parts.as_slice() else {
        bail!("meal spec '{spec}' must be name:cuisine:price:difficulty");
    };
    let price: f64 = price
        .trim()
        .parse()
        .with_context(|| format!("bad price in meal spec '{spec}'"))?;
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(RosterEntry {
        name: name.trim().to_string(),
        cuisine: cuisine.trim().to_string(),
        price,
        difficulty,
    })
}

fn roster_from(file: Option<&PathBuf>) -> anyhow::Result<Vec<RosterEntry>> {
    match file {
        Some(path) => load_roster(&path.to_string_lossy()),
        None => parse_roster(builtin_roster()),
    }
}

fn seed_meals(service: &BattleService, roster: &[RosterEntry]) -> anyhow::Result<Vec<MealId>> {
    let mut ids = Vec::with_capacity(roster.len());
    for entry in roster {
        let id = service.create_meal(&entry.name, &entry.cuisine, entry.price, entry.difficulty)?;
        ids.push(id);
    }
    Ok(ids)
}

fn print_leaderboard(service: &BattleService, sort: SortBy) {
    println!("{:>4}  {:<24} {:<10} {:>6} {:>5} {:>7} {:>8}", "rank", "meal", "cuisine", "diff", "wins", "losses", "win_pct");
    for (rank, row) in service.leaderboard(sort).iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:<10} {:>6} {:>5} {:>7} {:>7.1}%",
            rank + 1,
            row.name,
            row.cuisine,
            row.difficulty.as_str(),
            row.wins,
            row.losses,
            row.win_pct * 100.0
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Duel {
            meal_a,
            meal_b,
            seed,
            pretty,
        } => {
            let a = parse_meal_spec(&meal_a)?;
            let b = parse_meal_spec(&meal_b)?;

            let service = BattleService::with_seed(seed);
            let id_a = service.create_meal(&a.name, &a.cuisine, a.price, a.difficulty)?;
            let id_b = service.create_meal(&b.name, &b.cuisine, b.price, b.difficulty)?;
            service.prep_combatant_by_id(id_a)?;
            service.prep_combatant_by_id(id_b)?;

            let outcome = service.battle()?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", serde_json::to_string(&outcome)?);
            }
        }
        Cmd::Tournament {
            file,
            battles,
            seed,
            sort,
        } => {
            let roster = roster_from(file.as_ref())?;
            if roster.len() < 2 {
                bail!("tournament needs at least two meals, roster has {}", roster.len());
            }

            let service = BattleService::with_seed(seed);
            let ids = seed_meals(&service, &roster)?;

            // Deterministic round-robin pairings, cycled until the requested
            // number of battles has run.
            let mut pairs = Vec::new();
            for i in 0..ids.len() {
                for j in (i + 1)..ids.len() {
                    pairs.push((ids[i], ids[j]));
                }
            }

            for n in 0..battles {
                let (a, b) = pairs[n as usize % pairs.len()];
                service.prep_combatant_by_id(a)?;
                service.prep_combatant_by_id(b)?;
                let outcome = service.battle()?;
                println!(
                    "battle {:>3}: {} defeats {} (p_a={:.3}, r={:.3})",
                    n + 1,
                    outcome.winner_name,
                    outcome.loser_name,
                    outcome.win_prob_a,
                    outcome.roll
                );
            }

            println!();
            print_leaderboard(&service, to_sort(sort));
        }
        Cmd::RosterDump { pretty } => {
            let roster: serde_json::Value = serde_json::from_str(builtin_roster())?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            } else {
                println!("{}", serde_json::to_string(&roster)?);
            }
        }
    }
    Ok(())
}
