use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::meal::Difficulty;

/// One meal in a roster file, before it enters the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

pub fn builtin_roster() -> &'static str {
    include_str!("../content/roster.json")
}

pub fn parse_roster(text: &str) -> Result<Vec<RosterEntry>> {
    serde_json::from_str(text).context("failed to parse roster JSON")
}

pub fn load_roster(path: &str) -> Result<Vec<RosterEntry>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read roster JSON: {path}"))?;
    parse_roster(&text)
}
