use thiserror::Error;

/// Typed failures surfaced to the boundary layer. Each variant maps to a
/// distinct user-facing condition, so callers can translate by kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BattleError {
    /// Bad input shape or range; the caller can correct and retry.
    #[error("{0}")]
    Validation(String),

    /// Unknown id/name, or one that resolves only to a soft-deleted meal.
    #[error("{0}")]
    NotFound(String),

    /// Unique-constraint violation: duplicate meal name, or a meal that
    /// already occupies an arena slot.
    #[error("{0}")]
    Duplicate(String),

    #[error("Combatant list is full, cannot add more combatants.")]
    ArenaFull,

    #[error("Two combatants must be prepped for a battle.")]
    InsufficientCombatants,

    /// Should be unreachable given validated inputs; indicates a bug.
    #[error("invariant violated: {0}")]
    Invariant(String),
}
