//! The player's mutable state for one voyage.
//!
//! A single [`GameState`] is created at session start and threaded through
//! every scene. Numeric state changes only through the two narrow mutators
//! [`GameState::apply_stat_delta`] and
//! [`GameState::apply_relationship_delta`], both of which clamp on every
//! call, so the bounds invariants hold at every observation point.

use std::collections::HashMap;

use crate::scene::Ending;

/// Upper bound for health, sanity, reputation, and relationship counters.
pub const STAT_CEILING: i32 = 100;

/// Lower bound for relationship counters.
pub const RELATIONSHIP_FLOOR: i32 = -100;

/// The five crew members a relationship counter is kept for.
///
/// Deltas against any other name are silently ignored.
pub const CREW: [&str; 5] = ["Queequeg", "Ahab", "Starbuck", "Stubb", "Flask"];

/// The story milestones tracked as boolean flags.
///
/// Flags start false and are only ever raised, never reset.
pub const MILESTONES: [&str; 8] = [
    "met_queequeg",
    "signed_pequod",
    "heard_prophecy",
    "ahab_revealed",
    "first_whale",
    "pip_incident",
    "typhoon_survived",
    "final_chase",
];

/// A bundle of stat adjustments applied in one step.
///
/// Components default to zero; scene tables build deltas with the
/// const `with_*` methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatDelta {
    /// Change to health.
    pub health: i32,
    /// Change to sanity.
    pub sanity: i32,
    /// Change to reputation.
    pub reputation: i32,
    /// Change to money.
    pub money: i32,
}

impl StatDelta {
    /// The zero delta.
    pub const NONE: StatDelta = StatDelta {
        health: 0,
        sanity: 0,
        reputation: 0,
        money: 0,
    };

    /// Replace the health component.
    pub const fn with_health(mut self, delta: i32) -> Self {
        self.health = delta;
        self
    }

    /// Replace the sanity component.
    pub const fn with_sanity(mut self, delta: i32) -> Self {
        self.sanity = delta;
        self
    }

    /// Replace the reputation component.
    pub const fn with_reputation(mut self, delta: i32) -> Self {
        self.reputation = delta;
        self
    }

    /// Replace the money component.
    pub const fn with_money(mut self, delta: i32) -> Self {
        self.money = delta;
        self
    }
}

/// The full mutable state of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Bodily condition, clamped to `[0, 100]`. Reaching 0 ends the voyage.
    pub health: i32,
    /// Mental condition, clamped to `[0, 100]`. Reaching 0 ends the voyage.
    pub sanity: i32,
    /// Standing among the crew, clamped to `[0, 100]`.
    pub reputation: i32,
    /// Dollars in hand, floored at 0 with no ceiling.
    pub money: i32,
    /// Carried items, in acquisition order. Append-only.
    pub inventory: Vec<String>,
    /// Per-crewmate relationship counters, clamped to `[-100, 100]`.
    pub relationships: HashMap<String, i32>,
    /// Story milestone flags, raised once and never reset.
    pub flags: HashMap<String, bool>,
    /// Advisory progress marker. Scene identity, not this, drives branching.
    pub current_chapter: u32,
    /// Set once when a terminal scene runs.
    pub ending: Option<Ending>,
}

impl GameState {
    /// Create the session-start state: a young sailor with a thin purse,
    /// two possessions, and no reputation either way among the crew.
    pub fn new() -> Self {
        Self {
            health: 100,
            sanity: 100,
            reputation: 50,
            money: 20,
            inventory: vec!["worn clothes".to_string(), "small knife".to_string()],
            relationships: CREW.iter().map(|&name| (name.to_string(), 0)).collect(),
            flags: MILESTONES
                .iter()
                .map(|&name| (name.to_string(), false))
                .collect(),
            current_chapter: 1,
            ending: None,
        }
    }

    /// Add each component of `delta` to the matching stat, then clamp.
    ///
    /// Total over all integer inputs: out-of-range results are absorbed by
    /// the clamp, never reported.
    pub fn apply_stat_delta(&mut self, delta: StatDelta) {
        self.health = self.health.saturating_add(delta.health).clamp(0, STAT_CEILING);
        self.sanity = self.sanity.saturating_add(delta.sanity).clamp(0, STAT_CEILING);
        self.reputation = self
            .reputation
            .saturating_add(delta.reputation)
            .clamp(0, STAT_CEILING);
        self.money = self.money.saturating_add(delta.money).max(0);
    }

    /// Shift the relationship with `character` by `delta`, clamped to
    /// `[-100, 100]`. A name outside [`CREW`] is a silent no-op.
    pub fn apply_relationship_delta(&mut self, character: &str, delta: i32) {
        if let Some(value) = self.relationships.get_mut(character) {
            *value = value
                .saturating_add(delta)
                .clamp(RELATIONSHIP_FLOOR, STAT_CEILING);
        }
    }

    /// Current relationship counter for `character` (0 for unknown names).
    pub fn relationship(&self, character: &str) -> i32 {
        self.relationships.get(character).copied().unwrap_or(0)
    }

    /// Raise a milestone flag. A name outside [`MILESTONES`] is a silent
    /// no-op; a flag once raised stays raised.
    pub fn raise_flag(&mut self, milestone: &str) {
        if let Some(value) = self.flags.get_mut(milestone) {
            *value = true;
        }
    }

    /// Whether a milestone flag has been raised (false for unknown names).
    pub fn flag(&self, milestone: &str) -> bool {
        self.flags.get(milestone).copied().unwrap_or(false)
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Record the reached ending. The first recorded ending wins; later
    /// calls change nothing.
    pub fn record_ending(&mut self, ending: Ending) {
        self.ending.get_or_insert(ending);
    }

    /// Note the chapter the walker has reached.
    pub fn enter_chapter(&mut self, chapter: u32) {
        self.current_chapter = chapter;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
