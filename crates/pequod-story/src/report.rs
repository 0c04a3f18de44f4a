//! Final report formatting.
//!
//! One stat block, two headings: the ending label for a finished voyage,
//! the forcing reason for a game over. The relationship section lists
//! Queequeg, Ahab, and Starbuck only; Stubb and Flask are kept in the state
//! but never reported.

use crate::scene::Ending;
use crate::state::GameState;

/// The relationship counters that appear in the report.
const REPORTED_CREW: [&str; 3] = ["Queequeg", "Ahab", "Starbuck"];

/// Report for a voyage that reached one of the endings.
pub fn ending_report(ending: Ending, state: &GameState) -> String {
    format!(
        "FINAL STATISTICS - {} ENDING:\n{}\n\n{}",
        ending.label(),
        stat_block(state),
        relationship_block(state)
    )
}

/// Report for a forced game over: the reason takes the ending label's place
/// above the same blocks.
pub fn game_over_report(reason: &str, state: &GameState) -> String {
    format!(
        "{reason}\n\nFINAL STATISTICS:\n{}\n\n{}",
        stat_block(state),
        relationship_block(state)
    )
}

fn stat_block(state: &GameState) -> String {
    format!(
        "Health: {}/100\nSanity: {}/100\nReputation: {}/100\nMoney: ${}",
        state.health, state.sanity, state.reputation, state.money
    )
}

fn relationship_block(state: &GameState) -> String {
    let mut block = String::from("RELATIONSHIPS:");
    for name in REPORTED_CREW {
        block.push_str(&format!("\n{name}: {}/100", state.relationship(name)));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        let mut state = GameState::new();
        state.apply_stat_delta(crate::state::StatDelta::NONE.with_sanity(-30).with_money(7));
        state.apply_relationship_delta("Queequeg", 40);
        state.apply_relationship_delta("Starbuck", 15);
        state.apply_relationship_delta("Stubb", 25);
        state
    }

    #[test]
    fn ending_report_carries_the_label() {
        let report = ending_report(Ending::Survivor, &sample_state());
        assert!(report.starts_with("FINAL STATISTICS - SURVIVOR ENDING:"));
        assert!(report.contains("Health: 100/100"));
        assert!(report.contains("Sanity: 70/100"));
        assert!(report.contains("Reputation: 50/100"));
        assert!(report.contains("Money: $27"));
    }

    #[test]
    fn exactly_four_stats_and_three_relationships() {
        let report = ending_report(Ending::Hero, &sample_state());
        for stat in ["Health:", "Sanity:", "Reputation:", "Money:"] {
            assert_eq!(report.matches(stat).count(), 1, "{stat} once");
        }
        assert!(report.contains("Queequeg: 40/100"));
        assert!(report.contains("Ahab: 0/100"));
        assert!(report.contains("Starbuck: 15/100"));
        assert!(!report.contains("Stubb"));
        assert!(!report.contains("Flask"));
        // Heading, four stat lines, a blank, and the relationship block.
        assert_eq!(report.lines().count(), 10);
    }

    #[test]
    fn game_over_report_leads_with_the_reason() {
        let report = game_over_report("Madness has claimed your mind.", &sample_state());
        assert!(report.starts_with("Madness has claimed your mind."));
        assert!(!report.contains("ENDING"));
        assert!(report.contains("Sanity: 70/100"));
        assert!(report.contains("Starbuck: 15/100"));
    }
}
