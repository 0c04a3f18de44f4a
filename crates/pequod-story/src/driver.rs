//! The session driver: render, choose, resolve, check, repeat.
//!
//! The driver owns the trampoline over the scene graph and the two global
//! termination checks. Presentation and input are behind the [`Presenter`]
//! and [`InputSource`] seams so a session can run against a terminal or a
//! test harness without any other change.

use crate::error::{StoryError, StoryResult};
use crate::report;
use crate::scene::{Ending, Next};
use crate::script;
use crate::state::GameState;

/// Renders narrative output. The console implementation may pace text
/// character by character; pacing has no semantic effect.
pub trait Presenter {
    /// Output a block of narrative prose.
    fn render(&mut self, text: &str);
    /// Output a framed, uppercased title.
    fn render_header(&mut self, title: &str);
}

/// Supplies validated player input.
///
/// Implementations re-prompt indefinitely on malformed or out-of-range
/// entry and only ever return an in-range 0-based index. A closed input
/// stream or interrupted read surfaces as [`StoryError::Interrupted`],
/// which the driver treats as a cooperative cancellation.
pub trait InputSource {
    /// Put `question` and the 1-based numbered `options` to the player and
    /// return the chosen 0-based index.
    fn prompt_choice(&mut self, question: &str, options: &[&str]) -> StoryResult<usize>;
    /// Wait for acknowledgment before the story begins.
    fn pause(&mut self) -> StoryResult<()>;
}

/// Why a forced game over fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// Health reached zero.
    HealthFailed,
    /// Sanity reached zero.
    MadnessClaimed,
}

impl FailureCause {
    /// The fixed message shown in place of an ending label.
    pub fn message(self) -> &'static str {
        match self {
            FailureCause::HealthFailed => "Your health has failed you at sea.",
            FailureCause::MadnessClaimed => "Madness has claimed your mind.",
        }
    }
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Reached one of the story's endings.
    Ended(Ending),
    /// Forced out by a failed stat.
    GameOver(FailureCause),
    /// The player broke off mid-voyage.
    Abandoned,
}

/// Play one full session against the fixed story graph.
///
/// Returns the outcome; every outcome path has already rendered its own
/// closing text. The only `Err` is a real I/O failure on the console.
pub fn run<P: Presenter, I: InputSource>(
    state: &mut GameState,
    presenter: &mut P,
    input: &mut I,
) -> StoryResult<SessionOutcome> {
    presenter.render_header(script::TITLE);
    presenter.render(script::INTRO);
    match input.pause() {
        Ok(()) => {}
        Err(StoryError::Interrupted) => return Ok(abandon(presenter)),
        Err(e) => return Err(e),
    }

    let mut current = script::OPENING;
    loop {
        let scene = script::scene(current);
        state.enter_chapter(scene.chapter);
        if let Some(title) = scene.title {
            presenter.render_header(title);
        }
        presenter.render(scene.text);

        let selected = match scene.decision() {
            Some((prompt, options)) => {
                let labels: Vec<&str> = options.iter().map(|o| o.label).collect();
                match input.prompt_choice(prompt, &labels) {
                    Ok(index) => Some(index),
                    Err(StoryError::Interrupted) => return Ok(abandon(presenter)),
                    Err(e) => return Err(e),
                }
            }
            None => None,
        };

        let resolution = scene.resolve(selected, state)?;
        if let Some(aftermath) = resolution.aftermath {
            presenter.render(aftermath);
        }

        // Fixed order: health is checked before sanity.
        if state.health <= 0 {
            return Ok(force_game_over(FailureCause::HealthFailed, presenter, state));
        }
        if state.sanity <= 0 {
            return Ok(force_game_over(FailureCause::MadnessClaimed, presenter, state));
        }

        match resolution.next {
            Next::Scene(id) => current = id,
            Next::End(ending) => return Ok(conclude(ending, presenter, state)),
        }
    }
}

fn conclude<P: Presenter>(
    ending: Ending,
    presenter: &mut P,
    state: &mut GameState,
) -> SessionOutcome {
    let epilogue = script::epilogue(ending);
    presenter.render_header(epilogue.title);
    presenter.render(epilogue.text);
    state.record_ending(ending);
    presenter.render(&report::ending_report(ending, state));
    presenter.render(script::CLOSING);
    SessionOutcome::Ended(ending)
}

fn force_game_over<P: Presenter>(
    cause: FailureCause,
    presenter: &mut P,
    state: &GameState,
) -> SessionOutcome {
    presenter.render_header("Game Over");
    presenter.render(&report::game_over_report(cause.message(), state));
    presenter.render(script::CLOSING);
    SessionOutcome::GameOver(cause)
}

fn abandon<P: Presenter>(presenter: &mut P) -> SessionOutcome {
    presenter.render(script::FAREWELL);
    SessionOutcome::Abandoned
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Transcript {
        blocks: Vec<String>,
    }

    impl Presenter for Transcript {
        fn render(&mut self, text: &str) {
            self.blocks.push(text.to_string());
        }

        fn render_header(&mut self, title: &str) {
            self.blocks.push(format!("== {} ==", title.to_uppercase()));
        }
    }

    impl Transcript {
        fn contains(&self, needle: &str) -> bool {
            self.blocks.iter().any(|b| b.contains(needle))
        }
    }

    /// Scripted choices; exhausting them behaves like a closed stream.
    struct Scripted {
        choices: VecDeque<usize>,
    }

    impl Scripted {
        fn new(choices: &[usize]) -> Self {
            Self {
                choices: choices.iter().copied().collect(),
            }
        }
    }

    impl InputSource for Scripted {
        fn prompt_choice(&mut self, _question: &str, options: &[&str]) -> StoryResult<usize> {
            match self.choices.pop_front() {
                Some(index) => {
                    assert!(index < options.len(), "scripted choice out of range");
                    Ok(index)
                }
                None => Err(StoryError::Interrupted),
            }
        }

        fn pause(&mut self) -> StoryResult<()> {
            Ok(())
        }
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            FailureCause::HealthFailed.message(),
            "Your health has failed you at sea."
        );
        assert_eq!(
            FailureCause::MadnessClaimed.message(),
            "Madness has claimed your mind."
        );
    }

    #[test]
    fn exhausted_input_takes_the_farewell_path() {
        let mut state = GameState::new();
        let mut transcript = Transcript::default();
        let mut input = Scripted::new(&[0]);

        let outcome = run(&mut state, &mut transcript, &mut input).unwrap();
        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert!(transcript.contains(script::FAREWELL));
        assert!(state.ending.is_none());
    }

    #[test]
    fn health_collapse_forces_the_game_over_path() {
        let mut state = GameState::new();
        state.health = 5;
        let mut transcript = Transcript::default();
        // Sleeping by the common-room fire costs 10 health.
        let mut input = Scripted::new(&[1]);

        let outcome = run(&mut state, &mut transcript, &mut input).unwrap();
        assert_eq!(outcome, SessionOutcome::GameOver(FailureCause::HealthFailed));
        assert!(transcript.contains("Your health has failed you at sea."));
        assert!(transcript.contains(script::CLOSING));
        assert_eq!(state.health, 0);
    }

    #[test]
    fn health_is_checked_before_sanity() {
        // Both stats are gone after the first transition; health wins.
        let mut state = GameState::new();
        state.health = 5;
        state.sanity = 0;
        let mut transcript = Transcript::default();
        let mut input = Scripted::new(&[1]);

        let outcome = run(&mut state, &mut transcript, &mut input).unwrap();
        assert_eq!(outcome, SessionOutcome::GameOver(FailureCause::HealthFailed));
        assert!(!transcript.contains("Madness has claimed your mind."));
    }

    #[test]
    fn sanity_collapse_forces_madness() {
        let mut state = GameState::new();
        state.sanity = 10;
        let mut transcript = Transcript::default();
        // Take the private room, then dwell on the dark omens at the sermon.
        let mut input = Scripted::new(&[2, 1]);

        let outcome = run(&mut state, &mut transcript, &mut input).unwrap();
        assert_eq!(
            outcome,
            SessionOutcome::GameOver(FailureCause::MadnessClaimed)
        );
        assert!(transcript.contains("Madness has claimed your mind."));
    }

    #[test]
    fn chapter_marker_tracks_the_walker() {
        let mut state = GameState::new();
        let mut transcript = Transcript::default();
        let mut input = Scripted::new(&[0, 0]);

        let _ = run(&mut state, &mut transcript, &mut input).unwrap();
        // Interrupted at the sermon, which is chapter 2.
        assert_eq!(state.current_chapter, 2);
    }
}
