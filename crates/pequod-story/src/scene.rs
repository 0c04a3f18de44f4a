//! Scene graph types: identifiers, option rows, and resolution.
//!
//! The story is a fixed graph of named scenes. Each scene renders its prose,
//! optionally asks for one selection from 2–3 options, applies the chosen
//! row's consequences to the [`GameState`], and names its successor. The
//! whole mapping is static data (see [`crate::script`]), so tests can feed a
//! selection index straight to [`Scene::resolve`] and assert the resulting
//! state and successor without any presentation side effects.

use crate::error::{StoryError, StoryResult};
use crate::state::{GameState, StatDelta};

/// Identifies one scene in the story graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Arrival at the Spouter-Inn in New Bedford.
    NewBedford,
    /// The night with the harpooner Queequeg.
    MeetQueequeg,
    /// Father Mapple's sermon on Jonah.
    MorningSermon,
    /// Packet schooner to Nantucket.
    JourneyToNantucket,
    /// Signing articles with Peleg and Bildad.
    SigningThePequod,
    /// Peleg's account of the captain.
    AskAboutAhab,
    /// Elijah's warnings on the wharf.
    ElijahProphecy,
    /// The Pequod sails on Christmas morning.
    ChristmasDeparture,
    /// First weeks at sea.
    EarlyVoyage,
    /// Ahab comes up on deck.
    AhabAppears,
    /// The doubloon nailed to the mainmast.
    DoubloonCeremony,
    /// Moby Dick is sighted.
    FinalChase,
    /// The three-day battle and the sinking.
    FinalConfrontation,
}

impl SceneId {
    /// Every scene, in story order. Used by the script validator.
    pub const ALL: [SceneId; 13] = [
        SceneId::NewBedford,
        SceneId::MeetQueequeg,
        SceneId::MorningSermon,
        SceneId::JourneyToNantucket,
        SceneId::SigningThePequod,
        SceneId::AskAboutAhab,
        SceneId::ElijahProphecy,
        SceneId::ChristmasDeparture,
        SceneId::EarlyVoyage,
        SceneId::AhabAppears,
        SceneId::DoubloonCeremony,
        SceneId::FinalChase,
        SceneId::FinalConfrontation,
    ];
}

/// The three ways the voyage can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// Sole survivor, picked up by the Rachel.
    Survivor,
    /// Went down with the ship helping shipmates.
    Hero,
    /// Followed Ahab into the vortex.
    Obsessed,
}

impl Ending {
    /// Every ending. Used by the script validator.
    pub const ALL: [Ending; 3] = [Ending::Survivor, Ending::Hero, Ending::Obsessed];

    /// The tag printed in the final report heading.
    pub fn label(self) -> &'static str {
        match self {
            Ending::Survivor => "SURVIVOR",
            Ending::Hero => "HERO",
            Ending::Obsessed => "OBSESSED",
        }
    }
}

/// Where control flows after a scene resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Continue to another scene.
    Scene(SceneId),
    /// The voyage is over; run the epilogue and final report.
    End(Ending),
}

/// One selectable option within a decision-point scene.
///
/// The consequence mapping is fixed per row, keyed by option index — nothing
/// here is computed from the current state.
#[derive(Debug)]
pub struct ChoiceSpec {
    /// The menu line shown to the player.
    pub label: &'static str,
    /// Prose shown once this option is taken (empty for none).
    pub aftermath: &'static str,
    /// Stat adjustments.
    pub stats: StatDelta,
    /// Relationship adjustments, as (crewmate, delta) pairs.
    pub relationships: &'static [(&'static str, i32)],
    /// Milestone flags raised.
    pub flags: &'static [&'static str],
    /// Items appended to the inventory.
    pub items: &'static [&'static str],
    /// The successor.
    pub next: Next,
}

/// How a scene resolves once its prose has been rendered.
#[derive(Debug)]
pub enum SceneBody {
    /// A pure narrative beat: optional unconditional deltas, one successor.
    Continue {
        /// Stat adjustments applied unconditionally.
        stats: StatDelta,
        /// The fixed successor.
        next: Next,
    },
    /// A decision point with 2–3 options.
    Choice {
        /// The question put to the player.
        prompt: &'static str,
        /// The option rows, in menu order.
        options: &'static [ChoiceSpec],
    },
}

/// A single scene: narrative prose plus its resolution rule.
#[derive(Debug)]
pub struct Scene {
    /// This scene's identifier; must agree with the lookup key.
    pub id: SceneId,
    /// Advisory chapter number recorded on entry.
    pub chapter: u32,
    /// Header title, if the scene opens a new passage of the story.
    pub title: Option<&'static str>,
    /// The narrative prose, rendered before any decision.
    pub text: &'static str,
    /// How the scene resolves.
    pub body: SceneBody,
}

/// A terminal scene: the epilogue rendered for one ending before the final
/// report.
#[derive(Debug)]
pub struct Epilogue {
    /// The ending this epilogue belongs to.
    pub ending: Ending,
    /// Header title.
    pub title: &'static str,
    /// Closing prose.
    pub text: &'static str,
}

/// What resolving a scene produced: optional aftermath prose plus the
/// successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Prose to render for the taken option, if any.
    pub aftermath: Option<&'static str>,
    /// Where the walker goes next.
    pub next: Next,
}

impl Scene {
    /// The decision point, if this scene has one.
    pub fn decision(&self) -> Option<(&'static str, &'static [ChoiceSpec])> {
        match self.body {
            SceneBody::Choice { prompt, options } => Some((prompt, options)),
            SceneBody::Continue { .. } => None,
        }
    }

    /// Apply this scene's consequences to `state` and return the successor.
    ///
    /// `selected` is the 0-based option index for a decision-point scene and
    /// `None` for a pure narrative beat; a mismatch either way is an error
    /// (a table-misuse bug for tests to catch, never reachable through the
    /// driver).
    pub fn resolve(&self, selected: Option<usize>, state: &mut GameState) -> StoryResult<Resolution> {
        match &self.body {
            SceneBody::Continue { stats, next } => {
                if selected.is_some() {
                    return Err(StoryError::UnexpectedChoice(self.id));
                }
                state.apply_stat_delta(*stats);
                Ok(Resolution {
                    aftermath: None,
                    next: *next,
                })
            }
            SceneBody::Choice { options, .. } => {
                let index = selected.ok_or(StoryError::ChoiceRequired(self.id))?;
                let option = options.get(index).ok_or(StoryError::InvalidChoice {
                    scene: self.id,
                    index,
                })?;
                state.apply_stat_delta(option.stats);
                for &(character, delta) in option.relationships {
                    state.apply_relationship_delta(character, delta);
                }
                for &milestone in option.flags {
                    state.raise_flag(milestone);
                }
                for &item in option.items {
                    state.add_item(item);
                }
                Ok(Resolution {
                    aftermath: (!option.aftermath.is_empty()).then_some(option.aftermath),
                    next: option.next,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PLAIN: Scene = Scene {
        id: SceneId::FinalChase,
        chapter: 12,
        title: None,
        text: "The chase is on.",
        body: SceneBody::Continue {
            stats: StatDelta::NONE.with_health(10),
            next: Next::Scene(SceneId::FinalConfrontation),
        },
    };

    static FORK: Scene = Scene {
        id: SceneId::FinalConfrontation,
        chapter: 13,
        title: Some("The Final Battle"),
        text: "The ship is sinking.",
        body: SceneBody::Choice {
            prompt: "What do you do?",
            options: &[
                ChoiceSpec {
                    label: "Cling to the coffin buoy",
                    aftermath: "You float alone.",
                    stats: StatDelta::NONE.with_sanity(-10),
                    relationships: &[("Queequeg", 20)],
                    flags: &["final_chase"],
                    items: &["coffin life buoy"],
                    next: Next::End(Ending::Survivor),
                },
                ChoiceSpec {
                    label: "Go down with the ship",
                    aftermath: "",
                    stats: StatDelta::NONE,
                    relationships: &[],
                    flags: &[],
                    items: &[],
                    next: Next::End(Ending::Hero),
                },
            ],
        },
    };

    #[test]
    fn continue_applies_stats_and_advances() {
        let mut state = GameState::new();
        state.health = 80;
        let resolution = PLAIN.resolve(None, &mut state).unwrap();
        assert_eq!(state.health, 90);
        assert_eq!(resolution.aftermath, None);
        assert_eq!(
            resolution.next,
            Next::Scene(SceneId::FinalConfrontation)
        );
    }

    #[test]
    fn choice_applies_the_selected_row_only() {
        let mut state = GameState::new();
        let resolution = FORK.resolve(Some(0), &mut state).unwrap();
        assert_eq!(state.sanity, 90);
        assert_eq!(state.relationship("Queequeg"), 20);
        assert!(state.flag("final_chase"));
        assert!(state.inventory.contains(&"coffin life buoy".to_string()));
        assert_eq!(resolution.aftermath, Some("You float alone."));
        assert_eq!(resolution.next, Next::End(Ending::Survivor));
    }

    #[test]
    fn empty_aftermath_is_none() {
        let mut state = GameState::new();
        let resolution = FORK.resolve(Some(1), &mut state).unwrap();
        assert_eq!(resolution.aftermath, None);
        assert_eq!(resolution.next, Next::End(Ending::Hero));
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let mut state = GameState::new();
        let err = FORK.resolve(Some(2), &mut state).unwrap_err();
        assert!(matches!(
            err,
            StoryError::InvalidChoice {
                scene: SceneId::FinalConfrontation,
                index: 2
            }
        ));
    }

    #[test]
    fn missing_selection_is_an_error() {
        let mut state = GameState::new();
        assert!(matches!(
            FORK.resolve(None, &mut state).unwrap_err(),
            StoryError::ChoiceRequired(SceneId::FinalConfrontation)
        ));
    }

    #[test]
    fn selection_on_a_plain_scene_is_an_error() {
        let mut state = GameState::new();
        assert!(matches!(
            PLAIN.resolve(Some(0), &mut state).unwrap_err(),
            StoryError::UnexpectedChoice(SceneId::FinalChase)
        ));
    }
}
