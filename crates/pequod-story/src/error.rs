//! Error types for the story engine.

use thiserror::Error;

use crate::scene::SceneId;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while walking the story graph.
///
/// Malformed player input is never an error: the input source consumes it
/// with a re-prompt loop. The choice-mismatch variants can only be produced
/// by driving the transition tables directly, as tests do; against a valid
/// script the driver never constructs them.
#[derive(Debug, Error)]
pub enum StoryError {
    /// A decision-point scene was resolved without a selection.
    #[error("scene {0:?} has a decision point and needs a selection")]
    ChoiceRequired(SceneId),

    /// A pure narrative scene was resolved with a selection.
    #[error("scene {0:?} has no decision point")]
    UnexpectedChoice(SceneId),

    /// A selection index outside the scene's option list.
    #[error("choice {index} is out of range for scene {scene:?}")]
    InvalidChoice {
        /// The scene whose options were indexed.
        scene: SceneId,
        /// The out-of-range 0-based index.
        index: usize,
    },

    /// The input stream closed or the read was interrupted; the driver
    /// turns this into a graceful farewell, not a failure.
    #[error("session interrupted")]
    Interrupted,

    /// An I/O failure on the console.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
