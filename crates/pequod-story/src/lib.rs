//! Branching-narrative state machine for the Moby Dick text adventure.
//!
//! The whole program is a fixed scene graph over a flat mutable state
//! record: each scene renders prose, optionally takes one choice from a
//! short menu, applies bounded deltas to the player's stats, and names its
//! successor until one of three endings (or a forced game over) is reached.
//! Presentation and input sit behind traits, so the graph and driver are
//! fully testable without a terminal.

/// The session driver and its presenter/input seams.
pub mod driver;
/// Error types for the story engine.
pub mod error;
/// Final report formatting.
pub mod report;
/// Scene graph types: identifiers, option rows, and resolution.
pub mod scene;
/// The fixed story tables and framing text.
pub mod script;
/// The player's mutable state.
pub mod state;
/// Well-formedness checks for the story tables.
pub mod validate;

/// Re-export the driver entry point and its seams.
pub use driver::{FailureCause, InputSource, Presenter, SessionOutcome, run};
/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export the scene graph types.
pub use scene::{Ending, Next, Scene, SceneId};
/// Re-export the state record.
pub use state::{GameState, StatDelta};
