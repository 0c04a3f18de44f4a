//! Well-formedness checks for the static story tables.
//!
//! The scene graph is fixed data, so a malformed table is a defect to catch
//! in tests, never a runtime failure shown to the player. These checks run
//! from the test suite and return human-readable findings.

use std::collections::HashSet;

use crate::scene::{Ending, Next, SceneBody, SceneId};
use crate::script;
use crate::state::{CREW, MILESTONES};

/// A defect found in the story tables.
#[derive(Debug, Clone)]
pub struct ScriptIssue {
    /// Where the defect was found.
    pub location: String,
    /// A human-readable description.
    pub message: String,
}

impl std::fmt::Display for ScriptIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Check every scene table row. Returns all findings; an empty list means
/// the script is well-formed.
pub fn validate_script() -> Vec<ScriptIssue> {
    let mut issues = Vec::new();

    for id in SceneId::ALL {
        let scene = script::scene(id);
        let location = format!("{id:?}");

        if scene.id != id {
            issues.push(issue(&location, format!("table row carries id {:?}", scene.id)));
        }
        if scene.text.trim().is_empty() {
            issues.push(issue(&location, "empty narrative text".to_string()));
        }

        match &scene.body {
            SceneBody::Continue { .. } => {}
            SceneBody::Choice { prompt, options } => {
                if prompt.trim().is_empty() {
                    issues.push(issue(&location, "empty prompt".to_string()));
                }
                if !(2..=3).contains(&options.len()) {
                    issues.push(issue(
                        &location,
                        format!("{} options; decision points offer 2-3", options.len()),
                    ));
                }
                for (index, option) in options.iter().enumerate() {
                    let at = format!("{location} option {}", index + 1);
                    if option.label.trim().is_empty() {
                        issues.push(issue(&at, "empty label".to_string()));
                    }
                    for &(character, _) in option.relationships {
                        if !CREW.contains(&character) {
                            issues.push(issue(&at, format!("unknown crewmate \"{character}\"")));
                        }
                    }
                    for &flag in option.flags {
                        if !MILESTONES.contains(&flag) {
                            issues.push(issue(&at, format!("unknown milestone \"{flag}\"")));
                        }
                    }
                    for &item in option.items {
                        if item.trim().is_empty() {
                            issues.push(issue(&at, "empty item name".to_string()));
                        }
                    }
                }
            }
        }
    }

    check_reachability(&mut issues);

    for ending in Ending::ALL {
        let epilogue = script::epilogue(ending);
        if epilogue.ending != ending {
            issues.push(issue(
                &format!("{ending:?}"),
                format!("epilogue carries ending {:?}", epilogue.ending),
            ));
        }
        if epilogue.text.trim().is_empty() || epilogue.title.trim().is_empty() {
            issues.push(issue(&format!("{ending:?}"), "empty epilogue".to_string()));
        }
    }

    issues
}

/// Walk the graph from the opening and report anything the player can never
/// reach.
fn check_reachability(issues: &mut Vec<ScriptIssue>) {
    let mut seen_scenes = HashSet::new();
    let mut seen_endings = HashSet::new();
    let mut frontier = vec![script::OPENING];

    while let Some(id) = frontier.pop() {
        if !seen_scenes.insert(id) {
            continue;
        }
        let successors: Vec<Next> = match &script::scene(id).body {
            SceneBody::Continue { next, .. } => vec![*next],
            SceneBody::Choice { options, .. } => options.iter().map(|o| o.next).collect(),
        };
        for next in successors {
            match next {
                Next::Scene(successor) => frontier.push(successor),
                Next::End(ending) => {
                    seen_endings.insert(ending);
                }
            }
        }
    }

    for id in SceneId::ALL {
        if !seen_scenes.contains(&id) {
            issues.push(issue(&format!("{id:?}"), "unreachable from the opening".to_string()));
        }
    }
    for ending in Ending::ALL {
        if !seen_endings.contains(&ending) {
            issues.push(issue(
                &format!("{ending:?}"),
                "no path reaches this ending".to_string(),
            ));
        }
    }
}

fn issue(location: &str, message: String) -> ScriptIssue {
    ScriptIssue {
        location: location.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_shipped_script_is_well_formed() {
        let issues = validate_script();
        assert!(
            issues.is_empty(),
            "script issues:\n{}",
            issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn issues_render_with_their_location() {
        let rendered = ScriptIssue {
            location: "NewBedford option 2".to_string(),
            message: "unknown crewmate \"Fedallah\"".to_string(),
        }
        .to_string();
        assert_eq!(rendered, "NewBedford option 2: unknown crewmate \"Fedallah\"");
    }
}
