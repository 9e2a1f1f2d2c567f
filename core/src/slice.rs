//! # Vertical Slice Classification
//!
//! Combines the four artifact lists of one namespace group into a single
//! slice and assigns its kind. A group with no recognized artifacts
//! contributes nothing.

use slicemap_common::descriptor::TypeDescriptor;
use slicemap_common::model::{SliceKind, VerticalSlice};

use crate::artifacts;

/// Builds the slice for one namespace group, or `None` when the group holds
/// no commands, queries, read models or events.
pub fn build_slice(name: &str, group: &[&TypeDescriptor]) -> Option<VerticalSlice> {
    let commands = artifacts::extract_commands(group);
    let queries = artifacts::extract_queries(group);
    let read_models = artifacts::extract_read_models(group);
    let events = artifacts::extract_event_types(group);

    if commands.is_empty() && queries.is_empty() && read_models.is_empty() && events.is_empty() {
        return None;
    }

    let kind = classify(
        !commands.is_empty(),
        !queries.is_empty(),
        !read_models.is_empty(),
        !events.is_empty(),
    );

    Some(VerticalSlice {
        name: name.to_string(),
        kind,
        commands,
        queries,
        read_models,
        events,
    })
}

/// Derives the slice kind from the four has-artifact flags.
///
/// Rule order is a contract. The first four rules are conjunctive
/// discriminators (command-only, query+read-model, command+read-model,
/// event+command), followed by two unconditional fallbacks. An ambiguous
/// group such as commands+queries+read-models falls through to the command
/// fallback and classifies as `StateChange`; reordering would change that
/// outcome.
pub fn classify(
    has_commands: bool,
    has_queries: bool,
    has_read_models: bool,
    has_events: bool,
) -> SliceKind {
    if has_commands && !has_queries && !has_read_models && !has_events {
        SliceKind::StateChange
    } else if has_queries && has_read_models && !has_commands {
        SliceKind::StateView
    } else if has_commands && has_read_models && !has_queries {
        SliceKind::Automation
    } else if has_events && has_commands {
        SliceKind::Translator
    } else if has_commands {
        SliceKind::StateChange
    } else if has_queries {
        SliceKind::StateView
    } else {
        SliceKind::Unknown
    }
}
