//! # Architectural Model
//!
//! The reconstructed view of an application: a forest of features, each
//! holding vertical slices, each slice holding the artifacts (commands,
//! queries, read models, event types) found in one namespace group.
//!
//! All records are immutable value objects. A [`VerticalSlice`] is only ever
//! built from a group that produced at least one artifact, and its kind is
//! derived once and never reconsidered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A projected `(name, type)` display pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A state-changing command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub properties: Vec<Property>,
}

/// A read model backing queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadModel {
    pub name: String,
    pub description: String,
    pub properties: Vec<Property>,
}

/// An event type. Unlike commands and read models it carries no description;
/// the record shapes are intentionally asymmetric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub name: String,
    pub properties: Vec<Property>,
}

/// A query method detected on a read model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub name: String,
    /// The read model the query returns.
    pub read_model: String,
    pub parameters: Vec<Property>,
}

/// Classification of a vertical slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceKind {
    /// Commands without queries or read models.
    StateChange,
    /// Queries over read models, no commands.
    StateView,
    /// Commands reacting on read models, no queries.
    Automation,
    /// Events translated into commands.
    Translator,
    /// No recognized combination.
    Unknown,
}

impl fmt::Display for SliceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SliceKind::StateChange => "StateChange",
            SliceKind::StateView => "StateView",
            SliceKind::Automation => "Automation",
            SliceKind::Translator => "Translator",
            SliceKind::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// One self-contained unit of behavior, built exactly once from a namespace
/// group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalSlice {
    pub name: String,
    pub kind: SliceKind,
    pub commands: Vec<Command>,
    pub queries: Vec<Query>,
    pub read_models: Vec<ReadModel>,
    pub events: Vec<EventType>,
}

/// A named grouping of related vertical slices, derived from a shared
/// namespace segment. Forms a tree through `features`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    /// Sub-features, populated only under the nesting hierarchy policy.
    pub features: Vec<Feature>,
    pub slices: Vec<VerticalSlice>,
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
            slices: Vec::new(),
        }
    }
}
