//! # Type Descriptor Model
//!
//! The abstract representation of a compiled type's shape: namespace path,
//! tag annotations, readable properties and public static methods. Descriptor
//! sources (a binary metadata reader, a parsed AST, a hand-built test fixture)
//! all hand the classifier this same shape.
//!
//! Tags are plain name strings checked by exact match, so nothing in here
//! depends on any host type system.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tag annotation marking a state-changing command type.
pub const COMMAND_TAG: &str = "Command";

/// Tag annotation marking a read model type.
pub const READ_MODEL_TAG: &str = "ReadModel";

/// Tag annotation marking an event type.
pub const EVENT_TYPE_TAG: &str = "EventType";

/// A structural reference to a type, possibly parameterized.
///
/// `name` may carry a backtick arity suffix as emitted by reflection
/// (e.g. ``List`1``); [`TypeRef::base_name`] strips it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The simple name with any backtick arity suffix stripped.
    pub fn base_name(&self) -> &str {
        self.name.split('`').next().unwrap_or(&self.name)
    }

    pub fn is_parameterized(&self) -> bool {
        !self.args.is_empty()
    }
}

/// A readable instance property of a type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A parameter of a public static method. The name is optional because not
/// every metadata source preserves parameter names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A public static method signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

/// The full shape of one exported type, produced once per artifact load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Ordered namespace segments, outermost first.
    pub namespace: Vec<String>,
    pub name: String,
    /// Tag annotation names declared on the type.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Documentation summary, when the source preserves one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub static_methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the type carries any of the tag annotations the classifier
    /// recognizes.
    pub fn has_artifact_tag(&self) -> bool {
        self.has_tag(COMMAND_TAG) || self.has_tag(READ_MODEL_TAG) || self.has_tag(EVENT_TYPE_TAG)
    }

    /// The documentation summary, or an empty string when absent.
    pub fn summary_or_empty(&self) -> String {
        self.summary.clone().unwrap_or_default()
    }
}
