//! # Slice Artifact Extraction
//!
//! Four independent extractors scan one namespace group and produce the
//! typed artifact lists: commands, read models, event types and queries.
//! The first three are tag-driven; queries come from a structural scan of
//! each read model's public static methods.
//!
//! The extractors share only read access to the same immutable group, so
//! they may run in any order.

use slicemap_common::descriptor::{
    COMMAND_TAG, EVENT_TYPE_TAG, READ_MODEL_TAG, TypeDescriptor, TypeRef,
};
use slicemap_common::model::{Command, EventType, Property, Query, ReadModel};

use crate::projector;

/// Container base names whose single type argument counts as a query result.
///
/// A structural heuristic, not a type-system guarantee: projects using a
/// container alias outside this list get a false negative, which is accepted
/// behavior.
const QUERY_CONTAINERS: &[&str] = &[
    "IEnumerable",
    "ICollection",
    "IList",
    "List",
    "ISubject",
    "Subject",
];

/// Selects the command-tagged descriptors, preserving group order.
pub fn extract_commands(group: &[&TypeDescriptor]) -> Vec<Command> {
    group
        .iter()
        .filter(|descriptor| descriptor.has_tag(COMMAND_TAG))
        .map(|descriptor| Command {
            name: descriptor.name.clone(),
            description: descriptor.summary_or_empty(),
            properties: projector::project_properties(descriptor),
        })
        .collect()
}

/// Selects the read-model-tagged descriptors, preserving group order.
pub fn extract_read_models(group: &[&TypeDescriptor]) -> Vec<ReadModel> {
    group
        .iter()
        .filter(|descriptor| descriptor.has_tag(READ_MODEL_TAG))
        .map(|descriptor| ReadModel {
            name: descriptor.name.clone(),
            description: descriptor.summary_or_empty(),
            properties: projector::project_properties(descriptor),
        })
        .collect()
}

/// Selects the event-type-tagged descriptors, preserving group order.
pub fn extract_event_types(group: &[&TypeDescriptor]) -> Vec<EventType> {
    group
        .iter()
        .filter(|descriptor| descriptor.has_tag(EVENT_TYPE_TAG))
        .map(|descriptor| EventType {
            name: descriptor.name.clone(),
            properties: projector::project_properties(descriptor),
        })
        .collect()
}

/// Scans every read model's public static methods and emits one [`Query`]
/// per method the detector accepts. Parameter names fall back to `argN`
/// placeholders when the source did not preserve them.
pub fn extract_queries(group: &[&TypeDescriptor]) -> Vec<Query> {
    let mut queries = Vec::new();
    for descriptor in group {
        if !descriptor.has_tag(READ_MODEL_TAG) {
            continue;
        }
        for method in &descriptor.static_methods {
            if !is_query(&method.return_type, &descriptor.name) {
                continue;
            }
            let parameters = method
                .parameters
                .iter()
                .enumerate()
                .map(|(index, parameter)| {
                    let name = parameter
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("arg{index}"));
                    Property::new(name, projector::display_name(&parameter.ty))
                })
                .collect();
            queries.push(Query {
                name: method.name.clone(),
                read_model: descriptor.name.clone(),
                parameters,
            });
        }
    }
    queries
}

/// Whether `return_type` qualifies a static method as a query for
/// `read_model`: either the read model itself, or a whitelisted container
/// with the read model as its single type argument.
pub fn is_query(return_type: &TypeRef, read_model: &str) -> bool {
    if !return_type.is_parameterized() {
        return return_type.base_name() == read_model;
    }

    if return_type.args.len() != 1 {
        return false;
    }

    let arg = &return_type.args[0];
    QUERY_CONTAINERS.contains(&return_type.base_name())
        && !arg.is_parameterized()
        && arg.base_name() == read_model
}
