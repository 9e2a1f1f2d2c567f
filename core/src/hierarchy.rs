//! # Feature Hierarchy
//!
//! Groups type descriptors by namespace and folds each group's slice into
//! the feature forest.
//!
//! Two behaviors are configuration, not assumptions:
//! * how many leading namespace segments are boilerplate
//!   ([`HierarchyOptions::root_prefix_depth`]);
//! * whether namespaces deeper than two relative segments nest as
//!   sub-features or collapse to a flat slice list ([`NestingPolicy`]).

use slicemap_common::descriptor::TypeDescriptor;
use slicemap_common::model::{Feature, VerticalSlice};

use crate::slice;

/// What to do with namespace groups deeper than `Feature/Slice`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NestingPolicy {
    /// Collapse deep paths to a flat slice named after the last segment.
    /// Sub-feature lists stay empty.
    #[default]
    Flatten,
    /// Intermediate segments become nested sub-features; the slice lands on
    /// the deepest one.
    Nest,
}

/// Configuration for the hierarchy builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HierarchyOptions {
    /// Leading namespace segments dropped before grouping (the product or
    /// company prefix).
    pub root_prefix_depth: usize,
    pub nesting: NestingPolicy,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            root_prefix_depth: 1,
            nesting: NestingPolicy::default(),
        }
    }
}

/// Builds the feature forest for a descriptor set.
///
/// Feature and slice order follow first appearance in the descriptor set;
/// no sorting is applied. Namespace groups that produce no slice are dropped
/// silently, and a feature only appears once one of its groups survived.
pub fn build_features(descriptors: &[TypeDescriptor], options: &HierarchyOptions) -> Vec<Feature> {
    let mut features = Vec::new();

    for (relative_path, group) in group_by_relative_path(descriptors, options.root_prefix_depth) {
        // Grouping only ever emits non-empty relative paths.
        let Some(slice_name) = relative_path.last() else {
            continue;
        };
        let Some(slice) = slice::build_slice(slice_name, &group) else {
            continue;
        };

        let chain: &[String] = match options.nesting {
            NestingPolicy::Flatten => &relative_path[..1],
            // The last segment names the slice, everything before it names
            // the feature chain. A single-segment path is its own feature.
            NestingPolicy::Nest if relative_path.len() > 1 => {
                &relative_path[..relative_path.len() - 1]
            }
            NestingPolicy::Nest => &relative_path[..1],
        };

        attach_slice(&mut features, chain, slice);
    }

    features
}

/// The distinct, lexicographically sorted top-level feature names.
///
/// A cheap summary: only tag presence is checked, no artifact extraction or
/// classification runs. Namespace groups with no tagged types contribute
/// nothing, matching the forest built by [`build_features`].
pub fn feature_names(descriptors: &[TypeDescriptor], options: &HierarchyOptions) -> Vec<String> {
    let depth = options.root_prefix_depth;
    let mut names: Vec<String> = descriptors
        .iter()
        .filter(|descriptor| descriptor.namespace.len() > depth)
        .filter(|descriptor| descriptor.has_artifact_tag())
        .map(|descriptor| descriptor.namespace[depth].clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Groups descriptors by their namespace path minus the root prefix,
/// preserving first-seen order of both groups and members. Descriptors whose
/// namespace does not extend past the prefix have nothing to classify under
/// and are discarded.
fn group_by_relative_path(
    descriptors: &[TypeDescriptor],
    depth: usize,
) -> Vec<(Vec<String>, Vec<&TypeDescriptor>)> {
    let mut groups: Vec<(Vec<String>, Vec<&TypeDescriptor>)> = Vec::new();

    for descriptor in descriptors {
        if descriptor.namespace.len() <= depth {
            continue;
        }
        let relative = descriptor.namespace[depth..].to_vec();
        match groups.iter_mut().find(|(path, _)| *path == relative) {
            Some((_, group)) => group.push(descriptor),
            None => groups.push((relative, vec![descriptor])),
        }
    }

    groups
}

fn attach_slice(features: &mut Vec<Feature>, chain: &[String], slice: VerticalSlice) {
    let Some((head, rest)) = chain.split_first() else {
        return;
    };

    let index = match features.iter().position(|feature| feature.name == *head) {
        Some(index) => index,
        None => {
            features.push(Feature::new(head.clone()));
            features.len() - 1
        }
    };

    if rest.is_empty() {
        features[index].slices.push(slice);
    } else {
        attach_slice(&mut features[index].features, rest, slice);
    }
}
