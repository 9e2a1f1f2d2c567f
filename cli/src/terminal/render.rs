//! Tree rendering of the feature forest.

use colored::*;
use slicemap_common::model::{Feature, SliceKind, VerticalSlice};

pub fn print_forest(features: &[Feature]) {
    if features.is_empty() {
        println!("{}", "no features found".dimmed());
        return;
    }
    for feature in features {
        print_feature(feature, 0);
    }
}

pub fn print_names(names: &[String]) {
    if names.is_empty() {
        println!("{}", "no features found".dimmed());
        return;
    }
    for name in names {
        println!("{name}");
    }
}

fn print_feature(feature: &Feature, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}{}", feature.name.bold());
    for slice in &feature.slices {
        print_slice(slice, depth + 1);
    }
    for sub_feature in &feature.features {
        print_feature(sub_feature, depth + 1);
    }
}

fn print_slice(slice: &VerticalSlice, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}{} {}", slice.name, kind_label(slice.kind));

    let detail_indent = "  ".repeat(depth + 1);
    for command in &slice.commands {
        println!("{detail_indent}{} {}", "command".cyan(), command.name);
    }
    for query in &slice.queries {
        println!(
            "{detail_indent}{} {} -> {}",
            "query".cyan(),
            query.name,
            query.read_model
        );
    }
    for read_model in &slice.read_models {
        println!("{detail_indent}{} {}", "read model".cyan(), read_model.name);
    }
    for event in &slice.events {
        println!("{detail_indent}{} {}", "event".cyan(), event.name);
    }
}

fn kind_label(kind: SliceKind) -> ColoredString {
    let label = format!("[{kind}]");
    match kind {
        SliceKind::StateChange => label.green(),
        SliceKind::StateView => label.blue(),
        SliceKind::Automation => label.yellow(),
        SliceKind::Translator => label.magenta(),
        SliceKind::Unknown => label.dimmed(),
    }
}
