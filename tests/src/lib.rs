//! End-to-end tests for the slicemap tool surface.

pub mod fixtures;

#[cfg(test)]
mod feature_tools;
