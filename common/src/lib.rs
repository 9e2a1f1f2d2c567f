//! # Shared Models
//!
//! Value types shared by every layer of slicemap.
//!
//! ## Contents
//! * [`descriptor`]: The abstract shape of a compiled type as handed to the classifier.
//! * [`model`]: The architectural model reconstructed from descriptors (features, slices, artifacts).
//! * [`config`]: The persisted active-project record.
//! * [`error`]: The tool-level failure taxonomy.
//!
//! Everything here is constructed once and never mutated. Structural equality
//! is derived on all records so results can be compared directly in tests.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod model;
