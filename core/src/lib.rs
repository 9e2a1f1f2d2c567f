//! # Classification Engine
//!
//! Turns a flat set of exported type descriptors into a forest of features
//! and vertical slices.
//!
//! ## Pipeline
//! descriptors → grouped by namespace → per-group artifact extraction →
//! per-group slice classification → per-feature aggregation.
//!
//! The pipeline is a pure, synchronous transformation over an immutable
//! descriptor set. The only asynchronous points sit at the boundary traits
//! in [`workspace`] and [`source`], where the hosting environment supplies
//! workspace roots, project choices and type metadata.

pub mod artifacts;
pub mod hierarchy;
pub mod projector;
pub mod slice;
pub mod source;
pub mod tools;
pub mod workspace;
