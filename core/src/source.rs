//! # Type Descriptor Sources
//!
//! The capability for obtaining exported type descriptors from a build
//! artifact. How the metadata is physically read stays behind the trait;
//! the classifier only ever sees [`TypeDescriptor`] values.

use std::fs;
use std::path::Path;

use anyhow::Context;
use slicemap_common::descriptor::TypeDescriptor;
use tracing::debug;

/// Supplies the exported type descriptors of a build artifact.
pub trait TypeDescriptorSource: Send + Sync {
    fn list_exported_types(&self, artifact: &Path) -> anyhow::Result<Vec<TypeDescriptor>>;
}

/// Reads descriptors from the JSON metadata export placed next to the build
/// artifact by the build step (`Foo.dll` → `Foo.types.json`).
pub struct JsonMetadataSource;

impl TypeDescriptorSource for JsonMetadataSource {
    fn list_exported_types(&self, artifact: &Path) -> anyhow::Result<Vec<TypeDescriptor>> {
        let sidecar = artifact.with_extension("types.json");
        debug!("reading type metadata from {}", sidecar.display());

        let raw = fs::read_to_string(&sidecar)
            .with_context(|| format!("reading metadata export '{}'", sidecar.display()))?;
        let descriptors: Vec<TypeDescriptor> = serde_json::from_str(&raw)
            .with_context(|| format!("decoding metadata export '{}'", sidecar.display()))?;

        debug!("loaded {} exported types", descriptors.len());
        Ok(descriptors)
    }
}
