//! Shared fixtures: a scriptable workspace host and a builder for fixture
//! workspaces holding a project file plus its JSON metadata export.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use slicemap_common::descriptor::{
    MethodDescriptor, ParameterDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef,
};
use slicemap_core::workspace::WorkspaceHost;
use tempfile::TempDir;

/// A host whose answers are fixed up front. Counts selection round-trips so
/// tests can assert the persisted record short-circuits elicitation.
pub struct FakeHost {
    roots: Vec<PathBuf>,
    selection: Option<String>,
    elicitations: Arc<AtomicUsize>,
}

impl FakeHost {
    pub fn new(roots: Vec<PathBuf>, selection: Option<String>) -> (Self, Arc<AtomicUsize>) {
        let elicitations = Arc::new(AtomicUsize::new(0));
        let host = Self {
            roots,
            selection,
            elicitations: elicitations.clone(),
        };
        (host, elicitations)
    }
}

#[async_trait]
impl WorkspaceHost for FakeHost {
    async fn roots(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self.roots.clone())
    }

    async fn select_project(&self, _candidates: &[String]) -> anyhow::Result<Option<String>> {
        self.elicitations.fetch_add(1, Ordering::SeqCst);
        Ok(self.selection.clone())
    }
}

/// A workspace on disk with one project file and a built artifact's
/// metadata export at the conventional location.
pub struct FixtureWorkspace {
    pub dir: TempDir,
    pub project_file: String,
}

impl FixtureWorkspace {
    pub fn new(descriptors: &[TypeDescriptor]) -> Self {
        let dir = tempfile::tempdir().expect("create fixture workspace");
        let project_dir = dir.path().join("src/App");
        let output_dir = project_dir.join("bin/Debug/net9.0");
        fs::create_dir_all(&output_dir).expect("create build output dir");
        fs::write(project_dir.join("App.csproj"), "<Project />").expect("write project file");

        let json = serde_json::to_string_pretty(descriptors).expect("serialize descriptors");
        fs::write(output_dir.join("App.types.json"), json).expect("write metadata export");

        Self {
            dir,
            project_file: "src/App/App.csproj".to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

pub fn descriptor(namespace: &[&str], name: &str, tags: &[&str]) -> TypeDescriptor {
    TypeDescriptor {
        namespace: namespace.iter().map(|s| s.to_string()).collect(),
        name: name.into(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        summary: None,
        properties: Vec::new(),
        static_methods: Vec::new(),
    }
}

pub fn property(name: &str, ty: TypeRef) -> PropertyDescriptor {
    PropertyDescriptor {
        name: name.into(),
        ty,
    }
}

pub fn method(name: &str, return_type: TypeRef, parameters: &[(&str, TypeRef)]) -> MethodDescriptor {
    MethodDescriptor {
        name: name.into(),
        return_type,
        parameters: parameters
            .iter()
            .map(|(parameter_name, ty)| ParameterDescriptor {
                name: Some(parameter_name.to_string()),
                ty: ty.clone(),
            })
            .collect(),
    }
}
