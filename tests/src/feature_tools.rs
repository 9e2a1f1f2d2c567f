use std::sync::atomic::Ordering;

use slicemap_common::config::{ActiveProject, CONFIG_FILE_NAME};
use slicemap_common::descriptor::{COMMAND_TAG, EVENT_TYPE_TAG, READ_MODEL_TAG, TypeRef};
use slicemap_common::error::ToolError;
use slicemap_common::model::SliceKind;
use slicemap_core::source::JsonMetadataSource;
use slicemap_core::tools::FeatureTools;

use crate::fixtures::{FakeHost, FixtureWorkspace, descriptor, method, property};

fn sample_descriptors() -> Vec<slicemap_common::descriptor::TypeDescriptor> {
    let mut place_order = descriptor(&["App", "Orders", "Commands"], "PlaceOrder", &[COMMAND_TAG]);
    place_order.properties = vec![
        property("OrderId", TypeRef::simple("Guid")),
        property("Total", TypeRef::simple("Decimal")),
    ];

    let mut order = descriptor(&["App", "Orders", "Queries"], "Order", &[READ_MODEL_TAG]);
    order.properties = vec![property("Id", TypeRef::simple("Guid"))];
    order.static_methods = vec![
        method(
            "GetById",
            TypeRef::simple("Order"),
            &[("id", TypeRef::simple("Guid"))],
        ),
        method(
            "All",
            TypeRef::generic("IEnumerable`1", vec![TypeRef::simple("Order")]),
            &[],
        ),
    ];

    let invoice_raised = descriptor(&["App", "Billing"], "InvoiceRaised", &[EVENT_TYPE_TAG]);
    let raise_invoice = descriptor(&["App", "Billing"], "RaiseInvoice", &[COMMAND_TAG]);

    let helper = descriptor(&["App", "Orders", "Support"], "Mapper", &[]);

    vec![place_order, order, invoice_raised, raise_invoice, helper]
}

fn tools_for(workspace: &FixtureWorkspace, selection: Option<String>) -> FeatureTools {
    let (host, _) = FakeHost::new(vec![workspace.root().to_path_buf()], selection);
    FeatureTools::new(Box::new(host), Box::new(JsonMetadataSource))
}

#[tokio::test]
async fn full_forest_from_fixture_workspace() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    let tools = tools_for(&workspace, Some(workspace.project_file.clone()));

    let features = tools.get_features().await.unwrap();
    assert_eq!(features.len(), 2);

    let orders = &features[0];
    assert_eq!(orders.name, "Orders");
    assert_eq!(orders.slices.len(), 2);
    assert_eq!(orders.slices[0].name, "Commands");
    assert_eq!(orders.slices[0].kind, SliceKind::StateChange);
    assert_eq!(orders.slices[1].name, "Queries");
    assert_eq!(orders.slices[1].kind, SliceKind::StateView);
    assert_eq!(orders.slices[1].queries.len(), 2);

    let billing = &features[1];
    assert_eq!(billing.name, "Billing");
    assert_eq!(billing.slices.len(), 1);
    assert_eq!(billing.slices[0].name, "Billing");
    assert_eq!(billing.slices[0].kind, SliceKind::Translator);
}

#[tokio::test]
async fn untagged_support_group_is_absent_from_slices() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    let tools = tools_for(&workspace, Some(workspace.project_file.clone()));

    let features = tools.get_features().await.unwrap();
    let orders = &features[0];
    assert!(orders.slices.iter().all(|slice| slice.name != "Support"));
}

#[tokio::test]
async fn feature_names_are_sorted_and_distinct() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    let tools = tools_for(&workspace, Some(workspace.project_file.clone()));

    let names = tools.get_feature_names().await.unwrap();
    assert_eq!(names, ["Billing", "Orders"]);
}

#[tokio::test]
async fn selection_is_persisted_and_not_repeated() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    let (host, elicitations) = FakeHost::new(
        vec![workspace.root().to_path_buf()],
        Some(workspace.project_file.clone()),
    );
    let tools = FeatureTools::new(Box::new(host), Box::new(JsonMetadataSource));

    let chosen = tools.set_active_project().await.unwrap();
    assert_eq!(chosen, workspace.project_file);
    assert_eq!(elicitations.load(Ordering::SeqCst), 1);
    assert!(workspace.root().join(CONFIG_FILE_NAME).exists());

    // The record now answers; a host that would cancel is never consulted.
    let tools = tools_for(&workspace, None);
    let names = tools.get_feature_names().await.unwrap();
    assert_eq!(names, ["Billing", "Orders"]);

    let chosen_again = tools.set_active_project().await.unwrap();
    assert_eq!(chosen_again, workspace.project_file);
}

#[tokio::test]
async fn no_roots_fails() {
    let (host, _) = FakeHost::new(Vec::new(), None);
    let tools = FeatureTools::new(Box::new(host), Box::new(JsonMetadataSource));

    let result = tools.get_features().await;
    assert!(matches!(result, Err(ToolError::NoRoots)));
}

#[tokio::test]
async fn workspace_without_projects_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (host, _) = FakeHost::new(vec![dir.path().to_path_buf()], None);
    let tools = FeatureTools::new(Box::new(host), Box::new(JsonMetadataSource));

    let result = tools.get_features().await;
    assert!(matches!(result, Err(ToolError::NoProjects)));
}

#[tokio::test]
async fn cancelled_selection_fails() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    let tools = tools_for(&workspace, None);

    let result = tools.get_features().await;
    assert!(matches!(result, Err(ToolError::SelectionCancelled)));
}

#[tokio::test]
async fn empty_selection_fails() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    let tools = tools_for(&workspace, Some(String::new()));

    let result = tools.get_features().await;
    assert!(matches!(result, Err(ToolError::SelectionCancelled)));
}

#[tokio::test]
async fn missing_project_directory_fails() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    ActiveProject::store(workspace.root(), "gone/Missing.csproj").unwrap();
    let tools = tools_for(&workspace, None);

    let result = tools.get_features().await;
    assert!(matches!(result, Err(ToolError::ProjectPathNotFound(_))));
}

#[tokio::test]
async fn unbuilt_project_reports_artifact_load_failure() {
    let workspace = FixtureWorkspace::new(&sample_descriptors());
    std::fs::remove_file(
        workspace
            .root()
            .join("src/App/bin/Debug/net9.0/App.types.json"),
    )
    .unwrap();
    let tools = tools_for(&workspace, Some(workspace.project_file.clone()));

    let result = tools.get_features().await;
    assert!(matches!(result, Err(ToolError::ArtifactLoad(_))));
}

#[tokio::test]
async fn metadata_without_tagged_types_yields_empty_results() {
    let descriptors = vec![
        descriptor(&["App", "Orders"], "Mapper", &[]),
        descriptor(&["App", "Billing", "Support"], "Formatter", &[]),
    ];
    let workspace = FixtureWorkspace::new(&descriptors);
    let tools = tools_for(&workspace, Some(workspace.project_file.clone()));

    assert!(tools.get_features().await.unwrap().is_empty());

    let tools = tools_for(&workspace, None);
    assert!(tools.get_feature_names().await.unwrap().is_empty());
}
