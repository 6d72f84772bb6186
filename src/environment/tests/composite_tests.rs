//! Unit tests for the composite environment repository.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::environment::adapters::composite::CompositeEnvironmentRepository;
use crate::environment::domain::PropertySource;
use crate::environment::ports::{
    CompositeRepository, EnvironmentRepository, RepositoryError, SearchPathLocator,
};
use crate::environment::tests::fixtures::{
    FailingRepository, LocatableRepository, OpaqueRepository, app_query,
};
use rstest::rstest;
use std::sync::Arc;

fn locatable(name: &str, location: &str) -> Arc<dyn EnvironmentRepository> {
    Arc::new(LocatableRepository::new(name, location))
}

fn opaque(name: &str) -> Arc<dyn EnvironmentRepository> {
    Arc::new(OpaqueRepository::new(name))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fan_out_appends_property_sources_in_child_order() {
    let composite = CompositeEnvironmentRepository::new(vec![
        locatable("native", "file:/srv/config"),
        opaque("vault"),
        locatable("git", "https://config.example.com/repo"),
    ]);

    let environment = composite
        .find(&app_query())
        .await
        .expect("fan-out should succeed");

    let names: Vec<&str> = environment
        .property_sources()
        .iter()
        .map(PropertySource::name)
        .collect();
    assert_eq!(names, ["native", "vault", "git"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fan_out_echoes_the_query_triple() {
    let composite = CompositeEnvironmentRepository::new(vec![opaque("vault")]);
    let query = app_query()
        .with_profiles(["dev".to_owned()])
        .with_label("main");

    let environment = composite.find(&query).await.expect("fan-out should succeed");

    assert_eq!(environment.name(), "myapp");
    assert_eq!(environment.profiles(), ["dev"]);
    assert_eq!(environment.label(), Some("main"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_composite_answers_with_no_property_sources() {
    let composite = CompositeEnvironmentRepository::new(Vec::new());
    assert!(composite.is_empty());

    let environment = composite
        .find(&app_query())
        .await
        .expect("empty composite should still answer");

    assert!(environment.property_sources().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn child_failure_propagates_unchanged() {
    let composite = CompositeEnvironmentRepository::new(vec![
        locatable("native", "file:/srv/config"),
        Arc::new(FailingRepository),
    ]);

    let result = composite.find(&app_query()).await;

    assert!(matches!(result, Err(RepositoryError::Backend(_))));
}

#[rstest]
fn composite_declares_both_optional_capabilities() {
    let composite = CompositeEnvironmentRepository::new(Vec::new());

    assert!(composite.as_composite().is_some());
    assert!(composite.as_search_path_locator().is_some());
}

#[rstest]
fn children_are_exposed_in_construction_order() {
    let first = locatable("native", "file:/srv/config");
    let second = opaque("vault");
    let composite =
        CompositeEnvironmentRepository::new(vec![Arc::clone(&first), Arc::clone(&second)]);

    let view = composite.as_composite().expect("composite view");
    let children = view.children();

    assert_eq!(children.len(), 2);
    assert!(children.first().is_some_and(|child| Arc::ptr_eq(child, &first)));
    assert!(children.last().is_some_and(|child| Arc::ptr_eq(child, &second)));
}

#[rstest]
fn locations_aggregate_in_child_order_skipping_unlocatable_children() {
    let composite = CompositeEnvironmentRepository::new(vec![
        locatable("native", "file:/srv/config"),
        opaque("vault"),
        locatable("git", "https://config.example.com/repo"),
    ]);

    let locator = composite
        .as_search_path_locator()
        .expect("search-path view");
    let locations = locator.locations(&app_query());

    assert_eq!(
        locations.locations(),
        ["file:/srv/config", "https://config.example.com/repo"]
    );
    assert_eq!(locations.version(), None);
}

#[rstest]
fn len_reports_the_child_count() {
    let composite = CompositeEnvironmentRepository::new(vec![opaque("vault"), opaque("consul")]);
    assert_eq!(composite.len(), 2);
    assert!(!composite.is_empty());
}
