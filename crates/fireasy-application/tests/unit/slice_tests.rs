//! Tests for link-time registration
//!
//! Entries declared here are linked into the test binary, so the seeded
//! registries and discovery must pick them up.

use std::sync::Arc;

use fireasy_application::ports::registry::{
    DATABASE_PROVIDERS, DatabaseProviderEntry, SERVICE_DEPLOYERS, ServicesDeployerEntry,
    TYPE_DESCRIPTORS, TypeDescriptorEntry, list_database_providers, list_services_deployers,
    list_type_descriptors, resolve_database_provider,
};
use fireasy_application::{DeployerDiscovery, ProviderRegistry, ServiceCollection, TypeResolver};
use fireasy_domain::Result;
use fireasy_domain::ports::providers::DatabaseProvider;

use crate::test_utils::PlainProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SliceMarker(&'static str);

fn plain_provider() -> Arc<dyn DatabaseProvider> {
    Arc::new(PlainProvider)
}

fn deploy_marker(services: &mut ServiceCollection) -> Result<()> {
    services.add_singleton(SliceMarker("linked"));
    Ok(())
}

#[linkme::distributed_slice(DATABASE_PROVIDERS)]
static LINKED_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
    name: "LinkedPlain",
    description: "Provider linked by the test binary",
    factory: plain_provider,
};

#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
static LINKED_TYPE: TypeDescriptorEntry = TypeDescriptorEntry {
    name: "tests::LinkedPlain",
    aliases: &["LinkedPlain"],
    description: "Provider linked by the test binary",
    provider_factory: Some(plain_provider),
};

#[linkme::distributed_slice(SERVICE_DEPLOYERS)]
static LINKED_DEPLOYER: ServicesDeployerEntry = ServicesDeployerEntry {
    name: "linked-marker",
    description: "Registers a marker service",
    priority: 0,
    depends_on: &[],
    configure: deploy_marker,
};

#[test]
fn test_registry_is_seeded_from_slice() {
    let registry = ProviderRegistry::with_registered();
    let provider = registry.get_provider("linkedplain").unwrap();
    assert_eq!(provider.provider_name(), "Plain");
}

#[test]
fn test_resolve_database_provider_by_name() {
    assert!(resolve_database_provider("LINKEDPLAIN").is_ok());
    assert!(resolve_database_provider("nope").is_err());
    assert!(
        list_database_providers()
            .iter()
            .any(|(name, _)| *name == "LinkedPlain")
    );
}

#[test]
fn test_type_resolver_is_seeded_from_slice() {
    let resolver = TypeResolver::with_registered();
    assert!(resolver.resolve("linkedplain").is_some_and(|t| t.is_provider()));
    assert!(
        list_type_descriptors()
            .iter()
            .any(|(name, _)| *name == "tests::LinkedPlain")
    );
}

#[test]
fn test_discovery_runs_linked_deployer() {
    let discovery = DeployerDiscovery::from_registry();
    assert!(
        list_services_deployers()
            .iter()
            .any(|(name, _)| *name == "linked-marker")
    );

    let mut services = ServiceCollection::new();
    let report = discovery.deploy(&mut services).unwrap();
    assert!(report.deployed.iter().any(|name| name == "linked-marker"));
    assert_eq!(
        *services.build().get::<SliceMarker>().unwrap(),
        SliceMarker("linked")
    );
}
