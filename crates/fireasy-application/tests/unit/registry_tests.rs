//! Tests for the provider registry
//!
//! Resolution by name, featured variants, overrides and aliases.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fireasy_application::ProviderRegistry;
use fireasy_domain::ports::providers::DatabaseProvider;
use fireasy_domain::{DataInstanceSetting, Error};

use crate::test_utils::{FlavorProvider, PlainProvider, counting_factory};

fn registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry
        .add_provider("Plain", || Arc::new(PlainProvider) as Arc<dyn DatabaseProvider>)
        .add_provider("Flavor", || {
            Arc::new(FlavorProvider::default()) as Arc<dyn DatabaseProvider>
        });
    registry
}

#[test]
fn test_lookup_is_case_insensitive() {
    let registry = registry();
    assert!(registry.contains("plain"));
    assert!(registry.contains("PLAIN"));
    assert_eq!(
        registry.get_provider("fLaVoR").map(|p| p.provider_name().to_string()),
        Some("Flavor".to_string())
    );
}

#[test]
fn test_same_instance_for_every_lookup() {
    let created = Arc::new(AtomicUsize::new(0));
    let mut registry = ProviderRegistry::new();
    registry.add_provider("Plain", counting_factory(created.clone()));

    let first = registry.get_provider("plain").unwrap();
    let second = registry.get_provider("Plain").unwrap();
    let setting = DataInstanceSetting::new("main", "PLAIN", "Server=db01");
    let defined = registry.get_defined_provider(&setting).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &defined));
    assert_eq!(created.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unregistered_name_is_absent() {
    let registry = registry();
    assert!(registry.get_provider("Sybase").is_none());

    let setting = DataInstanceSetting::new("legacy", "Sybase", "Server=old");
    match registry.get_defined_provider(&setting) {
        Err(Error::ProviderNotFound { name, available }) => {
            assert_eq!(name, "Sybase");
            assert_eq!(available, vec!["flavor".to_string(), "plain".to_string()]);
        }
        other => panic!("Expected ProviderNotFound, got {other:?}"),
    }
}

#[test]
fn test_featured_provider_is_cloned_for_detected_feature() {
    let registry = registry();
    let setting = DataInstanceSetting::new("main", "Flavor", "Flavor=Sweet;Server=db01");

    let provider = registry.get_defined_provider(&setting).unwrap();
    assert_eq!(provider.feature(), Some("sweet"));

    let base = registry.get_provider("Flavor").unwrap();
    assert_eq!(base.feature(), None);
    assert!(!Arc::ptr_eq(&base, &provider));
}

#[test]
fn test_featured_clone_is_memoized_per_feature() {
    let registry = registry();
    let sweet = DataInstanceSetting::new("a", "Flavor", "Flavor=sweet");
    let sour = DataInstanceSetting::new("b", "Flavor", "Flavor=sour");

    let first = registry.get_defined_provider(&sweet).unwrap();
    let again = registry.get_defined_provider(&sweet).unwrap();
    let other = registry.get_defined_provider(&sour).unwrap();

    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(other.feature(), Some("sour"));
}

#[test]
fn test_featured_provider_without_feature_returns_base() {
    let registry = registry();
    let setting = DataInstanceSetting::new("main", "Flavor", "Flavor=bitter");

    let provider = registry.get_defined_provider(&setting).unwrap();
    let base = registry.get_provider("flavor").unwrap();
    assert!(Arc::ptr_eq(&provider, &base));
}

#[test]
fn test_second_registration_overrides() {
    let mut registry = registry();
    registry.add_provider("PLAIN", || {
        Arc::new(FlavorProvider::default()) as Arc<dyn DatabaseProvider>
    });

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get_provider("plain").unwrap().provider_name(),
        "Flavor"
    );
}

#[test]
fn test_alias_shares_instance() {
    let mut registry = registry();
    registry.add_alias("Classic", "plain").unwrap();

    let alias = registry.get_provider("classic").unwrap();
    let target = registry.get_provider("Plain").unwrap();
    assert!(Arc::ptr_eq(&alias, &target));
}

#[test]
fn test_alias_to_unknown_target_fails() {
    let mut registry = registry();
    assert!(matches!(
        registry.add_alias("Classic", "missing"),
        Err(Error::ProviderNotFound { .. })
    ));
    assert!(!registry.contains("classic"));
}

#[test]
fn test_add_instance() {
    let mut registry = ProviderRegistry::new();
    let provider: Arc<dyn DatabaseProvider> = Arc::new(PlainProvider);
    registry.add_instance("Fixed", provider.clone());

    assert!(Arc::ptr_eq(&registry.get_provider("fixed").unwrap(), &provider));
}

#[test]
fn test_clones_share_slots() {
    let created = Arc::new(AtomicUsize::new(0));
    let mut registry = ProviderRegistry::new();
    registry.add_provider("Plain", counting_factory(created.clone()));
    let copy = registry.clone();

    let a = registry.get_provider("plain").unwrap();
    let b = copy.get_provider("plain").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(created.load(Ordering::SeqCst), 1);
}
