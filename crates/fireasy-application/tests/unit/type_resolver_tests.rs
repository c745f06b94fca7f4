//! Tests for type name resolution

use std::sync::Arc;

use fireasy_application::{ResolvedType, TypeResolver};
use fireasy_domain::ports::providers::DatabaseProvider;

use crate::test_utils::PlainProvider;

fn plain() -> Arc<dyn DatabaseProvider> {
    Arc::new(PlainProvider)
}

fn resolver() -> TypeResolver {
    let mut resolver = TypeResolver::new();
    resolver
        .register(
            ResolvedType::provider("tests::PlainProvider", "Plain test provider", plain),
            &["Plain", "PlainProvider"],
        )
        .register(
            ResolvedType::new("tests::orders::OrderService", "Order service"),
            &["IOrderService"],
        );
    resolver
}

#[test]
fn test_full_name_resolves_exactly() {
    let resolved = resolver().resolve("tests::PlainProvider").unwrap();
    assert_eq!(resolved.name, "tests::PlainProvider");
    assert!(resolved.is_provider());
}

#[test]
fn test_alias_resolves_case_insensitively() {
    let resolver = resolver();
    let by_alias = resolver.resolve("plainprovider").unwrap();
    assert_eq!(by_alias, resolver.resolve("PLAIN").unwrap());
    assert_eq!(by_alias.name, "tests::PlainProvider");
}

#[test]
fn test_provider_factory_constructs_provider() {
    let resolved = resolver().resolve("Plain").unwrap();
    let factory = resolved.provider_factory().unwrap();
    assert_eq!(factory().provider_name(), "Plain");
}

#[test]
fn test_non_provider_type() {
    let resolved = resolver().resolve(" IOrderService ").unwrap();
    assert!(!resolved.is_provider());
    assert!(resolved.provider_factory().is_none());
}

#[test]
fn test_unknown_or_blank_names_are_none() {
    let resolver = resolver();
    assert!(resolver.resolve("Some.Missing.Type, Missing").is_none());
    assert!(resolver.resolve("").is_none());
    assert!(resolver.resolve("   ").is_none());
}

#[test]
fn test_full_name_match_is_case_sensitive() {
    assert!(resolver().resolve("TESTS::PLAINPROVIDER").is_none());
}

#[test]
fn test_len() {
    let resolver = resolver();
    assert_eq!(resolver.len(), 2);
    assert!(TypeResolver::new().is_empty());
}
