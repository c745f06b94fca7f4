//! Tests for the OleDb provider

use fireasy_domain::{ConnectionParameter, ConnectionString, Error};
use fireasy_providers::database::OleDbProvider;
use fireasy_providers::{DatabaseProvider, FeaturedProvider};

fn detect(raw: &str) -> Option<String> {
    OleDbProvider::new().detect_feature(&ConnectionString::new(raw))
}

#[test]
fn test_jet_and_ace_map_to_access() {
    assert_eq!(
        detect("Provider=Microsoft.Jet.OLEDB.4.0;Data Source=C:\\db.mdb").as_deref(),
        Some("access")
    );
    assert_eq!(
        detect("Provider=Microsoft.ACE.OLEDB.12.0;Data Source=C:\\db.accdb").as_deref(),
        Some("access")
    );
}

#[test]
fn test_excel_extended_properties_map_to_excel() {
    let raw = "Provider=Microsoft.ACE.OLEDB.12.0;Data Source=C:\\book.xlsx;\
               Extended Properties=\"Excel 12.0 Xml;HDR=YES\"";
    assert_eq!(detect(raw).as_deref(), Some("excel"));
}

#[test]
fn test_sqlserver_and_oracle_providers() {
    assert_eq!(
        detect("Provider=SQLOLEDB;Data Source=db01;Initial Catalog=shop").as_deref(),
        Some("sqlserver")
    );
    assert_eq!(
        detect("Provider=MSOLEDBSQL19;Server=db01").as_deref(),
        Some("sqlserver")
    );
    assert_eq!(
        detect("Provider=OraOLEDB.Oracle;Data Source=orcl").as_deref(),
        Some("oracle")
    );
    assert_eq!(detect("Provider=MSDAORA;Data Source=orcl").as_deref(), Some("oracle"));
}

#[test]
fn test_unknown_provider_has_no_feature() {
    assert_eq!(detect("Provider=Vendor.OLEDB;Data Source=x"), None);
    assert_eq!(detect("Data Source=x"), None);
}

#[test]
fn test_connection_operations_are_not_implemented() {
    let provider = OleDbProvider::new();
    let cs = ConnectionString::new("Provider=SQLOLEDB;Data Source=db01");

    match provider.get_connection_parameter(&cs) {
        Err(Error::NotImplemented { provider, operation }) => {
            assert_eq!(provider, "OleDb");
            assert_eq!(operation, "get_connection_parameter");
        }
        other => panic!("Expected NotImplemented, got {other:?}"),
    }
    assert!(matches!(
        provider.update_connection_string(&cs, &ConnectionParameter::new()),
        Err(Error::NotImplemented { .. })
    ));
}

#[test]
fn test_featured_clone_still_not_implemented() {
    let access = OleDbProvider::new().with_feature("access");
    assert_eq!(access.feature(), Some("access"));
    assert!(
        access
            .get_connection_parameter(&ConnectionString::new("Data Source=x"))
            .is_err()
    );
}
