//! Tests for the ODBC provider

use fireasy_domain::{ConnectionParameter, ConnectionString, Error};
use fireasy_providers::database::OdbcProvider;
use fireasy_providers::{DatabaseProvider, FeaturedProvider};

fn detect(raw: &str) -> Option<String> {
    OdbcProvider::new().detect_feature(&ConnectionString::new(raw))
}

#[test]
fn test_detects_feature_from_driver() {
    let cases = [
        ("Driver={ODBC Driver 18 for SQL Server};Server=db", Some("sqlserver")),
        ("Driver={SQL Server Native Client 11.0};Server=db", Some("sqlserver")),
        ("Driver={MySQL ODBC 8.0 Unicode Driver};Server=db", Some("mysql")),
        ("Driver={MariaDB ODBC 3.1 Driver};Server=db", Some("mysql")),
        ("Driver={Oracle in OraClient19Home1};Dbq=orcl", Some("oracle")),
        ("Driver={PostgreSQL Unicode};Server=db", Some("postgresql")),
        ("Driver={SQLite3 ODBC Driver};Database=app.db", Some("sqlite")),
        (
            "Driver={Microsoft Access Driver (*.mdb, *.accdb)};Dbq=C:\\data.accdb",
            Some("access"),
        ),
        (
            "Driver={Microsoft Excel Driver (*.xls, *.xlsx, *.xlsm, *.xlsb)};Dbq=C:\\book.xlsx",
            Some("excel"),
        ),
        ("Driver={Some Vendor Driver};Server=db", None),
        ("Server=db;Database=app", None),
    ];
    for (raw, expected) in cases {
        assert_eq!(detect(raw).as_deref(), expected, "{raw}");
    }
}

#[test]
fn test_reads_connection_parameter() {
    let cs = ConnectionString::new(
        "Driver={PostgreSQL Unicode};Server=db01;Port=5432;Database=shop;Uid=app;Pwd=secret;SSLmode=require",
    );
    let parameter = OdbcProvider::new().get_connection_parameter(&cs).unwrap();

    assert_eq!(parameter.server.as_deref(), Some("db01"));
    assert_eq!(parameter.port, Some(5432));
    assert_eq!(parameter.database.as_deref(), Some("shop"));
    assert_eq!(parameter.user_id.as_deref(), Some("app"));
    assert_eq!(parameter.password.as_deref(), Some("secret"));
    assert_eq!(
        parameter.properties.get("SSLmode").map(String::as_str),
        Some("require")
    );
    assert!(parameter.properties.contains_key("Driver"));
}

#[test]
fn test_updates_existing_keys_in_place() {
    let cs = ConnectionString::new("Driver={MySQL};Server=db01;Database=shop;Uid=app");
    let parameter = ConnectionParameter::new()
        .with_server("db02")
        .with_database("archive");

    let updated = OdbcProvider::new()
        .update_connection_string(&cs, &parameter)
        .unwrap();
    assert_eq!(updated.get("Server"), Some("db02"));
    assert_eq!(updated.get("Database"), Some("archive"));
    assert_eq!(updated.get("Uid"), Some("app"));
    assert_eq!(updated.get("Driver"), Some("MySQL"));
}

#[test]
fn test_sqlserver_feature_reads_port_from_server() {
    let cs = ConnectionString::new("Driver={ODBC Driver 18 for SQL Server};Server=db01,1444");
    let provider = OdbcProvider::new().with_feature("sqlserver");

    let parameter = provider.get_connection_parameter(&cs).unwrap();
    assert_eq!(parameter.server.as_deref(), Some("db01"));
    assert_eq!(parameter.port, Some(1444));
}

#[test]
fn test_sqlserver_feature_writes_port_into_server() {
    let cs = ConnectionString::new("Driver={ODBC Driver 18 for SQL Server};Server=db01,1444");
    let provider = OdbcProvider::new().with_feature("sqlserver");

    let updated = provider
        .update_connection_string(&cs, &ConnectionParameter::new().with_port(1500))
        .unwrap();
    assert_eq!(updated.get("Server"), Some("db01,1500"));
    assert!(!updated.contains_key("Port"));
}

#[test]
fn test_update_keeps_braced_driver() {
    let cs = ConnectionString::new("Driver={ODBC Driver 18 for SQL Server};Server=db01,1444");
    let provider = OdbcProvider::new().with_feature("sqlserver");

    let updated = provider
        .update_connection_string(&cs, &ConnectionParameter::new().with_port(1500))
        .unwrap();
    assert_eq!(
        updated.to_string(),
        "Driver={ODBC Driver 18 for SQL Server};Server=db01,1500"
    );
}

#[test]
fn test_apostrophe_in_password_keeps_later_keys() {
    let cs = ConnectionString::new("Driver={MySQL};Pwd=O'Brien;Server=db01;Database=app");
    let parameter = OdbcProvider::new().get_connection_parameter(&cs).unwrap();
    assert_eq!(parameter.password.as_deref(), Some("O'Brien"));
    assert_eq!(parameter.server.as_deref(), Some("db01"));
    assert_eq!(parameter.database.as_deref(), Some("app"));
}

#[test]
fn test_base_provider_keeps_server_verbatim() {
    let cs = ConnectionString::new("Driver={ODBC Driver 18 for SQL Server};Server=db01,1444");
    let parameter = OdbcProvider::new().get_connection_parameter(&cs).unwrap();
    assert_eq!(parameter.server.as_deref(), Some("db01,1444"));
    assert_eq!(parameter.port, None);
}

#[test]
fn test_invalid_port_is_rejected() {
    let cs = ConnectionString::new("Server=db01;Port=high");
    assert!(matches!(
        OdbcProvider::new().get_connection_parameter(&cs),
        Err(Error::InvalidConnectionString { .. })
    ));
}

#[test]
fn test_url_connection_string_is_rejected() {
    let cs = ConnectionString::new("mongodb://db01/shop");
    assert!(matches!(
        OdbcProvider::new().get_connection_parameter(&cs),
        Err(Error::InvalidConnectionString { .. })
    ));
}

#[test]
fn test_featured_clone_reports_feature() {
    let base = OdbcProvider::new();
    assert_eq!(base.feature(), None);
    assert_eq!(base.with_feature("mysql").feature(), Some("mysql"));
    assert!(base.supported_features().contains(&"excel"));
    assert!(base.as_featured().is_some());
}
