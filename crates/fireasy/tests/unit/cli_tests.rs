//! Tests for the command line reports

use clap::Parser;
use fireasy::cli::{Cli, Command, check_instances, providers_report, render_check};
use fireasy::{ConfigLoader, init_app};

const DOC: &str = r#"
[fireasy.dataInstances.main]
providerName = "Odbc"
connectionString = "Driver={PostgreSQL Unicode};Server=db01;Port=5432"
isDefault = true

[fireasy.dataInstances.files]
providerName = "OleDb"
connectionString = "Provider=Microsoft.ACE.OLEDB.12.0;Data Source=c:\\data\\book.xlsx;Extended Properties=\"Excel 12.0\""

[fireasy.dataInstances.legacy]
providerName = "Sybase"
connectionString = "Server=old"
"#;

#[test]
fn test_parse_commands() {
    let cli = Cli::try_parse_from(["fireasy", "providers"]).unwrap();
    assert_eq!(cli.command, Command::Providers);

    let cli = Cli::try_parse_from(["fireasy", "check", "--config", "app.toml"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Check {
            config: Some("app.toml".into()),
            log_level: None,
        }
    );
    assert!(Cli::try_parse_from(["fireasy"]).is_err());
}

#[test]
fn test_providers_report_lists_linked_entries() {
    let report = providers_report().unwrap();
    for expected in ["MongoDB", "Odbc", "OleDb", "locking", "mapping", "OdbcProvider"] {
        assert!(report.contains(expected), "{expected} missing from:\n{report}");
    }
    let locking = report.find("locking").unwrap();
    let mapping = report.find("mapping").unwrap();
    assert!(locking < mapping);
}

#[test]
fn test_check_reports_each_instance() {
    let context = init_app(ConfigLoader::new().load_from_str(DOC).unwrap()).unwrap();
    let reports = check_instances(&context);
    assert_eq!(reports.len(), 3);

    let files = reports.iter().find(|r| r.name == "files").unwrap();
    assert_eq!(
        files.resolved,
        Ok(("OleDb".to_string(), Some("excel".to_string())))
    );
    let main = reports.iter().find(|r| r.name == "main").unwrap();
    assert!(main.is_default);
    assert_eq!(
        main.resolved,
        Ok(("Odbc".to_string(), Some("postgresql".to_string())))
    );
    let legacy = reports.iter().find(|r| r.name == "legacy").unwrap();
    assert!(legacy.resolved.as_ref().unwrap_err().contains("Sybase"));

    let text = render_check(&context, &reports);
    assert!(text.contains("main (default): Odbc -> Odbc [postgresql]"), "{text}");
    assert!(text.contains("legacy: Sybase -> ERROR"), "{text}");
    assert!(text.starts_with("Deployers: locking, mapping"), "{text}");
}
