//! Tests for validated settings.

use std::io::Write;

use http::Method;
use serde_json::json;
use tempfile::{NamedTempFile, tempdir};

use crate::client::{ConfigError, Protocol};

use super::SettingsError;
use super::cli::Cli;
use super::file::SettingsFile;
use super::validated::{ValidatedSettings, write_default_config};

const API_KEY: &str = "0f3c9a4e-7b1d-4c2e-9f6a-2d8e5b7c1a90";

/// Helper to create CLI args with credentials already set
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["everylog", "--api-key", API_KEY, "--project-id", "my-project"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML settings
fn toml(content: &str) -> SettingsFile {
    SettingsFile::parse(content).unwrap()
}

/// Helper to write an entry file
fn entry_file(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();
    file
}

mod required_fields {
    use super::*;

    #[test]
    fn missing_api_key_returns_error() {
        let cli = Cli::parse_from_iter(["everylog", "--project-id", "p"]);
        let result = ValidatedSettings::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(SettingsError::MissingRequired {
                field: "api_key",
                ..
            })
        ));
    }

    #[test]
    fn missing_project_id_returns_error() {
        let cli = Cli::parse_from_iter(["everylog", "--api-key", API_KEY]);
        let result = ValidatedSettings::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(SettingsError::MissingRequired {
                field: "project_id",
                ..
            })
        ));
    }

    #[test]
    fn credentials_from_toml() {
        let cli = Cli::parse_from_iter(["everylog"]);
        let file = toml(&format!(
            r#"
            [account]
            api_key = "{API_KEY}"
            project_id = "from-file"
        "#
        ));

        let settings = ValidatedSettings::from_raw(&cli, Some(&file)).unwrap();

        assert_eq!(settings.api_key, API_KEY);
        assert_eq!(settings.project_id, "from-file");
    }

    #[test]
    fn credentials_are_not_length_checked_here() {
        let cli = Cli::parse_from_iter(["everylog", "--api-key", "short", "--project-id", "p"]);
        let settings = ValidatedSettings::from_raw(&cli, None).unwrap();

        assert_eq!(settings.api_key, "short");
    }
}

mod endpoint {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let settings = ValidatedSettings::from_raw(&cli(&[]), None).unwrap();
        let options = &settings.options;

        assert_eq!(options.protocol, Protocol::Https);
        assert_eq!(options.hostname, "api.everylog.io");
        assert_eq!(options.port, None);
        assert_eq!(options.path, "/api/v1/log-entries");
        assert_eq!(options.method, Method::POST);
        assert!(!options.local_testing);
        assert!(!options.unauthorized_is_success);
    }

    #[test]
    fn cli_overrides_toml() {
        let cli = cli(&["--hostname", "cli.example.com", "--port", "9000", "--method", "put"]);
        let file = toml(
            r#"
            [endpoint]
            hostname = "toml.example.com"
            port = 8000
            path = "/toml"
            method = "PATCH"
        "#,
        );

        let settings = ValidatedSettings::from_raw(&cli, Some(&file)).unwrap();
        let options = &settings.options;

        assert_eq!(options.hostname, "cli.example.com");
        assert_eq!(options.port, Some(9000));
        assert_eq!(options.path, "/toml");
        assert_eq!(options.method, Method::PUT);
    }

    #[test]
    fn protocol_from_toml() {
        let file = toml("[endpoint]\nprotocol = \"http:\"");
        let settings = ValidatedSettings::from_raw(&cli(&[]), Some(&file)).unwrap();

        assert_eq!(settings.options.protocol, Protocol::Http);
    }

    #[test]
    fn invalid_protocol_returns_error() {
        let result = ValidatedSettings::from_raw(&cli(&["--protocol", "ftp"]), None);

        assert!(matches!(
            result,
            Err(SettingsError::Client(ConfigError::InvalidEndpoint { .. }))
        ));
    }

    #[test]
    fn invalid_method_returns_error() {
        let result = ValidatedSettings::from_raw(&cli(&["--method", "NOT A METHOD"]), None);

        assert!(matches!(result, Err(SettingsError::InvalidMethod(m)) if m == "NOT A METHOD"));
    }

    #[test]
    fn invalid_path_returns_error() {
        let result = ValidatedSettings::from_raw(&cli(&["--path", "no-slash"]), None);

        assert!(matches!(
            result,
            Err(SettingsError::Client(ConfigError::InvalidEndpoint { .. }))
        ));
    }

    #[test]
    fn boolean_flags_use_or_semantics() {
        let file = toml(
            r"
            [endpoint]
            local_testing = true
        ",
        );

        let settings =
            ValidatedSettings::from_raw(&cli(&["--unauthorized-is-success"]), Some(&file))
                .unwrap();

        assert!(settings.options.local_testing);
        assert!(settings.options.unauthorized_is_success);
    }
}

mod entry {
    use super::*;

    #[test]
    fn entry_from_flags() {
        let cli = cli(&[
            "--title",
            "Deploy",
            "--summary",
            "api is live",
            "--body",
            "All checks passed.",
            "--link",
            "https://example.com",
            "--push",
            "--tag",
            "deploy",
            "--icon",
            "🚀",
        ]);

        let entry = ValidatedSettings::from_raw(&cli, None).unwrap().entry;

        assert_eq!(entry.title, "Deploy");
        assert_eq!(entry.summary, "api is live");
        assert_eq!(entry.body, "All checks passed.");
        assert_eq!(entry.link.as_deref(), Some("https://example.com"));
        assert_eq!(entry.push, Some(true));
        assert_eq!(entry.tags, Some(vec!["deploy".to_string()]));
        assert_eq!(entry.icon.as_deref(), Some("🚀"));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn unset_fields_stay_absent() {
        let entry = ValidatedSettings::from_raw(&cli(&["--title", "T"]), None)
            .unwrap()
            .entry;

        assert!(entry.summary.is_empty());
        assert!(entry.push.is_none());
        assert!(entry.tags.is_none());
        assert!(entry.properties.is_none());
    }

    #[test]
    fn properties_parse_json_values() {
        let cli = cli(&[
            "--property",
            "count=3",
            "--property",
            "ok=true",
            "--property",
            "env=prod",
            "--property",
            "meta={\"a\":1}",
        ]);

        let entry = ValidatedSettings::from_raw(&cli, None).unwrap().entry;
        let properties = entry.properties.unwrap();

        assert_eq!(properties["count"], json!(3));
        assert_eq!(properties["ok"], json!(true));
        assert_eq!(properties["env"], json!("prod"));
        assert_eq!(properties["meta"], json!({"a": 1}));
    }

    #[test]
    fn property_value_may_contain_equals() {
        let entry = ValidatedSettings::from_raw(&cli(&["--property", "query=a=b"]), None)
            .unwrap()
            .entry;

        assert_eq!(entry.properties.unwrap()["query"], json!("a=b"));
    }

    #[test]
    fn property_without_equals_returns_error() {
        let result = ValidatedSettings::from_raw(&cli(&["--property", "novalue"]), None);

        assert!(matches!(
            result,
            Err(SettingsError::InvalidProperty { value }) if value == "novalue"
        ));
    }

    #[test]
    fn property_with_empty_key_returns_error() {
        let result = ValidatedSettings::from_raw(&cli(&["--property", "=1"]), None);

        assert!(matches!(result, Err(SettingsError::InvalidProperty { .. })));
    }

    #[test]
    fn toml_defaults_fill_unset_fields() {
        let file = toml(
            r#"
            [entry]
            icon = "📝"
            push = false
            tags = ["cli"]
            groups = ["ops"]
        "#,
        );

        let cli = cli(&["--tag", "deploy", "--push"]);
        let entry = ValidatedSettings::from_raw(&cli, Some(&file))
            .unwrap()
            .entry;

        assert_eq!(entry.icon.as_deref(), Some("📝"));
        assert_eq!(entry.push, Some(true));
        assert_eq!(entry.tags, Some(vec!["deploy".to_string()]));
        assert_eq!(entry.groups, Some(vec!["ops".to_string()]));
        assert!(entry.external_channels.is_none());
    }

    #[test]
    fn entry_file_with_flag_overrides() {
        let file = entry_file(&json!({
            "title": "From file",
            "summary": "file summary",
            "body": "file body",
            "tags": ["file"],
            "properties": {"source": "file"}
        }));
        let path = file.path().to_str().unwrap();

        let cli = cli(&["--entry", path, "--title", "From flag", "--property", "extra=1"]);
        let entry = ValidatedSettings::from_raw(&cli, None).unwrap().entry;

        assert_eq!(entry.title, "From flag");
        assert_eq!(entry.summary, "file summary");
        assert_eq!(entry.tags, Some(vec!["file".to_string()]));

        let properties = entry.properties.unwrap();
        assert_eq!(properties["source"], json!("file"));
        assert_eq!(properties["extra"], json!(1));
    }

    #[test]
    fn invalid_entry_file_reports_first_rule() {
        let file = entry_file(&json!({
            "title": "T",
            "summary": "S",
            "body": "B",
            "tags": "not-a-list"
        }));
        let path = file.path().to_str().unwrap();

        let result = ValidatedSettings::from_raw(&cli(&["--entry", path]), None);

        match result {
            Err(SettingsError::EntryInvalid { source, .. }) => {
                assert_eq!(source.to_string(), "tags is not an array");
            }
            other => panic!("expected EntryInvalid, got {other:?}"),
        }
    }

    #[test]
    fn malformed_entry_file_returns_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let path = file.path().to_str().unwrap();

        let result = ValidatedSettings::from_raw(&cli(&["--entry", path]), None);

        assert!(matches!(result, Err(SettingsError::EntryParse { .. })));
    }

    #[test]
    fn missing_entry_file_returns_read_error() {
        let result = ValidatedSettings::from_raw(&cli(&["--entry", "/nonexistent/entry.json"]), None);

        assert!(matches!(result, Err(SettingsError::EntryRead { .. })));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_explicit_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [account]
            api_key = "{API_KEY}"
            project_id = "loaded"

            [endpoint]
            hostname = "logs.internal"
        "#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::parse_from_iter(["everylog", "--config", path]);
        let settings = ValidatedSettings::load(&cli).unwrap();

        assert_eq!(settings.project_id, "loaded");
        assert_eq!(settings.options.hostname, "logs.internal");
    }

    #[test]
    fn load_missing_explicit_config_returns_error() {
        let cli = Cli::parse_from_iter(["everylog", "--config", "/nonexistent/everylog.toml"]);
        let result = ValidatedSettings::load(&cli);

        assert!(matches!(result, Err(SettingsError::FileRead { .. })));
    }

    #[test]
    fn write_default_config_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("everylog.toml");

        write_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[account]"));
        assert!(SettingsFile::parse(&content).is_ok());
    }

    #[test]
    fn write_default_config_to_invalid_path_returns_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("everylog.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(SettingsError::FileWrite { .. })));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_hides_api_key() {
        let settings = ValidatedSettings::from_raw(&cli(&[]), None).unwrap();
        let shown = settings.to_string();

        assert!(shown.contains("my-project"));
        assert!(shown.contains("https://api.everylog.io/api/v1/log-entries"));
        assert!(!shown.contains(API_KEY));
    }
}
