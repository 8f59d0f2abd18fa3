//! Tests for TOML configuration parsing.

use super::SettingsError;
use super::file::{SettingsFile, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_account_section() {
        let toml = r#"
            [account]
            api_key = "0f3c9a4e-7b1d-4c2e-9f6a-2d8e5b7c1a90"
            project_id = "my-project"
        "#;

        let file = SettingsFile::parse(toml).unwrap();

        assert_eq!(
            file.account.api_key.as_deref(),
            Some("0f3c9a4e-7b1d-4c2e-9f6a-2d8e5b7c1a90")
        );
        assert_eq!(file.account.project_id.as_deref(), Some("my-project"));
    }

    #[test]
    fn parse_endpoint_section() {
        let toml = r#"
            [endpoint]
            protocol = "http"
            hostname = "localhost"
            port = 8080
            path = "/logs"
            method = "PUT"
            local_testing = true
            unauthorized_is_success = true
        "#;

        let file = SettingsFile::parse(toml).unwrap();
        let endpoint = &file.endpoint;

        assert_eq!(endpoint.protocol.as_deref(), Some("http"));
        assert_eq!(endpoint.hostname.as_deref(), Some("localhost"));
        assert_eq!(endpoint.port, Some(8080));
        assert_eq!(endpoint.path.as_deref(), Some("/logs"));
        assert_eq!(endpoint.method.as_deref(), Some("PUT"));
        assert!(endpoint.local_testing);
        assert!(endpoint.unauthorized_is_success);
    }

    #[test]
    fn parse_entry_section() {
        let toml = r#"
            [entry]
            icon = "🚀"
            push = true
            tags = ["cli", "ops"]
            groups = ["oncall"]
            external_channels = ["slack"]
        "#;

        let file = SettingsFile::parse(toml).unwrap();
        let entry = &file.entry;

        assert_eq!(entry.icon.as_deref(), Some("🚀"));
        assert_eq!(entry.push, Some(true));
        assert_eq!(entry.tags, Some(vec!["cli".to_string(), "ops".to_string()]));
        assert_eq!(entry.groups, Some(vec!["oncall".to_string()]));
        assert_eq!(entry.external_channels, Some(vec!["slack".to_string()]));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = SettingsFile::parse("").unwrap();

        assert!(file.account.api_key.is_none());
        assert!(file.endpoint.hostname.is_none());
        assert!(!file.endpoint.local_testing);
        assert!(file.entry.tags.is_none());
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_section_is_rejected() {
        let result = SettingsFile::parse("[server]\nurl = \"x\"");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = SettingsFile::parse("[account]\ntoken = \"x\"");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = SettingsFile::parse("[endpoint]\nport = \"eighty\"");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let result = SettingsFile::parse("[endpoint]\nport = 70000");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = SettingsFile::load(std::path::Path::new("/nonexistent/everylog.toml"));
        assert!(matches!(result, Err(SettingsError::FileRead { .. })));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let file = SettingsFile::parse(&default_config_template()).unwrap();

        assert!(file.account.api_key.is_none());
        assert!(file.endpoint.protocol.is_none());
    }

    #[test]
    fn template_mentions_every_section() {
        let template = default_config_template();

        assert!(template.contains("[account]"));
        assert!(template.contains("[endpoint]"));
        assert!(template.contains("[entry]"));
        assert!(template.contains("api.everylog.io"));
    }
}
