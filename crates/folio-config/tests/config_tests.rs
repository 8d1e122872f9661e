#[cfg(test)]
mod tests {
    use folio_config::ConfigLoader;
    use folio_config::schema::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen, "127.0.0.1:4000");
        assert!(config.cors);
        assert!(config.api_prefix);
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn test_default_config_is_valid() {
        let warnings = FolioConfig::default().validate().unwrap();
        assert!(warnings.is_empty());
    }

    // ── TOML parsing ───────────────────────────────────────────

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[client]
api_base_url = "https://api.example.com"

[logging]
format = "json"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.client.api_base_url, "https://api.example.com");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.listen, "127.0.0.1:4000");
        assert_eq!(config.client.timeout_secs, 10);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[database]\npath = \"/tmp/folio-test.db\"").unwrap();

        let loader = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loader.path(), path.as_path());
        assert_eq!(loader.get().database.path, PathBuf::from("/tmp/folio-test.db"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let loader = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loader.get().logging.format, "pretty");
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[server\nlisten = ").unwrap();
        let err = ConfigLoader::load(Some(&path)).err().unwrap();
        assert!(err.to_string().contains("failed to parse"));
    }

    // ── Env overrides ──────────────────────────────────────────

    #[test]
    fn test_port_override_keeps_host() {
        let mut config = FolioConfig::default();
        config.server.listen = "0.0.0.0:4000".into();
        let config = ConfigLoader::apply_env_overrides(config, env(&[("PORT", "8080")]));
        assert_eq!(config.server.listen, "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let config =
            ConfigLoader::apply_env_overrides(FolioConfig::default(), env(&[("PORT", "http")]));
        assert_eq!(config.server.listen, "127.0.0.1:4000");
    }

    #[test]
    fn test_api_base_url_override() {
        let config = ConfigLoader::apply_env_overrides(
            FolioConfig::default(),
            env(&[("FOLIO_API_BASE_URL", "https://folio.example")]),
        );
        assert_eq!(config.client.api_base_url, "https://folio.example");

        // An empty value keeps the local development default.
        let config = ConfigLoader::apply_env_overrides(
            FolioConfig::default(),
            env(&[("FOLIO_API_BASE_URL", "")]),
        );
        assert_eq!(config.client.api_base_url, "http://localhost:4000");
    }

    #[test]
    fn test_database_and_log_overrides() {
        let config = ConfigLoader::apply_env_overrides(
            FolioConfig::default(),
            env(&[("FOLIO_DATABASE", "/data/folio.db"), ("FOLIO_LOG_LEVEL", "debug")]),
        );
        assert_eq!(config.database.path, PathBuf::from("/data/folio.db"));
        assert_eq!(config.logging.level, "debug");
    }

    // ── Validation ─────────────────────────────────────────────

    #[test]
    fn test_validate_rejects_empty_listen() {
        let mut config = FolioConfig::default();
        config.server.listen = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("server.listen"));
    }

    #[test]
    fn test_validate_rejects_non_http_api_url() {
        let mut config = FolioConfig::default();
        config.client.api_base_url = "localhost:4000".into();
        assert!(config.validate().unwrap_err().contains("client.api_base_url"));
    }

    #[test]
    fn test_validate_warns_on_wildcard_bind() {
        let mut config = FolioConfig::default();
        config.server.listen = "0.0.0.0:4000".into();
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, WarningSeverity::Warning);
    }

    #[test]
    fn test_validate_warns_on_unknown_log_format() {
        let mut config = FolioConfig::default();
        config.logging.format = "xml".into();
        let warnings = config.validate().unwrap();
        assert!(warnings.iter().any(|w| w.field == "logging.format"));
    }

    #[test]
    fn test_database_path_tilde_expansion() {
        let config = DatabaseConfig {
            path: PathBuf::from("/abs/folio.db"),
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/abs/folio.db"));

        if let Some(home) = dirs::home_dir() {
            let config = DatabaseConfig::default();
            assert_eq!(config.resolved_path(), home.join(".folio").join("folio.db"));
        }
    }
}
