use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration, mapped from `folio.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

// ── Server ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP listen address.
    pub listen: String,
    /// Allow cross-origin requests (browser front-ends on another port).
    pub cors: bool,
    /// Also mount every route under `/api`.
    pub api_prefix: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:4000".into(),
            cors: true,
            api_prefix: true,
        }
    }
}

// ── Database ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file. `~` expands to the home directory.
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("~/.folio/folio.db"),
        }
    }
}

impl DatabaseConfig {
    /// The database path with a leading `~` expanded.
    pub fn resolved_path(&self) -> PathBuf {
        expand_home(&self.path)
    }
}

// ── Terminal client ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the portfolio API.
    pub api_base_url: String,
    /// Per-request timeout in seconds. 0 disables the timeout.
    pub timeout_secs: u64,
    /// Prompt shown before the input line and echoed commands.
    pub prompt: String,
    /// Reply to `whoami`.
    pub whoami: String,
    /// Reply to `education`.
    pub education: String,
    /// Where the selected theme is remembered. None = `<config dir>/folio/theme`.
    pub theme_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000".into(),
            timeout_secs: 10,
            prompt: "guest@folio:~$".into(),
            whoami: "guest".into(),
            education: "Computer Science".into(),
            theme_file: None,
        }
    }
}

impl ClientConfig {
    pub fn resolved_theme_file(&self) -> Option<PathBuf> {
        match &self.theme_file {
            Some(p) => Some(expand_home(p)),
            None => dirs::config_dir().map(|d| d.join("folio").join("theme")),
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

fn expand_home(path: &std::path::Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl FolioConfig {
    /// Validate the config and return a list of warnings.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Server listen address ───
        if self.server.listen.is_empty() {
            warnings.push(ConfigWarning {
                field: "server.listen".into(),
                message: "listen address is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. '127.0.0.1:4000'".into()),
            });
        } else if !self.server.listen.contains(':') {
            warnings.push(ConfigWarning {
                field: "server.listen".into(),
                message: format!("'{}' has no port", self.server.listen),
                severity: WarningSeverity::Error,
                hint: Some("Use 'host:port', e.g. '127.0.0.1:4000'".into()),
            });
        } else if self.server.listen.starts_with("0.0.0.0") {
            warnings.push(ConfigWarning {
                field: "server.listen".into(),
                message: "binding to 0.0.0.0 — the API is reachable from all interfaces".into(),
                severity: WarningSeverity::Warning,
                hint: Some("POST /skills is unauthenticated; prefer '127.0.0.1:4000'".into()),
            });
        }

        // ── Database ───
        if self.database.path.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                field: "database.path".into(),
                message: "database path is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. '~/.folio/folio.db'".into()),
            });
        }

        // ── Client API URL ───
        let url = &self.client.api_base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            warnings.push(ConfigWarning {
                field: "client.api_base_url".into(),
                message: format!("'{}' is not an http(s) URL", url),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'http://localhost:4000'".into()),
            });
        }

        // ── Logging format ───
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        // ── Logging level ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
