// Configuration for the country directory
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/terradex/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default country endpoint (REST Countries v3.1)
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Write rolling JSON log files in addition to the TUI buffer
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Country dataset endpoint
    pub endpoint: String,

    /// Request timeout for the dataset fetch, in seconds.
    /// Keeps a hanging endpoint from pinning the UI in a loading state.
    pub request_timeout_secs: u64,

    /// Debounce interval for filter recomputation, in milliseconds
    pub debounce_ms: u64,

    /// Demo mode: browse a built-in fixture dataset, no network
    pub demo_mode: bool,

    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    debounce_ms: Option<u64>,
    theme: Option<String>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/terradex/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("terradex").join("config.toml"))
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Debounce interval as a Duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# terradex configuration
# Uncomment and modify options as needed

# Country dataset endpoint (REST Countries v3.1)
# endpoint = "https://restcountries.com/v3.1/all"

# Request timeout for the dataset fetch, in seconds
# request_timeout_secs = 30

# Debounce interval for filter recomputation, in milliseconds
# debounce_ms = 200

# Theme: auto, dracula, nord, gruvbox
# theme = "auto"

# Logging configuration
# [logging]
# level = "info"          # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false    # also write rolling JSON log files
# file_dir = "./logs"
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# terradex configuration

# Country dataset endpoint (REST Countries v3.1)
endpoint = "{endpoint}"

# Request timeout for the dataset fetch, in seconds
request_timeout_secs = {timeout}

# Debounce interval for filter recomputation, in milliseconds
debounce_ms = {debounce}

# Theme: auto, dracula, nord, gruvbox
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
"#,
            endpoint = self.endpoint,
            timeout = self.request_timeout_secs,
            debounce = self.debounce_ms,
            theme = self.theme,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::resolve(file)
    }

    /// Merge one layer of file config with environment overrides
    fn resolve(file: FileConfig) -> Self {
        // Endpoint: env > file > default
        let endpoint = std::env::var("TERRADEX_ENDPOINT")
            .ok()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        // Timeout: env > file > default
        let request_timeout_secs = std::env::var("TERRADEX_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .unwrap_or(30);

        // Debounce interval: env > file > default (quantized ~200ms)
        let debounce_ms = std::env::var("TERRADEX_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.debounce_ms)
            .unwrap_or(200);

        // Demo mode: env only (runtime flag)
        let demo_mode = std::env::var("TERRADEX_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        // Theme: env > file > default
        let theme = std::env::var("TERRADEX_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "auto".to_string());

        // Logging settings: file config only (RUST_LOG handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or_else(|| "info".to_string()),
            file_enabled: file_logging.file_enabled.unwrap_or(false),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs")),
        };

        Self {
            endpoint,
            request_timeout_secs,
            debounce_ms,
            demo_mode,
            theme,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
            debounce_ms: 200,
            demo_mode: false,
            theme: "auto".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}
