use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the persisted token file; defaults under $HOME when unset
    pub dir: Option<PathBuf>,
    pub token_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("CONSOLE_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("CONSOLE_API_BASE_URL") {
            self.api.base_url = v.trim_end_matches('/').to_string();
        }
        if let Ok(v) = env::var("CONSOLE_REQUEST_TIMEOUT_SECS") {
            match parse_timeout_secs(&v) {
                Some(secs) => self.api.request_timeout_secs = secs,
                None => tracing::warn!(
                    value = %v,
                    default = self.api.request_timeout_secs,
                    "ignoring CONSOLE_REQUEST_TIMEOUT_SECS: expected a positive number of seconds"
                ),
            }
        }
        if let Ok(v) = env::var("CONSOLE_STORAGE_DIR") {
            self.storage.dir = Some(PathBuf::from(v));
        }
        if let Ok(v) = env::var("CONSOLE_LOG") {
            self.logging.filter = v;
        }

        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    /// Resolve the storage directory, falling back to ~/.config/admin-console
    pub fn storage_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.storage.dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let home = env::var("HOME")
                    .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
                Ok(PathBuf::from(home).join(".config").join("admin-console"))
            }
        }
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                request_timeout_secs: 30,
                user_agent: concat!("admin-console/", env!("CARGO_PKG_VERSION")).to_string(),
            },
            storage: StorageConfig {
                dir: None,
                token_file: "tokens.dev.json".to_string(),
            },
            logging: LoggingConfig {
                filter: "admin_console=debug,info".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig {
                base_url: "https://staging.example.com".to_string(),
                request_timeout_secs: 15,
                user_agent: concat!("admin-console/", env!("CARGO_PKG_VERSION")).to_string(),
            },
            storage: StorageConfig {
                dir: None,
                token_file: "tokens.staging.json".to_string(),
            },
            logging: LoggingConfig {
                filter: "info".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: "https://app.example.com".to_string(),
                request_timeout_secs: 10,
                user_agent: concat!("admin-console/", env!("CARGO_PKG_VERSION")).to_string(),
            },
            storage: StorageConfig {
                dir: None,
                token_file: "tokens.json".to_string(),
            },
            logging: LoggingConfig {
                filter: "warn".to_string(),
            },
        }
    }
}

/// Positive whole seconds; zero and non-numbers are rejected
fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static ClientConfig {
    &CONFIG
}
