use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::models::ItemConfig;

/// Prefix of the environment variables that carry SMTP settings.
pub const ENV_PREFIX: &str = "RATE_TRACKER";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub products: Vec<ItemConfig>,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub smtp: SmtpSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "Mozilla/5.0".to_string(),
            concurrency: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub subject: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            subject: "Daily Price Report".to_string(),
        }
    }
}

/// Notification channel settings. Any field may be missing; the notifier
/// decides whether the set is complete enough to send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Flat view of the `RATE_TRACKER_*` variables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SmtpEnvironment {
    smtp_server: Option<String>,
    smtp_port: Option<u16>,
    smtp_username: Option<String>,
    smtp_password: Option<String>,
    email_from: Option<String>,
    email_to: Option<String>,
}

impl SmtpSettings {
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let env: SmtpEnvironment = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(Self {
            server: env.smtp_server,
            port: env.smtp_port,
            username: env.smtp_username,
            password: env.smtp_password,
            from: env.email_from,
            to: env.email_to,
        })
    }

    /// Fields set in `other` win over fields set in `self`.
    pub fn overlay(self, other: SmtpSettings) -> Self {
        Self {
            server: other.server.or(self.server),
            port: other.port.or(self.port),
            username: other.username.or(self.username),
            password: other.password.or(self.password),
            from: other.from.or(self.from),
            to: other.to.or(self.to),
        }
    }
}

impl AppConfig {
    /// Loads the YAML file at `path` and overlays SMTP settings from the environment.
    /// The file is read as YAML whatever its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_environment(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_with_environment(
        path: impl AsRef<Path>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml).required(true))
            .build()?;

        let mut config: AppConfig = s.try_deserialize()?;
        let env_smtp = SmtpSettings::from_environment(environment)?;
        config.smtp = config.smtp.overlay(env_smtp);

        config.validate()?;

        if config.products.is_empty() {
            tracing::warn!("No products configured in {}", path.display());
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Message("Fetch timeout_secs must be greater than 0".into()));
        }

        if self.fetch.concurrency == 0 {
            return Err(ConfigError::Message("Fetch concurrency must be greater than 0".into()));
        }

        for (index, item) in self.products.iter().enumerate() {
            item.validate().map_err(|e| {
                ConfigError::Message(format!("Invalid product #{} ({}): {}", index + 1, item.name, e))
            })?;
        }

        Ok(())
    }
}
