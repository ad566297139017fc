use std::path::PathBuf;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse};

/// MongoDB connection settings
///
/// Constructed manually or loaded from the environment with the `config` feature.
///
/// ```ignore
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "shop")
///     .with_app_name("products-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:password@]host[:port][/db][?options]`
    pub url: String,

    pub database: String,

    /// Reported to the server in its connection logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,

    /// PEM bundle used to verify the server certificate. Enables TLS when set.
    pub tls_ca_file: Option<PathBuf>,

    /// Retries after the first failed connection attempt at startup
    pub connect_retries: u32,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn with_tls_ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_ca_file = Some(path.into());
        self
    }

    pub fn with_connect_retries(mut self, retries: u32) -> Self {
        self.connect_retries = retries;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Connection string with any password replaced by `***`, safe to log.
    pub fn redacted_url(&self) -> String {
        let Some(scheme_end) = self.url.find("://") else {
            return self.url.clone();
        };
        let rest_start = scheme_end + 3;
        let rest = &self.url[rest_start..];
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());

        let Some(at) = rest[..authority_end].rfind('@') else {
            return self.url.clone();
        };
        let userinfo = &rest[..at];
        let user = userinfo.split(':').next().unwrap_or_default();

        format!(
            "{}{}:***{}",
            &self.url[..rest_start],
            user,
            &rest[at..]
        )
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
            tls_ca_file: None,
            connect_retries: 3,
        }
    }
}

/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (default 100), `MONGODB_MIN_POOL_SIZE` (default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 30)
/// - `MONGODB_TLS_CA_FILE`
/// - `MONGODB_CONNECT_RETRIES` (default 3)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .map_err(|_| {
                ConfigError::MissingEnvVar("MONGODB_DATABASE or MONGO_DATABASE".to_string())
            })?;

        let defaults = Self::default();

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
            tls_ca_file: std::env::var_os("MONGODB_TLS_CA_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            connect_retries: env_parse("MONGODB_CONNECT_RETRIES", defaults.connect_retries)?,
        })
    }
}
