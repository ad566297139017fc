use mongodb::{
    Client,
    bson::doc,
    options::{ClientOptions, Tls, TlsOptions},
};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Parse the connection string and apply pool, timeout and TLS settings.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    if let Some(ref ca_file) = config.tls_ca_file {
        if !ca_file.is_file() {
            return Err(DatabaseError::ConfigError(format!(
                "TLS CA file not found: {}",
                ca_file.display()
            )));
        }
        options.tls = Some(Tls::Enabled(
            TlsOptions::builder().ca_file_path(ca_file.clone()).build(),
        ));
    }

    Ok(options)
}

/// Connect with default settings for `url`.
///
/// ```ignore
/// let client = database::mongodb::connect("mongodb://localhost:27017").await?;
/// ```
pub async fn connect(url: &str) -> DatabaseResult<Client> {
    connect_from_config(&MongoConfig::new(url)).await
}

/// Build a client from `config` and verify the server answers a ping.
#[instrument(skip_all, fields(url = %config.redacted_url(), database = %config.database))]
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB");

    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!(tls = config.tls_ca_file.is_some(), "Connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] with exponential backoff.
///
/// `None` retries `config.connect_retries` times with the default delays.
/// Configuration errors are not retried.
///
/// ```ignore
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config_with_retry(&config, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    // Fail fast on settings that no retry can fix.
    client_options(config).await?;

    match retry_config {
        Some(retry_config) => retry_with_backoff(|| connect_from_config(config), retry_config).await,
        None => {
            let retry_config = RetryConfig::new().with_max_retries(config.connect_retries);
            retry_with_backoff(|| connect_from_config(config), retry_config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_options_applies_config() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "shop")
            .with_app_name("products-api")
            .with_pool_size(20, 2);

        let options = client_options(&config).await.unwrap();
        assert_eq!(options.max_pool_size, Some(20));
        assert_eq!(options.min_pool_size, Some(2));
        assert_eq!(options.app_name.as_deref(), Some("products-api"));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(10)));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_secs(30)));
        assert!(options.tls.is_none());
    }

    #[tokio::test]
    async fn test_client_options_rejects_invalid_url() {
        let config = MongoConfig::new("not-a-mongo-url");
        let err = client_options(&config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Mongo(_)));
    }

    #[tokio::test]
    async fn test_client_options_missing_ca_file() {
        let config = MongoConfig::new("mongodb://localhost:27017")
            .with_tls_ca_file("/nonexistent/dir/cert.pem");
        let err = client_options(&config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConfigError(ref msg) if msg.contains("cert.pem")));
    }

    #[tokio::test]
    async fn test_client_options_enables_tls_with_ca_file() {
        let ca_file = tempfile::Builder::new().suffix(".pem").tempfile().unwrap();
        let config =
            MongoConfig::new("mongodb://localhost:27017").with_tls_ca_file(ca_file.path());

        let options = client_options(&config).await.unwrap();
        match options.tls {
            Some(Tls::Enabled(tls)) => {
                assert_eq!(tls.ca_file_path.as_deref(), Some(ca_file.path()));
            }
            other => panic!("expected TLS to be enabled, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connect_from_config_with_retry_does_not_retry_bad_config() {
        let config = MongoConfig::new("mongodb://localhost:27017")
            .with_tls_ca_file("/nonexistent/dir/cert.pem");
        let result = connect_from_config_with_retry(&config, None).await;
        assert!(matches!(result, Err(DatabaseError::ConfigError(_))));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect() {
        let mongo_url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        assert!(connect(&mongo_url).await.is_ok());
    }
}
