//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_API_URL` - Base URL of the catalog API (http or https)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_API_TOKEN` - Bearer token for the catalog API
//! - `CATALOG_CACHE_TTL_SECS` - Catalog cache lifetime (default: 300)
//! - `PRODUCTS_PER_PAGE` - Default page size for listings (default: 16)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default number of products shown per listing page.
const DEFAULT_PRODUCTS_PER_PAGE: usize = 16;

/// Default catalog cache TTL in seconds.
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog API configuration
    pub catalog: CatalogConfig,
    /// Default page size for product listings
    pub products_per_page: usize,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., "production")
    pub sentry_environment: Option<String>,
}

/// Catalog API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without trailing slash
    pub base_url: String,
    /// Bearer token for the catalog API, if required
    pub api_token: Option<SecretString>,
    /// How long a fetched catalog stays cached
    pub cache_ttl: Duration,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let catalog = CatalogConfig::from_env()?;

        let products_per_page = match get_optional_env("PRODUCTS_PER_PAGE") {
            Some(raw) => parse_products_per_page(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("PRODUCTS_PER_PAGE".to_string(), e))?,
            None => DEFAULT_PRODUCTS_PER_PAGE,
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            catalog,
            products_per_page,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = validate_catalog_url(&get_required_env("CATALOG_API_URL")?)?;
        let api_token = get_optional_env("CATALOG_API_TOKEN").map(SecretString::from);

        let cache_ttl_secs = match get_optional_env("CATALOG_CACHE_TTL_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_CACHE_TTL_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        Ok(Self {
            base_url,
            api_token,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate the catalog API base URL and strip any trailing slash.
fn validate_catalog_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|e| {
        ConfigError::InvalidEnvVar("CATALOG_API_URL".to_string(), e.to_string())
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "CATALOG_API_URL".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

/// Parse and validate a page size value.
fn parse_products_per_page(raw: &str) -> Result<usize, String> {
    let value = raw.parse::<usize>().map_err(|e| e.to_string())?;
    if value == 0 {
        return Err("page size must be at least 1".to_string());
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_catalog_url_strips_trailing_slash() {
        let url = validate_catalog_url("https://api.garimpo.store/v1/").unwrap();
        assert_eq!(url, "https://api.garimpo.store/v1");
    }

    #[test]
    fn test_validate_catalog_url_rejects_garbage() {
        assert!(validate_catalog_url("not a url").is_err());
    }

    #[test]
    fn test_validate_catalog_url_rejects_non_http_scheme() {
        let result = validate_catalog_url("ftp://api.garimpo.store");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_products_per_page() {
        assert_eq!(parse_products_per_page("16").unwrap(), 16);
        assert!(parse_products_per_page("0").is_err());
        assert!(parse_products_per_page("many").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog: CatalogConfig {
                base_url: "http://localhost:4000".to_string(),
                api_token: None,
                cache_ttl: Duration::from_secs(300),
            },
            products_per_page: 16,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_catalog_config_debug_redacts_token() {
        let config = CatalogConfig {
            base_url: "http://localhost:4000".to_string(),
            api_token: Some(SecretString::from("super_secret_token")),
            cache_ttl: Duration::from_secs(300),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("localhost:4000"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }
}
