use serde::Deserialize;
use std::{env, time::Duration};
use thiserror::Error;
use url::Url;

// Runtime settings for the gateway. Values come from the environment, with an
// optional TOML file (GATEWAY_CONFIG) overriding the upstream service URLs.

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_AUTH_SERVICE_URL: &str = "http://127.0.0.1:3001";
const DEFAULT_PROJECTS_SERVICE_URL: &str = "http://127.0.0.1:3002";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    pub auth_service_url: String,
    pub projects_service_url: String,
    pub upstream_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} must use http or https, got {scheme}")]
    UnsupportedScheme { name: &'static str, scheme: String },
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

// Shape of the optional TOML file:
//
// [services]
// auth = "http://auth:3001"
// projects = "http://projects:3002"
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub services: ServiceUrls,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceUrls {
    pub auth: Option<String>,
    pub projects: Option<String>,
}

impl FileConfig {
    pub fn parse(path: &str, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = match env::var("GATEWAY_CONFIG") {
            Ok(path) => {
                let contents =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                        path: path.clone(),
                        source,
                    })?;
                Some(FileConfig::parse(&path, &contents)?)
            }
            Err(_) => None,
        };

        Self::from_sources(|key| env::var(key).ok(), file)
    }

    // Precedence for service URLs: file, then environment, then defaults.
    pub fn from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        file: Option<FileConfig>,
    ) -> Result<Self, ConfigError> {
        let services = file.map(|file| file.services).unwrap_or_default();

        let port = parse_number("GATEWAY_PORT", lookup("GATEWAY_PORT"))?.unwrap_or(DEFAULT_PORT);
        let timeout_ms = parse_number("UPSTREAM_TIMEOUT_MS", lookup("UPSTREAM_TIMEOUT_MS"))?
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS);

        let auth_service_url = services
            .auth
            .or_else(|| lookup("AUTH_SERVICE_URL"))
            .unwrap_or_else(|| DEFAULT_AUTH_SERVICE_URL.to_string());
        let projects_service_url = services
            .projects
            .or_else(|| lookup("PROJECTS_SERVICE_URL"))
            .unwrap_or_else(|| DEFAULT_PROJECTS_SERVICE_URL.to_string());

        Ok(Self {
            port,
            auth_service_url: validate_url("AUTH_SERVICE_URL", &auth_service_url)?,
            projects_service_url: validate_url("PROJECTS_SERVICE_URL", &projects_service_url)?,
            upstream_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { name, value })
        })
        .transpose()
}

fn validate_url(name: &'static str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { name, source })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            name,
            scheme: url.scheme().to_string(),
        });
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
