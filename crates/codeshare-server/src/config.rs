use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORE_URL: &str = "memory://";
const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("unsupported store url scheme: {0} (expected memory:// or s3://)")]
    UnsupportedScheme(String),

    #[error("store url is missing a bucket: {0}")]
    MissingBucket(String),
}

/// Where snippets live, parsed from `CODESHARE_STORE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUrl {
    /// `memory://` — process-local, lost on restart.
    Memory,
    /// `s3://<bucket>[/<prefix>]`
    S3 {
        bucket: String,
        prefix: Option<String>,
    },
}

impl StoreUrl {
    /// Whether snippets outlive the process.
    pub fn is_durable(&self) -> bool {
        !matches!(self, StoreUrl::Memory)
    }
}

impl FromStr for StoreUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "memory" || s == "memory://" {
            return Ok(StoreUrl::Memory);
        }

        let rest = s
            .strip_prefix("s3://")
            .ok_or_else(|| ConfigError::UnsupportedScheme(s.to_string()))?;

        let (bucket, prefix) = match rest.split_once('/') {
            Some((bucket, prefix)) => (bucket, prefix.trim_matches('/')),
            None => (rest, ""),
        };
        if bucket.is_empty() {
            return Err(ConfigError::MissingBucket(s.to_string()));
        }

        Ok(StoreUrl::S3 {
            bucket: bucket.to_string(),
            prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
        })
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub store: StoreUrl,
    pub aws_region: String,
    pub aws_endpoint_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset and empty values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let store = get("CODESHARE_STORE_URL")
            .as_deref()
            .unwrap_or(DEFAULT_STORE_URL)
            .parse()?;

        Ok(Self {
            bind: get("CODESHARE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
            store,
            aws_region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            aws_endpoint_url: get("AWS_ENDPOINT_URL"),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
