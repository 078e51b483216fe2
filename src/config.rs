// src/config.rs

use std::{fmt, path::PathBuf, time::Duration};
use url::Url;

use crate::identity::ProxyCredentials;

/// Oracle WebLogic 12.1.1 "BEA messages" chapter.
pub const DEFAULT_SOURCE_URL: &str =
    "https://docs.oracle.com/cd/E24329_01/doc.1211/e26117/chapter_bea_messages.htm";
pub const DEFAULT_OUTPUT_FILE: &str = "Oracle_BEA_Errorcodes.csv";
pub const DEFAULT_PROXY_HOST: &str = "proxy";
pub const DEFAULT_PROXY_PORT: u16 = 80;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Host and port of the HTTP(S) proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    pub host: String,
    pub port: u16,
}

impl ProxyEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://host:port`, the form reqwest expects for a proxy.
    pub fn proxy_url(&self) -> String {
        format!("http://{}", self)
    }
}

impl Default for ProxyEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT)
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Everything a single run needs. Built by the binary from CLI flags and the
/// prompted secret, then handed to [`crate::run`].
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub source_url: Url,
    pub output_path: PathBuf,
    /// `None` connects directly.
    pub proxy: Option<ProxyCredentials>,
    /// `None` lets the request block indefinitely.
    pub timeout: Option<Duration>,
    /// Treat missing cells as fatal instead of a warning.
    pub strict: bool,
}

impl ScrapeConfig {
    /// Config for `source_url` with default output path and timeout, no proxy.
    pub fn new(source_url: Url) -> Self {
        Self {
            source_url,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            proxy: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            strict: false,
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_proxy(mut self, creds: ProxyCredentials) -> Self {
        self.proxy = Some(creds);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_proxy_80() {
        let ep = ProxyEndpoint::default();
        assert_eq!(ep.to_string(), "proxy:80");
        assert_eq!(ep.proxy_url(), "http://proxy:80");
    }

    #[test]
    fn new_config_uses_defaults() {
        let url = Url::parse(DEFAULT_SOURCE_URL).unwrap();
        let cfg = ScrapeConfig::new(url.clone());
        assert_eq!(cfg.source_url, url);
        assert_eq!(cfg.output_path, PathBuf::from("Oracle_BEA_Errorcodes.csv"));
        assert_eq!(cfg.timeout, Some(Duration::from_secs(30)));
        assert!(cfg.proxy.is_none());
        assert!(!cfg.strict);
    }
}
