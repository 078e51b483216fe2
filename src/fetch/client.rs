use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::identity::ProxyCredentials;

/// Build the HTTP client for a run.
///
/// With credentials every request goes through the proxy using basic proxy
/// auth. Without them the client connects directly; proxy settings in the
/// environment are ignored either way.
pub fn build_client(proxy: Option<&ProxyCredentials>, timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .cookie_store(true)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

    builder = match proxy {
        Some(creds) => {
            info!(proxy = %creds.redacted(), "using proxy");
            builder.proxy(creds.to_proxy().context("configuring proxy")?)
        }
        None => {
            info!("no proxy");
            builder.no_proxy()
        }
    };

    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }

    builder.build().context("building HTTP client")
}
