// src/identity.rs

use anyhow::Result;
use reqwest::Proxy;
use std::{env, fmt};
use tracing::debug;

use crate::{config::ProxyEndpoint, error::ScrapeError};

/// Environment variables consulted for the login name, in order.
const USER_VARS: &[&str] = &["USER", "USERNAME", "LOGNAME"];

/// Source of the local login name used as the proxy user.
pub trait IdentityProvider {
    fn current_user(&self) -> Result<String>;
}

/// Reads the login name of the current session from the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl IdentityProvider for SystemIdentity {
    fn current_user(&self) -> Result<String> {
        Ok(user_from(|var| env::var(var).ok())?)
    }
}

/// First variable of [`USER_VARS`] that `lookup` knows, normalized. A variable
/// that is set but empty is an error, not a reason to try the next one.
fn user_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ScrapeError> {
    let raw = USER_VARS
        .iter()
        .find_map(|&var| {
            lookup(var).map(|v| {
                debug!(var, "login name found");
                v
            })
        })
        .ok_or_else(|| ScrapeError::Identity(format!("none of {} is set", USER_VARS.join(", "))))?;
    normalize_user(&raw)
}

/// Always returns the same name.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Result<String> {
        Ok(normalize_user(&self.0)?)
    }
}

/// `DOMAIN\User` -> `user`. Rejects anything that would not survive being
/// embedded in `user:secret@host:port`.
pub fn normalize_user(raw: &str) -> Result<String, ScrapeError> {
    let name = raw.trim().rsplit('\\').next().unwrap_or_default();
    if name.is_empty() {
        return Err(ScrapeError::Identity(format!("empty login name in {:?}", raw)));
    }
    if name.chars().any(|c| c.is_whitespace() || c == ':' || c == '@') {
        return Err(ScrapeError::Identity(format!(
            "unexpected login name {:?}",
            raw
        )));
    }
    Ok(name.to_lowercase())
}

/// User, secret and proxy endpoint for basic proxy authentication.
#[derive(Clone)]
pub struct ProxyCredentials {
    pub username: String,
    secret: String,
    pub endpoint: ProxyEndpoint,
}

impl ProxyCredentials {
    pub fn new(
        username: impl Into<String>,
        secret: impl Into<String>,
        endpoint: ProxyEndpoint,
    ) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
            endpoint,
        }
    }

    /// Resolve the user through `identity`, then ask `secret` for the password.
    /// A bad identity fails before `secret` is called.
    pub fn resolve(
        identity: &dyn IdentityProvider,
        secret: impl FnOnce() -> Result<String>,
        endpoint: ProxyEndpoint,
    ) -> Result<Self> {
        let username = identity.current_user()?;
        let secret = secret()?;
        Ok(Self::new(username, secret, endpoint))
    }

    /// `user:****@host:port`
    pub fn redacted(&self) -> String {
        format!("{}:****@{}", self.username, self.endpoint)
    }

    /// Proxy for both http and https traffic with basic auth attached.
    pub fn to_proxy(&self) -> Result<Proxy> {
        Ok(Proxy::all(self.endpoint.proxy_url())?.basic_auth(&self.username, &self.secret))
    }
}

impl fmt::Debug for ProxyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyCredentials")
            .field("username", &self.username)
            .field("secret", &"****")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
