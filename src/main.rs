use anyhow::{Context, Result};
use beacodes::{
    config::{
        ProxyEndpoint, ScrapeConfig, DEFAULT_OUTPUT_FILE, DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT,
        DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT_SECS,
    },
    FixedIdentity, IdentityProvider, ProxyCredentials, SystemIdentity,
};
use clap::Parser;
use std::{env, io, path::PathBuf, process, time::Duration};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Set to skip the interactive password prompt.
const SECRET_ENV: &str = "BEACODES_PROXY_SECRET";

/// Download the Oracle BEA error-code table and save it as CSV.
#[derive(Debug, Parser)]
#[command(name = "beacodes", version)]
struct Cli {
    /// Documentation page to scrape.
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    url: Url,

    /// Where to write the CSV.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    #[arg(long, default_value = DEFAULT_PROXY_HOST)]
    proxy_host: String,

    #[arg(long, default_value_t = DEFAULT_PROXY_PORT)]
    proxy_port: u16,

    /// Proxy user; defaults to the current login name.
    #[arg(long)]
    proxy_user: Option<String>,

    /// Connect directly instead of through the proxy.
    #[arg(long, conflicts_with_all = ["proxy_host", "proxy_port", "proxy_user"])]
    no_proxy: bool,

    /// Request timeout in seconds, 0 for none.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Fail instead of warning when cells are missing.
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn proxy_credentials(&self) -> Result<Option<ProxyCredentials>> {
        if self.no_proxy {
            return Ok(None);
        }
        let identity: Box<dyn IdentityProvider> = match &self.proxy_user {
            Some(name) => Box::new(FixedIdentity(name.clone())),
            None => Box::new(SystemIdentity),
        };
        let endpoint = ProxyEndpoint::new(self.proxy_host.clone(), self.proxy_port);
        Ok(Some(ProxyCredentials::resolve(
            identity.as_ref(),
            || {
                secret_from(
                    |var| env::var(var).ok(),
                    || rpassword::prompt_password("Enter your login password: "),
                )
            },
            endpoint,
        )?))
    }

    fn into_config(self) -> Result<ScrapeConfig> {
        let proxy = self.proxy_credentials()?;
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        let mut config = ScrapeConfig::new(self.url)
            .with_output(self.output)
            .with_timeout(timeout)
            .strict(self.strict);
        config.proxy = proxy;
        Ok(config)
    }
}

/// The secret from [`SECRET_ENV`] if set, otherwise whatever `prompt` returns.
fn secret_from(
    lookup: impl Fn(&str) -> Option<String>,
    prompt: impl FnOnce() -> io::Result<String>,
) -> Result<String> {
    match lookup(SECRET_ENV) {
        Some(secret) => Ok(secret),
        None => prompt().context("reading password"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,beacodes=info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    info!("Fetching BEA error-codes data from {}", cli.url);

    let result = match cli.into_config() {
        Ok(config) => beacodes::run(&config).await.map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(err) = result {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
