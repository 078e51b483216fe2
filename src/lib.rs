pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod identity;
pub mod output;
pub mod scrape;
pub mod table;

pub use config::{ProxyEndpoint, ScrapeConfig};
pub use error::ScrapeError;
pub use identity::{FixedIdentity, IdentityProvider, ProxyCredentials, SystemIdentity};
pub use scrape::{run, RunSummary};
pub use table::{Columns, ErrorCodeRecord};
