// src/error.rs

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Failure kinds a run can end with. Carried inside `anyhow::Error` so callers
/// can `downcast_ref` when they need to tell them apart.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not determine local user: {0}")]
    Identity(String),

    #[error("request to {url} failed")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("error in fetching the html page ({status}), check the url {url}")]
    UnexpectedStatus { url: Url, status: StatusCode },

    #[error("column {column} has {actual} entries but BEA-Code has {expected}")]
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{missing} cells missing from the extracted table")]
    IncompleteExtraction { missing: usize },
}
