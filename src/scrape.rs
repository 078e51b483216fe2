// src/scrape.rs

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::{
    config::ScrapeConfig,
    error::ScrapeError,
    extract::extract_columns,
    fetch::{build_client, fetch_page},
    output::write_records,
    table::missing_cells,
};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub missing_cells: usize,
    pub output_path: PathBuf,
}

/// Fetch the configured page, extract the error-code table and write it out.
///
/// Nothing is written unless the page came back 200, every column lined up,
/// and (in strict mode) no cell is missing.
#[instrument(level = "info", skip_all, fields(url = %config.source_url))]
pub async fn run(config: &ScrapeConfig) -> Result<RunSummary> {
    let client = build_client(config.proxy.as_ref(), config.timeout)?;
    let body = fetch_page(&client, &config.source_url).await?;

    let records = extract_columns(&body)
        .context("extracting columns")?
        .into_records()?;

    let missing = missing_cells(&records);
    if missing > 0 {
        if config.strict {
            return Err(ScrapeError::IncompleteExtraction { missing }.into());
        }
        warn!(
            missing,
            "There is some inconsistency with the data fetched from the page, possible missing fields"
        );
    }

    write_records(&config.output_path, &records)?;
    info!(
        path = %config.output_path.display(),
        rows = records.len(),
        "The Oracle codes are available"
    );

    Ok(RunSummary {
        rows: records.len(),
        missing_cells: missing,
        output_path: config.output_path.clone(),
    })
}
