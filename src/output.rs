// src/output.rs

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::table::{ErrorCodeRecord, HEADER};

/// Write `records` as CSV to `path`, header first, replacing any existing file.
///
/// The data goes to a hidden sibling temp file which is renamed over `path`
/// once complete. On any failure the temp file is removed and `path` is left
/// as it was.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[ErrorCodeRecord]) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = temp_sibling(path)?;

    let result = write_csv(&tmp_path, records).and_then(|()| {
        fs::rename(&tmp_path, path)
            .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
        return result;
    }
    debug!(path = %path.display(), rows = records.len(), "csv written");
    Ok(())
}

fn write_csv(tmp_path: &Path, records: &[ErrorCodeRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(tmp_path)
        .with_context(|| format!("creating {:?}", tmp_path))?;

    // written by hand so an empty table still gets its header
    wtr.write_record(HEADER)
        .with_context(|| format!("writing header to {:?}", tmp_path))?;
    for record in records {
        wtr.serialize(record)
            .with_context(|| format!("writing {:?} to {:?}", record.code, tmp_path))?;
    }
    wtr.flush().with_context(|| format!("flushing {:?}", tmp_path))?;
    Ok(())
}

/// Read a file produced by [`write_records`]. Returns the header and rows.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<(Vec<String>, Vec<ErrorCodeRecord>)> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {:?}", path))?;

    let header: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header of {:?}", path))?
        .iter()
        .map(str::to_string)
        .collect();
    let rows = rdr
        .deserialize()
        .collect::<Result<Vec<ErrorCodeRecord>, _>>()
        .with_context(|| format!("parsing rows of {:?}", path))?;
    Ok((header, rows))
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .with_context(|| format!("output path {:?} has no file name", path))?;
    let tmp_name = format!(".{}.tmp", name.to_string_lossy());
    Ok(match path.parent() {
        Some(dir) => dir.join(tmp_name),
        None => PathBuf::from(tmp_name),
    })
}
