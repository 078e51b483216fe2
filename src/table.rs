// src/table.rs

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// Output header, in column order.
pub const HEADER: [&str; 7] = [
    "BEA-Code",
    "Description",
    "Cause",
    "Action",
    "Level",
    "Type",
    "Impact",
];

/// One documented error code. `None` marks a cell the extractor could not fill.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorCodeRecord {
    #[serde(rename = "BEA-Code")]
    pub code: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Cause")]
    pub cause: Option<String>,
    #[serde(rename = "Action")]
    pub action: Option<String>,
    #[serde(rename = "Level")]
    pub level: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Impact")]
    pub impact: Option<String>,
}

impl ErrorCodeRecord {
    fn cells(&self) -> [&Option<String>; 7] {
        [
            &self.code,
            &self.description,
            &self.cause,
            &self.action,
            &self.level,
            &self.kind,
            &self.impact,
        ]
    }

    pub fn missing_cells(&self) -> usize {
        self.cells().iter().filter(|c| c.is_none()).count()
    }
}

/// Seven parallel columns as the extractor produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    pub code: Vec<Option<String>>,
    pub description: Vec<Option<String>>,
    pub cause: Vec<Option<String>>,
    pub action: Vec<Option<String>>,
    pub level: Vec<Option<String>>,
    pub kind: Vec<Option<String>>,
    pub impact: Vec<Option<String>>,
}

impl Columns {
    /// `(header name, length)` for every column, in header order.
    pub fn lengths(&self) -> [(&'static str, usize); 7] {
        [
            (HEADER[0], self.code.len()),
            (HEADER[1], self.description.len()),
            (HEADER[2], self.cause.len()),
            (HEADER[3], self.action.len()),
            (HEADER[4], self.level.len()),
            (HEADER[5], self.kind.len()),
            (HEADER[6], self.impact.len()),
        ]
    }

    /// Zip the columns into rows. Every column must be as long as BEA-Code;
    /// the first one that is not is reported.
    pub fn into_records(self) -> Result<Vec<ErrorCodeRecord>, ScrapeError> {
        let expected = self.code.len();
        if let Some((column, actual)) = self
            .lengths()
            .into_iter()
            .find(|&(_, len)| len != expected)
        {
            return Err(ScrapeError::ColumnLengthMismatch {
                column,
                expected,
                actual,
            });
        }

        let Columns {
            code,
            description,
            cause,
            action,
            level,
            kind,
            impact,
        } = self;

        Ok(code
            .into_iter()
            .zip(description)
            .zip(cause)
            .zip(action)
            .zip(level)
            .zip(kind)
            .zip(impact)
            .map(
                |((((((code, description), cause), action), level), kind), impact)| {
                    ErrorCodeRecord {
                        code,
                        description,
                        cause,
                        action,
                        level,
                        kind,
                        impact,
                    }
                },
            )
            .collect())
    }
}

/// Total `None` cells across `records`.
pub fn missing_cells(records: &[ErrorCodeRecord]) -> usize {
    records.iter().map(ErrorCodeRecord::missing_cells).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn full_columns() -> Columns {
        Columns {
            code: col(&["BEA-000001", "BEA-000002"]),
            description: col(&["one", "two"]),
            cause: col(&["c1", "c2"]),
            action: col(&["a1", "a2"]),
            level: col(&["1", "2"]),
            kind: col(&["NOTIFICATION", "ERROR"]),
            impact: col(&["Server", "Network"]),
        }
    }

    #[test]
    fn zips_columns_in_order() {
        let records = full_columns().into_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].code.as_deref(), Some("BEA-000002"));
        assert_eq!(records[1].kind.as_deref(), Some("ERROR"));
        assert_eq!(missing_cells(&records), 0);
    }

    #[test]
    fn length_mismatch_names_the_column() {
        let mut cols = full_columns();
        cols.cause.pop();
        match cols.into_records() {
            Err(ScrapeError::ColumnLengthMismatch {
                column,
                expected,
                actual,
            }) => {
                assert_eq!(column, "Cause");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn empty_columns_make_no_records() {
        let records = Columns::default().into_records().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn counts_missing_cells() {
        let mut cols = full_columns();
        cols.level[0] = None;
        cols.impact[1] = None;
        let records = cols.into_records().unwrap();
        assert_eq!(records[0].missing_cells(), 1);
        assert_eq!(missing_cells(&records), 2);
    }
}
