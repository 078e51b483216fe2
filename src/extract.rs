// src/extract.rs

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, info, trace};

use crate::table::Columns;

/// One column of the output: which elements to select, how to split their
/// text, and which segment to keep.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub column: &'static str,
    pub tag: &'static str,
    pub class: &'static str,
    /// Regex the element text is split on.
    pub delimiter: &'static str,
    pub index: usize,
}

/// `span.msg` holds `BEA-000001: description`.
pub const CODE: FieldRule = FieldRule {
    column: "BEA-Code",
    tag: "span",
    class: "msg",
    delimiter: "[:]",
    index: 0,
};
pub const DESCRIPTION: FieldRule = FieldRule {
    column: "Description",
    index: 1,
    ..CODE
};
pub const CAUSE: FieldRule = FieldRule {
    column: "Cause",
    tag: "div",
    class: "msgexplan",
    delimiter: "[:]",
    index: 1,
};
/// `div.msgaction` holds `Action: ..\nLevel: ..\nType: ..\nImpact: ..`.
pub const ACTION: FieldRule = FieldRule {
    column: "Action",
    tag: "div",
    class: "msgaction",
    delimiter: "[\n:]",
    index: 1,
};
pub const LEVEL: FieldRule = FieldRule {
    column: "Level",
    index: 3,
    ..ACTION
};
pub const TYPE: FieldRule = FieldRule {
    column: "Type",
    index: 5,
    ..ACTION
};
pub const IMPACT: FieldRule = FieldRule {
    column: "Impact",
    index: 7,
    ..ACTION
};

/// All rules in output column order.
pub const BEA_FIELD_RULES: [FieldRule; 7] =
    [CODE, DESCRIPTION, CAUSE, ACTION, LEVEL, TYPE, IMPACT];

impl FieldRule {
    pub fn apply(&self, doc: &Html) -> Result<Vec<Option<String>>> {
        let delimiter = Regex::new(self.delimiter)
            .with_context(|| format!("delimiter {:?} for {}", self.delimiter, self.column))?;
        extract_field(doc, self.tag, self.class, &delimiter, self.index)
            .with_context(|| format!("extracting {}", self.column))
    }
}

fn class_selector(tag: &str, class: &str) -> Result<Selector> {
    let css = format!("{}.{}", tag, class);
    Selector::parse(&css).map_err(|e| anyhow!("invalid selector {:?}: {:?}", css, e))
}

/// Select every `tag.class` element in document order, split its text on
/// `delimiter` and keep segment `index` (trimmed).
///
/// Returns one entry per matched element. An element whose text has too few
/// segments, or whose segment is blank, yields `None` rather than an error.
pub fn extract_field(
    doc: &Html,
    tag: &str,
    class: &str,
    delimiter: &Regex,
    index: usize,
) -> Result<Vec<Option<String>>> {
    let sel = class_selector(tag, class)?;
    Ok(doc
        .select(&sel)
        .enumerate()
        .map(|(pos, el)| {
            let text = el.text().collect::<String>();
            let segment = delimiter
                .split(&text)
                .nth(index)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            match &segment {
                Some(s) => trace!(tag, class, pos, segment = %s, "extracted"),
                None => debug!(tag, class, pos, index, "segment missing or empty"),
            }
            segment
        })
        .collect())
}

/// Number of `span.msg` elements, one per documented message.
pub fn count_messages(doc: &Html) -> Result<usize> {
    let sel = class_selector(CODE.tag, CODE.class)?;
    Ok(doc.select(&sel).count())
}

/// Parse `html` once and run every rule in [`BEA_FIELD_RULES`] over it.
pub fn extract_columns(html: &str) -> Result<Columns> {
    let doc = Html::parse_document(html);
    let found = count_messages(&doc)?;
    info!(count = found, "BEA codes found");

    let [code, description, cause, action, level, kind, impact] =
        BEA_FIELD_RULES.map(|rule| rule.apply(&doc));
    Ok(Columns {
        code: code?,
        description: description?,
        cause: cause?,
        action: action?,
        level: level?,
        kind: kind?,
        impact: impact?,
    })
}
