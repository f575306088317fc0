//! Driving the locator and extractor over a whole document.

use crate::{
    document::MarkupDocument,
    error::ExtractError,
    extractor::extract_record,
    locator::locate_rows,
    options::ScrapeOptions,
    record::Table,
};

/// A candidate row that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Zero-based ordinal of the row among the located candidates.
    pub position: usize,
    pub error: ExtractError,
}

impl Diagnostic {
    pub fn cause(&self) -> &'static str {
        self.error.cause()
    }
}

/// Result of one pass over a document: the table plus one diagnostic per skipped row.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub table: Table,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Number of candidate rows the locator produced.
    pub fn candidates(&self) -> usize {
        self.table.len() + self.diagnostics.len()
    }
}

/// Builds a [`Table`] from every candidate row of `document`.
///
/// Rows that fail extraction are skipped and reported both as a
/// [`Diagnostic`] and as a `tracing` warning; no row can abort the batch.
/// A document without candidates yields an empty table.
pub fn assemble<D: MarkupDocument>(document: &D, options: &ScrapeOptions) -> Extraction {
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();

    for (position, row) in locate_rows(document, options).enumerate() {
        match extract_record(&row, options) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!(position, cause = error.cause(), %error, "skipping row");
                diagnostics.push(Diagnostic { position, error });
            }
        }
    }

    tracing::debug!(
        candidates = records.len() + diagnostics.len(),
        records = records.len(),
        skipped = diagnostics.len(),
        "assembled table"
    );

    Extraction {
        table: Table::new(records),
        diagnostics,
    }
}
