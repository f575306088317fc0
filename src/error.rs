//! Error types for the extraction pipeline and its collaborators.
//!
//! Two layers exist. [`ExtractError`] describes why a single row could not be
//! turned into a [`Record`](crate::Record); it never escapes the batch, the
//! assembler turns it into a [`Diagnostic`](crate::Diagnostic) instead.
//! [`ScrapeError`] covers the outer surfaces (fetching, exporting, charting)
//! where failing the whole operation is the right answer.

use std::fmt;

use thiserror::Error;

/// Result type alias for fetch/export/chart operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// The record field an extraction step was working on when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Title,
    Score,
    People,
}

impl Field {
    /// Fixed, human-readable cause reported for a failure on this field.
    pub fn cause(self) -> &'static str {
        match self {
            Field::Year => "missing/unparseable year",
            Field::Title => "missing title",
            Field::Score => "missing/unparseable rating",
            Field::People => "missing people list",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Title => "title",
            Field::Score => "score",
            Field::People => "people",
        };
        f.write_str(name)
    }
}

/// Why one candidate row was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// An expected child element or attribute is absent from the row
    #[error("{}: no {missing}", .field.cause())]
    StructuralLookup { field: Field, missing: String },

    /// Text was found but is not convertible to the required numeric type
    #[error("{}: cannot parse {text:?}", .field.cause())]
    Parse { field: Field, text: String },

    /// The people list handed to the name splitter had no entries
    #[error("empty people list")]
    EmptyPeopleList,
}

impl ExtractError {
    pub(crate) fn missing(field: Field, missing: impl Into<String>) -> Self {
        ExtractError::StructuralLookup {
            field,
            missing: missing.into(),
        }
    }

    pub(crate) fn parse(field: Field, text: impl Into<String>) -> Self {
        ExtractError::Parse {
            field,
            text: text.into(),
        }
    }

    /// The short cause string, without the row-specific detail.
    pub fn cause(&self) -> &'static str {
        match self {
            ExtractError::StructuralLookup { field, .. } | ExtractError::Parse { field, .. } => {
                field.cause()
            }
            ExtractError::EmptyPeopleList => "empty people list",
        }
    }

    /// Field the failure is attributed to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            ExtractError::StructuralLookup { field, .. } | ExtractError::Parse { field, .. } => {
                Some(*field)
            }
            ExtractError::EmptyPeopleList => Some(Field::People),
        }
    }
}

/// Errors from the fetcher, exporter and chart renderer
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure while fetching the document
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The operation needs at least one record
    #[error("Table contains no records")]
    EmptyTable,
}
