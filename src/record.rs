//! Records and the table they are assembled into.
//!
//! ## Example
//!
//! ```rust
//! use rankscrape::RankingScraper;
//!
//! let html = r#"<table><tr>
//!     <td class="titleColumn">
//!         <a title="Sidney Lumet (dir.), Henry Fonda, Lee J. Cobb">12 Angry Men</a>
//!         <span class="secondaryInfo">(1957)</span>
//!     </td>
//!     <td class="ratingColumn imdbRating"><strong>9.0</strong></td>
//! </tr></table>"#;
//!
//! let extraction = RankingScraper::new(html, None, None).unwrap().parse();
//! let record = &extraction.table[0];
//! assert_eq!(record.title, "12 Angry Men");
//! assert_eq!(record.year, 1957);
//! assert_eq!(record.primary_person, "Sidney Lumet");
//! assert_eq!(record.supporting_people, vec!["Henry Fonda", "Lee J. Cobb"]);
//! ```

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Column set of a [`Table`], in export order.
pub const COLUMNS: [&str; 5] = ["title", "year", "score", "primary_person", "supporting_people"];

/// One ranked item extracted from a row.
///
/// Only the field extractor builds records, and only once every required
/// field has been found and parsed. `title` and `primary_person` are non-empty,
/// `score` is finite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Text of the row's title link.
    pub title: String,

    /// First run of digits in the row's secondary info, e.g. the release year.
    pub year: u32,

    /// Parsed from the emphasized text of the rating cell.
    pub score: f64,

    /// First credited person with the role annotation removed.
    pub primary_person: String,

    /// The remaining credited people, in source order.
    pub supporting_people: Vec<String>,
}

/// Ordered, immutable collection of records in document order.
///
/// No deduplication or sorting is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Index<usize> for Table {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
