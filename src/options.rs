//! Configuration options for row extraction.
//!
//! This module provides [`ScrapeOptions`] and [`ScrapeOptionsBuilder`], which name
//! every tag, class marker and attribute the pipeline looks up. The defaults
//! describe the classic "top chart" table layout:
//!
//! ```html
//! <tr>
//!   <td class="titleColumn">
//!     1. <a href="/title/tt0111161/" title="Frank Darabont (dir.), Tim Robbins, Morgan Freeman">The Shawshank Redemption</a>
//!     <span class="secondaryInfo">(1994)</span>
//!   </td>
//!   <td class="ratingColumn imdbRating"><strong>9.2</strong></td>
//! </tr>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rankscrape::ScrapeOptions;
//!
//! // Using default options
//! let options = ScrapeOptions::default();
//! assert_eq!(options.row_tag, "tr");
//!
//! // Using builder for a differently marked page
//! let options = ScrapeOptions::builder()
//!     .rating_column("score")
//!     .rating_tag("b")
//!     .people_attribute("data-credits")
//!     .build();
//! assert_eq!(options.rating_column, "score");
//! ```

/// Configuration options for the extraction pipeline.
///
/// A *marker* is a whitespace-separated list of class names; an element matches
/// a marker when every listed class is present on it, in any order and
/// alongside any other classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOptions {
    /// Tag of candidate data rows.
    ///
    /// Default: `"tr"`
    pub row_tag: String,

    /// Tag of data cells. A row is only a candidate when it contains at least one.
    ///
    /// Default: `"td"`
    pub cell_tag: String,

    /// Optional marker a data cell must carry to count toward candidacy.
    ///
    /// Default: `None` (any cell qualifies)
    pub data_cell_marker: Option<String>,

    /// Marker of the cell holding the title link and the secondary info.
    ///
    /// Default: `"titleColumn"`
    pub title_column: String,

    /// Tag of the secondary-info element inside the title column.
    ///
    /// Default: `"span"`
    pub secondary_info_tag: String,

    /// Marker of the secondary-info element. Its text carries the year.
    ///
    /// Default: `"secondaryInfo"`
    pub secondary_info: String,

    /// Tag of the title link inside the title column.
    ///
    /// Default: `"a"`
    pub link_tag: String,

    /// Marker of the cell holding the score.
    ///
    /// Default: `"ratingColumn imdbRating"`
    pub rating_column: String,

    /// Tag of the emphasized element holding the score text.
    ///
    /// Default: `"strong"`
    pub rating_tag: String,

    /// Attribute of the title link holding the credited people.
    ///
    /// Default: `"title"`
    pub people_attribute: String,

    /// Separator between names in the people attribute.
    ///
    /// Default: `','`
    pub people_separator: char,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            row_tag: "tr".to_string(),
            cell_tag: "td".to_string(),
            data_cell_marker: None,
            title_column: "titleColumn".to_string(),
            secondary_info_tag: "span".to_string(),
            secondary_info: "secondaryInfo".to_string(),
            link_tag: "a".to_string(),
            rating_column: "ratingColumn imdbRating".to_string(),
            rating_tag: "strong".to_string(),
            people_attribute: "title".to_string(),
            people_separator: ',',
        }
    }
}

impl ScrapeOptions {
    /// Creates a new builder for ScrapeOptions
    pub fn builder() -> ScrapeOptionsBuilder {
        ScrapeOptionsBuilder::default()
    }
}

/// Builder for [`ScrapeOptions`].
///
/// Unset fields fall back to [`ScrapeOptions::default`].
#[derive(Default)]
pub struct ScrapeOptionsBuilder {
    row_tag: Option<String>,
    cell_tag: Option<String>,
    data_cell_marker: Option<String>,
    title_column: Option<String>,
    secondary_info_tag: Option<String>,
    secondary_info: Option<String>,
    link_tag: Option<String>,
    rating_column: Option<String>,
    rating_tag: Option<String>,
    people_attribute: Option<String>,
    people_separator: Option<char>,
}

impl ScrapeOptionsBuilder {
    /// Set the row tag
    pub fn row_tag(mut self, tag: impl Into<String>) -> Self {
        self.row_tag = Some(tag.into());
        self
    }

    /// Set the data cell tag
    pub fn cell_tag(mut self, tag: impl Into<String>) -> Self {
        self.cell_tag = Some(tag.into());
        self
    }

    /// Require data cells to carry a marker
    pub fn data_cell_marker(mut self, marker: impl Into<String>) -> Self {
        self.data_cell_marker = Some(marker.into());
        self
    }

    /// Set the title column marker
    pub fn title_column(mut self, marker: impl Into<String>) -> Self {
        self.title_column = Some(marker.into());
        self
    }

    /// Set the secondary-info tag
    pub fn secondary_info_tag(mut self, tag: impl Into<String>) -> Self {
        self.secondary_info_tag = Some(tag.into());
        self
    }

    /// Set the secondary-info marker
    pub fn secondary_info(mut self, marker: impl Into<String>) -> Self {
        self.secondary_info = Some(marker.into());
        self
    }

    /// Set the title link tag
    pub fn link_tag(mut self, tag: impl Into<String>) -> Self {
        self.link_tag = Some(tag.into());
        self
    }

    /// Set the rating column marker
    pub fn rating_column(mut self, marker: impl Into<String>) -> Self {
        self.rating_column = Some(marker.into());
        self
    }

    /// Set the emphasized rating tag
    pub fn rating_tag(mut self, tag: impl Into<String>) -> Self {
        self.rating_tag = Some(tag.into());
        self
    }

    /// Set the people attribute name
    pub fn people_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.people_attribute = Some(attribute.into());
        self
    }

    /// Set the people separator
    pub fn people_separator(mut self, separator: char) -> Self {
        self.people_separator = Some(separator);
        self
    }

    /// Build the ScrapeOptions
    pub fn build(self) -> ScrapeOptions {
        let defaults = ScrapeOptions::default();
        ScrapeOptions {
            row_tag: self.row_tag.unwrap_or(defaults.row_tag),
            cell_tag: self.cell_tag.unwrap_or(defaults.cell_tag),
            data_cell_marker: self.data_cell_marker.or(defaults.data_cell_marker),
            title_column: self.title_column.unwrap_or(defaults.title_column),
            secondary_info_tag: self
                .secondary_info_tag
                .unwrap_or(defaults.secondary_info_tag),
            secondary_info: self.secondary_info.unwrap_or(defaults.secondary_info),
            link_tag: self.link_tag.unwrap_or(defaults.link_tag),
            rating_column: self.rating_column.unwrap_or(defaults.rating_column),
            rating_tag: self.rating_tag.unwrap_or(defaults.rating_tag),
            people_attribute: self.people_attribute.unwrap_or(defaults.people_attribute),
            people_separator: self.people_separator.unwrap_or(defaults.people_separator),
        }
    }
}
