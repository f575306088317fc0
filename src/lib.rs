//! # rankscrape
//!
//! Extracts a ranked dataset (title, year, score, primary credited person,
//! supporting credited people) from a single HTML ranking page.
//!
//! ## Overview
//!
//! Ranking pages are loosely structured and occasionally malformed. The
//! extraction pipeline treats every row independently: a row that lacks a
//! field, or whose text doesn't parse, is skipped and reported, and the rest of
//! the page still comes through in order.
//!
//! - **Row location**: elements with the row tag that contain at least one data cell
//! - **Field extraction**: structural lookup of cells, links and attributes, with the
//!   year recovered from free text by pattern matching
//! - **Name splitting**: the first credited person, minus the role annotation, becomes
//!   the primary person; the others are kept as supporting people
//! - **Batch assembly**: successes become a [`Table`], failures become [`Diagnostic`]s
//!
//! Around the pipeline sit a blocking [fetcher](fetch_document), a
//! [CSV exporter](write_csv) and a [bubble chart](Chart) renderer.
//!
//! ## Basic Usage
//!
//! ```rust
//! use rankscrape::RankingScraper;
//!
//! let html = r#"<table>
//!   <tr><th>Rank &amp; Title</th><th>IMDb Rating</th></tr>
//!   <tr>
//!     <td class="titleColumn">
//!       1. <a href="/title/tt0111161/" title="Frank Darabont (dir.), Tim Robbins, Morgan Freeman">The Shawshank Redemption</a>
//!       <span class="secondaryInfo">(1994)</span>
//!     </td>
//!     <td class="ratingColumn imdbRating"><strong>9.2</strong></td>
//!   </tr>
//! </table>"#;
//!
//! let scraper = RankingScraper::new(html, None, None).unwrap();
//! let extraction = scraper.parse();
//!
//! assert_eq!(extraction.table.len(), 1);
//! let record = &extraction.table[0];
//! assert_eq!(record.year, 1994);
//! assert_eq!(record.primary_person, "Frank Darabont");
//! assert_eq!(record.supporting_people, vec!["Tim Robbins", "Morgan Freeman"]);
//! ```
//!
//! ## Custom Layouts
//!
//! Every tag, class marker and attribute the pipeline consults is configurable:
//!
//! ```rust
//! use rankscrape::{RankingScraper, ScrapeOptions};
//!
//! let options = ScrapeOptions::builder()
//!     .title_column("film")
//!     .rating_column("score")
//!     .rating_tag("b")
//!     .build();
//!
//! let scraper = RankingScraper::new("<table></table>", None, Some(options)).unwrap();
//! assert!(scraper.parse().table.is_empty());
//! ```
//!
//! ## Other Parsers
//!
//! The pipeline only depends on the [`MarkupDocument`] and [`MarkupNode`] traits.
//! [`assemble`] accepts any document implementing them; `scraper::Html` is
//! supported out of the box.
//!
//! ## Error Handling
//!
//! Row-level problems are [`ExtractError`]s and never fail the batch. Outer
//! surfaces (fetching, exporting, charting) return [`ScrapeError`].
//!
//! ```rust,no_run
//! use rankscrape::{fetch_document, FetchOptions, RankingScraper, ScrapeError};
//!
//! match fetch_document("http://www.imdb.com/chart/top", &FetchOptions::default()) {
//!     Ok(html) => {
//!         let extraction = RankingScraper::new(&html, None, None).unwrap().parse();
//!         println!("{} records", extraction.table.len());
//!     }
//!     Err(ScrapeError::HttpStatus { status, .. }) => eprintln!("server said {}", status),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

mod assembler;
mod chart;
mod document;
mod error;
mod export;
mod extractor;
mod fetch;
mod locator;
mod names;
mod options;
mod ranking;
mod record;

// Public exports
pub use assembler::{assemble, Diagnostic, Extraction};
pub use chart::{bubble_size, Chart, Point, Series};
pub use document::{marker_matches, MarkupDocument, MarkupNode};
pub use error::{ExtractError, Field, Result, ScrapeError};
pub use export::{export_csv, format_list_cell, write_csv};
pub use extractor::extract_record;
pub use fetch::{fetch_document, FetchOptions};
pub use locator::locate_rows;
pub use names::{normalize_whitespace, split_names};
pub use options::{ScrapeOptions, ScrapeOptionsBuilder};
pub use ranking::RankingScraper;
pub use record::{Record, Table, COLUMNS};
