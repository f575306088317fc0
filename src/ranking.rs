//! Main RankingScraper struct tying a parsed page to the extraction pipeline.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rankscrape::{RankingScraper, ScrapeOptions};
//!
//! let html = std::fs::read_to_string("top.html").unwrap();
//! let url = "https://example.com/chart/top";
//!
//! let scraper = RankingScraper::new(&html, Some(url), None)?;
//! let extraction = scraper.parse();
//!
//! println!("{} records", extraction.table.len());
//! for skipped in &extraction.diagnostics {
//!     println!("row {} skipped: {}", skipped.position, skipped.cause());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use scraper::Html;
use url::Url;

use crate::{
    assembler::{assemble, Extraction},
    error::{Result, ScrapeError},
    options::ScrapeOptions,
};

/// A parsed ranking page ready for extraction.
///
/// The whole document is parsed once in [`RankingScraper::new`]; [`parse`](RankingScraper::parse)
/// can then be called any number of times and always yields the same result.
pub struct RankingScraper {
    /// The parsed HTML document
    document: Html,

    /// Where the markup came from, if known
    source_url: Option<Url>,

    /// Configuration options
    options: ScrapeOptions,
}

impl RankingScraper {
    /// Create a new RankingScraper instance
    ///
    /// # Arguments
    /// * `html` - The HTML content to parse
    /// * `url` - Optional URL the content was fetched from
    /// * `options` - Optional configuration options
    ///
    /// # Returns
    /// Result containing the RankingScraper instance or [`ScrapeError::InvalidUrl`]
    pub fn new(html: &str, url: Option<&str>, options: Option<ScrapeOptions>) -> Result<Self> {
        let source_url = url
            .map(|u| Url::parse(u).map_err(|_| ScrapeError::InvalidUrl(u.to_string())))
            .transpose()?;

        let document = Html::parse_document(html);
        let options = options.unwrap_or_default();

        Ok(Self {
            document,
            source_url,
            options,
        })
    }

    /// Run the extraction pipeline over the document.
    pub fn parse(&self) -> Extraction {
        let extraction = assemble(&self.document, &self.options);
        tracing::info!(
            source = self.source_url.as_ref().map(Url::as_str).unwrap_or("<inline>"),
            records = extraction.table.len(),
            skipped = extraction.diagnostics.len(),
            "extracted ranking"
        );
        extraction
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_ref().map(Url::as_str)
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }
}
