//! Locating candidate data rows.

use crate::{
    document::{MarkupDocument, MarkupNode},
    options::ScrapeOptions,
};

/// Lazily yields the elements that plausibly hold one ranked item.
///
/// A candidate is an element with the configured row tag that contains at
/// least one data cell (optionally carrying `data_cell_marker`). Header and
/// separator rows, which share the row tag but hold only header cells or
/// nothing, are skipped. Order is document order.
pub fn locate_rows<'a, D: MarkupDocument>(
    document: &'a D,
    options: &'a ScrapeOptions,
) -> impl Iterator<Item = D::Node<'a>> + 'a {
    let marker = options.data_cell_marker.as_deref();
    document
        .elements_by_tag(&options.row_tag)
        .filter(move |row| row.find_descendant(&options.cell_tag, marker).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn skips_rows_without_data_cells() {
        let html = r#"<table>
            <thead><tr><th>Rank</th><th>Title</th></tr></thead>
            <tbody>
                <tr><td>1</td></tr>
                <tr><td>2</td></tr>
                <tr></tr>
                <tr><td>3</td></tr>
                <tr><th>interstitial</th></tr>
                <tr><td>4</td></tr>
                <tr><td>5</td></tr>
            </tbody>
        </table>"#;
        let doc = Html::parse_document(html);
        let options = ScrapeOptions::default();
        assert_eq!(locate_rows(&doc, &options).count(), 5);
    }

    #[test]
    fn respects_data_cell_marker() {
        let html = r#"<table>
            <tr><td class="spacer"></td></tr>
            <tr><td class="data">x</td></tr>
        </table>"#;
        let doc = Html::parse_document(html);
        let options = ScrapeOptions::builder().data_cell_marker("data").build();
        assert_eq!(locate_rows(&doc, &options).count(), 1);
    }

    #[test]
    fn empty_document_yields_nothing() {
        let doc = Html::parse_document("<html><body><p>no table</p></body></html>");
        let options = ScrapeOptions::default();
        assert_eq!(locate_rows(&doc, &options).count(), 0);
    }
}
