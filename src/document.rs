//! Minimal document-tree capabilities the pipeline depends on.
//!
//! The locator and extractor only ever need to enumerate elements by tag, find
//! the first descendant with a given tag and class marker, read an element's own
//! text, and read an attribute. [`MarkupDocument`] and [`MarkupNode`] capture
//! exactly that, so any markup parser can drive the pipeline. Implementations
//! for [`scraper::Html`] and [`scraper::ElementRef`] are provided.

use scraper::{ElementRef, Html};

/// An element of a parsed document.
pub trait MarkupNode: Clone {
    /// First descendant (not including `self`) in document order whose tag is
    /// `tag` and, when `marker` is given, which carries every class in it.
    fn find_descendant(&self, tag: &str, marker: Option<&str>) -> Option<Self>;

    /// Concatenation of the element's own text children, excluding text nested
    /// in child elements.
    fn direct_text(&self) -> String;

    /// Value of attribute `name`, if present.
    fn attr(&self, name: &str) -> Option<&str>;
}

/// A parsed document whose elements can be enumerated by tag.
pub trait MarkupDocument {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    /// Lazily yields every element with tag `tag`, in document order.
    fn elements_by_tag<'a>(&'a self, tag: &'a str) -> Box<dyn Iterator<Item = Self::Node<'a>> + 'a>;
}

/// True when every class listed in `marker` is present in `classes`.
pub fn marker_matches(marker: &str, classes: &[&str]) -> bool {
    marker
        .split_whitespace()
        .all(|wanted| classes.contains(&wanted))
}

fn element_matches(element: &ElementRef<'_>, tag: &str, marker: Option<&str>) -> bool {
    let value = element.value();
    if !value.name().eq_ignore_ascii_case(tag) {
        return false;
    }
    marker.map_or(true, |marker| {
        let classes: Vec<&str> = value.classes().collect();
        marker_matches(marker, &classes)
    })
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn find_descendant(&self, tag: &str, marker: Option<&str>) -> Option<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|element| element_matches(element, tag, marker))
    }

    fn direct_text(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            if let Some(text) = child.value().as_text() {
                out.push_str(&**text);
            }
        }
        out
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

impl MarkupDocument for Html {
    type Node<'a> = ElementRef<'a>;

    fn elements_by_tag<'a>(&'a self, tag: &'a str) -> Box<dyn Iterator<Item = ElementRef<'a>> + 'a> {
        Box::new(
            self.root_element()
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter(move |element| element.value().name().eq_ignore_ascii_case(tag)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment() -> Html {
        Html::parse_document(
            r#"<html><body>
                <div class="outer"><span class="a b">one <i>nested</i> two</span></div>
                <span class="b">three</span>
                <a href="/x" title="People, Here">link</a>
            </body></html>"#,
        )
    }

    #[test]
    fn marker_requires_every_class() {
        assert!(marker_matches("a b", &["b", "a", "c"]));
        assert!(marker_matches("b  a", &["a", "b"]));
        assert!(!marker_matches("a b", &["a"]));
        assert!(marker_matches("", &["a"]));
    }

    #[test]
    fn elements_by_tag_in_document_order() {
        let doc = fragment();
        let texts: Vec<String> = doc
            .elements_by_tag("span")
            .map(|el| el.direct_text())
            .collect();
        assert_eq!(texts, vec!["one  two".to_string(), "three".to_string()]);
    }

    #[test]
    fn find_descendant_honours_marker() {
        let doc = fragment();
        let body = doc.elements_by_tag("body").next().unwrap();
        let only_b = body.find_descendant("span", Some("b")).unwrap();
        assert_eq!(only_b.direct_text(), "one  two");
        let both = body.find_descendant("span", Some("a b")).unwrap();
        assert_eq!(both.direct_text(), "one  two");
        assert!(body.find_descendant("span", Some("c")).is_none());
    }

    #[test]
    fn find_descendant_excludes_self() {
        let doc = fragment();
        let div = doc.elements_by_tag("div").next().unwrap();
        assert!(div.find_descendant("div", None).is_none());
    }

    #[test]
    fn attr_lookup() {
        let doc = fragment();
        let link = doc.elements_by_tag("a").next().unwrap();
        assert_eq!(link.attr("title"), Some("People, Here"));
        assert_eq!(link.attr("missing"), None);
    }
}
