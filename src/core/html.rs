// src/core/html.rs
// DOM walking helpers on top of `scraper`. Tag names are lower-case after parsing.

use scraper::{ElementRef, Node};
use scraper::node::Text;

pub fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

pub fn is_div_with_class(el: &ElementRef, class: &str) -> bool {
    el.value().name() == "div" && has_class(el, class)
}

/// Nearest enclosing `<div class="…">`, not counting `el` itself.
pub fn find_parent_div<'a>(el: &ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is_div_with_class(a, class))
}

/// First `<div class="…">` among the direct children of `el`.
pub fn child_div<'a>(el: &ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .find(|c| is_div_with_class(c, class))
}

/// Immediate parent, if it is an element (not the document root).
pub fn parent_element<'a>(el: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.parent().and_then(ElementRef::wrap)
}

/// All text below `el`, concatenated.
pub fn text_of(el: &ElementRef) -> String {
    el.text().collect()
}

/// The first thing a reader would see inside `el`:
/// its first child that is an element or non-blank text. Comments are ignored.
pub enum Content<'a> {
    Element(ElementRef<'a>),
    Text(&'a Text),
}

pub fn first_content<'a>(el: &ElementRef<'a>) -> Option<Content<'a>> {
    el.children().find_map(|node| match node.value() {
        Node::Element(_) => ElementRef::wrap(node).map(Content::Element),
        Node::Text(t) if !t.trim().is_empty() => Some(Content::Text(t)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = scraper::Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn class_tests_are_token_exact() {
        let doc = Html::parse_fragment(r#"<div class="field field-label">x</div><span class="field">y</span>"#);
        let div = first(&doc, "div");
        assert!(has_class(&div, "field"));
        assert!(has_class(&div, "field-label"));
        assert!(!has_class(&div, "fiel"));
        assert!(!is_div_with_class(&first(&doc, "span"), "field"));
    }

    #[test]
    fn parent_lookup_skips_self_and_finds_nearest() {
        let doc = Html::parse_fragment(
            r#"<div class="field" id="outer"><div class="wrap"><div class="field" id="inner"></div></div></div>"#,
        );
        let inner = first(&doc, "#inner");
        let parent = find_parent_div(&inner, "field").unwrap();
        assert_eq!(parent.value().id(), Some("outer"));
        assert!(find_parent_div(&parent, "field").is_none());
    }

    #[test]
    fn child_div_is_direct_only() {
        let doc = Html::parse_fragment(
            r#"<div id="f"><div class="wrap"><div class="field-label">deep</div></div></div>"#,
        );
        let f = first(&doc, "#f");
        assert!(child_div(&f, "field-label").is_none());
        assert!(child_div(&f, "wrap").is_some());
    }

    #[test]
    fn first_content_skips_blank_text_and_comments() {
        let doc = Html::parse_fragment("<div id=\"i\">\n  <!-- c --> <a href=\"/x\">x</a></div>");
        match first_content(&first(&doc, "#i")) {
            Some(Content::Element(e)) => assert_eq!(e.value().name(), "a"),
            _ => panic!("expected the anchor"),
        }

        let doc = Html::parse_fragment(r#"<div id="i"> Berlin </div>"#);
        match first_content(&first(&doc, "#i")) {
            Some(Content::Text(t)) => assert_eq!(t.trim(), "Berlin"),
            _ => panic!("expected text"),
        }

        let doc = Html::parse_fragment(r#"<div id="i">   </div>"#);
        assert!(first_content(&first(&doc, "#i")).is_none());
    }
}
