// src/specs/profile.rs
//! Institution passport page → [`Record`].
//!
//! Layout (Drupal field groups):
//! ```text
//! div#zone_fields
//!   div.tabcontent            one per tab, any depth
//!     div.field               any depth, may nest inside another div.field
//!       div.field-label
//!       div.field-item        one per value
//!     div.content_indent      indented group
//!       div.content_group_label_3
//!       div.field
//! ```
//!
//! Lookups mirror the page's quirks: the own label and the items are searched among
//! all descendants, so a parent field also sees the label/items of a nested field
//! when it has none of its own. The parent's label used as a prefix must be a
//! direct child of the parent.

use scraper::{ElementRef, Html};

use crate::config::consts::{LABEL_SEP, ORIGINAL_NAME_LABEL};
use crate::core::html::{
    Content, child_div, find_parent_div, first_content, has_class, parent_element, text_of,
};
use crate::core::sanitize::{clean_label, excerpt, same_label, title_case};
use crate::error::ScrapeError;
use crate::record::Record;

/// A field that carried no label and was left out of the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedField {
    pub institution: String,
    /// Short text preview of the field, to help find it on the page.
    pub excerpt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub record: Record,
    pub skipped: Vec<SkippedField>,
}

const EXCERPT_CHARS: usize = 60;

/// Extract one institution's record from its parsed profile page.
pub fn extract_record(doc: &Html, institution: &str) -> Result<Extraction, ScrapeError> {
    let zone = doc
        .select(sel!("div#zone_fields"))
        .next()
        .ok_or_else(|| ScrapeError::structure(institution, "div#zone_fields"))?;

    let sections: Vec<ElementRef> = zone.select(sel!("div.tabcontent")).collect();
    if sections.is_empty() {
        return Err(ScrapeError::structure(institution, "div.tabcontent"));
    }

    let mut record = Record::new(institution);
    let mut skipped = Vec::new();

    for section in sections {
        for field in section.select(sel!("div.field")) {
            let Some(label) = compound_label(&field) else {
                skipped.push(SkippedField {
                    institution: s!(institution),
                    excerpt: excerpt(&text_of(&field), EXCERPT_CHARS),
                });
                continue;
            };

            // Duplicates the Institution column.
            if label == ORIGINAL_NAME_LABEL {
                continue;
            }

            for item in field.select(sel!("div.field-item")) {
                if let Some(value) = item_value(&item) {
                    record.insert(&label, value);
                }
            }
        }
    }

    Ok(Extraction { record, skipped })
}

/// `[parent label - ][Group Label - ]own label`, or `None` if the field has no label.
pub fn compound_label(field: &ElementRef) -> Option<String> {
    let own = field.select(sel!("div.field-label")).next()?;
    let own = clean_label(&text_of(&own));

    let mut parts: Vec<String> = Vec::with_capacity(3);

    if let Some(parent_label) = find_parent_div(field, "field")
        .and_then(|parent| child_div(&parent, "field-label"))
    {
        parts.push(text_of(&parent_label).trim().to_string());
    }

    if let Some(group) = parent_element(field).filter(|p| has_class(p, "content_indent")) {
        if let Some(group_label) = group.select(sel!("div.content_group_label_3")).next() {
            let text = text_of(&group_label);
            if !same_label(&text, &own) {
                parts.push(title_case(text.trim()));
            }
        }
    }

    parts.push(own);
    Some(parts.join(LABEL_SEP))
}

/// Value of one `div.field-item`, judged by its first content node.
fn item_value(item: &ElementRef) -> Option<String> {
    match first_content(item)? {
        Content::Text(t) => Some(t.trim().to_string()),
        Content::Element(el) => match el.value().name() {
            "a" => el.value().attr("href").map(str::to_string),
            "p" => Some(text_of(&el).trim().to_string()),
            "img" => Some(el.html()),
            _ => None,
        },
    }
}
