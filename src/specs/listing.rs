// src/specs/listing.rs
// Institutional-profiles index: one <a> per institution inside a views block.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::LISTING_SECTION_ID;
use crate::core::{html::text_of, net::Fetcher, sanitize::normalize_ws};
use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstitutionRef {
    pub name: String,
    /// As written on the page; usually site-relative.
    pub href: String,
}

pub struct Listing {
    doc: Html,
    page: String,
    container: Selector,
}

impl Listing {
    /// Parse the index page. Fails if the institutions block is missing.
    pub fn parse(html: &str, page: &str) -> Result<Self, ScrapeError> {
        let doc = Html::parse_document(html);
        let css = format!("section#{LISTING_SECTION_ID}");
        let container = Selector::parse(&css)
            .map_err(|_| ScrapeError::structure(page, css.as_str()))?;

        if doc.select(&container).next().is_none() {
            return Err(ScrapeError::structure(page, css));
        }
        Ok(Self { doc, page: s!(page), container })
    }

    /// Every anchor in the block, in document order.
    /// An anchor without `href` yields a structure error for that item.
    pub fn institutions(&self) -> impl Iterator<Item = Result<InstitutionRef, ScrapeError>> + '_ {
        self.doc
            .select(&self.container)
            .take(1)
            .flat_map(|section| section.select(sel!("a")))
            .map(|a| self.to_ref(a))
    }

    fn to_ref(&self, a: ElementRef) -> Result<InstitutionRef, ScrapeError> {
        let name = normalize_ws(&text_of(&a));
        let href = a
            .value()
            .attr("href")
            .ok_or_else(|| ScrapeError::structure(&self.page, format!("href on link {name:?}")))?;
        Ok(InstitutionRef { name, href: s!(href) })
    }
}

/// Fetch and parse the index page.
pub fn list_institutions(fetcher: &Fetcher, index_url: &str) -> Result<Listing, ScrapeError> {
    let body = fetcher.get_text(index_url)?;
    let listing = Listing::parse(&body, index_url)?;
    logf!("index page {index_url} parsed");
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "http://cetaf.org/services/institutional-profiles";

    fn listing_html(links: &str) -> String {
        format!(
            r#"<html><body>
                <a href="/about">About</a>
                <section id="block-views-passports-per-countries-block">
                  <h2>Institutional profiles</h2>
                  {links}
                </section>
                <a href="/contact">Contact</a>
            </body></html>"#
        )
    }

    #[test]
    fn yields_every_anchor_in_the_block_in_order() {
        let html = listing_html(
            r#"<div class="country">Austria
                 <ul>
                   <li><a href="/passport/nhm-wien">Naturhistorisches Museum
                        Wien</a></li>
                   <li><a href="/passport/uni-graz">University of Graz</a></li>
                 </ul>
               </div>
               <div class="country">Belgium
                 <a href="/passport/rbins">Royal Belgian Institute of Natural Sciences</a>
               </div>"#,
        );
        let listing = Listing::parse(&html, PAGE).unwrap();
        let refs: Vec<_> = listing.institutions().collect::<Result<_, _>>().unwrap();

        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0], InstitutionRef {
            name: s!("Naturhistorisches Museum Wien"),
            href: s!("/passport/nhm-wien"),
        });
        assert_eq!(refs[1].href, "/passport/uni-graz");
        assert_eq!(refs[2].name, "Royal Belgian Institute of Natural Sciences");
    }

    #[test]
    fn empty_block_yields_nothing() {
        let listing = Listing::parse(&listing_html(""), PAGE).unwrap();
        assert_eq!(listing.institutions().count(), 0);
    }

    #[test]
    fn missing_block_is_a_structure_error() {
        let err = Listing::parse("<html><body><a href=\"/x\">x</a></body></html>", PAGE)
            .err()
            .unwrap();
        assert!(err.is_structure());
        assert!(err.to_string().contains("block-views-passports-per-countries-block"));
    }

    #[test]
    fn anchor_without_href_is_reported_in_place() {
        let html = listing_html(r#"<a href="/one">One</a><a name="anchor">Two</a><a href="/three">Three</a>"#);
        let listing = Listing::parse(&html, PAGE).unwrap();
        let items: Vec<_> = listing.institutions().collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].as_ref().unwrap_err().is_structure());
        assert_eq!(items[2].as_ref().unwrap().name, "Three");
    }
}
