use std::collections::HashSet;

use scraper::{ElementRef, Html};

use super::patterns::{RELATED_ANCHOR, RELATED_LISTS};
use super::{ExtractionError, Section, SectionExtractor, attr_or_empty, normalized_text};
use crate::data_models::RelatedQuery;

#[derive(Debug, Default, Clone, Copy)]
pub struct RelatedQueriesExtractor;

impl SectionExtractor for RelatedQueriesExtractor {
    type Output = Vec<RelatedQuery>;

    fn section(&self) -> Section {
        Section::RelatedQueries
    }

    fn extract(&self, document: &Html) -> Result<Vec<RelatedQuery>, ExtractionError> {
        let mut related = Vec::new();

        for list in RELATED_LISTS.all(document)? {
            for item in list_items(list) {
                let Some(anchor) = RELATED_ANCHOR.first_in(item)? else {
                    continue;
                };
                let text = normalized_text(anchor);
                if text.is_empty() {
                    continue;
                }
                related.push(RelatedQuery {
                    text,
                    url: attr_or_empty(Some(anchor), "href"),
                });
            }
        }

        let related = dedup_first_seen(related);
        log::debug!("Extracted {} related queries", related.len());
        Ok(related)
    }
}

/// Direct `<li>` children of a suggestion list.
fn list_items(list: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
}

/// Drops repeated `(text, url)` pairs, keeping the first occurrence in place.
pub fn dedup_first_seen(queries: Vec<RelatedQuery>) -> Vec<RelatedQuery> {
    let mut seen = HashSet::new();
    queries
        .into_iter()
        .filter(|q| seen.insert((q.text.clone(), q.url.clone())))
        .collect()
}
