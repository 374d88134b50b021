use scraper::Html;

use super::patterns::{ORGANIC_CONTAINERS, ORGANIC_DESCRIPTION, ORGANIC_TITLE};
use super::{ExtractionError, Section, SectionExtractor, attr_or_empty, text_or_empty};
use crate::data_models::OrganicEntry;

/// Standard search hits: one `li.b_algo` per result, title link in a heading,
/// snippet in the first paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrganicExtractor;

impl SectionExtractor for OrganicExtractor {
    type Output = Vec<OrganicEntry>;

    fn section(&self) -> Section {
        Section::Organic
    }

    fn extract(&self, document: &Html) -> Result<Vec<OrganicEntry>, ExtractionError> {
        let mut results = Vec::new();

        for item in ORGANIC_CONTAINERS.all(document)? {
            let title_link = ORGANIC_TITLE.first_in(item)?;
            let entry = OrganicEntry {
                title: text_or_empty(title_link),
                url: attr_or_empty(title_link, "href"),
                description: ORGANIC_DESCRIPTION.text_in(item)?,
            };

            // scaffold items match structurally but carry nothing
            if entry.title.is_empty() && entry.url.is_empty() {
                continue;
            }
            results.push(entry);
        }

        log::debug!("Extracted {} organic results", results.len());
        Ok(results)
    }
}
