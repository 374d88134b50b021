use scraper::Html;

use super::patterns::{PANEL_CONTAINERS, PANEL_DESCRIPTION, PANEL_LINK, PANEL_TITLE};
use super::{ExtractionError, Section, SectionExtractor, attr_or_empty};
use crate::data_models::KnowledgePanel;

/// The entity panel shown beside the results. A page has at most one, so
/// only the first container (by variant priority) is looked at.
#[derive(Debug, Default, Clone, Copy)]
pub struct KnowledgePanelExtractor;

impl SectionExtractor for KnowledgePanelExtractor {
    type Output = Option<KnowledgePanel>;

    fn section(&self) -> Section {
        Section::KnowledgePanel
    }

    fn extract(&self, document: &Html) -> Result<Option<KnowledgePanel>, ExtractionError> {
        let Some(container) = PANEL_CONTAINERS.first(document)? else {
            return Ok(None);
        };

        let panel = KnowledgePanel {
            title: PANEL_TITLE.text_in(container)?,
            description: PANEL_DESCRIPTION.text_in(container)?,
            url: attr_or_empty(PANEL_LINK.first_in(container)?, "href"),
        };

        if panel.is_empty() {
            return Ok(None);
        }
        log::debug!("Extracted knowledge panel: {}", panel.title);
        Ok(Some(panel))
    }
}
