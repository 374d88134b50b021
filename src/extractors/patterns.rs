//! Static selector tables for every section.
//!
//! Each table is an ordered list of CSS selectors. Field tables are tried in
//! priority order (first match wins). Container tables are matched as one
//! selector group, so containers come back in document order no matter which
//! variant they match.

use scraper::{ElementRef, Html};

use super::{ExtractionError, compile, text_or_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patterns(pub &'static [&'static str]);

impl Patterns {
    /// First element under `scope` matching the highest-priority variant that
    /// matches anything.
    pub fn first_in<'a>(
        &self,
        scope: ElementRef<'a>,
    ) -> Result<Option<ElementRef<'a>>, ExtractionError> {
        for pattern in self.0 {
            let selector = compile(pattern)?;
            if let Some(found) = scope.select(&selector).next() {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Normalized text of [`Patterns::first_in`], empty when nothing matches.
    pub fn text_in(&self, scope: ElementRef<'_>) -> Result<String, ExtractionError> {
        Ok(text_or_empty(self.first_in(scope)?))
    }

    /// Every element under `scope` matching any variant, in document order.
    pub fn all_in<'a>(&self, scope: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>, ExtractionError> {
        let selector = compile(&self.0.join(", "))?;
        Ok(scope.select(&selector).collect())
    }

    /// Every element in the document matching any variant, in document order.
    pub fn all<'a>(&self, document: &'a Html) -> Result<Vec<ElementRef<'a>>, ExtractionError> {
        let selector = compile(&self.0.join(", "))?;
        Ok(document.select(&selector).collect())
    }

    /// First element in the document by variant priority.
    pub fn first<'a>(&self, document: &'a Html) -> Result<Option<ElementRef<'a>>, ExtractionError> {
        for pattern in self.0 {
            let selector = compile(pattern)?;
            if let Some(found) = document.select(&selector).next() {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

/// Any link that carries a target.
pub const LINK: Patterns = Patterns(&["a[href]"]);

pub const ORGANIC_CONTAINERS: Patterns = Patterns(&["li.b_algo"]);
pub const ORGANIC_TITLE: Patterns = Patterns(&["h2 a", "h3 a"]);
pub const ORGANIC_DESCRIPTION: Patterns = Patterns(&["p"]);

pub const RELATED_LISTS: Patterns = Patterns(&[
    "ul.b_vList",
    "ul.b_list",
    "ul.b_rs",
    "ul.related",
    "ul.suggestions",
]);
pub const RELATED_ANCHOR: Patterns = Patterns(&["a"]);

pub const PAA_EXPANDO_CONTAINERS: Patterns = Patterns(&["div.b_expando"]);
pub const PAA_EXPANDO_QUESTION: Patterns = Patterns(&[".b_qtitle", ".b_question", "h3", "summary"]);
pub const PAA_EXPANDO_ANSWER: Patterns = Patterns(&[".b_answerText", ".b_paractl", "p"]);

pub const PAA_BLOCK_CONTAINERS: Patterns = Patterns(&["div.paa", "div.people-also-ask"]);
pub const PAA_BLOCK_QUESTIONS: Patterns = Patterns(&["div.question", "dt"]);
/// Tag names accepted as the answer sibling of a question marker.
pub const PAA_BLOCK_ANSWER_TAGS: &[&str] = &["p", "dd"];

pub const IMAGE_CONTAINERS: Patterns =
    Patterns(&["div.imgres", "div.image_result", "div.b_imageContainer"]);

pub const VIDEO_CONTAINERS: Patterns =
    Patterns(&["div.b_videoResult", "div.video_result", "li.video"]);
pub const VIDEO_VIEWS: Patterns = Patterns(&[".vc_count", ".views"]);
pub const VIDEO_CHANNEL: Patterns = Patterns(&[".vc_channel", ".channel"]);
pub const VIDEO_PROVIDER: Patterns = Patterns(&[".vc_provider", ".provider"]);

pub const NEWS_CONTAINERS: Patterns = Patterns(&["div.news-card", "li.news", "div.b_newsResult"]);
pub const NEWS_SOURCE: Patterns = Patterns(&[".source", ".provider", ".b_attribution"]);

pub const PANEL_CONTAINERS: Patterns =
    Patterns(&["div.b_entityTP", "div.b_entityPanel", "div.wiki-panel"]);
pub const PANEL_TITLE: Patterns = Patterns(&["h2", "h1", ".b_entityTitle", ".title"]);
pub const PANEL_DESCRIPTION: Patterns = Patterns(&["p", ".snippet", ".description"]);
pub const PANEL_LINK: Patterns = Patterns(&["a[href*='wikipedia.org']", "a[href]"]);

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: &[Patterns] = &[
        LINK,
        ORGANIC_CONTAINERS,
        ORGANIC_TITLE,
        ORGANIC_DESCRIPTION,
        RELATED_LISTS,
        RELATED_ANCHOR,
        PAA_EXPANDO_CONTAINERS,
        PAA_EXPANDO_QUESTION,
        PAA_EXPANDO_ANSWER,
        PAA_BLOCK_CONTAINERS,
        PAA_BLOCK_QUESTIONS,
        IMAGE_CONTAINERS,
        VIDEO_CONTAINERS,
        VIDEO_VIEWS,
        VIDEO_CHANNEL,
        VIDEO_PROVIDER,
        NEWS_CONTAINERS,
        NEWS_SOURCE,
        PANEL_CONTAINERS,
        PANEL_TITLE,
        PANEL_DESCRIPTION,
        PANEL_LINK,
    ];

    #[test]
    fn every_pattern_compiles() {
        for table in ALL_TABLES {
            for pattern in table.0 {
                assert!(compile(pattern).is_ok(), "pattern failed to compile: {pattern}");
            }
        }
    }

    #[test]
    fn first_in_prefers_priority_over_document_order() {
        let html = Html::parse_document(
            r#"<div><span class="title">Span title</span><h1>Heading title</h1></div>"#,
        );
        let title = PANEL_TITLE.text_in(html.root_element()).unwrap();
        assert_eq!(title, "Heading title");
    }

    #[test]
    fn all_keeps_document_order_across_variants() {
        let html = Html::parse_document(
            r#"<li class="video">one</li><div class="b_videoResult">two</div>"#,
        );
        let found: Vec<_> = VIDEO_CONTAINERS
            .all(&html)
            .unwrap()
            .into_iter()
            .map(crate::extractors::normalized_text)
            .collect();
        assert_eq!(found, vec!["one", "two"]);
    }

    #[test]
    fn broken_pattern_surfaces_as_error() {
        let broken = Patterns(&["div[[["]);
        let html = Html::parse_document("<div></div>");
        assert!(broken.first(&html).is_err());
        assert!(broken.all(&html).is_err());
    }
}
