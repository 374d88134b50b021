use std::fmt;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

pub mod knowledge_panel;
pub mod media;
pub mod organic;
pub mod patterns;
pub mod people_also_ask;
pub mod related;

pub use knowledge_panel::KnowledgePanelExtractor;
pub use media::{ImageExtractor, NewsExtractor, VideoExtractor};
pub use organic::OrganicExtractor;
pub use patterns::Patterns;
pub use people_also_ask::PeopleAlsoAskExtractor;
pub use related::RelatedQueriesExtractor;

/// The semantic categories a result page is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Organic,
    RelatedQueries,
    PeopleAlsoAsk,
    Images,
    Videos,
    News,
    KnowledgePanel,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Organic,
        Section::RelatedQueries,
        Section::PeopleAlsoAsk,
        Section::Images,
        Section::Videos,
        Section::News,
        Section::KnowledgePanel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Organic => "organic_results",
            Section::RelatedQueries => "related_queries",
            Section::PeopleAlsoAsk => "people_also_ask",
            Section::Images => "images",
            Section::Videos => "videos",
            Section::News => "news",
            Section::KnowledgePanel => "knowledge_panel",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("invalid selector `{pattern}`: {reason}")]
    InvalidSelector { pattern: String, reason: String },
}

/// An extractor scans a parsed result page for one section's patterns.
///
/// Implementations must be pure functions of the document: no state is kept
/// between calls, so one extractor can serve any number of pages.
pub trait SectionExtractor: Send + Sync {
    type Output: Default;

    fn section(&self) -> Section;

    fn extract(&self, document: &Html) -> Result<Self::Output, ExtractionError>;
}

pub(crate) fn compile(pattern: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(pattern).map_err(|e| ExtractionError::InvalidSelector {
        pattern: pattern.to_string(),
        reason: format!("{e:?}"),
    })
}

/// All descendant text of `element`, whitespace runs collapsed to one space
/// and trimmed.
pub fn normalized_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn text_or_empty(element: Option<ElementRef<'_>>) -> String {
    element.map(normalized_text).unwrap_or_default()
}

pub(crate) fn attr_or_empty(element: Option<ElementRef<'_>>, attribute: &str) -> String {
    element
        .and_then(|e| e.value().attr(attribute))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Value of `attribute` when present and not blank.
pub(crate) fn non_blank_attr(element: ElementRef<'_>, attribute: &str) -> Option<String> {
    element
        .value()
        .attr(attribute)
        .map(collapse_whitespace)
        .filter(|v| !v.is_empty())
}
