use std::fmt;

use serde::{Deserialize, Serialize};

/// One parsed search result page: the source (keyword, page, url) plus every
/// extracted section. Every section field is always present, empty when
/// nothing was found.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    pub url: String,
    pub keyword: String,
    pub page_number: u32,
    pub organic_results: Vec<OrganicEntry>,
    pub related_queries: Vec<RelatedQuery>,
    pub people_also_ask: Vec<QaEntry>,
    pub images: Vec<ImageEntry>,
    pub videos: Vec<VideoEntry>,
    pub news: Vec<NewsEntry>,
    #[serde(rename = "wikiResults")]
    pub knowledge_panel: Option<KnowledgePanel>,
}

impl ParsedRecord {
    /// A record with every section empty.
    pub fn empty(url: &str, keyword: &str, page_number: u32) -> ParsedRecord {
        ParsedRecord {
            url: url.to_string(),
            keyword: keyword.to_string(),
            page_number,
            organic_results: Vec::new(),
            related_queries: Vec::new(),
            people_also_ask: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
            news: Vec::new(),
            knowledge_panel: None,
        }
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            organic_results: self.organic_results.len(),
            related_queries: self.related_queries.len(),
            people_also_ask: self.people_also_ask.len(),
            images: self.images.len(),
            videos: self.videos.len(),
            news: self.news.len(),
            has_knowledge_panel: self.knowledge_panel.is_some(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganicEntry {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RelatedQuery {
    pub text: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageEntry {
    pub url: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoEntry {
    pub url: String,
    pub title: String,
    pub views: String,
    pub channel: String,
    pub provider: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsEntry {
    pub headline: String,
    pub url: String,
    pub source: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgePanel {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl KnowledgePanel {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.url.is_empty()
    }
}

/// Per-section entry counts of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSummary {
    pub organic_results: usize,
    pub related_queries: usize,
    pub people_also_ask: usize,
    pub images: usize,
    pub videos: usize,
    pub news: usize,
    pub has_knowledge_panel: bool,
}

impl fmt::Display for RecordSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "organic={} related={} paa={} images={} videos={} news={} wiki={}",
            self.organic_results,
            self.related_queries,
            self.people_also_ask,
            self.images,
            self.videos,
            self.news,
            self.has_knowledge_panel
        )
    }
}

/// A search job: one keyword, fetched for `pages` consecutive result pages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub keyword: String,
    pub pages: u32,
}

impl Job {
    pub fn new(keyword: impl Into<String>, pages: u32) -> Job {
        Job {
            keyword: keyword.into(),
            pages: pages.max(1),
        }
    }
}
