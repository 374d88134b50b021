use scraper::Html;

use crate::data_models::{
    ImageEntry, KnowledgePanel, NewsEntry, OrganicEntry, ParsedRecord, QaEntry, RelatedQuery,
    VideoEntry,
};
use crate::extractors::{
    ImageExtractor, KnowledgePanelExtractor, NewsExtractor, OrganicExtractor,
    PeopleAlsoAskExtractor, RelatedQueriesExtractor, SectionExtractor, VideoExtractor,
};

pub type Extractor<T> = Box<dyn SectionExtractor<Output = T>>;

/// Turns a search result page into a [`ParsedRecord`].
///
/// Every section is extracted on its own. A section whose extractor fails is
/// logged and left empty; the other sections are unaffected, so `parse`
/// always hands back a complete record.
pub struct SearchParser {
    organic: Extractor<Vec<OrganicEntry>>,
    related_queries: Extractor<Vec<RelatedQuery>>,
    people_also_ask: Extractor<Vec<QaEntry>>,
    images: Extractor<Vec<ImageEntry>>,
    videos: Extractor<Vec<VideoEntry>>,
    news: Extractor<Vec<NewsEntry>>,
    knowledge_panel: Extractor<Option<KnowledgePanel>>,
}

impl Default for SearchParser {
    fn default() -> Self {
        SearchParser::builder().build()
    }
}

impl SearchParser {
    pub fn new() -> SearchParser {
        SearchParser::default()
    }

    pub fn builder() -> SearchParserBuilder {
        SearchParserBuilder {
            parser: SearchParser {
                organic: Box::new(OrganicExtractor),
                related_queries: Box::new(RelatedQueriesExtractor),
                people_also_ask: Box::new(PeopleAlsoAskExtractor),
                images: Box::new(ImageExtractor),
                videos: Box::new(VideoExtractor),
                news: Box::new(NewsExtractor),
                knowledge_panel: Box::new(KnowledgePanelExtractor),
            },
        }
    }

    pub fn parse(&self, markup: &str, keyword: &str, page_number: u32, url: &str) -> ParsedRecord {
        log::debug!("Parsing HTML for keyword={keyword}, page={page_number}, url={url}");

        let document = Html::parse_document(markup);

        let record = ParsedRecord {
            url: url.to_string(),
            keyword: keyword.to_string(),
            page_number,
            organic_results: run_section(self.organic.as_ref(), &document),
            related_queries: run_section(self.related_queries.as_ref(), &document),
            people_also_ask: run_section(self.people_also_ask.as_ref(), &document),
            images: run_section(self.images.as_ref(), &document),
            videos: run_section(self.videos.as_ref(), &document),
            news: run_section(self.news.as_ref(), &document),
            knowledge_panel: run_section(self.knowledge_panel.as_ref(), &document),
        };

        log::debug!("Parsed record summary: {}", record.summary());
        record
    }
}

/// Runs one extractor, degrading to the section's empty value on failure.
fn run_section<T: Default>(extractor: &dyn SectionExtractor<Output = T>, document: &Html) -> T {
    match extractor.extract(document) {
        Ok(output) => output,
        Err(e) => {
            log::error!("Error parsing {}: {:#}", extractor.section(), e);
            T::default()
        }
    }
}

/// Swaps individual section extractors while keeping the defaults for the
/// rest.
pub struct SearchParserBuilder {
    parser: SearchParser,
}

impl SearchParserBuilder {
    pub fn organic(mut self, e: impl SectionExtractor<Output = Vec<OrganicEntry>> + 'static) -> Self {
        self.parser.organic = Box::new(e);
        self
    }

    pub fn related_queries(
        mut self,
        e: impl SectionExtractor<Output = Vec<RelatedQuery>> + 'static,
    ) -> Self {
        self.parser.related_queries = Box::new(e);
        self
    }

    pub fn people_also_ask(mut self, e: impl SectionExtractor<Output = Vec<QaEntry>> + 'static) -> Self {
        self.parser.people_also_ask = Box::new(e);
        self
    }

    pub fn images(mut self, e: impl SectionExtractor<Output = Vec<ImageEntry>> + 'static) -> Self {
        self.parser.images = Box::new(e);
        self
    }

    pub fn videos(mut self, e: impl SectionExtractor<Output = Vec<VideoEntry>> + 'static) -> Self {
        self.parser.videos = Box::new(e);
        self
    }

    pub fn news(mut self, e: impl SectionExtractor<Output = Vec<NewsEntry>> + 'static) -> Self {
        self.parser.news = Box::new(e);
        self
    }

    pub fn knowledge_panel(
        mut self,
        e: impl SectionExtractor<Output = Option<KnowledgePanel>> + 'static,
    ) -> Self {
        self.parser.knowledge_panel = Box::new(e);
        self
    }

    pub fn build(self) -> SearchParser {
        self.parser
    }
}
