use anyhow::{Result, bail};
use futures::stream::{self, StreamExt};
use reqwest::Url;

use crate::data_models::{Job, ParsedRecord};
use crate::fetcher::{FetchError, Fetcher, search_url};
use crate::parser::SearchParser;

/// One page to fetch for one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub keyword: String,
    pub page_number: u32,
    pub url: String,
}

/// Expands jobs into page requests in job order, pages ascending.
///
/// Requests are produced on demand, so a job asking for a huge number of
/// pages costs nothing until they are actually consumed.
pub fn plan_requests<'a>(
    base_url: &str,
    jobs: &'a [Job],
) -> Result<impl Iterator<Item = PageRequest> + 'a> {
    let base = Url::parse(base_url).map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?;
    Ok(jobs.iter().flat_map(move |job| {
        log::info!("Processing keyword '{}' ({} page(s))", job.keyword, job.pages);
        let base = base.clone();
        (1..=job.pages).map(move |page_number| PageRequest {
            keyword: job.keyword.clone(),
            page_number,
            url: search_url(&base, &job.keyword, page_number).to_string(),
        })
    }))
}

pub struct Crawler<F> {
    fetcher: F,
    parser: SearchParser,
    base_url: String,
    concurrency: usize,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, parser: SearchParser, base_url: &str, concurrency: usize) -> Crawler<F> {
        Crawler {
            fetcher,
            parser,
            base_url: base_url.to_string(),
            concurrency: concurrency.max(1),
        }
    }

    /// Fetches and parses every page of every job.
    ///
    /// Pages that cannot be fetched are logged and skipped. Records come back
    /// in job order, pages ascending, regardless of which fetch finished
    /// first. Fails only when not a single page produced a record.
    pub async fn crawl(&self, jobs: &[Job]) -> Result<Vec<ParsedRecord>> {
        let requests = plan_requests(&self.base_url, jobs)?;

        let records: Vec<ParsedRecord> = stream::iter(requests)
            .map(|request| self.crawl_page(request))
            .buffered(self.concurrency)
            .filter_map(|record| async move { record })
            .collect()
            .await;

        if records.is_empty() {
            bail!("No results were collected. Check connectivity or input keywords.");
        }
        Ok(records)
    }

    async fn crawl_page(&self, request: PageRequest) -> Option<ParsedRecord> {
        let html = match self.fetcher.fetch(&request.url).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("Skipping page due to fetch error: {:#}", e);
                return None;
            }
        };
        Some(
            self.parser
                .parse(&html, &request.keyword, request.page_number, &request.url),
        )
    }
}
