use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("invalid search base url {0}")]
    InvalidUrl(String),

    #[error("failed to fetch {url} after {attempts} attempts: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        last: String,
    },
}

/// Something that can turn a URL into a response body.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Search page URL for `keyword`. Pages after the first are addressed by the
/// 1-based index of their first result, ten results per page.
pub fn build_search_url(base: &str, keyword: &str, page_number: u32) -> Result<Url, FetchError> {
    let base = Url::parse(base).map_err(|_| FetchError::InvalidUrl(base.to_string()))?;
    Ok(search_url(&base, keyword, page_number))
}

/// Same as [`build_search_url`] for an already parsed base.
pub fn search_url(base: &Url, keyword: &str, page_number: u32) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("q", keyword);
        if page_number > 1 {
            let first = (page_number as u64 - 1) * 10 + 1;
            query.append_pair("first", &first.to_string());
        }
    }
    url
}

pub struct HttpFetcher {
    client: Client,
    max_retries: u32,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration, max_retries: u32) -> Result<HttpFetcher, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(HttpFetcher {
            client,
            max_retries: max_retries.max(1),
        })
    }

    pub fn from_config(config: &Config) -> Result<HttpFetcher, FetchError> {
        HttpFetcher::new(&config.user_agent, config.timeout(), config.max_retries)
    }

    async fn attempt(&self, url: &str) -> Result<String, reqwest::Error> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        res.text().await
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut last = String::new();
        for attempt in 1..=self.max_retries {
            log::debug!("Requesting URL (attempt {attempt}/{}): {url}", self.max_retries);
            match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    log::warn!("Request attempt {attempt} failed: {e}");
                    last = e.to_string();
                }
            }
        }
        Err(FetchError::Exhausted {
            url: url.to_string(),
            attempts: self.max_retries,
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_offset() {
        let url = build_search_url("https://www.bing.com/search", "best restaurants in NYC", 1).unwrap();
        assert_eq!(url.as_str(), "https://www.bing.com/search?q=best+restaurants+in+NYC");
    }

    #[test]
    fn later_pages_offset_by_ten() {
        let url = build_search_url("https://www.bing.com/search", "pizza", 3).unwrap();
        assert_eq!(url.as_str(), "https://www.bing.com/search?q=pizza&first=21");
    }

    #[test]
    fn bad_base_url_is_rejected() {
        assert!(matches!(
            build_search_url("not a url", "pizza", 1),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_exhausts_retries() {
        let fetcher = HttpFetcher::new("test-agent", Duration::from_millis(200), 2).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/search").await.unwrap_err();
        match err {
            FetchError::Exhausted { attempts, .. } => assert_eq!(attempts, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
