use anyhow::Context as _;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::config::ScraperConfig;

/// Sequential HTML fetcher sharing one connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Fetcher {
    pub fn new(config: &ScraperConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build http client")?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// GETs `url` and returns the body. Non-2xx statuses are errors.
    pub async fn fetch_text(&self, url: &str) -> anyhow::Result<String> {
        tracing::debug!(%url, "fetch");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;

        response
            .text()
            .await
            .with_context(|| format!("read body: {url}"))
    }
}

/// True when the error chain carries an HTTP 404 response status.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<reqwest::Error>()
            .and_then(reqwest::Error::status)
            == Some(StatusCode::NOT_FOUND)
    })
}
