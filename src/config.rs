use std::time::Duration;

use anyhow::Context as _;
use url::Url;

use crate::cli::SourceArgs;

/// Path of the surah listing page, relative to the base origin.
pub const INDEX_PATH: &str = "sura.php";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Origin without trailing slash, e.g. `https://alqurans.com`.
    pub base_url: String,
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ScraperConfig {
    pub fn from_args(args: &SourceArgs) -> anyhow::Result<Self> {
        let parsed = Url::parse(&args.base_url).context("parse --base-url")?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("--base-url must be http/https: {parsed}");
        }

        Ok(Self {
            base_url: args.base_url.trim_end_matches('/').to_owned(),
            delay: Duration::from_millis(args.delay_ms),
            timeout: Duration::from_secs(args.timeout_secs),
            user_agent: args.user_agent.clone(),
        })
    }

    pub fn index_url(&self) -> String {
        format!("{}/{INDEX_PATH}", self.base_url)
    }

    /// `<base>/<path>` with duplicate slashes collapsed.
    pub fn join(&self, path: &str) -> String {
        collapse_slashes(&format!("{}/{path}", self.base_url))
    }
}

/// Collapses runs of `/` that do not directly follow a `:` (keeps `scheme://`).
pub fn collapse_slashes(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;
    for ch in url.chars() {
        if ch == '/' && prev == Some('/') && before_prev != Some(':') {
            continue;
        }
        before_prev = prev;
        prev = Some(ch);
        out.push(ch);
    }
    out
}
