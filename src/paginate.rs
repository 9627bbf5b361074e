use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::{ScraperConfig, collapse_slashes};
use crate::dom;
use crate::fetch::{self, Fetcher};
use crate::formats::Verse;

static PAGER_LINK: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(r#".btn-group a.btn-info[href*="page"]"#));

/// Continuation page URLs linked from the pager, first-seen order, no repeats.
pub fn discover_page_urls(document: &Html, page_url: &str, config: &ScraperConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    document
        .select(&PAGER_LINK)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::trim)
        .filter(|href| href.contains("page"))
        .map(|href| resolve_page_href(href, page_url, config))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

pub fn resolve_page_href(href: &str, page_url: &str, config: &ScraperConfig) -> String {
    let resolved = if href.starts_with("http") {
        href.to_owned()
    } else if href.starts_with('/') {
        format!("{}{href}", config.base_url)
    } else {
        let (page_dir, file_name) = page_url.rsplit_once('/').unwrap_or((page_url, ""));
        let stem = file_name.strip_suffix(".html").unwrap_or(file_name);
        // The site emits some pager links relative to the listing, not the surah page.
        // A page URL ending in `/` has an empty stem, which every href contains.
        if href.contains(stem) {
            format!("{}/{href}", config.base_url)
        } else {
            format!("{page_dir}/{href}")
        }
    };
    collapse_slashes(&resolved)
}

/// `<base>/<file name>`; `None` when that is the URL already tried.
pub fn alternate_url(page_url: &str, config: &ScraperConfig) -> Option<String> {
    let file_name = page_url.rsplit('/').next().unwrap_or(page_url);
    let alternate = config.join(file_name);
    if alternate == page_url {
        return None;
    }
    Some(alternate)
}

/// Fetches every continuation page and returns their verses in page order.
///
/// A page that cannot be fetched is skipped; its verses are simply missing.
pub async fn walk(fetcher: &Fetcher, page_urls: &[String], config: &ScraperConfig) -> Vec<Verse> {
    if !page_urls.is_empty() {
        tracing::info!(pages = page_urls.len(), "found additional pages");
    }

    let mut verses = Vec::new();
    for page_url in page_urls {
        tokio::time::sleep(config.delay).await;
        tracing::info!(url = %page_url, "scraping page");

        match fetch_page_verses(fetcher, page_url, config).await {
            Some(page_verses) => {
                tracing::info!(url = %page_url, verses = page_verses.len(), "scraped page");
                verses.extend(page_verses);
            }
            None => {
                tracing::warn!(url = %page_url, "page omitted");
            }
        }
    }
    verses
}

async fn fetch_page_verses(
    fetcher: &Fetcher,
    page_url: &str,
    config: &ScraperConfig,
) -> Option<Vec<Verse>> {
    let err = match fetcher.fetch_text(page_url).await {
        Ok(html) => return Some(crate::page::extract_verses(&Html::parse_document(&html))),
        Err(err) => err,
    };
    tracing::warn!(url = %page_url, ?err, "page fetch failed");

    if !fetch::is_not_found(&err) {
        return None;
    }
    let alternate = alternate_url(page_url, config)?;
    tracing::info!(url = %alternate, "trying alternate url");
    match fetcher.fetch_text(&alternate).await {
        Ok(html) => {
            tracing::info!(url = %alternate, "alternate url succeeded");
            Some(crate::page::extract_verses(&Html::parse_document(&html)))
        }
        Err(alt_err) => {
            tracing::warn!(url = %alternate, err = ?alt_err, "alternate url also failed");
            None
        }
    }
}
