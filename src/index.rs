use std::sync::LazyLock;

use anyhow::Context as _;
use regex::Regex;
use scraper::{Html, Selector};

use crate::config::ScraperConfig;
use crate::dom;
use crate::fetch::Fetcher;
use crate::formats::SurahRef;

static INDEX_ROW: LazyLock<Selector> = LazyLock::new(|| dom::selector("table.table-striped tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| dom::selector("td"));
static LINK: LazyLock<Selector> = LazyLock::new(|| dom::selector("a"));

/// `<transliteration> - <bengali name>`; the first spaced hyphen splits.
static NAME_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.+?)\s+-\s+(.+)$").unwrap_or_else(|err| panic!("static regex: {err}"))
});

pub async fn fetch_surah_index(
    fetcher: &Fetcher,
    config: &ScraperConfig,
) -> anyhow::Result<Vec<SurahRef>> {
    let url = config.index_url();
    tracing::info!(%url, "fetching surah index");
    let html = fetcher
        .fetch_text(&url)
        .await
        .context("fetch surah index")?;

    let surahs = parse_surah_index(&html, config);
    tracing::info!(count = surahs.len(), "found surahs");
    Ok(surahs)
}

/// Best-effort parse of the listing table. Rows that do not look like a
/// surah entry are skipped.
pub fn parse_surah_index(html: &str, config: &ScraperConfig) -> Vec<SurahRef> {
    let document = Html::parse_document(html);
    document
        .select(&INDEX_ROW)
        .filter_map(|row| parse_index_row(row, config))
        .collect()
}

fn parse_index_row(row: scraper::ElementRef<'_>, config: &ScraperConfig) -> Option<SurahRef> {
    let cells = row.select(&TD).collect::<Vec<_>>();
    let [number_cell, name_cell, verses_cell, ..] = cells.as_slice() else {
        return None;
    };

    let id = dom::text_of(*number_cell).parse::<u32>().ok()?;
    let link = name_cell.select(&LINK).next()?;
    let href = link.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }

    let (transliteration, bengali_name) = split_name(&dom::text_of(link));
    let total_verses = dom::text_of(*verses_cell).parse::<u32>().unwrap_or(0);

    Some(SurahRef {
        id,
        transliteration: crate::names::transliteration(id, &transliteration),
        bengali_name,
        url: resolve_index_href(href, config),
        total_verses,
    })
}

pub fn split_name(text: &str) -> (String, String) {
    match NAME_SPLIT.captures(text) {
        Some(caps) => (caps[1].trim().to_owned(), caps[2].trim().to_owned()),
        None => (text.trim().to_owned(), String::new()),
    }
}

fn resolve_index_href(href: &str, config: &ScraperConfig) -> String {
    if href.starts_with("http") {
        return href.to_owned();
    }
    config.join(href)
}
