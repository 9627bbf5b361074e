use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use scraper::Html;

use crate::cli::{IndexArgs, ScrapeArgs, SurahArgs};
use crate::config::ScraperConfig;
use crate::fetch::Fetcher;
use crate::formats::{FailedSurah, Surah, SurahRef};
use crate::store;

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub surahs: Vec<Surah>,
    pub failed: Vec<FailedSurah>,
}

impl ScrapeReport {
    pub fn verse_count(&self) -> usize {
        self.surahs.iter().map(|surah| surah.verses.len()).sum()
    }
}

pub async fn run(args: ScrapeArgs, config: &ScraperConfig) -> anyhow::Result<ScrapeReport> {
    let started = Instant::now();
    let out_dir = PathBuf::from(&args.out);
    let fetcher = Fetcher::new(config)?;

    let mut surah_refs = crate::index::fetch_surah_index(&fetcher, config).await?;
    if let Some(limit) = args.limit {
        surah_refs.truncate(limit);
    }

    let total = surah_refs.len();
    let mut report = ScrapeReport::default();

    for (index, surah_ref) in surah_refs.iter().enumerate() {
        tokio::time::sleep(config.delay).await;

        match scrape_surah(&fetcher, surah_ref, config).await {
            Ok(surah) => {
                save_surah(&out_dir, &surah)?;
                report.surahs.push(surah);
            }
            Err(err) => {
                tracing::error!(
                    id = surah_ref.id,
                    transliteration = %surah_ref.transliteration,
                    ?err,
                    "failed to scrape surah"
                );
                report.failed.push(FailedSurah::from(surah_ref));
            }
        }

        tracing::info!(
            progress = %format_progress(index + 1, total),
            done = index + 1,
            total,
            failed = report.failed.len(),
            "progress"
        );
    }

    store::write_json(&out_dir.join(store::COMPLETE_FILE), &report.surahs)
        .context("write combined file")?;

    if !report.failed.is_empty() {
        for failed in &report.failed {
            tracing::warn!(id = failed.id, transliteration = %failed.transliteration, "needs rerun");
        }
        store::write_json(&out_dir.join(store::FAILED_FILE), &report.failed)
            .context("write failure manifest")?;
    }

    tracing::info!(
        scraped = report.surahs.len(),
        failed = report.failed.len(),
        verses = report.verse_count(),
        elapsed_secs = started.elapsed().as_secs(),
        "scrape finished"
    );
    Ok(report)
}

/// Scrapes one surah by id, writing only its per-surah file.
pub async fn run_surah(args: SurahArgs, config: &ScraperConfig) -> anyhow::Result<Surah> {
    let fetcher = Fetcher::new(config)?;
    let surah_refs = crate::index::fetch_surah_index(&fetcher, config).await?;
    let surah_ref = surah_refs
        .iter()
        .find(|surah_ref| surah_ref.id == args.id)
        .ok_or_else(|| anyhow::anyhow!("surah {} not found in index", args.id))?;

    tokio::time::sleep(config.delay).await;
    let surah = scrape_surah(&fetcher, surah_ref, config)
        .await
        .with_context(|| format!("scrape surah {}", surah_ref.id))?;
    save_surah(&PathBuf::from(&args.out), &surah)?;
    Ok(surah)
}

pub async fn run_index(args: IndexArgs, config: &ScraperConfig) -> anyhow::Result<Vec<SurahRef>> {
    let fetcher = Fetcher::new(config)?;
    let surah_refs = crate::index::fetch_surah_index(&fetcher, config).await?;
    store::write_json(&PathBuf::from(&args.out), &surah_refs).context("write index")?;
    Ok(surah_refs)
}

/// Fetches a surah page and every continuation page it links to.
///
/// Only the first page fetch can fail; continuation pages degrade to
/// missing verses.
pub async fn scrape_surah(
    fetcher: &Fetcher,
    surah_ref: &SurahRef,
    config: &ScraperConfig,
) -> anyhow::Result<Surah> {
    tracing::info!(id = surah_ref.id, transliteration = %surah_ref.transliteration, "scraping surah");

    let html = fetcher
        .fetch_text(&surah_ref.url)
        .await
        .with_context(|| format!("fetch surah page {}", surah_ref.id))?;

    let (mut surah, page_urls) = {
        let document = Html::parse_document(&html);
        let surah = surah_from_first_page(&document, surah_ref);
        let page_urls = crate::paginate::discover_page_urls(&document, &surah_ref.url, config);
        (surah, page_urls)
    };

    let more = crate::paginate::walk(fetcher, &page_urls, config).await;
    surah.verses.extend(more);
    surah.verses = crate::page::dedup_and_sort(std::mem::take(&mut surah.verses));

    if !surah.verses.is_empty() {
        surah.total_verses = u32::try_from(surah.verses.len()).unwrap_or(u32::MAX);
    }

    tracing::info!(
        id = surah.id,
        transliteration = %surah.transliteration,
        verses = surah.verses.len(),
        "scraped surah"
    );
    Ok(surah)
}

fn surah_from_first_page(document: &Html, surah_ref: &SurahRef) -> Surah {
    let extracted_name = crate::page::extract_surah_name(document);
    let translation = crate::page::extract_meaning(document)
        .or_else(|| crate::names::fallback_translation(surah_ref.id).map(str::to_owned))
        .unwrap_or_else(|| surah_ref.transliteration.clone());

    Surah {
        id: surah_ref.id,
        name: crate::names::arabic_name(surah_ref.id, extracted_name.as_deref()),
        transliteration: surah_ref.transliteration.clone(),
        translation,
        revelation_type: crate::page::extract_revelation_type(document),
        total_verses: surah_ref.total_verses,
        verses: crate::page::extract_verses(document),
    }
}

fn save_surah(out_dir: &std::path::Path, surah: &Surah) -> anyhow::Result<()> {
    let path = store::surah_path(out_dir, surah.id, &surah.transliteration);
    store::write_json(&path, surah).with_context(|| format!("write surah file: {}", path.display()))
}

/// Percentage with one decimal, e.g. `33.3%`.
pub fn format_progress(done: usize, total: usize) -> String {
    if total == 0 {
        return "100.0%".to_owned();
    }
    let percent = done as f64 / total as f64 * 100.0;
    format!("{percent:.1}%")
}
