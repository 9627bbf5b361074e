use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "https://alqurans.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape every surah listed on the index page.
    Scrape(ScrapeArgs),
    /// Scrape a single surah (e.g. one listed in `failed_surahs.json`).
    Surah(SurahArgs),
    /// Write the parsed surah index as JSON.
    Index(IndexArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Origin of the source site (must be http/https).
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Delay before each request (politeness).
    #[arg(long, global = true, default_value_t = 1500)]
    pub delay_ms: u64,

    /// Per-request timeout.
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Output directory (`surahs/`, `quran_complete.json`, `failed_surahs.json`).
    #[arg(long)]
    pub out: String,

    /// Only scrape the first N surahs of the index (N >= 1).
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct SurahArgs {
    /// Surah number (1-114).
    #[arg(long)]
    pub id: u32,

    /// Output directory; the file is written under `surahs/`.
    #[arg(long)]
    pub out: String,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Output file path for the index JSON.
    #[arg(long)]
    pub out: String,
}
