use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    let cli = quran_scrape::cli::Cli::parse();
    let directive = if cli.verbose { "debug" } else { "info" };
    quran_scrape::logging::init(directive).context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    let config = quran_scrape::config::ScraperConfig::from_args(&cli.source)
        .context("resolve scraper config")?;

    match cli.command {
        quran_scrape::cli::Command::Scrape(args) => {
            quran_scrape::scrape::run(args, &config)
                .await
                .context("scrape")?;
        }
        quran_scrape::cli::Command::Surah(args) => {
            quran_scrape::scrape::run_surah(args, &config)
                .await
                .context("surah")?;
        }
        quran_scrape::cli::Command::Index(args) => {
            quran_scrape::scrape::run_index(args, &config)
                .await
                .context("index")?;
        }
    }

    Ok(())
}
