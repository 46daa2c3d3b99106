use std::{num::NonZeroU32, thread, time::Duration};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use governor::{Quota, RateLimiter};
use tracing::info;

use nba_scoreboard_scraper::{
    config::ScraperConfig, fetch::ScoreboardClient, scoreboard::ScoreboardParser,
    telegram::TelegramClient,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Scrape NBA results and send them to Telegram", long_about = None)]
struct Cli {
    /// Scoreboard date to scrape (YYYY-MM-DD); defaults to yesterday
    date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ScraperConfig::from_env();
    let target_date = cli.date.unwrap_or_else(yesterday);

    run(&config, target_date)
}

fn run(config: &ScraperConfig, target_date: NaiveDate) -> Result<()> {
    let client = ScoreboardClient::new(&config.scraping)?;
    let telegram = TelegramClient::new(&config.telegram)?;

    info!("Fetching NBA games for {}", target_date);
    let html = client.fetch(target_date)?;
    let games = ScoreboardParser::new().parse(&html, target_date);

    if games.is_empty() {
        info!("No games found for {}", target_date);
        telegram.send_message(&format!(
            "No NBA games were played {}.",
            formatted_date_phrase(target_date)
        ))?;
        return Ok(());
    }

    info!("Found {} game(s). Sending to Telegram...", games.len());

    let quota = Quota::per_second(
        NonZeroU32::new(config.rate_limits.messages_per_second)
            .context("Invalid messages_per_second value")?,
    );
    let rate_limiter = RateLimiter::direct(quota);

    for (index, game) in games.iter().enumerate() {
        while rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(100));
        }

        info!(
            "Sending game {}/{}: {} {} @ {} {} ({})",
            index + 1,
            games.len(),
            game.visitor_team_name,
            game.visitor_score,
            game.home_team_name,
            game.home_score,
            game.status
        );
        telegram.send_game_score(game)?;
    }

    info!("All games sent successfully");
    Ok(())
}

fn yesterday() -> NaiveDate {
    Local::now()
        .date_naive()
        .pred_opt()
        .expect("date out of range")
}

fn formatted_date_phrase(date: NaiveDate) -> String {
    if date == yesterday() {
        "yesterday".to_string()
    } else {
        format!("on {}", date.format("%B %-d, %Y"))
    }
}
