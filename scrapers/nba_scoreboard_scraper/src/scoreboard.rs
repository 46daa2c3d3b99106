use chrono::NaiveDate;
use scraper::Html;
use tracing::{debug, info};

use crate::{game::GameBuilder, summary::SummaryCollector, types::GameRecord};

/// Parses a scoreboard page into game records.
///
/// One malformed summary block never aborts the page; it is skipped and the
/// remaining blocks are processed in document order.
pub struct ScoreboardParser {
    game_builder: GameBuilder,
}

impl ScoreboardParser {
    pub fn new() -> Self {
        Self {
            game_builder: GameBuilder::new(),
        }
    }

    pub fn parse(&self, html: &str, date: NaiveDate) -> Vec<GameRecord> {
        let document = Html::parse_document(html);
        let mut collector = SummaryCollector::new();
        let summaries = collector.collect(&document);
        info!("Found {} potential game summary section(s)", summaries.len());

        let mut games = Vec::new();
        for (index, summary) in summaries.iter().enumerate() {
            debug!("Parsing game summary #{}", index + 1);
            match self.game_builder.build(*summary, date) {
                Some(game) => {
                    info!(
                        "Parsed game summary #{}: {} {} @ {} {} ({})",
                        index + 1,
                        game.visitor_team_name,
                        game.visitor_score,
                        game.home_team_name,
                        game.home_score,
                        game.status
                    );
                    games.push(game);
                }
                None => debug!("Skipping game summary #{}: insufficient data", index + 1),
            }
        }

        games
    }
}
