use chrono::NaiveDate;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::{rows::TeamRowLocator, team::TeamExtractor, types::GameRecord};

/// Status shown when the page carries no status node for a game.
const DEFAULT_STATUS: &str = "Final";

/// Assembles one [`GameRecord`] from a game summary block, or nothing when
/// the block does not hold two complete team rows. Never produces a
/// partially populated record.
pub struct GameBuilder {
    row_locator: TeamRowLocator,
    team_extractor: TeamExtractor,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            row_locator: TeamRowLocator::new(),
            team_extractor: TeamExtractor::new(),
        }
    }

    pub fn build(&self, summary: ElementRef, date: NaiveDate) -> Option<GameRecord> {
        let rows = self.row_locator.rows_for(summary);
        if rows.len() < 2 {
            debug!("Skipping summary: unable to locate at least two team rows");
            return None;
        }

        let Some((visitor_row, home_row)) = self.row_locator.assign_rows(&rows) else {
            debug!("Skipping summary: visitor or home row could not be determined");
            return None;
        };

        let visitor = self.team_extractor.from_row(visitor_row);
        let home = self.team_extractor.from_row(home_row);
        let (Some(visitor), Some(home)) = (visitor, home) else {
            debug!("Skipping summary: unable to extract team names or scores");
            return None;
        };

        Some(GameRecord {
            date: date.format("%Y-%m-%d").to_string(),
            status: self.status_from(summary),
            home_team_name: home.name,
            visitor_team_name: visitor.name,
            home_score: home.points,
            visitor_score: visitor.points,
        })
    }

    fn status_from(&self, summary: ElementRef) -> String {
        let status_selector =
            Selector::parse(".game_status, .game_summary .status, .game_summary_status strong")
                .unwrap();

        summary
            .select(&status_selector)
            .next()
            .map(|node| node.text().collect::<String>().trim().to_string())
            .filter(|status| !status.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn build(html: &str) -> Option<GameRecord> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("div.game_summary").unwrap();
        let summary = document.select(&selector).next().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        GameBuilder::new().build(summary, date)
    }

    #[test]
    fn test_builds_complete_record() {
        let game = build(
            r##"<div class="game_summary">
                <div class="game_status">Final/OT</div>
                <table class="linescore">
                    <tr class="visitor"><td><a href="#">Los Angeles Lakers</a></td><td>112</td></tr>
                    <tr class="home"><td><a href="#">Boston Celtics</a></td><td>108</td></tr>
                </table>
            </div>"##,
        )
        .unwrap();

        assert_eq!(game.date, "2024-03-01");
        assert_eq!(game.status, "Final/OT");
        assert_eq!(game.visitor_team_name, "Los Angeles Lakers");
        assert_eq!(game.visitor_score, 112);
        assert_eq!(game.home_team_name, "Boston Celtics");
        assert_eq!(game.home_score, 108);
    }

    #[test]
    fn test_status_defaults_to_final() {
        let game = build(
            r#"<div class="game_summary">
                <table class="teams">
                    <tr><td>Chicago Bulls</td><td>106</td></tr>
                    <tr><td>Milwaukee Bucks</td><td>107</td></tr>
                </table>
            </div>"#,
        )
        .unwrap();
        assert_eq!(game.status, "Final");
    }

    #[test]
    fn test_blank_status_node_defaults_to_final() {
        let game = build(
            r#"<div class="game_summary">
                <div class="game_status">   </div>
                <table class="teams">
                    <tr><td>Chicago Bulls</td><td>106</td></tr>
                    <tr><td>Milwaukee Bucks</td><td>107</td></tr>
                </table>
            </div>"#,
        )
        .unwrap();
        assert_eq!(game.status, "Final");
    }

    #[test]
    fn test_status_from_emphasized_summary_status() {
        let game = build(
            r#"<div class="game_summary">
                <div class="game_summary_status"><strong>Final - 2OT</strong></div>
                <table class="teams">
                    <tr><td>Chicago Bulls</td><td>106</td></tr>
                    <tr><td>Milwaukee Bucks</td><td>107</td></tr>
                </table>
            </div>"#,
        )
        .unwrap();
        assert_eq!(game.status, "Final - 2OT");
    }

    #[test]
    fn test_single_row_is_skipped() {
        assert_eq!(
            build(
                r#"<div class="game_summary">
                    <table class="teams"><tr><td>Chicago Bulls</td><td>106</td></tr></table>
                </div>"#,
            ),
            None
        );
    }

    #[test]
    fn test_missing_score_discards_whole_game() {
        assert_eq!(
            build(
                r#"<div class="game_summary">
                    <table class="teams">
                        <tr><td>Chicago Bulls</td><td>106</td></tr>
                        <tr><td>Milwaukee Bucks</td><td>—</td></tr>
                    </table>
                </div>"#,
            ),
            None
        );
    }
}
