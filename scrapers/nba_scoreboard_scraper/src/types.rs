use serde::{Deserialize, Serialize};

/// One finished (or in-progress) game as extracted from the scoreboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Calendar date of the game, formatted `YYYY-MM-DD`.
    pub date: String,
    /// Game status as shown on the page, `"Final"` when the page has none.
    pub status: String,
    pub home_team_name: String,
    pub visitor_team_name: String,
    pub home_score: u32,
    pub visitor_score: u32,
}

/// A team's name and final point total, extracted from one table row.
/// Only produced when both fields resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamResult {
    pub name: String,
    pub points: u32,
}

/// Which side of the game a team row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    Visitor,
    Home,
    Unknown,
}

impl RowRole {
    /// Keyword looked for in row markup when classifying a row.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            RowRole::Visitor => Some("visitor"),
            RowRole::Home => Some("home"),
            RowRole::Unknown => None,
        }
    }
}
