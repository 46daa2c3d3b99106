use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::types::TeamResult;

/// Cells explicitly tagged as a side's point total, in priority order.
const POINTS_SELECTORS: [&str; 4] = [
    r#"td[data-stat$="_pts"]"#,
    r#"td[data-stat$="_score"]"#,
    r#"td[data-stat="pts"]"#,
    r#"td[data-stat="team_pts"]"#,
];

/// Pulls a team's display name and final point total out of one table row.
pub struct TeamExtractor;

impl TeamExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Returns a [`TeamResult`] only when both the name and the points
    /// resolve; a row missing either yields nothing.
    pub fn from_row(&self, row: ElementRef) -> Option<TeamResult> {
        let name = self.team_name(row)?;
        let points = self.points(row)?;

        Some(TeamResult { name, points })
    }

    fn team_name(&self, row: ElementRef) -> Option<String> {
        let cell_selector = Selector::parse("th, td").unwrap();
        let link_selector = Selector::parse("a").unwrap();

        let cell = row.select(&cell_selector).next()?;
        let mut name = cell
            .select(&link_selector)
            .next()
            .map(|link| link.text().collect::<String>())
            .unwrap_or_default();
        if name.trim().is_empty() {
            name = cell.text().collect::<String>();
        }

        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    fn points(&self, row: ElementRef) -> Option<u32> {
        self.tagged_points_text(row)
            .or_else(|| self.trailing_numeric_text(row))
            .and_then(|text| text.parse::<u32>().ok())
    }

    fn tagged_points_text(&self, row: ElementRef) -> Option<String> {
        for selector in POINTS_SELECTORS {
            let selector = Selector::parse(selector).unwrap();
            if let Some(cell) = row.select(&selector).next() {
                let text = cell.text().collect::<String>().trim().to_string();
                if is_numeric(&text) {
                    return Some(text);
                }
            }
        }

        None
    }

    /// The final score is conventionally the last numeric column;
    /// quarter-by-quarter scores precede it, so scanning backward skips
    /// them.
    fn trailing_numeric_text(&self, row: ElementRef) -> Option<String> {
        let cell_selector = Selector::parse("td").unwrap();
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();

        cells.iter().rev().find_map(|cell| {
            let text = cell.text().collect::<String>().trim().to_string();
            is_numeric(&text).then_some(text)
        })
    }
}

fn is_numeric(text: &str) -> bool {
    Regex::new(r"^\d+$").unwrap().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_row(html: &str) -> (Html, Selector) {
        (Html::parse_document(html), Selector::parse("tr").unwrap())
    }

    fn extract(html: &str) -> Option<TeamResult> {
        let (document, selector) = first_row(html);
        let row = document.select(&selector).next().unwrap();
        TeamExtractor::new().from_row(row)
    }

    #[test]
    fn test_name_prefers_link_text() {
        let team = extract(
            r#"<table><tr>
                <td><a href="/teams/CHI/">Chicago Bulls</a> (22-30)</td>
                <td>106</td>
            </tr></table>"#,
        )
        .unwrap();
        assert_eq!(team.name, "Chicago Bulls");
        assert_eq!(team.points, 106);
    }

    #[test]
    fn test_name_falls_back_to_cell_text_and_collapses_whitespace() {
        let team = extract(
            r#"<table><tr>
                <td>  Milwaukee
                    Bucks  </td>
                <td>107</td>
            </tr></table>"#,
        )
        .unwrap();
        assert_eq!(team.name, "Milwaukee Bucks");
    }

    #[test]
    fn test_points_from_tagged_cell() {
        let team = extract(
            r#"<table><tr>
                <th>Boston Celtics</th>
                <td data-stat="visitor_pts">108</td>
                <td>999</td>
            </tr></table>"#,
        )
        .unwrap();
        assert_eq!(team.points, 108);
    }

    #[test]
    fn test_tagged_cell_with_non_numeric_text_is_skipped() {
        let team = extract(
            r#"<table><tr>
                <th>Boston Celtics</th>
                <td data-stat="visitor_pts">—</td>
                <td>108</td>
            </tr></table>"#,
        )
        .unwrap();
        assert_eq!(team.points, 108);
    }

    #[test]
    fn test_points_fallback_scans_cells_last_to_first() {
        // Quarter scores precede the total; the last numeric cell wins.
        let team = extract(
            r#"<table><tr>
                <td>Denver Nuggets</td>
                <td>28</td><td>25</td><td>30</td><td>29</td>
                <td>112</td>
            </tr></table>"#,
        )
        .unwrap();
        assert_eq!(team.points, 112);
    }

    #[test]
    fn test_trailing_non_numeric_cells_are_skipped() {
        let team = extract(
            r#"<table><tr>
                <td>Denver Nuggets</td>
                <td>112</td>
                <td>Final</td>
                <td></td>
            </tr></table>"#,
        )
        .unwrap();
        assert_eq!(team.points, 112);
    }

    #[test]
    fn test_no_numeric_cell_yields_nothing() {
        assert_eq!(
            extract(r#"<table><tr><td>Denver Nuggets</td><td>—</td></tr></table>"#),
            None
        );
    }

    #[test]
    fn test_empty_name_yields_nothing() {
        assert_eq!(
            extract(r#"<table><tr><td>   </td><td>99</td></tr></table>"#),
            None
        );
    }

    #[test]
    fn test_row_without_cells_yields_nothing() {
        assert_eq!(extract(r#"<table><tr></tr></table>"#), None);
    }
}
