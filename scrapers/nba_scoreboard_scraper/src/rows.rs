use scraper::{ElementRef, Selector};

use crate::types::RowRole;

/// Locates the two team rows inside a game summary block and decides which
/// is the visitor and which is the home side.
pub struct TeamRowLocator;

impl TeamRowLocator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the usable rows of the first candidate table holding at
    /// least two of them, or an empty vec. Candidate order: the linescore
    /// table, the legacy teams table, then every other table in the block.
    pub fn rows_for<'a>(&self, summary: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        for table in self.candidate_tables(summary) {
            let rows = self.extract_rows(table);
            if rows.len() >= 2 {
                return rows;
            }
        }

        Vec::new()
    }

    /// Classifies rows as (visitor, home). Keyword markers win; without
    /// them the first usable row is the visitor and the second the home
    /// side. The same row is never returned for both roles.
    pub fn assign_rows<'a>(
        &self,
        rows: &[ElementRef<'a>],
    ) -> Option<(ElementRef<'a>, ElementRef<'a>)> {
        let visitor = self
            .find_row(rows, RowRole::Visitor)
            .or_else(|| rows.first().copied())?;
        let home = self
            .find_row(rows, RowRole::Home)
            .or_else(|| rows.get(1).copied())?;
        let home = self.distinct_home_row(rows, visitor, home)?;

        Some((visitor, home))
    }

    fn candidate_tables<'a>(&self, summary: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let linescore_selector = Selector::parse("table.linescore").unwrap();
        let teams_selector = Selector::parse("table.teams").unwrap();
        let table_selector = Selector::parse("table").unwrap();

        let mut tables: Vec<ElementRef<'a>> = Vec::new();
        let preferred = summary
            .select(&linescore_selector)
            .next()
            .into_iter()
            .chain(summary.select(&teams_selector).next());
        for table in preferred.chain(summary.select(&table_selector)) {
            if !tables.iter().any(|seen| seen.id() == table.id()) {
                tables.push(table);
            }
        }

        tables
    }

    fn extract_rows<'a>(&self, table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let body_row_selector = Selector::parse("tbody tr").unwrap();
        let row_selector = Selector::parse("tr").unwrap();
        let cell_selector = Selector::parse("th, td").unwrap();

        let mut rows: Vec<ElementRef<'a>> = table.select(&body_row_selector).collect();
        if rows.is_empty() {
            rows = table.select(&row_selector).collect();
        }

        // Decorative rows with no cell text carry no team data.
        rows.retain(|row| {
            row.select(&cell_selector)
                .any(|cell| !cell.text().collect::<String>().trim().is_empty())
        });
        rows
    }

    fn find_row<'a>(&self, rows: &[ElementRef<'a>], role: RowRole) -> Option<ElementRef<'a>> {
        let keyword = role.keyword()?;
        rows.iter()
            .copied()
            .find(|row| self.class_match(*row, keyword) || self.header_match(*row, keyword))
    }

    fn class_match(&self, row: ElementRef, keyword: &str) -> bool {
        row.value()
            .attr("class")
            .unwrap_or_default()
            .split_whitespace()
            .any(|class| class.to_lowercase().contains(keyword))
    }

    fn header_match(&self, row: ElementRef, keyword: &str) -> bool {
        let header_selector = Selector::parse("th").unwrap();
        let Some(header) = row.select(&header_selector).next() else {
            return false;
        };

        ["data-stat", "class", "aria-label"]
            .iter()
            .filter_map(|attr| header.value().attr(attr))
            .any(|value| value.to_lowercase().contains(keyword))
    }

    fn distinct_home_row<'a>(
        &self,
        rows: &[ElementRef<'a>],
        visitor: ElementRef<'a>,
        home: ElementRef<'a>,
    ) -> Option<ElementRef<'a>> {
        if home.id() != visitor.id() {
            return Some(home);
        }

        rows.iter().copied().find(|row| row.id() != visitor.id())
    }
}
