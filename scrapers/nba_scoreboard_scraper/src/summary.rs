use scraper::{node::Node, ElementRef, Html, Selector};
use tracing::debug;

/// Class token marking one game's summary block on the scoreboard page.
const SUMMARY_MARKER: &str = "game_summary";

/// Finds every per-game summary block on a scoreboard page.
///
/// Some season archives ship the real scoreboard tables commented out and
/// re-insert them client-side. When the live document has no summary
/// blocks, each comment containing the marker token is re-parsed as an
/// independent document and searched the same way. Comments inside those
/// fragments are never walked, so the fallback is a single extra pass.
pub struct SummaryCollector {
    comment_fragments: Vec<Html>,
}

impl SummaryCollector {
    pub fn new() -> Self {
        Self {
            comment_fragments: Vec::new(),
        }
    }

    /// Returns all summary blocks in document order. Blocks recovered from
    /// comments are views into fragments owned by this collector.
    pub fn collect<'a>(&'a mut self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let summary_selector = Selector::parse("div.game_summary").unwrap();

        let live: Vec<ElementRef<'a>> = document.select(&summary_selector).collect();
        if !live.is_empty() {
            debug!("Discovered {} game summary div(s) in main document", live.len());
            return live;
        }

        debug!("No game summaries found in main document; inspecting HTML comments");
        self.comment_fragments = document
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Comment(comment) if comment.contains(SUMMARY_MARKER) => {
                    Some(Html::parse_document(comment))
                }
                _ => None,
            })
            .collect();

        let recovered: Vec<ElementRef<'a>> = self
            .comment_fragments
            .iter()
            .flat_map(|fragment| fragment.select(&summary_selector))
            .collect();
        if !recovered.is_empty() {
            debug!(
                "Discovered {} game summary div(s) inside HTML comments",
                recovered.len()
            );
        }
        recovered
    }
}
