pub mod engine;
pub mod highlight;

use serde::{Deserialize, Serialize};

pub use engine::MessageSearchEngine;
use highlight::HighlightRange;

/// One occurrence of the search term inside a message's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub message_id: String,
    /// Position of the message in the searched list.
    pub message_index: usize,
    /// Byte offset of the match start in the original content.
    pub start: usize,
    /// Byte offset of the match end (exclusive).
    pub end: usize,
}

impl SearchMatch {
    pub fn range(&self) -> HighlightRange {
        HighlightRange {
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    /// Empty term.
    Inactive,
    ActiveNoMatches,
    /// At least one match; the cursor points at one of them.
    ActiveHasMatches,
}

/// Serializable summary of the engine for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchView {
    pub term: String,
    pub state: SearchState,
    pub total_results: usize,
    pub current_result_index: Option<usize>,
    pub current: Option<SearchMatch>,
}
