use serde::{Deserialize, Serialize};

/// A highlight range representing a match in the text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighlightRange {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset of the match end (exclusive).
    pub end: usize,
}

/// Find all occurrences of `term` in the text (case-insensitive).
/// Returns non-overlapping ranges, left to right, as byte offsets into the
/// original text.
pub fn find_highlights(text: &str, term: &str) -> Vec<HighlightRange> {
    let term_lower = fold_case(term);
    if term_lower.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let folded = FoldedText::new(text);
    let mut ranges = Vec::new();
    let mut search_from = 0;
    while let Some(pos) = folded.lower[search_from..].find(&term_lower) {
        let lower_start = search_from + pos;
        let lower_end = lower_start + term_lower.len();
        ranges.push(HighlightRange {
            start: folded.spans[lower_start].0,
            end: folded.spans[lower_end - 1].1,
        });
        search_from = lower_end;
    }
    ranges
}

/// Per-char lowercase, used for both term and content. Final sigma folds
/// to σ so "ΟΔΟΣ", "οδοσ" and "οδος" compare equal; same byte length.
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|lc| if lc == 'ς' { 'σ' } else { lc })
}

fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Lowercased text plus, for every lowercased byte, the byte span of the
/// original char it came from. Lowercasing can change byte length
/// ("İ" becomes three bytes), so offsets cannot be reused directly.
struct FoldedText {
    lower: String,
    spans: Vec<(usize, usize)>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut lower = String::with_capacity(text.len());
        let mut spans = Vec::with_capacity(text.len());
        for (start, ch) in text.char_indices() {
            let span = (start, start + ch.len_utf8());
            for lc in fold_char(ch) {
                lower.push(lc);
                spans.extend(std::iter::repeat(span).take(lc.len_utf8()));
            }
        }
        FoldedText { lower, spans }
    }
}
