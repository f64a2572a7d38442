use std::collections::BTreeSet;

use crate::config::InboxConfig;
use crate::model::Message;

use super::highlight::{find_highlights, HighlightRange};
use super::{SearchMatch, SearchState, SearchView};

/// In-conversation message search with a wrapping "current match" cursor.
///
/// Matches are re-derived whenever the term or the message list changes.
/// `current_index` is `None` exactly when there are no matches.
#[derive(Debug, Clone)]
pub struct MessageSearchEngine {
    messages: Vec<Message>,
    term: String,
    trim_term: bool,
    matches: Vec<SearchMatch>,
    current_index: Option<usize>,
}

impl MessageSearchEngine {
    pub fn new(messages: Vec<Message>) -> Self {
        MessageSearchEngine {
            messages,
            term: String::new(),
            trim_term: true,
            matches: Vec::new(),
            current_index: None,
        }
    }

    pub fn with_config(messages: Vec<Message>, config: &InboxConfig) -> Self {
        let mut engine = Self::new(messages);
        engine.trim_term = config.trim_search_term;
        engine
    }

    /// Replace the term and jump to the first match.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.recompute();
        self.current_index = if self.matches.is_empty() { None } else { Some(0) };
    }

    /// Replace the message list, keeping the cursor clamped into the new
    /// match count.
    pub fn set_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.recompute();
        self.current_index = match (self.current_index, self.matches.len()) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    pub fn go_to_next(&mut self) {
        if let Some(index) = self.current_index {
            self.current_index = Some((index + 1) % self.matches.len());
        }
    }

    pub fn go_to_previous(&mut self) {
        if let Some(index) = self.current_index {
            let len = self.matches.len();
            self.current_index = Some((index + len - 1) % len);
        }
    }

    pub fn clear_search(&mut self) {
        self.term.clear();
        self.matches.clear();
        self.current_index = None;
    }

    pub fn state(&self) -> SearchState {
        if !self.has_active_search() {
            SearchState::Inactive
        } else if self.matches.is_empty() {
            SearchState::ActiveNoMatches
        } else {
            SearchState::ActiveHasMatches
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn total_results(&self) -> usize {
        self.matches.len()
    }

    pub fn current_result_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_search_result(&self) -> Option<&SearchMatch> {
        self.current_index.and_then(|index| self.matches.get(index))
    }

    pub fn is_current_result(&self, message_id: &str) -> bool {
        self.current_search_result()
            .is_some_and(|m| m.message_id == message_id)
    }

    pub fn has_active_search(&self) -> bool {
        !self.effective_term().is_empty()
    }

    pub fn has_results(&self) -> bool {
        !self.matches.is_empty()
    }

    /// True when the message contains at least one match.
    pub fn has_search_match(&self, message_id: &str) -> bool {
        self.has_active_search() && self.matches.iter().any(|m| m.message_id == message_id)
    }

    /// Messages with at least one match while a search is active, every
    /// message otherwise.
    pub fn filtered_messages(&self) -> Vec<&Message> {
        if !self.has_active_search() {
            return self.messages.iter().collect();
        }
        let hit: BTreeSet<usize> = self.matches.iter().map(|m| m.message_index).collect();
        hit.into_iter().map(|index| &self.messages[index]).collect()
    }

    /// Match ranges inside one message, for rendering highlights.
    pub fn highlights_for(&self, message_id: &str) -> Vec<HighlightRange> {
        self.matches
            .iter()
            .filter(|m| m.message_id == message_id)
            .map(SearchMatch::range)
            .collect()
    }

    pub fn view(&self) -> SearchView {
        SearchView {
            term: self.term.clone(),
            state: self.state(),
            total_results: self.total_results(),
            current_result_index: self.current_index,
            current: self.current_search_result().cloned(),
        }
    }

    fn effective_term(&self) -> &str {
        if self.trim_term {
            self.term.trim()
        } else {
            &self.term
        }
    }

    fn recompute(&mut self) {
        self.matches = collect_matches(&self.messages, self.effective_term());
        log::debug!(
            "Search {:?} matched {} times across {} messages",
            self.term,
            self.matches.len(),
            self.messages.len()
        );
    }
}

/// All matches of `term` in message order, then offset order.
fn collect_matches(messages: &[Message], term: &str) -> Vec<SearchMatch> {
    if term.is_empty() {
        return Vec::new();
    }
    messages
        .iter()
        .enumerate()
        .flat_map(|(index, message)| {
            find_highlights(message.text(), term)
                .into_iter()
                .map(move |range| SearchMatch {
                    message_id: message.id.clone(),
                    message_index: index,
                    start: range.start,
                    end: range.end,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_messages() -> Vec<Message> {
        vec![
            Message::new("m1", "find me here"),
            Message::new("m2", "find again"),
        ]
    }

    fn three_match_engine() -> MessageSearchEngine {
        let mut engine = MessageSearchEngine::new(vec![
            Message::new("m1", "goal review"),
            Message::new("m2", "no match here"),
            Message::new("m3", "Goal one, goal two"),
        ]);
        engine.set_search_term("goal");
        engine
    }

    #[test]
    fn test_search_determinism() {
        let mut engine = MessageSearchEngine::new(sample_messages());
        engine.set_search_term("find");
        assert_eq!(engine.total_results(), 2);
        assert_eq!(engine.matches()[0].message_id, "m1");
        assert_eq!(engine.matches()[1].message_id, "m2");
        assert_eq!(engine.current_result_index(), Some(0));
        assert!(engine.is_current_result("m1"));
        assert!(!engine.is_current_result("m2"));

        engine.go_to_next();
        assert!(!engine.is_current_result("m1"));
        assert!(engine.is_current_result("m2"));
    }

    #[test]
    fn test_case_insensitive_term() {
        let mut engine = MessageSearchEngine::new(vec![Message::new("m1", "find me")]);
        engine.set_search_term("FIND");
        assert_eq!(engine.total_results(), 1);
        assert_eq!(engine.state(), SearchState::ActiveHasMatches);
    }

    #[test]
    fn test_uppercase_greek_term() {
        let mut engine = MessageSearchEngine::new(vec![
            Message::new("m1", "Η συνάντηση στην ΟΔΟΣ Πατησίων"),
            Message::new("m2", "νέα οδος"),
        ]);
        engine.set_search_term("ΟΔΟΣ");
        assert_eq!(engine.total_results(), 2);
        assert!(engine.is_current_result("m1"));
    }

    #[test]
    fn test_matches_ordered_by_message_then_offset() {
        let engine = three_match_engine();
        let positions: Vec<(&str, usize)> = engine
            .matches()
            .iter()
            .map(|m| (m.message_id.as_str(), m.start))
            .collect();
        assert_eq!(positions, vec![("m1", 0), ("m3", 0), ("m3", 10)]);
    }

    #[test]
    fn test_cursor_wraps_forward() {
        let mut engine = three_match_engine();
        engine.go_to_next();
        engine.go_to_next();
        assert_eq!(engine.current_result_index(), Some(2));
        engine.go_to_next();
        assert_eq!(engine.current_result_index(), Some(0));
    }

    #[test]
    fn test_cursor_wraps_backward() {
        let mut engine = three_match_engine();
        assert_eq!(engine.current_result_index(), Some(0));
        engine.go_to_previous();
        assert_eq!(engine.current_result_index(), Some(2));
        engine.go_to_previous();
        assert_eq!(engine.current_result_index(), Some(1));
    }

    #[test]
    fn test_empty_term_clears() {
        let mut engine = three_match_engine();
        engine.go_to_next();
        engine.set_search_term("");
        assert!(engine.matches().is_empty());
        assert_eq!(engine.current_result_index(), None);
        assert_eq!(engine.state(), SearchState::Inactive);
    }

    #[test]
    fn test_whitespace_term_is_inactive() {
        let mut engine = MessageSearchEngine::new(sample_messages());
        engine.set_search_term("   ");
        assert_eq!(engine.state(), SearchState::Inactive);
        assert!(!engine.has_active_search());
    }

    #[test]
    fn test_untrimmed_config_searches_whitespace() {
        let config = InboxConfig {
            trim_search_term: false,
            ..InboxConfig::default()
        };
        let mut engine = MessageSearchEngine::with_config(sample_messages(), &config);
        engine.set_search_term(" ");
        assert_eq!(engine.state(), SearchState::ActiveHasMatches);
        assert_eq!(engine.total_results(), 3);
    }

    #[test]
    fn test_no_matches_state() {
        let mut engine = MessageSearchEngine::new(sample_messages());
        engine.set_search_term("transition plan");
        assert_eq!(engine.state(), SearchState::ActiveNoMatches);
        assert_eq!(engine.current_result_index(), None);
        assert!(engine.current_search_result().is_none());
        assert!(!engine.has_results());
    }

    #[test]
    fn test_navigation_without_matches_is_noop() {
        let mut engine = MessageSearchEngine::new(sample_messages());
        engine.go_to_next();
        engine.go_to_previous();
        assert_eq!(engine.current_result_index(), None);

        engine.set_search_term("zzz");
        engine.go_to_next();
        assert_eq!(engine.current_result_index(), None);
    }

    #[test]
    fn test_clear_search() {
        let mut engine = three_match_engine();
        engine.clear_search();
        assert_eq!(engine.term(), "");
        assert_eq!(engine.total_results(), 0);
        assert_eq!(engine.state(), SearchState::Inactive);
    }

    #[test]
    fn test_new_term_resets_cursor() {
        let mut engine = three_match_engine();
        engine.go_to_next();
        engine.go_to_next();
        engine.set_search_term("GOAL");
        assert_eq!(engine.current_result_index(), Some(0));
    }

    #[test]
    fn test_message_update_keeps_cursor() {
        let mut engine = three_match_engine();
        engine.go_to_next();
        let mut messages = engine.messages().to_vec();
        messages.push(Message::new("m4", "new goal"));
        engine.set_messages(messages);
        assert_eq!(engine.total_results(), 4);
        assert_eq!(engine.current_result_index(), Some(1));
    }

    #[test]
    fn test_message_update_clamps_cursor() {
        let mut engine = three_match_engine();
        engine.go_to_previous();
        assert_eq!(engine.current_result_index(), Some(2));
        engine.set_messages(vec![Message::new("m1", "goal review")]);
        assert_eq!(engine.current_result_index(), Some(0));
        assert!(engine.is_current_result("m1"));
    }

    #[test]
    fn test_message_update_to_no_matches_and_back() {
        let mut engine = three_match_engine();
        engine.set_messages(vec![Message::new("m9", "nothing")]);
        assert_eq!(engine.current_result_index(), None);
        assert_eq!(engine.state(), SearchState::ActiveNoMatches);

        engine.set_messages(vec![Message::new("m10", "goal")]);
        assert_eq!(engine.current_result_index(), Some(0));
    }

    #[test]
    fn test_missing_content_never_matches() {
        let mut silent = Message::new("m0", "");
        silent.content = None;
        let mut engine = MessageSearchEngine::new(vec![silent, Message::new("m1", "find")]);
        engine.set_search_term("find");
        assert_eq!(engine.total_results(), 1);
        assert_eq!(engine.matches()[0].message_index, 1);
    }

    #[test]
    fn test_filtered_messages_and_has_match() {
        let mut engine = three_match_engine();
        let ids: Vec<&str> = engine
            .filtered_messages()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["m1", "m3"]);
        assert!(engine.has_search_match("m3"));
        assert!(!engine.has_search_match("m2"));

        engine.clear_search();
        assert_eq!(engine.filtered_messages().len(), 3);
        assert!(!engine.has_search_match("m3"));
    }

    #[test]
    fn test_highlights_for_message() {
        let engine = three_match_engine();
        let ranges = engine.highlights_for("m3");
        assert_eq!(
            ranges,
            vec![
                HighlightRange { start: 0, end: 4 },
                HighlightRange { start: 10, end: 14 },
            ]
        );
        assert!(engine.highlights_for("m2").is_empty());
    }

    #[test]
    fn test_view() {
        let mut engine = three_match_engine();
        engine.go_to_previous();
        let view = engine.view();
        assert_eq!(view.term, "goal");
        assert_eq!(view.total_results, 3);
        assert_eq!(view.current_result_index, Some(2));
        assert_eq!(view.current.unwrap().start, 10);
        let json = serde_json::to_value(engine.view()).unwrap();
        assert_eq!(json["state"], "active_has_matches");
    }
}
