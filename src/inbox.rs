use crate::config::InboxConfig;
use crate::filter::{self, FilterBadge, FilterCriteria};
use crate::model::label::{preview_labels, LabelPreview};
use crate::model::{Conversation, ConversationLabel, Message};
use crate::search::MessageSearchEngine;

/// State behind the messaging page: the latest conversation and label
/// snapshots, the current filter selection, and a search engine for the
/// open conversation.
#[derive(Debug, Clone)]
pub struct Inbox {
    config: InboxConfig,
    conversations: Vec<Conversation>,
    label_catalog: Vec<ConversationLabel>,
    criteria: FilterCriteria,
    open: Option<OpenConversation>,
}

#[derive(Debug, Clone)]
struct OpenConversation {
    id: String,
    search: MessageSearchEngine,
}

impl Inbox {
    pub fn new(config: InboxConfig) -> Self {
        Inbox {
            config,
            conversations: Vec::new(),
            label_catalog: Vec::new(),
            criteria: FilterCriteria::default(),
            open: None,
        }
    }

    pub fn config(&self) -> &InboxConfig {
        &self.config
    }

    pub fn set_conversations(&mut self, conversations: Vec<Conversation>) {
        log::debug!("Inbox received {} conversations", conversations.len());
        self.conversations = conversations;
    }

    pub fn set_label_catalog(&mut self, labels: Vec<ConversationLabel>) {
        self.label_catalog = labels;
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn clear_filters(&mut self) {
        self.criteria = filter::clear_all();
    }

    pub fn filtered(&self) -> Vec<&Conversation> {
        filter::filter_conversations(&self.conversations, &self.criteria)
    }

    pub fn active_filter_count(&self) -> usize {
        filter::active_filter_count(&self.criteria)
    }

    pub fn badges(&self) -> Vec<FilterBadge> {
        filter::active_filter_badges(&self.criteria, &self.label_catalog)
    }

    pub fn count_caption(&self) -> String {
        filter::conversation_count_caption(self.filtered().len())
    }

    /// True when conversations exist but the filters hide all of them.
    pub fn is_filtered_out(&self) -> bool {
        !self.conversations.is_empty() && self.filtered().is_empty()
    }

    /// Inline labels for a conversation row, in catalog order.
    pub fn label_preview(&self, conversation_id: &str) -> LabelPreview<'_> {
        let assigned = self
            .conversations
            .iter()
            .find(|c| c.id == conversation_id)
            .map(|c| &c.label_ids);
        let labels = self
            .label_catalog
            .iter()
            .filter(move |label| assigned.is_some_and(|ids| ids.contains(&label.id)));
        preview_labels(labels, self.config.label_preview_limit)
    }

    /// Open a conversation with a fresh search.
    pub fn open_conversation(&mut self, conversation_id: impl Into<String>, messages: Vec<Message>) {
        let id = conversation_id.into();
        log::debug!("Opening conversation {} with {} messages", id, messages.len());
        self.open = Some(OpenConversation {
            id,
            search: MessageSearchEngine::with_config(messages, &self.config),
        });
    }

    /// Deliver a new message list for a conversation. Ignored unless it is
    /// the open one.
    pub fn refresh_messages(&mut self, conversation_id: &str, messages: Vec<Message>) {
        match self.open.as_mut() {
            Some(open) if open.id == conversation_id => open.search.set_messages(messages),
            _ => log::debug!("Dropping messages for closed conversation {}", conversation_id),
        }
    }

    pub fn close_conversation(&mut self) {
        self.open = None;
    }

    pub fn open_conversation_id(&self) -> Option<&str> {
        self.open.as_ref().map(|open| open.id.as_str())
    }

    pub fn search(&self) -> Option<&MessageSearchEngine> {
        self.open.as_ref().map(|open| &open.search)
    }

    pub fn search_mut(&mut self) -> Option<&mut MessageSearchEngine> {
        self.open.as_mut().map(|open| &mut open.search)
    }
}
