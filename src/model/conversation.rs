use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{id_from_string_or_number, id_set_from_strings_or_numbers};

pub const DEFAULT_STATUS: &str = "active";
pub const DEFAULT_PRIORITY: &str = "normal";

/// Read-only snapshot of a messaging thread between a parent and an advocate.
///
/// Only the attributes the filter system reads are kept; other API fields
/// are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(
        default,
        alias = "labelIds",
        deserialize_with = "id_set_from_strings_or_numbers"
    )]
    pub label_ids: BTreeSet<String>,
}

impl Conversation {
    pub fn new(id: impl Into<String>) -> Self {
        Conversation {
            id: id.into(),
            status: None,
            priority: None,
            archived: None,
            label_ids: BTreeSet::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn with_label(mut self, label_id: impl Into<String>) -> Self {
        self.label_ids.insert(label_id.into());
        self
    }

    /// Status with the `"active"` default. An empty string counts as absent.
    pub fn effective_status(&self) -> &str {
        non_empty(self.status.as_deref()).unwrap_or(DEFAULT_STATUS)
    }

    /// Priority with the `"normal"` default. An empty string counts as absent.
    pub fn effective_priority(&self) -> &str {
        non_empty(self.priority.as_deref()).unwrap_or(DEFAULT_PRIORITY)
    }

    pub fn effective_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
