use serde::{Deserialize, Serialize};

use super::id_from_string_or_number;

/// A user-defined tag attachable to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLabel {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ConversationLabel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        ConversationLabel {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            description: None,
            is_default: false,
            created_at: None,
        }
    }
}

/// Labels shown inline on a conversation row, with the count of the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelPreview<'a> {
    pub visible: Vec<&'a ConversationLabel>,
    pub overflow: usize,
}

impl LabelPreview<'_> {
    /// Text for the collapsed remainder, e.g. `"+2"`.
    pub fn overflow_text(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

/// Split a conversation's labels into the first `limit` shown and an
/// overflow count.
pub fn preview_labels<'a, I>(labels: I, limit: usize) -> LabelPreview<'a>
where
    I: IntoIterator<Item = &'a ConversationLabel>,
{
    let mut visible: Vec<&ConversationLabel> = labels.into_iter().collect();
    let overflow = visible.len().saturating_sub(limit);
    visible.truncate(limit);
    LabelPreview { visible, overflow }
}

pub fn find_label<'a>(catalog: &'a [ConversationLabel], id: &str) -> Option<&'a ConversationLabel> {
    catalog.iter().find(|label| label.id == id)
}
