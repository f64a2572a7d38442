use serde::{Deserialize, Serialize};

use super::id_from_string_or_number;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
}

impl Message {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Message {
            id: id.into(),
            content: Some(content.into()),
            created_at: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}
