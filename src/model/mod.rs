pub mod conversation;
pub mod label;
pub mod message;

use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;

use crate::error::AppError;
pub use conversation::Conversation;
pub use label::ConversationLabel;
pub use message::Message;

/// Decode a conversation list as returned by the messaging API.
pub fn decode_conversations(json: &str) -> Result<Vec<Conversation>, AppError> {
    let conversations: Vec<Conversation> = serde_json::from_str(json)?;
    log::debug!("Decoded {} conversations", conversations.len());
    Ok(conversations)
}

/// Decode a conversation's message list. Order is kept as delivered.
pub fn decode_messages(json: &str) -> Result<Vec<Message>, AppError> {
    let messages: Vec<Message> = serde_json::from_str(json)?;
    log::debug!("Decoded {} messages", messages.len());
    Ok(messages)
}

#[derive(Deserialize)]
struct LabelCatalogResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    labels: Vec<ConversationLabel>,
}

/// Decode the label catalog payload `{ "labels": [...] }`.
/// A missing or null `labels` key is an empty catalog.
pub fn decode_label_catalog(json: &str) -> Result<Vec<ConversationLabel>, AppError> {
    let response: LabelCatalogResponse = serde_json::from_str(json)?;
    Ok(response.labels)
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Id set decoded with [`id_from_string_or_number`] per element; null or
/// absent is empty.
pub(crate) fn id_set_from_strings_or_numbers<'de, D>(
    deserializer: D,
) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct RawId(#[serde(deserialize_with = "id_from_string_or_number")] String);

    let ids: Vec<RawId> = null_as_default(deserializer)?;
    Ok(ids.into_iter().map(|RawId(id)| id).collect())
}

/// Identifiers arrive as strings from the API but as numbers from some
/// fixtures and older endpoints.
pub(crate) fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}
