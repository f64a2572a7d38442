use crate::model::Conversation;

use super::criteria::FilterCriteria;

/// True when the conversation satisfies every active category of the
/// criteria. Within a category any one value suffices.
pub fn matches(conversation: &Conversation, criteria: &FilterCriteria) -> bool {
    if let Some(archived) = criteria.archived {
        if conversation.effective_archived() != archived {
            return false;
        }
    }

    if !criteria.status.is_empty() && !criteria.status.contains(conversation.effective_status()) {
        return false;
    }

    if !criteria.priority.is_empty()
        && !criteria.priority.contains(conversation.effective_priority())
    {
        return false;
    }

    if !criteria.labels.is_empty() && criteria.labels.is_disjoint(&conversation.label_ids) {
        return false;
    }

    true
}

/// Conversations matching the criteria, in input order.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    criteria: &FilterCriteria,
) -> Vec<&'a Conversation> {
    let filtered: Vec<&Conversation> = conversations
        .iter()
        .filter(|c| matches(c, criteria))
        .collect();
    log::debug!(
        "Filtered {} of {} conversations",
        filtered.len(),
        conversations.len()
    );
    filtered
}

/// Owning variant of [`filter_conversations`].
pub fn retain_matching(
    mut conversations: Vec<Conversation>,
    criteria: &FilterCriteria,
) -> Vec<Conversation> {
    conversations.retain(|c| matches(c, criteria));
    conversations
}
