use serde::Serialize;

use crate::model::label::find_label;
use crate::model::ConversationLabel;

use super::criteria::FilterCriteria;

/// Number of categories (status, priority, archived, labels) that
/// currently constrain the list.
pub fn active_filter_count(criteria: &FilterCriteria) -> usize {
    [
        !criteria.status.is_empty(),
        !criteria.priority.is_empty(),
        criteria.archived.is_some(),
        !criteria.labels.is_empty(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

pub fn has_active_filters(criteria: &FilterCriteria) -> bool {
    active_filter_count(criteria) > 0
}

pub fn clear_all() -> FilterCriteria {
    FilterCriteria::default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Archived,
    Status,
    Priority,
    Label,
}

/// One entry of the "Active Filters" summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBadge {
    pub kind: BadgeKind,
    /// The filter value: "true"/"false" for archived, the tag or label id otherwise.
    pub value: String,
    pub text: String,
    /// Background color, only for label badges.
    pub color: Option<String>,
}

/// Badges in display order: archive state, statuses, priorities, then
/// labels. Label ids missing from the catalog produce no badge.
pub fn active_filter_badges(
    criteria: &FilterCriteria,
    label_catalog: &[ConversationLabel],
) -> Vec<FilterBadge> {
    let mut badges = Vec::new();

    if let Some(archived) = criteria.archived {
        badges.push(FilterBadge {
            kind: BadgeKind::Archived,
            value: archived.to_string(),
            text: if archived { "Archived" } else { "Active" }.to_string(),
            color: None,
        });
    }

    for status in &criteria.status {
        badges.push(FilterBadge {
            kind: BadgeKind::Status,
            value: status.clone(),
            text: format!("Status: {}", status),
            color: None,
        });
    }

    for priority in &criteria.priority {
        badges.push(FilterBadge {
            kind: BadgeKind::Priority,
            value: priority.clone(),
            text: format!("Priority: {}", priority),
            color: None,
        });
    }

    for label_id in &criteria.labels {
        match find_label(label_catalog, label_id) {
            Some(label) => badges.push(FilterBadge {
                kind: BadgeKind::Label,
                value: label.id.clone(),
                text: label.name.clone(),
                color: Some(label.color.clone()),
            }),
            None => log::debug!("Label {} not in catalog, no badge", label_id),
        }
    }

    badges
}

/// Caption next to the filter toggle, e.g. "1 conversation".
pub fn conversation_count_caption(count: usize) -> String {
    if count == 1 {
        "1 conversation".to_string()
    } else {
        format!("{} conversations", count)
    }
}
