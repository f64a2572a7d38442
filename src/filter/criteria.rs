use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The user's filter selection over a conversation list.
///
/// Every field defaults to "no constraint": an empty set never means
/// "match nothing", and `archived: None` accepts both archived and active
/// conversations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub status: BTreeSet<String>,
    pub priority: BTreeSet<String>,
    pub archived: Option<bool>,
    pub labels: BTreeSet<String>,
}

impl FilterCriteria {
    /// Check or uncheck a status option.
    pub fn toggle_status(&mut self, status: &str, checked: bool) {
        toggle(&mut self.status, status, checked);
    }

    /// Check or uncheck a priority option.
    pub fn toggle_priority(&mut self, priority: &str, checked: bool) {
        toggle(&mut self.priority, priority, checked);
    }

    /// Check or uncheck a label by id.
    pub fn toggle_label(&mut self, label_id: &str, checked: bool) {
        toggle(&mut self.labels, label_id, checked);
    }

    pub fn set_archive_choice(&mut self, choice: ArchiveChoice) {
        self.archived = choice.into();
    }

    pub fn archive_choice(&self) -> ArchiveChoice {
        self.archived.into()
    }

    /// Reset every category to "no constraint".
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str, checked: bool) {
    if checked {
        set.insert(value.to_string());
    } else {
        set.remove(value);
    }
}

/// The three-way archive selector: "all", "active" or "archived".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveChoice {
    #[default]
    All,
    Active,
    Archived,
}

impl ArchiveChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveChoice::All => "all",
            ArchiveChoice::Active => "active",
            ArchiveChoice::Archived => "archived",
        }
    }
}

impl fmt::Display for ArchiveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchiveChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ArchiveChoice::All),
            "active" => Ok(ArchiveChoice::Active),
            "archived" => Ok(ArchiveChoice::Archived),
            other => Err(format!("unknown archive choice: {}", other)),
        }
    }
}

impl From<ArchiveChoice> for Option<bool> {
    fn from(choice: ArchiveChoice) -> Self {
        match choice {
            ArchiveChoice::All => None,
            ArchiveChoice::Active => Some(false),
            ArchiveChoice::Archived => Some(true),
        }
    }
}

impl From<Option<bool>> for ArchiveChoice {
    fn from(archived: Option<bool>) -> Self {
        match archived {
            None => ArchiveChoice::All,
            Some(false) => ArchiveChoice::Active,
            Some(true) => ArchiveChoice::Archived,
        }
    }
}

/// A selectable filter value with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATUS_OPTIONS: [FilterOption; 3] = [
    FilterOption { value: "active", label: "Active" },
    FilterOption { value: "archived", label: "Archived" },
    FilterOption { value: "closed", label: "Closed" },
];

pub const PRIORITY_OPTIONS: [FilterOption; 4] = [
    FilterOption { value: "low", label: "Low" },
    FilterOption { value: "normal", label: "Normal" },
    FilterOption { value: "high", label: "High" },
    FilterOption { value: "urgent", label: "Urgent" },
];
