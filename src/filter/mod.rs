pub mod criteria;
pub mod predicate;
pub mod summary;

pub use criteria::{ArchiveChoice, FilterCriteria, FilterOption, PRIORITY_OPTIONS, STATUS_OPTIONS};
pub use predicate::{filter_conversations, matches, retain_matching};
pub use summary::{
    active_filter_badges, active_filter_count, clear_all, conversation_count_caption,
    has_active_filters, BadgeKind, FilterBadge,
};
