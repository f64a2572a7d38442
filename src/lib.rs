pub mod config;
pub mod error;
pub mod filter;
pub mod inbox;
pub mod logging;
pub mod model;
pub mod search;

use flexi_logger::LoggerHandle;
use std::path::Path;

pub use config::InboxConfig;
pub use error::AppError;
pub use filter::FilterCriteria;
pub use inbox::Inbox;
pub use model::{Conversation, ConversationLabel, Message};
pub use search::{MessageSearchEngine, SearchMatch, SearchState};

/// Load config and start file logging into the configured directory.
pub fn init(config_path: Option<&Path>) -> Result<(InboxConfig, LoggerHandle), AppError> {
    let config = prepare(config_path)?;
    let handle = logging::init(&config.log_dir)?;
    log::info!(
        "iep-inbox ready (label preview limit {})",
        config.label_preview_limit
    );
    Ok((config, handle))
}

/// Load config (defaults when `config_path` is `None` or the file is
/// missing) and make sure its log directory exists.
pub fn prepare(config_path: Option<&Path>) -> Result<InboxConfig, AppError> {
    let config = match config_path {
        Some(path) => InboxConfig::load(path)?,
        None => InboxConfig::load(&config::default_config_path())?,
    };
    std::fs::create_dir_all(&config.log_dir)?;
    Ok(config)
}
