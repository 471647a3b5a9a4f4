//! Shared application state.

use replog_core::ConversationHandler;
use replog_storage::InteractionRepository;

/// State handed to every request handler.
///
/// `handler` owns the process-lifetime chat log; `repo` owns the durable
/// store. They are deliberately separate record universes.
pub struct AppState {
    pub repo: InteractionRepository,
    pub handler: ConversationHandler,
}

impl AppState {
    #[must_use]
    pub fn new(repo: InteractionRepository) -> Self {
        Self {
            repo,
            handler: ConversationHandler::new(),
        }
    }
}
