//! Application state.

use htmldrop_core::Config;
use htmldrop_storage::Storage;
use std::sync::Arc;

/// Main application state shared by all handlers. The storage backend is the
/// only process-wide collaborator; handlers hold no state between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
