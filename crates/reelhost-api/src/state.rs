//! Application state shared across handlers.

use crate::auth::JwtService;
use reelhost_core::Config;
use reelhost_db::VideoRepository;
use reelhost_processing::{MediaProber, Remuxer};
use reelhost_storage::Storage;
use std::sync::Arc;

/// Aggregated dependencies, injected into handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub config: Config,
    pub videos: VideoRepository,
    pub storage: Arc<dyn Storage>,
    pub prober: Arc<dyn MediaProber>,
    pub remuxer: Arc<dyn Remuxer>,
    pub jwt: JwtService,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
