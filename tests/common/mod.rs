#![allow(dead_code)]

use std::sync::Arc;

use login_gate::infrastructure::burner_list::StaticBurnerList;
use login_gate::state::AppState;

/// State backed by the bundled burner-domain snapshot.
///
/// The snapshot is what production uses by default, and the pinned test
/// domains (`mailinator.com` in, `example.com` out) are part of it.
pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(StaticBurnerList::bundled()))
}
