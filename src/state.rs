use std::sync::Arc;

use crate::domain::burner::BurnerDomainList;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Disposable-domain lookup. Consulted only by the login action, which
    /// composes it into the server-side policy per request; the rendering
    /// handlers never touch it.
    pub burner_domains: Arc<dyn BurnerDomainList>,
}

impl AppState {
    pub fn new(burner_domains: Arc<dyn BurnerDomainList>) -> Self {
        Self { burner_domains }
    }
}
