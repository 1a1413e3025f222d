use std::sync::Arc;

use time::UtcOffset;
use url::Url;

use crate::domain::ports::inbound::EntryService;

#[derive(Clone)]
pub struct AppState {
    pub app_url: Url,
    pub secure_cookies: bool,
    /// Zone used when a client does not report its own offset.
    pub default_utc_offset: UtcOffset,
    pub entry_service: Arc<dyn EntryService>,
}

impl AppState {
    pub fn new(
        app_url: Url,
        secure_cookies: bool,
        default_utc_offset: UtcOffset,
        entry_service: Arc<dyn EntryService>,
    ) -> Self {
        Self {
            app_url,
            secure_cookies,
            default_utc_offset,
            entry_service,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by an in-memory entry repository.
    pub fn in_memory() -> (Self, crate::adapters::outbound::mock::MockEntryRepository) {
        use crate::{
            adapters::outbound::mock::MockEntryRepository, domain::services::EntryServiceImpl,
        };

        let repository = MockEntryRepository::new();
        let service = EntryServiceImpl::new(Arc::new(repository.clone()))
            .with_clock(|| time::macros::datetime!(2026-01-15 18:00 UTC));
        let state = Self::new(
            Url::parse("http://localhost:8080").expect("static URL"),
            false,
            UtcOffset::UTC,
            Arc::new(service),
        );
        (state, repository)
    }
}
