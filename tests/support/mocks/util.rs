// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl store_catalog::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        // Use fixed time for deterministic tests
        super::time::fixed_now()
    }
}

/// Passes names through untouched, so case survives into the slug.
#[derive(Clone)]
pub struct DummySlug;

impl store_catalog::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
