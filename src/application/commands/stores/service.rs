// src/application/commands/stores/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        errors::DomainError,
        store::{StoreReadRepository, StoreWriteRepository, services::StoreSlugService},
    },
};

pub struct StoreCommandService {
    pub(super) write_repo: Arc<dyn StoreWriteRepository>,
    pub(super) read_repo: Arc<dyn StoreReadRepository>,
    pub(super) slug_service: Arc<StoreSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) conflict_retries: u32,
}

impl StoreCommandService {
    pub fn new(
        write_repo: Arc<dyn StoreWriteRepository>,
        read_repo: Arc<dyn StoreReadRepository>,
        slug_service: Arc<StoreSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            conflict_retries: 0,
        }
    }

    /// How many times a write rejected by the storage uniqueness constraint
    /// re-runs slug resolution before the conflict is returned.
    pub fn with_conflict_retries(mut self, retries: u32) -> Self {
        self.conflict_retries = retries;
        self
    }

    /// Only conflicts are retried. Persistence failures always propagate.
    pub(super) fn should_retry(&self, err: &DomainError, attempt: u32) -> bool {
        if !err.is_conflict() || attempt >= self.conflict_retries {
            return false;
        }
        tracing::warn!(
            error = %err,
            attempt = attempt + 1,
            max_retries = self.conflict_retries,
            "store write hit slug conflict, resolving again"
        );
        true
    }
}
