//! Price config repository interface

use async_trait::async_trait;

use super::model::PriceConfig;
use crate::domain::DomainResult;

#[async_trait]
pub trait PriceRepository: Send + Sync {
    /// Insert a new config and return it with its assigned id.
    async fn create(&self, config: PriceConfig) -> DomainResult<PriceConfig>;
    /// All configs, ordered by `valid_from` descending (resolution order).
    async fn find_all(&self) -> DomainResult<Vec<PriceConfig>>;
    /// The config with the greatest `valid_from`, if any.
    async fn find_latest(&self) -> DomainResult<Option<PriceConfig>>;
}
