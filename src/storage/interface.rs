use crate::locations::models::{LocationRecord, NewLocation};
use async_trait::async_trait;

pub trait ILocationStorage: LocationRepo + LocationStatsRepo + Clone + 'static {}

/// Refusal to store a point because another one sits too close to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooClose {
    pub existing_id: u64,
}

#[async_trait]
pub trait LocationRepo: Send + Sync {
    /// Every stored record, in id order.
    async fn all(&self) -> Vec<LocationRecord>;

    /// Stores `location` unless an existing record lies strictly closer than
    /// `threshold_km`. The check and the insert happen atomically.
    async fn insert_unless_near(
        &self,
        location: NewLocation,
        threshold_km: f64,
    ) -> Result<LocationRecord, TooClose>;

    async fn delete(&self, id: u64) -> Option<LocationRecord>;
}

#[async_trait]
pub trait LocationStatsRepo: Send + Sync {
    async fn count(&self) -> usize;
}
