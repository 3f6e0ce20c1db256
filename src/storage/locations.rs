use crate::geo::find_within;
use crate::locations::models::{LocationRecord, NewLocation};
use crate::storage::interface::{ILocationStorage, LocationRepo, LocationStatsRepo, TooClose};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryLocationsStorage {
    storage: Arc<RwLock<BTreeMap<u64, LocationRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryLocationsStorage {
    fn default() -> Self {
        Self {
            storage: Arc::default(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl ILocationStorage for InMemoryLocationsStorage {}

#[async_trait]
impl LocationRepo for InMemoryLocationsStorage {
    async fn all(&self) -> Vec<LocationRecord> {
        self.storage.read().await.values().cloned().collect()
    }

    async fn insert_unless_near(
        &self,
        location: NewLocation,
        threshold_km: f64,
    ) -> Result<LocationRecord, TooClose> {
        let mut storage = self.storage.write().await;
        if let Some(existing) = find_within(location.position, storage.values(), threshold_km) {
            return Err(TooClose {
                existing_id: existing.id,
            });
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = LocationRecord::from_new(id, unix_timestamp(), location);
        storage.insert(id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: u64) -> Option<LocationRecord> {
        self.storage.write().await.remove(&id)
    }
}

#[async_trait]
impl LocationStatsRepo for InMemoryLocationsStorage {
    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }
}

pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
