//! Spacecraft service: cached reads over the persistent store.
//!
//! Lookups by id go through a keyed cache. Writes go straight to the store
//! and invalidate the cached entry after the store write succeeds, so a
//! caller never observes a stale value once update or delete has returned.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{CacheStats, KeyedCache};
use crate::error::{Result, ServiceError};
use crate::models::{CreateSpacecraftRequest, Page, Spacecraft, UpdateSpacecraftRequest};
use crate::observer::{LookupObserver, NegativeIdLogger};
use crate::store::SpacecraftStore;

// == Spacecraft Service ==
/// Coordinates the store, the read cache and lookup observers.
pub struct SpacecraftService {
    store: Arc<dyn SpacecraftStore>,
    cache: KeyedCache<i64, Spacecraft>,
    observer: Arc<dyn LookupObserver>,
}

impl SpacecraftService {
    /// Create a service with the default negative-id logging observer.
    pub fn new(store: Arc<dyn SpacecraftStore>) -> Self {
        Self::with_observer(store, Arc::new(NegativeIdLogger))
    }

    /// Create a service with a custom lookup observer.
    pub fn with_observer(
        store: Arc<dyn SpacecraftStore>,
        observer: Arc<dyn LookupObserver>,
    ) -> Self {
        Self {
            store,
            cache: KeyedCache::new(),
            observer,
        }
    }

    /// Fetch a spacecraft by id, serving repeated lookups from the cache.
    ///
    /// The observer is notified before anything else happens. Negative ids
    /// are rejected before the cache or the store is touched. Only a
    /// successful lookup populates the cache: an absent id stays absent
    /// and is asked of the store again next time.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NegativeId` for negative ids and
    /// `ServiceError::Store` when the store fails.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Spacecraft>> {
        self.observer.before_id_lookup(Some(id));
        info!("Fetching spacecraft with id: {}", id);

        if id < 0 {
            return Err(ServiceError::NegativeId(id));
        }

        if let Some(cached) = self.cache.get(&id) {
            debug!("Cache hit for spacecraft {}", id);
            return Ok(Some(cached));
        }

        debug!("Cache miss for spacecraft {}, querying store", id);
        let fetched = self.store.find_by_id(id).await?;
        if let Some(spacecraft) = &fetched {
            self.cache.put(id, spacecraft.clone());
        }

        Ok(fetched)
    }

    /// List spacecraft one page at a time. Pages bypass the cache.
    pub async fn list(&self, page: u32, size: u32) -> Result<Page<Spacecraft>> {
        info!("Listing spacecraft: page {} size {}", page, size);
        self.store.find_page(page, size).await
    }

    /// Find spacecraft whose name contains the fragment. Bypasses the cache.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Spacecraft>> {
        info!("Searching spacecraft by name: {}", fragment);
        self.store.find_by_name_containing(fragment).await
    }

    /// Create a new spacecraft. The store assigns the id.
    pub async fn create(&self, request: CreateSpacecraftRequest) -> Result<Spacecraft> {
        let created = self
            .store
            .save(Spacecraft {
                id: None,
                name: request.name,
                kind: request.kind,
                origin: request.origin,
            })
            .await?;

        info!("Created spacecraft {:?}", created.id);
        Ok(created)
    }

    /// Replace an existing spacecraft and drop its cached entry.
    ///
    /// The cached value is invalidated after the store write, so the next
    /// lookup by this id reads the fresh row.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no spacecraft has this id.
    pub async fn update(&self, id: i64, request: UpdateSpacecraftRequest) -> Result<Spacecraft> {
        let current = match self.store.find_by_id(id).await? {
            Some(found) => found,
            None => return Err(ServiceError::NotFound(id)),
        };

        let saved = self
            .store
            .save(Spacecraft {
                id: current.id,
                name: request.name,
                kind: request.kind,
                origin: request.origin,
            })
            .await?;

        self.cache.invalidate(&id);
        info!("Updated spacecraft {}", id);
        Ok(saved)
    }

    /// Delete a spacecraft and drop its cached entry.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` when no spacecraft has this id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(id));
        }

        self.store.delete_by_id(id).await?;
        self.cache.invalidate(&id);
        info!("Deleted spacecraft {}", id);
        Ok(())
    }

    /// Snapshot of the cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
