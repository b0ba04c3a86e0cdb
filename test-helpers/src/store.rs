//! In-memory property storage shared by all server workers.

use payloads::{Property, PropertyDetails, PropertyId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Image served for listings created without one.
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=60";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Property not found")]
    PropertyNotFound,
    #[error("Store is configured to fail requests")]
    Unavailable,
    #[error("Store lock poisoned")]
    Poisoned,
}

#[derive(Default)]
struct Listings {
    next_id: i64,
    by_id: BTreeMap<PropertyId, PropertyDetails>,
}

#[derive(Default)]
struct Inner {
    listings: Mutex<Listings>,
    fail_requests: AtomicBool,
    requests: AtomicUsize,
}

/// Cheaply cloneable handle to the listings.
#[derive(Clone, Default)]
pub struct PropertyStore {
    inner: Arc<Inner>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an incoming request, failing it if failure injection is on.
    pub fn begin_request(&self) -> Result<(), StoreError> {
        self.inner.requests.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_requests.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }

    pub fn set_fail_requests(&self, fail: bool) {
        self.inner.fail_requests.store(fail, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> usize {
        self.inner.requests.load(Ordering::SeqCst)
    }

    fn listings(&self) -> Result<MutexGuard<'_, Listings>, StoreError> {
        self.inner.listings.lock().map_err(|_| StoreError::Poisoned)
    }

    /// All listings ordered by id.
    pub fn list(&self) -> Result<Vec<Property>, StoreError> {
        let listings = self.listings()?;
        Ok(listings
            .by_id
            .iter()
            .map(|(id, details)| Property {
                id: *id,
                details: details.clone(),
            })
            .collect())
    }

    pub fn get(&self, id: PropertyId) -> Result<Property, StoreError> {
        let listings = self.listings()?;
        let details = listings
            .by_id
            .get(&id)
            .ok_or(StoreError::PropertyNotFound)?;
        Ok(Property {
            id,
            details: details.clone(),
        })
    }

    pub fn create(
        &self,
        details: PropertyDetails,
    ) -> Result<Property, StoreError> {
        let mut listings = self.listings()?;
        listings.next_id += 1;
        let id = PropertyId(listings.next_id);
        let details = with_fallback_image(details);
        listings.by_id.insert(id, details.clone());
        Ok(Property { id, details })
    }

    pub fn update(
        &self,
        id: PropertyId,
        details: PropertyDetails,
    ) -> Result<Property, StoreError> {
        let mut listings = self.listings()?;
        let stored = listings
            .by_id
            .get_mut(&id)
            .ok_or(StoreError::PropertyNotFound)?;
        *stored = with_fallback_image(details);
        Ok(Property {
            id,
            details: stored.clone(),
        })
    }

    pub fn delete(&self, id: PropertyId) -> Result<(), StoreError> {
        let mut listings = self.listings()?;
        listings
            .by_id
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::PropertyNotFound)
    }
}

/// Placeholder and missing image URLs are replaced with [`FALLBACK_IMAGE`].
fn with_fallback_image(mut details: PropertyDetails) -> PropertyDetails {
    let needs_fallback = match details.image_url.as_deref() {
        None => true,
        Some(url) => url.trim().is_empty() || url.contains("random"),
    };
    if needs_fallback {
        details.image_url = Some(FALLBACK_IMAGE.to_string());
    }
    details
}
