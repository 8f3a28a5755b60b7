//! The domain state store.
//!
//! `AppStore` exclusively owns walkers, bookings, the session user, the last
//! selection and the user location. Every action follows the same pipeline:
//! build the next snapshot, swap it in, publish it, then write the changed
//! slice through to the key-value store. Persistence failures are logged and
//! never undo the in-memory change.

use std::sync::Arc;

use chrono::Utc;
use pawwalk_core::booking::{Booking, BookingPatch, NewBooking};
use pawwalk_core::error::Result;
use pawwalk_core::geo::NearbyWalker;
use pawwalk_core::location::{LocationError, LocationProvider, UserLocation};
use pawwalk_core::state::{AppSnapshot, LastSelection};
use pawwalk_core::storage::{KeyValueStore, StorageKeys, StorageSlot};
use pawwalk_core::user::{Credentials, Registration, SessionUser};
use pawwalk_core::walker::{Walker, WalkerLoad, seed_walkers, validate_walkers};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, watch};

pub struct AppStore {
    kv: Arc<dyn KeyValueStore>,
    location: Arc<dyn LocationProvider>,
    keys: StorageKeys,
    /// Current snapshot; holding the lock serializes actions.
    state: Mutex<Arc<AppSnapshot>>,
    publisher: watch::Sender<Arc<AppSnapshot>>,
}

impl AppStore {
    /// Loads persisted state and publishes the initial snapshot.
    ///
    /// Never fails: unreadable storage yields the seed catalog and no bookings,
    /// and a stale walker collection is replaced by the seed catalog on disk.
    pub async fn load(
        kv: Arc<dyn KeyValueStore>,
        location: Arc<dyn LocationProvider>,
        keys: StorageKeys,
    ) -> Self {
        let initial = Self::restore(kv.as_ref(), &keys).await;
        tracing::info!(
            walkers = initial.walkers.len(),
            bookings = initial.bookings.len(),
            logged_in = initial.is_logged_in(),
            "Domain state loaded"
        );

        let initial = Arc::new(initial);
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            kv,
            location,
            keys,
            state: Mutex::new(initial),
            publisher,
        }
    }

    async fn restore(kv: &dyn KeyValueStore, keys: &StorageKeys) -> AppSnapshot {
        let walkers_key = keys.key(StorageSlot::Walkers);
        let selection_key = keys.key(StorageSlot::LastSelection);
        let bookings_key = keys.key(StorageSlot::Bookings);
        let user_key = keys.key(StorageSlot::User);

        let reads = futures::join!(
            kv.get_item(&walkers_key),
            kv.get_item(&selection_key),
            kv.get_item(&bookings_key),
            kv.get_item(&user_key),
        );

        let (walkers_raw, selection_raw, bookings_raw, user_raw) = match reads {
            (Ok(w), Ok(s), Ok(b), Ok(u)) => (w, s, b, u),
            (w, s, b, u) => {
                let error = [w.err(), s.err(), b.err(), u.err()]
                    .into_iter()
                    .flatten()
                    .next()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                tracing::warn!(error = %error, "Failed to load storage, starting from seed catalog");
                return AppSnapshot {
                    walkers: seed_walkers(),
                    ..Default::default()
                };
            }
        };

        let walkers = match validate_walkers(walkers_raw.as_deref()) {
            WalkerLoad::Valid(walkers) => walkers,
            WalkerLoad::Missing => seed_walkers(),
            WalkerLoad::Stale(reason) => {
                tracing::warn!(reason = %reason, "Replacing stored walkers with seed catalog");
                let seed = seed_walkers();
                if let Err(e) = write_json(kv, &walkers_key, &seed).await {
                    tracing::warn!(key = %walkers_key, error = %e, "Failed to persist seed catalog");
                }
                seed
            }
        };

        AppSnapshot {
            walkers,
            bookings: parse_or_absent(&bookings_key, bookings_raw).unwrap_or_default(),
            last_selection: parse_or_absent(&selection_key, selection_raw),
            user: parse_or_absent(&user_key, user_raw),
            user_location: None,
        }
    }

    // ============================================================================
    // Reads
    // ============================================================================

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<AppSnapshot> {
        self.publisher.borrow().clone()
    }

    /// A receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppSnapshot>> {
        self.publisher.subscribe()
    }

    pub fn is_logged_in(&self) -> bool {
        self.snapshot().is_logged_in()
    }

    pub fn walker_by_id(&self, walker_id: &str) -> Option<Walker> {
        self.snapshot().walker(walker_id).cloned()
    }

    pub fn get_booking_by_id(&self, booking_id: &str) -> Option<Booking> {
        self.snapshot().booking(booking_id).cloned()
    }

    pub fn favorite_walkers(&self) -> Vec<Walker> {
        self.snapshot().favorite_walkers().into_iter().cloned().collect()
    }

    pub fn last_selected_walker(&self) -> Option<Walker> {
        self.snapshot().last_selected_walker().cloned()
    }

    /// Walkers within `radius_km` of the stored user location, nearest first.
    ///
    /// `None` until a location has been fetched.
    pub fn nearby_walkers(&self, radius_km: f64) -> Option<Vec<NearbyWalker>> {
        self.snapshot().nearby_walkers(radius_km)
    }

    pub fn is_far_from_service_area(&self, service_area_km: f64) -> bool {
        self.snapshot().is_far_from_service_area(service_area_km)
    }

    // ============================================================================
    // Walkers
    // ============================================================================

    /// Flips the favorite flag. Unknown ids are ignored.
    pub async fn toggle_favorite(&self, walker_id: &str) {
        self.mutate(Some(StorageSlot::Walkers), |state| {
            let Some(walker) = state.walkers.iter_mut().find(|w| w.id == walker_id) else {
                tracing::debug!(walker_id, "toggle_favorite: unknown walker");
                return false;
            };
            walker.favorite = !walker.favorite;
            true
        })
        .await;
    }

    /// Sets availability. Unknown ids are ignored.
    pub async fn set_availability(&self, walker_id: &str, is_available: bool) {
        self.mutate(Some(StorageSlot::Walkers), |state| {
            let Some(walker) = state.walkers.iter_mut().find(|w| w.id == walker_id) else {
                tracing::debug!(walker_id, "set_availability: unknown walker");
                return false;
            };
            walker.is_available = is_available;
            true
        })
        .await;
    }

    /// Records `walker_id` as the most recently viewed walker.
    pub async fn mark_selected_walker(&self, walker_id: &str) {
        let selection = LastSelection {
            walker_id: walker_id.to_string(),
            at: Utc::now(),
        };
        self.mutate(Some(StorageSlot::LastSelection), |state| {
            state.last_selection = Some(selection);
            true
        })
        .await;
    }

    // ============================================================================
    // Bookings
    // ============================================================================

    /// Validates and stores a new booking at the front of the list.
    ///
    /// Returns the new booking id. Fails with a validation error when the start
    /// time is not in the future, the dog name is blank, or the duration is not allowed.
    pub async fn create_booking(&self, input: NewBooking) -> Result<String> {
        let booking = Booking::create(input, Utc::now())?;
        let id = booking.id.clone();

        self.mutate(Some(StorageSlot::Bookings), |state| {
            state.bookings.insert(0, booking);
            true
        })
        .await;

        tracing::info!(booking_id = %id, "Booking created");
        Ok(id)
    }

    /// Removes the booking with `booking_id`. Unknown ids are ignored.
    pub async fn delete_booking(&self, booking_id: &str) {
        self.mutate(Some(StorageSlot::Bookings), |state| {
            let before = state.bookings.len();
            state.bookings.retain(|b| b.id != booking_id);
            let removed = state.bookings.len() != before;
            if !removed {
                tracing::debug!(booking_id, "delete_booking: unknown booking");
            }
            removed
        })
        .await;
    }

    /// Shallow-merges `patch` into the booking. Unknown ids are ignored.
    pub async fn update_booking(&self, booking_id: &str, patch: BookingPatch) -> Result<()> {
        let mut outcome = Ok(());
        self.mutate(Some(StorageSlot::Bookings), |state| {
            let Some(booking) = state.bookings.iter_mut().find(|b| b.id == booking_id) else {
                tracing::debug!(booking_id, "update_booking: unknown booking");
                return false;
            };
            outcome = booking.apply(patch);
            outcome.is_ok()
        })
        .await;
        outcome
    }

    // ============================================================================
    // Location
    // ============================================================================

    /// Fetches the device location once and keeps it in memory on success.
    ///
    /// Failures are returned, not stored; the previous location stays in place.
    pub async fn get_user_location(&self, with_address: bool) -> std::result::Result<UserLocation, LocationError> {
        let location = match self.location.locate_once(with_address).await {
            Ok(location) => location,
            Err(e) => {
                tracing::info!(error = %e, "Location lookup failed");
                return Err(e);
            }
        };

        let stored = location.clone();
        self.mutate(None, |state| {
            state.user_location = Some(stored);
            true
        })
        .await;
        Ok(location)
    }

    pub async fn clear_user_location(&self) {
        self.mutate(None, |state| state.user_location.take().is_some())
            .await;
    }

    // ============================================================================
    // Session
    // ============================================================================

    /// Creates and stores a session user. The password is discarded.
    pub async fn register(&self, registration: Registration) -> SessionUser {
        self.replace_user(SessionUser::from_registration(registration))
            .await
    }

    /// Demo login: any credentials succeed and the password is ignored.
    pub async fn login(&self, credentials: Credentials) -> SessionUser {
        self.replace_user(SessionUser::from_credentials(credentials))
            .await
    }

    /// Clears the session user and removes it from storage.
    pub async fn logout(&self) {
        self.mutate(Some(StorageSlot::User), |state| {
            state.user = None;
            true
        })
        .await;
        tracing::info!("Logged out");
    }

    async fn replace_user(&self, user: SessionUser) -> SessionUser {
        let stored = user.clone();
        self.mutate(Some(StorageSlot::User), |state| {
            state.user = Some(stored);
            true
        })
        .await;
        tracing::info!(user_id = %user.id, "Session started");
        user
    }

    // ============================================================================
    // Pipeline
    // ============================================================================

    /// Applies `f` to a copy of the current snapshot.
    ///
    /// When `f` reports a change, the copy replaces the current snapshot, is
    /// published, and `slot` (if any) is written through to storage.
    async fn mutate<F>(&self, slot: Option<StorageSlot>, f: F) -> bool
    where
        F: FnOnce(&mut AppSnapshot) -> bool,
    {
        let mut current = self.state.lock().await;

        let mut next = AppSnapshot::clone(&current);
        if !f(&mut next) {
            return false;
        }

        let next = Arc::new(next);
        *current = next.clone();
        self.publisher.send_replace(next.clone());

        if let Some(slot) = slot {
            self.persist(slot, &next).await;
        }
        true
    }

    async fn persist(&self, slot: StorageSlot, state: &AppSnapshot) {
        let key = self.keys.key(slot);
        let kv = self.kv.as_ref();

        let result = match slot {
            StorageSlot::Walkers => write_json(kv, &key, &state.walkers).await,
            StorageSlot::Bookings => write_json(kv, &key, &state.bookings).await,
            StorageSlot::LastSelection => write_or_remove(kv, &key, state.last_selection.as_ref()).await,
            StorageSlot::User => write_or_remove(kv, &key, state.user.as_ref()).await,
        };

        if let Err(e) = result {
            tracing::warn!(key = %key, error = %e, "Failed to persist state; keeping in-memory change");
        }
    }
}

async fn write_json<T: Serialize + ?Sized>(kv: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    kv.set_item(key, json).await
}

async fn write_or_remove<T: Serialize>(kv: &dyn KeyValueStore, key: &str, value: Option<&T>) -> Result<()> {
    match value {
        Some(value) => write_json(kv, key, value).await,
        None => kv.remove_item(key).await,
    }
}

/// Parses a stored blob, treating unparsable values as absent.
fn parse_or_absent<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring unparsable stored value");
            None
        }
    }
}
