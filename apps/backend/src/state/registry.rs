//! Bounded, expiring registry of live game sessions.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::domain::{GameId, GameSession};
use crate::errors::domain::DomainError;

/// Default size of the id space, `1..=99`.
pub const DEFAULT_MAX_SESSIONS: u32 = 99;
/// Default idle time after which a session may be reclaimed.
pub const DEFAULT_IDLE_EXPIRY: Duration = Duration::hours(12);

/// Shared handle to one session. Every mutation goes through its lock.
pub type SessionHandle = Arc<Mutex<GameSession>>;

#[derive(Debug)]
struct Entry {
    session: SessionHandle,
    last_active: OffsetDateTime,
    generation: u64,
}

/// Min-heap key: (deadline, generation, id).
///
/// An entry is stale once the session behind `id` has been touched again
/// (its generation moved on) or removed.
type ExpiryKey = Reverse<(OffsetDateTime, u64, GameId)>;

#[derive(Debug)]
struct RegistryInner {
    entries: HashMap<GameId, Entry>,
    free: BTreeSet<GameId>,
    expiry: BinaryHeap<ExpiryKey>,
    next_generation: u64,
}

/// Owns the id space and the live sessions.
///
/// Ids are handed out lowest-first from a free list. When the free list is
/// empty the session idle the longest is reclaimed, provided its idle time
/// exceeds the expiry window.
#[derive(Debug)]
pub struct SessionRegistry {
    inner: Mutex<RegistryInner>,
    capacity: u32,
    idle_expiry: Duration,
}

impl SessionRegistry {
    pub fn new(capacity: u32, idle_expiry: Duration) -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                entries: HashMap::new(),
                free: (1..=capacity).collect(),
                expiry: BinaryHeap::new(),
                next_generation: 0,
            }),
            capacity,
            idle_expiry,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn idle_expiry(&self) -> Duration {
        self.idle_expiry
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserve an id for a new session.
    ///
    /// The id stays out of circulation until it is passed to [`insert`]
    /// or handed back with [`release`].
    ///
    /// [`insert`]: SessionRegistry::insert
    /// [`release`]: SessionRegistry::release
    pub fn allocate(&self, now: OffsetDateTime) -> Result<GameId, DomainError> {
        let mut inner = self.inner.lock();
        inner.allocate(now)
    }

    /// Register a started session under its own id.
    pub fn insert(&self, session: GameSession, now: OffsetDateTime) -> SessionHandle {
        let mut inner = self.inner.lock();
        inner.insert(session, now, self.idle_expiry)
    }

    /// Allocate an id, build the session for it, and register it.
    ///
    /// `build` runs under the registry lock and must not block. If it fails
    /// the id goes straight back to the free list.
    pub fn create_with<F>(
        &self,
        now: OffsetDateTime,
        build: F,
    ) -> Result<SessionHandle, DomainError>
    where
        F: FnOnce(GameId) -> Result<GameSession, DomainError>,
    {
        let mut inner = self.inner.lock();
        let id = inner.allocate(now)?;
        match build(id) {
            Ok(session) => Ok(inner.insert(session, now, self.idle_expiry)),
            Err(err) => {
                inner.free.insert(id);
                Err(err)
            }
        }
    }

    /// Fetch a live session and mark it active.
    ///
    /// A session idle past the expiry window is dropped and reported as
    /// missing, as if it had already been swept.
    pub fn lookup(&self, id: GameId, now: OffsetDateTime) -> Result<SessionHandle, DomainError> {
        let mut inner = self.inner.lock();
        let expired = match inner.entries.get(&id) {
            None => return Err(DomainError::SessionNotFound(id)),
            Some(entry) => now - entry.last_active > self.idle_expiry,
        };
        if expired {
            inner.entries.remove(&id);
            inner.free.insert(id);
            info!(game_id = id, "Expired game evicted on lookup");
            return Err(DomainError::SessionNotFound(id));
        }

        let generation = inner.bump_generation();
        inner
            .expiry
            .push(Reverse((deadline(now, self.idle_expiry), generation, id)));
        let entry = inner
            .entries
            .get_mut(&id)
            .ok_or(DomainError::SessionNotFound(id))?;
        entry.last_active = now;
        entry.generation = generation;
        let handle = Arc::clone(&entry.session);
        inner.compact_if_bloated(self.capacity, self.idle_expiry);
        Ok(handle)
    }

    /// End a session and return its id to the free list.
    ///
    /// Also accepts an id that was allocated but never inserted. Returns
    /// whether a session was removed.
    pub fn release(&self, id: GameId) -> bool {
        if id == 0 || id > self.capacity {
            return false;
        }
        let mut inner = self.inner.lock();
        let removed = inner.entries.remove(&id).is_some();
        inner.free.insert(id);
        if removed {
            info!(game_id = id, "Game released");
        }
        removed
    }

    /// Drop every session idle past the expiry window. Returns how many went.
    pub fn sweep_expired(&self, now: OffsetDateTime) -> usize {
        let mut inner = self.inner.lock();
        let mut swept = 0;
        while let Some(id) = inner.pop_expired(now) {
            inner.free.insert(id);
            swept += 1;
        }
        if swept > 0 {
            info!(swept, remaining = inner.entries.len(), "Swept expired games");
        }
        swept
    }
}

/// Moment a session last active at `at` expires. Saturates at the end of
/// representable time, so an oversized window never panics under the lock.
fn deadline(at: OffsetDateTime, idle_expiry: Duration) -> OffsetDateTime {
    at.saturating_add(idle_expiry)
}

impl RegistryInner {
    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn allocate(&mut self, now: OffsetDateTime) -> Result<GameId, DomainError> {
        if let Some(id) = self.free.pop_first() {
            debug!(game_id = id, "Allocated free id");
            return Ok(id);
        }
        match self.pop_expired(now) {
            Some(id) => {
                info!(game_id = id, "Reclaimed id of expired game");
                Ok(id)
            }
            None => Err(DomainError::NoIdsAvailable),
        }
    }

    fn insert(
        &mut self,
        session: GameSession,
        now: OffsetDateTime,
        idle_expiry: Duration,
    ) -> SessionHandle {
        let id = session.id();
        let generation = self.bump_generation();
        let handle = Arc::new(Mutex::new(session));
        self.free.remove(&id);
        self.expiry
            .push(Reverse((deadline(now, idle_expiry), generation, id)));
        self.entries.insert(
            id,
            Entry {
                session: Arc::clone(&handle),
                last_active: now,
                generation,
            },
        );
        handle
    }

    /// Remove and return the id of the longest-idle session if it has
    /// expired, skipping stale heap entries on the way.
    fn pop_expired(&mut self, now: OffsetDateTime) -> Option<GameId> {
        while let Some(Reverse((deadline, generation, id))) = self.expiry.peek().copied() {
            let live = self
                .entries
                .get(&id)
                .is_some_and(|entry| entry.generation == generation);
            if !live {
                self.expiry.pop();
                continue;
            }
            if deadline >= now {
                return None;
            }
            self.expiry.pop();
            self.entries.remove(&id);
            return Some(id);
        }
        None
    }

    /// Rebuild the heap from live entries once stale keys dominate it.
    fn compact_if_bloated(&mut self, capacity: u32, idle_expiry: Duration) {
        let limit = (capacity as usize).max(self.entries.len()) * 4;
        if self.expiry.len() <= limit {
            return;
        }
        let live: Vec<ExpiryKey> = self
            .entries
            .iter()
            .map(|(id, entry)| {
                Reverse((
                    deadline(entry.last_active, idle_expiry),
                    entry.generation,
                    *id,
                ))
            })
            .collect();
        self.expiry = live.into();
    }
}
