use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{GuestRecord, SessionState};
use crate::domain::ports::{GuestDirectory, SessionStore};
use crate::domain::roster::Roster;

// Application state: the read-only roster and the single session slot.
/// The slot is only reachable through `InMemorySessionStore`:
///
/// ```compile_fail
/// use residence_gate::domain::{GuestRecord, Roster, SessionState};
/// use residence_gate::interface_adapters::state::AppState;
///
/// # async fn write_slot() {
/// let state = AppState::new(Roster::default());
/// *state.session.lock().await = SessionState::Active(GuestRecord::new(999, "Intruder", "x"));
/// # }
/// ```
#[derive(Clone)]
pub struct AppState {
    roster: Arc<Roster>,
    session: Arc<Mutex<SessionState>>,
}

impl AppState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
            session: Arc::new(Mutex::new(SessionState::Empty)),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn directory(&self) -> StaticGuestDirectory {
        StaticGuestDirectory {
            roster: self.roster.clone(),
        }
    }

    pub fn session_store(&self) -> InMemorySessionStore {
        InMemorySessionStore {
            slot: self.session.clone(),
        }
    }
}

// Directory adapter over the shared roster.
#[derive(Clone)]
pub struct StaticGuestDirectory {
    roster: Arc<Roster>,
}

impl GuestDirectory for StaticGuestDirectory {
    fn find_guest(&self, name: &str, passcode: &str) -> Option<GuestRecord> {
        self.roster.find(name, passcode).cloned()
    }
}

// In-memory session adapter. One lock covers reads and writes.
#[derive(Clone)]
pub struct InMemorySessionStore {
    slot: Arc<Mutex<SessionState>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn login(&self, guest: GuestRecord) {
        let mut slot = self.slot.lock().await;
        *slot = SessionState::Active(guest);
    }

    async fn current(&self) -> Option<GuestRecord> {
        let slot = self.slot.lock().await;
        slot.guest().cloned()
    }

    async fn logout(&self) -> bool {
        let mut slot = self.slot.lock().await;
        std::mem::take(&mut *slot).is_active()
    }
}
