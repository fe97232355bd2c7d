use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{GuestRecord, SessionState};
use crate::domain::ports::{GuestDirectory, SessionStore};
use crate::domain::roster::Roster;

pub(crate) type SessionSlot = Arc<Mutex<SessionState>>;

// Directory over the built-in roster that also counts lookups.
#[derive(Clone)]
pub(crate) struct FixedDirectory {
    roster: Arc<Roster>,
    lookups: Arc<Mutex<usize>>,
}

impl FixedDirectory {
    pub(crate) fn new() -> Self {
        Self {
            roster: Arc::new(Roster::default()),
            lookups: Arc::new(Mutex::new(0)),
        }
    }

    pub(crate) fn lookups(&self) -> usize {
        *self.lookups.lock().expect("lookups mutex poisoned")
    }
}

impl GuestDirectory for FixedDirectory {
    fn find_guest(&self, name: &str, passcode: &str) -> Option<GuestRecord> {
        *self.lookups.lock().expect("lookups mutex poisoned") += 1;
        self.roster.find(name, passcode).cloned()
    }
}

// Session fake that records every login so tests can check write ordering.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    slot: SessionSlot,
    logins: Arc<Mutex<Vec<u64>>>,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(SessionState::Empty)),
            logins: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn with_active(guest: GuestRecord) -> Self {
        let store = Self::new();
        *store.slot.lock().expect("slot mutex poisoned") = SessionState::Active(guest);
        store
    }

    pub(crate) fn state(&self) -> SessionState {
        self.slot.lock().expect("slot mutex poisoned").clone()
    }

    pub(crate) fn login_ids(&self) -> Vec<u64> {
        self.logins.lock().expect("logins mutex poisoned").clone()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn login(&self, guest: GuestRecord) {
        self.logins
            .lock()
            .expect("logins mutex poisoned")
            .push(guest.id);
        *self.slot.lock().expect("slot mutex poisoned") = SessionState::Active(guest);
    }

    async fn current(&self) -> Option<GuestRecord> {
        self.slot
            .lock()
            .expect("slot mutex poisoned")
            .guest()
            .cloned()
    }

    async fn logout(&self) -> bool {
        let mut guard = self.slot.lock().expect("slot mutex poisoned");
        std::mem::take(&mut *guard).is_active()
    }
}
