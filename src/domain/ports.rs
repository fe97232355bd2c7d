use async_trait::async_trait;

use crate::domain::entities::GuestRecord;

// Port for credential lookup. Lookups are pure, so this stays synchronous.
pub trait GuestDirectory: Send + Sync {
    fn find_guest(&self, name: &str, passcode: &str) -> Option<GuestRecord>;
}

// Port for the process-wide current-guest slot. None of these can fail.
#[async_trait]
pub trait SessionStore: Send + Sync {
    // Replace whatever guest is active, without validation.
    async fn login(&self, guest: GuestRecord);
    async fn current(&self) -> Option<GuestRecord>;
    // Reset to empty; returns whether a guest was active.
    async fn logout(&self) -> bool;
}
