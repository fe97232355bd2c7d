use crate::domain::entities::GuestRecord;
use crate::domain::ports::SessionStore;

// Name shown on the home screen when nobody is signed in.
pub const FALLBACK_DISPLAY_NAME: &str = "Guest";

// Response returned by the current guest use case.
pub struct CurrentGuestResponse {
    pub guest: Option<GuestRecord>,
    pub display_name: String,
}

// Read-only view of the session slot.
pub struct CurrentGuestUseCase<S> {
    pub store: S,
}

impl<S> CurrentGuestUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self) -> CurrentGuestResponse {
        let guest = self.store.current().await;
        let display_name = guest
            .as_ref()
            .map(|guest| guest.name.clone())
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());

        CurrentGuestResponse {
            guest,
            display_name,
        }
    }
}
