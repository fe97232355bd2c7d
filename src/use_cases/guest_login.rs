use crate::domain::errors::GateError;
use crate::domain::ports::{GuestDirectory, SessionStore};
use crate::interface_adapters::protocol::GuestLoginRequest;

// Response returned by the guest login use case.
pub struct GuestLoginResponse {
    pub id: u64,
    pub name: String,
}

// Guest login use case with injected dependencies.
pub struct GuestLoginUseCase<D, S> {
    pub directory: D,
    pub store: S,
}

impl<D, S> GuestLoginUseCase<D, S>
where
    D: GuestDirectory,
    S: SessionStore,
{
    pub async fn execute(
        &self,
        payload: GuestLoginRequest,
    ) -> Result<GuestLoginResponse, GateError> {
        // Same gate as the login form: both fields must be filled in.
        if payload.name.is_empty() || payload.passcode.is_empty() {
            return Err(GateError::MissingCredentials);
        }

        // A failed lookup never touches the session.
        let guest = self
            .directory
            .find_guest(&payload.name, &payload.passcode)
            .ok_or(GateError::GuestNotFound)?;

        let response = GuestLoginResponse {
            id: guest.id,
            name: guest.name.clone(),
        };
        self.store.login(guest).await;

        Ok(response)
    }
}
