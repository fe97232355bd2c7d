use serde::{Deserialize, Serialize};

// Request payload for guest login.
#[derive(Debug, Deserialize)]
pub struct GuestLoginRequest {
    pub name: String,
    pub passcode: String,
}

// Public identity of a guest. Never carries the passcode.
#[derive(Debug, Serialize)]
pub struct GuestView {
    pub id: u64,
    pub name: String,
}

// Response payload for guest login.
#[derive(Debug, Serialize)]
pub struct GuestLoginResponse {
    pub id: u64,
    pub name: String,
}

// Response payload for the current guest lookup.
#[derive(Debug, Serialize)]
pub struct CurrentGuestResponse {
    pub guest: Option<GuestView>,
    pub display_name: String,
}

// Response payload for logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub cleared: bool,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
