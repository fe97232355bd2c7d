use crate::domain::errors::GateError;
use crate::interface_adapters::protocol::{
    CurrentGuestResponse, ErrorResponse, GuestLoginRequest, GuestLoginResponse, GuestView,
    LogoutResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::current_guest::CurrentGuestUseCase;
use crate::use_cases::guest_login::GuestLoginUseCase;
use crate::use_cases::logout::LogoutUseCase;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

// Handler for checking a name/passcode pair and opening the session.
#[tracing::instrument(name = "guest_login", skip_all)]
pub async fn guest_login(
    State(state): State<AppState>,
    Json(payload): Json<GuestLoginRequest>,
) -> Result<Json<GuestLoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = GuestLoginUseCase {
        directory: state.directory(),
        store: state.session_store(),
    };

    let result = use_case.execute(payload).await.map_err(|err| {
        warn!(error = ?err, "guest login rejected");
        map_gate_error(err)
    })?;

    info!(guest_id = result.id, "guest logged in");

    Ok(Json(GuestLoginResponse {
        id: result.id,
        name: result.name,
    }))
}

// Handler for reading who is signed in.
#[tracing::instrument(name = "current_guest", skip_all)]
pub async fn current_guest(State(state): State<AppState>) -> Json<CurrentGuestResponse> {
    let use_case = CurrentGuestUseCase {
        store: state.session_store(),
    };

    let result = use_case.execute().await;

    Json(CurrentGuestResponse {
        guest: result.guest.map(|guest| GuestView {
            id: guest.id,
            name: guest.name,
        }),
        display_name: result.display_name,
    })
}

// Handler for clearing the session.
#[tracing::instrument(name = "logout", skip_all)]
pub async fn logout(State(state): State<AppState>) -> Json<LogoutResponse> {
    let use_case = LogoutUseCase {
        store: state.session_store(),
    };

    let result = use_case.execute().await;
    if result.cleared {
        info!("guest logged out");
    }

    Json(LogoutResponse {
        cleared: result.cleared,
    })
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_gate_error(err: GateError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        GateError::MissingCredentials => {
            error_response(StatusCode::BAD_REQUEST, "name and passcode are required")
        }
        GateError::GuestNotFound => {
            error_response(StatusCode::UNAUTHORIZED, "unknown guest or passcode")
        }
    }
}
