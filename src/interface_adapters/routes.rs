use crate::interface_adapters::handlers::{current_guest, guest_login, logout};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/guest/login", post(guest_login))
        .route("/guest/current", get(current_guest))
        .route("/guest/logout", post(logout))
        .with_state(state)
}
