// Interface adapters: roster/session adapters and the HTTP surface.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
