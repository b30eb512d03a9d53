//! # Crewboard API
//!
//! HTTP layer of the Crewboard backend: actix-web application factory,
//! request/response DTOs, the bearer-token middleware, and error mapping
//! from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
