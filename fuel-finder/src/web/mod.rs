//! Web layer for the fuel station finder.
//!
//! Provides HTTP endpoints for station search and index setup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Coordinator};
