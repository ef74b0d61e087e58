//! Web layer for the bus timings directory.
//!
//! JSON endpoints the site's pages call for stop lists, autocomplete,
//! fares, timing normalization and depot contacts, plus the sitemap.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
