//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum router, trace + metrics middleware)
//!     → handlers.rs (at most one store query per route)
//!     → JSON response (store faults map to 500 via error.rs)
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
