//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML, path from -c flag)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!     → passed by reference into each component's constructor
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; there is no global singleton
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Loading is all-or-nothing: any failure aborts startup

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::Settings;
