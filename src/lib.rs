//! Minimal HTTP identity read service.
//!
//! Serves four JSON endpoints over two externally-owned stores: a MySQL
//! `user` table (name listing, credential check) and a Redis set at key
//! `groupset` (group listing), plus a Prometheus metrics endpoint.

pub mod config;
pub mod http;
pub mod net;
pub mod observability;
pub mod store;

pub use config::schema::Settings;
pub use http::server::HttpServer;
