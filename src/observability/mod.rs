//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and middleware produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → JSON log file (append-only) + stdout
//!     → GET /metrics (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
