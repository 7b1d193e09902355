//! Network helpers.

pub mod identity;
