//! PassGuard Core Library
//!
//! Contains domain models, the status-check store, the k-anonymity breach
//! checker and the local password strength analyzer.

pub mod breach;
pub mod domain;
pub mod error;
pub mod store;
pub mod strength;

pub use error::{CoreError, Result};
