//! Repository implementations for configuration management.
//!
//! This module provides the network registry: the ordered, immutable list of
//! networks checked on every run. It is either built in or loaded from a
//! JSON file, and validated before any network is contacted.

mod error;
mod network;

pub use error::RepositoryError;
pub use network::{NetworkRepository, NetworkRepositoryTrait};
