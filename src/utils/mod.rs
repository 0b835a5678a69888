//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - constants: Constants for the application
//! - http: HTTP client construction for the RPC transports
//! - logging: Logging setup and structured error context
//! - parsing: Parsing utilities
//! - tests: Test utilities

pub mod constants;
pub mod http;
pub mod logging;
pub mod parsing;
pub mod tests;

pub use constants::*;
pub use http::*;
pub use parsing::*;
