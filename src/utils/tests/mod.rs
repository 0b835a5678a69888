//! Test helper utilities
//!
//! This module contains test helper utilities for the application.
//!
//! - `builders`: Test helper utilities for creating test instances of models
//! - `http`: Test helper utilities for creating HTTP clients

pub mod builders {
	// Chain specific test helpers
	pub mod evm {
		pub mod log;
	}

	// Chain agnostic test helpers
	pub mod network;
}


pub use builders::*;
pub use http::*;
