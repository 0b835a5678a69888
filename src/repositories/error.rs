//! Error types for repository operations.
//!
//! This module defines the error types that can occur while building the
//! network registry, from loading a registry file to validating entries
//! supplied directly.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Represents errors that can occur during repository operations
#[derive(ThisError, Debug)]
pub enum RepositoryError {
	/// Errors related to validation errors
	#[error("Validation error: {0}")]
	ValidationError(ErrorContext),

	/// Errors related to load errors
	#[error("Load error: {0}")]
	LoadError(ErrorContext),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl RepositoryError {
	// Validation error
	pub fn validation_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new(msg, source, metadata))
	}

	// Load error
	pub fn load_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::LoadError(ErrorContext::new(msg, source, metadata))
	}
}

impl RepositoryError {
	/// Returns the context carried by the error, if any
	pub fn context(&self) -> Option<&ErrorContext> {
		match self {
			Self::ValidationError(ctx) | Self::LoadError(ctx) => Some(ctx),
			Self::Other(_) => None,
		}
	}
}

impl TraceableError for RepositoryError {
	fn trace_id(&self) -> String {
		match self {
			Self::ValidationError(ctx) => ctx.trace_id.clone(),
			Self::LoadError(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => Uuid::new_v4().to_string(),
		}
	}
}
