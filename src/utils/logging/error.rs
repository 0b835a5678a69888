//! Error handling utilities for the application.
//!
//! This module provides a structured error context that every error type in the
//! crate carries. Each context records a message, an optional source error,
//! optional metadata, a timestamp and a trace ID. The trace ID is inherited from
//! the source chain when one of the crate's error types is found there, so an
//! error keeps the same ID as it moves up from the transport to the fetcher.

use chrono::Utc;
use std::{collections::HashMap, fmt};
use uuid::Uuid;

/// A context wrapper for errors with additional metadata.
#[derive(Debug)]
pub struct ErrorContext {
	/// The error message
	pub message: String,
	/// The source error that caused this error
	pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	/// Additional metadata about the error
	pub metadata: Option<HashMap<String, String>>,
	/// The timestamp of the error in RFC 3339 format
	pub timestamp: String,
	/// The unique identifier for the error (UUID v4)
	pub trace_id: String,
}

impl ErrorContext {
	/// Creates a new error context with the given message, source, and metadata.
	///
	/// Construction never logs. The layer that finally handles the error is
	/// responsible for reporting it, so each failure produces a single log line.
	pub fn new(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let trace_id = if let Some(ref src) = source {
			TraceableError::trace_id(src.as_ref())
		} else {
			Uuid::new_v4().to_string()
		};

		Self {
			message: message.into(),
			source,
			metadata,
			timestamp: Utc::now().to_rfc3339(),
			trace_id,
		}
	}

	/// Adds a single key-value metadata pair to the error context.
	pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let metadata = self.metadata.get_or_insert_with(HashMap::new);
		metadata.insert(key.into(), value.into());
		self
	}

	/// Formats the error message with its metadata appended.
	///
	/// The format is `"message [key1=value1, key2=value2, ...]"` with keys sorted
	/// alphabetically.
	pub fn format_with_metadata(&self) -> String {
		let mut result = self.message.clone();

		if let Some(metadata) = &self.metadata {
			let mut keys: Vec<_> = metadata.keys().collect();
			keys.sort();

			let parts: Vec<String> = keys
				.into_iter()
				.filter_map(|key| metadata.get(key).map(|value| format!("{}={}", key, value)))
				.collect();

			if !parts.is_empty() {
				result.push_str(&format!(" [{}]", parts.join(", ")));
			}
		}

		result
	}
}

impl fmt::Display for ErrorContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_with_metadata())
	}
}

impl std::error::Error for ErrorContext {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.source
			.as_ref()
			.map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
	}
}

/// A trait for errors that can provide a trace ID
pub trait TraceableError: std::error::Error + Send + Sync {
	/// Returns the trace ID for this error
	fn trace_id(&self) -> String;
}

impl TraceableError for dyn std::error::Error + Send + Sync + 'static {
	fn trace_id(&self) -> String {
		if let Some(id) = try_extract_trace_id(self) {
			return id;
		}

		let mut source = self.source();
		const MAX_DEPTH: usize = 3;
		let mut depth = 0;

		while let Some(err) = source {
			depth += 1;
			if depth > MAX_DEPTH {
				break;
			}

			if let Some(id) = try_extract_trace_id(err) {
				return id;
			}

			source = err.source();
		}

		Uuid::new_v4().to_string()
	}
}

/// Helper function to try extracting a trace ID from an error
fn try_extract_trace_id(err: &(dyn std::error::Error + 'static)) -> Option<String> {
	if let Some(ctx) = err.downcast_ref::<ErrorContext>() {
		return Some(ctx.trace_id.clone());
	}

	macro_rules! try_downcast {
		($($ty:path),*) => {
			$(
				if let Some(e) = err.downcast_ref::<$ty>() {
					return Some(e.trace_id());
				}
			)*
		}
	}

	try_downcast!(
		crate::services::blockchain::TransportError,
		crate::services::blockchain::BlockChainError,
		crate::repositories::RepositoryError,
		crate::models::ConfigError
	);

	None
}

/// Sanitize error messages to remove HTML content
///
/// Gateways in front of RPC providers frequently answer with full HTML error
/// pages; only the text before the markup is kept.
fn sanitize_error_message(message: &str) -> String {
	if message.contains("<html>") || message.contains("<head>") || message.contains("<body>") {
		if let Some(pos) = message.find('<') {
			return message[..pos].trim().to_string();
		}
	}
	message.to_string()
}

/// Helper function to find the context wrapped by one of the crate errors
fn try_extract_context<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a ErrorContext> {
	macro_rules! try_downcast {
		($($ty:path),*) => {
			$(
				if let Some(e) = err.downcast_ref::<$ty>() {
					return e.context().into();
				}
			)*
		}
	}

	try_downcast!(
		crate::services::blockchain::TransportError,
		crate::services::blockchain::BlockChainError,
		crate::repositories::RepositoryError,
		crate::models::ConfigError
	);

	None
}

/// Next error of the chain, looking through wrapped contexts
fn next_cause<'a>(
	err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a (dyn std::error::Error + 'static)> {
	err.source().or_else(|| {
		try_extract_context(err)
			.and_then(|ctx| ctx.source.as_deref())
			.map(|source| source as &(dyn std::error::Error + 'static))
	})
}

/// Formats an error and its complete source chain on a single line.
///
/// Causes are joined with `": caused by: "` so the whole chain fits into one
/// log event. The crate errors keep their cause inside their context, which is
/// followed as well.
pub fn format_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
	let mut result = sanitize_error_message(&err.to_string());
	let mut source = next_cause(err);

	while let Some(err) = source {
		result.push_str(": caused by: ");
		result.push_str(&sanitize_error_message(&err.to_string()));
		source = next_cause(err);
	}

	result
}
