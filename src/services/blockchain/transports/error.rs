//! Error types for blockchain transport services
//!
//! Provides error handling for network communication, JSON-RPC error objects,
//! JSON parsing and request serialization.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
	/// HTTP error
	#[error("HTTP error: status {status_code} for URL {url}")]
	Http {
		status_code: reqwest::StatusCode,
		url: String,
		body: String,
		context: ErrorContext,
	},

	/// JSON-RPC error object returned by the node
	#[error("RPC error {code}: {message}")]
	Rpc {
		code: i64,
		message: String,
		context: ErrorContext,
	},

	/// Network error
	#[error("Network error: {0}")]
	Network(ErrorContext),

	/// JSON parsing error
	#[error("Failed to parse JSON response: {0}")]
	ResponseParse(ErrorContext),

	/// Request body serialization error
	#[error("Failed to serialize request JSON: {0}")]
	RequestSerialization(ErrorContext),
}

impl TransportError {
	pub fn http(
		status_code: reqwest::StatusCode,
		url: String,
		body: String,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let msg = format!("HTTP error: status {} for URL {}", status_code, url);

		Self::Http {
			status_code,
			url,
			body,
			context: ErrorContext::new(msg, source, metadata),
		}
	}

	pub fn rpc(
		code: i64,
		message: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let message = message.into();
		let msg = format!("RPC error {}: {}", code, message);

		Self::Rpc {
			code,
			message,
			context: ErrorContext::new(msg, None, metadata),
		}
	}

	pub fn network(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::Network(ErrorContext::new(msg, source, metadata))
	}

	pub fn response_parse(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ResponseParse(ErrorContext::new(msg, source, metadata))
	}

	pub fn request_serialization(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::RequestSerialization(ErrorContext::new(msg, source, metadata))
	}
}

impl TransportError {
	/// Returns the context carried by the error
	pub fn context(&self) -> &ErrorContext {
		match self {
			Self::Http { context, .. } | Self::Rpc { context, .. } => context,
			Self::Network(ctx) | Self::ResponseParse(ctx) | Self::RequestSerialization(ctx) => ctx,
		}
	}
}

impl TraceableError for TransportError {
	fn trace_id(&self) -> String {
		self.context().trace_id.clone()
	}
}
