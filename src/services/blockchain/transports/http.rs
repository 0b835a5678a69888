//! HTTP transport implementation for blockchain interactions.
//!
//! This module provides a generic HTTP client implementation for interacting with blockchain nodes
//! via JSON-RPC. Each transport talks to a single endpoint; requests are sent once and never
//! retried or redirected to another endpoint.
//!
//! Provider URLs usually embed an API key, so the endpoint is only ever reported in its
//! redacted form.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

use crate::{
	models::SecretString,
	services::blockchain::transports::{BlockchainTransport, TransportError},
};

/// Reduces a URL to its scheme and authority
///
/// The path and query are replaced by `***` and user info is dropped, since either may
/// carry credentials.
pub fn redact_url(raw: &str) -> String {
	match Url::parse(raw) {
		Ok(url) => {
			let host = url.host_str().unwrap_or_default();
			let authority = match url.port() {
				Some(port) => format!("{}:{}", host, port),
				None => host.to_string(),
			};
			if url.path() == "/" && url.query().is_none() {
				format!("{}://{}", url.scheme(), authority)
			} else {
				format!("{}://{}/***", url.scheme(), authority)
			}
		}
		Err(_) => "<invalid url>".to_string(),
	}
}

/// Basic HTTP transport client for blockchain interactions
///
/// This client provides a foundation for making JSON-RPC requests to blockchain nodes.
/// The underlying `reqwest::Client` is shared between transports, so connections are
/// pooled and the configured timeouts apply to every request.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client for making requests
	pub client: reqwest::Client,
	/// Endpoint of the node, credentials included
	url: SecretString,
	/// Endpoint with credentials removed, for errors and logs
	redacted_url: String,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client for a single endpoint
	///
	/// No request is made here. An unusable URL is reported by the first request.
	///
	/// # Arguments
	/// * `client` - Shared HTTP client
	/// * `url` - Endpoint of the node
	pub fn new(client: reqwest::Client, url: SecretString) -> Self {
		let redacted_url = redact_url(url.as_str());
		Self {
			client,
			url,
			redacted_url,
		}
	}

	fn url_metadata(&self, method: &str) -> Option<HashMap<String, String>> {
		Some(HashMap::from([
			("method".to_string(), method.to_string()),
			("url".to_string(), self.redacted_url.clone()),
		]))
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	/// Sends a JSON-RPC request to the blockchain node
	///
	/// This method handles the formatting of the JSON-RPC request and the classification of
	/// failures:
	/// - transport failures (connection, timeout) become `Network` errors
	/// - non-2xx statuses become `Http` errors
	/// - bodies that are not JSON become `ResponseParse` errors
	/// - JSON-RPC `error` objects become `Rpc` errors
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method name to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - JSON response or error with context
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let request_body = self.customize_request(method, params).await;
		let request_body = serde_json::to_vec(&request_body).map_err(|e| {
			TransportError::request_serialization(
				"Failed to serialize request JSON",
				Some(Box::new(e)),
				self.url_metadata(method),
			)
		})?;

		tracing::debug!("Sending {} request to {}", method, self.redacted_url);

		// reqwest errors are stripped of their URL, it holds the API key
		let response = self
			.client
			.post(self.url.as_str())
			.header(CONTENT_TYPE, "application/json")
			.body(request_body)
			.send()
			.await
			.map_err(|e| {
				TransportError::network(
					format!("Failed to send {} request", method),
					Some(Box::new(e.without_url())),
					self.url_metadata(method),
				)
			})?;

		let status = response.status();
		if !status.is_success() {
			let error_body = response.text().await.unwrap_or_default();
			return Err(TransportError::http(
				status,
				self.redacted_url.clone(),
				error_body,
				None,
				self.url_metadata(method),
			));
		}

		let body: Value = response.json().await.map_err(|e| {
			TransportError::response_parse(
				"Failed to parse JSON response",
				Some(Box::new(e.without_url())),
				self.url_metadata(method),
			)
		})?;

		if let Some(error) = body.get("error").filter(|error| !error.is_null()) {
			let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
			let message = error
				.get("message")
				.and_then(Value::as_str)
				.unwrap_or("unknown error");
			return Err(TransportError::rpc(code, message, self.url_metadata(method)));
		}

		Ok(body)
	}
}
