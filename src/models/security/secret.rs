//! Secret management for provider credentials.
//!
//! RPC URLs embed the provider API key, so they are held in zeroizing strings
//! and never printed through `Debug`.
//!
//! Missing environment variables resolve to an empty secret instead of an
//! error: a missing credential surfaces later as an authentication failure of
//! the affected networks.

use serde::{Deserialize, Serialize};
use std::{env, fmt};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string type that automatically zeroizes its contents when dropped.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
	/// Creates a new `SecretString` with the given value.
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Reads a secret from the environment, empty when the variable is unset
	/// or not valid unicode.
	pub fn from_env(key: &str) -> Self {
		Self::new(env::var(key).unwrap_or_default())
	}

	/// Gets a reference to the underlying string.
	///
	/// The reference should be used immediately and not stored.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString(***)")
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl AsRef<str> for SecretString {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

/// A secret value that can be sourced from different places.
///
/// - `Plain`: the value itself
/// - `Environment`: the name of an environment variable holding the value
#[derive(Debug, Clone, Serialize, Deserialize, ZeroizeOnDrop)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
#[serde(deny_unknown_fields)]
pub enum SecretValue {
	/// A plain text secret value
	Plain(SecretString),
	/// A secret stored in an environment variable
	Environment(String),
}

impl PartialEq for SecretValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Plain(l0), Self::Plain(r0)) => l0 == r0,
			(Self::Environment(l0), Self::Environment(r0)) => l0 == r0,
			_ => false,
		}
	}
}

impl SecretValue {
	/// Resolves the secret value based on its type.
	///
	/// An unset environment variable resolves to an empty secret.
	pub fn resolve(&self) -> SecretString {
		match self {
			Self::Plain(secret) => secret.clone(),
			Self::Environment(env_var) => SecretString::from_env(env_var),
		}
	}
}
