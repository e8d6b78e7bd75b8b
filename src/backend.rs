//! Backend client handle and data-source selection.
//!
//! The page either talks to the hosted backend or serves mock data. This
//! module only validates credentials and decides which; it does not open
//! connections.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Marker prefix of the credentials shipped in the default config.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Why backend credentials were rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackendError {
	/// A required value is blank.
	#[error("backend {0} is empty")]
	Missing(&'static str),
	/// A value was never replaced with a real credential.
	#[error("backend {0} still holds the placeholder value")]
	Placeholder(&'static str),
	/// The URL has no http(s) scheme.
	#[error("backend url `{0}` must start with http:// or https://")]
	InvalidUrl(String),
}

/// Validated connection details for the hosted backend.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendClient {
	url: String,
	anon_key: String,
}

impl BackendClient {
	/// Build a client from a project URL and its public (anon) key.
	pub fn create(url: &str, anon_key: &str) -> Result<Self, BackendError> {
		let url = url.trim();
		let anon_key = anon_key.trim();

		if url.is_empty() {
			return Err(BackendError::Missing("url"));
		}
		if anon_key.is_empty() {
			return Err(BackendError::Missing("anon key"));
		}
		if url.starts_with(PLACEHOLDER_PREFIX) {
			return Err(BackendError::Placeholder("url"));
		}
		if anon_key.starts_with(PLACEHOLDER_PREFIX) {
			return Err(BackendError::Placeholder("anon key"));
		}
		if !(url.starts_with("https://") || url.starts_with("http://")) {
			return Err(BackendError::InvalidUrl(url.to_string()));
		}

		Ok(Self {
			url: url.trim_end_matches('/').to_string(),
			anon_key: anon_key.to_string(),
		})
	}

	/// Project URL without a trailing slash.
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Public API key.
	pub fn anon_key(&self) -> &str {
		&self.anon_key
	}
}

// Keys end up in logs otherwise.
impl fmt::Debug for BackendClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BackendClient")
			.field("url", &self.url)
			.field("anon_key", &"<redacted>")
			.finish()
	}
}

/// Where page data comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
	/// The hosted backend.
	Backend(BackendClient),
	/// Canned data served after an artificial delay.
	Mock {
		/// Simulated request latency.
		delay: Duration,
	},
	/// No data at all.
	Offline,
}

impl fmt::Display for DataSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DataSource::Backend(client) => write!(f, "backend at {}", client.url()),
			DataSource::Mock { delay } => write!(f, "mock data ({} ms delay)", delay.as_millis()),
			DataSource::Offline => write!(f, "offline"),
		}
	}
}
