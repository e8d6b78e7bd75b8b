//! Page configuration.
//!
//! Read from a JSON `<script id="app-config">` element in the host page.
//! Every section and field is optional; anything missing takes the default,
//! which runs on mock data with placeholder backend credentials.

use std::time::Duration;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::{BackendClient, BackendError, DataSource};
use crate::components::particle_field::FieldConfig;

/// Why a config document was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Not valid JSON, or a value of the wrong type.
	#[error("malformed config: {0}")]
	Parse(#[from] serde_json::Error),
	/// A particle setting outside the range the simulation supports.
	#[error("invalid particles.{field}: {reason}")]
	Invalid {
		/// Offending field under `particles`.
		field: &'static str,
		/// What the field must satisfy.
		reason: &'static str,
	},
}

/// Hosted backend credentials.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
	/// Project URL, e.g. `https://xxxxx.supabase.co`.
	pub url: String,
	/// Public (anon) API key.
	pub anon_key: String,
}

impl Default for BackendConfig {
	fn default() -> Self {
		Self {
			url: "YOUR_SUPABASE_URL".to_string(),
			anon_key: "YOUR_SUPABASE_ANON_KEY".to_string(),
		}
	}
}

/// Mock data settings, used while the backend is switched off.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MockConfig {
	/// Serve canned data when the backend is off.
	pub enabled: bool,
	/// Simulated request latency in milliseconds.
	pub delay_ms: u64,
}

impl Default for MockConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			delay_ms: 1000,
		}
	}
}

/// Complete page configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Hosted backend credentials.
	pub backend: BackendConfig,
	/// Talk to the hosted backend instead of mock data.
	pub use_backend: bool,
	/// Mock data settings.
	pub mock: MockConfig,
	/// Particle background tuning.
	pub particles: FieldConfig,
}

impl AppConfig {
	/// Parse and validate a JSON config document.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let config: AppConfig = serde_json::from_str(text)?;
		config
			.particles
			.check()
			.map_err(|(field, reason)| ConfigError::Invalid { field, reason })?;
		Ok(config)
	}

	/// Decide where page data comes from.
	pub fn data_source(&self) -> Result<DataSource, BackendError> {
		let source = if self.use_backend {
			DataSource::Backend(BackendClient::create(
				&self.backend.url,
				&self.backend.anon_key,
			)?)
		} else if self.mock.enabled {
			DataSource::Mock {
				delay: Duration::from_millis(self.mock.delay_ms),
			}
		} else {
			DataSource::Offline
		};
		info!("config: using {}", source);
		Ok(source)
	}
}
