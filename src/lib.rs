//! particle-field: animated particle background and page configuration for
//! the forms portal front end.
//!
//! This crate provides a WASM-based Leptos app that reads the page
//! configuration, picks the data source (hosted backend or mock data), and
//! renders a pointer-reactive particle background behind the page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod backend;
pub mod components;
pub mod config;

pub use backend::{BackendClient, BackendError, DataSource};
pub use components::particle_field::{FieldConfig, ParticleBackground, ParticleField};
pub use config::{AppConfig, ConfigError};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load the page configuration from a script element with id="app-config".
/// Falls back to the defaults when the element is missing or invalid.
fn load_app_config() -> AppConfig {
	let Some(text) = config_script_text() else {
		info!("particle-field: no app-config element, using defaults");
		return AppConfig::default();
	};

	match AppConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"particle-field: loaded config (backend: {}, {} particles)",
				config.use_backend, config.particles.particle_count
			);
			config
		}
		Err(e) => {
			warn!("particle-field: {}, using defaults", e);
			AppConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("app-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Loads configuration from the DOM and mounts the particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_app_config();
	let source = match config.data_source() {
		Ok(source) => source.to_string(),
		Err(e) => {
			error!("particle-field: backend unavailable: {}", e);
			DataSource::Offline.to_string()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Forms Portal" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config.particles />
		<main class="page-content">
			<p class="data-source">"Data source: " {source}</p>
		</main>
	}
}
