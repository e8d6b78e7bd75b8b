//! Leptos component wrapping the particle background canvas.
//!
//! The component renders a fixed, click-through canvas covering the viewport
//! and starts a [`FrameLoop`] once the canvas is mounted. An optional
//! `running` signal stops the loop and starts a fresh one when it flips back.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use web_sys::HtmlCanvasElement;

use super::animation::{FrameLoop, window_viewport};
use super::config::FieldConfig;
use super::state::ParticleField;
use super::theme::FieldStyle;

/// Renders the animated particle background.
///
/// Place it once near the top of the page. It ignores pointer input, so
/// content underneath stays interactive; the field still tracks the pointer
/// through a window listener.
#[component]
pub fn ParticleBackground(
	/// Simulation tuning; defaults when omitted.
	#[prop(optional)]
	config: FieldConfig,
	/// Stops the animation while `false`; runs unconditionally when omitted.
	#[prop(into, optional)]
	running: Option<Signal<bool>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
	let style = FieldStyle::default();
	let canvas_css = style.canvas_css();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let wanted = running.map(|r| r.get()).unwrap_or(true);
		let mut slot = frame_loop.borrow_mut();

		match (wanted, slot.is_some()) {
			(false, true) => {
				if let Some(mut stopped) = slot.take() {
					stopped.stop();
				}
			}
			(true, false) => {
				let canvas: HtmlCanvasElement = canvas.into();
				let Some(window) = web_sys::window() else {
					warn!("particle-field: no window, background disabled");
					return;
				};
				let viewport = match window_viewport(&window) {
					Ok(v) => v,
					Err(e) => {
						error!("particle-field: could not read window size: {:?}", e);
						return;
					}
				};
				let field = ParticleField::new(config.clone(), style.clone(), viewport);
				match FrameLoop::start(window, canvas, field) {
					Ok(started) => *slot = Some(started),
					Err(e) => error!("particle-field: failed to start animation: {:?}", e),
				}
			}
			_ => {}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style=canvas_css
		/>
	}
}
