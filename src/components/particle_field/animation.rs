//! `requestAnimationFrame` driver for the particle field.
//!
//! [`FrameLoop`] owns everything registered with the browser on behalf of the
//! field: the per-frame callback and the window `resize`/`mousemove`
//! listeners. Listeners only push into the [`EventQueue`]; the queue is
//! drained at the top of each frame, before the tick. [`FrameLoop::stop`]
//! (also run on drop) hands every registration back.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::events::EventQueue;
use super::render;
use super::state::ParticleField;
use super::types::{FieldEvent, Viewport};

/// Current inner size of the browser window.
pub fn window_viewport(window: &Window) -> Result<Viewport, JsValue> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok(Viewport::new(width, height))
}

fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
	canvas.set_width(viewport.width as u32);
	canvas.set_height(viewport.height as u32);
}

fn as_function<T: ?Sized>(cb: &Closure<T>) -> &js_sys::Function {
	cb.as_ref().unchecked_ref::<js_sys::Function>()
}

/// A running animation of one [`ParticleField`] on one canvas.
pub struct FrameLoop {
	window: Window,
	field: Rc<RefCell<ParticleField>>,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	on_resize: Option<Closure<dyn FnMut()>>,
	on_pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl FrameLoop {
	/// Size the canvas to the field, hook up input, and schedule the first frame.
	pub fn start(
		window: Window,
		canvas: HtmlCanvasElement,
		field: ParticleField,
	) -> Result<Self, JsValue> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("canvas: missing 2d context"))?
			.dyn_into()?;

		size_canvas(&canvas, field.viewport());

		let field = Rc::new(RefCell::new(field));
		let queue = Rc::new(RefCell::new(EventQueue::new()));

		let (queue_resize, window_resize) = (queue.clone(), window.clone());
		let on_resize: Closure<dyn FnMut()> =
			Closure::new(move || match window_viewport(&window_resize) {
				Ok(viewport) => queue_resize
					.borrow_mut()
					.push(FieldEvent::Resize(viewport)),
				Err(e) => warn!("particle-field: could not read window size: {:?}", e),
			});
		window.add_event_listener_with_callback("resize", as_function(&on_resize))?;

		let queue_pointer = queue.clone();
		let on_pointer: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			queue_pointer.borrow_mut().push(FieldEvent::PointerMove {
				x: ev.client_x() as f64,
				y: ev.client_y() as f64,
			});
		});
		window.add_event_listener_with_callback("mousemove", as_function(&on_pointer))?;

		let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let (field_anim, animate_inner, frame_id_inner, window_anim) = (
			field.clone(),
			animate.clone(),
			frame_id.clone(),
			window.clone(),
		);
		*animate.borrow_mut() = Some(Closure::new(move || {
			frame_id_inner.set(None);
			{
				let mut field = field_anim.borrow_mut();
				if let Some(viewport) = queue.borrow_mut().drain_into(&mut field) {
					size_canvas(&canvas, viewport);
				}
				let frame = field.tick();
				render::paint(&ctx, &frame);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				match window_anim.request_animation_frame(as_function(cb)) {
					Ok(id) => frame_id_inner.set(Some(id)),
					Err(e) => warn!("particle-field: requestAnimationFrame failed: {:?}", e),
				}
			}
		}));

		if let Some(ref cb) = *animate.borrow() {
			frame_id.set(Some(window.request_animation_frame(as_function(cb))?));
		}

		let viewport = field.borrow().viewport();
		info!(
			"particle-field: animating {} particles on {}x{}",
			field.borrow().particles().len(),
			viewport.width,
			viewport.height
		);

		Ok(Self {
			window,
			field,
			frame_id,
			animate,
			on_resize: Some(on_resize),
			on_pointer: Some(on_pointer),
		})
	}

	/// Whether frames are still being scheduled.
	pub fn is_running(&self) -> bool {
		self.animate.borrow().is_some()
	}

	/// Cancel the pending frame and unregister the input listeners.
	///
	/// Safe to call more than once. Must not be called from inside a frame.
	pub fn stop(&mut self) {
		if !self.is_running() {
			return;
		}

		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		// Dropping the closure also breaks its self-reference cycle.
		self.animate.borrow_mut().take();

		if let Some(cb) = self.on_resize.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", as_function(&cb));
		}
		if let Some(cb) = self.on_pointer.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("mousemove", as_function(&cb));
		}

		info!(
			"particle-field: stopped after {} frames",
			self.field.borrow().frames()
		);
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
