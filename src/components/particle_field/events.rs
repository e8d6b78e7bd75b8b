//! Frame-boundary event queue.
//!
//! Window listeners only enqueue; the frame loop drains the queue into the
//! field right before each tick.

use std::collections::VecDeque;

use super::state::ParticleField;
use super::types::{FieldEvent, Viewport};

/// FIFO of input events waiting for the next frame.
#[derive(Debug, Default)]
pub struct EventQueue {
	pending: VecDeque<FieldEvent>,
}

impl EventQueue {
	/// Empty queue.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enqueue an event for the next frame.
	pub fn push(&mut self, event: FieldEvent) {
		self.pending.push_back(event);
	}

	/// Number of pending events.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Whether nothing is pending.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Apply all pending events in arrival order.
	///
	/// Returns the last viewport applied, so the caller can resize the
	/// drawing surface to match.
	pub fn drain_into(&mut self, field: &mut ParticleField) -> Option<Viewport> {
		let mut resized = None;
		for event in self.pending.drain(..) {
			if let FieldEvent::Resize(viewport) = event {
				resized = Some(viewport);
			}
			field.apply(event);
		}
		resized
	}
}
