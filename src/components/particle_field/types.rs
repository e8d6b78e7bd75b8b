//! Input types shared by the simulation and the frame loop.

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Viewport {
	/// Negative or non-finite extents collapse to zero.
	pub fn new(width: f64, height: f64) -> Self {
		let sane = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		Self {
			width: sane(width),
			height: sane(height),
		}
	}

	/// Whether the point lies inside, edges included.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}

/// An input notification from the host page, applied at a frame boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
	/// The window changed size.
	Resize(Viewport),
	/// The pointer moved, in client coordinates.
	PointerMove {
		/// Horizontal position.
		x: f64,
		/// Vertical position.
		y: f64,
	},
}
