//! Individual particles and their per-frame motion.

use rand::Rng;

use super::config::FieldConfig;
use super::theme::{Color, ParticlePalette};
use super::types::Viewport;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Drawn radius, fixed at spawn.
	pub radius: f64,
	/// Fill color, fixed at spawn.
	pub color: Color,
}

impl Particle {
	/// Random particle somewhere inside `viewport`.
	pub fn random<R: Rng>(
		rng: &mut R,
		viewport: Viewport,
		config: &FieldConfig,
		palette: &ParticlePalette,
	) -> Self {
		let radius =
			config.radius_min + rng.r#gen::<f64>() * (config.radius_max - config.radius_min);
		Self {
			// Scaling a unit sample keeps zero-sized viewports valid.
			x: rng.r#gen::<f64>() * viewport.width,
			y: rng.r#gen::<f64>() * viewport.height,
			vx: (rng.r#gen::<f64>() * 2.0 - 1.0) * config.max_speed,
			vy: (rng.r#gen::<f64>() * 2.0 - 1.0) * config.max_speed,
			radius,
			color: palette.pick(rng),
		}
	}

	/// Push the particle away from the pointer.
	pub fn repel(&mut self, pointer: (f64, f64), influence_radius: f64, strength: f64) {
		let (dx, dy) = repulsion((self.x, self.y), pointer, influence_radius, strength);
		self.x += dx;
		self.y += dy;
	}

	/// Integrate velocity, bounce off the edges, and clamp into the viewport.
	///
	/// The velocity flips on the frame the particle is found outside, and the
	/// position is clamped in the same frame.
	pub fn advance(&mut self, viewport: Viewport) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > viewport.width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > viewport.height {
			self.vy = -self.vy;
		}

		self.x = self.x.clamp(0.0, viewport.width);
		self.y = self.y.clamp(0.0, viewport.height);
	}
}

/// Displacement applied to a particle at `pos` by a pointer at `pointer`.
///
/// Falls off linearly from `strength` at the pointer to zero at
/// `influence_radius`. A particle exactly under the pointer has no defined
/// direction and is left in place.
pub fn repulsion(
	pos: (f64, f64),
	pointer: (f64, f64),
	influence_radius: f64,
	strength: f64,
) -> (f64, f64) {
	let (dx, dy) = (pos.0 - pointer.0, pos.1 - pointer.1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist >= influence_radius || dist <= f64::EPSILON {
		return (0.0, 0.0);
	}
	let force = (influence_radius - dist) / influence_radius;
	(dx / dist * force * strength, dy / dist * force * strength)
}

/// Opacity of the link between two particles `dist` apart, if one is drawn.
pub fn link_opacity(dist: f64, link_distance: f64, max_opacity: f64) -> Option<f64> {
	(dist < link_distance).then(|| max_opacity * (1.0 - dist / link_distance))
}
