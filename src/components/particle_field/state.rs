//! Particle field simulation state.
//!
//! Owns the particles, the last known pointer position and the viewport.
//! Created once when the background mounts, then advanced once per animation
//! frame by [`ParticleField::tick`], which also produces the frame's draw
//! commands.

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::{FieldConfig, MAX_PARTICLE_COUNT};
use super::particles::{Particle, link_opacity};
use super::render::{DrawCommand, Frame};
use super::theme::FieldStyle;
use super::types::{FieldEvent, Viewport};

/// The animated particle background.
pub struct ParticleField {
	particles: Vec<Particle>,
	pointer: Option<(f64, f64)>,
	viewport: Viewport,
	config: FieldConfig,
	style: FieldStyle,
	rng: SmallRng,
	frames: u64,
}

impl ParticleField {
	/// New field seeded from the platform entropy source.
	pub fn new(config: FieldConfig, style: FieldStyle, viewport: Viewport) -> Self {
		Self::with_rng(config, style, viewport, SmallRng::from_entropy())
	}

	/// New field with a reproducible particle layout.
	pub fn with_seed(
		config: FieldConfig,
		style: FieldStyle,
		viewport: Viewport,
		seed: u64,
	) -> Self {
		Self::with_rng(config, style, viewport, SmallRng::seed_from_u64(seed))
	}

	fn with_rng(
		mut config: FieldConfig,
		style: FieldStyle,
		viewport: Viewport,
		rng: SmallRng,
	) -> Self {
		if config.particle_count > MAX_PARTICLE_COUNT {
			warn!(
				"particle-field: {} particles requested, capping at {}",
				config.particle_count, MAX_PARTICLE_COUNT
			);
			config.particle_count = MAX_PARTICLE_COUNT;
		}
		let mut field = Self {
			particles: Vec::with_capacity(config.particle_count),
			pointer: None,
			viewport,
			config,
			style,
			rng,
			frames: 0,
		};
		field.regenerate();
		field
	}

	/// Replace every particle with a freshly randomized one.
	fn regenerate(&mut self) {
		let Self {
			particles,
			viewport,
			config,
			style,
			rng,
			..
		} = self;
		particles.clear();
		particles.extend(
			(0..config.particle_count)
				.map(|_| Particle::random(&mut *rng, *viewport, config, &style.palette)),
		);
		debug!(
			"particle-field: generated {} particles for {}x{}",
			particles.len(),
			viewport.width,
			viewport.height
		);
	}

	/// Particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Last reported pointer position, if any.
	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	/// Current bounds of the field.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Tuning in effect, after capping.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Number of frames advanced so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Adopt a new viewport size; particles are regenerated from scratch.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.regenerate();
	}

	/// Remember where the pointer is. Consumed by the next [`tick`](Self::tick).
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if x.is_finite() && y.is_finite() {
			self.pointer = Some((x, y));
		}
	}

	/// Apply a queued input event.
	pub fn apply(&mut self, event: FieldEvent) {
		match event {
			FieldEvent::Resize(viewport) => self.resize(viewport),
			FieldEvent::PointerMove { x, y } => self.pointer_moved(x, y),
		}
	}

	/// Advance one frame and return what to draw.
	///
	/// Particles are processed in order. Each one is moved, drawn, and then
	/// linked to the particles after it, which have not moved yet this frame.
	pub fn tick(&mut self) -> Frame {
		let FieldConfig {
			influence_radius,
			repulsion_strength,
			link_distance,
			link_opacity: max_link_opacity,
			..
		} = self.config;

		let n = self.particles.len();
		let mut frame = Frame::with_capacity(n.saturating_mul(2).saturating_add(1));
		frame.push(DrawCommand::Clear {
			width: self.viewport.width,
			height: self.viewport.height,
		});

		for i in 0..n {
			let (done, rest) = self.particles.split_at_mut(i + 1);
			let p = &mut done[i];

			if let Some(pointer) = self.pointer {
				p.repel(pointer, influence_radius, repulsion_strength);
			}
			p.advance(self.viewport);

			frame.push(DrawCommand::Circle {
				x: p.x,
				y: p.y,
				radius: p.radius,
				color: p.color,
				glow_blur: self.style.glow_blur,
			});

			for other in rest.iter() {
				let (dx, dy) = (p.x - other.x, p.y - other.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if let Some(alpha) = link_opacity(dist, link_distance, max_link_opacity) {
					frame.push(DrawCommand::Line {
						from: (p.x, p.y),
						to: (other.x, other.y),
						color: self.style.link_color.with_alpha(alpha),
						width: self.style.link_width,
					});
				}
			}
		}
		self.frames += 1;

		frame
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::theme::Color;

	fn field(width: f64, height: f64) -> ParticleField {
		ParticleField::with_seed(
			FieldConfig::default(),
			FieldStyle::default(),
			Viewport::new(width, height),
			99,
		)
	}

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			color: Color::rgba(255, 255, 255, 0.4),
		}
	}

	fn link_alphas(frame: &Frame) -> Vec<f64> {
		frame
			.lines()
			.map(|c| match c {
				DrawCommand::Line { color, .. } => color.a,
				_ => unreachable!(),
			})
			.collect()
	}

	#[test]
	fn initialize_creates_configured_count_inside_viewport() {
		let f = field(800.0, 600.0);
		assert_eq!(f.particles().len(), 50);
		assert!(f.particles().iter().all(|p| f.viewport().contains(p.x, p.y)));
		assert_eq!(f.pointer(), None);
	}

	#[test]
	fn particles_stay_in_bounds_over_many_frames() {
		let mut f = field(300.0, 200.0);
		for frame in 0..2000 {
			// Sweep the pointer around, including outside the viewport.
			let t = frame as f64 * 0.05;
			f.pointer_moved(150.0 + 250.0 * t.cos(), 100.0 + 180.0 * t.sin());
			f.tick();
			for p in f.particles() {
				assert!(
					f.viewport().contains(p.x, p.y),
					"particle escaped at frame {frame}: ({}, {})",
					p.x,
					p.y
				);
			}
		}
		assert_eq!(f.frames(), 2000);
	}

	#[test]
	fn reflection_at_right_edge() {
		let mut f = field(400.0, 300.0);
		let mut p = still(399.9, 150.0);
		p.vx = 1.0;
		f.particles = vec![p];
		f.tick();
		let p = &f.particles()[0];
		assert_eq!(p.vx, -1.0);
		assert!(p.x <= 400.0);
	}

	#[test]
	fn pointer_pushes_closer_particles_further() {
		let mut f = field(1000.0, 1000.0);
		// 30px to the right of the pointer and 100px below it.
		f.particles = vec![still(530.0, 200.0), still(500.0, 300.0)];
		f.pointer_moved(500.0, 200.0);
		f.tick();
		let moved_near = f.particles[0].x - 530.0;
		let moved_far = f.particles[1].y - 300.0;
		assert!((moved_near - 2.4).abs() < 1e-9);
		assert!((moved_far - 1.0).abs() < 1e-9);
		assert_eq!(f.particles[0].y, 200.0);
		assert_eq!(f.particles[1].x, 500.0);
	}

	#[test]
	fn particle_on_influence_boundary_is_not_pushed() {
		let mut f = field(1000.0, 1000.0);
		f.particles = vec![still(650.0, 500.0)];
		f.pointer_moved(500.0, 500.0);
		f.tick();
		assert_eq!((f.particles[0].x, f.particles[0].y), (650.0, 500.0));
	}

	#[test]
	fn particle_under_pointer_stays_put() {
		let mut f = field(1000.0, 1000.0);
		f.particles = vec![still(500.0, 500.0)];
		f.pointer_moved(500.0, 500.0);
		f.tick();
		assert_eq!((f.particles[0].x, f.particles[0].y), (500.0, 500.0));
	}

	#[test]
	fn links_reach_later_particles_before_they_move() {
		let mut f = field(1000.0, 1000.0);
		let mut moving = still(150.0, 100.0);
		moving.vx = 1.0;
		f.particles = vec![still(100.0, 100.0), moving];
		let frame = f.tick();

		let lines: Vec<&DrawCommand> = frame.lines().collect();
		assert_eq!(lines.len(), 1);
		match lines[0] {
			DrawCommand::Line { from, to, color, .. } => {
				assert_eq!(*from, (100.0, 100.0));
				assert_eq!(*to, (150.0, 100.0));
				assert!((color.a - 0.0875).abs() < 1e-12);
			}
			other => panic!("expected a line, got {other:?}"),
		}
		// The later particle still moves and is drawn at its new spot.
		assert_eq!(f.particles[1].x, 151.0);
		assert!(matches!(frame.commands[3], DrawCommand::Circle { x, .. } if x == 151.0));
	}

	#[test]
	fn oversized_particle_count_is_capped() {
		let config = FieldConfig {
			particle_count: usize::MAX,
			..FieldConfig::default()
		};
		let f = ParticleField::with_seed(
			config,
			FieldStyle::default(),
			Viewport::new(200.0, 200.0),
			5,
		);
		assert_eq!(f.particles().len(), MAX_PARTICLE_COUNT);
		assert_eq!(f.config().particle_count, MAX_PARTICLE_COUNT);
	}

	#[test]
	fn no_link_at_exact_cutoff() {
		let mut f = field(1000.0, 1000.0);
		f.particles = vec![still(100.0, 100.0), still(220.0, 100.0)];
		let frame = f.tick();
		assert_eq!(frame.lines().count(), 0);
		assert_eq!(frame.circles().count(), 2);
	}

	#[test]
	fn link_opacity_halves_at_half_distance() {
		let mut f = field(1000.0, 1000.0);
		f.particles = vec![still(100.0, 100.0), still(100.0, 160.0)];
		let frame = f.tick();
		let alphas = link_alphas(&frame);
		assert_eq!(alphas.len(), 1);
		assert!((alphas[0] - 0.075).abs() < 1e-12);
	}

	#[test]
	fn frame_clears_then_interleaves_circles_and_links() {
		let mut f = field(1000.0, 1000.0);
		f.particles = vec![
			still(100.0, 100.0),
			still(150.0, 100.0),
			still(900.0, 900.0),
		];
		let frame = f.tick();
		assert_eq!(
			frame.commands[0],
			DrawCommand::Clear {
				width: 1000.0,
				height: 1000.0
			}
		);
		assert!(matches!(frame.commands[1], DrawCommand::Circle { x, .. } if x == 100.0));
		assert!(matches!(
			frame.commands[2],
			DrawCommand::Line { from, to, width, .. }
				if from == (100.0, 100.0) && to == (150.0, 100.0) && width == 0.5
		));
		assert!(matches!(frame.commands[3], DrawCommand::Circle { x, .. } if x == 150.0));
		assert!(matches!(frame.commands[4], DrawCommand::Circle { x, .. } if x == 900.0));
		assert_eq!(frame.commands.len(), 5);
	}

	#[test]
	fn circles_carry_radius_color_and_glow() {
		let mut f = field(1000.0, 1000.0);
		f.particles = vec![still(10.0, 20.0)];
		let frame = f.tick();
		assert_eq!(
			frame.circles().next(),
			Some(&DrawCommand::Circle {
				x: 10.0,
				y: 20.0,
				radius: 2.0,
				color: Color::rgba(255, 255, 255, 0.4),
				glow_blur: 10.0,
			})
		);
	}

	#[test]
	fn resize_regenerates_inside_smaller_bounds() {
		let mut f = field(1920.0, 1080.0);
		let before = f.particles().to_vec();
		f.resize(Viewport::new(320.0, 240.0));
		assert_eq!(f.particles().len(), 50);
		assert_ne!(f.particles(), &before[..]);
		assert!(f.particles().iter().all(|p| p.x <= 320.0 && p.y <= 240.0));
	}

	#[test]
	fn events_apply_like_direct_calls() {
		let mut f = field(800.0, 600.0);
		f.apply(FieldEvent::PointerMove { x: 12.0, y: 34.0 });
		assert_eq!(f.pointer(), Some((12.0, 34.0)));
		f.apply(FieldEvent::Resize(Viewport::new(100.0, 50.0)));
		assert_eq!(f.viewport(), Viewport::new(100.0, 50.0));
		assert_eq!(f.particles().len(), 50);
		// The pointer survives a resize.
		assert_eq!(f.pointer(), Some((12.0, 34.0)));
	}

	#[test]
	fn non_finite_pointer_is_ignored() {
		let mut f = field(800.0, 600.0);
		f.pointer_moved(f64::NAN, 10.0);
		assert_eq!(f.pointer(), None);
	}

	#[test]
	fn same_seed_same_layout() {
		let a = field(800.0, 600.0);
		let b = field(800.0, 600.0);
		assert_eq!(a.particles(), b.particles());
	}
}
