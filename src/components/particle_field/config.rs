//! Simulation tuning for the particle field.
//!
//! All distances are in CSS pixels and all speeds in pixels per frame.
//! Every field has a default, so a partial JSON object is a valid config.

use serde::Deserialize;

/// Upper bound on `particle_count`; links are found by an all-pairs pass.
pub const MAX_PARTICLE_COUNT: usize = 1000;

/// Tunable parameters of the particle simulation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles kept alive at all times.
	pub particle_count: usize,
	/// Pointer distance below which particles are pushed away.
	pub influence_radius: f64,
	/// Displacement, in pixels, applied at zero pointer distance.
	pub repulsion_strength: f64,
	/// Upper bound for each velocity component's magnitude.
	pub max_speed: f64,
	/// Smallest particle radius (inclusive).
	pub radius_min: f64,
	/// Largest particle radius (exclusive).
	pub radius_max: f64,
	/// Particle distance below which a link is drawn.
	pub link_distance: f64,
	/// Link opacity at zero distance; fades linearly to zero at `link_distance`.
	pub link_opacity: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 50,
			influence_radius: 150.0,
			repulsion_strength: 3.0,
			max_speed: 0.25,
			radius_min: 1.0,
			radius_max: 4.0,
			link_distance: 120.0,
			link_opacity: 0.15,
		}
	}
}

impl FieldConfig {
	/// Check ranges the simulation relies on.
	///
	/// Returns the name of the first offending field and why it was rejected.
	pub fn check(&self) -> Result<(), (&'static str, &'static str)> {
		let finite = [
			("influence_radius", self.influence_radius),
			("repulsion_strength", self.repulsion_strength),
			("max_speed", self.max_speed),
			("radius_min", self.radius_min),
			("radius_max", self.radius_max),
			("link_distance", self.link_distance),
			("link_opacity", self.link_opacity),
		];
		if let Some(&(name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
			return Err((name, "must be a finite number"));
		}
		if self.particle_count > MAX_PARTICLE_COUNT {
			return Err(("particle_count", "must be at most 1000"));
		}
		if self.influence_radius <= 0.0 {
			return Err(("influence_radius", "must be positive"));
		}
		if self.link_distance <= 0.0 {
			return Err(("link_distance", "must be positive"));
		}
		if self.max_speed < 0.0 {
			return Err(("max_speed", "must not be negative"));
		}
		if self.radius_min < 0.0 || self.radius_min >= self.radius_max {
			return Err(("radius_min", "must be non-negative and below radius_max"));
		}
		if !(0.0..=1.0).contains(&self.link_opacity) {
			return Err(("link_opacity", "must be within 0..=1"));
		}
		Ok(())
	}
}
