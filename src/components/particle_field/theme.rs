//! Visual styling for the particle background.
//!
//! Colors, the particle palette, and canvas presentation settings.

use rand::Rng;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0..=1`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string; hex when opaque.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

const FALLBACK_COLOR: Color = Color::rgba(255, 255, 255, 0.4);

/// The fixed set of colors particles are drawn from.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	/// Candidate colors, picked with equal weight.
	pub colors: Vec<Color>,
}

impl ParticlePalette {
	/// Four translucent brand accents plus translucent white (default)
	pub fn accents() -> Self {
		Self {
			colors: vec![
				Color::rgba(66, 133, 244, 0.6),  // Blue
				Color::rgba(52, 168, 83, 0.6),   // Green
				Color::rgba(251, 188, 4, 0.6),   // Yellow
				Color::rgba(234, 67, 53, 0.6),   // Red
				Color::rgba(255, 255, 255, 0.4), // White
			],
		}
	}

	/// Pick a color uniformly at random. An empty palette yields white.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> Color {
		if self.colors.is_empty() {
			return FALLBACK_COLOR;
		}
		self.colors[rng.gen_range(0..self.colors.len())]
	}
}

impl Default for ParticlePalette {
	fn default() -> Self {
		Self::accents()
	}
}

/// Canvas and shape presentation.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Colors new particles are drawn from.
	pub palette: ParticlePalette,
	/// Shadow blur applied around each particle, in pixels
	pub glow_blur: f64,
	/// Link color; alpha is replaced per link by the proximity fade
	pub link_color: Color,
	/// Link stroke width in pixels
	pub link_width: f64,
	/// Opacity of the whole canvas element
	pub canvas_opacity: f64,
	/// Stacking order of the canvas element
	pub z_index: i32,
}

impl FieldStyle {
	/// Inline CSS that pins the canvas over the full viewport without
	/// intercepting pointer input.
	pub fn canvas_css(&self) -> String {
		format!(
			"position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
			 pointer-events: none; z-index: {}; opacity: {};",
			self.z_index, self.canvas_opacity
		)
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			palette: ParticlePalette::accents(),
			glow_blur: 10.0,
			link_color: Color::rgb(66, 133, 244),
			link_width: 0.5,
			canvas_opacity: 0.6,
			z_index: 1,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(
			Color::rgba(66, 133, 244, 0.6).to_css(),
			"rgba(66, 133, 244, 0.6)"
		);
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
	}

	#[test]
	fn palette_pick_stays_in_palette_and_covers_it() {
		let palette = ParticlePalette::accents();
		let mut rng = SmallRng::seed_from_u64(7);
		let mut seen = vec![false; palette.colors.len()];
		for _ in 0..500 {
			let color = palette.pick(&mut rng);
			let idx = palette
				.colors
				.iter()
				.position(|c| *c == color)
				.expect("picked color comes from the palette");
			seen[idx] = true;
		}
		assert!(seen.iter().all(|s| *s));
	}

	#[test]
	fn empty_palette_falls_back_to_white() {
		let palette = ParticlePalette { colors: Vec::new() };
		let mut rng = SmallRng::seed_from_u64(3);
		assert_eq!(palette.pick(&mut rng), Color::rgba(255, 255, 255, 0.4));
	}

	#[test]
	fn canvas_css_is_fixed_and_click_through() {
		let css = FieldStyle::default().canvas_css();
		assert!(css.contains("position: fixed"));
		assert!(css.contains("pointer-events: none"));
		assert!(css.contains("z-index: 1"));
		assert!(css.contains("opacity: 0.6"));
	}
}
