//! Draw commands for one frame, and their playback onto a canvas.
//!
//! The simulation emits a [`Frame`] of plain data; [`paint`] is the only code
//! that touches the 2D context. Commands are replayed in order, so the
//! emitted order is the z-order.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// A single drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// Wipe the surface to transparent.
	Clear {
		/// Width of the cleared area.
		width: f64,
		/// Height of the cleared area.
		height: f64,
	},
	/// Filled circle with a same-colored shadow glow.
	Circle {
		/// Center, horizontal.
		x: f64,
		/// Center, vertical.
		y: f64,
		/// Circle radius.
		radius: f64,
		/// Fill and glow color.
		color: Color,
		/// Shadow blur; zero disables the glow.
		glow_blur: f64,
	},
	/// Straight stroked segment.
	Line {
		/// Start point.
		from: (f64, f64),
		/// End point.
		to: (f64, f64),
		/// Stroke color.
		color: Color,
		/// Stroke width.
		width: f64,
	},
}

/// Everything drawn during one animation frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	/// Commands in paint order.
	pub commands: Vec<DrawCommand>,
}

impl Frame {
	/// Empty frame with room for `capacity` commands.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			commands: Vec::with_capacity(capacity),
		}
	}

	/// Append a command on top of everything so far.
	pub fn push(&mut self, command: DrawCommand) {
		self.commands.push(command);
	}

	/// Circle commands only.
	pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Circle { .. }))
	}

	/// Line commands only.
	pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
	}
}

/// Replays `frame` onto the canvas.
pub fn paint(ctx: &CanvasRenderingContext2d, frame: &Frame) {
	for command in &frame.commands {
		match command {
			DrawCommand::Clear { width, height } => {
				ctx.clear_rect(0.0, 0.0, *width, *height);
			}
			DrawCommand::Circle {
				x,
				y,
				radius,
				color,
				glow_blur,
			} => draw_glowing_circle(ctx, *x, *y, *radius, *color, *glow_blur),
			DrawCommand::Line {
				from,
				to,
				color,
				width,
			} => {
				ctx.begin_path();
				ctx.set_stroke_style_str(&color.to_css());
				ctx.set_line_width(*width);
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
			}
		}
	}
}

fn draw_glowing_circle(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	radius: f64,
	color: Color,
	glow_blur: f64,
) {
	let css = color.to_css();

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
	ctx.set_fill_style_str(&css);
	ctx.fill();

	// Second fill of the same path with a shadow gives the halo.
	if glow_blur > 0.0 {
		ctx.set_shadow_blur(glow_blur);
		ctx.set_shadow_color(&css);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
	}
}
