//! Animated particle background.
//!
//! Draws a field of slowly drifting, softly glowing dots over the page:
//! - Particles bounce off the viewport edges and never leave it
//! - The pointer pushes nearby particles away, strongest right under it
//! - Particles closer than a threshold are joined by fading lines
//! - Resizing the window scatters a fresh set of particles
//!
//! The simulation ([`ParticleField`]) is plain Rust and produces a [`Frame`]
//! of draw commands per tick; the canvas and browser plumbing live in the
//! component and [`FrameLoop`].
//!
//! # Example
//!
//! ```ignore
//! view! { <ParticleBackground /> }
//! ```

mod animation;
mod component;
pub mod config;
mod events;
mod particles;
mod render;
mod state;
pub mod theme;
mod types;

pub use animation::{FrameLoop, window_viewport};
pub use component::ParticleBackground;
pub use config::FieldConfig;
pub use events::EventQueue;
pub use particles::{Particle, link_opacity, repulsion};
pub use render::{DrawCommand, Frame, paint};
pub use state::ParticleField;
pub use theme::{Color, FieldStyle, ParticlePalette};
pub use types::{FieldEvent, Viewport};
