//! Visual theming for the skill tree.
//!
//! Colors and style configuration consumed by the highlight derivation and
//! the canvas renderer. Tier accents are an exhaustive match so a new tier
//! cannot ship without a color.

use super::types::Tier;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Edge stroke configuration, consumed by the highlight derivation.
#[derive(Clone, Debug)]
pub struct EdgeTheme {
	/// Default stroke color.
	pub stroke: Color,
	/// Default stroke width.
	pub width: f64,
	/// Default stroke opacity.
	pub opacity: f64,
	/// Stroke for edges touching the hovered node.
	pub emphasis_stroke: Color,
	/// Stroke width for edges touching the hovered node.
	pub emphasis_width: f64,
	/// Opacity for edges unrelated to the hovered node.
	pub dimmed_opacity: f64,
	/// Dash pattern (dash, gap) for animated edges, in world units.
	pub dash_pattern: (f64, f64),
	/// Dash flow speed for animated edges (world units per second).
	pub flow_speed: f64,
}

/// Node fill and highlight configuration.
#[derive(Clone, Debug)]
pub struct NodeTheme {
	/// Base fill behind every tier shape.
	pub fill: Color,
	/// Whether node fills use an inner gradient.
	pub use_gradient: bool,
	/// Opacity for nodes outside the current highlight.
	pub dimmed_alpha: f64,
	/// Scale multiplier applied to selected nodes.
	pub selected_scale: f64,
	/// Border/stroke width in screen pixels.
	pub border_width: f64,
	/// Outer glow intensity for the star tier (0.0 = none).
	pub star_glow: f64,
	/// Connection anchor dot color.
	pub anchor_color: Color,
	/// Label text color.
	pub label_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeTheme,
	pub node: NodeTheme,
}

impl Theme {
	/// Near-black theme matching the host page (default).
	pub fn dark() -> Self {
		Self {
			name: "dark",
			background: BackgroundStyle {
				color: Color::rgb(0, 0, 0),
				color_secondary: Color::rgb(14, 14, 18),
				use_gradient: true,
				vignette: 0.2,
			},
			edge: EdgeTheme {
				stroke: Color::rgba(177, 177, 183, 0.9),
				width: 1.5,
				opacity: 1.0,
				emphasis_stroke: Color::rgb(34, 197, 94),
				emphasis_width: 3.0,
				dimmed_opacity: 0.1,
				dash_pattern: (8.0, 4.0),
				flow_speed: 24.0,
			},
			node: NodeTheme {
				fill: Color::rgb(24, 24, 27),
				use_gradient: true,
				dimmed_alpha: 0.2,
				selected_scale: 1.05,
				border_width: 2.0,
				star_glow: 0.9,
				anchor_color: Color::rgba(161, 161, 170, 0.9),
				label_color: Color::rgba(228, 228, 231, 0.9),
			},
		}
	}

	/// Higher-contrast variant with a stronger star glow.
	pub fn neon() -> Self {
		Self {
			name: "neon",
			background: BackgroundStyle {
				color: Color::rgb(6, 4, 12),
				color_secondary: Color::rgb(18, 12, 30),
				use_gradient: true,
				vignette: 0.3,
			},
			edge: EdgeTheme {
				stroke: Color::rgba(148, 163, 184, 1.0),
				width: 1.5,
				opacity: 1.0,
				emphasis_stroke: Color::rgb(74, 222, 128),
				emphasis_width: 3.5,
				dimmed_opacity: 0.08,
				dash_pattern: (10.0, 5.0),
				flow_speed: 36.0,
			},
			node: NodeTheme {
				fill: Color::rgb(18, 18, 24),
				use_gradient: true,
				dimmed_alpha: 0.15,
				selected_scale: 1.08,
				border_width: 2.5,
				star_glow: 1.0,
				anchor_color: Color::rgba(203, 213, 225, 1.0),
				label_color: Color::rgba(241, 245, 249, 0.95),
			},
		}
	}

	/// Accent color for a tier's border and glyph.
	pub fn tier_accent(&self, tier: Tier) -> Color {
		match tier {
			Tier::Star => Color::rgb(236, 72, 153),
			Tier::Macro => Color::rgb(168, 85, 247),
			Tier::Category => Color::rgb(234, 179, 8),
			Tier::Micro => Color::rgb(34, 197, 94),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_formats() {
		assert_eq!(Color::rgb(24, 24, 27).to_css(), "#18181b");
		assert_eq!(Color::rgba(34, 197, 94, 0.5).to_css(), "rgba(34, 197, 94, 0.5)");
	}

	#[test]
	fn lighten_and_darken_clamp() {
		let c = Color::rgb(100, 100, 100);
		assert_eq!(c.lighten(2.0), Color::rgb(255, 255, 255));
		assert_eq!(c.darken(2.0), Color::rgb(0, 0, 0));
	}

	#[test]
	fn every_tier_has_an_accent() {
		let theme = Theme::default();
		for tier in [Tier::Star, Tier::Macro, Tier::Category, Tier::Micro] {
			assert!(theme.tier_accent(tier).a > 0.0);
		}
	}
}
