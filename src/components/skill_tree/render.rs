//! Canvas rendering for the skill tree.
//!
//! Draws from freshly derived views each frame. Passes run in z-order:
//! 1. Background (screen space)
//! 2. Edges, then the connect preview line (world space)
//! 3. Unselected nodes, then selected nodes on top
//! 4. Vignette (screen space)

use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::highlight::{EdgeView, NodeView, highlight_edges, highlight_nodes};
use super::state::SkillTreeState;
use super::theme::Theme;
use super::types::{SkillNode, Tier};

/// Renders the complete tree to the canvas.
pub fn render(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let hovered = state.hovered.as_deref();
	let edge_views = highlight_edges(&state.edges, hovered, &theme.edge);
	let node_views = highlight_nodes(&state.nodes, hovered);

	for view in &edge_views {
		draw_edge(state, ctx, theme, view);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	draw_connect_preview(state, ctx, theme);

	// Unselected nodes first, selected on top.
	for view in node_views.iter().filter(|v| !v.selected) {
		draw_node(state, ctx, theme, view);
	}
	for view in node_views.iter().filter(|v| v.selected) {
		draw_node(state, ctx, theme, view);
	}

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			state.width.min(state.height) * 0.3,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.7,
		)
		.unwrap();

	gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)").unwrap();
	gradient
		.add_color_stop(1.0, &format!("rgba(0, 0, 0, {})", theme.background.vignette))
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// Draws one edge from the source's outgoing anchor to the target's
/// incoming anchor. An edge whose endpoint ids match no node is skipped;
/// there is nowhere to draw it.
fn draw_edge(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, theme: &Theme, view: &EdgeView) {
	let find = |id: &str| state.nodes.iter().find(|n| n.id == id);
	let (Some(source), Some(target)) = (find(&view.edge.source), find(&view.edge.target)) else {
		return;
	};

	let (x1, y1) = (source.position.x, source.position.y + source.tier.half_size());
	let (x2, y2) = (target.position.x, target.position.y - target.tier.half_size());

	ctx.set_global_alpha(view.opacity);
	ctx.set_stroke_style_str(&view.stroke.to_css());
	ctx.set_line_width(view.width / state.transform.k);

	if view.animated {
		let (dash, gap) = theme.edge.dash_pattern;
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(-state.flow_time * theme.edge.flow_speed);
	} else {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();

	ctx.set_global_alpha(1.0);
}

/// Draws the dashed preview line while a connection gesture is in flight.
fn draw_connect_preview(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if !state.connect.active {
		return;
	}
	let Some(source) = state
		.connect
		.source_id
		.as_deref()
		.and_then(|id| state.nodes.iter().find(|n| n.id == id))
	else {
		return;
	};

	ctx.set_global_alpha(0.8);
	ctx.set_stroke_style_str(&theme.edge.emphasis_stroke.to_css());
	ctx.set_line_width(theme.edge.width / state.transform.k);
	let (dash, gap) = theme.edge.dash_pattern;
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));

	ctx.begin_path();
	ctx.move_to(source.position.x, source.position.y + source.tier.half_size());
	ctx.line_to(state.connect.cursor.x, state.connect.cursor.y);
	ctx.stroke();

	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_global_alpha(1.0);
}

fn draw_node(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, theme: &Theme, view: &NodeView) {
	let node = view.node;
	let (x, y) = (node.position.x, node.position.y);
	let accent = theme.tier_accent(node.tier);

	let (alpha, scale) = if view.selected {
		(1.0, theme.node.selected_scale)
	} else {
		(theme.node.dimmed_alpha, 1.0)
	};
	let half = node.tier.half_size() * scale;

	ctx.set_global_alpha(alpha);

	if node.tier == Tier::Star && theme.node.star_glow > 0.0 {
		draw_star_glow(ctx, theme, x, y, half);
	}

	trace_shape(ctx, node, half);

	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(x - half * 0.3, y - half * 0.3, 0.0, x, y, half)
			.unwrap();
		gradient
			.add_color_stop(0.0, &theme.node.fill.lighten(0.12).to_css())
			.unwrap();
		gradient.add_color_stop(1.0, &theme.node.fill.darken(0.2).to_css()).unwrap();
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.node.fill.to_css());
	}
	ctx.fill();

	ctx.set_stroke_style_str(&accent.to_css());
	ctx.set_line_width(theme.node.border_width / state.transform.k);
	ctx.stroke();

	draw_anchors(state, ctx, theme, node);

	ctx.set_fill_style_str(&accent.to_css());
	ctx.set_font(&format!("{}px sans-serif", node.tier.icon_size()));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&node.icon, x, y);

	if let Some(label) = &node.label {
		ctx.set_fill_style_str(&theme.node.label_color.to_css());
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(label, x, y + half + 14.0);
	}

	ctx.set_global_alpha(1.0);
}

/// Traces the tier-specific outline: pentagon for the star, octagon for
/// macros, rounded square for categories, plain square for micros.
fn trace_shape(ctx: &CanvasRenderingContext2d, node: &SkillNode, half: f64) {
	let (x, y) = (node.position.x, node.position.y);
	match node.tier {
		Tier::Star => trace_polygon(ctx, x, y, half, 5, -PI / 2.0),
		Tier::Macro => trace_polygon(ctx, x, y, half, 8, PI / 8.0),
		Tier::Category => trace_rounded_square(ctx, x, y, half, half * 0.25),
		Tier::Micro => {
			ctx.begin_path();
			ctx.rect(x - half, y - half, half * 2.0, half * 2.0);
		}
	}
}

fn trace_polygon(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	radius: f64,
	sides: u32,
	start_angle: f64,
) {
	ctx.begin_path();
	for i in 0..sides {
		let angle = start_angle + i as f64 * TAU / sides as f64;
		let (px, py) = (x + radius * angle.cos(), y + radius * angle.sin());
		if i == 0 {
			ctx.move_to(px, py);
		} else {
			ctx.line_to(px, py);
		}
	}
	ctx.close_path();
}

fn trace_rounded_square(ctx: &CanvasRenderingContext2d, x: f64, y: f64, half: f64, corner: f64) {
	let (left, top, right, bottom) = (x - half, y - half, x + half, y + half);
	ctx.begin_path();
	ctx.move_to(left + corner, top);
	let _ = ctx.arc_to(right, top, right, bottom, corner);
	let _ = ctx.arc_to(right, bottom, left, bottom, corner);
	let _ = ctx.arc_to(left, bottom, left, top, corner);
	let _ = ctx.arc_to(left, top, right, top, corner);
	ctx.close_path();
}

/// Soft radial glow behind the star node.
fn draw_star_glow(ctx: &CanvasRenderingContext2d, theme: &Theme, x: f64, y: f64, half: f64) {
	let accent = theme.tier_accent(Tier::Star);
	let glow_radius = half * 2.2;
	let gradient = ctx
		.create_radial_gradient(x, y, half * 0.5, x, y, glow_radius)
		.unwrap();
	gradient
		.add_color_stop(0.0, &accent.with_alpha(theme.node.star_glow * 0.5).to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &accent.with_alpha(0.0).to_css())
		.unwrap();

	ctx.begin_path();
	let _ = ctx.arc(x, y, glow_radius, 0.0, TAU);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

/// Connection anchors: incoming dot above the shape, outgoing dot below.
fn draw_anchors(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, theme: &Theme, node: &SkillNode) {
	let half = node.tier.half_size();
	let radius = 3.5 / state.transform.k.max(0.5);

	ctx.set_fill_style_str(&theme.node.anchor_color.to_css());
	for ay in [node.position.y - half, node.position.y + half] {
		ctx.begin_path();
		let _ = ctx.arc(node.position.x, ay, radius, 0.0, TAU);
		ctx.fill();
	}
}
