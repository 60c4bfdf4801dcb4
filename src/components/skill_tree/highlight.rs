//! Hover highlight derivation.
//!
//! Pure functions from the canonical collections plus the hovered node id to
//! per-render view state. Nothing here is stored; callers recompute on every
//! render, so the derived views can never drift from the collections.

use super::theme::{Color, EdgeTheme};
use super::types::{SkillEdge, SkillNode};

/// A node plus its derived selection flag for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeView<'a> {
	pub node: &'a SkillNode,
	/// True when the node is part of the current highlight: every node while
	/// nothing is hovered, only the hovered node otherwise.
	pub selected: bool,
}

/// An edge plus its derived stroke for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeView<'a> {
	pub edge: &'a SkillEdge,
	pub stroke: Color,
	pub width: f64,
	pub opacity: f64,
	/// Related edges animate a marching dash pattern.
	pub animated: bool,
}

/// Derives the selection flag for every node.
///
/// Total over the collection: with nothing hovered the whole tree reads as
/// selected, otherwise exactly the hovered node does.
pub fn highlight_nodes<'a>(nodes: &'a [SkillNode], hovered: Option<&str>) -> Vec<NodeView<'a>> {
	nodes
		.iter()
		.map(|node| NodeView {
			node,
			selected: match hovered {
				None => true,
				Some(id) => node.id == id,
			},
		})
		.collect()
}

/// Derives the stroke for every edge.
///
/// With nothing hovered every edge keeps the theme's default style. With a
/// hovered node, an edge is related when its source or target equals the
/// hovered id: related edges get the emphasis stroke and animate, all others
/// are dimmed. Classification is direct id comparison against the edge's own
/// endpoints, so a dangling edge simply ends up unrelated.
pub fn highlight_edges<'a>(
	edges: &'a [SkillEdge],
	hovered: Option<&str>,
	theme: &EdgeTheme,
) -> Vec<EdgeView<'a>> {
	edges
		.iter()
		.map(|edge| match hovered {
			None => EdgeView {
				edge,
				stroke: theme.stroke,
				width: theme.width,
				opacity: theme.opacity,
				animated: false,
			},
			Some(id) if edge.source == id || edge.target == id => EdgeView {
				edge,
				stroke: theme.emphasis_stroke,
				width: theme.emphasis_width,
				opacity: 1.0,
				animated: true,
			},
			Some(_) => EdgeView {
				edge,
				stroke: theme.stroke,
				width: theme.width,
				opacity: theme.dimmed_opacity,
				animated: false,
			},
		})
		.collect()
}
