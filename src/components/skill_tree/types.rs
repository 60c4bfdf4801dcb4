//! Skill tree data structures: tiers, nodes, edges, and the input model.

use serde::Deserialize;

/// A point in graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Node tier in the skill hierarchy.
///
/// Every tier-dependent visual choice (size, shape, accent color) is an
/// exhaustive match on this enum, so adding a tier is a compile-time-checked
/// change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
	/// The central star node.
	Star,
	/// First ring: broad skill areas.
	Macro,
	/// Second ring: categories within an area.
	Category,
	/// Innermost ring: individual topics.
	Micro,
}

impl Tier {
	/// Half-extent of the node shape in world units.
	pub fn half_size(self) -> f64 {
		match self {
			Tier::Star => 64.0,
			Tier::Macro => 48.0,
			Tier::Category => 40.0,
			Tier::Micro => 24.0,
		}
	}

	/// Icon glyph size in world units.
	pub fn icon_size(self) -> f64 {
		match self {
			Tier::Star => 40.0,
			Tier::Macro => 28.0,
			Tier::Category => 24.0,
			Tier::Micro => 14.0,
		}
	}
}

/// A node in the skill tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
	/// Unique identifier, referenced by edges.
	pub id: String,
	/// Hierarchy tier. Immutable once assigned.
	pub tier: Tier,
	/// Icon glyph drawn at the node center. Opaque to the graph logic.
	pub icon: String,
	/// Optional display label drawn under the node.
	pub label: Option<String>,
	/// Position in graph space. Assigned by the layout, mutated only by drag.
	pub position: Point,
}

/// An edge between two nodes.
///
/// Visual state (stroke, animation) is derived per render and never stored
/// here.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillEdge {
	/// Unique identifier.
	pub id: String,
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
}

/// One input item, before the layout assigns it a position.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillItem {
	/// Unique identifier for this item.
	pub id: String,
	/// Icon glyph (any short string, typically a single unicode symbol).
	pub icon: String,
	/// Optional display label.
	#[serde(default)]
	pub label: Option<String>,
}

/// A concentric ring of items placed at a common radius around the center.
#[derive(Clone, Debug, Deserialize)]
pub struct Ring {
	/// Tier assigned to every item on this ring.
	pub tier: Tier,
	/// Ring radius in world units.
	pub radius: f64,
	/// Ordered items to place on the ring.
	pub items: Vec<SkillItem>,
}

/// Complete input for a skill tree: the center item plus its rings.
///
/// The first ring is the one whose nodes get an edge to the center.
#[derive(Clone, Debug, Deserialize)]
pub struct TreeData {
	/// The central item, placed at the canvas center as the star tier.
	pub center: SkillItem,
	/// Rings in any radius order; each carries its own radius.
	pub rings: Vec<Ring>,
}

impl TreeData {
	/// Built-in sample tree used when the host page provides no data.
	pub fn sample() -> Self {
		let item = |id: &str, icon: &str| SkillItem {
			id: id.to_string(),
			icon: icon.to_string(),
			label: None,
		};

		Self {
			center: item("star", "\u{2605}"),
			rings: vec![
				Ring {
					tier: Tier::Macro,
					radius: 200.0,
					items: vec![
						item("cyber", "\u{1f6e1}"),
						item("programming", "\u{2699}"),
						item("network", "\u{1f310}"),
					],
				},
				Ring {
					tier: Tier::Category,
					radius: 350.0,
					items: vec![
						item("redteam", "\u{1f525}"),
						item("backend", "\u{2699}"),
						item("english", "\u{1f4d6}"),
					],
				},
				Ring {
					tier: Tier::Micro,
					radius: 120.0,
					items: vec![
						item("tcp", "\u{1f4d6}"),
						item("dns", "\u{1f4d6}"),
						item("http", "\u{1f4d6}"),
					],
				},
			],
		}
	}
}
