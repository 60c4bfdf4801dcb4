//! Skill tree state and interaction tracking.
//!
//! Owns the canonical node and edge collections, the hovered-node id, the
//! view transform for pan/zoom, and the in-progress interaction states
//! (drag, pan, pending connection). All mutation funnels through this type,
//! one event at a time; rendering reads freshly derived views each frame.

use super::changes::{self, Connection, EdgeChange, NodeChange};
use super::layout::place_on_ring;
use super::types::{Point, SkillEdge, SkillNode, Tier, TreeData};

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_id: Option<String>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Point,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Tracks a connection being drawn from an outgoing anchor.
#[derive(Clone, Debug, Default)]
pub struct ConnectState {
	pub active: bool,
	pub source_id: Option<String>,
	/// Current cursor position in graph space, for the preview line.
	pub cursor: Point,
}

/// Which pointer transition a node view reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverKind {
	/// Pointer entered the node.
	Enter,
	/// Pointer left the node.
	Leave,
}

/// Pointer message from a node view to the controller.
///
/// Node views never mutate shared state; they report transitions as these
/// messages and the controller is the sole writer of the hovered id.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverMessage {
	pub node_id: String,
	pub kind: HoverKind,
}

/// Which connection anchor of a node the cursor is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	/// Incoming anchor above the node.
	Incoming,
	/// Outgoing anchor below the node.
	Outgoing,
}

/// Hit radius around connection anchors, in world units.
const ANCHOR_HIT_RADIUS: f64 = 9.0;

/// Messages a pointer move generates when it crosses node boundaries: a
/// leave for the node left behind, then an enter for the node reached.
///
/// Browsers deliver leave-before-enter for adjacent regions; synthesizing
/// the same order here keeps the controller's state machine identical for
/// both real and derived event streams.
pub fn hover_transition(previous: Option<&str>, current: Option<&str>) -> Vec<HoverMessage> {
	if previous == current {
		return Vec::new();
	}

	let mut messages = Vec::new();
	if let Some(id) = previous {
		messages.push(HoverMessage {
			node_id: id.to_string(),
			kind: HoverKind::Leave,
		});
	}
	if let Some(id) = current {
		messages.push(HoverMessage {
			node_id: id.to_string(),
			kind: HoverKind::Enter,
		});
	}
	messages
}

/// Core state: canonical collections plus interaction tracking.
///
/// Created once when the component mounts, then mutated by event handlers.
/// `tick` advances the clock that drives the animated edge dashes.
pub struct SkillTreeState {
	pub nodes: Vec<SkillNode>,
	pub edges: Vec<SkillEdge>,
	/// Currently hovered node id. `None` is the idle state.
	pub hovered: Option<String>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub connect: ConnectState,
	pub width: f64,
	pub height: f64,
	/// Seconds since mount, drives the animated dash offset.
	pub flow_time: f64,
}

impl SkillTreeState {
	/// Builds the tree from input data: the center node at the canvas
	/// center, one ring of nodes per data ring, and an edge from each
	/// first-ring node to the center.
	pub fn new(data: &TreeData, width: f64, height: f64) -> Self {
		let center = Point::new(width / 2.0, height / 2.0);

		let mut nodes = vec![SkillNode {
			id: data.center.id.clone(),
			tier: Tier::Star,
			icon: data.center.icon.clone(),
			label: data.center.label.clone(),
			position: center,
		}];
		let mut edges = Vec::new();

		for (ring_index, ring) in data.rings.iter().enumerate() {
			let placed = place_on_ring(center, ring.radius, ring.tier, &ring.items);
			if ring_index == 0 {
				for node in &placed {
					edges.push(SkillEdge {
						id: format!("{}-{}", data.center.id, node.id),
						source: data.center.id.clone(),
						target: node.id.clone(),
					});
				}
			}
			nodes.extend(placed);
		}

		Self {
			nodes,
			edges,
			hovered: None,
			transform: ViewTransform { x: 0.0, y: 0.0, k: 1.0 },
			drag: DragState::default(),
			pan: PanState::default(),
			connect: ConnectState::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	/// Applies one pointer message: Enter moves to `hovering(id)`, Leave
	/// returns to idle. Messages apply as they arrive and the last writer
	/// wins; no queuing, no matching of a leave against the id it came from.
	pub fn on_hover(&mut self, message: HoverMessage) {
		match message.kind {
			HoverKind::Enter => self.hovered = Some(message.node_id),
			HoverKind::Leave => self.hovered = None,
		}
	}

	/// Folds node change descriptors into the canonical collection.
	pub fn on_nodes_change(&mut self, node_changes: &[NodeChange]) {
		changes::apply_node_changes(node_changes, &mut self.nodes);
	}

	/// Folds edge change descriptors into the canonical collection.
	pub fn on_edges_change(&mut self, edge_changes: &[EdgeChange]) {
		changes::apply_edge_changes(edge_changes, &mut self.edges);
	}

	/// Appends a user-drawn connection. No domain validation: any two
	/// nodes may be joined.
	pub fn on_connect(&mut self, connection: &Connection) {
		changes::add_edge(connection, &mut self.edges);
	}

	/// Removes a node together with its incident edges, the way the
	/// rendering surface expands a node deletion by default.
	pub fn remove_node(&mut self, id: &str) {
		let edge_removals: Vec<EdgeChange> = self
			.edges
			.iter()
			.filter(|e| e.source == id || e.target == id)
			.map(|e| EdgeChange::Remove { id: e.id.clone() })
			.collect();
		self.on_edges_change(&edge_removals);
		self.on_nodes_change(&[NodeChange::Remove { id: id.to_string() }]);
		if self.hovered.as_deref() == Some(id) {
			self.hovered = None;
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Node under the given screen position, if any. The last node drawn
	/// is checked first, so overlapping nodes resolve to the topmost one.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<&SkillNode> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes.iter().rev().find(|node| {
			let half = node.tier.half_size();
			(node.position.x - gx).abs() <= half && (node.position.y - gy).abs() <= half
		})
	}

	/// Connection anchor under the given screen position, if any.
	///
	/// Anchors sit on the vertical axis of each node: incoming above the
	/// shape, outgoing below it.
	pub fn anchor_at_position(&self, sx: f64, sy: f64) -> Option<(&SkillNode, Anchor)> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes.iter().rev().find_map(|node| {
			let half = node.tier.half_size();
			let candidates = [
				(Anchor::Incoming, node.position.y - half),
				(Anchor::Outgoing, node.position.y + half),
			];
			for (anchor, ay) in candidates {
				let (dx, dy) = (node.position.x - gx, ay - gy);
				if (dx * dx + dy * dy).sqrt() <= ANCHOR_HIT_RADIUS {
					return Some((node, anchor));
				}
			}
			None
		})
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::skill_tree::highlight::highlight_nodes;

	fn sample_state() -> SkillTreeState {
		SkillTreeState::new(&TreeData::sample(), 1200.0, 800.0)
	}

	fn selection(state: &SkillTreeState) -> Vec<(String, bool)> {
		highlight_nodes(&state.nodes, state.hovered.as_deref())
			.iter()
			.map(|v| (v.node.id.clone(), v.selected))
			.collect()
	}

	#[test]
	fn builds_center_plus_rings_with_unique_ids() {
		let state = sample_state();

		assert_eq!(state.nodes.len(), 10);
		assert_eq!(state.nodes[0].id, "star");
		assert_eq!(state.nodes[0].tier, Tier::Star);
		assert_eq!(state.nodes[0].position, Point::new(600.0, 400.0));

		let mut ids: Vec<&str> = state.nodes.iter().map(|n| n.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), 10);
	}

	#[test]
	fn connects_only_the_first_ring_to_the_center() {
		let state = sample_state();

		assert_eq!(state.edges.len(), 3);
		for edge in &state.edges {
			assert_eq!(edge.source, "star");
			assert_eq!(edge.id, format!("star-{}", edge.target));
		}
		let targets: Vec<&str> = state.edges.iter().map(|e| e.target.as_str()).collect();
		assert_eq!(targets, ["cyber", "programming", "network"]);
	}

	#[test]
	fn first_macro_lands_on_the_positive_x_axis() {
		let state = sample_state();
		let cyber = state.nodes.iter().find(|n| n.id == "cyber").unwrap();
		assert!((cyber.position.x - 800.0).abs() < 1e-9);
		assert!((cyber.position.y - 400.0).abs() < 1e-9);
	}

	#[test]
	fn starts_idle() {
		let state = sample_state();
		assert_eq!(state.hovered, None);
		assert!(selection(&state).iter().all(|(_, selected)| *selected));
	}

	#[test]
	fn hover_cycle_reproduces_the_initial_view() {
		let mut state = sample_state();
		let initial = selection(&state);

		state.on_hover(HoverMessage {
			node_id: "cyber".to_string(),
			kind: HoverKind::Enter,
		});
		assert_eq!(state.hovered.as_deref(), Some("cyber"));
		let hovering = selection(&state);
		assert_eq!(hovering.iter().filter(|(_, s)| *s).count(), 1);
		assert!(hovering.contains(&("cyber".to_string(), true)));

		state.on_hover(HoverMessage {
			node_id: "cyber".to_string(),
			kind: HoverKind::Leave,
		});
		assert_eq!(state.hovered, None);
		assert_eq!(selection(&state), initial);
	}

	#[test]
	fn last_hover_writer_wins() {
		let mut state = sample_state();

		state.on_hover(HoverMessage {
			node_id: "cyber".to_string(),
			kind: HoverKind::Enter,
		});
		state.on_hover(HoverMessage {
			node_id: "network".to_string(),
			kind: HoverKind::Enter,
		});
		assert_eq!(state.hovered.as_deref(), Some("network"));

		// A stale leave still clears: the leave is not matched to its id.
		state.on_hover(HoverMessage {
			node_id: "cyber".to_string(),
			kind: HoverKind::Leave,
		});
		assert_eq!(state.hovered, None);
	}

	#[test]
	fn hover_transition_synthesizes_leave_then_enter() {
		assert_eq!(hover_transition(None, None), Vec::new());
		assert_eq!(hover_transition(Some("a"), Some("a")), Vec::new());

		let enter = hover_transition(None, Some("a"));
		assert_eq!(enter.len(), 1);
		assert_eq!(enter[0].kind, HoverKind::Enter);
		assert_eq!(enter[0].node_id, "a");

		let swap = hover_transition(Some("a"), Some("b"));
		assert_eq!(swap.len(), 2);
		assert_eq!(swap[0], HoverMessage { node_id: "a".to_string(), kind: HoverKind::Leave });
		assert_eq!(swap[1], HoverMessage { node_id: "b".to_string(), kind: HoverKind::Enter });

		let leave = hover_transition(Some("b"), None);
		assert_eq!(leave.len(), 1);
		assert_eq!(leave[0].kind, HoverKind::Leave);
	}

	#[test]
	fn drag_updates_only_the_moved_node() {
		let mut state = sample_state();
		state.on_nodes_change(&[NodeChange::Position {
			id: "tcp".to_string(),
			position: Point::new(50.0, 60.0),
		}]);

		let tcp = state.nodes.iter().find(|n| n.id == "tcp").unwrap();
		assert_eq!(tcp.position, Point::new(50.0, 60.0));
		assert_eq!(state.nodes[0].position, Point::new(600.0, 400.0));
	}

	#[test]
	fn connect_is_permissive_and_deduplicated() {
		let mut state = sample_state();
		let before = state.edges.len();

		// A micro node straight to the center is allowed.
		let conn = Connection {
			source: "star".to_string(),
			target: "tcp".to_string(),
		};
		state.on_connect(&conn);
		assert_eq!(state.edges.len(), before + 1);

		state.on_connect(&conn);
		assert_eq!(state.edges.len(), before + 1);
	}

	#[test]
	fn removing_a_node_drops_its_incident_edges() {
		let mut state = sample_state();
		state.on_hover(HoverMessage {
			node_id: "cyber".to_string(),
			kind: HoverKind::Enter,
		});

		state.remove_node("cyber");

		assert!(state.nodes.iter().all(|n| n.id != "cyber"));
		assert!(state.edges.iter().all(|e| e.source != "cyber" && e.target != "cyber"));
		assert_eq!(state.edges.len(), 2);
		assert_eq!(state.hovered, None);
	}

	#[test]
	fn hit_testing_respects_the_view_transform() {
		let mut state = sample_state();

		assert_eq!(state.node_at_position(600.0, 400.0).map(|n| n.id.as_str()), Some("star"));
		assert_eq!(state.node_at_position(800.0, 400.0).map(|n| n.id.as_str()), Some("cyber"));
		assert_eq!(state.node_at_position(10.0, 10.0).map(|n| n.id.as_str()), None);

		state.transform = ViewTransform { x: 100.0, y: -40.0, k: 2.0 };
		let (gx, gy) = state.screen_to_graph(100.0 + 2.0 * 600.0, -40.0 + 2.0 * 400.0);
		assert!((gx - 600.0).abs() < 1e-9);
		assert!((gy - 400.0).abs() < 1e-9);
		assert_eq!(
			state.node_at_position(100.0 + 2.0 * 600.0, -40.0 + 2.0 * 400.0).map(|n| n.id.as_str()),
			Some("star")
		);
	}

	#[test]
	fn anchors_sit_above_and_below_the_node() {
		let state = sample_state();
		let half = Tier::Star.half_size();

		let incoming = state.anchor_at_position(600.0, 400.0 - half);
		assert!(matches!(incoming, Some((node, Anchor::Incoming)) if node.id == "star"));

		let outgoing = state.anchor_at_position(600.0, 400.0 + half);
		assert!(matches!(outgoing, Some((node, Anchor::Outgoing)) if node.id == "star"));

		assert_eq!(state.anchor_at_position(600.0, 400.0).map(|(n, _)| n.id.as_str()), None);
	}

	#[test]
	fn empty_ring_contributes_no_nodes() {
		let mut data = TreeData::sample();
		data.rings[2].items.clear();
		let state = SkillTreeState::new(&data, 1200.0, 800.0);
		assert_eq!(state.nodes.len(), 7);
		assert_eq!(state.edges.len(), 3);
	}
}
