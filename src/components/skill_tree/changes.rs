//! Structural change descriptors and the folds that apply them.
//!
//! The rendering surface reports user edits (drag moves, new connections,
//! deletions) as plain descriptors; the controller folds them into its
//! canonical collections with these utilities. No domain validation happens
//! here: ids that match nothing are skipped silently.

use super::types::{Point, SkillEdge, SkillNode};

/// A structural change to the node collection.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeChange {
	/// A node was dragged to a new position.
	Position {
		/// Id of the moved node.
		id: String,
		/// New position in graph space.
		position: Point,
	},
	/// A node was removed.
	Remove {
		/// Id of the removed node.
		id: String,
	},
}

/// A structural change to the edge collection.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeChange {
	/// An edge was removed.
	Remove {
		/// Id of the removed edge.
		id: String,
	},
}

/// A user-drawn connection between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	/// Source node id (outgoing anchor the gesture started from).
	pub source: String,
	/// Target node id (node the gesture was released on).
	pub target: String,
}

/// Folds node changes into the collection, in order.
pub fn apply_node_changes(changes: &[NodeChange], nodes: &mut Vec<SkillNode>) {
	for change in changes {
		match change {
			NodeChange::Position { id, position } => {
				if let Some(node) = nodes.iter_mut().find(|n| n.id == *id) {
					node.position = *position;
				}
			}
			NodeChange::Remove { id } => nodes.retain(|n| n.id != *id),
		}
	}
}

/// Folds edge changes into the collection, in order.
pub fn apply_edge_changes(changes: &[EdgeChange], edges: &mut Vec<SkillEdge>) {
	for change in changes {
		match change {
			EdgeChange::Remove { id } => edges.retain(|e| e.id != *id),
		}
	}
}

/// Appends the edge described by `connection`.
///
/// The edge id is `"{source}-{target}"`, the same scheme the initial
/// center-to-ring edges use. Adding a connection whose id already exists is
/// a no-op.
pub fn add_edge(connection: &Connection, edges: &mut Vec<SkillEdge>) {
	let id = format!("{}-{}", connection.source, connection.target);
	if edges.iter().any(|e| e.id == id) {
		return;
	}
	edges.push(SkillEdge {
		id,
		source: connection.source.clone(),
		target: connection.target.clone(),
	});
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::skill_tree::types::Tier;

	fn node(id: &str, x: f64, y: f64) -> SkillNode {
		SkillNode {
			id: id.to_string(),
			tier: Tier::Micro,
			icon: "\u{1f4d6}".to_string(),
			label: None,
			position: Point::new(x, y),
		}
	}

	#[test]
	fn position_change_moves_the_named_node() {
		let mut nodes = vec![node("tcp", 0.0, 0.0), node("dns", 5.0, 5.0)];
		apply_node_changes(
			&[NodeChange::Position {
				id: "tcp".to_string(),
				position: Point::new(12.0, -3.0),
			}],
			&mut nodes,
		);
		assert_eq!(nodes[0].position, Point::new(12.0, -3.0));
		assert_eq!(nodes[1].position, Point::new(5.0, 5.0));
	}

	#[test]
	fn position_change_for_unknown_id_is_skipped() {
		let mut nodes = vec![node("tcp", 1.0, 2.0)];
		apply_node_changes(
			&[NodeChange::Position {
				id: "ghost".to_string(),
				position: Point::new(9.0, 9.0),
			}],
			&mut nodes,
		);
		assert_eq!(nodes[0].position, Point::new(1.0, 2.0));
	}

	#[test]
	fn remove_drops_the_named_node() {
		let mut nodes = vec![node("tcp", 0.0, 0.0), node("dns", 0.0, 0.0)];
		apply_node_changes(&[NodeChange::Remove { id: "tcp".to_string() }], &mut nodes);
		assert_eq!(nodes.len(), 1);
		assert_eq!(nodes[0].id, "dns");
	}

	#[test]
	fn edge_remove_drops_the_named_edge() {
		let mut edges = vec![SkillEdge {
			id: "star-cyber".to_string(),
			source: "star".to_string(),
			target: "cyber".to_string(),
		}];
		apply_edge_changes(&[EdgeChange::Remove { id: "star-cyber".to_string() }], &mut edges);
		assert!(edges.is_empty());
	}

	#[test]
	fn connect_appends_with_the_id_scheme() {
		let mut edges = Vec::new();
		add_edge(
			&Connection {
				source: "cyber".to_string(),
				target: "tcp".to_string(),
			},
			&mut edges,
		);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].id, "cyber-tcp");
		assert_eq!(edges[0].source, "cyber");
		assert_eq!(edges[0].target, "tcp");
	}

	#[test]
	fn duplicate_connect_is_a_no_op() {
		let mut edges = Vec::new();
		let conn = Connection {
			source: "a".to_string(),
			target: "b".to_string(),
		};
		add_edge(&conn, &mut edges);
		add_edge(&conn, &mut edges);
		assert_eq!(edges.len(), 1);
	}
}
