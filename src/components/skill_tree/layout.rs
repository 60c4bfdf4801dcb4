//! Radial ring layout.

use std::f64::consts::TAU;

use super::types::{Point, SkillItem, SkillNode, Tier};

/// Places `items` evenly on a circle of `radius` around `center`.
///
/// Item `i` of `n` sits at angle `i * 2π/n`, starting at angle 0 (the first
/// item lands at `(center.x + radius, center.y)`) with the angle increasing
/// with index. An empty slice yields an empty vector.
///
/// Pure: same inputs give the same output, so the function can be called
/// once per ring with a distinct radius.
pub fn place_on_ring(
	center: Point,
	radius: f64,
	tier: Tier,
	items: &[SkillItem],
) -> Vec<SkillNode> {
	let step = TAU / items.len() as f64;

	items
		.iter()
		.enumerate()
		.map(|(index, item)| {
			let angle = index as f64 * step;
			SkillNode {
				id: item.id.clone(),
				tier,
				icon: item.icon.clone(),
				label: item.label.clone(),
				position: Point::new(
					center.x + radius * angle.cos(),
					center.y + radius * angle.sin(),
				),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	fn items(n: usize) -> Vec<SkillItem> {
		(0..n)
			.map(|i| SkillItem {
				id: format!("item-{i}"),
				icon: "\u{2699}".to_string(),
				label: None,
			})
			.collect()
	}

	fn angle_of(center: Point, p: Point) -> f64 {
		(p.y - center.y).atan2(p.x - center.x).rem_euclid(TAU)
	}

	#[test]
	fn places_every_item_at_the_given_radius() {
		let center = Point::new(100.0, -50.0);
		for n in 1..=12 {
			let placed = place_on_ring(center, 75.0, Tier::Micro, &items(n));
			assert_eq!(placed.len(), n);
			for node in &placed {
				let dx = node.position.x - center.x;
				let dy = node.position.y - center.y;
				let dist = (dx * dx + dy * dy).sqrt();
				assert!((dist - 75.0).abs() < EPSILON, "n={n}: distance {dist}");
			}
		}
	}

	#[test]
	fn spaces_items_evenly_starting_at_angle_zero() {
		let center = Point::new(0.0, 0.0);
		let placed = place_on_ring(center, 10.0, Tier::Macro, &items(5));
		let step = TAU / 5.0;

		assert!((placed[0].position.x - 10.0).abs() < EPSILON);
		assert!(placed[0].position.y.abs() < EPSILON);

		for (i, node) in placed.iter().enumerate() {
			let angle = angle_of(center, node.position);
			let expected = (i as f64 * step).rem_euclid(TAU);
			assert!((angle - expected).abs() < EPSILON, "index {i}: angle {angle}");
		}
	}

	#[test]
	fn empty_input_yields_empty_output() {
		let placed = place_on_ring(Point::new(0.0, 0.0), 100.0, Tier::Category, &[]);
		assert!(placed.is_empty());
	}

	#[test]
	fn single_item_lands_on_the_positive_x_axis() {
		let placed = place_on_ring(Point::new(600.0, 400.0), 200.0, Tier::Macro, &items(1));
		assert_eq!(placed.len(), 1);
		assert!((placed[0].position.x - 800.0).abs() < EPSILON);
		assert!((placed[0].position.y - 400.0).abs() < EPSILON);
	}

	#[test]
	fn three_macros_match_reference_positions() {
		let placed = place_on_ring(Point::new(600.0, 400.0), 200.0, Tier::Macro, &items(3));

		let expected = [(800.0, 400.0), (500.0, 573.205_080_756_9), (500.0, 226.794_919_243_1)];
		for (node, (x, y)) in placed.iter().zip(expected) {
			assert!((node.position.x - x).abs() < 1e-6, "{} vs {x}", node.position.x);
			assert!((node.position.y - y).abs() < 1e-6, "{} vs {y}", node.position.y);
		}
	}

	#[test]
	fn placement_is_referentially_transparent() {
		let center = Point::new(32.0, 64.0);
		let input = items(7);
		let first = place_on_ring(center, 120.0, Tier::Category, &input);
		let second = place_on_ring(center, 120.0, Tier::Category, &input);
		assert_eq!(first, second);
	}

	#[test]
	fn carries_item_payload_and_tier_through() {
		let input = vec![SkillItem {
			id: "tcp".to_string(),
			icon: "\u{1f4d6}".to_string(),
			label: Some("TCP".to_string()),
		}];
		let placed = place_on_ring(Point::new(0.0, 0.0), 50.0, Tier::Micro, &input);
		assert_eq!(placed[0].id, "tcp");
		assert_eq!(placed[0].icon, "\u{1f4d6}");
		assert_eq!(placed[0].label.as_deref(), Some("TCP"));
		assert_eq!(placed[0].tier, Tier::Micro);
	}
}
