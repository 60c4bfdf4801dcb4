//! skill-graph: Interactive radial skill-tree visualization.
//!
//! This crate provides a WASM-based skill tree component that renders a
//! central node with concentric rings of tiered nodes, hover-driven
//! highlighting, and free-form editing (drag, connect, delete) on an HTML
//! canvas.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::skill_tree::{SidePanel, SkillTreeCanvas, Theme, Tier, TreeData};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("skill-graph: logging initialized");
}

/// Load tree data from a script element with id="skill-tree-data".
/// Expected format: JSON with { center: {...}, rings: [...] }
fn load_tree_data() -> Option<TreeData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("skill-tree-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<TreeData>(&json_text) {
		Ok(data) => {
			info!(
				"skill-graph: loaded center '{}' with {} rings",
				data.center.id,
				data.rings.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("skill-graph: failed to parse tree data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads tree data from the DOM and renders the skill tree with its panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let tree = load_tree_data().unwrap_or_else(|| {
		info!("skill-graph: using built-in sample tree");
		TreeData::sample()
	});

	// First-ring items double as the panel listing.
	let areas: Vec<String> = tree
		.rings
		.first()
		.map(|ring| {
			ring.items
				.iter()
				.map(|item| item.label.clone().unwrap_or_else(|| item.id.clone()))
				.collect()
		})
		.unwrap_or_default();

	let tree_signal = Signal::derive(move || tree.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Skill Tree" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<SkillTreeCanvas data=tree_signal fullscreen=true />
			<div class="graph-overlay">
				<h1>"Skill Tree"</h1>
				<p class="subtitle">
					"Hover a node to spotlight its connections. Drag nodes, draw edges from the lower anchor, press Delete to remove."
				</p>
			</div>
			<SidePanel title="Focus areas" items=areas />
		</div>
	}
}
