//! Read-only side panel.

use leptos::prelude::*;

/// Renders a title and an ordered list of labels.
///
/// Purely presentational: the panel never feeds events back into the graph.
#[component]
pub fn SidePanel(
	/// Panel heading.
	#[prop(into)] title: String,
	/// Labels rendered as a list, in order.
	items: Vec<String>,
) -> impl IntoView {
	view! {
		<div class="side-panel">
			<h2>{title}</h2>
			<ul>
				{items
					.into_iter()
					.map(|item| view! { <li>{item}</li> })
					.collect_view()}
			</ul>
		</div>
	}
}
