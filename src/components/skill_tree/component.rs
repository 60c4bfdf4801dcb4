//! Leptos component wrapping the skill tree canvas.
//!
//! The component creates an HTML canvas element and wires up mouse, wheel,
//! and keyboard handlers for hovering, node dragging, connecting, deleting,
//! panning, and zooming. An animation loop runs via `requestAnimationFrame`,
//! re-deriving the highlight views and redrawing each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent, Window};

use super::changes::{Connection, NodeChange};
use super::render;
use super::state::{Anchor, ConnectState, DragState, SkillTreeState, hover_transition};
use super::theme::Theme;
use super::types::{Point, TreeData};

/// Bundles tree state with the visual theme.
struct GraphContext {
	state: SkillTreeState,
	theme: Theme,
}

/// Renders an interactive radial skill tree on a canvas element.
///
/// Pass tree data via the reactive `data` signal. The component sizes
/// itself to its parent container by default; set `fullscreen = true` to
/// fill the viewport and resize automatically with the window. Explicit
/// `width`/`height` override automatic sizing.
#[component]
pub fn SkillTreeCanvas(
	#[prop(into)] data: Signal<TreeData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init, keydown_cb_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		keydown_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*context_init.borrow_mut() = Some(GraphContext {
			state: SkillTreeState::new(&data.get(), w, h),
			theme: Theme::default(),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		// Delete/Backspace removes the hovered node along with its edges.
		let context_key = context_init.clone();
		*keydown_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() != "Delete" && ev.key() != "Backspace" {
				return;
			}
			if let Some(ref mut c) = *context_key.borrow_mut() {
				if let Some(id) = c.state.hovered.clone() {
					c.state.remove_node(&id);
				}
			}
		}));
		if let Some(ref cb) = *keydown_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;
				c.state.tick(dt);
				render::render(&c.state, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			let anchor = c
				.state
				.anchor_at_position(x, y)
				.map(|(node, anchor)| (node.id.clone(), anchor));

			if let Some((source_id, Anchor::Outgoing)) = anchor {
				let (gx, gy) = c.state.screen_to_graph(x, y);
				c.state.connect.active = true;
				c.state.connect.source_id = Some(source_id);
				c.state.connect.cursor = Point::new(gx, gy);
			} else if let Some(node) = c.state.node_at_position(x, y) {
				let (node_id, node_start) = (node.id.clone(), node.position);
				c.state.drag.active = true;
				c.state.drag.node_id = Some(node_id);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				c.state.drag.node_start = node_start;
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.transform_start_x = c.state.transform.x;
				c.state.pan.transform_start_y = c.state.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.connect.active {
				let (gx, gy) = c.state.screen_to_graph(x, y);
				c.state.connect.cursor = Point::new(gx, gy);
			}

			// Hover tracking when not dragging: the hit test stands in for
			// the node views, reporting leave-then-enter messages.
			if !c.state.drag.active {
				let over = c.state.node_at_position(x, y).map(|n| n.id.clone());
				let previous = c.state.hovered.clone();
				for message in hover_transition(previous.as_deref(), over.as_deref()) {
					c.state.on_hover(message);
				}
			}

			if c.state.drag.active {
				if let Some(id) = c.state.drag.node_id.clone() {
					let (dx, dy) = (
						(x - c.state.drag.start_x) / c.state.transform.k,
						(y - c.state.drag.start_y) / c.state.transform.k,
					);
					let position = Point::new(
						c.state.drag.node_start.x + dx,
						c.state.drag.node_start.y + dy,
					);
					c.state.on_nodes_change(&[NodeChange::Position { id, position }]);
				}
			} else if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mu.borrow_mut() {
			if c.state.connect.active {
				let target = c.state.node_at_position(x, y).map(|n| n.id.clone());
				if let (Some(source), Some(target)) = (c.state.connect.source_id.clone(), target) {
					if source != target {
						c.state.on_connect(&Connection { source, target });
					}
				}
			}
			c.state.connect = ConnectState::default();
			c.state.drag = DragState::default();
			c.state.pan.active = false;
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.connect = ConnectState::default();
			c.state.drag = DragState::default();
			c.state.pan.active = false;

			let previous = c.state.hovered.clone();
			for message in hover_transition(previous.as_deref(), None) {
				c.state.on_hover(message);
			}
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-tree-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: default;"
		/>
	}
}
