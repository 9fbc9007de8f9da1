use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use super::error::GraphError;
use super::fetch;
use super::scale::OrdinalScale;
use super::state::SimulationState;
use super::svg::{self, Primitives};

/// Surface size shared by every diagram.
pub const SURFACE_SIZE: f64 = 800.0;

/// Everything that distinguishes one diagram from the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramConfig {
	pub container_id: &'static str,
	pub resource_url: &'static str,
	pub title: &'static str,
}

/// One interactive force-directed diagram: fetches a precomputed graph
/// document, binds it into an SVG surface inside the component's own
/// container, and keeps the primitives in step with the simulation.
#[component]
pub fn ClusterGraph(config: DiagramConfig) -> impl IntoView {
	let panel_ref = NodeRef::<leptos::html::Div>::new();
	let (load_error, set_load_error) = signal(None::<String>);
	let state: Rc<RefCell<Option<SimulationState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	let container_id = config.container_id;
	let resource_url = config.resource_url;

	Effect::new(move |_| {
		let (state, animate) = (state_init.clone(), animate_init.clone());
		spawn_local(async move {
			match build_diagram(container_id, resource_url, &state).await {
				Ok(primitives) => start_loop(state, animate, primitives),
				Err(err) => {
					log::error!("{container_id}: {err}");
					set_load_error.set(Some(err.to_string()));
				}
			}
		});
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(panel_ref, &ev) else {
			return;
		};
		if let Some(ref mut sim) = *state_md.borrow_mut() {
			sim.begin_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(panel_ref, &ev) else {
			return;
		};
		if let Some(ref mut sim) = *state_mm.borrow_mut() {
			sim.drag_to(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut sim) = *state_mu.borrow_mut() {
			sim.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut sim) = *state_ml.borrow_mut() {
			sim.end_drag();
		}
	};

	view! {
		<figure class="cluster-graph">
			<figcaption>{config.title}</figcaption>
			<div
				class="graph-panel"
				id=container_id
				node_ref=panel_ref
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				style="cursor: grab;"
			></div>
			{move || {
				load_error
					.get()
					.map(|message| view! { <p class="graph-error">{message}</p> })
			}}
		</figure>
	}
}

/// Ensure the surface, fetch the document, and bind its primitives.
/// The simulation lands in `state` only once everything succeeded.
async fn build_diagram(
	container_id: &str,
	resource_url: &str,
	state: &Rc<RefCell<Option<SimulationState>>>,
) -> Result<Primitives, GraphError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| GraphError::Dom("no document".into()))?;
	let container = document
		.get_element_by_id(container_id)
		.ok_or_else(|| GraphError::MissingContainer(container_id.into()))?;
	let surface = svg::ensure_surface(&document, &container, SURFACE_SIZE, SURFACE_SIZE)?;

	let graph = fetch::load_graph(resource_url).await?;

	let mut scale = OrdinalScale::category10();
	let sim = SimulationState::new(&graph, &mut scale, SURFACE_SIZE, SURFACE_SIZE);
	let primitives = svg::bind(&document, &surface, &sim)?;
	*state.borrow_mut() = Some(sim);
	Ok(primitives)
}

/// Tick-and-sync on every animation frame, forever.
fn start_loop(
	state: Rc<RefCell<Option<SimulationState>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	primitives: Primitives,
) {
	let animate_inner = animate.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut sim) = *state.borrow_mut() {
			sim.tick(0.016);
			primitives.sync(sim);
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(window) = web_sys::window() {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		if let Some(window) = web_sys::window() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}
}

fn pointer_position(
	panel_ref: NodeRef<leptos::html::Div>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let panel: web_sys::HtmlDivElement = panel_ref.get()?.into();
	let rect = panel.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
