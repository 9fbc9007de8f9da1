//! The SVG subtree behind one diagram: surface management, primitive
//! binding, and per-tick synchronization.

use web_sys::{Document, Element};

use super::error::{GraphError, js_err};
use super::state::{NODE_RADIUS, SimulationState};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Find the container's existing drawing surface, or create one sized
/// `width` x `height`. Calling this twice never duplicates the surface.
pub fn ensure_surface(
	document: &Document,
	container: &Element,
	width: f64,
	height: f64,
) -> Result<Element, GraphError> {
	if let Some(existing) = container.query_selector("svg").map_err(js_err)? {
		return Ok(existing);
	}
	let svg = document
		.create_element_ns(Some(SVG_NS), "svg")
		.map_err(js_err)?;
	svg.set_attribute("width", &width.to_string()).map_err(js_err)?;
	svg.set_attribute("height", &height.to_string()).map_err(js_err)?;
	container.append_child(&svg).map_err(js_err)?;
	Ok(svg)
}

/// The primitives bound to one simulation: one line per link and one
/// circle per node, both in simulation order.
pub struct Primitives {
	lines: Vec<Element>,
	circles: Vec<Element>,
}

/// Clear `svg` and bind fresh primitives for `state`.
pub fn bind(
	document: &Document,
	svg: &Element,
	state: &SimulationState,
) -> Result<Primitives, GraphError> {
	while let Some(child) = svg.first_child() {
		let _ = svg.remove_child(&child);
	}

	// Lines go in first so circles paint over them.
	let mut lines = Vec::with_capacity(state.link_count());
	for _ in 0..state.link_count() {
		let line = document
			.create_element_ns(Some(SVG_NS), "line")
			.map_err(js_err)?;
		line.set_attribute("class", "link").map_err(js_err)?;
		line.set_attribute("stroke", "#999").map_err(js_err)?;
		line.set_attribute("stroke-width", "1").map_err(js_err)?;
		svg.append_child(&line).map_err(js_err)?;
		lines.push(line);
	}

	let mut circles = Vec::with_capacity(state.node_count());
	for point in state.snapshot() {
		let circle = document
			.create_element_ns(Some(SVG_NS), "circle")
			.map_err(js_err)?;
		circle.set_attribute("class", "node").map_err(js_err)?;
		circle.set_attribute("r", &NODE_RADIUS.to_string()).map_err(js_err)?;
		circle.set_attribute("fill", point.color).map_err(js_err)?;
		circle.set_attribute("stroke", "#fff").map_err(js_err)?;
		circle.set_attribute("stroke-width", "1.5").map_err(js_err)?;

		// Native browser tooltip: the node's name.
		let title = document
			.create_element_ns(Some(SVG_NS), "title")
			.map_err(js_err)?;
		title.set_text_content(Some(&point.name));
		circle.append_child(&title).map_err(js_err)?;

		svg.append_child(&circle).map_err(js_err)?;
		circles.push(circle);
	}

	let primitives = Primitives { lines, circles };
	primitives.sync(state);
	Ok(primitives)
}

impl Primitives {
	/// Resynchronize every primitive with the simulation's current
	/// positions. Runs once per animation frame; attribute failures are
	/// ignored rather than allowed to kill the loop.
	pub fn sync(&self, state: &SimulationState) {
		let mut i = 0;
		state.graph.visit_edges(|source, target, _| {
			if let Some(line) = self.lines.get(i) {
				let _ = line.set_attribute("x1", &source.x().to_string());
				let _ = line.set_attribute("y1", &source.y().to_string());
				let _ = line.set_attribute("x2", &target.x().to_string());
				let _ = line.set_attribute("y2", &target.y().to_string());
			}
			i += 1;
		});

		let mut j = 0;
		state.graph.visit_nodes(|node| {
			if let Some(circle) = self.circles.get(j) {
				let _ = circle.set_attribute("cx", &node.x().to_string());
				let _ = circle.set_attribute("cy", &node.y().to_string());
			}
			j += 1;
		});
	}
}
