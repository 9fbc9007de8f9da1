use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::OrdinalScale;
use super::types::{ClusterId, Graph};

pub const NODE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 12.0;

/// Display attributes carried on each simulation node.
#[derive(Clone, Debug)]
pub struct NodeVisual {
	pub name: String,
	pub color: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
}

/// Index-ordered snapshot of one node, for binding and tests.
#[derive(Clone, Debug)]
pub struct NodePoint {
	pub x: f64,
	pub y: f64,
	pub name: String,
	pub color: &'static str,
}

/// The live force simulation behind one diagram.
pub struct SimulationState {
	pub graph: ForceGraph<NodeVisual, ()>,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	node_count: usize,
	link_count: usize,
}

impl SimulationState {
	/// Build the simulation for one validated graph document, assigning
	/// each node its color by looking its cluster up in the diagram's
	/// own scale.
	pub fn new(
		data: &Graph,
		scale: &mut OrdinalScale<ClusterId>,
		width: f64,
		height: f64,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let mut indices = Vec::with_capacity(data.nodes.len());
		for (i, node) in data.nodes.iter().enumerate() {
			// Seed on a circle around the center so the first ticks pull
			// the layout apart instead of exploding from a single point.
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			indices.push(graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeVisual {
					name: node.name.clone(),
					color: scale.color(&node.cluster),
				},
			}));
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(indices.get(link.source), indices.get(link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			drag: DragState::default(),
			width,
			height,
			node_count: data.nodes.len(),
			link_count: data.links.len(),
		}
	}

	pub fn node_count(&self) -> usize {
		self.node_count
	}

	pub fn link_count(&self) -> usize {
		self.link_count
	}

	/// Advance the simulation one step, keeping every node inside the
	/// surface bounds.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		let (min, max_x, max_y) = (
			NODE_RADIUS as f32,
			(self.width - NODE_RADIUS) as f32,
			(self.height - NODE_RADIUS) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			node.data.x = node.data.x.clamp(min, max_x);
			node.data.y = node.data.y.clamp(min, max_y);
		});
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Start dragging the node under the pointer, if any.
	pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
		match self.node_at_position(x, y) {
			Some(idx) => {
				self.drag = DragState {
					active: true,
					node_idx: Some(idx),
				};
				self.pin(idx, x, y);
				true
			}
			None => false,
		}
	}

	/// Pointer moved: keep the dragged node pinned under it.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				self.pin(idx, x, y);
			}
		}
	}

	/// Release the dragged node back into the simulation.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.drag.active = false;
	}

	fn pin(&mut self, idx: DefaultNodeIdx, x: f64, y: f64) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x as f32;
				node.data.y = y as f32;
				node.data.is_anchor = true;
			}
		});
	}

	/// Index-ordered positions and visuals, one entry per node.
	pub fn snapshot(&self) -> Vec<NodePoint> {
		let mut points = Vec::with_capacity(self.node_count);
		self.graph.visit_nodes(|node| {
			points.push(NodePoint {
				x: node.x() as f64,
				y: node.y() as f64,
				name: node.data.user_data.name.clone(),
				color: node.data.user_data.color,
			});
		});
		points
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const FIXTURE: &str =
		r#"{"nodes":[{"name":"a","cluster":0},{"name":"b","cluster":1}],"links":[{"source":0,"target":1}]}"#;

	fn build(json: &str) -> SimulationState {
		let graph = Graph::from_json(json).unwrap();
		let mut scale = OrdinalScale::category10();
		SimulationState::new(&graph, &mut scale, 800.0, 800.0)
	}

	#[test]
	fn one_simulation_node_per_document_node_and_link() {
		let state = build(FIXTURE);
		assert_eq!(state.node_count(), 2);
		assert_eq!(state.link_count(), 1);

		let points = state.snapshot();
		assert_eq!(points.len(), 2);
		assert_eq!(points[0].name, "a");
		assert_eq!(points[1].name, "b");
	}

	#[test]
	fn node_color_is_a_pure_function_of_the_cluster() {
		let state = build(
			r#"{"nodes":[{"name":"a","cluster":3},{"name":"b","cluster":5},{"name":"c","cluster":3}],"links":[]}"#,
		);
		let points = state.snapshot();
		assert_eq!(points[0].color, points[2].color);
		assert_ne!(points[0].color, points[1].color);
	}

	#[test]
	fn ticking_keeps_every_node_inside_the_surface() {
		let mut state = build(FIXTURE);
		for _ in 0..600 {
			state.tick(0.016);
		}
		for point in state.snapshot() {
			assert!(point.x >= NODE_RADIUS && point.x <= 800.0 - NODE_RADIUS);
			assert!(point.y >= NODE_RADIUS && point.y <= 800.0 - NODE_RADIUS);
		}
	}

	#[test]
	fn dragging_pins_the_node_under_the_pointer() {
		let mut state = build(FIXTURE);
		let start = state.snapshot()[0].clone();
		assert!(state.begin_drag(start.x, start.y));

		state.drag_to(120.0, 140.0);
		let moved = state.snapshot()[0].clone();
		assert_eq!((moved.x as f32, moved.y as f32), (120.0, 140.0));

		// Anchored nodes sit still through simulation steps.
		state.tick(0.016);
		let pinned = state.snapshot()[0].clone();
		assert_eq!((pinned.x as f32, pinned.y as f32), (120.0, 140.0));

		state.end_drag();
		assert!(!state.drag.active);
		assert!(state.drag.node_idx.is_none());
	}

	#[test]
	fn empty_space_starts_no_drag() {
		let mut state = build(FIXTURE);
		assert!(!state.begin_drag(-50.0, -50.0));
		assert!(state.drag.node_idx.is_none());
	}
}
