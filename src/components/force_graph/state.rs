use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphConfig, GraphData};

/// Per-node payload carried inside the simulation graph.
#[derive(Clone, Debug, Default)]
pub struct NodeVisual {
	pub id: String,
}

/// A snapshot link resolved to simulation indices, with its weight label.
#[derive(Clone, Debug)]
pub struct LinkVisual {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hovered node plus its direct neighbors.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
}

/// Everything the canvas needs between frames: the running simulation, the
/// resolved links, the display configuration, and the interaction state.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeVisual, ()>,
	pub links: Vec<LinkVisual>,
	pub config: GraphConfig,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl ForceGraphState {
	/// Build a fresh simulation from a submitted snapshot. Nodes start on a
	/// ring around the graph-space origin; the view transform maps that
	/// origin to the canvas center.
	pub fn new(data: &GraphData, config: &GraphConfig) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			// d3-style gravity is a negative charge; fold its magnitude into
			// the simulator's repulsion term
			force_charge: (config.layout_gravity.abs() * 0.375) as f32,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let mut id_to_idx = HashMap::new();
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (config.layout_link_length * angle.cos()) as f32,
				y: (config.layout_link_length * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeVisual {
					id: node.id.clone(),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		let mut links = Vec::new();
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				links.push(LinkVisual {
					source: src,
					target: tgt,
					label: link.label.clone(),
				});
			}
		}

		Self {
			graph,
			links,
			transform: ViewTransform {
				x: config.canvas_width / 2.0,
				y: config.canvas_height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width: config.canvas_width,
			height: config.canvas_height,
			animation_running: true,
			config: config.clone(),
		}
	}

	/// Drawn node radius; the configured size is an area-like quantity.
	pub fn node_radius(&self) -> f64 {
		(self.config.node_size / PI).sqrt()
	}

	fn hit_radius(&self) -> f64 {
		self.node_radius() + 4.0
	}

	/// Current simulation positions keyed by node index.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut map = HashMap::new();
		self.graph.visit_nodes(|node| {
			map.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		map
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let hit = self.hit_radius();
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	/// Update the hovered node and recompute its neighbor set from the links.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for link in &self.links {
				if link.source == idx {
					self.hover.neighbors.insert(link.target);
				} else if link.target == idx {
					self.hover.neighbors.insert(link.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
