/// A node in a submitted snapshot. The generated label is its only identity.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
}

/// A link in a submitted snapshot; `label` is the display text for the
/// edge weight.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub label: String,
}

/// Immutable node/link snapshot handed to the canvas at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// Display configuration consumed alongside a [`GraphData`] snapshot.
///
/// `node_size` is an area-like quantity (the drawn radius is derived from
/// it), `layout_gravity` is a d3-style negative charge, and
/// `layout_link_length` sets the radius of the ring nodes start out on.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub directed: bool,
	pub node_color: String,
	pub node_size: f64,
	pub highlight_color: String,
	pub link_label_visible: bool,
	pub font_size: f64,
	pub font_color: String,
	pub font_weight: String,
	pub canvas_height: f64,
	pub canvas_width: f64,
	pub layout_gravity: f64,
	pub layout_link_length: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			directed: false,
			node_color: "lightblue".to_owned(),
			node_size: 400.0,
			highlight_color: "blue".to_owned(),
			link_label_visible: true,
			font_size: 12.0,
			font_color: "black".to_owned(),
			font_weight: "bold".to_owned(),
			canvas_height: 600.0,
			canvas_width: 800.0,
			layout_gravity: -400.0,
			layout_link_length: 150.0,
		}
	}
}
