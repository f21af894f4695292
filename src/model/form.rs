use super::error::EdgeError;
use crate::components::force_graph::{GraphData, GraphLink, GraphNode};

/// A committed edge. Immutable once created; lives for the session only.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub source: String,
	pub target: String,
	pub weight: f64,
}

impl Edge {
	/// One-line rendering for the "Current Edges" list. The separator follows
	/// the directed flag at display time, not at commit time.
	pub fn summary(&self, directed: bool) -> String {
		let sep = if directed { "→" } else { "--" };
		format!("{} {} {} (Weight: {})", self.source, sep, self.target, self.weight)
	}
}

/// All form/session state for the visualizer page.
///
/// Nodes are never stored: the node set is re-derived from the raw count text
/// by [`GraphForm::node_list`] on every read, so there is always at least one
/// node no matter what the user typed. Edges are append-only and go through
/// [`GraphForm::add_edge`] validation before they are committed.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphForm {
	node_count: String,
	directed: bool,
	source: String,
	target: String,
	weight: String,
	edges: Vec<Edge>,
}

impl Default for GraphForm {
	fn default() -> Self {
		Self {
			node_count: "3".to_owned(),
			directed: false,
			source: String::new(),
			target: String::new(),
			weight: String::new(),
			edges: Vec::new(),
		}
	}
}

impl GraphForm {
	/// Raw node-count text as typed. Normalized only at read time.
	pub fn node_count(&self) -> &str {
		&self.node_count
	}

	pub fn directed(&self) -> bool {
		self.directed
	}

	/// Pending source node label; empty while the placeholder is selected.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Pending target node label; empty while the placeholder is selected.
	pub fn target(&self) -> &str {
		&self.target
	}

	/// Pending weight text, unparsed.
	pub fn weight(&self) -> &str {
		&self.weight
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Store the count text as-is; invalid input is recovered at read time
	/// rather than surfaced.
	pub fn set_node_count(&mut self, text: impl Into<String>) {
		self.node_count = text.into();
	}

	/// Only affects future rendering and the edge-list separator; committed
	/// edges carry no directedness of their own.
	pub fn set_directed(&mut self, directed: bool) {
		self.directed = directed;
	}

	pub fn set_source(&mut self, label: impl Into<String>) {
		self.source = label.into();
	}

	pub fn set_target(&mut self, label: impl Into<String>) {
		self.target = label.into();
	}

	pub fn set_weight(&mut self, text: impl Into<String>) {
		self.weight = text.into();
	}

	/// Derive the node labels from the current count text: `"Node 1"` through
	/// `"Node k"` where `k = max(1, parsed count)`. Pure; called both to fill
	/// the endpoint selects and to build the submitted snapshot.
	pub fn node_list(&self) -> Vec<String> {
		(1..=self.parsed_node_count())
			.map(|i| format!("Node {i}"))
			.collect()
	}

	fn parsed_node_count(&self) -> usize {
		match parse_int_prefix(&self.node_count) {
			Some(n) if n >= 1 => n as usize,
			_ => 1,
		}
	}

	/// Validate the pending fields and commit them as one edge.
	///
	/// Checks run in a fixed order (endpoints, self-loop, weight presence,
	/// weight parse, duplicate) and the first failure wins. Failures leave
	/// every field exactly as it was; success appends the edge and clears the
	/// pending source, target, and weight.
	pub fn add_edge(&mut self) -> Result<(), EdgeError> {
		if self.source.is_empty() || self.target.is_empty() {
			return Err(EdgeError::MissingEndpoint);
		}
		if self.source == self.target {
			return Err(EdgeError::SelfLoop);
		}
		if self.weight.is_empty() {
			return Err(EdgeError::MissingWeight);
		}
		let weight: f64 = self
			.weight
			.trim()
			.parse()
			.ok()
			.filter(|w: &f64| w.is_finite())
			.ok_or(EdgeError::NonNumericWeight)?;
		// Duplicates are keyed on endpoints alone. The directed flag does not
		// participate, so a second A→B is rejected in either mode while B→A
		// stays legal.
		if self
			.edges
			.iter()
			.any(|e| e.source == self.source && e.target == self.target)
		{
			return Err(EdgeError::DuplicateEdge);
		}
		self.edges.push(Edge {
			source: std::mem::take(&mut self.source),
			target: std::mem::take(&mut self.target),
			weight,
		});
		self.weight.clear();
		Ok(())
	}

	/// Derive the renderable snapshot from the node list and the committed
	/// edges as they stand right now. Pure; the snapshot does not track later
	/// edits, the caller republishes by calling this again.
	pub fn submit(&self) -> GraphData {
		GraphData {
			nodes: self
				.node_list()
				.into_iter()
				.map(|id| GraphNode { id })
				.collect(),
			links: self
				.edges
				.iter()
				.map(|e| GraphLink {
					source: e.source.clone(),
					target: e.target.clone(),
					label: e.weight.to_string(),
				})
				.collect(),
		}
	}
}

/// Base-10 integer prefix parse: leading whitespace is skipped, an optional
/// sign is honored, and scanning stops at the first non-digit, so `"3.7"`
/// reads as 3. No leading digits means no value. Overflow saturates.
fn parse_int_prefix(text: &str) -> Option<i64> {
	let rest = text.trim_start();
	let (negative, rest) = match rest.as_bytes().first() {
		Some(b'-') => (true, &rest[1..]),
		Some(b'+') => (false, &rest[1..]),
		_ => (false, rest),
	};
	let mut value: i64 = 0;
	let mut any = false;
	for b in rest.bytes() {
		if !b.is_ascii_digit() {
			break;
		}
		any = true;
		value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
	}
	if !any {
		return None;
	}
	Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled(source: &str, target: &str, weight: &str) -> GraphForm {
		let mut form = GraphForm::default();
		form.set_source(source);
		form.set_target(target);
		form.set_weight(weight);
		form
	}

	#[test]
	fn starts_with_three_nodes() {
		let form = GraphForm::default();
		assert_eq!(form.node_count(), "3");
		assert_eq!(form.node_list().len(), 3);
	}

	#[test]
	fn node_list_labels_are_ordinal() {
		let form = GraphForm::default();
		assert_eq!(form.node_list(), vec!["Node 1", "Node 2", "Node 3"]);
	}

	#[test]
	fn empty_count_falls_back_to_one() {
		let mut form = GraphForm::default();
		form.set_node_count("");
		assert_eq!(form.node_list(), vec!["Node 1"]);
	}

	#[test]
	fn garbage_count_falls_back_to_one() {
		let mut form = GraphForm::default();
		for text in ["abc", ".", "-", "+", " x7"] {
			form.set_node_count(text);
			assert_eq!(form.node_list().len(), 1, "count text {text:?}");
		}
	}

	#[test]
	fn zero_and_negative_counts_fall_back_to_one() {
		let mut form = GraphForm::default();
		for text in ["0", "-4"] {
			form.set_node_count(text);
			assert_eq!(form.node_list().len(), 1, "count text {text:?}");
		}
	}

	#[test]
	fn count_parses_integer_prefix() {
		let mut form = GraphForm::default();
		form.set_node_count("3.7");
		assert_eq!(form.node_list().len(), 3);
		form.set_node_count("12abc");
		assert_eq!(form.node_list().len(), 12);
		form.set_node_count("  5");
		assert_eq!(form.node_list().len(), 5);
		form.set_node_count("+2");
		assert_eq!(form.node_list().len(), 2);
	}

	#[test]
	fn add_edge_requires_both_endpoints() {
		let mut form = filled("", "Node 2", "5");
		assert_eq!(form.add_edge(), Err(EdgeError::MissingEndpoint));
		assert!(form.edges().is_empty());

		let mut form = filled("Node 1", "", "5");
		assert_eq!(form.add_edge(), Err(EdgeError::MissingEndpoint));
		assert!(form.edges().is_empty());
	}

	#[test]
	fn add_edge_rejects_self_loops() {
		let mut form = filled("Node 1", "Node 1", "2");
		assert_eq!(form.add_edge(), Err(EdgeError::SelfLoop));
		assert!(form.edges().is_empty());
	}

	#[test]
	fn add_edge_requires_weight() {
		let mut form = filled("Node 1", "Node 2", "");
		assert_eq!(form.add_edge(), Err(EdgeError::MissingWeight));
		assert!(form.edges().is_empty());
	}

	#[test]
	fn add_edge_rejects_non_numeric_weight() {
		for weight in ["abc", "  ", "1.2.3", "5px"] {
			let mut form = filled("Node 1", "Node 2", weight);
			assert_eq!(
				form.add_edge(),
				Err(EdgeError::NonNumericWeight),
				"weight text {weight:?}"
			);
			assert!(form.edges().is_empty());
		}
	}

	#[test]
	fn add_edge_rejects_non_finite_weight() {
		for weight in ["inf", "-inf", "NaN"] {
			let mut form = filled("Node 1", "Node 2", weight);
			assert_eq!(
				form.add_edge(),
				Err(EdgeError::NonNumericWeight),
				"weight text {weight:?}"
			);
		}
	}

	#[test]
	fn failed_add_preserves_pending_fields() {
		let mut form = filled("Node 2", "Node 2", "7");
		assert!(form.add_edge().is_err());
		assert_eq!(form.source(), "Node 2");
		assert_eq!(form.target(), "Node 2");
		assert_eq!(form.weight(), "7");
	}

	#[test]
	fn successful_add_commits_and_clears_fields() {
		let mut form = filled("Node 1", "Node 2", "2.5");
		assert_eq!(form.add_edge(), Ok(()));
		assert_eq!(
			form.edges(),
			&[Edge {
				source: "Node 1".to_owned(),
				target: "Node 2".to_owned(),
				weight: 2.5,
			}]
		);
		assert_eq!(form.source(), "");
		assert_eq!(form.target(), "");
		assert_eq!(form.weight(), "");
	}

	#[test]
	fn duplicate_edge_rejected_whatever_the_directed_flag() {
		let mut form = filled("Node 1", "Node 2", "5");
		assert_eq!(form.add_edge(), Ok(()));

		form.set_directed(true);
		form.set_source("Node 1");
		form.set_target("Node 2");
		form.set_weight("9");
		assert_eq!(form.add_edge(), Err(EdgeError::DuplicateEdge));

		form.set_directed(false);
		assert_eq!(form.add_edge(), Err(EdgeError::DuplicateEdge));
		assert_eq!(form.edges().len(), 1);
	}

	#[test]
	fn reversed_edge_is_not_a_duplicate() {
		let mut form = filled("Node 1", "Node 2", "5");
		assert_eq!(form.add_edge(), Ok(()));
		form.set_source("Node 2");
		form.set_target("Node 1");
		form.set_weight("5");
		assert_eq!(form.add_edge(), Ok(()));
		assert_eq!(form.edges().len(), 2);
	}

	#[test]
	fn submit_snapshot_matches_state_at_call_time() {
		let mut form = filled("Node 1", "Node 2", "5");
		assert_eq!(form.add_edge(), Ok(()));

		let snapshot = form.submit();
		assert_eq!(snapshot.nodes.len(), 3);
		assert_eq!(snapshot.nodes[0].id, "Node 1");
		assert_eq!(snapshot.links.len(), 1);
		assert_eq!(snapshot.links[0].source, "Node 1");
		assert_eq!(snapshot.links[0].target, "Node 2");
		assert_eq!(snapshot.links[0].label, "5");
	}

	#[test]
	fn submit_with_no_edges_yields_nodes_only() {
		let form = GraphForm::default();
		let snapshot = form.submit();
		assert!(!snapshot.nodes.is_empty());
		assert!(snapshot.links.is_empty());
	}

	#[test]
	fn snapshot_does_not_track_later_edits() {
		let mut form = GraphForm::default();
		let snapshot = form.submit();
		form.set_node_count("10");
		assert_eq!(snapshot.nodes.len(), 3);
		assert_eq!(form.submit().nodes.len(), 10);
	}

	#[test]
	fn fractional_weights_keep_their_textual_form() {
		let mut form = filled("Node 1", "Node 2", "2.5");
		assert_eq!(form.add_edge(), Ok(()));
		form.set_source("Node 2");
		form.set_target("Node 3");
		form.set_weight("5.0");
		assert_eq!(form.add_edge(), Ok(()));

		let snapshot = form.submit();
		assert_eq!(snapshot.links[0].label, "2.5");
		// whole-valued floats lose the trailing ".0" when displayed
		assert_eq!(snapshot.links[1].label, "5");
	}

	#[test]
	fn edge_summary_separator_follows_directedness() {
		let edge = Edge {
			source: "Node 1".to_owned(),
			target: "Node 2".to_owned(),
			weight: 5.0,
		};
		assert_eq!(edge.summary(false), "Node 1 -- Node 2 (Weight: 5)");
		assert_eq!(edge.summary(true), "Node 1 → Node 2 (Weight: 5)");
	}

	#[test]
	fn error_notices_name_the_problem() {
		assert_eq!(
			EdgeError::MissingEndpoint.to_string(),
			"Please select both source and target nodes."
		);
		assert_eq!(
			EdgeError::DuplicateEdge.to_string(),
			"This edge already exists."
		);
	}
}
