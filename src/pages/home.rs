use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;

use crate::components::force_graph::{ForceGraphCanvas, GraphConfig, GraphData};
use crate::model::GraphForm;

/// Blocking notice used for edge-validation failures.
fn notify(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// The visualizer page: node count and edge entry on top, the canvas below
/// once a graph has been submitted.
///
/// All state lives in one [`GraphForm`] signal; handlers forward raw field
/// text into it and the markup reads everything back out, so the model stays
/// the single source of truth.
#[component]
pub fn Home() -> impl IntoView {
	let form = RwSignal::new(GraphForm::default());
	let graph_data = RwSignal::new(GraphData::default());
	let graph_config = RwSignal::new(GraphConfig::default());

	let on_add_edge = move |_| {
		form.update(|f| {
			if let Err(err) = f.add_edge() {
				notify(&err.to_string());
			}
		});
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let (data, config) = form.with(|f| {
			(
				f.submit(),
				GraphConfig {
					directed: f.directed(),
					..GraphConfig::default()
				},
			)
		});
		info!(
			"visualizing graph: {} nodes, {} links",
			data.nodes.len(),
			data.links.len()
		);
		graph_config.set(config);
		graph_data.set(data);
	};

	// Both endpoint selects repopulate from the derived node list whenever
	// the count text changes.
	let node_options = move || {
		form.with(|f| f.node_list())
			.into_iter()
			.map(|label| {
				view! { <option value=label.clone()>{label.clone()}</option> }
			})
			.collect_view()
	};

	view! {
		<div class="app">
			<h1>"Graph Visualizer"</h1>
			<form on:submit=on_submit>
				<div class="form-group">
					<label for="num-nodes">"Number of Nodes:"</label>
					<input
						type="number"
						id="num-nodes"
						min="1"
						required
						prop:value=move || form.with(|f| f.node_count().to_owned())
						on:input=move |ev| {
							form.update(|f| f.set_node_count(event_target_value(&ev)))
						}
					/>
				</div>
				<div class="form-group">
					<label for="is-directed">"Directed:"</label>
					<input
						type="checkbox"
						id="is-directed"
						prop:checked=move || form.with(|f| f.directed())
						on:change=move |ev| {
							form.update(|f| f.set_directed(event_target_checked(&ev)))
						}
					/>
				</div>
				<div class="edge-form">
					<h3>"Add Edge"</h3>
					<div class="form-group">
						<label for="source">"Source:"</label>
						<select
							id="source"
							prop:value=move || form.with(|f| f.source().to_owned())
							on:change=move |ev| {
								form.update(|f| f.set_source(event_target_value(&ev)))
							}
						>
							<option value="">"Select Source"</option>
							{node_options}
						</select>
					</div>
					<div class="form-group">
						<label for="target">"Target:"</label>
						<select
							id="target"
							prop:value=move || form.with(|f| f.target().to_owned())
							on:change=move |ev| {
								form.update(|f| f.set_target(event_target_value(&ev)))
							}
						>
							<option value="">"Select Target"</option>
							{node_options}
						</select>
					</div>
					<div class="form-group">
						<label for="weight">"Weight:"</label>
						<input
							type="number"
							id="weight"
							required
							prop:value=move || form.with(|f| f.weight().to_owned())
							on:input=move |ev| {
								form.update(|f| f.set_weight(event_target_value(&ev)))
							}
						/>
					</div>
					<button type="button" on:click=on_add_edge>
						"Add Edge"
					</button>
				</div>
				<div class="current-edges">
					<h3>"Current Edges"</h3>
					<Show
						when=move || form.with(|f| !f.edges().is_empty())
						fallback=|| view! { <p>"No edges added yet."</p> }
					>
						<ul>
							{move || {
								form.with(|f| {
									let directed = f.directed();
									f.edges()
										.iter()
										.map(|edge| view! { <li>{edge.summary(directed)}</li> })
										.collect_view()
								})
							}}
						</ul>
					</Show>
				</div>
				<button type="submit" class="visualize-button">
					"Visualize Graph"
				</button>
			</form>
			<Show when=move || graph_data.with(|data| !data.nodes.is_empty())>
				<div class="graph-container">
					<h2>"Graph Visualization"</h2>
					<ForceGraphCanvas data=graph_data config=graph_config />
				</div>
			</Show>
		</div>
	}
}
