use leptos::prelude::*;

use graph_visualizer::App;

fn main() {
	graph_visualizer::init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
