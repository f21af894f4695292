use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

const BACKGROUND: &str = "#fafafa";
const LINK_COLOR: &str = "#999999";
// Alpha applied to everything outside the hovered neighborhood.
const DIM_ALPHA: f64 = 0.25;

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let positions = state.positions();
	let k = state.transform.k;
	let radius = state.node_radius();
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);
	let dimming = state.has_active_highlight();

	for link in &state.links {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&link.source), positions.get(&link.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		let highlighted = state.is_highlighted(link.source) && state.is_highlighted(link.target);
		let stroke = if highlighted {
			state.config.highlight_color.as_str()
		} else {
			LINK_COLOR
		};
		ctx.set_global_alpha(if dimming && !highlighted { DIM_ALPHA } else { 1.0 });

		// Stop short of the circles so an arrowhead sits on the target's rim.
		let head = if state.config.directed { arrow_size } else { 0.0 };
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(line_width);
		ctx.begin_path();
		ctx.move_to(x1 + ux * radius, y1 + uy * radius);
		ctx.line_to(x2 - ux * (radius + head), y2 - uy * (radius + head));
		ctx.stroke();

		if state.config.directed {
			ctx.set_fill_style_str(stroke);
			let (tip_x, tip_y) = (x2 - ux * radius, y2 - uy * radius);
			let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
			let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}

		if state.config.link_label_visible {
			let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
			ctx.set_fill_style_str(&state.config.font_color);
			ctx.set_font(&format!(
				"{} {}px sans-serif",
				state.config.font_weight,
				state.config.font_size / k.max(0.5),
			));
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&link.label, mx, my - 4.0 / k);
			ctx.set_text_align("start");
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let radius = state.node_radius();
	let dimming = state.has_active_highlight();

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (x, y) = (node.x() as f64, node.y() as f64);
		let highlighted = state.is_highlighted(idx);
		ctx.set_global_alpha(if dimming && !highlighted { DIM_ALPHA } else { 1.0 });

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&state.config.node_color);
		ctx.fill();

		if highlighted {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 1.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&state.config.highlight_color);
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(&state.config.font_color);
		ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
		let _ = ctx.fill_text(&node.data.user_data.id, x + radius + 4.0, y + 3.0);
	});
	ctx.set_global_alpha(1.0);
}
