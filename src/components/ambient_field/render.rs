use std::f64::consts::PI;

use rand::Rng;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::state::AmbientField;
use super::types::{Glow, NodeStyle};

/// Whether an image can be drawn yet.
pub fn image_ready(img: &HtmlImageElement) -> bool {
	img.complete() && img.natural_width() > 0
}

pub fn render<R: Rng>(
	field: &AmbientField,
	ctx: &CanvasRenderingContext2d,
	rng: &mut R,
	image: Option<&HtmlImageElement>,
) {
	ctx.set_fill_style_str(&field.config.backdrop.style());
	ctx.fill_rect(0.0, 0.0, field.width, field.height);
	draw_links(field, ctx, rng);
	draw_nodes(field, ctx, image.filter(|img| image_ready(img)));
	draw_particles(field, ctx);
}

fn draw_links<R: Rng>(field: &AmbientField, ctx: &CanvasRenderingContext2d, rng: &mut R) {
	ctx.set_line_width(1.0);
	for link in field.links(rng) {
		let (Some(a), Some(b)) = (field.nodes.get(link.from), field.nodes.get(link.to)) else {
			continue;
		};
		ctx.set_stroke_style_str(&field.config.link_color.with_alpha(link.alpha));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_nodes(field: &AmbientField, ctx: &CanvasRenderingContext2d, image: Option<&HtmlImageElement>) {
	let glow = field.config.glow;
	for (i, node) in field.nodes.iter().enumerate() {
		let (x, y, r) = (node.x, node.y, node.radius);

		if let Some(g) = glow.filter(|g| !g.over) {
			draw_glow(field, ctx, i, &g);
		}

		match field.config.node_style {
			NodeStyle::Disc { fill } => {
				ctx.set_fill_style_str(&fill.with_alpha(1.0));
				ctx.begin_path();
				let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
				ctx.fill();
			}
			NodeStyle::Avatar {
				fill,
				stroke,
				highlight_stroke,
				glyph,
			} => {
				ctx.set_fill_style_str(fill);
				ctx.begin_path();
				let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
				ctx.fill();

				if let Some(img) = image {
					ctx.save();
					ctx.begin_path();
					let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
					ctx.clip();
					let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
						img,
						x - r,
						y - r,
						2.0 * r,
						2.0 * r,
					);
					ctx.restore();
				} else {
					ctx.set_fill_style_str("#ffffff");
					ctx.set_font("16px Arial");
					ctx.set_text_align("center");
					ctx.set_text_baseline("middle");
					let _ = ctx.fill_text(glyph, x, y);
				}

				let outline = if node.highlighted { highlight_stroke } else { stroke };
				ctx.set_stroke_style_str(&outline.with_alpha(1.0));
				ctx.set_line_width(2.0);
				ctx.begin_path();
				let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
				ctx.stroke();
			}
		}

		if let Some(g) = glow.filter(|g| g.over) {
			draw_glow(field, ctx, i, &g);
		}
	}
}

fn draw_glow(field: &AmbientField, ctx: &CanvasRenderingContext2d, idx: usize, glow: &Glow) {
	let (Some(radius), Some(node)) = (field.glow_radius(idx), field.nodes.get(idx)) else {
		return;
	};
	let Ok(gradient) = ctx.create_radial_gradient(node.x, node.y, 0.0, node.x, node.y, radius) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &glow.color.with_alpha(glow.alpha));
	let _ = gradient.add_color_stop(1.0, &glow.color.with_alpha(0.0));
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
	ctx.fill();
}

fn draw_particles(field: &AmbientField, ctx: &CanvasRenderingContext2d) {
	if field.particles.is_empty() {
		return;
	}
	ctx.set_fill_style_str(&field.config.particle_color.with_alpha(field.config.particle_alpha));
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, 2.0 * PI);
		ctx.fill();
	}
}
