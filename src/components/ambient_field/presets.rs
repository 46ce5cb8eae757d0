//! Per-section field parameters. The literals reproduce the look of each
//! section's canvas.

use super::types::{
	Backdrop, EdgeMode, FieldConfig, Glow, Layout, Linkage, Motion, NodeStyle, Rgb, SurfaceSize,
};

/// Drifting network with fading trails, sized to half the viewport.
pub fn hero() -> FieldConfig {
	FieldConfig {
		name: "hero",
		node_count: 15,
		layout: Layout::Scattered { speed: 0.5 },
		motion: Motion::Drift,
		radius: (2.0, 3.0),
		links: Linkage::Random { min: 1, max: 3 },
		link_color: Rgb::WHITE,
		link_alpha: 0.1,
		edges: EdgeMode::Bounce,
		backdrop: Backdrop::Fade {
			color: Rgb::BLACK,
			alpha: 0.05,
		},
		glow: Some(Glow {
			scale: 3.0,
			color: Rgb(160, 160, 160),
			alpha: 0.3,
			pulse: None,
			over: false,
			highlighted_only: false,
		}),
		node_style: NodeStyle::Disc { fill: Rgb::WHITE },
		highlight_ratio: 0.0,
		particle_count: 50,
		particle_speed: 0.3,
		particle_size: (0.5, 2.0),
		particle_color: Rgb::WHITE,
		particle_alpha: 0.5,
	}
}

pub const HERO_SURFACE: SurfaceSize = SurfaceSize::Viewport {
	width_frac: 0.5,
	height_frac: 1.0,
};

pub const AVATAR_IMAGE: &str = "/assets/avatar.svg";

/// Ring of audience avatars with flickering links and a few gold highlights.
pub fn network_demo() -> FieldConfig {
	FieldConfig {
		name: "network-demo",
		node_count: 12,
		layout: Layout::Ring {
			radius_frac: 0.35,
			jitter: None,
		},
		motion: Motion::Orbit {
			time_step: 0.02,
			amplitude: 3.0,
		},
		radius: (20.0, 0.0),
		links: Linkage::Flicker { probability: 0.5 },
		link_color: Rgb::WHITE,
		link_alpha: 0.15,
		edges: EdgeMode::Bounce,
		backdrop: Backdrop::Clear { color: Rgb::BLACK },
		glow: Some(Glow {
			scale: 2.0,
			color: Rgb::GOLD,
			alpha: 0.3,
			pulse: Some((5.0, 2.0)),
			over: false,
			highlighted_only: true,
		}),
		node_style: NodeStyle::Avatar {
			fill: "#2a2a2a",
			stroke: Rgb::WHITE,
			highlight_stroke: Rgb::GOLD,
			glyph: "👤",
		},
		highlight_ratio: 0.3,
		..FieldConfig::default()
	}
}

/// Slow orbiting cluster behind the dashboard mockup.
pub fn dashboard() -> FieldConfig {
	FieldConfig {
		name: "dashboard",
		node_count: 20,
		layout: Layout::Ring {
			radius_frac: 0.3,
			jitter: Some(0.3),
		},
		motion: Motion::Orbit {
			time_step: 0.01,
			amplitude: 2.0,
		},
		radius: (4.0, 3.0),
		links: Linkage::Proximity {
			max_distance: 150.0,
			alpha: 0.1,
		},
		link_color: Rgb::WHITE,
		link_alpha: 0.1,
		edges: EdgeMode::Bounce,
		backdrop: Backdrop::Clear {
			color: Rgb(26, 26, 26),
		},
		glow: Some(Glow {
			scale: 2.0,
			color: Rgb::WHITE,
			alpha: 0.2,
			pulse: None,
			over: true,
			highlighted_only: false,
		}),
		node_style: NodeStyle::Disc { fill: Rgb::WHITE },
		..FieldConfig::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preset_counts() {
		assert_eq!(hero().node_count, 15);
		assert_eq!(hero().particle_count, 50);
		assert_eq!(network_demo().node_count, 12);
		assert_eq!(network_demo().particle_count, 0);
		assert_eq!(dashboard().node_count, 20);
	}

	#[test]
	fn preset_names_are_distinct() {
		let names = [hero().name, network_demo().name, dashboard().name];
		assert_ne!(names[0], names[1]);
		assert_ne!(names[1], names[2]);
		assert_ne!(names[0], names[2]);
	}
}
