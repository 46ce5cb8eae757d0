use std::f64::consts::PI;

use rand::Rng;

use super::types::{EdgeMode, FieldConfig, Layout, Linkage, Motion};

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub home_x: f64,
	pub home_y: f64,
	pub radius: f64,
	pub phase: f64,
	pub highlighted: bool,
	/// Indices of linked nodes, fixed at initialization.
	pub connections: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
}

/// A line segment to stroke this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: usize,
	pub to: usize,
	pub alpha: f64,
}

pub struct AmbientField {
	pub config: FieldConfig,
	pub nodes: Vec<Node>,
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	pub time: f64,
}

impl AmbientField {
	pub fn new<R: Rng>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let (width, height) = (width.max(0.0), height.max(0.0));
		let mut nodes: Vec<Node> = (0..config.node_count)
			.map(|i| seed_node(&config, i, width, height, rng))
			.collect();

		if let Linkage::Random { min, max } = config.links {
			let n = nodes.len();
			for (i, node) in nodes.iter_mut().enumerate() {
				let count = rng.random_range(min..=max.max(min));
				for _ in 0..count {
					// A roll that lands on the node itself is dropped, not re-rolled.
					let target = rng.random_range(0..n);
					if target != i {
						node.connections.push(target);
					}
				}
			}
		}

		let particles = (0..config.particle_count)
			.map(|_| Particle {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				vx: (rng.random::<f64>() - 0.5) * config.particle_speed,
				vy: (rng.random::<f64>() - 0.5) * config.particle_speed,
				size: config.particle_size.0 + rng.random::<f64>() * config.particle_size.1,
			})
			.collect();

		Self {
			config,
			nodes,
			particles,
			width,
			height,
			time: 0.0,
		}
	}

	pub fn tick(&mut self) {
		let (w, h, edges) = (self.width, self.height, self.config.edges);

		match self.config.motion {
			Motion::Drift => {
				for node in &mut self.nodes {
					advance(&mut node.x, &mut node.vx, w, edges);
					advance(&mut node.y, &mut node.vy, h, edges);
				}
			}
			Motion::Orbit {
				time_step,
				amplitude,
			} => {
				self.time += time_step;
				for (i, node) in self.nodes.iter_mut().enumerate() {
					let t = self.time + i as f64;
					node.x = node.home_x + t.sin() * amplitude;
					node.y = node.home_y + t.cos() * amplitude;
				}
			}
		}

		for p in &mut self.particles {
			advance(&mut p.x, &mut p.vx, w, edges);
			advance(&mut p.y, &mut p.vy, h, edges);
		}
	}

	/// Only the surface changes; entities keep their coordinates.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
	}

	pub fn links<R: Rng>(&self, rng: &mut R) -> Vec<Link> {
		let base = self.config.link_alpha;
		match self.config.links {
			Linkage::None => Vec::new(),
			Linkage::Random { .. } => self
				.nodes
				.iter()
				.enumerate()
				.flat_map(|(i, node)| {
					node.connections.iter().map(move |&to| Link {
						from: i,
						to,
						alpha: base,
					})
				})
				.collect(),
			Linkage::Flicker { probability } => {
				let mut out = Vec::new();
				for i in 0..self.nodes.len() {
					for j in (i + 1)..self.nodes.len() {
						if rng.random::<f64>() < probability {
							out.push(Link {
								from: i,
								to: j,
								alpha: base,
							});
						}
					}
				}
				out
			}
			Linkage::Proximity {
				max_distance,
				alpha,
			} => {
				let mut out = Vec::new();
				for (i, a) in self.nodes.iter().enumerate() {
					for (j, b) in self.nodes.iter().enumerate().skip(i + 1) {
						let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
						if dist < max_distance {
							out.push(Link {
								from: i,
								to: j,
								alpha: base * alpha * (1.0 - dist / max_distance),
							});
						}
					}
				}
				out
			}
		}
	}

	/// Halo radius for a node, or `None` when it gets no halo.
	pub fn glow_radius(&self, idx: usize) -> Option<f64> {
		let glow = self.config.glow?;
		let node = self.nodes.get(idx)?;
		if glow.highlighted_only && !node.highlighted {
			return None;
		}
		let pulse = glow
			.pulse
			.map(|(amp, freq)| (self.time * freq + node.phase).sin() * amp)
			.unwrap_or(0.0);
		Some((node.radius * glow.scale + pulse).max(0.0))
	}
}

fn seed_node<R: Rng>(
	config: &FieldConfig,
	i: usize,
	width: f64,
	height: f64,
	rng: &mut R,
) -> Node {
	let (x, y, vx, vy) = match config.layout {
		Layout::Scattered { speed } => (
			rng.random::<f64>() * width,
			rng.random::<f64>() * height,
			(rng.random::<f64>() - 0.5) * speed,
			(rng.random::<f64>() - 0.5) * speed,
		),
		Layout::Ring {
			radius_frac,
			jitter,
		} => {
			let angle = i as f64 / config.node_count as f64 * 2.0 * PI;
			let ring = width.min(height) * radius_frac;
			let r = match jitter {
				Some(j) => ring * (j + rng.random::<f64>() * (1.0 - j)),
				None => ring,
			};
			(
				(width / 2.0 + angle.cos() * r).clamp(0.0, width),
				(height / 2.0 + angle.sin() * r).clamp(0.0, height),
				0.0,
				0.0,
			)
		}
	};

	Node {
		x,
		y,
		vx,
		vy,
		home_x: x,
		home_y: y,
		radius: config.radius.0 + rng.random::<f64>() * config.radius.1,
		phase: rng.random::<f64>() * 2.0 * PI,
		highlighted: rng.random::<f64>() < config.highlight_ratio,
		connections: Vec::new(),
	}
}

/// Moves one axis by its velocity and applies the edge rule.
///
/// Bouncing points the velocity back inside and clamps the position into
/// `[0, bound]`, so an entity left outside by a shrinking surface is pulled
/// back in on its next step.
pub fn advance(pos: &mut f64, vel: &mut f64, bound: f64, edges: EdgeMode) {
	*pos += *vel;
	match edges {
		EdgeMode::Bounce => {
			if *pos < 0.0 {
				*vel = vel.abs();
				*pos = 0.0;
			} else if *pos > bound {
				*vel = -vel.abs();
				*pos = bound.max(0.0);
			}
		}
		EdgeMode::Wrap => {
			if bound > 0.0 {
				*pos = pos.rem_euclid(bound);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::ambient_field::presets;
	use crate::components::ambient_field::types::{Glow, Rgb};

	fn in_bounds(field: &AmbientField) -> bool {
		let inside = |x: f64, y: f64| {
			(0.0..=field.width).contains(&x) && (0.0..=field.height).contains(&y)
		};
		field.nodes.iter().all(|n| inside(n.x, n.y))
			&& field.particles.iter().all(|p| inside(p.x, p.y))
	}

	#[test]
	fn init_produces_exact_counts_inside_bounds() {
		for n in [0, 1, 7, 64] {
			let config = FieldConfig {
				node_count: n,
				particle_count: n * 2,
				links: Linkage::Random { min: 1, max: 3 },
				..FieldConfig::default()
			};
			let mut rng = SmallRng::seed_from_u64(n as u64);
			let field = AmbientField::new(config, 320.0, 200.0, &mut rng);
			assert_eq!(field.nodes.len(), n);
			assert_eq!(field.particles.len(), n * 2);
			assert!(in_bounds(&field));
		}
	}

	#[test]
	fn presets_start_inside_bounds() {
		let mut rng = SmallRng::seed_from_u64(7);
		for config in [presets::hero(), presets::network_demo(), presets::dashboard()] {
			let expected = config.node_count;
			let field = AmbientField::new(config, 800.0, 600.0, &mut rng);
			assert_eq!(field.nodes.len(), expected);
			assert!(in_bounds(&field));
		}
	}

	#[test]
	fn zero_sized_surface_is_harmless() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut field = AmbientField::new(presets::hero(), 0.0, 0.0, &mut rng);
		field.tick();
		assert!(in_bounds(&field));
		let mut ring = AmbientField::new(presets::dashboard(), 0.0, 0.0, &mut rng);
		ring.tick();
		assert_eq!(ring.nodes.len(), 20);
	}

	#[test]
	fn same_seed_same_layout() {
		let a = AmbientField::new(presets::hero(), 640.0, 480.0, &mut SmallRng::seed_from_u64(42));
		let b = AmbientField::new(presets::hero(), 640.0, 480.0, &mut SmallRng::seed_from_u64(42));
		assert_eq!(a.nodes, b.nodes);
		assert_eq!(a.particles, b.particles);
	}

	#[test]
	fn random_connections_skip_self_and_never_change() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut field = AmbientField::new(presets::hero(), 500.0, 500.0, &mut rng);
		let before: Vec<Vec<usize>> = field.nodes.iter().map(|n| n.connections.clone()).collect();
		for (i, conns) in before.iter().enumerate() {
			assert!(conns.len() <= 3);
			assert!(conns.iter().all(|&c| c != i && c < field.nodes.len()));
		}
		for _ in 0..500 {
			field.tick();
		}
		let after: Vec<Vec<usize>> = field.nodes.iter().map(|n| n.connections.clone()).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn bounce_flips_velocity_and_clamps() {
		let (mut x, mut vx) = (99.5, 2.0);
		advance(&mut x, &mut vx, 100.0, EdgeMode::Bounce);
		assert_eq!(x, 100.0);
		assert_eq!(vx, -2.0);

		let (mut y, mut vy) = (0.5, -1.5);
		advance(&mut y, &mut vy, 100.0, EdgeMode::Bounce);
		assert_eq!(y, 0.0);
		assert_eq!(vy, 1.5);

		let (mut z, mut vz) = (50.0, 1.0);
		advance(&mut z, &mut vz, 100.0, EdgeMode::Bounce);
		assert_eq!((z, vz), (51.0, 1.0));
	}

	#[test]
	fn wrap_reenters_from_opposite_edge() {
		let (mut x, mut vx) = (99.0, 3.0);
		advance(&mut x, &mut vx, 100.0, EdgeMode::Wrap);
		assert!((x - 2.0).abs() < 1e-9);
		assert_eq!(vx, 3.0);

		let (mut y, mut vy) = (1.0, -3.0);
		advance(&mut y, &mut vy, 100.0, EdgeMode::Wrap);
		assert!((y - 98.0).abs() < 1e-9);
	}

	#[test]
	fn drift_stays_inside_after_many_frames() {
		let mut rng = SmallRng::seed_from_u64(11);
		let mut field = AmbientField::new(presets::hero(), 300.0, 150.0, &mut rng);
		for _ in 0..10_000 {
			field.tick();
		}
		assert!(in_bounds(&field));
	}

	#[test]
	fn resize_updates_surface_without_rescaling() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut field = AmbientField::new(presets::hero(), 800.0, 600.0, &mut rng);
		let before = field.nodes.clone();
		field.resize(200.0, 100.0);
		assert_eq!((field.width, field.height), (200.0, 100.0));
		assert_eq!(field.nodes, before);

		field.tick();
		assert!(in_bounds(&field));
	}

	#[test]
	fn orbit_follows_home_with_phase() {
		let mut rng = SmallRng::seed_from_u64(9);
		let mut field = AmbientField::new(presets::network_demo(), 600.0, 600.0, &mut rng);
		field.tick();
		assert!((field.time - 0.02).abs() < 1e-12);
		for (i, node) in field.nodes.iter().enumerate() {
			let t = 0.02 + i as f64;
			assert!((node.x - (node.home_x + t.sin() * 3.0)).abs() < 1e-9);
			assert!((node.y - (node.home_y + t.cos() * 3.0)).abs() < 1e-9);
		}
	}

	#[test]
	fn flicker_links_cover_only_distinct_pairs() {
		let mut rng = SmallRng::seed_from_u64(13);
		let field = AmbientField::new(presets::network_demo(), 600.0, 600.0, &mut rng);
		let links = field.links(&mut rng);
		assert!(links.len() <= 12 * 11 / 2);
		assert!(links.iter().all(|l| l.from < l.to && l.to < 12));

		let always = AmbientField::new(
			FieldConfig {
				node_count: 5,
				links: Linkage::Flicker { probability: 1.0 },
				..FieldConfig::default()
			},
			100.0,
			100.0,
			&mut rng,
		);
		assert_eq!(always.links(&mut rng).len(), 10);
	}

	#[test]
	fn proximity_links_fade_with_distance() {
		let mut rng = SmallRng::seed_from_u64(0);
		let mut field = AmbientField::new(
			FieldConfig {
				node_count: 3,
				links: Linkage::Proximity {
					max_distance: 150.0,
					alpha: 0.1,
				},
				link_alpha: 0.1,
				..FieldConfig::default()
			},
			1000.0,
			1000.0,
			&mut rng,
		);
		field.nodes[0].x = 0.0;
		field.nodes[0].y = 0.0;
		field.nodes[1].x = 75.0;
		field.nodes[1].y = 0.0;
		field.nodes[2].x = 500.0;
		field.nodes[2].y = 500.0;

		let links = field.links(&mut rng);
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].from, links[0].to), (0, 1));
		assert!((links[0].alpha - 0.1 * 0.1 * 0.5).abs() < 1e-12);
	}

	#[test]
	fn glow_respects_highlight_and_pulse() {
		let mut rng = SmallRng::seed_from_u64(21);
		let mut field = AmbientField::new(
			FieldConfig {
				node_count: 2,
				radius: (20.0, 0.0),
				glow: Some(Glow {
					scale: 2.0,
					color: Rgb::GOLD,
					alpha: 0.3,
					pulse: Some((5.0, 2.0)),
					over: false,
					highlighted_only: true,
				}),
				..FieldConfig::default()
			},
			100.0,
			100.0,
			&mut rng,
		);
		field.nodes[0].highlighted = true;
		field.nodes[0].phase = 0.0;
		field.nodes[1].highlighted = false;
		field.time = PI / 4.0;

		let r = field.glow_radius(0).unwrap();
		assert!((r - 45.0).abs() < 1e-9);
		assert_eq!(field.glow_radius(1), None);
		assert_eq!(field.glow_radius(5), None);
	}
}
