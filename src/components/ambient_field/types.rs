/// An RGB triple used to build `rgba(...)` canvas style strings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const BLACK: Rgb = Rgb(0, 0, 0);
	pub const WHITE: Rgb = Rgb(255, 255, 255);
	pub const GOLD: Rgb = Rgb(255, 215, 0);

	pub fn with_alpha(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
	}
}

/// How nodes are placed at initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layout {
	/// Uniformly scattered over the surface, each with a random velocity in
	/// `[-speed / 2, speed / 2)` per axis.
	Scattered { speed: f64 },
	/// Evenly spaced on a ring around the surface centre. The ring radius is
	/// `min(w, h) * radius_frac`; with `jitter` set, each node sits at
	/// `radius * (jitter + r * (1 - jitter))` instead.
	Ring { radius_frac: f64, jitter: Option<f64> },
}

/// How node positions evolve each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
	/// Advance by velocity.
	Drift,
	/// Oscillate around the home position with an index-based phase.
	Orbit { time_step: f64, amplitude: f64 },
}

/// Which line segments are drawn between nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Linkage {
	None,
	/// Each node gets `min..=max` random targets once at startup.
	Random { min: usize, max: usize },
	/// Every pair is drawn with the given probability, re-rolled every frame.
	Flicker { probability: f64 },
	/// Pairs closer than `max_distance`, fading out with distance.
	Proximity { max_distance: f64, alpha: f64 },
}

/// What happens when a drifting entity leaves the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMode {
	Bounce,
	Wrap,
}

/// How the surface is prepared before each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
	/// Translucent fill that leaves motion trails.
	Fade { color: Rgb, alpha: f64 },
	/// Opaque fill.
	Clear { color: Rgb },
}

impl Backdrop {
	pub fn style(&self) -> String {
		match *self {
			Backdrop::Fade { color, alpha } => color.with_alpha(alpha),
			Backdrop::Clear { color } => color.with_alpha(1.0),
		}
	}
}

/// Radial-gradient halo drawn around nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// Halo radius as a multiple of the node radius.
	pub scale: f64,
	pub color: Rgb,
	pub alpha: f64,
	/// `(amplitude, frequency)` of a sinusoidal pulse added to the halo radius.
	pub pulse: Option<(f64, f64)>,
	/// Draw over the node instead of under it.
	pub over: bool,
	pub highlighted_only: bool,
}

/// How a node body is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeStyle {
	Disc { fill: Rgb },
	/// Dark disc with an outline, filled with an image once it has loaded and
	/// with a glyph placeholder until then.
	Avatar {
		fill: &'static str,
		stroke: Rgb,
		highlight_stroke: Rgb,
		glyph: &'static str,
	},
}

/// Full parameter set for one ambient field instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	pub name: &'static str,
	pub node_count: usize,
	pub layout: Layout,
	pub motion: Motion,
	/// Node radius as `base + r * spread`.
	pub radius: (f64, f64),
	pub links: Linkage,
	pub link_color: Rgb,
	pub link_alpha: f64,
	pub edges: EdgeMode,
	pub backdrop: Backdrop,
	pub glow: Option<Glow>,
	pub node_style: NodeStyle,
	/// Probability that a node is highlighted.
	pub highlight_ratio: f64,
	pub particle_count: usize,
	pub particle_speed: f64,
	/// Particle size as `base + r * spread`.
	pub particle_size: (f64, f64),
	pub particle_color: Rgb,
	pub particle_alpha: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			name: "ambient",
			node_count: 0,
			layout: Layout::Scattered { speed: 0.5 },
			motion: Motion::Drift,
			radius: (2.0, 3.0),
			links: Linkage::None,
			link_color: Rgb::WHITE,
			link_alpha: 0.1,
			edges: EdgeMode::Bounce,
			backdrop: Backdrop::Clear { color: Rgb::BLACK },
			glow: None,
			node_style: NodeStyle::Disc { fill: Rgb::WHITE },
			highlight_ratio: 0.0,
			particle_count: 0,
			particle_speed: 0.3,
			particle_size: (0.5, 2.0),
			particle_color: Rgb::WHITE,
			particle_alpha: 0.5,
		}
	}
}

/// Where the drawing surface takes its pixel size from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceSize {
	/// A fraction of the window's inner size.
	Viewport { width_frac: f64, height_frac: f64 },
	/// The canvas parent element's client size.
	Container,
}

impl SurfaceSize {
	/// Resolves to pixel dimensions given the viewport and container sizes.
	pub fn resolve(&self, viewport: (f64, f64), container: (f64, f64)) -> (f64, f64) {
		match *self {
			SurfaceSize::Viewport {
				width_frac,
				height_frac,
			} => (viewport.0 * width_frac, viewport.1 * height_frac),
			SurfaceSize::Container => container,
		}
	}
}
