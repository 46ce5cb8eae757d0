use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use super::content::CASES;

/// Slack before the right arrow is considered exhausted.
const RIGHT_EDGE_SLACK: f64 = 10.0;
/// Fraction of the visible width moved per arrow click.
const PAGE_FRACTION: f64 = 0.8;
/// Delay before re-reading the scroll position after a smooth scroll.
const SETTLE_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Left,
	Right,
}

/// Snapshot of a horizontally scrolling container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
	pub scroll_left: f64,
	pub scroll_width: f64,
	pub client_width: f64,
}

impl ScrollMetrics {
	pub fn of(el: &Element) -> Self {
		Self {
			scroll_left: el.scroll_left() as f64,
			scroll_width: el.scroll_width() as f64,
			client_width: el.client_width() as f64,
		}
	}

	pub fn can_scroll_left(&self) -> bool {
		self.scroll_left > 0.0
	}

	pub fn can_scroll_right(&self) -> bool {
		self.scroll_left < self.scroll_width - self.client_width - RIGHT_EDGE_SLACK
	}

	fn max_scroll(&self) -> f64 {
		(self.scroll_width - self.client_width).max(0.0)
	}

	/// Where one arrow click should land.
	pub fn target(&self, direction: Direction) -> f64 {
		let step = self.client_width * PAGE_FRACTION;
		let raw = match direction {
			Direction::Left => self.scroll_left - step,
			Direction::Right => self.scroll_left + step,
		};
		raw.clamp(0.0, self.max_scroll())
	}
}

#[component]
pub fn CasesCarousel() -> impl IntoView {
	let scroller = NodeRef::<leptos::html::Div>::new();
	let (can_left, set_can_left) = signal(false);
	let (can_right, set_can_right) = signal(true);

	let check = move || {
		if let Some(el) = scroller.get_untracked() {
			let m = ScrollMetrics::of(&el);
			set_can_left.set(m.can_scroll_left());
			set_can_right.set(m.can_scroll_right());
		}
	};

	let scroll = move |direction: Direction| {
		let Some(el) = scroller.get_untracked() else {
			return;
		};
		let opts = ScrollToOptions::new();
		opts.set_left(ScrollMetrics::of(&el).target(direction));
		opts.set_behavior(ScrollBehavior::Smooth);
		el.scroll_to_with_scroll_to_options(&opts);
		set_timeout(check, Duration::from_millis(SETTLE_MS));
	};

	view! {
		<section class="section centered-column">
			<div class="section-inner wide">
				<div class="slide-in-left">
					<button class="btn-outline">"Cases"</button>
				</div>

				<div class="carousel">
					<Show when=move || can_left.get()>
						<button class="carousel-arrow left" on:click=move |_| scroll(Direction::Left)>
							"‹"
						</button>
					</Show>
					<Show when=move || can_right.get()>
						<button class="carousel-arrow right" on:click=move |_| scroll(Direction::Right)>
							"›"
						</button>
					</Show>

					<div class="carousel-track" node_ref=scroller on:scroll=move |_| check()>
						{CASES
							.iter()
							.enumerate()
							.map(|(i, case)| {
								view! {
									<div
										class="case-card hover-lift rise"
										style=format!("animation-delay: {}ms;", i * 100)
									>
										<div class="case-title">
											<h3>{case.title}</h3>
										</div>
										<div class="case-body">
											<p>{case.description}</p>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>

				<div class="carousel-dots">
					{CASES.iter().map(|_| view! { <div class="dot" /> }).collect_view()}
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn metrics(scroll_left: f64) -> ScrollMetrics {
		ScrollMetrics {
			scroll_left,
			scroll_width: 2200.0,
			client_width: 1000.0,
		}
	}

	#[test]
	fn arrows_at_start() {
		let m = metrics(0.0);
		assert!(!m.can_scroll_left());
		assert!(m.can_scroll_right());
	}

	#[test]
	fn arrows_near_end_use_slack() {
		assert!(metrics(1189.0).can_scroll_right());
		assert!(!metrics(1190.0).can_scroll_right());
		assert!(metrics(1190.0).can_scroll_left());
	}

	#[test]
	fn arrow_click_moves_most_of_a_page() {
		assert_eq!(metrics(0.0).target(Direction::Right), 800.0);
		assert_eq!(metrics(800.0).target(Direction::Right), 1200.0);
		assert_eq!(metrics(800.0).target(Direction::Left), 0.0);
		assert_eq!(metrics(1000.0).target(Direction::Left), 200.0);
	}

	#[test]
	fn content_narrower_than_view() {
		let m = ScrollMetrics {
			scroll_left: 0.0,
			scroll_width: 400.0,
			client_width: 1000.0,
		};
		assert!(!m.can_scroll_right());
		assert_eq!(m.target(Direction::Right), 0.0);
	}
}
