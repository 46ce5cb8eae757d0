use std::f64::consts::PI;

use leptos::prelude::*;

use super::content::{
	CAMPAIGN_DESCRIPTION, CAMPAIGN_TITLE, CURRENT_CAMPAIGN, DONUT, DONUT_LABEL, DonutSegment,
	FILTERS, IMPACT_SCORES, ImpactScore, SIDEBAR_MENU, SUMMARY_POINTS,
};
use crate::components::ambient_field::{AmbientCanvas, presets};

const RING_RADIUS: f64 = 28.0;
const DONUT_RADIUS: f64 = 70.0;

fn circumference(radius: f64) -> f64 {
	2.0 * PI * radius
}

/// Dash offset that leaves `value` percent of a ring stroked.
pub fn ring_dash_offset(radius: f64, value: u8) -> f64 {
	circumference(radius) * (1.0 - f64::from(value) / 100.0)
}

/// One stroked arc of a donut: dash array and offset for an SVG circle.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutArc {
	pub color: &'static str,
	pub dasharray: String,
	pub dashoffset: f64,
}

/// Lays segments end to end around the circle, starting at the top.
pub fn donut_arcs(radius: f64, segments: &[DonutSegment]) -> Vec<DonutArc> {
	let c = circumference(radius);
	let mut start = 0.0;
	segments
		.iter()
		.map(|seg| {
			let arc = DonutArc {
				color: seg.color,
				dasharray: format!("{} {}", c * seg.share, c),
				dashoffset: -c * start,
			};
			start += seg.share;
			arc
		})
		.collect()
}

#[component]
fn ScoreRing(score: ImpactScore) -> impl IntoView {
	view! {
		<div class="score">
			<div class="score-ring">
				<svg viewBox="0 0 64 64" class="rotate-ccw">
					<circle cx="32" cy="32" r="28" stroke="#2a2a2a" stroke-width="6" fill="none" />
					<circle
						cx="32"
						cy="32"
						r="28"
						stroke=score.color
						stroke-width="6"
						fill="none"
						stroke-dasharray=circumference(RING_RADIUS).to_string()
						stroke-dashoffset=ring_dash_offset(RING_RADIUS, score.value).to_string()
						stroke-linecap="round"
					/>
				</svg>
				<span class="score-value">{score.percent()}</span>
			</div>
			<span class="score-label">{score.label}</span>
		</div>
	}
}

#[component]
fn SentimentDonut() -> impl IntoView {
	view! {
		<div class="donut">
			<svg viewBox="0 0 160 160" class="rotate-ccw">
				<circle cx="80" cy="80" r="70" stroke="#2a2a2a" stroke-width="12" fill="none" />
				{donut_arcs(DONUT_RADIUS, &DONUT)
					.into_iter()
					.map(|arc| {
						view! {
							<circle
								cx="80"
								cy="80"
								r="70"
								stroke=arc.color
								stroke-width="12"
								fill="none"
								stroke-dasharray=arc.dasharray
								stroke-dashoffset=arc.dashoffset.to_string()
								stroke-linecap="round"
							/>
						}
					})
					.collect_view()}
			</svg>
			<span class="donut-value">{DONUT_LABEL}</span>
		</div>
	}
}

/// Mock campaign dashboard with a live network panel.
#[component]
pub fn DashboardSection() -> impl IntoView {
	view! {
		<section class="section">
			<div class="section-inner wide">
				<div class="dashboard-bar rise">
					<h1 class="brand">"CLUE AI"</h1>
					<div class="filters">
						{FILTERS
							.iter()
							.map(|f| view! { <button class="filter">{*f}" ▾"</button> })
							.collect_view()}
					</div>
				</div>

				<div class="dashboard-grid">
					<aside class="card-dark dashboard-sidebar slide-in-left">
						<p class="caption">"Current Campaign"</p>
						<div class="campaign-pill">{CURRENT_CAMPAIGN}</div>
						<button class="new-campaign">"+ New Campaign"</button>
						<nav class="sidebar-menu">
							{SIDEBAR_MENU
								.iter()
								.map(|item| view! { <button class="menu-item">{*item}</button> })
								.collect_view()}
						</nav>
					</aside>

					<div class="dashboard-main rise">
						<div class="card-dark dashboard-graph">
							<AmbientCanvas config=presets::dashboard() class="fill-parent" />
						</div>
						<div class="card-dark">
							<h3>{CAMPAIGN_TITLE}</h3>
							<p class="body-text">{CAMPAIGN_DESCRIPTION}</p>
						</div>
					</div>

					<div class="dashboard-side slide-in-right">
						<div class="card-dark">
							<h4>"Impact Score"</h4>
							<div class="score-grid">
								{IMPACT_SCORES
									.iter()
									.map(|score| view! { <ScoreRing score=*score /> })
									.collect_view()}
							</div>
							<SentimentDonut />
						</div>
						<div class="card-dark">
							<h4>"Summary"</h4>
							<ul class="summary">
								{SUMMARY_POINTS
									.iter()
									.map(|point| view! { <li>{*point}</li> })
									.collect_view()}
							</ul>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ring_offset_leaves_value_stroked() {
		let c = circumference(RING_RADIUS);
		assert!((ring_dash_offset(RING_RADIUS, 87) - c * 0.13).abs() < 1e-9);
		assert_eq!(ring_dash_offset(RING_RADIUS, 100), 0.0);
		assert!((ring_dash_offset(RING_RADIUS, 0) - c).abs() < 1e-9);
	}

	#[test]
	fn donut_arcs_follow_each_other() {
		let c = circumference(DONUT_RADIUS);
		let arcs = donut_arcs(DONUT_RADIUS, &DONUT);
		assert_eq!(arcs.len(), 3);
		assert_eq!(arcs[0].dashoffset, 0.0);
		assert!((arcs[1].dashoffset + c * 0.6).abs() < 1e-9);
		assert!((arcs[2].dashoffset + c * 0.8).abs() < 1e-9);
		assert_eq!(arcs[0].color, "#10b981");
		assert!(arcs[0].dasharray.ends_with(&c.to_string()));
	}
}
