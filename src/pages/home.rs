use leptos::prelude::*;

use crate::components::sections::{
	CasesCarousel, DashboardSection, FeatureCardsSection, HeroSection, NetworkDemoSection,
};

/// The landing page: every section stacked in order over a grid backdrop.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="landing noise-overlay">
				<div class="grid-pattern" />
				<div class="depth-gradient" />

				<main class="landing-content">
					<HeroSection />
					<NetworkDemoSection />
					<FeatureCardsSection />
					<DashboardSection />
					<CasesCarousel />
				</main>
			</div>
		</ErrorBoundary>
	}
}
