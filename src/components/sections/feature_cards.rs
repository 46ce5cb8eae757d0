use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use log::info;

use super::content::FEATURES;

/// How long the "Analyzing campaign..." indicator stays up.
pub const SIMULATION_MS: u64 = 3000;

/// The Next button is live only with some input and no run in progress.
pub fn can_start(input: &str, simulating: bool) -> bool {
	!simulating && !input.trim().is_empty()
}

#[component]
pub fn FeatureCardsSection() -> impl IntoView {
	let (input, set_input) = signal(String::new());
	let (simulating, set_simulating) = signal(false);

	let on_next = move |_| {
		if !input.with(|s| can_start(s, simulating.get())) {
			return;
		}
		info!("campaign simulation requested");
		set_simulating.set(true);
		set_timeout(
			move || set_simulating.set(false),
			Duration::from_millis(SIMULATION_MS),
		);
	};

	view! {
		<section class="section">
			<div class="section-inner">
				<div class="feature-grid">
					{FEATURES
						.iter()
						.enumerate()
						.map(|(i, f)| {
							view! {
								<div
									class="card-dark hover-lift rise"
									style=format!("animation-delay: {}ms;", i * 200)
								>
									<div class="feature-glyph">{f.glyph}</div>
									<h3>{f.title}</h3>
									<p>{f.description}</p>
								</div>
							}
						})
						.collect_view()}
				</div>

				<div class="section-heading zoom-in">
					<h2>
						<span>"FROM IDEA TO REACTION - IN "</span>
						<span class="muted">"MINUTES"</span>
					</h2>
				</div>

				<div class="glass-card simulation-box rise">
					<div class="simulation-input">
						<input
							type="text"
							placeholder="Enter brand and campaign details"
							prop:value=input
							on:input=move |ev| set_input.set(event_target_value(&ev))
						/>
						<button
							class="btn-primary"
							disabled=move || !input.with(|s| can_start(s, simulating.get()))
							on:click=on_next
						>
							"Next"
						</button>
					</div>

					<div class="simulation-run">
						<span>"Run instant simulation"</span>
						<div class=move || {
							if simulating.get() { "spinner spinning" } else { "spinner" }
						} />
					</div>

					<Show when=move || simulating.get()>
						<div class="analyzing rise">
							<div class="pulse-dot" />
							<span>"Analyzing campaign..."</span>
						</div>
					</Show>
				</div>
			</div>
		</section>
	}
}
