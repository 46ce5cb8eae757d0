use leptos::prelude::*;

use super::content::{Badge, REACTIONS, Reaction};
use crate::components::ambient_field::{AmbientCanvas, presets};

#[component]
fn ReactionBubble(reaction: Reaction, index: usize) -> impl IntoView {
	let badge = match reaction.badge {
		Badge::Emoji(e) => view! { <span class="reaction-emoji">{e}</span> }.into_any(),
		Badge::LinkedIn => view! { <div class="badge badge-linkedin">"in"</div> }.into_any(),
		Badge::X => view! { <div class="badge badge-x">"𝕏"</div> }.into_any(),
	};
	let style = format!(
		"left: {}%; top: {}%; animation-delay: {}ms;",
		reaction.x,
		reaction.y,
		500 + index * 100
	);

	view! {
		<div class="reaction pop-in" style=style>
			<div class="glass-card reaction-body">
				{badge}
				<span class="reaction-text">{reaction.text}</span>
			</div>
		</div>
	}
}

/// Ring of simulated audience members with their reactions floating on top.
#[component]
pub fn NetworkDemoSection() -> impl IntoView {
	view! {
		<section class="section">
			<div class="section-inner">
				<div class="section-heading rise">
					<h2>
						<span>"See Your Market"</span>" "
						<span>"Before"</span>" "
						<span class="muted">"Launch."</span>
					</h2>
					<p class="lead">
						"Imagine your audience reacting to your campaign, before it ever goes live."
					</p>
				</div>

				<div class="network-demo zoom-in">
					<AmbientCanvas
						config=presets::network_demo()
						image=presets::AVATAR_IMAGE
						class="fill-parent"
					/>
					{REACTIONS
						.iter()
						.enumerate()
						.map(|(index, reaction)| view! { <ReactionBubble reaction=*reaction index=index /> })
						.collect_view()}
				</div>

				<div class="centered rise">
					<button class="btn-outline">"Product Overview"</button>
				</div>
			</div>
		</section>
	}
}
