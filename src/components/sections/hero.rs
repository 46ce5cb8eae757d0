use leptos::prelude::*;

use super::content::{BRAND, HEADLINE};
use crate::components::ambient_field::{AmbientCanvas, presets};

#[component]
pub fn HeroSection() -> impl IntoView {
	let [first, second, last] = HEADLINE;

	view! {
		<section class="hero">
			<div class="hero-brand fade-in">
				<h1>{BRAND}</h1>
			</div>

			<div class="hero-body">
				<div class="hero-copy slide-in-left">
					<h2 class="hero-headline">
						<span class="rise delay-1">{first}</span>
						<span class="rise delay-2">{second}</span>
						<span class="rise delay-3 gradient-text">{last}</span>
					</h2>
				</div>

				<div class="hero-network zoom-in">
					<AmbientCanvas config=presets::hero() surface=presets::HERO_SURFACE />
				</div>
			</div>

			<div class="scroll-indicator fade-in delay-4">
				<span>"Scroll to explore"</span>
				<div class="scroll-mouse">
					<div class="scroll-wheel" />
				</div>
			</div>
		</section>
	}
}
