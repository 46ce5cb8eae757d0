use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::frame_loop::{FrameLoop, LoopPhase};
use super::render;
use super::state::AmbientField;
use super::types::{FieldConfig, SurfaceSize};

type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A canvas running one ambient field until it is unmounted.
#[component]
pub fn AmbientCanvas(
	config: FieldConfig,
	#[prop(default = SurfaceSize::Container)] surface: SurfaceSize,
	/// Fixed seed for a reproducible layout.
	#[prop(optional)]
	seed: Option<u64>,
	/// Image drawn inside avatar nodes once loaded.
	#[prop(optional)]
	image: Option<&'static str>,
	#[prop(optional)] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let name = config.name;
	let field: Rc<RefCell<Option<AmbientField>>> = Rc::new(RefCell::new(None));
	let frame_loop = Rc::new(RefCell::new(FrameLoop::new()));
	let animate: SharedClosure = Rc::new(RefCell::new(None));
	let resize_cb: SharedClosure = Rc::new(RefCell::new(None));
	let (field_init, loop_init, animate_init, resize_cb_init) = (
		field.clone(),
		frame_loop.clone(),
		animate.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if field_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("{}: no 2d context, skipping animation", config.name);
			return;
		};

		let (w, h) = measure(surface, &canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut rng = SmallRng::seed_from_u64(seed.unwrap_or_else(entropy_seed));
		*field_init.borrow_mut() = Some(AmbientField::new(config.clone(), w, h, &mut rng));
		info!("{}: animating on {}x{} surface", config.name, w, h);

		let image_el = image.and_then(|src| {
			let img = HtmlImageElement::new().ok()?;
			img.set_src(src);
			Some(img)
		});

		let (field_resize, canvas_resize, name) = (field_init.clone(), canvas.clone(), config.name);
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = measure(surface, &canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
			debug!("{}: resized to {}x{}", name, nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, loop_anim, resize_anim, animate_inner, canvas_anim) = (
			field_init.clone(),
			loop_init.clone(),
			resize_cb_init.clone(),
			animate_init.clone(),
			canvas.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !loop_anim.borrow_mut().begin_frame() {
				return;
			}
			// Removed from the document without a cleanup pass.
			if !canvas_anim.is_connected() {
				stop(&loop_anim, &resize_anim);
				return;
			}
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.tick();
				render::render(f, &ctx, &mut rng, image_el.as_ref());
			}
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(handle) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					loop_anim.borrow_mut().scheduled(handle);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				loop_init.borrow_mut().scheduled(handle);
			}
		}
	});

	let teardown = StoredValue::new_local((frame_loop, resize_cb, animate, name));
	on_cleanup(move || {
		teardown.try_with_value(|(frame_loop, resize_cb, animate, name)| {
			stop(frame_loop, resize_cb);
			// Breaks the self-reference held by the frame closure.
			animate.borrow_mut().take();
			debug!("{}: torn down after {} frames", name, frame_loop.borrow().frames());
		});
	});

	view! { <canvas node_ref=canvas_ref class=class style="display: block;" /> }
}

/// Cancels the pending frame and detaches the resize listener.
fn stop(frame_loop: &RefCell<FrameLoop>, resize_cb: &SharedClosure) {
	if frame_loop.borrow().phase() == LoopPhase::TornDown {
		return;
	}
	let pending = frame_loop.borrow_mut().teardown();
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(handle) = pending {
		let _ = window.cancel_animation_frame(handle);
	}
	if let Some(cb) = resize_cb.borrow_mut().take() {
		let _ =
			window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}
}

fn measure(surface: SurfaceSize, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let viewport = web_sys::window()
		.and_then(|win| {
			Some((
				win.inner_width().ok()?.as_f64()?,
				win.inner_height().ok()?.as_f64()?,
			))
		})
		.unwrap_or((800.0, 600.0));
	let container = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0));
	surface.resolve(viewport, container)
}

fn entropy_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}
