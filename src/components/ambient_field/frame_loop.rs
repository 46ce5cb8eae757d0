/// Lifecycle of one canvas animation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
	Animating,
	TornDown,
}

/// Bookkeeping for a `requestAnimationFrame` loop.
///
/// The browser callback asks [`FrameLoop::begin_frame`] before doing any work
/// and records the handle of the next request with [`FrameLoop::scheduled`].
/// Once [`FrameLoop::teardown`] has run, no frame does any work again even if
/// a stale callback still fires.
#[derive(Debug)]
pub struct FrameLoop {
	phase: LoopPhase,
	pending: Option<i32>,
	frames: u64,
}

impl Default for FrameLoop {
	fn default() -> Self {
		Self::new()
	}
}

impl FrameLoop {
	pub fn new() -> Self {
		Self {
			phase: LoopPhase::Animating,
			pending: None,
			frames: 0,
		}
	}

	pub fn phase(&self) -> LoopPhase {
		self.phase
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Returns whether the current callback should update and draw.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = None;
		if self.phase == LoopPhase::TornDown {
			return false;
		}
		self.frames += 1;
		true
	}

	pub fn scheduled(&mut self, handle: i32) {
		if self.phase == LoopPhase::Animating {
			self.pending = Some(handle);
		}
	}

	/// Stops the loop and hands back the outstanding request to cancel.
	pub fn teardown(&mut self) -> Option<i32> {
		self.phase = LoopPhase::TornDown;
		self.pending.take()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;

	use super::*;

	/// Stand-in for the browser's frame queue.
	#[derive(Default)]
	struct FakeScheduler {
		next: i32,
		queue: VecDeque<i32>,
	}

	impl FakeScheduler {
		fn request(&mut self) -> i32 {
			self.next += 1;
			self.queue.push_back(self.next);
			self.next
		}

		fn cancel(&mut self, handle: i32) {
			self.queue.retain(|&h| h != handle);
		}

		/// Fires every queued callback once, running `frame` for each.
		fn flush(&mut self, lp: &mut FrameLoop, calls: &mut u32) {
			let due: Vec<i32> = self.queue.drain(..).collect();
			for _ in due {
				if lp.begin_frame() {
					*calls += 1;
					let h = self.request();
					lp.scheduled(h);
				}
			}
		}
	}

	#[test]
	fn runs_one_frame_per_flush() {
		let (mut lp, mut sched, mut calls) = (FrameLoop::new(), FakeScheduler::default(), 0);
		let h = sched.request();
		lp.scheduled(h);
		for _ in 0..5 {
			sched.flush(&mut lp, &mut calls);
		}
		assert_eq!(calls, 5);
		assert_eq!(lp.frames(), 5);
		assert_eq!(lp.phase(), LoopPhase::Animating);
		assert!(lp.pending.is_some());
	}

	#[test]
	fn teardown_before_next_frame_stops_callbacks() {
		let (mut lp, mut sched, mut calls) = (FrameLoop::new(), FakeScheduler::default(), 0);
		let h = sched.request();
		lp.scheduled(h);
		sched.flush(&mut lp, &mut calls);
		sched.flush(&mut lp, &mut calls);
		assert_eq!(calls, 2);

		let pending = lp.teardown();
		assert!(pending.is_some());
		if let Some(h) = pending {
			sched.cancel(h);
		}
		assert!(sched.queue.is_empty());

		for _ in 0..3 {
			sched.flush(&mut lp, &mut calls);
		}
		assert_eq!(calls, 2);
		assert_eq!(lp.phase(), LoopPhase::TornDown);
	}

	#[test]
	fn stale_callback_after_teardown_is_inert() {
		let (mut lp, mut sched, mut calls) = (FrameLoop::new(), FakeScheduler::default(), 0);
		let h = sched.request();
		lp.scheduled(h);
		// Teardown without cancelling: the queued callback still fires once.
		let _ = lp.teardown();
		sched.flush(&mut lp, &mut calls);
		assert_eq!(calls, 0);
		assert!(sched.queue.is_empty());
		assert_eq!(lp.pending, None);
	}

	#[test]
	fn teardown_is_idempotent() {
		let mut lp = FrameLoop::new();
		lp.scheduled(4);
		assert_eq!(lp.teardown(), Some(4));
		assert_eq!(lp.teardown(), None);
		lp.scheduled(9);
		assert_eq!(lp.pending, None);
	}
}
