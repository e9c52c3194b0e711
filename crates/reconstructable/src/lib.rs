#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

extern crate alloc;

mod state;

use core::{
	fmt::{Debug, Formatter, Result as FmtResult},
	mem,
	ops::{Deref, DerefMut},
};

use reforge_capture::{Arguments, Construct, Constructor};
use reforge_utils::ShortName;
use tracing::{debug, trace, warn};

use self::state::{CheckedOut, ResetState};
pub use self::state::{Phase, Resetting};

/// A value that can be reset to the state it was constructed in, without
/// moving it.
///
/// The arguments passed at construction are kept in a resetter owned by the
/// instance. [`reset`](Self::reset) drops the payload in place and builds a
/// new one in the same storage from those arguments.
pub struct Reconstructable<T> {
	value: T,
	state: ResetState<T>,
}

impl<T: 'static> Reconstructable<T> {
	pub fn new<Args>(args: Args) -> Self
	where
		T: Construct<Args>,
		Args: Arguments + 'static,
	{
		let constructor = Constructor::new(args);

		Self {
			value: constructor.construct(),
			state: ResetState::Idle(constructor.into_boxed()),
		}
	}

	/// Constructs the payload without a resetter. [`reset`](Self::reset) on
	/// the result does nothing, callers must not rely on it.
	pub fn unguarded<Args>(args: Args) -> Self
	where
		T: Construct<Args>,
	{
		warn!(
			ty = %ShortName::of::<T>(),
			"constructed without a resetter, reset will do nothing"
		);

		Self {
			value: T::construct(args),
			state: ResetState::Unguarded,
		}
	}

	pub fn with_guard<Args>(guarded: bool, args: Args) -> Self
	where
		T: Construct<Args>,
		Args: Arguments + 'static,
	{
		if guarded {
			Self::new(args)
		} else {
			Self::unguarded(args)
		}
	}
}

impl<T> Reconstructable<T> {
	#[must_use]
	pub const fn phase(&self) -> Phase {
		self.state.phase()
	}

	/// Restores the value the payload was constructed with. The payload keeps
	/// its address.
	///
	/// Returns `false` without touching the payload when there is no resetter
	/// to run, either because the instance is unguarded or because a reset is
	/// already in progress.
	pub fn reset(&mut self) -> bool {
		self.reset_with(|_| {})
	}

	/// Like [`reset`](Self::reset), then runs `post` on the fresh payload
	/// while the resetter is still checked out. Any reset requested through
	/// the [`Resetting`] view is a no-op.
	///
	/// The resetter is returned on every exit, including a panic in `post`.
	pub fn reset_with(&mut self, post: impl FnOnce(Resetting<'_, T>)) -> bool {
		let resetter = match mem::replace(&mut self.state, ResetState::Resetting) {
			ResetState::Idle(resetter) => resetter,
			state => {
				trace!(ty = %ShortName::of::<T>(), phase = ?state.phase(), "reset skipped");
				self.state = state;
				return false;
			}
		};

		debug!(ty = %ShortName::of::<T>(), arity = resetter.arity(), "resetting in place");

		let checked_out = CheckedOut::new(&mut self.state, resetter);

		checked_out.resetter().reconstruct(&mut self.value);

		post(Resetting::new(&mut self.value));

		drop(checked_out);

		true
	}

	pub fn into_inner(self) -> T {
		self.value
	}
}

impl<T> Deref for Reconstructable<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.value
	}
}

impl<T> DerefMut for Reconstructable<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.value
	}
}

impl<T> AsRef<T> for Reconstructable<T> {
	fn as_ref(&self) -> &T {
		&self.value
	}
}

impl<T> AsMut<T> for Reconstructable<T> {
	fn as_mut(&mut self) -> &mut T {
		&mut self.value
	}
}

impl<T: Debug> Debug for Reconstructable<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_struct("Reconstructable")
			.field("value", &self.value)
			.field("phase", &self.phase())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	extern crate std;

	use alloc::rc::Rc;
	use core::{cell::Cell, mem, ptr};
	use std::panic::{self, AssertUnwindSafe};

	use reforge_capture::{Apply as _, Construct};

	use super::{Phase, Reconstructable};

	#[derive(Debug, PartialEq, Eq)]
	struct NonCopyable {
		x: i32,
		y: i32,
	}

	impl NonCopyable {
		const fn new(x: i32, y: i32) -> Self {
			Self { x, y }
		}

		const fn get(&self) -> (i32, i32) {
			(self.x, self.y)
		}
	}

	impl Construct<(i32, i32)> for NonCopyable {
		fn construct(args: (i32, i32)) -> Self {
			args.apply(Self::new)
		}
	}

	struct Tracked {
		generation: u32,
		drops: Rc<Cell<usize>>,
	}

	impl Construct<(Rc<Cell<usize>>,)> for Tracked {
		fn construct((drops,): (Rc<Cell<usize>>,)) -> Self {
			Self {
				generation: 0,
				drops,
			}
		}
	}

	impl Drop for Tracked {
		fn drop(&mut self) {
			self.drops.set(self.drops.get() + 1);
		}
	}

	#[test]
	fn reset_restores_value_in_place() {
		let mut x = Reconstructable::<NonCopyable>::new((1, 2));
		let before = ptr::from_ref::<NonCopyable>(&x);

		x.x = 3;
		x.y = 4;

		assert_eq!(x.get(), (3, 4));
		assert!(x.reset());
		assert_eq!(x.get(), (1, 2));
		assert_eq!(ptr::from_ref::<NonCopyable>(&x), before);
		assert_eq!(x.phase(), Phase::Idle);
	}

	#[test]
	fn reset_is_repeatable() {
		let mut x = Reconstructable::<NonCopyable>::new((1, 2));

		for i in 0..3 {
			x.y = i;
			assert!(x.reset());
			assert_eq!(x.get(), (1, 2));
		}
	}

	#[test]
	fn nested_reset_is_noop() {
		let mut x = Reconstructable::<NonCopyable>::new((1, 2));
		x.x = 3;

		let reset = x.reset_with(|mut this| {
			assert_eq!(this.phase(), Phase::Resetting);
			assert_eq!(this.get(), (1, 2));

			this.y = 9;

			assert!(!this.reset());
		});

		assert!(reset);
		assert_eq!(x.get(), (1, 9));
		assert_eq!(x.phase(), Phase::Idle);

		assert!(x.reset());
		assert_eq!(x.get(), (1, 2));
	}

	#[test]
	fn swapped_payload_keeps_resetter() {
		let mut x = Reconstructable::<NonCopyable>::new((1, 2));
		let mut other = NonCopyable::new(5, 6);

		x.reset_with(|mut this| mem::swap(&mut *this, &mut other));

		assert_eq!(other, NonCopyable::new(1, 2));
		assert_eq!(x.get(), (5, 6));
		assert_eq!(x.phase(), Phase::Idle);

		x.x = 99;

		assert!(x.reset());
		assert_eq!(x.get(), (1, 2));
	}

	#[test]
	fn panic_after_reset_returns_resetter() {
		let mut x = Reconstructable::<NonCopyable>::new((1, 2));

		let result = panic::catch_unwind(AssertUnwindSafe(|| {
			x.reset_with(|mut this| {
				this.x = 7;
				panic!("interrupted");
			})
		}));

		assert!(result.is_err());
		assert_eq!(x.phase(), Phase::Idle);
		assert_eq!(x.get(), (7, 2));

		assert!(x.reset());
		assert_eq!(x.get(), (1, 2));
	}

	#[test]
	fn unguarded_reset_is_noop() {
		let mut x = Reconstructable::<NonCopyable>::unguarded((1, 2));
		x.x = 3;

		assert_eq!(x.phase(), Phase::Unguarded);
		assert!(!x.reset());
		assert_eq!(x.get(), (3, 2));
		assert_eq!(x.phase(), Phase::Unguarded);
	}

	#[test]
	fn with_guard_flag() {
		let guarded = Reconstructable::<NonCopyable>::with_guard(true, (1, 2));
		let unguarded = Reconstructable::<NonCopyable>::with_guard(false, (1, 2));

		assert_eq!(guarded.phase(), Phase::Idle);
		assert_eq!(unguarded.phase(), Phase::Unguarded);
		assert_eq!(guarded.get(), unguarded.get());
	}

	#[test]
	fn payload_and_resetter_dropped() {
		let drops = Rc::new(Cell::new(0));

		let mut x = Reconstructable::<Tracked>::new((Rc::clone(&drops),));
		x.generation = 5;

		assert_eq!(Rc::strong_count(&drops), 3);

		x.reset();

		assert_eq!(drops.get(), 1);
		assert_eq!(x.generation, 0);
		assert_eq!(Rc::strong_count(&drops), 3);

		drop(x);

		assert_eq!(drops.get(), 2);
		assert_eq!(Rc::strong_count(&drops), 1);
	}

	#[test]
	fn into_inner_keeps_value() {
		let mut x = Reconstructable::<NonCopyable>::new((1, 2));
		x.as_mut().y = 5;

		assert_eq!(x.as_ref().get(), (1, 5));
		assert_eq!(x.into_inner(), NonCopyable::new(1, 5));
	}
}
