use alloc::boxed::Box;
use core::ops::{Deref, DerefMut};

use reforge_capture::Replay;
use reforge_utils::ShortName;
use tracing::trace;

/// Where an instance is in its reset cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
	/// The resetter is held and a reset may run.
	Idle,
	/// The resetter is checked out by a reset in progress.
	Resetting,
	/// Constructed without a resetter.
	Unguarded,
}

pub(crate) enum ResetState<T> {
	Idle(Box<dyn Replay<T>>),
	Resetting,
	Unguarded,
}

impl<T> ResetState<T> {
	pub(crate) const fn phase(&self) -> Phase {
		match self {
			Self::Idle(..) => Phase::Idle,
			Self::Resetting => Phase::Resetting,
			Self::Unguarded => Phase::Unguarded,
		}
	}
}

/// Holds a resetter taken out of its instance and puts it back when dropped.
pub(crate) struct CheckedOut<'a, T> {
	state: &'a mut ResetState<T>,
	resetter: Option<Box<dyn Replay<T>>>,
}

impl<'a, T> CheckedOut<'a, T> {
	pub(crate) const fn new(state: &'a mut ResetState<T>, resetter: Box<dyn Replay<T>>) -> Self {
		Self {
			state,
			resetter: Some(resetter),
		}
	}

	pub(crate) fn resetter(&self) -> &dyn Replay<T> {
		match &self.resetter {
			Some(resetter) => &**resetter,
			None => unreachable!("resetter is only taken on drop"),
		}
	}
}

impl<T> Drop for CheckedOut<'_, T> {
	fn drop(&mut self) {
		if let Some(resetter) = self.resetter.take() {
			*self.state = ResetState::Idle(resetter);
		}
	}
}

/// The payload of an instance whose reset is in progress.
pub struct Resetting<'a, T> {
	value: &'a mut T,
}

impl<'a, T> Resetting<'a, T> {
	pub(crate) const fn new(value: &'a mut T) -> Self {
		Self { value }
	}

	#[must_use]
	pub const fn phase(&self) -> Phase {
		Phase::Resetting
	}

	/// Always `false`, a reset is already running.
	pub fn reset(&mut self) -> bool {
		trace!(ty = %ShortName::of::<T>(), "nested reset skipped");

		false
	}
}

impl<T> Deref for Resetting<'_, T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		self.value
	}
}

impl<T> DerefMut for Resetting<'_, T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.value
	}
}
