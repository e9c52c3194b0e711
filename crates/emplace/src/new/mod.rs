mod factories;

use alloc::boxed::Box;
use core::mem::MaybeUninit;

use reforge_utils::ShortName;
use tracing::trace;

pub use self::factories::*;

/// A deferred initializer for a value of type [`New::Output`].
///
/// # Safety
///
/// After [`New::new`] returns, `this` must be initialized.
#[must_use = "`New`s do nothing until emplaced into storage"]
pub unsafe trait New: Sized {
	type Output;

	unsafe fn new(self, this: &mut MaybeUninit<Self::Output>);
}

pub trait Emplace<T>: Sized {
	fn emplace<N>(n: N) -> Self
	where
		N: New<Output = T>;
}

impl<T> Emplace<T> for Box<T> {
	fn emplace<N>(n: N) -> Self
	where
		N: New<Output = T>,
	{
		trace!(ty = %ShortName::of::<T>(), "emplacing into a new box");

		let mut uninit = Self::new_uninit();

		unsafe {
			n.new(&mut uninit);
			uninit.assume_init()
		}
	}
}
