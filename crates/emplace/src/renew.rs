use core::{
	mem::{self, MaybeUninit},
	ptr,
};

use reforge_utils::ShortName;
use tracing::trace;

use super::New;

/// Ends the lifetime of `target` and starts a new one in the same storage.
///
/// The old value is dropped before `n` runs. If either the drop or `n`
/// panics, the storage holds no value and the process aborts.
pub fn renew<T, N>(target: &mut T, n: N) -> &mut T
where
	N: New<Output = T>,
{
	trace!(ty = %ShortName::of::<T>(), addr = ?ptr::from_ref(target), "renewing in place");

	let guard = AbortOnUnwind;
	let this = ptr::from_mut(target);

	unsafe {
		ptr::drop_in_place(this);
		n.new(&mut *this.cast::<MaybeUninit<T>>());
	}

	mem::forget(guard);

	target
}

struct AbortOnUnwind;

impl Drop for AbortOnUnwind {
	fn drop(&mut self) {
		panic!("a value was left uninitialized while being renewed in place");
	}
}
