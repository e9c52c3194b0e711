use core::{marker::PhantomData, mem::MaybeUninit};

use super::New;

pub unsafe fn by_raw<T>(f: impl FnOnce(&mut MaybeUninit<T>)) -> impl New<Output = T> {
	struct FnNew<F, T> {
		f: F,
		marker: PhantomData<fn(T)>,
	}

	unsafe impl<F, T> New for FnNew<F, T>
	where
		F: FnOnce(&mut MaybeUninit<T>),
	{
		type Output = T;

		unsafe fn new(self, this: &mut MaybeUninit<Self::Output>) {
			(self.f)(this);
		}
	}

	FnNew {
		f,
		marker: PhantomData,
	}
}

pub fn by<T>(f: impl FnOnce() -> T) -> impl New<Output = T> {
	unsafe {
		by_raw(|this| {
			this.write(f());
		})
	}
}
