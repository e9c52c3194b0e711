/// An owned, fixed-arity argument list. Implemented for tuples of up to twelve
/// [`Clone`] elements.
pub trait Arguments: Clone {
	const ARITY: usize;
}

/// Calls an operation with the elements of `self` as positional arguments.
pub trait Apply<F> {
	type Output;

	fn apply(self, f: F) -> Self::Output;
}

macro_rules! impl_arguments {
	(@count) => { 0 };
	(@count $head:ident $($tail:ident)*) => {
		1 + impl_arguments!(@count $($tail)*)
	};
	($($name:ident),*) => {
		impl<$($name: Clone),*> Arguments for ($($name,)*) {
			const ARITY: usize = impl_arguments!(@count $($name)*);
		}

		impl<Func, Ret, $($name),*> Apply<Func> for ($($name,)*)
		where
			Func: FnOnce($($name),*) -> Ret,
		{
			type Output = Ret;

			#[allow(non_snake_case, clippy::unused_unit)]
			fn apply(self, f: Func) -> Self::Output {
				let ($($name,)*) = self;
				f($($name),*)
			}
		}
	};
}

impl_arguments!();
impl_arguments!(A);
impl_arguments!(A, B);
impl_arguments!(A, B, C);
impl_arguments!(A, B, C, D);
impl_arguments!(A, B, C, D, E);
impl_arguments!(A, B, C, D, E, F);
impl_arguments!(A, B, C, D, E, F, G);
impl_arguments!(A, B, C, D, E, F, G, H);
impl_arguments!(A, B, C, D, E, F, G, H, I);
impl_arguments!(A, B, C, D, E, F, G, H, I, J);
impl_arguments!(A, B, C, D, E, F, G, H, I, J, K);
impl_arguments!(A, B, C, D, E, F, G, H, I, J, K, L);
