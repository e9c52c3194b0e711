use alloc::boxed::Box;
use core::{
	fmt::{Debug, Formatter, Result as FmtResult},
	marker::PhantomData,
};

use reforge_emplace::{Emplace as _, New, by, renew};
use reforge_utils::ShortName;
use tracing::debug;

use super::{Arguments, Captured};

/// Construction of `Self` from one particular argument list.
///
/// Implement it once per argument list the type accepts, usually by applying
/// the tuple to an existing constructor:
///
/// ```
/// use reforge_capture::{Apply as _, Construct};
///
/// struct Point(i32, i32);
///
/// impl Point {
/// 	fn new(x: i32, y: i32) -> Self {
/// 		Self(x, y)
/// 	}
/// }
///
/// impl Construct<(i32, i32)> for Point {
/// 	fn construct(args: (i32, i32)) -> Self {
/// 		args.apply(Self::new)
/// 	}
/// }
/// ```
pub trait Construct<Args>: Sized {
	fn construct(args: Args) -> Self;
}

/// Type-erased replay of a bound constructor.
pub trait Replay<T> {
	fn arity(&self) -> usize;

	fn construct(&self) -> T;

	fn allocate(&self) -> Box<T>;

	fn reconstruct<'a>(&self, target: &'a mut T) -> &'a mut T;

	fn boxed_clone(&self) -> Box<dyn Replay<T>>;
}

impl<T: 'static> Clone for Box<dyn Replay<T>> {
	fn clone(&self) -> Self {
		self.boxed_clone()
	}
}

/// A constructor of `T` bound to a captured argument list.
pub struct Constructor<T, Args> {
	args: Captured<Args>,
	marker: PhantomData<fn() -> T>,
}

impl<T, Args> Constructor<T, Args>
where
	T: Construct<Args>,
	Args: Arguments,
{
	pub const fn new(args: Args) -> Self {
		Self::from_captured(Captured::new(args))
	}

	pub const fn from_captured(args: Captured<Args>) -> Self {
		Self {
			args,
			marker: PhantomData,
		}
	}

	/// Binds `args` and builds the first instance from the same list.
	pub fn with_instance(args: Args) -> (Self, Box<T>) {
		let this = Self::new(args);
		let instance = this.allocate();

		(this, instance)
	}

	#[must_use]
	pub const fn captured(&self) -> &Captured<Args> {
		&self.args
	}

	pub fn construct(&self) -> T {
		self.args.construct()
	}

	pub fn emplace(&self) -> impl New<Output = T> + '_ {
		by(|| self.construct())
	}

	pub fn allocate(&self) -> Box<T> {
		debug!(ty = %ShortName::of::<T>(), arity = self.args.arity(), "allocating");

		Box::emplace(self.emplace())
	}

	/// Drops `target` in place and rebuilds it from the captured arguments.
	pub fn reconstruct<'a>(&self, target: &'a mut T) -> &'a mut T {
		debug!(ty = %ShortName::of::<T>(), arity = self.args.arity(), "reconstructing");

		renew(target, self.emplace())
	}

	pub fn into_boxed(self) -> Box<dyn Replay<T>>
	where
		T: 'static,
		Args: 'static,
	{
		Box::new(self)
	}
}

impl<T, Args> Replay<T> for Constructor<T, Args>
where
	T: Construct<Args> + 'static,
	Args: Arguments + 'static,
{
	fn arity(&self) -> usize {
		self.args.arity()
	}

	fn construct(&self) -> T {
		Self::construct(self)
	}

	fn allocate(&self) -> Box<T> {
		Self::allocate(self)
	}

	fn reconstruct<'a>(&self, target: &'a mut T) -> &'a mut T {
		Self::reconstruct(self, target)
	}

	fn boxed_clone(&self) -> Box<dyn Replay<T>> {
		Box::new(self.clone())
	}
}

impl<T, Args: Clone> Clone for Constructor<T, Args> {
	fn clone(&self) -> Self {
		Self {
			args: self.args.clone(),
			marker: PhantomData,
		}
	}
}

impl<T, Args: Debug> Debug for Constructor<T, Args> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_struct("Constructor")
			.field("ty", &ShortName::of::<T>())
			.field("args", &self.args)
			.finish()
	}
}

/// Drops `target` in place and constructs a new `T` from `args` in the same
/// storage.
pub fn reconstruct<T, Args>(target: &mut T, args: Args) -> &mut T
where
	T: Construct<Args>,
{
	debug!(ty = %ShortName::of::<T>(), "reconstructing from new arguments");

	renew(target, by(move || T::construct(args)))
}
