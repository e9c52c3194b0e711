use reforge_utils::ShortName;
use tracing::trace;

use super::{Apply, Arguments, Construct};

/// An owned argument list recorded at a call site, replayable any number of
/// times.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Captured<Args> {
	args: Args,
}

impl<Args: Arguments> Captured<Args> {
	pub const fn new(args: Args) -> Self {
		Self { args }
	}

	#[must_use]
	pub const fn arity(&self) -> usize {
		Args::ARITY
	}

	#[must_use]
	pub const fn get(&self) -> &Args {
		&self.args
	}

	pub fn into_inner(self) -> Args {
		self.args
	}

	/// Builds a `T` from a fresh copy of the captured list.
	pub fn construct<T>(&self) -> T
	where
		T: Construct<Args>,
	{
		trace!(ty = %ShortName::of::<T>(), arity = Args::ARITY, "constructing from capture");

		T::construct(self.args.clone())
	}

	/// Invokes `f` with a fresh copy of every captured argument, in the order
	/// they were captured. This is the positional form, for operations that
	/// take the arguments one by one instead of through [`Construct`].
	pub fn replay<F>(&self, f: F) -> <Args as Apply<F>>::Output
	where
		Args: Apply<F>,
	{
		trace!(args = %ShortName::of::<Args>(), arity = Args::ARITY, "replaying");

		self.args.clone().apply(f)
	}
}

impl<Args: Arguments> From<Args> for Captured<Args> {
	fn from(value: Args) -> Self {
		Self::new(value)
	}
}

pub const fn capture<Args: Arguments>(args: Args) -> Captured<Args> {
	Captured::new(args)
}
