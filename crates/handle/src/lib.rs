#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use core::{
	fmt::{Debug, Formatter, Result as FmtResult},
	ops::{Deref, DerefMut},
	ptr,
};

use reforge_capture::{Arguments, Construct, Constructor, Replay};
use reforge_utils::ShortName;
use tracing::debug;

/// An owning pointer that copies by re-running the constructor of its
/// payload.
///
/// The payload never needs to implement [`Clone`]. Cloning the pointer
/// allocates a fresh instance from the arguments the original was created
/// with, so mutations made through one pointer are never seen by its clones.
pub struct ClonePtr<T> {
	instance: Box<T>,
	constructor: Box<dyn Replay<T>>,
}

impl<T: 'static> ClonePtr<T> {
	pub fn new<Args>(args: Args) -> Self
	where
		T: Construct<Args>,
		Args: Arguments + 'static,
	{
		Self::from_constructor(Constructor::new(args))
	}

	pub fn from_constructor<Args>(constructor: Constructor<T, Args>) -> Self
	where
		T: Construct<Args>,
		Args: Arguments + 'static,
	{
		let instance = constructor.allocate();

		Self {
			instance,
			constructor: constructor.into_boxed(),
		}
	}

	/// Replaces the payload with a new allocation built from the stored
	/// arguments, discarding every mutation.
	pub fn reset(&mut self) -> &mut Self {
		debug!(ty = %ShortName::of::<T>(), "resetting");

		self.instance = self.constructor.allocate();

		self
	}
}

impl<T> ClonePtr<T> {
	#[must_use]
	pub fn as_ptr(&self) -> *const T {
		ptr::from_ref(&*self.instance)
	}

	#[must_use]
	pub fn arity(&self) -> usize {
		self.constructor.arity()
	}
}

impl<T: 'static> Clone for ClonePtr<T> {
	fn clone(&self) -> Self {
		debug!(ty = %ShortName::of::<T>(), "cloning by replay");

		Self {
			instance: self.constructor.allocate(),
			constructor: self.constructor.clone(),
		}
	}

	fn clone_from(&mut self, source: &Self) {
		debug!(ty = %ShortName::of::<T>(), "assigning by replay");

		let instance = source.constructor.allocate();
		let constructor = source.constructor.clone();

		self.instance = instance;
		self.constructor = constructor;
	}
}

impl<T> Deref for ClonePtr<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.instance
	}
}

impl<T> DerefMut for ClonePtr<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.instance
	}
}

impl<T> AsRef<T> for ClonePtr<T> {
	fn as_ref(&self) -> &T {
		self
	}
}

impl<T> AsMut<T> for ClonePtr<T> {
	fn as_mut(&mut self) -> &mut T {
		self
	}
}

impl<T: Debug> Debug for ClonePtr<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_struct("ClonePtr")
			.field("instance", &self.instance)
			.field("arity", &self.arity())
			.finish()
	}
}
