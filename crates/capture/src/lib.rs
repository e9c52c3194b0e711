#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

extern crate alloc;

mod arguments;
mod captured;
mod constructor;

pub use self::{arguments::*, captured::*, constructor::*};

/// Captures a comma separated argument list, see [`capture`].
///
/// ```
/// let args = reforge_capture::capture!(1, "two", 3.0);
///
/// assert_eq!(args.arity(), 3);
/// ```
#[macro_export]
macro_rules! capture {
	($($arg:expr),* $(,)?) => {
		$crate::capture(($($arg,)*))
	};
}
