use std::fmt::{Display, Formatter, Result as FmtResult};

use reforge_capture::{Apply as _, Construct};

/// A payload that cannot be cloned or copied.
#[derive(Debug, PartialEq, Eq)]
pub struct NonCopyable {
	pub x: i32,
	pub y: i32,
}

impl NonCopyable {
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

impl Construct<(i32,)> for NonCopyable {
	fn construct((x,): (i32,)) -> Self {
		Self::new(x, x)
	}
}

impl Construct<(i32, i32)> for NonCopyable {
	fn construct(args: (i32, i32)) -> Self {
		args.apply(Self::new)
	}
}

impl Display for NonCopyable {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		Display::fmt(&self.x, f)?;
		f.write_str(", ")?;
		Display::fmt(&self.y, f)
	}
}
