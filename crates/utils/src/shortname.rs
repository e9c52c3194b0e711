use core::fmt::{Debug, Display, Formatter, Result as FmtResult, Write as _};

/// A type name with every module path stripped, for log fields.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct ShortName<'a>(pub &'a str);

impl<'a> ShortName<'a> {
	#[must_use]
	pub const fn into_inner(self) -> &'a str {
		self.0
	}
}

impl ShortName<'static> {
	#[must_use]
	pub fn of<T: ?Sized>() -> Self {
		Self(core::any::type_name::<T>())
	}
}

impl Debug for ShortName<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		Display::fmt(self, f)
	}
}

impl Display for ShortName<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let mut rest = self.into_inner();

		while !rest.is_empty() {
			let end = rest.find(is_delimiter).unwrap_or(rest.len());
			let (path, tail) = rest.split_at(end);

			f.write_str(last_segment(path))?;

			let mut chars = tail.chars();
			if let Some(delimiter) = chars.next() {
				f.write_char(delimiter)?;
			}

			rest = chars.as_str();

			if tail.starts_with(['>', ')', ']'])
				&& let Some(associated) = rest.strip_prefix("::")
			{
				f.write_str("::")?;
				rest = associated;
			}
		}

		Ok(())
	}
}

impl<'a> From<&'a str> for ShortName<'a> {
	fn from(value: &'a str) -> Self {
		Self(value)
	}
}

const fn is_delimiter(c: char) -> bool {
	matches!(
		c,
		' ' | '<' | '>' | '(' | ')' | '[' | ']' | ',' | ';' | '&' | '*'
	)
}

fn last_segment(path: &str) -> &str {
	path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
	extern crate alloc;

	use alloc::string::ToString as _;

	use super::ShortName;

	#[test]
	fn plain() {
		assert_eq!(ShortName("i32").to_string(), "i32");
	}

	#[test]
	fn path_separated() {
		assert_eq!(
			ShortName("reforge_handle::ClonePtr").to_string(),
			"ClonePtr"
		);
	}

	#[test]
	fn generic_arguments() {
		assert_eq!(
			ShortName("reforge_capture::Constructor<demo::Pair, (i32, alloc::string::String)>")
				.to_string(),
			"Constructor<Pair, (i32, String)>"
		);
	}

	#[test]
	fn references_and_slices() {
		assert_eq!(ShortName("&[core::cell::Cell<u8>]").to_string(), "&[Cell<u8>]");
	}

	#[test]
	fn associated_item_after_closing_delimiter() {
		assert_eq!(
			ShortName("<a::T as b::Tr>::Assoc").to_string(),
			"<T as Tr>::Assoc"
		);
		assert_eq!(
			ShortName("core::option::Option<u8>::None").to_string(),
			"Option<u8>::None"
		);
		assert_eq!(ShortName("[u8]::len").to_string(), "[u8]::len");
	}

	#[test]
	fn of_type() {
		assert_eq!(ShortName::of::<Option<u8>>().to_string(), "Option<u8>");
	}
}
