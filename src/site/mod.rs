/* src/site/mod.rs */

//!
//! Caller-site capture for intrinsic locations.
//!
//! - [`CallSite`] - A source position in the program that called into this crate.
//! - [`FrameFilter`] - Path prefixes whose call sites are never reported.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

mod filter;

pub use filter::{FrameFilter, STD_PREFIX};

/// A position in program source, as reported by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CallSite {
	/// Source file path, as passed to rustc.
	pub file: &'static str,
	pub line: u32,
	pub column: u32,
}

impl CallSite {
	pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
		Self { file, line, column }
	}

	/// Captures the position of the nearest caller not marked `#[track_caller]`.
	///
	/// Every public entry point of this crate that ends up here is itself
	/// `#[track_caller]`, so the reported position is the first frame outside
	/// the crate.
	#[track_caller]
	pub fn caller() -> Self {
		std::panic::Location::caller().into()
	}
}

impl From<&'static std::panic::Location<'static>> for CallSite {
	fn from(loc: &'static std::panic::Location<'static>) -> Self {
		Self::new(loc.file(), loc.line(), loc.column())
	}
}

impl fmt::Display for CallSite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.file, self.line, self.column)
	}
}
