/* src/site/filter.rs */

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use super::CallSite;

/// Source path prefix of the Rust standard library as embedded by rustc.
pub const STD_PREFIX: &str = "/rustc";

static BUILTIN: LazyLock<FrameFilter> = LazyLock::new(|| {
	let filter = FrameFilter::empty().exclude(STD_PREFIX);
	match crate_source_root() {
		Some(root) => filter.exclude(root),
		None => filter,
	}
});

/// Directory holding this crate's sources, as rustc names it (`src`, or an
/// absolute registry path when built as a dependency).
fn crate_source_root() -> Option<&'static str> {
	Path::new(file!()).parent()?.parent()?.to_str()
}

/// An ordered set of path prefixes. Call sites under any of them are treated
/// as library or runtime internals and are never reported.
///
/// Matching is done per path component, so `src` excludes `src/lib.rs` but
/// not `src_extra/lib.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFilter {
	prefixes: Vec<Cow<'static, str>>,
}

impl FrameFilter {
	/// A filter that accepts every call site.
	pub const fn empty() -> Self {
		Self {
			prefixes: Vec::new(),
		}
	}

	/// The shared filter used by [`Location::intrinsic`](crate::Location::intrinsic).
	pub fn builtin() -> &'static FrameFilter {
		&BUILTIN
	}

	/// Adds a prefix. Empty prefixes are ignored.
	pub fn exclude(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
		let prefix = prefix.into();
		if !prefix.is_empty() && !self.prefixes.contains(&prefix) {
			self.prefixes.push(prefix);
		}
		self
	}

	pub fn prefixes(&self) -> impl Iterator<Item = &str> {
		self.prefixes.iter().map(|p| p.as_ref())
	}

	pub fn is_excluded(&self, site: &CallSite) -> bool {
		let file = Path::new(site.file);
		self.prefixes.iter().any(|p| file.starts_with(p.as_ref()))
	}

	/// Returns the first frame, innermost first, that is not excluded.
	pub fn select<I>(&self, frames: I) -> Option<CallSite>
	where
		I: IntoIterator<Item = CallSite>,
	{
		frames.into_iter().find(|site| !self.is_excluded(site))
	}
}

impl Default for FrameFilter {
	fn default() -> Self {
		BUILTIN.clone()
	}
}
