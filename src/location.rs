/* src/location.rs */

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LocationError, Result};
use crate::site::{CallSite, FrameFilter};

/// Default description prefix of intrinsic locations.
pub const INTRINSIC_PREFIX: &str = "intrinsic";

/// Describes where a piece of configuration came from.
///
/// A location may carry a [`uri`](Location::uri) or not: configuration that is
/// compiled into the program, or read from ephemeral data such as the process
/// environment or command-line arguments, has no address.
///
/// A present `uri` only means an address was supplied. It is never checked for
/// reachability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
	description: Cow<'static, str>,
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	uri: Option<Url>,
}

impl Location {
	/// Configuration compiled into the program, with no further detail.
	///
	/// Prefer [`Location::intrinsic`], which also names the declaring call site.
	pub const INTRINSIC: Location = Location {
		description: Cow::Borrowed(INTRINSIC_PREFIX),
		uri: None,
	};

	/// The general constructor. `uri` is carried as given.
	pub fn new(description: impl Into<Cow<'static, str>>, uri: Option<Url>) -> Self {
		Self {
			description: description.into(),
			uri,
		}
	}

	/// A location with no address, e.g. `"env vars"` or `"command line"`.
	pub fn direct(description: impl Into<Cow<'static, str>>) -> Self {
		Self::new(description, None)
	}

	/// Labels a file by its absolute path. The file is never touched.
	///
	/// Relative paths are resolved against the current directory, and the empty
	/// path names the current directory itself. A path that cannot be made
	/// absolute is kept as given, and then carries no `uri`.
	///
	/// Non-UTF-8 bytes are replaced with `U+FFFD` in the description; the `uri`
	/// keeps them percent-encoded.
	pub fn from_file(path: impl AsRef<Path>) -> Self {
		let path = path.as_ref();
		let path = if path.as_os_str().is_empty() {
			Path::new(".")
		} else {
			path
		};
		let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
		let uri = Url::from_file_path(&absolute).ok();
		Self::new(absolute.to_string_lossy().into_owned(), uri)
	}

	/// Labels a URI by its string form.
	pub fn from_uri(uri: Url) -> Self {
		Self::new(uri.to_string(), Some(uri))
	}

	/// Parses `input` as an absolute URI and labels it.
	pub fn parse_uri(input: &str) -> Result<Self> {
		Url::parse(input)
			.map(Self::from_uri)
			.map_err(|source| LocationError::InvalidUri {
				input: input.to_string(),
				source,
			})
	}

	/// An intrinsic location naming the code that called this function.
	#[track_caller]
	pub fn intrinsic() -> Self {
		Self::intrinsic_with_prefix(INTRINSIC_PREFIX)
	}

	/// Like [`Location::intrinsic`], with `prefix` in place of `"intrinsic"`.
	#[track_caller]
	pub fn intrinsic_with_prefix(prefix: impl Into<Cow<'static, str>>) -> Self {
		Self::intrinsic_filtered(prefix, FrameFilter::builtin())
	}

	/// An intrinsic location whose call site is checked against `filter`.
	///
	/// The caller's `file:line:column` is appended as `"<prefix>: <site>"`
	/// unless its file lies under one of the filter's prefixes, in which case
	/// the description is just `prefix`. The reported caller is the nearest
	/// frame not marked `#[track_caller]`.
	#[track_caller]
	pub fn intrinsic_filtered(prefix: impl Into<Cow<'static, str>>, filter: &FrameFilter) -> Self {
		let caller = CallSite::caller();
		let site = filter.select(Some(caller));

		#[cfg(feature = "logging")]
		if site.is_none() {
			log::trace!("call site {} is internal, omitting it from the location", caller);
		}

		Self::intrinsic_at(prefix, site)
	}

	/// Builds `"<prefix>: <site>"`, or just `prefix` without a site.
	pub fn intrinsic_at(prefix: impl Into<Cow<'static, str>>, site: Option<CallSite>) -> Self {
		let prefix = prefix.into();
		match site {
			Some(site) => Self::direct(format!("{prefix}: {site}")),
			None => Self::direct(prefix),
		}
	}

	/// The human-readable provenance label.
	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn uri(&self) -> Option<&Url> {
		self.uri.as_ref()
	}

	/// Whether an address was supplied.
	pub fn is_addressable(&self) -> bool {
		self.uri.is_some()
	}

	pub fn into_parts(self) -> (Cow<'static, str>, Option<Url>) {
		(self.description, self.uri)
	}
}

impl Default for Location {
	fn default() -> Self {
		Self::INTRINSIC
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.description)
	}
}

impl From<Url> for Location {
	fn from(uri: Url) -> Self {
		Self::from_uri(uri)
	}
}

impl From<&Path> for Location {
	fn from(path: &Path) -> Self {
		Self::from_file(path)
	}
}

impl From<PathBuf> for Location {
	fn from(path: PathBuf) -> Self {
		Self::from_file(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn internal_callers_are_not_reported() {
		assert_eq!(Location::intrinsic(), Location::INTRINSIC);
		assert_eq!(Location::intrinsic_with_prefix("custom").description(), "custom");
	}
}
