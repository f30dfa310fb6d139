/* src/error.rs */

/// Errors raised while building a [`Location`](crate::Location) from untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
	/// The input is not an absolute URI.
	#[error("invalid uri `{input}`: {source}")]
	InvalidUri {
		input: String,
		#[source]
		source: url::ParseError,
	},
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, LocationError>;
