/* src/lib.rs */

//!
//! Provenance labels for configuration data.
//!
//! A [`Location`] tells a configuration loader, and the humans reading its
//! error messages, where a value came from:
//!
//! - a file: [`Location::from_file`]
//! - a network resource: [`Location::from_uri`], [`Location::parse_uri`]
//! - somewhere without an address (environment, command line): [`Location::direct`]
//! - the program itself: [`Location::intrinsic`], which appends the caller's
//!   `file:line:column` when it lies outside this crate and the standard library
//!
//! ```
//! use whence::Location;
//!
//! let env = Location::direct("env vars");
//! assert_eq!(env.description(), "env vars");
//! assert!(env.uri().is_none());
//!
//! let defaults = Location::intrinsic_with_prefix("defaults");
//! assert!(defaults.description().starts_with("defaults"));
//! assert!(!defaults.is_addressable());
//! ```
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `serde`: `Serialize`/`Deserialize` for [`Location`], `Serialize` for [`CallSite`].
//! - `logging`: Trace-level `log` records when a call site is filtered out.

pub mod error;
pub mod location;
pub mod site;

pub use error::LocationError;
pub use location::{INTRINSIC_PREFIX, Location};
pub use site::{CallSite, FrameFilter};
pub use url::Url;
