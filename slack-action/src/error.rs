//! # Errors
//!
//! The error type returned while building actions and their confirmations.

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised while building an [`AttachmentAction`](crate::AttachmentAction) or an
/// [`ActionConfirmation`](crate::ActionConfirmation).
/// Marked `#[non_exhaustive]` so new failure kinds do not break callers matching on it.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ActionError {
	/// A field was given a value of the wrong shape.
	#[error("invalid value for `{field}`: expected {expected}, found {found}")]
	InvalidArgument {
		/// The attribute key being set.
		field: &'static str,
		/// What the field accepts.
		expected: &'static str,
		/// The JSON kind that was supplied instead.
		found: &'static str,
	},
	/// The input could not be parsed as a JSON object.
	#[error("malformed action json")]
	Json(#[from] serde_json::Error),
}

impl From<Infallible> for ActionError {
	fn from(infallible: Infallible) -> Self {
		match infallible {}
	}
}
