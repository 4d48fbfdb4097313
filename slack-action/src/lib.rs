//! Value objects for the interactive actions (buttons) of a Slack message attachment.
//!
//! An [`AttachmentAction`] is built from a keyed attribute mapping or with its setters, and
//! turned into the JSON payload Slack expects with [`AttachmentAction::to_mapping`] or plain
//! `serde` serialization.
//!
//! ```
//! use serde_json::json;
//! use slack_action::{ActionStyle, AttachmentAction};
//!
//! let action = AttachmentAction::new_button("Approve")
//! 	.with_name("deploy")
//! 	.with_style(ActionStyle::Primary)
//! 	.with_value("v1.2.0")
//! 	.with_confirm(json!({ "text": "Ship it?" }))?;
//! assert_eq!(action.r#type(), "button");
//! # Ok::<(), slack_action::ActionError>(())
//! ```
#![deny(clippy::all, clippy::map_unwrap_or, clippy::unwrap_used, missing_docs, unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod action;
mod attributes;
mod confirmation;
mod error;
mod style;

pub use action::AttachmentAction;
pub use attributes::Attributes;
pub use confirmation::{ActionConfirmation, ConfirmSource};
pub use error::ActionError;
pub use style::{ActionStyle, ActionType};

/// A result type that is quicker to write than `Result<T, ActionError>`.
pub type ActionResult<T> = Result<T, ActionError>;
