use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Button style.
/// [See the Slack attachment action fields](https://api.slack.com/legacy/interactive-attachments#action_fields)
///
/// Advisory only: [`AttachmentAction::set_style`](crate::AttachmentAction::set_style) accepts any string.
#[derive(
	Clone,
	Copy,
	Debug,
	Default,
	Display,
	AsRefStr,
	EnumString,
	Serialize,
	Deserialize,
	Eq,
	PartialEq,
	Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
	/// A plain grey button.
	#[default]
	Default,
	/// A green button, for the affirmative choice.
	Primary,
	/// A red button, for destructive choices.
	Danger,
}

/// The kind of interactive element. Slack only knows buttons here.
#[derive(
	Clone,
	Copy,
	Debug,
	Default,
	Display,
	AsRefStr,
	EnumString,
	Serialize,
	Deserialize,
	Eq,
	PartialEq,
	Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
	/// A clickable button.
	#[default]
	Button,
}

impl From<ActionStyle> for String {
	fn from(style: ActionStyle) -> Self {
		style.as_ref().to_owned()
	}
}

impl From<ActionType> for String {
	fn from(kind: ActionType) -> Self {
		kind.as_ref().to_owned()
	}
}
