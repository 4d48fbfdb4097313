use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::attributes::{take_string, take_value, Attributes};
use crate::confirmation::{ActionConfirmation, ConfirmSource};
use crate::style::ActionType;
use crate::{ActionError, ActionResult};

/// One interactive element (a button) inside a Slack message attachment.
///
/// Slack requires `name`, `text` and `type`, but that is enforced on their side; any field may be
/// left unset here. `type` starts out as [`ActionType::Button`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Attributes")]
pub struct AttachmentAction {
	name: Option<String>,
	text: Option<String>,
	style: Option<String>,
	r#type: String,
	value: Option<String>,
	confirm: Option<ActionConfirmation>,
}

impl Default for AttachmentAction {
	fn default() -> Self {
		Self {
			name: None,
			text: None,
			style: None,
			r#type: ActionType::Button.into(),
			value: None,
			confirm: None,
		}
	}
}

impl AttachmentAction {
	/// Build an action from a mapping with the optional keys `name`, `text`, `style`, `type`,
	/// `value` and `confirm`. Keys that are absent or `null` leave the field unset; unknown keys
	/// are ignored.
	///
	/// # Errors
	///
	/// [`ActionError::InvalidArgument`] if a string field holds a non-string, or if `confirm` is
	/// not a keyed mapping.
	#[instrument(level = "debug", skip_all, fields(keys = attributes.len()))]
	pub fn new(mut attributes: Attributes) -> ActionResult<Self> {
		let mut action = Self::default();
		if let Some(name) = take_string(&mut attributes, "name")? {
			action.set_name(name);
		}
		if let Some(text) = take_string(&mut attributes, "text")? {
			action.set_text(text);
		}
		if let Some(style) = take_string(&mut attributes, "style")? {
			action.set_style(style);
		}
		if let Some(kind) = take_string(&mut attributes, "type")? {
			action.set_type(kind);
		}
		if let Some(value) = take_string(&mut attributes, "value")? {
			action.set_value(value);
		}
		if let Some(confirm) = take_value(&mut attributes, "confirm") {
			action.set_confirm(confirm)?;
		}
		if !attributes.is_empty() {
			let ignored: Vec<&String> = attributes.keys().collect();
			trace!(?ignored, "ignoring unknown attributes");
		}
		debug!(?action, "built attachment action");
		Ok(action)
	}

	/// A fresh button labelled `text`.
	pub fn new_button(text: impl Into<String>) -> Self {
		let mut action = Self::default();
		action.button(text);
		action
	}

	/// Parse an action from a JSON object, e.g. one read out of a configuration file.
	///
	/// # Errors
	///
	/// [`ActionError::Json`] if `json` is not a JSON object, otherwise as [`Self::new`].
	pub fn from_json_str(json: &str) -> ActionResult<Self> {
		let attributes: Attributes = serde_json::from_str(json)?;
		Self::new(attributes)
	}

	/// The identifier Slack sends back to the action URL.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
	/// Set the name.
	pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = Some(name.into());
		self
	}
	/// Unset the name.
	pub fn clear_name(&mut self) -> &mut Self {
		self.name = None;
		self
	}

	/// The label shown on the action.
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}
	/// Set the label.
	pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.text = Some(text.into());
		self
	}
	/// Unset the label.
	pub fn clear_text(&mut self) -> &mut Self {
		self.text = None;
		self
	}

	/// The button style, see [`ActionStyle`](crate::ActionStyle) for the known values.
	pub fn style(&self) -> Option<&str> {
		self.style.as_deref()
	}
	/// Set the style. Any string is accepted.
	pub fn set_style(&mut self, style: impl Into<String>) -> &mut Self {
		self.style = Some(style.into());
		self
	}
	/// Unset the style.
	pub fn clear_style(&mut self) -> &mut Self {
		self.style = None;
		self
	}

	/// The action type, `button` unless changed.
	pub fn r#type(&self) -> &str {
		&self.r#type
	}
	/// Set the action type. Any string is accepted.
	pub fn set_type(&mut self, kind: impl Into<String>) -> &mut Self {
		self.r#type = kind.into();
		self
	}

	/// The opaque value Slack sends back to the action URL.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}
	/// Set the value.
	pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
		self.value = Some(value.into());
		self
	}
	/// Unset the value.
	pub fn clear_value(&mut self) -> &mut Self {
		self.value = None;
		self
	}

	/// The confirmation dialog, if one was set.
	pub fn confirm(&self) -> Option<&ActionConfirmation> {
		self.confirm.as_ref()
	}
	/// Set the confirmation dialog, either from an [`ActionConfirmation`] or from a keyed mapping
	/// (an [`Attributes`] map or a JSON object [`Value`]).
	///
	/// # Errors
	///
	/// [`ActionError::InvalidArgument`] if `confirm` is a JSON value other than an object, or if
	/// the mapping holds non-string fields.
	pub fn set_confirm<C>(&mut self, confirm: C) -> ActionResult<&mut Self>
	where
		C: TryInto<ConfirmSource>,
		ActionError: From<C::Error>,
	{
		let confirmation = confirm.try_into()?.into_confirmation()?;
		trace!(?confirmation, "setting action confirmation");
		self.confirm = Some(confirmation);
		Ok(self)
	}
	/// Remove the confirmation dialog.
	pub fn clear_confirm(&mut self) -> &mut Self {
		self.confirm = None;
		self
	}

	/// Make this a button labelled `text`.
	pub fn button(&mut self, text: impl Into<String>) -> &mut Self {
		self.set_text(text).set_type(ActionType::Button)
	}

	/// Builder form of [`Self::set_name`].
	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.set_name(name);
		self
	}
	/// Builder form of [`Self::set_text`].
	#[must_use]
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.set_text(text);
		self
	}
	/// Builder form of [`Self::set_style`].
	#[must_use]
	pub fn with_style(mut self, style: impl Into<String>) -> Self {
		self.set_style(style);
		self
	}
	/// Builder form of [`Self::set_type`].
	#[must_use]
	pub fn with_type(mut self, kind: impl Into<String>) -> Self {
		self.set_type(kind);
		self
	}
	/// Builder form of [`Self::set_value`].
	#[must_use]
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.set_value(value);
		self
	}
	/// Builder form of [`Self::set_confirm`].
	///
	/// # Errors
	///
	/// See [`Self::set_confirm`].
	pub fn with_confirm<C>(mut self, confirm: C) -> ActionResult<Self>
	where
		C: TryInto<ConfirmSource>,
		ActionError: From<C::Error>,
	{
		self.set_confirm(confirm)?;
		Ok(self)
	}

	/// The mapping sent to Slack, keyed `name`, `text`, `style`, `type`, `value`, `confirm` in
	/// that order. Every key is present; unset fields are `null`.
	pub fn to_mapping(&self) -> Attributes {
		let mut mapping = Attributes::new();
		mapping.insert("name".to_owned(), Value::from(self.name.clone()));
		mapping.insert("text".to_owned(), Value::from(self.text.clone()));
		mapping.insert("style".to_owned(), Value::from(self.style.clone()));
		mapping.insert("type".to_owned(), Value::from(self.r#type.clone()));
		mapping.insert("value".to_owned(), Value::from(self.value.clone()));
		mapping.insert(
			"confirm".to_owned(),
			self.confirm
				.as_ref()
				.map_or(Value::Null, |confirm| Value::Object(confirm.to_mapping())),
		);
		mapping
	}
}

impl TryFrom<Attributes> for AttachmentAction {
	type Error = ActionError;

	fn try_from(attributes: Attributes) -> Result<Self, Self::Error> {
		Self::new(attributes)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::ActionStyle;

	fn attrs(value: Value) -> Attributes {
		match value {
			Value::Object(map) => map,
			other => panic!("fixture must be an object, got {other}"),
		}
	}

	#[test]
	fn empty_action_serializes_with_every_key() {
		let action = AttachmentAction::new(Attributes::new()).unwrap();
		assert_eq!(
			Value::Object(action.to_mapping()),
			json!({
				"name": null,
				"text": null,
				"style": null,
				"type": "button",
				"value": null,
				"confirm": null,
			})
		);
		assert_eq!(action, AttachmentAction::default());
	}

	#[test]
	fn mapping_keys_are_ordered() {
		let keys: Vec<_> = AttachmentAction::default().to_mapping().keys().cloned().collect();
		assert_eq!(keys, ["name", "text", "style", "type", "value", "confirm"]);
	}

	#[test]
	fn every_attribute_is_read() -> Result<(), ActionError> {
		let action = AttachmentAction::new(attrs(json!({
			"name": "game",
			"text": "Play",
			"style": "danger",
			"type": "select",
			"value": "chess",
			"confirm": { "text": "Are you sure?" },
		})))?;
		assert_eq!(action.name(), Some("game"));
		assert_eq!(action.text(), Some("Play"));
		assert_eq!(action.style(), Some("danger"));
		assert_eq!(action.r#type(), "select");
		assert_eq!(action.value(), Some("chess"));
		assert_eq!(action.confirm().and_then(ActionConfirmation::text), Some("Are you sure?"));
		Ok(())
	}

	#[test]
	fn absent_keys_stay_unset() -> Result<(), ActionError> {
		let action = AttachmentAction::new(attrs(json!({ "text": "Play", "value": null })))?;
		assert_eq!(action.name(), None);
		assert_eq!(action.text(), Some("Play"));
		assert_eq!(action.style(), None);
		assert_eq!(action.r#type(), "button");
		assert_eq!(action.value(), None);
		assert!(action.confirm().is_none());
		Ok(())
	}

	#[test]
	fn non_string_name_is_rejected() {
		let err = AttachmentAction::new(attrs(json!({ "name": ["a"] }))).unwrap_err();
		assert!(matches!(err, ActionError::InvalidArgument { field: "name", found: "an array", .. }));
	}

	#[test]
	fn setters_chain_and_getters_read_back() {
		let mut action = AttachmentAction::default();
		action.set_name("approve")
			.set_text("Approve")
			.set_style(ActionStyle::Primary)
			.set_value("42");
		assert_eq!(action.name(), Some("approve"));
		assert_eq!(action.text(), Some("Approve"));
		assert_eq!(action.style(), Some("primary"));
		assert_eq!(action.value(), Some("42"));
		action.clear_style().clear_value();
		assert_eq!(action.style(), None);
		assert_eq!(action.value(), None);
	}

	#[test]
	fn confirm_from_mapping_equals_direct_confirmation() -> Result<(), ActionError> {
		let mut action = AttachmentAction::default();
		action.set_confirm(json!({ "text": "Are you sure?" }))?;
		let direct = ActionConfirmation::new(attrs(json!({ "text": "Are you sure?" })))?;
		assert_eq!(action.confirm().map(ActionConfirmation::to_mapping), Some(direct.to_mapping()));
		Ok(())
	}

	#[test]
	fn confirm_from_integer_is_rejected() {
		let mut action = AttachmentAction::default();
		let err = action.set_confirm(json!(5)).unwrap_err();
		assert!(matches!(err, ActionError::InvalidArgument { field: "confirm", .. }));
		assert!(action.confirm().is_none());
	}

	#[test]
	fn confirm_string_attribute_fails_construction() {
		let err = AttachmentAction::new(attrs(json!({ "confirm": "yes" }))).unwrap_err();
		assert!(matches!(err, ActionError::InvalidArgument { field: "confirm", found: "a string", .. }));
	}

	#[test]
	fn typed_confirmation_is_stored_as_is() -> Result<(), ActionError> {
		let confirmation = ActionConfirmation::default().with_title("Sure?").with_ok_text("Yes");
		let action = AttachmentAction::default().with_confirm(confirmation.clone())?;
		assert_eq!(action.confirm(), Some(&confirmation));
		Ok(())
	}

	#[test]
	fn button_sets_text_and_type() {
		let mut action = AttachmentAction::default().with_type("select");
		action.button("Click me");
		assert_eq!(action.text(), Some("Click me"));
		assert_eq!(action.r#type(), "button");
		assert_eq!(AttachmentAction::new_button("Click me"), action);
	}

	#[test]
	fn serialize_matches_mapping() -> Result<(), Box<dyn std::error::Error>> {
		let action = AttachmentAction::new_button("Go")
			.with_name("go")
			.with_confirm(json!({ "title": "Go?" }))?;
		assert_eq!(serde_json::to_value(&action)?, Value::Object(action.to_mapping()));
		Ok(())
	}
}
