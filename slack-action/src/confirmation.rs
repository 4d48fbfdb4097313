use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::attributes::{json_kind, take_string, Attributes};
use crate::{ActionError, ActionResult};

/// A dialog Slack shows before an action fires, asking the user to confirm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Attributes")]
pub struct ActionConfirmation {
	title: Option<String>,
	text: Option<String>,
	ok_text: Option<String>,
	dismiss_text: Option<String>,
}

impl ActionConfirmation {
	/// Build a confirmation from a mapping with the optional keys `title`, `text`, `ok_text` and
	/// `dismiss_text`. Unknown keys are ignored.
	///
	/// # Errors
	///
	/// [`ActionError::InvalidArgument`] if one of the known keys holds something other than a
	/// string or `null`.
	#[instrument(level = "debug", skip_all, fields(keys = attributes.len()))]
	pub fn new(mut attributes: Attributes) -> ActionResult<Self> {
		let confirmation = Self {
			title: take_string(&mut attributes, "title")?,
			text: take_string(&mut attributes, "text")?,
			ok_text: take_string(&mut attributes, "ok_text")?,
			dismiss_text: take_string(&mut attributes, "dismiss_text")?,
		};
		debug!(?confirmation, "built action confirmation");
		Ok(confirmation)
	}

	/// The dialog title.
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}
	/// The dialog body.
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}
	/// Label of the button that confirms.
	pub fn ok_text(&self) -> Option<&str> {
		self.ok_text.as_deref()
	}
	/// Label of the button that dismisses the dialog.
	pub fn dismiss_text(&self) -> Option<&str> {
		self.dismiss_text.as_deref()
	}

	/// Set the dialog title.
	pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
		self.title = Some(title.into());
		self
	}
	/// Set the dialog body.
	pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.text = Some(text.into());
		self
	}
	/// Set the label of the confirming button.
	pub fn set_ok_text(&mut self, ok_text: impl Into<String>) -> &mut Self {
		self.ok_text = Some(ok_text.into());
		self
	}
	/// Set the label of the dismissing button.
	pub fn set_dismiss_text(&mut self, dismiss_text: impl Into<String>) -> &mut Self {
		self.dismiss_text = Some(dismiss_text.into());
		self
	}

	/// Builder form of [`Self::set_title`].
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.set_title(title);
		self
	}
	/// Builder form of [`Self::set_text`].
	#[must_use]
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.set_text(text);
		self
	}
	/// Builder form of [`Self::set_ok_text`].
	#[must_use]
	pub fn with_ok_text(mut self, ok_text: impl Into<String>) -> Self {
		self.set_ok_text(ok_text);
		self
	}
	/// Builder form of [`Self::set_dismiss_text`].
	#[must_use]
	pub fn with_dismiss_text(mut self, dismiss_text: impl Into<String>) -> Self {
		self.set_dismiss_text(dismiss_text);
		self
	}

	/// The mapping sent to Slack. All four keys are always present, unset ones as `null`.
	pub fn to_mapping(&self) -> Attributes {
		let mut mapping = Attributes::new();
		mapping.insert("title".to_owned(), Value::from(self.title.clone()));
		mapping.insert("text".to_owned(), Value::from(self.text.clone()));
		mapping.insert("ok_text".to_owned(), Value::from(self.ok_text.clone()));
		mapping.insert("dismiss_text".to_owned(), Value::from(self.dismiss_text.clone()));
		mapping
	}
}

impl TryFrom<Attributes> for ActionConfirmation {
	type Error = ActionError;

	fn try_from(attributes: Attributes) -> Result<Self, Self::Error> {
		Self::new(attributes)
	}
}

/// The forms accepted when setting an action's confirmation: an already built
/// [`ActionConfirmation`], or a raw mapping still to be turned into one.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmSource {
	/// Stored as-is.
	Confirmation(ActionConfirmation),
	/// Parsed with [`ActionConfirmation::new`] before being stored.
	Attributes(Attributes),
}

impl ConfirmSource {
	/// Resolve into a confirmation, parsing the mapping form.
	///
	/// # Errors
	///
	/// See [`ActionConfirmation::new`].
	pub fn into_confirmation(self) -> ActionResult<ActionConfirmation> {
		match self {
			Self::Confirmation(confirmation) => Ok(confirmation),
			Self::Attributes(attributes) => ActionConfirmation::new(attributes),
		}
	}
}

impl From<ActionConfirmation> for ConfirmSource {
	fn from(confirmation: ActionConfirmation) -> Self {
		Self::Confirmation(confirmation)
	}
}

impl From<Attributes> for ConfirmSource {
	fn from(attributes: Attributes) -> Self {
		Self::Attributes(attributes)
	}
}

impl TryFrom<Value> for ConfirmSource {
	type Error = ActionError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::Object(attributes) => Ok(Self::Attributes(attributes)),
			other => {
				let found = json_kind(&other);
				debug!(found, "rejecting action confirmation");
				Err(ActionError::InvalidArgument {
					field: "confirm",
					expected: "an ActionConfirmation or a keyed mapping",
					found,
				})
			}
		}
	}
}
