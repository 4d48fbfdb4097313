//! Reading typed fields out of a keyed attribute mapping.

use serde_json::{Map, Value};
use tracing::debug;

use crate::{ActionError, ActionResult};

/// A keyed attribute mapping, as accepted by the constructors and produced by `to_mapping`.
/// Keys keep their insertion order.
pub type Attributes = Map<String, Value>;

/// Name of the JSON kind of `value`, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Removes `field` from `attributes` and returns it as a string.
/// A missing key and an explicit `null` both read as unset.
pub(crate) fn take_string(
	attributes: &mut Attributes,
	field: &'static str,
) -> ActionResult<Option<String>> {
	match attributes.remove(field) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s)),
		Some(other) => {
			let found = json_kind(&other);
			debug!(field, found, "rejecting non-string attribute");
			Err(ActionError::InvalidArgument { field, expected: "a string", found })
		}
	}
}

/// Removes `field` from `attributes`, treating an explicit `null` as absent.
pub(crate) fn take_value(attributes: &mut Attributes, field: &str) -> Option<Value> {
	attributes.remove(field).filter(|value| !value.is_null())
}
