//! The immutable per-resource state record.

use crate::error::StateError;
use crate::resource::Resource;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

const IS_FETCHING: &str = "isFetching";
const ERROR: &str = "error";

/// State of one resource's fetch lifecycle.
///
/// The plain form is a JSON object with two fixed keys and one key named
/// after the resource:
///
/// ```text
/// {"isFetching": false, "error": null, "users": []}
/// ```
///
/// A resource named `isFetching` or `error` shadows that fixed key: the
/// payload owns the key in the plain form, and the shadowed field reads back
/// as its default (`false` or `null`).
///
/// Records are never mutated in place. The `with_*` methods consume a record
/// and return a new one; clone first to keep the previous value around.
///
/// # Examples
///
/// ```
/// use crudfold::{Resource, ResourceState};
/// use serde_json::json;
///
/// let state = ResourceState::new(Resource::new("users"));
/// assert_eq!(state.to_plain(), json!({"isFetching": false, "error": null, "users": []}));
///
/// let loading = state.clone().with_fetching(true);
/// assert!(loading.is_fetching());
/// assert!(!state.is_fetching());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState {
    resource: Resource,
    is_fetching: bool,
    error: Value,
    data: Value,
    // Keys outside the fixed shape, carried through transitions untouched.
    extra: Map<String, Value>,
}

impl ResourceState {
    /// The default state: not fetching, no error, empty payload.
    pub fn new(resource: impl Into<Resource>) -> Self {
        ResourceState {
            resource: resource.into(),
            is_fetching: false,
            error: Value::Null,
            data: Value::Array(Vec::new()),
            extra: Map::new(),
        }
    }

    /// The resource owning this state; its name is the payload key.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Whether a fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// The recorded error; [`Value::Null`] when there is none.
    pub fn error(&self) -> &Value {
        &self.error
    }

    /// The resource payload, stored under the resource's name.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Keys of the plain structure that are not part of the fixed shape.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Copy with `isFetching` replaced.
    pub fn with_fetching(mut self, is_fetching: bool) -> Self {
        self.is_fetching = is_fetching;
        self
    }

    /// Copy with the error replaced; pass [`Value::Null`] to clear it.
    pub fn with_error(mut self, error: Value) -> Self {
        self.error = error;
        self
    }

    /// Replace the payload wholesale.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Convert to the plain JSON structure.
    ///
    /// The payload is written last, so it wins over a fixed key of the same
    /// name.
    pub fn to_plain(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert(IS_FETCHING.to_string(), Value::Bool(self.is_fetching));
        map.insert(ERROR.to_string(), self.error.clone());
        map.insert(self.resource.name().to_string(), self.data.clone());
        Value::Object(map)
    }

    /// Read a state for `resource` back from its plain structure.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if `plain` is not an object, lacks one of the
    /// three keys, or `isFetching` is not a boolean.
    pub fn from_plain(resource: impl Into<Resource>, plain: &Value) -> Result<Self, StateError> {
        let resource = resource.into();
        let mut map = plain.as_object().ok_or(StateError::NotAnObject)?.clone();

        // The payload key goes first so a shadowed fixed key falls back to its default.
        let data = map
            .remove(resource.name())
            .ok_or_else(|| missing(resource.name()))?;
        let is_fetching = match map.remove(IS_FETCHING) {
            Some(Value::Bool(b)) => b,
            Some(_) => {
                return Err(StateError::InvalidField {
                    field: IS_FETCHING.to_string(),
                    expected: "a boolean",
                });
            }
            None if resource.name() == IS_FETCHING => false,
            None => return Err(missing(IS_FETCHING)),
        };
        let error = match map.remove(ERROR) {
            Some(error) => error,
            None if resource.name() == ERROR => Value::Null,
            None => return Err(missing(ERROR)),
        };

        Ok(ResourceState {
            resource,
            is_fetching,
            error,
            data,
            extra: map,
        })
    }

    /// Deserialize a state for `resource` from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or does not have the
    /// resource state shape.
    pub fn from_json(resource: impl Into<Resource>, json: &str) -> Result<Self, serde_json::Error> {
        let plain: Value = serde_json::from_str(json)?;
        Self::from_plain(resource, &plain).map_err(serde::de::Error::custom)
    }
}

fn missing(field: &str) -> StateError {
    StateError::MissingField {
        field: field.to_string(),
    }
}

impl Serialize for ResourceState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}

/// Whether a plain value has the resource state shape for `resource`.
///
/// This is the guard the dynamic reducer path uses before transitioning a
/// state it did not produce itself.
pub fn is_immutable(resource: &Resource, plain: &Value) -> bool {
    ResourceState::from_plain(resource, plain).is_ok()
}
