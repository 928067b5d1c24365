use crate::resource::Resource;
use crate::types::{action_types_for, ActionTypes, ERROR_SUFFIX, START_SUFFIX, SUCCESS_SUFFIX};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// A fetch-lifecycle action, or any other action sharing the same store.
///
/// On the wire an action is a flat JSON record with a `"type"` discriminant,
/// the shape reducer-based stores expect:
///
/// ```text
/// {"type": "USERS_FETCH_START"}
/// {"type": "USERS_FETCH_SUCCESS", "data": [...]}
/// {"type": "USERS_FETCH_ERROR", "error": "timeout"}
/// ```
///
/// Decoding never fails on an unknown `type`: anything that is not a fetch
/// action becomes [`Action::Other`]. A type is a fetch type only when its
/// prefix is already uppercase, so `"users_FETCH_START"` stays `Other`.
///
/// Two actions are equal when their wire forms are equal, so a `"users"`
/// action equals the same action created for `"Users"`.
///
/// # Examples
///
/// ```
/// use crudfold::{action_creators_for, Action};
/// use serde_json::json;
///
/// let action = action_creators_for("users").fetch_success(json!([{"id": 1}]));
/// assert_eq!(action.action_type().as_deref(), Some("USERS_FETCH_SUCCESS"));
///
/// let wire = serde_json::to_value(&action).unwrap();
/// assert_eq!(wire, json!({"type": "USERS_FETCH_SUCCESS", "data": [{"id": 1}]}));
///
/// let decoded: Action = serde_json::from_value(wire).unwrap();
/// assert_eq!(decoded, action);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawAction", into = "RawAction")]
pub enum Action {
    /// A fetch for `resource` has begun.
    FetchStart { resource: Resource },
    /// A fetch for `resource` completed with `data`.
    FetchSuccess { resource: Resource, data: Value },
    /// A fetch for `resource` failed with `error`.
    FetchError { resource: Resource, error: Value },
    /// Any other action. `action_type` is `None` when the record had no type.
    ///
    /// An `Other` whose type spells a fetch type behaves exactly like the
    /// corresponding fetch action with a null payload.
    Other { action_type: Option<String> },
}

impl Action {
    /// The wire `"type"` of this action.
    pub fn action_type(&self) -> Option<String> {
        match self {
            Action::FetchStart { resource } => {
                Some(format!("{}{START_SUFFIX}", resource.namespace()))
            }
            Action::FetchSuccess { resource, .. } => {
                Some(format!("{}{SUCCESS_SUFFIX}", resource.namespace()))
            }
            Action::FetchError { resource, .. } => {
                Some(format!("{}{ERROR_SUFFIX}", resource.namespace()))
            }
            Action::Other { action_type } => action_type.clone(),
        }
    }

    /// The resource a fetch action targets, `None` for [`Action::Other`].
    pub fn resource(&self) -> Option<&Resource> {
        match self {
            Action::FetchStart { resource }
            | Action::FetchSuccess { resource, .. }
            | Action::FetchError { resource, .. } => Some(resource),
            Action::Other { .. } => None,
        }
    }

    /// Build an action from its wire type and payloads.
    ///
    /// The type is classified by its `_FETCH_*` suffix; the prefix names the
    /// resource and must be uppercase, otherwise the type could never equal a
    /// generated one. Missing payloads become [`Value::Null`].
    pub fn from_parts(
        action_type: Option<String>,
        data: Option<Value>,
        error: Option<Value>,
    ) -> Self {
        let Some(action_type) = action_type else {
            return Action::Other { action_type: None };
        };

        let namespaced = |suffix: &str| {
            action_type
                .strip_suffix(suffix)
                .filter(|prefix| *prefix == prefix.to_uppercase())
        };

        if let Some(prefix) = namespaced(START_SUFFIX) {
            Action::FetchStart {
                resource: Resource::new(prefix),
            }
        } else if let Some(prefix) = namespaced(SUCCESS_SUFFIX) {
            Action::FetchSuccess {
                resource: Resource::new(prefix),
                data: data.unwrap_or(Value::Null),
            }
        } else if let Some(prefix) = namespaced(ERROR_SUFFIX) {
            Action::FetchError {
                resource: Resource::new(prefix),
                error: error.unwrap_or(Value::Null),
            }
        } else {
            Action::Other {
                action_type: Some(action_type),
            }
        }
    }

    /// Decode an action from an arbitrary JSON value.
    ///
    /// Records that are not objects, or whose `"type"` is not a string, decode
    /// to `Action::Other { action_type: None }`.
    pub fn from_value(value: &Value) -> Self {
        match serde_json::from_value::<RawAction>(value.clone()) {
            Ok(raw) => raw.into(),
            Err(_) => Action::Other { action_type: None },
        }
    }

    /// This action with an `Other` that spells a fetch type reclassified.
    pub(crate) fn canonical(&self) -> Cow<'_, Action> {
        match self {
            Action::Other {
                action_type: Some(action_type),
            } => match Action::from_parts(Some(action_type.clone()), None, None) {
                Action::Other { .. } => Cow::Borrowed(self),
                fetch => Cow::Owned(fetch),
            },
            _ => Cow::Borrowed(self),
        }
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        match (self.canonical().as_ref(), other.canonical().as_ref()) {
            (Action::FetchStart { resource: a }, Action::FetchStart { resource: b }) => {
                a.matches(b)
            }
            (
                Action::FetchSuccess { resource: a, data: x },
                Action::FetchSuccess { resource: b, data: y },
            ) => a.matches(b) && x == y,
            (
                Action::FetchError { resource: a, error: x },
                Action::FetchError { resource: b, error: y },
            ) => a.matches(b) && x == y,
            (Action::Other { action_type: a }, Action::Other { action_type: b }) => a == b,
            _ => false,
        }
    }
}

/// Flat wire form of an [`Action`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawAction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    action_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<Value>,
}

impl From<RawAction> for Action {
    fn from(raw: RawAction) -> Self {
        Action::from_parts(raw.action_type, raw.data, raw.error)
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let action_type = action.action_type();
        match action {
            Action::FetchStart { .. } | Action::Other { .. } => RawAction {
                action_type,
                ..RawAction::default()
            },
            Action::FetchSuccess { data, .. } => RawAction {
                action_type,
                data: Some(data),
                ..RawAction::default()
            },
            Action::FetchError { error, .. } => RawAction {
                action_type,
                error: Some(error),
                ..RawAction::default()
            },
        }
    }
}

/// The three action constructors of a resource.
///
/// Every call builds a fresh [`Action`]; payloads are passed through verbatim.
///
/// # Examples
///
/// ```
/// use crudfold::{action_creators_for, Action};
/// use serde_json::json;
///
/// let users = action_creators_for("users");
/// assert_eq!(
///     serde_json::to_value(users.fetch_start()).unwrap(),
///     json!({"type": "USERS_FETCH_START"})
/// );
/// assert!(matches!(users.fetch_error("boom"), Action::FetchError { .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCreators {
    resource: Resource,
    types: ActionTypes,
}

impl ActionCreators {
    /// `{"type": "<RESOURCE>_FETCH_START"}`
    pub fn fetch_start(&self) -> Action {
        Action::FetchStart {
            resource: self.resource.clone(),
        }
    }

    /// `{"type": "<RESOURCE>_FETCH_SUCCESS", "data": data}`
    pub fn fetch_success(&self, data: impl Into<Value>) -> Action {
        Action::FetchSuccess {
            resource: self.resource.clone(),
            data: data.into(),
        }
    }

    /// `{"type": "<RESOURCE>_FETCH_ERROR", "error": error}`
    pub fn fetch_error(&self, error: impl Into<Value>) -> Action {
        Action::FetchError {
            resource: self.resource.clone(),
            error: error.into(),
        }
    }

    /// The action types these creators emit.
    pub fn types(&self) -> &ActionTypes {
        &self.types
    }

    /// The resource these creators target.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }
}

/// Build the action creators for a resource.
pub fn action_creators_for(resource: impl Into<Resource>) -> ActionCreators {
    let resource = resource.into();
    ActionCreators {
        types: action_types_for(&resource),
        resource,
    }
}
