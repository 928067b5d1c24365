use crate::resource::Resource;
use serde::{Deserialize, Serialize};

pub(crate) const START_SUFFIX: &str = "_FETCH_START";
pub(crate) const SUCCESS_SUFFIX: &str = "_FETCH_SUCCESS";
pub(crate) const ERROR_SUFFIX: &str = "_FETCH_ERROR";

/// The three action type identifiers of a resource's fetch lifecycle.
///
/// Serialized with camelCase keys (`fetchStart`, `fetchSuccess`,
/// `fetchError`) so the triple can be handed to a JavaScript store as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionTypes {
    /// `<RESOURCE>_FETCH_START`
    pub fetch_start: String,
    /// `<RESOURCE>_FETCH_SUCCESS`
    pub fetch_success: String,
    /// `<RESOURCE>_FETCH_ERROR`
    pub fetch_error: String,
}

impl ActionTypes {
    fn new(resource: &Resource) -> Self {
        let namespace = resource.namespace();
        ActionTypes {
            fetch_start: format!("{namespace}{START_SUFFIX}"),
            fetch_success: format!("{namespace}{SUCCESS_SUFFIX}"),
            fetch_error: format!("{namespace}{ERROR_SUFFIX}"),
        }
    }

    /// Whether `action_type` is one of the three identifiers.
    pub fn contains(&self, action_type: &str) -> bool {
        action_type == self.fetch_start
            || action_type == self.fetch_success
            || action_type == self.fetch_error
    }
}

/// Derive the action types for a resource.
///
/// The resource name is uppercased and suffixed with `_FETCH_START`,
/// `_FETCH_SUCCESS` and `_FETCH_ERROR`. A fresh triple is built on every call.
///
/// # Examples
///
/// ```
/// use crudfold::action_types_for;
///
/// let types = action_types_for("users");
/// assert_eq!(types.fetch_start, "USERS_FETCH_START");
/// assert_eq!(types.fetch_success, "USERS_FETCH_SUCCESS");
/// assert_eq!(types.fetch_error, "USERS_FETCH_ERROR");
/// ```
pub fn action_types_for(resource: impl Into<Resource>) -> ActionTypes {
    ActionTypes::new(&resource.into())
}
