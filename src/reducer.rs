use crate::action::Action;
use crate::resource::Resource;
use crate::state::ResourceState;
use crate::types::{action_types_for, ActionTypes};
use serde_json::Value;

/// A pure function that folds an action into state.
///
/// `None` stands for a store that holds no state yet. Implementations must
/// not fail: every input yields some state, and unknown actions leave the
/// state unchanged.
pub trait Reduce {
    type State;

    fn reduce(&self, state: Option<Self::State>, action: &Action) -> Self::State;
}

/// The reducer for one resource's fetch lifecycle.
///
/// Built by [`reducers_for`]. Transitions:
///
/// | action          | `isFetching` | `error`        | resource payload |
/// |-----------------|--------------|----------------|------------------|
/// | `FETCH_START`   | `true`       | `null`         | kept             |
/// | `FETCH_SUCCESS` | `false`      | `null`         | `action.data`    |
/// | `FETCH_ERROR`   | `false`      | `action.error` | kept             |
/// | anything else   | kept         | kept           | kept             |
///
/// # Examples
///
/// ```
/// use crudfold::{action_creators_for, reducers_for, Reduce};
/// use serde_json::json;
///
/// let actions = action_creators_for("users");
/// let reducer = reducers_for("users");
///
/// let state = reducer.reduce(None, &actions.fetch_start());
/// assert!(!state.is_fetching());
///
/// let state = reducer.reduce(Some(state), &actions.fetch_start());
/// assert!(state.is_fetching());
///
/// let state = reducer.reduce(Some(state), &actions.fetch_success(json!([{"id": 1}])));
/// assert_eq!(state.to_plain(), json!({
///     "isFetching": false,
///     "error": null,
///     "users": [{"id": 1}],
/// }));
/// ```
#[derive(Debug, Clone)]
pub struct Reducer {
    resource: Resource,
    types: ActionTypes,
    default_state: ResourceState,
}

impl Reducer {
    /// The resource this reducer owns.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// The action types this reducer transitions on.
    pub fn types(&self) -> &ActionTypes {
        &self.types
    }

    /// `{"isFetching": false, "error": null, "<resource>": []}`
    pub fn default_state(&self) -> ResourceState {
        self.default_state.clone()
    }

    /// Fold `actions` into `state` in order.
    ///
    /// Equivalent to calling [`Reduce::reduce`] once per action, so starting
    /// from `None` the first action only initializes the state. An empty
    /// sequence from `None` yields the default state.
    pub fn fold<'a, I>(&self, state: Option<ResourceState>, actions: I) -> ResourceState
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut state = state;
        for action in actions {
            state = Some(self.reduce(state, action));
        }
        state.unwrap_or_else(|| self.default_state())
    }

    /// Reduce plain JSON state with a plain JSON action.
    ///
    /// For stores that keep state as untyped JSON. An absent or falsy state
    /// (`null`, `false`, `0`, `""`) yields the default plain state. A state
    /// without the resource state shape is returned unchanged. Actions that
    /// cannot be decoded are treated as unknown.
    pub fn reduce_value(&self, state: Option<&Value>, action: &Value) -> Value {
        let Some(state) = state.filter(|s| is_truthy(s)) else {
            log::debug!("{}: no state, using default", self.resource);
            return self.default_state.to_plain();
        };

        let action = Action::from_value(action);
        match ResourceState::from_plain(&self.resource, state) {
            Ok(current) => self.reduce(Some(current), &action).to_plain(),
            Err(err) => {
                log::warn!("{}: refusing to reduce incompatible state: {err}", self.resource);
                state.clone()
            }
        }
    }

    fn targets(&self, resource: &Resource) -> bool {
        self.resource.matches(resource)
    }
}

impl Reduce for Reducer {
    type State = ResourceState;

    fn reduce(&self, state: Option<ResourceState>, action: &Action) -> ResourceState {
        let Some(state) = state else {
            log::debug!("{}: no state, using default", self.resource);
            return self.default_state();
        };

        if !self.targets(state.resource()) {
            log::warn!(
                "{}: refusing to reduce state owned by '{}'",
                self.resource,
                state.resource()
            );
            return state;
        }

        match action.canonical().as_ref() {
            Action::FetchStart { resource } if self.targets(resource) => {
                log::trace!("{}: {}", self.resource, self.types.fetch_start);
                state.with_fetching(true).with_error(Value::Null)
            }
            Action::FetchSuccess { resource, data } if self.targets(resource) => {
                log::trace!("{}: {}", self.resource, self.types.fetch_success);
                state
                    .with_fetching(false)
                    .with_error(Value::Null)
                    .with_data(data.clone())
            }
            Action::FetchError { resource, error } if self.targets(resource) => {
                log::trace!("{}: {}", self.resource, self.types.fetch_error);
                state.with_fetching(false).with_error(error.clone())
            }
            Action::FetchStart { .. }
            | Action::FetchSuccess { .. }
            | Action::FetchError { .. }
            | Action::Other { .. } => state,
        }
    }
}

/// Build the reducer for a resource.
pub fn reducers_for(resource: impl Into<Resource>) -> Reducer {
    let resource = resource.into();
    Reducer {
        types: action_types_for(&resource),
        default_state: ResourceState::new(resource.clone()),
        resource,
    }
}

/// Obtain a reducer's initial state.
///
/// Equivalent to reducing an absent state with an untyped action.
///
/// # Examples
///
/// ```
/// use crudfold::{initial_from, reducers_for};
/// use serde_json::json;
///
/// let state = initial_from(&reducers_for("users"));
/// assert_eq!(state.to_plain(), json!({"isFetching": false, "error": null, "users": []}));
/// ```
pub fn initial_from<R: Reduce>(reducer: &R) -> R::State {
    reducer.reduce(None, &Action::Other { action_type: None })
}

// JavaScript truthiness, restricted to JSON values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
