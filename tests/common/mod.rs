#![allow(dead_code)]

use crudfold::{action_creators_for, reducers_for, ActionCreators, Reducer};
use serde_json::{json, Value};

pub const RESOURCE: &str = "users";

pub fn mock_data() -> Value {
    json!({"some": "data"})
}

pub fn users() -> (ActionCreators, Reducer) {
    (action_creators_for(RESOURCE), reducers_for(RESOURCE))
}

pub fn plain_state(is_fetching: bool, error: Value, users: Value) -> Value {
    json!({
        "isFetching": is_fetching,
        "error": error,
        "users": users,
    })
}
