use crudfold::{action_types_for, ActionTypes, Resource};
use serde_json::json;

#[test]
fn test_action_types_for_users() {
    let expected = ActionTypes {
        fetch_start: "USERS_FETCH_START".to_string(),
        fetch_success: "USERS_FETCH_SUCCESS".to_string(),
        fetch_error: "USERS_FETCH_ERROR".to_string(),
    };
    assert_eq!(action_types_for("users"), expected);
}

#[test]
fn test_mixed_case_name_is_uppercased() {
    let types = action_types_for("blogPosts");
    assert_eq!(types.fetch_start, "BLOGPOSTS_FETCH_START");
    assert_eq!(types.fetch_success, "BLOGPOSTS_FETCH_SUCCESS");
    assert_eq!(types.fetch_error, "BLOGPOSTS_FETCH_ERROR");
}

#[test]
fn test_same_namespace_same_types() {
    assert_eq!(action_types_for("users"), action_types_for("Users"));
    assert_eq!(action_types_for("users"), action_types_for(&Resource::new("USERS")));
}

#[test]
fn test_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(action_types_for("users")).unwrap();
    assert_eq!(
        value,
        json!({
            "fetchStart": "USERS_FETCH_START",
            "fetchSuccess": "USERS_FETCH_SUCCESS",
            "fetchError": "USERS_FETCH_ERROR",
        })
    );
    assert_eq!(value.as_object().unwrap().len(), 3);
}

#[test]
fn test_contains() {
    let types = action_types_for("users");
    assert!(types.contains("USERS_FETCH_SUCCESS"));
    assert!(!types.contains("POSTS_FETCH_SUCCESS"));
    assert!(!types.contains("users_fetch_success"));
}

#[test]
fn test_empty_name() {
    let types = action_types_for("");
    assert_eq!(types.fetch_start, "_FETCH_START");
}
