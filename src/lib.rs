mod action;
pub mod error;
mod reducer;
mod resource;
pub mod state;
mod types;

pub use action::{action_creators_for, Action, ActionCreators};
pub use error::StateError;
pub use reducer::{initial_from, reducers_for, Reduce, Reducer};
pub use resource::Resource;
pub use state::{is_immutable, ResourceState};
pub use types::{action_types_for, ActionTypes};
