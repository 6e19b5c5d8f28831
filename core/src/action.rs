//! Actions: the closed set of state transitions.
//!
//! The original pattern dispatches on a free-form `type` string with a
//! default branch for anything unrecognized. Here the action space is a sum
//! type, so the compiler checks exhaustiveness and an unrecognized action
//! kind is unrepresentable. The identity no-op contract survives in the
//! recognized-but-inapplicable cases: toggling an absent id and re-setting
//! the current filter both reduce to the identical snapshot.

use crate::state::{TodoId, VisibilityFilter};
use serde::{Deserialize, Serialize};

/// Everything that can be dispatched to the store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Append a new todo with a caller-supplied unique id
    AddTodo {
        /// Identifier for the new record; uniqueness is the caller's
        /// responsibility
        id: TodoId,
        /// Text of the new todo
        text: String,
    },

    /// Negate `completed` on the todo with the given id
    ///
    /// A no-op when no record matches.
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Replace the visibility filter
    ///
    /// A no-op when the filter already holds the requested value.
    SetVisibilityFilter {
        /// Filter to switch to
        filter: VisibilityFilter,
    },
}
