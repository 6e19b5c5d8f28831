//! Reducers: pure snapshot-to-snapshot transitions.
//!
//! A reducer never mutates the snapshot it is given. It returns either a new
//! snapshot sharing every untouched element with its predecessor, or — for a
//! no-op — the identical snapshot it received. The identity case is the
//! load-bearing one: it lets the store suppress notification and lets every
//! downstream layer skip work on a pointer comparison.

use crate::action::Action;
use crate::state::{AppState, Todo, TodoId, TodoList};
use std::sync::Arc;

/// The reducer abstraction: `(snapshot, action) → snapshot`
///
/// Implementations must be pure and total over their action type: no side
/// effects, no panics, and an inapplicable action reduces to the identical
/// input snapshot (`Arc::ptr_eq`), never a rebuilt copy.
pub trait SnapshotReducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// Reduce an action into the next snapshot
    fn reduce(&self, state: &Arc<Self::State>, action: Self::Action) -> Arc<Self::State>;
}

/// Reducer for the todo application state
#[derive(Clone, Copy, Debug, Default)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Produces the toggled list, or `None` when no record matches
///
/// On a match, exactly one element is newly allocated; every other element of
/// the result is the same `Arc` as in the input. On no match the caller gets
/// `None` so it can hand back the original snapshot untouched.
fn toggle_in_list(todos: &TodoList, id: TodoId) -> Option<TodoList> {
    if !todos.contains(id) {
        return None;
    }

    Some(
        todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Arc::new(todo.toggled())
                } else {
                    Arc::clone(todo)
                }
            })
            .collect(),
    )
}

impl SnapshotReducer for AppReducer {
    type State = AppState;
    type Action = Action;

    fn reduce(&self, state: &Arc<AppState>, action: Action) -> Arc<AppState> {
        match action {
            Action::AddTodo { id, text } => Arc::new(AppState {
                todos: state.todos.with_appended(Todo::new(id, text)),
                filter: state.filter,
            }),

            Action::ToggleTodo { id } => match toggle_in_list(&state.todos, id) {
                Some(todos) => Arc::new(AppState {
                    todos,
                    filter: state.filter,
                }),
                // Unmatched id: hand back the original snapshot so nothing
                // downstream sees a change at all.
                None => Arc::clone(state),
            },

            Action::SetVisibilityFilter { filter } => {
                if filter == state.filter {
                    Arc::clone(state)
                } else {
                    Arc::new(AppState {
                        // The todo sequence keeps its allocation; only the
                        // filter field is replaced.
                        todos: state.todos.clone(),
                        filter,
                    })
                }
            },
        }
    }
}
