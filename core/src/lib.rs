//! # Rerender Core
//!
//! A walkthrough of cutting redundant UI re-renders by combining two ideas:
//!
//! - **Structurally shared immutable state**: every reduction yields a new
//!   snapshot that shares all untouched data with its predecessor, and a
//!   no-op reduction yields the identical snapshot.
//! - **Shallow-equality gating**: the state-to-props binding and the
//!   per-item render gate both decide "did anything I care about change?"
//!   with cheap pointer comparisons, which immutability makes sound.
//!
//! Data flows one direction:
//!
//! ```text
//! action → reducer → snapshot → binding (gated) → per-item gate → sink
//! ```
//!
//! The example domain is deliberately tiny — a todo list with add, toggle,
//! and filter — because the point is the change-detection discipline, not
//! the app.
//!
//! ## Example
//!
//! ```
//! use rerender_core::{
//!     Action, AppReducer, AppState, ListBinding, OwnProps, SnapshotReducer,
//!     TodoId,
//! };
//! use std::sync::Arc;
//!
//! let reducer = AppReducer::new();
//! let mut binding = ListBinding::new(OwnProps::new("todos"));
//!
//! let empty = Arc::new(AppState::new());
//! let one = reducer.reduce(
//!     &empty,
//!     Action::AddTodo { id: TodoId::new(0), text: "learn gating".into() },
//! );
//!
//! assert!(binding.map_state(&one).is_some());
//! // Same snapshot again: the view hears nothing.
//! assert!(binding.map_state(&one).is_none());
//!
//! // Toggling an id that does not exist is a true no-op: the reducer
//! // returns the identical snapshot and the binding skips selection.
//! let same = reducer.reduce(&one, Action::ToggleTodo { id: TodoId::new(9) });
//! assert!(Arc::ptr_eq(&one, &same));
//! assert!(binding.map_state(&same).is_none());
//! ```

/// Actions: the closed set of state transitions
pub mod action;

/// State-to-props binding with equality gating
pub mod binding;

/// Pure snapshot-to-snapshot reduction
pub mod reducer;

/// Per-item render gating
pub mod render;

/// Derived-view selection and the unknown-filter boundary
pub mod selector;

/// Immutable snapshot data model
pub mod state;

pub use action::Action;
pub use binding::{ListBinding, ListProps, OwnProps};
pub use reducer::{AppReducer, SnapshotReducer};
pub use render::{
    should_redraw, ItemProps, RenderSink, RenderStats, TodoListView, ToggleCallback,
    ToggleHandler,
};
pub use selector::{select_visible, select_visible_named, SelectorError};
pub use state::{same_snapshot, AppState, Snapshot, Todo, TodoId, TodoList, VisibilityFilter};
