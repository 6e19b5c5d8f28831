//! Derived-view selection.
//!
//! `select_visible` turns the full todo list and the active filter into the
//! sub-sequence a view should display. It is pure and, thanks to the closed
//! [`VisibilityFilter`] enum, total. The tutorial's "unknown filter throws"
//! behavior lives at the text boundary: parsing a filter name, or selecting
//! by name, fails with [`SelectorError::UnknownFilter`]. That failure marks a
//! programmer error (a filter value outside the recognized set) and must be
//! surfaced to the caller, never swallowed.

use crate::state::{TodoList, VisibilityFilter};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the selection layer
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// A filter name outside the recognized set reached the selector
    ///
    /// This indicates a state/UI inconsistency on the caller's side, not a
    /// recoverable runtime condition.
    #[error("unknown visibility filter: {0}")]
    UnknownFilter(String),
}

impl FromStr for VisibilityFilter {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHOW_ALL" => Ok(Self::ShowAll),
            "SHOW_ACTIVE" => Ok(Self::ShowActive),
            "SHOW_COMPLETED" => Ok(Self::ShowCompleted),
            other => Err(SelectorError::UnknownFilter(other.to_string())),
        }
    }
}

/// Derives the visible sub-sequence for a filter
///
/// Order is preserved and elements keep their identity. `ShowAll` returns
/// the input list itself (same allocation), so the common case costs one
/// reference count bump and keeps container identity intact for the binding
/// layer's shallow comparison.
#[must_use]
pub fn select_visible(todos: &TodoList, filter: VisibilityFilter) -> TodoList {
    match filter {
        VisibilityFilter::ShowAll => todos.clone(),
        VisibilityFilter::ShowActive => todos
            .iter()
            .filter(|todo| !todo.completed)
            .map(Arc::clone)
            .collect(),
        VisibilityFilter::ShowCompleted => todos
            .iter()
            .filter(|todo| todo.completed)
            .map(Arc::clone)
            .collect(),
    }
}

/// Selects by filter name, for callers holding the filter as text
///
/// # Errors
///
/// Returns [`SelectorError::UnknownFilter`] when `filter` is not one of the
/// recognized names.
pub fn select_visible_named(todos: &TodoList, filter: &str) -> Result<TodoList, SelectorError> {
    Ok(select_visible(todos, filter.parse()?))
}
