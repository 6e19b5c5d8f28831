//! State-to-props binding with equality gating.
//!
//! [`ListBinding`] sits between the store and the list view. Fed each new
//! snapshot, it decides whether the view needs to hear about it at all:
//!
//! 1. If the snapshot is pointer-identical to the last one seen and no
//!    view-local props changed, selection is skipped entirely.
//! 2. Otherwise the visible list is recomputed; if it is shallow-equal to
//!    the previous result and no view-local props changed, the view is not
//!    notified.
//! 3. View-local ("own") prop changes always force recomputation and
//!    notification, regardless of snapshot identity.

use crate::selector::select_visible;
use crate::state::{same_snapshot, Snapshot, TodoList};

/// View-local properties, owned by the consuming view rather than derived
/// from the store
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OwnProps {
    /// Heading displayed above the list
    pub heading: String,
}

impl OwnProps {
    /// Creates own props with the given heading
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }
}

/// Derived input for the list view, produced only when a re-render is due
#[derive(Clone, Debug)]
pub struct ListProps {
    /// Heading displayed above the list
    pub heading: String,
    /// Todos visible under the current filter, in display order
    pub visible: TodoList,
}

/// Equality-gated binding from state snapshots to [`ListProps`]
#[derive(Debug, Default)]
pub struct ListBinding {
    own: OwnProps,
    own_dirty: bool,
    last_seen: Option<Snapshot>,
    last_visible: Option<TodoList>,
}

impl ListBinding {
    /// Creates a binding with the given view-local props
    #[must_use]
    pub fn new(own: OwnProps) -> Self {
        Self {
            own,
            own_dirty: false,
            last_seen: None,
            last_visible: None,
        }
    }

    /// Replaces the view-local props
    ///
    /// Marks the binding dirty only when the new props actually differ, so a
    /// parent re-render handing down equal props does not defeat the gate.
    pub fn set_own_props(&mut self, own: OwnProps) {
        if own != self.own {
            self.own = own;
            self.own_dirty = true;
        }
    }

    /// Observes a snapshot and returns props iff the view must re-render
    ///
    /// Returns `None` without running selection when the snapshot is the one
    /// already observed and own props are clean. Returns `None` after
    /// selection when the derived list is shallow-equal to the previous one.
    pub fn map_state(&mut self, snapshot: &Snapshot) -> Option<ListProps> {
        let state_unchanged = self
            .last_seen
            .as_ref()
            .is_some_and(|prev| same_snapshot(prev, snapshot));

        if state_unchanged && !self.own_dirty {
            tracing::debug!("snapshot identical, selection skipped");
            return None;
        }

        let visible = select_visible(&snapshot.todos, snapshot.filter);
        let output_unchanged = self
            .last_visible
            .as_ref()
            .is_some_and(|prev| prev.shallow_eq(&visible));

        let notify = self.own_dirty || !output_unchanged;

        self.last_seen = Some(Snapshot::clone(snapshot));
        self.last_visible = Some(visible.clone());
        self.own_dirty = false;

        if notify {
            Some(ListProps {
                heading: self.own.heading.clone(),
                visible,
            })
        } else {
            tracing::debug!("derived list shallow-equal, view not notified");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::reducer::{AppReducer, SnapshotReducer};
    use crate::state::{AppState, Todo, TodoId, VisibilityFilter};
    use std::sync::Arc;

    fn snapshot(records: &[(u64, bool)], filter: VisibilityFilter) -> Snapshot {
        let todos: TodoList = records
            .iter()
            .map(|&(id, completed)| Todo {
                id: TodoId::new(id),
                text: format!("todo {id}"),
                completed,
            })
            .collect();
        Arc::new(AppState { todos, filter })
    }

    #[test]
    fn first_observation_always_notifies() {
        let mut binding = ListBinding::new(OwnProps::new("todos"));
        let state = snapshot(&[(0, false)], VisibilityFilter::ShowAll);

        let props = binding.map_state(&state);
        assert!(matches!(props, Some(p) if p.visible.len() == 1 && p.heading == "todos"));
    }

    #[test]
    fn identical_snapshot_is_skipped() {
        let mut binding = ListBinding::new(OwnProps::new("todos"));
        let state = snapshot(&[(0, false)], VisibilityFilter::ShowAll);

        assert!(binding.map_state(&state).is_some());
        assert!(binding.map_state(&state).is_none());
        assert!(binding.map_state(&Arc::clone(&state)).is_none());
    }

    #[test]
    fn changed_snapshot_with_shallow_equal_selection_is_suppressed() {
        // Completing the only active todo while SHOW_COMPLETED is active:
        // the snapshot changes, but so does the selection. For a suppressed
        // case, change the filter between two filters with identical output.
        let mut binding = ListBinding::new(OwnProps::new("todos"));
        let reducer = AppReducer::new();

        // Every todo active: SHOW_ALL and SHOW_ACTIVE select the same rows.
        let all = snapshot(&[(0, false), (1, false)], VisibilityFilter::ShowAll);
        assert!(binding.map_state(&all).is_some());

        let active = reducer.reduce(
            &all,
            Action::SetVisibilityFilter {
                filter: VisibilityFilter::ShowActive,
            },
        );
        assert!(!same_snapshot(&all, &active));
        assert!(binding.map_state(&active).is_none());
    }

    #[test]
    fn toggle_produces_new_props() {
        let mut binding = ListBinding::new(OwnProps::new("todos"));
        let reducer = AppReducer::new();
        let before = snapshot(&[(0, false), (1, false)], VisibilityFilter::ShowAll);

        assert!(binding.map_state(&before).is_some());

        let after = reducer.reduce(&before, Action::ToggleTodo { id: TodoId::new(1) });
        let props = binding.map_state(&after);
        assert!(matches!(props, Some(p) if p.visible.len() == 2));
    }

    #[test]
    fn own_prop_change_forces_notification_for_identical_snapshot() {
        let mut binding = ListBinding::new(OwnProps::new("todos"));
        let state = snapshot(&[(0, false)], VisibilityFilter::ShowAll);

        assert!(binding.map_state(&state).is_some());
        assert!(binding.map_state(&state).is_none());

        binding.set_own_props(OwnProps::new("still todo"));
        let props = binding.map_state(&state);
        assert!(matches!(props, Some(p) if p.heading == "still todo"));

        // Dirty flag resets after delivery.
        assert!(binding.map_state(&state).is_none());
    }

    #[test]
    fn equal_own_props_do_not_mark_dirty() {
        let mut binding = ListBinding::new(OwnProps::new("todos"));
        let state = snapshot(&[(0, false)], VisibilityFilter::ShowAll);

        assert!(binding.map_state(&state).is_some());
        binding.set_own_props(OwnProps::new("todos"));
        assert!(binding.map_state(&state).is_none());
    }
}
