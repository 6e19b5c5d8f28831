//! End-to-end tests across the whole pipeline: store, binding, render gate.

use rerender_core::{
    select_visible, Action, AppReducer, AppState, ListBinding, OwnProps, RenderStats, TodoId,
    TodoListView, VisibilityFilter,
};
use rerender_runtime::Store;
use rerender_testing::{drain_changes, init_test_tracing, RecordingSink};
use std::sync::Arc;

#[tokio::test]
async fn end_to_end_scenario() {
    init_test_tracing();
    let store = Store::new(AppState::new(), AppReducer::new());

    // Two adds.
    store
        .dispatch(Action::AddTodo {
            id: TodoId::new(0),
            text: "a".to_string(),
        })
        .await;
    let after_adds = store
        .dispatch(Action::AddTodo {
            id: TodoId::new(1),
            text: "b".to_string(),
        })
        .await;

    assert_eq!(after_adds.todos.len(), 2);
    assert!(after_adds.todos.get(0).is_some_and(|t| t.text == "a" && !t.completed));
    assert!(after_adds.todos.get(1).is_some_and(|t| t.text == "b" && !t.completed));

    // Toggle the first: the second keeps its identity.
    let after_toggle = store.dispatch(Action::ToggleTodo { id: TodoId::new(0) }).await;
    assert!(after_toggle.todos.get(0).is_some_and(|t| t.completed));
    let second_shared = matches!(
        (after_adds.todos.get(1), after_toggle.todos.get(1)),
        (Some(a), Some(b)) if Arc::ptr_eq(a, b)
    );
    assert!(second_shared);

    // Narrow to completed: exactly the toggled row is visible.
    let final_state = store
        .dispatch(Action::SetVisibilityFilter {
            filter: VisibilityFilter::ShowCompleted,
        })
        .await;
    let visible = select_visible(&final_state.todos, final_state.filter);
    assert_eq!(visible.len(), 1);
    assert!(visible.get(0).is_some_and(|t| {
        t.id == TodoId::new(0) && t.text == "a" && t.completed
    }));
}

#[tokio::test]
async fn toggling_one_of_a_hundred_redraws_exactly_one_row() {
    let store = Store::new(AppState::new(), AppReducer::new());
    for id in 0..100u64 {
        store
            .dispatch(Action::AddTodo {
                id: TodoId::new(id),
                text: format!("todo {id}"),
            })
            .await;
    }

    let mut binding = ListBinding::new(OwnProps::new("todos"));
    let mut view = TodoListView::new(RecordingSink::new(), |_| {});

    // First pass draws everything.
    let snapshot = store.snapshot().await;
    let props = binding.map_state(&snapshot);
    let stats = props.map(|p| view.render(&p));
    assert_eq!(stats, Some(RenderStats { drawn: 100, skipped: 0 }));

    // One toggle, one redraw.
    let snapshot = store.dispatch(Action::ToggleTodo { id: TodoId::new(37) }).await;
    let props = binding.map_state(&snapshot);
    let stats = props.map(|p| view.render(&p));
    assert_eq!(stats, Some(RenderStats { drawn: 1, skipped: 99 }));

    assert_eq!(view.sink().draws_for(TodoId::new(37)), 2);
    assert_eq!(view.sink().drawn_count(), 101);
}

#[tokio::test]
async fn noop_dispatches_reach_no_layer_at_all() {
    let store = Store::new(AppState::new(), AppReducer::new());
    store
        .dispatch(Action::AddTodo {
            id: TodoId::new(0),
            text: "a".to_string(),
        })
        .await;

    let mut binding = ListBinding::new(OwnProps::new("todos"));
    let first = store.snapshot().await;
    assert!(binding.map_state(&first).is_some());

    let mut changes = store.subscribe();

    // Unmatched toggle and same-value filter set: nothing is broadcast,
    // and feeding the (identical) snapshot to the binding is a skip.
    store.dispatch(Action::ToggleTodo { id: TodoId::new(9) }).await;
    store
        .dispatch(Action::SetVisibilityFilter {
            filter: VisibilityFilter::ShowAll,
        })
        .await;

    assert!(drain_changes(&mut changes).is_empty());
    assert!(binding.map_state(&store.snapshot().await).is_none());

    // An effective dispatch is heard exactly once.
    store.dispatch(Action::ToggleTodo { id: TodoId::new(0) }).await;
    let received = drain_changes(&mut changes);
    assert_eq!(received.len(), 1);
    assert!(binding.map_state(&store.snapshot().await).is_some());
}

#[tokio::test]
async fn subscriber_driven_rendering() {
    let store = Store::new(AppState::new(), AppReducer::new());
    let mut changes = store.subscribe();
    let mut binding = ListBinding::new(OwnProps::new("todos"));
    let mut view = TodoListView::new(RecordingSink::new(), |_| {});

    for id in 0..3u64 {
        store
            .dispatch(Action::AddTodo {
                id: TodoId::new(id),
                text: format!("todo {id}"),
            })
            .await;
    }
    store.dispatch(Action::ToggleTodo { id: TodoId::new(1) }).await;

    // Replay the notifications the way a rendering collaborator would.
    let mut total = RenderStats::default();
    for snapshot in drain_changes(&mut changes) {
        if let Some(props) = binding.map_state(&snapshot) {
            let stats = view.render(&props);
            total.drawn += stats.drawn;
            total.skipped += stats.skipped;
        }
    }

    // Passes: 1 drawn; 1 drawn + 1 skipped; 1 drawn + 2 skipped;
    // then the toggle: 1 drawn + 2 skipped.
    assert_eq!(total, RenderStats { drawn: 4, skipped: 5 });
    assert_eq!(view.sink().draws_for(TodoId::new(1)), 2);
}
