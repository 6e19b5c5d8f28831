//! Console walkthrough of the gated render pipeline.
//!
//! Dispatches a handful of actions and narrates, after each one, how much of
//! the "UI" actually redrew. Run with `RUST_LOG=debug` to watch the binding
//! and the store skip work.

use rerender_core::{
    select_visible_named, Action, AppReducer, AppState, ListBinding, OwnProps, RenderStats,
    Snapshot, TodoId, TodoListView, VisibilityFilter,
};
use rerender_runtime::Store;
use todo_demo::ConsoleSink;

/// Feeds one snapshot through the binding and, when the binding lets it
/// through, renders a pass.
fn sync_view(
    binding: &mut ListBinding,
    view: &mut TodoListView<ConsoleSink>,
    snapshot: &Snapshot,
) {
    match binding.map_state(snapshot) {
        Some(props) => {
            let RenderStats { drawn, skipped } = view.render(&props);
            println!("  -> {drawn} drawn, {skipped} skipped\n");
        },
        None => println!("  -> view untouched\n"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = Store::new(AppState::new(), AppReducer::new());
    let mut binding = ListBinding::new(OwnProps::new("todos"));
    let mut view = TodoListView::new(ConsoleSink, |id: TodoId| {
        tracing::info!(%id, "row clicked");
    });

    println!("adding two todos...");
    let snapshot = store
        .dispatch(Action::AddTodo {
            id: TodoId::new(0),
            text: "learn structural sharing".to_string(),
        })
        .await;
    sync_view(&mut binding, &mut view, &snapshot);

    let snapshot = store
        .dispatch(Action::AddTodo {
            id: TodoId::new(1),
            text: "learn shallow equality".to_string(),
        })
        .await;
    sync_view(&mut binding, &mut view, &snapshot);

    println!("toggling todo 0 (one row changes, the other keeps its identity)...");
    let snapshot = store.dispatch(Action::ToggleTodo { id: TodoId::new(0) }).await;
    sync_view(&mut binding, &mut view, &snapshot);

    println!("toggling a todo that does not exist (identity no-op)...");
    let snapshot = store
        .dispatch(Action::ToggleTodo { id: TodoId::new(99) })
        .await;
    sync_view(&mut binding, &mut view, &snapshot);

    println!("narrowing to completed todos (the surviving row was already drawn)...");
    let snapshot = store
        .dispatch(Action::SetVisibilityFilter {
            filter: VisibilityFilter::ShowCompleted,
        })
        .await;
    sync_view(&mut binding, &mut view, &snapshot);

    // A filter name outside the recognized set is a programmer error; it is
    // surfaced, never swallowed.
    if let Err(error) = select_visible_named(&snapshot.todos, "BOGUS") {
        tracing::error!(%error, "rejected filter name");
    }

    println!("back to everything, then a bigger list...");
    let snapshot = store
        .dispatch(Action::SetVisibilityFilter {
            filter: VisibilityFilter::ShowAll,
        })
        .await;
    sync_view(&mut binding, &mut view, &snapshot);

    for id in 2..100u64 {
        store
            .dispatch(Action::AddTodo {
                id: TodoId::new(id),
                text: format!("todo {id}"),
            })
            .await;
    }
    let snapshot = store.snapshot().await;
    sync_view(&mut binding, &mut view, &snapshot);

    println!("toggling one of 100 rows...");
    let snapshot = store.dispatch(Action::ToggleTodo { id: TodoId::new(57) }).await;
    sync_view(&mut binding, &mut view, &snapshot);
}
