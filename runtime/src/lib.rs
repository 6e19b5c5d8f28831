//! # Rerender Runtime
//!
//! The store: an explicitly constructed, owned instance holding the current
//! state snapshot. No module-level singleton exists; whoever needs the store
//! receives one (or a clone sharing the same state) by value.
//!
//! The store guarantees the reference-stability contract the rest of the
//! pipeline depends on:
//!
//! - Dispatch is serialized: one action is fully reduced before the next,
//!   and the snapshot is replaced atomically by reference. Readers always
//!   observe a complete snapshot.
//! - A no-op reduction — one where the reducer hands back the identical
//!   snapshot — is suppressed: subscribers are not notified, so nothing
//!   downstream even wakes up.
//!
//! ## Example
//!
//! ```
//! use rerender_core::{Action, AppReducer, AppState, TodoId};
//! use rerender_runtime::Store;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Store::new(AppState::new(), AppReducer::new());
//!
//! store
//!     .dispatch(Action::AddTodo { id: TodoId::new(0), text: "read".into() })
//!     .await;
//! let count = store.state(|s| s.todos.len()).await;
//! assert_eq!(count, 1);
//! # }
//! ```

use rerender_core::reducer::SnapshotReducer;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Default capacity of the change-notification channel
const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// The store runtime
///
/// Holds the current snapshot behind a single writer lock and broadcasts
/// each *effective* snapshot replacement to subscribers. Cloning a `Store`
/// yields a handle to the same state and the same channel.
pub struct Store<R>
where
    R: SnapshotReducer,
{
    state: Arc<RwLock<Arc<R::State>>>,
    reducer: R,
    changes: broadcast::Sender<Arc<R::State>>,
}

impl<R> Store<R>
where
    R: SnapshotReducer + Send + Sync,
    R::State: Send + Sync + 'static,
    R::Action: Send,
{
    /// Creates a store with the given initial state and reducer
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, DEFAULT_BROADCAST_CAPACITY)
    }

    /// Creates a store with a custom change-notification capacity
    ///
    /// Increase the capacity when subscribers may lag many dispatches behind;
    /// a lagging subscriber that overflows the channel misses snapshots (and
    /// should re-read via [`Store::snapshot`]).
    #[must_use]
    pub fn with_broadcast_capacity(initial_state: R::State, reducer: R, capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(Arc::new(initial_state))),
            reducer,
            changes,
        }
    }

    /// Dispatches an action and returns the resulting snapshot
    ///
    /// The reducer runs while holding the write lock, so concurrent
    /// dispatches serialize and each action sees the snapshot its
    /// predecessor produced. When the reducer returns the identical snapshot
    /// (a no-op), the stored reference is left alone and no notification is
    /// sent.
    #[tracing::instrument(skip(self, action), name = "store_dispatch")]
    pub async fn dispatch(&self, action: R::Action) -> Arc<R::State> {
        let mut guard = self.state.write().await;
        let previous = Arc::clone(&guard);
        let next = self.reducer.reduce(&previous, action);
        let changed = !Arc::ptr_eq(&previous, &next);
        if changed {
            *guard = Arc::clone(&next);
        }
        drop(guard);

        if changed {
            // A send error just means no renderer is subscribed yet.
            let _ = self.changes.send(Arc::clone(&next));
            tracing::debug!(
                subscribers = self.changes.receiver_count(),
                "snapshot replaced"
            );
        } else {
            tracing::debug!("no-op reduction, notification suppressed");
        }

        next
    }

    /// Returns the current snapshot
    pub async fn snapshot(&self) -> Arc<R::State> {
        Arc::clone(&*self.state.read().await)
    }

    /// Reads a value out of the current state
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let guard = self.state.read().await;
        f(&guard)
    }

    /// Subscribes to effective snapshot replacements
    ///
    /// The rendering collaborator listens here; no-op dispatches never
    /// produce a message.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<R::State>> {
        self.changes.subscribe()
    }
}

impl<R> Clone for Store<R>
where
    R: SnapshotReducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            changes: self.changes.clone(),
        }
    }
}
