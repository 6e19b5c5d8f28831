//! # Rerender Testing
//!
//! Testing utilities and helpers for the rerender walkthrough.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for snapshot reducers
//! - Snapshot identity assertions (`assert_identity` / `assert_replaced`)
//! - Render probes that count draw calls
//! - Small helpers for observing store change notifications
//!
//! ## Example
//!
//! ```
//! use rerender_core::{Action, AppReducer, AppState, TodoId};
//! use rerender_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(AppReducer::new())
//!     .given_state(AppState::new())
//!     .when_action(Action::ToggleTodo { id: TodoId::new(42) })
//!     .then_transition(assertions::assert_identity)
//!     .run();
//! ```

/// Render probes: sinks that record instead of drawing
pub mod probes;


use tokio::sync::broadcast;

/// Drains every already-delivered message from a broadcast subscription
///
/// Useful for asserting exactly which snapshots a store broadcast: dispatch,
/// then drain and inspect. Stops at the first empty/lagged read.
pub fn drain_changes<T: Clone>(receiver: &mut broadcast::Receiver<T>) -> Vec<T> {
    let mut received = Vec::new();
    while let Ok(message) = receiver.try_recv() {
        received.push(message);
    }
    received
}

/// Installs a compact tracing subscriber for tests
///
/// Honors `RUST_LOG`; calling it from several tests is fine — only the first
/// call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use probes::RecordingSink;
pub use reducer_test::{assertions, ReducerTest};
