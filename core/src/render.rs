//! Per-item render gating.
//!
//! The binding layer decides whether the list view re-renders at all; this
//! layer decides, item by item, which rows actually get redrawn. The gate is
//! a shallow comparison of [`ItemProps`]: the todo record by pointer
//! identity, the toggle callback by its bound identity. Because reducers
//! preserve the identity of untouched records, toggling one of N items
//! redraws exactly one row.
//!
//! The callback rule matters as much as the data rule: a parent that mints a
//! fresh closure per render pass would make every row look changed. Here a
//! callback's identity is a pure function of the item's immutable id and the
//! view's single shared handler, so it is stable across passes by
//! construction.

use crate::binding::ListProps;
use crate::state::{Todo, TodoId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared toggle handler invoked with the id of the row that was clicked
pub type ToggleHandler = Arc<dyn Fn(TodoId) + Send + Sync>;

/// A toggle callback whose identity is bound to one item's id
///
/// Cloning preserves identity; [`ToggleCallback::same`] compares the bound
/// id and the handler allocation, never the closure's behavior.
#[derive(Clone)]
pub struct ToggleCallback {
    id: TodoId,
    handler: ToggleHandler,
}

impl ToggleCallback {
    /// Binds `handler` to the given item id
    #[must_use]
    pub fn new(id: TodoId, handler: ToggleHandler) -> Self {
        Self { id, handler }
    }

    /// The id this callback is bound to
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Invokes the handler with the bound id
    pub fn invoke(&self) {
        (self.handler)(self.id);
    }

    /// Identity comparison: same bound id and same handler allocation
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for ToggleCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleCallback")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Props handed to a single rendered row
#[derive(Clone, Debug)]
pub struct ItemProps {
    /// The record to display
    pub todo: Arc<Todo>,
    /// Stable callback toggling this row
    pub on_toggle: ToggleCallback,
}

impl ItemProps {
    /// Shallow comparison: record by pointer, callback by bound identity
    #[must_use]
    pub fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.todo, &other.todo) && self.on_toggle.same(&other.on_toggle)
    }
}

/// Decides whether a row must be redrawn given its previous and next props
#[must_use]
pub fn should_redraw(prev: &ItemProps, next: &ItemProps) -> bool {
    !prev.shallow_eq(next)
}

/// The drawing collaborator boundary
///
/// The real renderer (terminal, DOM, whatever) lives behind this trait; the
/// gating logic only guarantees how rarely these methods are called.
pub trait RenderSink {
    /// Draw the list heading
    fn draw_heading(&mut self, heading: &str);

    /// Draw one list row
    fn draw_item(&mut self, todo: &Todo);
}

/// Outcome of one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Rows drawn this pass
    pub drawn: usize,
    /// Rows skipped because their props were shallow-equal
    pub skipped: usize,
}

/// Gated list renderer
///
/// Keeps the previous pass's per-row props keyed by id and consults
/// [`should_redraw`] before touching the sink. Rows never seen before always
/// draw; rows that vanish from the visible list are simply dropped from the
/// cache.
pub struct TodoListView<S> {
    sink: S,
    on_toggle: ToggleHandler,
    last_heading: Option<String>,
    last_items: HashMap<TodoId, ItemProps>,
}

impl<S: RenderSink> TodoListView<S> {
    /// Creates a view drawing into `sink`, toggling rows through `on_toggle`
    pub fn new(sink: S, on_toggle: impl Fn(TodoId) + Send + Sync + 'static) -> Self {
        Self {
            sink,
            on_toggle: Arc::new(on_toggle),
            last_heading: None,
            last_items: HashMap::new(),
        }
    }

    /// Stable per-row callback: identity depends only on the id and the
    /// view's shared handler, never on the render pass
    fn callback_for(&self, id: TodoId) -> ToggleCallback {
        ToggleCallback::new(id, Arc::clone(&self.on_toggle))
    }

    /// Renders one pass over the visible list, drawing only gated-in rows
    pub fn render(&mut self, props: &ListProps) -> RenderStats {
        if self.last_heading.as_deref() != Some(props.heading.as_str()) {
            self.sink.draw_heading(&props.heading);
            self.last_heading = Some(props.heading.clone());
        }

        let mut stats = RenderStats::default();
        let mut next_items = HashMap::with_capacity(props.visible.len());

        for todo in &props.visible {
            let next = ItemProps {
                todo: Arc::clone(todo),
                on_toggle: self.callback_for(todo.id),
            };

            let redraw = self
                .last_items
                .get(&todo.id)
                .is_none_or(|prev| should_redraw(prev, &next));

            if redraw {
                self.sink.draw_item(todo);
                stats.drawn += 1;
            } else {
                stats.skipped += 1;
            }

            next_items.insert(todo.id, next);
        }

        self.last_items = next_items;
        tracing::debug!(drawn = stats.drawn, skipped = stats.skipped, "render pass");
        stats
    }

    /// Access to the sink, for inspection
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}
