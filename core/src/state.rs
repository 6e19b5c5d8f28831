//! Immutable snapshot data model.
//!
//! Every piece of application state here is a value: once constructed it is
//! never mutated in place. "Updating" produces a new value, and anything the
//! update did not touch keeps its previous allocation. That structural
//! sharing is what makes the cheap pointer-equality checks in the binding and
//! render layers sound.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Unique identifier for a todo record.
///
/// Ids are caller-supplied and immutable once a record is created. Identity
/// of a record is its id; value equality of a record is all three fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record.
///
/// Records are immutable value types: two records are equal iff all fields
/// match, and an "update" such as [`Todo::toggled`] allocates a new record
/// while the old one remains valid wherever it is still referenced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, immutable once created
    pub id: TodoId,
    /// Text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed todo record
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Returns a new record with `completed` negated
    ///
    /// The receiver is left untouched; callers holding the old record keep
    /// observing the old value.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            completed: !self.completed,
        }
    }
}

/// Immutable, structurally shared sequence of todo records.
///
/// Insertion order is display order. The container and every element live
/// behind [`Arc`], so a derived or updated list shares all untouched elements
/// with its predecessor, and "did this element change?" is a pointer
/// comparison rather than a deep one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList(Arc<[Arc<Todo>]>);

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Number of records in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the record at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<Todo>> {
        self.0.get(index)
    }

    /// Returns the record with the given id, if any
    #[must_use]
    pub fn find(&self, id: TodoId) -> Option<&Arc<Todo>> {
        self.0.iter().find(|todo| todo.id == id)
    }

    /// Whether a record with the given id exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.find(id).is_some()
    }

    /// Iterates over the records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Todo>> {
        self.0.iter()
    }

    /// View of the underlying records
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<Todo>] {
        &self.0
    }

    /// Returns a new list with `todo` appended
    ///
    /// The container is a new allocation, but every pre-existing element
    /// keeps its identity; only the appended record is newly allocated.
    #[must_use]
    pub fn with_appended(&self, todo: Todo) -> Self {
        let mut records: Vec<Arc<Todo>> = Vec::with_capacity(self.0.len() + 1);
        records.extend(self.0.iter().map(Arc::clone));
        records.push(Arc::new(todo));
        Self(Arc::from(records))
    }

    /// Whether both lists are the same allocation
    #[must_use]
    pub fn same_allocation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Shallow structural comparison: same allocation, or same length with
    /// every element pair pointer-identical
    ///
    /// This is the equality contract the binding layer gates on. It never
    /// inspects record fields; immutability guarantees that pointer-identical
    /// elements are value-identical.
    #[must_use]
    pub fn shallow_eq(&self, other: &Self) -> bool {
        if self.same_allocation(other) {
            return true;
        }
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Arc<Todo>> for TodoList {
    fn from_iter<I: IntoIterator<Item = Arc<Todo>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Todo> for TodoList {
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        Self(iter.into_iter().map(Arc::new).collect())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Arc<Todo>;
    type IntoIter = std::slice::Iter<'a, Arc<Todo>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Which subset of todos a view displays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Display every todo
    #[default]
    ShowAll,
    /// Display only todos that are not completed
    ShowActive,
    /// Display only completed todos
    ShowCompleted,
}

impl VisibilityFilter {
    /// Canonical name of the filter, as accepted by `FromStr`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowActive => "SHOW_ACTIVE",
            Self::ShowCompleted => "SHOW_COMPLETED",
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable application state snapshot.
///
/// A snapshot is replaced, never mutated: each reduction yields either a new
/// `Arc<AppState>` (when something changed) or the identical existing one
/// (when nothing did). Readers always observe a complete snapshot because
/// replacement is a single pointer swap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All todos, in insertion order
    pub todos: TodoList,
    /// Currently active visibility filter
    pub filter: VisibilityFilter,
}

impl AppState {
    /// Creates the initial snapshot: no todos, [`VisibilityFilter::ShowAll`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared handle to one immutable state snapshot
pub type Snapshot = Arc<AppState>;

/// Whether two snapshot handles point at the same allocation
///
/// This is the check the whole optimization rests on: a no-op reduction
/// returns the identical snapshot, so downstream layers can skip all work on
/// a pointer comparison alone.
#[must_use]
pub fn same_snapshot(a: &Snapshot, b: &Snapshot) -> bool {
    Arc::ptr_eq(a, b)
}
