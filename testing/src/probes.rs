//! Render probes: sinks that record instead of drawing.
//!
//! Tests about the render gate care about *how often* the sink is touched,
//! not what the pixels look like. [`RecordingSink`] captures every draw call
//! so a test can assert "exactly one row redrew".

use rerender_core::render::RenderSink;
use rerender_core::state::{Todo, TodoId};

/// A sink that records draw calls instead of drawing
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Headings drawn, in order
    pub headings: Vec<String>,
    /// Ids of rows drawn, in order (repeats are distinct draws)
    pub drawn: Vec<TodoId>,
}

impl RecordingSink {
    /// Creates an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of row draws recorded
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// How many times the given row was drawn
    #[must_use]
    pub fn draws_for(&self, id: TodoId) -> usize {
        self.drawn.iter().filter(|&&d| d == id).count()
    }
}

impl RenderSink for RecordingSink {
    fn draw_heading(&mut self, heading: &str) {
        self.headings.push(heading.to_string());
    }

    fn draw_item(&mut self, todo: &Todo) {
        self.drawn.push(todo.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_draws_in_order() {
        let mut sink = RecordingSink::new();
        sink.draw_heading("todos");
        sink.draw_item(&Todo::new(TodoId::new(0), "a".to_string()));
        sink.draw_item(&Todo::new(TodoId::new(1), "b".to_string()));
        sink.draw_item(&Todo::new(TodoId::new(0), "a".to_string()));

        assert_eq!(sink.headings, vec!["todos".to_string()]);
        assert_eq!(sink.drawn_count(), 3);
        assert_eq!(sink.draws_for(TodoId::new(0)), 2);
        assert_eq!(sink.draws_for(TodoId::new(1)), 1);
    }
}
