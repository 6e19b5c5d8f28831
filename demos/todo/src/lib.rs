//! Console rendering for the todo walkthrough demo.
//!
//! The "renderer" here is just stdout. What matters is how rarely it gets
//! called: the binding and the per-item gate decide that, this crate only
//! draws whatever they let through.

use rerender_core::render::RenderSink;
use rerender_core::Todo;

/// Sink that draws headings and rows to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn draw_heading(&mut self, heading: &str) {
        println!("== {heading} ==");
    }

    fn draw_item(&mut self, todo: &Todo) {
        let status = if todo.completed { "x" } else { " " };
        println!("  [{status}] #{} {}", todo.id, todo.text);
    }
}
