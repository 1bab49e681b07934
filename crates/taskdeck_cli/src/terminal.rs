//! Plain-text render sink for the terminal board.

use std::io::Write;
use taskdeck_core::{BoardView, RenderSink, TaskView};

/// Writes each rendered board to any `Write` target.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, view: &BoardView) {
        let text = format_board(view);
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("event=render module=terminal status=error error={err}");
        }
    }
}

/// One task row, e.g. `[x]  #3  Buy milk  (high, groceries, 2026-02-13 10:00)`.
pub fn format_row(task: &TaskView) -> String {
    format!(
        "{} #{:<3} {}  ({}, {}, {})",
        if task.completed { "[x]" } else { "[ ]" },
        task.id,
        task.title,
        task.priority,
        task.category,
        task.created
    )
}

pub fn format_board(view: &BoardView) -> String {
    let filters = view
        .filters
        .iter()
        .map(|control| {
            if control.active {
                format!("[{}]", control.label)
            } else {
                control.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut text = format!("\n{filters}\n");
    match &view.empty_state {
        Some(message) => text.push_str(&format!("  {message}\n")),
        None => {
            for task in &view.tasks {
                text.push_str(&format!("  {}\n", format_row(task)));
            }
        }
    }
    let stats = &view.stats;
    text.push_str(&format!(
        "total {} · done {} · pending {} · {}% complete\n",
        stats.total, stats.completed, stats.pending, stats.completion_rate
    ));
    text
}
