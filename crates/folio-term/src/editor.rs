//! Key handling for the input line.

use console::Key;

use crate::history::{History, HistoryStep};

/// What the shell should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// The buffer changed; redraw the input line.
    Redraw,
    /// Nothing to do.
    Ignore,
    /// Run this line. The buffer is now empty.
    Submit(String),
    Quit,
}

/// Single-line input buffer. The cursor always sits at the end.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
}

const CTRL_D: char = '\u{4}';

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Apply `key`. `complete` returns the completed input, or `None` to
    /// leave it unchanged.
    pub fn handle<F>(&mut self, key: Key, history: &mut History, complete: F) -> EditorAction
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match key {
            Key::Enter => EditorAction::Submit(std::mem::take(&mut self.buffer)),
            Key::CtrlC => EditorAction::Quit,
            Key::Char(CTRL_D) | Key::Escape if self.buffer.is_empty() => EditorAction::Quit,
            Key::Escape => {
                self.buffer.clear();
                EditorAction::Redraw
            }
            Key::Char(c) if !c.is_control() => {
                self.buffer.push(c);
                EditorAction::Redraw
            }
            Key::Backspace => match self.buffer.pop() {
                Some(_) => EditorAction::Redraw,
                None => EditorAction::Ignore,
            },
            Key::Tab => match complete(&self.buffer) {
                Some(completed) => {
                    self.buffer = completed;
                    EditorAction::Redraw
                }
                None => EditorAction::Ignore,
            },
            Key::ArrowUp => self.apply_history(history.previous()),
            Key::ArrowDown => self.apply_history(history.next()),
            _ => EditorAction::Ignore,
        }
    }

    fn apply_history(&mut self, step: HistoryStep) -> EditorAction {
        match step {
            HistoryStep::Unchanged => EditorAction::Ignore,
            HistoryStep::Show(entry) => {
                self.buffer = entry;
                EditorAction::Redraw
            }
            HistoryStep::Clear => {
                self.buffer.clear();
                EditorAction::Redraw
            }
        }
    }
}
