//! The ordered list of lines shown in the terminal.
//!
//! Output batches are stamped with a ticket when their command is issued. A
//! batch whose ticket is older than the newest one already applied is
//! dropped, so a slow response can never land after a newer command's
//! output.

use folio_core::Line;

/// Issue stamp for one command's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Scrollback {
    lines: Vec<Line>,
    issued: u64,
    applied: u64,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Reserve a ticket for a command about to run.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Append a command's output. Returns `false` when the batch is stale
    /// and was discarded.
    pub fn apply(&mut self, ticket: Ticket, batch: Vec<Line>) -> bool {
        if ticket.0 < self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.lines.extend(batch);
        true
    }
}
