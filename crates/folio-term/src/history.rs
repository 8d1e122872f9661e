//! Submitted-command history with a browse cursor.

/// What the input line should do after a history step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    /// Leave the input as it is.
    Unchanged,
    /// Replace the input with this entry.
    Show(String),
    /// Walked past the newest entry: empty the input.
    Clear,
}

/// Append-only list of submitted commands. Never deduplicated.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    /// `None` while not browsing.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission and stop browsing. Blank input is not recorded.
    pub fn push(&mut self, command: &str) {
        let trimmed = command.trim();
        if !trimmed.is_empty() {
            self.entries.push(trimmed.to_string());
        }
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step towards older entries. Stops at the oldest; does not wrap.
    pub fn previous(&mut self) -> HistoryStep {
        if self.entries.is_empty() {
            return HistoryStep::Unchanged;
        }
        let next = match self.cursor {
            Some(0) => return HistoryStep::Unchanged,
            Some(i) => i - 1,
            None => self.entries.len() - 1,
        };
        self.cursor = Some(next);
        HistoryStep::Show(self.entries[next].clone())
    }

    /// Step towards newer entries; past the newest the input is cleared.
    pub fn next(&mut self) -> HistoryStep {
        let Some(i) = self.cursor else {
            return HistoryStep::Unchanged;
        };
        let next = i + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            return HistoryStep::Clear;
        }
        self.cursor = Some(next);
        HistoryStep::Show(self.entries[next].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(items: &[&str]) -> History {
        let mut h = History::new();
        for item in items {
            h.push(item);
        }
        h
    }

    #[test]
    fn test_previous_walks_back_and_stops() {
        let mut h = history(&["help", "projects", "skills"]);
        assert_eq!(h.previous(), HistoryStep::Show("skills".into()));
        assert_eq!(h.previous(), HistoryStep::Show("projects".into()));
        assert_eq!(h.previous(), HistoryStep::Show("help".into()));
        assert_eq!(h.previous(), HistoryStep::Unchanged);
        assert_eq!(h.previous(), HistoryStep::Unchanged);
    }

    #[test]
    fn test_next_clears_past_newest() {
        let mut h = history(&["help", "projects"]);
        h.previous();
        h.previous();
        assert_eq!(h.next(), HistoryStep::Show("projects".into()));
        assert_eq!(h.next(), HistoryStep::Clear);
        assert_eq!(h.next(), HistoryStep::Unchanged);
    }

    #[test]
    fn test_empty_history_is_inert() {
        let mut h = History::new();
        assert_eq!(h.previous(), HistoryStep::Unchanged);
        assert_eq!(h.next(), HistoryStep::Unchanged);
    }

    #[test]
    fn test_duplicates_kept_and_blank_ignored() {
        let h = history(&["help", "help", "   ", ""]);
        assert_eq!(h.entries(), &["help".to_string(), "help".to_string()]);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut h = history(&["a", "b"]);
        h.previous();
        h.previous();
        h.push("c");
        assert_eq!(h.previous(), HistoryStep::Show("c".into()));
    }
}
