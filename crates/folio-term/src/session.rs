//! One terminal session: scrollback, history, theme and the dispatcher.

use std::sync::Arc;
use tracing::{debug, info};

use folio_config::ClientConfig;
use folio_core::Line;

use crate::api::PortfolioApi;
use crate::commands::{CommandContext, CommandOutput, CommandRegistry};
use crate::complete::{Candidates, complete};
use crate::history::History;
use crate::prefs::ThemePreference;
use crate::scrollback::Scrollback;
use crate::theme::{Theme, default_theme, theme_names};

/// What a submission changed, for the caller to render.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SubmitResult {
    /// Lines added to the scrollback, starting with the command echo.
    pub appended: Vec<Line>,
    /// The scrollback was emptied.
    pub cleared: bool,
    pub theme_changed: bool,
}

pub struct TerminalSession {
    api: Arc<dyn PortfolioApi>,
    registry: CommandRegistry,
    scrollback: Scrollback,
    history: History,
    theme: &'static Theme,
    prompt: String,
    whoami: String,
    education: String,
    project_slugs: Vec<String>,
    prefs: Option<ThemePreference>,
}

impl TerminalSession {
    pub fn new(api: Arc<dyn PortfolioApi>, client: &ClientConfig) -> Self {
        Self {
            api,
            registry: CommandRegistry::with_builtins(),
            scrollback: Scrollback::new(),
            history: History::new(),
            theme: default_theme(),
            prompt: client.prompt.clone(),
            whoami: client.whoami.clone(),
            education: client.education.clone(),
            project_slugs: Vec::new(),
            prefs: None,
        }
    }

    /// Restore the stored theme and remember future theme changes.
    pub fn with_preferences(mut self, prefs: ThemePreference) -> Self {
        self.theme = prefs.load();
        debug!(theme = self.theme.name, "restored theme");
        self.prefs = Some(prefs);
        self
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn lines(&self) -> &[Line] {
        self.scrollback.lines()
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn project_slugs(&self) -> &[String] {
        &self.project_slugs
    }

    /// Load project slugs for completion. Failure leaves the list as it was.
    pub async fn refresh_project_slugs(&mut self) {
        match self.api.projects().await {
            Ok(projects) => {
                self.project_slugs = projects.into_iter().map(|p| p.project_slug).collect();
                debug!(count = self.project_slugs.len(), "loaded project slugs");
            }
            Err(e) => debug!(error = %e, "project slugs unavailable for completion"),
        }
    }

    /// Tab-complete `input`; `None` leaves it unchanged.
    pub fn complete(&self, input: &str) -> Option<String> {
        let commands = self.registry.completion_names();
        let themes: Vec<&str> = theme_names().collect();
        complete(
            input,
            &Candidates {
                commands: &commands,
                project_slugs: &self.project_slugs,
                themes: &themes,
            },
        )
    }

    /// Run one input line. Blank input does nothing.
    pub async fn submit(&mut self, raw: &str) -> SubmitResult {
        let command = raw.trim();
        if command.is_empty() {
            return SubmitResult::default();
        }
        self.history.push(command);

        let ticket = self.scrollback.begin();
        let output = self.dispatch(command).await;

        if output.clear {
            self.scrollback.clear();
        }

        let mut batch = Vec::with_capacity(output.lines.len() + 1);
        if !output.clear {
            batch.push(Line::command(&self.prompt, command));
        }
        batch.extend(output.lines);

        let appended = if self.scrollback.apply(ticket, batch.clone()) {
            batch
        } else {
            debug!(command, "discarding stale output");
            Vec::new()
        };

        let theme_changed = match output.theme {
            Some(theme) => {
                self.set_theme(theme);
                true
            }
            None => false,
        };

        SubmitResult {
            appended,
            cleared: output.clear,
            theme_changed,
        }
    }

    async fn dispatch(&self, command: &str) -> CommandOutput {
        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let Some(handler) = self.registry.get(name) else {
            debug!(command, "unknown command");
            return CommandOutput::error(format!("Unknown command: {command}. Type 'help'."));
        };

        let ctx = CommandContext {
            api: self.api.as_ref(),
            registry: &self.registry,
            whoami: &self.whoami,
            education: &self.education,
        };
        handler.run(&args, &ctx).await
    }

    fn set_theme(&mut self, theme: &'static Theme) {
        info!(theme = theme.name, "theme changed");
        self.theme = theme;
        if let Some(prefs) = &self.prefs {
            prefs.save(theme);
        }
    }
}
