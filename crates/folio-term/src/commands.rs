//! Built-in shell commands and the name → handler registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use folio_core::Line;

use crate::api::PortfolioApi;
use crate::theme::{THEMES, Theme, find_theme};

/// What a handler can see while it runs.
pub struct CommandContext<'a> {
    pub api: &'a dyn PortfolioApi,
    pub registry: &'a CommandRegistry,
    pub whoami: &'a str,
    pub education: &'a str,
}

/// Result of running one command.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandOutput {
    pub lines: Vec<Line>,
    /// Empty the scrollback before appending `lines`.
    pub clear: bool,
    /// Switch to this theme.
    pub theme: Option<&'static Theme>,
}

impl CommandOutput {
    pub fn text(value: impl Into<String>) -> Self {
        Self::line(Line::text(value))
    }

    pub fn error(value: impl Into<String>) -> Self {
        Self::line(Line::error(value))
    }

    pub fn line(line: Line) -> Self {
        Self {
            lines: vec![line],
            ..Default::default()
        }
    }
}

/// A shell command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// The word that invokes the command.
    fn name(&self) -> &'static str;

    /// Invocation shown in `help`, e.g. `project <slug>`.
    fn usage(&self) -> &'static str {
        self.name()
    }

    /// One-line description for `help`.
    fn summary(&self) -> &'static str;

    /// Offered by tab completion.
    fn completable(&self) -> bool {
        true
    }

    /// `args` are the whitespace-separated words after the command name.
    async fn run(&self, args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput;
}

/// Name → handler table. `help` lists handlers in registration order.
#[derive(Default, Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in command.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Help));
        registry.register(Arc::new(About));
        registry.register(Arc::new(WhoAmI));
        registry.register(Arc::new(Projects));
        registry.register(Arc::new(ProjectDetail));
        registry.register(Arc::new(Education));
        registry.register(Arc::new(Skills));
        registry.register(Arc::new(Themes));
        registry.register(Arc::new(SetTheme));
        registry.register(Arc::new(Clear));
        registry
    }

    /// Add a handler, replacing any earlier one with the same name.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        let name = handler.name();
        if self.handlers.insert(name, handler).is_some() {
            debug!(command = name, "replacing command handler");
        } else {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.handlers.get(name)
    }

    pub fn names(&self) -> &[&'static str] {
        &self.order
    }

    /// Names offered by tab completion.
    pub fn completion_names(&self) -> Vec<&'static str> {
        self.order
            .iter()
            .copied()
            .filter(|name| self.handlers.get(name).is_some_and(|h| h.completable()))
            .collect()
    }

    pub fn help_text(&self) -> String {
        let mut out = vec!["Available commands:".to_string()];
        for name in &self.order {
            if let Some(h) = self.handlers.get(name) {
                out.push(format!("  {:<9} - {}", h.usage(), h.summary()));
            }
        }
        out.join("\n")
    }
}

// ── Static commands ────────────────────────────────────────────

struct Help;

#[async_trait]
impl CommandHandler for Help {
    fn name(&self) -> &'static str {
        "help"
    }
    fn summary(&self) -> &'static str {
        "Show this help"
    }
    async fn run(&self, _args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput {
        CommandOutput::text(ctx.registry.help_text())
    }
}

struct Clear;

#[async_trait]
impl CommandHandler for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }
    fn summary(&self) -> &'static str {
        "Clear the terminal"
    }
    async fn run(&self, _args: &[&str], _ctx: &CommandContext<'_>) -> CommandOutput {
        CommandOutput {
            clear: true,
            ..Default::default()
        }
    }
}

struct WhoAmI;

#[async_trait]
impl CommandHandler for WhoAmI {
    fn name(&self) -> &'static str {
        "whoami"
    }
    fn summary(&self) -> &'static str {
        "Who am I"
    }
    async fn run(&self, _args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput {
        CommandOutput::text(ctx.whoami)
    }
}

struct Education;

#[async_trait]
impl CommandHandler for Education {
    fn name(&self) -> &'static str {
        "education"
    }
    fn summary(&self) -> &'static str {
        "Show my education"
    }
    async fn run(&self, _args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput {
        CommandOutput::text(ctx.education)
    }
}

// ── API-backed commands ────────────────────────────────────────

struct About;

#[async_trait]
impl CommandHandler for About {
    fn name(&self) -> &'static str {
        "about"
    }
    fn summary(&self) -> &'static str {
        "About me"
    }
    async fn run(&self, _args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput {
        match ctx.api.profile().await {
            Ok(Some(p)) => CommandOutput::text(format!(
                "{} — {}\n\n{}",
                p.full_name, p.professional_title, p.short_bio
            )),
            Ok(None) => CommandOutput::text("No profile found in database."),
            Err(e) => {
                warn!(error = %e, "profile request failed");
                CommandOutput::error("Failed to load profile.")
            }
        }
    }
}

struct Projects;

#[async_trait]
impl CommandHandler for Projects {
    fn name(&self) -> &'static str {
        "projects"
    }
    fn summary(&self) -> &'static str {
        "List my projects"
    }
    async fn run(&self, _args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput {
        match ctx.api.projects().await {
            Ok(projects) if projects.is_empty() => CommandOutput::text("No projects found."),
            Ok(projects) => CommandOutput::text(
                projects
                    .iter()
                    .map(|p| format!("- {} (slug: {})", p.project_name, p.project_slug))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(e) => {
                warn!(error = %e, "projects request failed");
                CommandOutput::error("Failed to load projects. Is the API running?")
            }
        }
    }
}

struct ProjectDetail;

#[async_trait]
impl CommandHandler for ProjectDetail {
    fn name(&self) -> &'static str {
        "project"
    }
    fn usage(&self) -> &'static str {
        "project <slug>"
    }
    fn summary(&self) -> &'static str {
        "Show details about a project"
    }
    // `project` is reached through slug completion instead.
    fn completable(&self) -> bool {
        false
    }
    async fn run(&self, args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput {
        let Some(slug) = args.first() else {
            return CommandOutput::error("Usage: project <projectSlug>");
        };

        match ctx.api.project(slug).await {
            Ok(p) => {
                let github = p
                    .github_repository_url
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .map(|u| format!("GitHub: {u}"))
                    .unwrap_or_default();
                let live = p
                    .live_demo_url
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .map(|u| format!("Live: {u}"))
                    .unwrap_or_default();
                let entries = [
                    format!("Name: {}", p.project_name),
                    format!("Tech: {}", p.technologies_used.join(", ")),
                    String::new(),
                    p.project_description,
                    String::new(),
                    github,
                    live,
                ];
                CommandOutput::text(
                    entries
                        .into_iter()
                        .filter(|e| !e.is_empty())
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            }
            Err(e) if e.is_not_found() => CommandOutput::error("Project not found."),
            Err(e) => {
                warn!(error = %e, slug = %slug, "project request failed");
                CommandOutput::error("Failed to load project.")
            }
        }
    }
}

struct Skills;

#[async_trait]
impl CommandHandler for Skills {
    fn name(&self) -> &'static str {
        "skills"
    }
    fn summary(&self) -> &'static str {
        "List my skills"
    }
    async fn run(&self, _args: &[&str], ctx: &CommandContext<'_>) -> CommandOutput {
        match ctx.api.skills().await {
            Ok(skills) if skills.is_empty() => CommandOutput::text("No skills found."),
            Ok(skills) => CommandOutput::line(Line::Skills { data: skills }),
            Err(e) => {
                warn!(error = %e, "skills request failed");
                CommandOutput::error("Failed to load skills. Is the API running?")
            }
        }
    }
}

// ── Themes ─────────────────────────────────────────────────────

struct Themes;

#[async_trait]
impl CommandHandler for Themes {
    fn name(&self) -> &'static str {
        "themes"
    }
    fn summary(&self) -> &'static str {
        "List available themes"
    }
    async fn run(&self, _args: &[&str], _ctx: &CommandContext<'_>) -> CommandOutput {
        let mut out = String::from("Available themes:");
        for theme in &THEMES {
            out.push_str("\n  - ");
            out.push_str(theme.name);
        }
        CommandOutput::text(out)
    }
}

struct SetTheme;

#[async_trait]
impl CommandHandler for SetTheme {
    fn name(&self) -> &'static str {
        "theme"
    }
    fn usage(&self) -> &'static str {
        "theme <name>"
    }
    fn summary(&self) -> &'static str {
        "Set a theme"
    }
    async fn run(&self, args: &[&str], _ctx: &CommandContext<'_>) -> CommandOutput {
        let wanted = args.join(" ");
        if wanted.is_empty() {
            return CommandOutput::error(
                "Usage: theme <name>\nType 'themes' to see available themes.",
            );
        }

        match find_theme(&wanted) {
            Some(theme) => CommandOutput {
                lines: vec![Line::text(format!("Theme changed to: {}", theme.name))],
                clear: false,
                theme: Some(theme),
            },
            None => CommandOutput::error(format!(
                "Theme '{wanted}' not found. Type 'themes' to see available themes."
            )),
        }
    }
}
