//! Drives a [`TerminalSession`] from a real terminal.

use console::{Key, Term};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tracing::{debug, info};

use folio_config::ClientConfig;
use folio_core::{FolioError, Line, Result};

use crate::api::{HttpApi, PortfolioApi};
use crate::editor::{EditorAction, LineEditor};
use crate::prefs::ThemePreference;
use crate::render::Renderer;
use crate::session::{SubmitResult, TerminalSession};

const WELCOME: &str = "Welcome! Type 'help' to see available commands.";

/// Build a session talking HTTP to `client.api_base_url`, with the stored
/// theme restored when a preference location is known.
pub fn connect(client: &ClientConfig) -> Result<TerminalSession> {
    let api: Arc<dyn PortfolioApi> = Arc::new(HttpApi::new(
        &client.api_base_url,
        Duration::from_secs(client.timeout_secs),
    )?);
    let session = TerminalSession::new(api, client);
    Ok(match client.resolved_theme_file() {
        Some(path) => session.with_preferences(ThemePreference::new(path)),
        None => session,
    })
}

fn print_result(
    term: &Term,
    renderer: &Renderer,
    session: &TerminalSession,
    result: &SubmitResult,
) -> Result<()> {
    if result.cleared {
        term.clear_screen()?;
    }
    if result.theme_changed {
        if let Some(banner) = renderer.banner(session.theme()) {
            term.write_line(&banner)?;
        }
    }
    for line in &result.appended {
        term.write_line(&renderer.line(session.theme(), line))?;
    }
    Ok(())
}

async fn read_key(term: &Term) -> Result<Key> {
    let term = term.clone();
    tokio::task::spawn_blocking(move || term.read_key())
        .await
        .map_err(|e| FolioError::Other(e.into()))?
        .map_err(FolioError::from)
}

/// Interactive shell. Falls back to reading whole lines when stdin is not
/// a terminal.
pub async fn run(mut session: TerminalSession) -> Result<()> {
    let term = Term::stdout();
    let renderer = Renderer::for_term(&term);

    session.refresh_project_slugs().await;

    if !std::io::stdin().is_terminal() {
        debug!("stdin is not a terminal, reading lines");
        return run_lines(session, &term, &renderer).await;
    }

    info!(theme = session.theme().name, "starting interactive shell");
    if let Some(banner) = renderer.banner(session.theme()) {
        term.write_line(&banner)?;
    }
    term.write_line(&renderer.line(session.theme(), &Line::text(WELCOME)))?;

    let mut editor = LineEditor::new();
    term.write_str(&renderer.prompt(session.theme(), session.prompt(), editor.buffer()))?;

    loop {
        let key = read_key(&term).await?;
        let completion = match key {
            Key::Tab => session.complete(editor.buffer()),
            _ => None,
        };

        match editor.handle(key, session.history_mut(), |_| completion) {
            EditorAction::Ignore => continue,
            EditorAction::Redraw => term.clear_line()?,
            EditorAction::Quit => {
                term.write_line("")?;
                break;
            }
            EditorAction::Submit(input) => {
                term.clear_line()?;
                let result = session.submit(&input).await;
                print_result(&term, &renderer, &session, &result)?;
            }
        }
        term.write_str(&renderer.prompt(session.theme(), session.prompt(), editor.buffer()))?;
    }

    Ok(())
}

async fn run_lines(mut session: TerminalSession, term: &Term, renderer: &Renderer) -> Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(input) = lines.next_line().await? {
        let result = session.submit(&input).await;
        print_result(term, renderer, &session, &result)?;
    }
    Ok(())
}

/// Run a single command line and print its output without the echo.
/// Returns the lines produced.
pub async fn run_exec(mut session: TerminalSession, input: &str) -> Result<Vec<Line>> {
    let term = Term::stdout();
    let renderer = Renderer::for_term(&term);

    let result = session.submit(input).await;
    let output: Vec<Line> = result
        .appended
        .into_iter()
        .filter(|l| !matches!(l, Line::Command { .. }))
        .collect();
    for line in &output {
        term.write_line(&renderer.line(session.theme(), line))?;
    }
    Ok(output)
}
