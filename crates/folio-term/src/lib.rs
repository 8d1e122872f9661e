//! # folio-term
//!
//! The console client: a command dispatcher over the portfolio API, with
//! tab completion, command history, colour themes and skill bars.
//!
//! The pieces are layered so the logic can be tested without a terminal:
//! [`session::TerminalSession`] turns an input line into scrollback lines,
//! [`render::Renderer`] turns lines into ANSI text, and [`shell`] wires both
//! to a real terminal.

pub mod api;
pub mod commands;
pub mod complete;
pub mod editor;
pub mod history;
pub mod prefs;
pub mod render;
pub mod scrollback;
pub mod session;
pub mod shell;
pub mod skills_view;
pub mod theme;

pub use api::{HttpApi, PortfolioApi};
pub use commands::{CommandContext, CommandHandler, CommandOutput, CommandRegistry};
pub use session::{SubmitResult, TerminalSession};
pub use theme::{THEMES, Theme, find_theme};
