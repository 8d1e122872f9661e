//! Turns scrollback lines into terminal text using the active theme.

use console::{Term, measure_text_width};
use std::fmt::Write;

use folio_core::Line;

use crate::skills_view::{group_skills, parse_level};
use crate::theme::{Theme, parse_hex};

/// Cells in a skill bar.
pub const BAR_WIDTH: usize = 20;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Colour only when `term` is a terminal and colours are not disabled.
    pub fn for_term(term: &Term) -> Self {
        Self {
            color: term.is_term() && console::colors_enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn paint(&self, out: &mut String, hex: &str, text: &str) {
        match (self.color, parse_hex(hex)) {
            (true, Some((r, g, b))) => {
                let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{text}{RESET}");
            }
            _ => out.push_str(text),
        }
    }

    fn paint_rgb(&self, out: &mut String, (r, g, b): (u8, u8, u8), text: &str) {
        if self.color {
            let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{text}{RESET}");
        } else {
            out.push_str(text);
        }
    }

    /// The input line: prompt followed by what has been typed so far.
    pub fn prompt(&self, theme: &Theme, prompt: &str, input: &str) -> String {
        let mut out = String::new();
        self.paint(&mut out, theme.prompt, prompt);
        out.push(' ');
        self.paint(&mut out, theme.foreground, input);
        out
    }

    /// One scrollback line, possibly spanning several terminal rows.
    pub fn line(&self, theme: &Theme, line: &Line) -> String {
        let mut out = String::new();
        match line {
            Line::Command { prompt, command } => {
                self.paint(&mut out, theme.prompt, prompt);
                out.push(' ');
                self.paint(&mut out, theme.foreground, command);
            }
            Line::Text { value } => self.paint(&mut out, theme.foreground, value),
            Line::Error { value } => self.paint(&mut out, theme.error, value),
            Line::Skills { data } => self.skills(&mut out, theme, data),
        }
        out
    }

    fn skills(&self, out: &mut String, theme: &Theme, skills: &[folio_core::Skill]) {
        let name_width = skills
            .iter()
            .map(|s| measure_text_width(&s.name))
            .max()
            .unwrap_or(0);

        let groups = group_skills(skills);
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            if self.color {
                out.push_str(BOLD);
            }
            self.paint(out, theme.accent, &group.category);
            out.push('\n');

            for (j, skill) in group.skills.iter().enumerate() {
                if j > 0 {
                    out.push('\n');
                }
                let pad = name_width.saturating_sub(measure_text_width(&skill.name));
                out.push_str("  ");
                self.paint(out, theme.foreground, &skill.name);
                out.push_str(&" ".repeat(pad + 2));
                match parse_level(skill.level.as_deref()) {
                    Some(pct) => {
                        self.bar(out, theme, pct);
                        out.push(' ');
                        self.paint(out, theme.muted, &format!("{pct:>3}%"));
                    }
                    None => self.paint(out, theme.muted, "—"),
                }
            }
        }
    }

    /// A `BAR_WIDTH`-cell bar, filled cells shaded along the theme gradient.
    fn bar(&self, out: &mut String, theme: &Theme, pct: u8) {
        let filled = (usize::from(pct) * BAR_WIDTH + 50) / 100;
        let from = parse_hex(theme.bar_fill[0]).unwrap_or((255, 255, 255));
        let to = parse_hex(theme.bar_fill[1]).unwrap_or(from);
        for cell in 0..filled {
            let t = cell as f32 / (BAR_WIDTH - 1) as f32;
            self.paint_rgb(out, mix(from, to, t), "█");
        }
        let empty = BAR_WIDTH - filled;
        if empty > 0 {
            self.paint(out, theme.bar_bg, &"░".repeat(empty));
        }
    }

    /// The theme's banner, faded toward the background by its opacity.
    pub fn banner(&self, theme: &Theme) -> Option<String> {
        let banner = theme.banner?;
        let bg = parse_hex(theme.background).unwrap_or((0, 0, 0));
        let mut out = String::new();
        for (i, row) in banner.art.lines().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let color = banner
                .colors
                .get(i)
                .and_then(|c| parse_hex(c))
                .unwrap_or(bg);
            self.paint_rgb(&mut out, mix(bg, color, banner.opacity), row);
        }
        Some(out)
    }
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
fn mix(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    (channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}
