//! Tab completion for the input line.
//!
//! Completion only ever fires on a unique prefix match; zero or several
//! candidates leave the input untouched.

/// Candidate sources for completion.
#[derive(Debug, Clone, Copy)]
pub struct Candidates<'a> {
    pub commands: &'a [&'a str],
    pub project_slugs: &'a [String],
    pub themes: &'a [&'a str],
}

fn unique<'a, I>(mut matches: I) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// The completed input, or `None` when the input should stay as it is.
pub fn complete(input: &str, candidates: &Candidates<'_>) -> Option<String> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() <= 1 {
        let partial = input.trim();
        let hit = unique(
            candidates
                .commands
                .iter()
                .copied()
                .filter(|c| c.starts_with(partial)),
        )?;
        return Some(format!("{hit} "));
    }

    let partial = parts.get(1).copied().unwrap_or("");
    match parts[0] {
        "project" => {
            let hit = unique(
                candidates
                    .project_slugs
                    .iter()
                    .map(String::as_str)
                    .filter(|s| s.starts_with(partial)),
            )?;
            Some(format!("project {hit} "))
        }
        "theme" => {
            let partial = partial.to_lowercase();
            let hit = unique(
                candidates
                    .themes
                    .iter()
                    .copied()
                    .filter(|t| t.to_lowercase().starts_with(&partial)),
            )?;
            Some(format!("theme {hit} "))
        }
        _ => None,
    }
}
