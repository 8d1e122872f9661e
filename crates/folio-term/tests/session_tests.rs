#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use folio_config::ClientConfig;
    use folio_core::{FolioError, Line, Profile, Project, Result, Skill};
    use folio_term::prefs::ThemePreference;
    use folio_term::{PortfolioApi, TerminalSession};

    /// Canned API responses. `None` fields fail with a transport error.
    #[derive(Default)]
    struct MockApi {
        profile: Option<Option<Profile>>,
        projects: Option<Vec<Project>>,
        project_status: Option<u16>,
        skills: Option<Vec<Skill>>,
        calls: AtomicUsize,
    }

    fn down() -> FolioError {
        FolioError::Transport("connection refused".into())
    }

    #[async_trait]
    impl PortfolioApi for MockApi {
        async fn profile(&self) -> Result<Option<Profile>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.profile.clone().ok_or_else(down)
        }

        async fn projects(&self) -> Result<Vec<Project>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.projects.clone().ok_or_else(down)
        }

        async fn project(&self, slug: &str) -> Result<Project> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.project_status {
                return Err(FolioError::Http { status });
            }
            self.projects
                .as_ref()
                .and_then(|ps| ps.iter().find(|p| p.project_slug == slug).cloned())
                .ok_or(FolioError::Http { status: 404 })
        }

        async fn skills(&self) -> Result<Vec<Skill>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.skills.clone().ok_or_else(down)
        }
    }

    fn project(name: &str, slug: &str) -> Project {
        Project {
            id: slug.into(),
            project_name: name.into(),
            project_slug: slug.into(),
            project_description: format!("{name} does things."),
            technologies_used: vec!["Rust".into(), "SQLite".into()],
            github_repository_url: Some(format!("https://github.com/me/{slug}")),
            live_demo_url: None,
            is_featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn session_with(api: MockApi) -> (TerminalSession, Arc<MockApi>) {
        let api = Arc::new(api);
        let session = TerminalSession::new(api.clone(), &ClientConfig::default());
        (session, api)
    }

    /// Output lines of the last submission, without the echo.
    async fn run(session: &mut TerminalSession, input: &str) -> Vec<Line> {
        let result = session.submit(input).await;
        assert_eq!(
            result.appended.first(),
            Some(&Line::command("guest@folio:~$", input.trim())),
            "first appended line echoes the command"
        );
        result.appended[1..].to_vec()
    }

    // ── Input handling ─────────────────────────────────────────

    #[tokio::test]
    async fn test_blank_input_appends_nothing() {
        let (mut session, api) = session_with(MockApi::default());
        for input in ["", "   ", "\t \n"] {
            let result = session.submit(input).await;
            assert!(result.appended.is_empty());
        }
        assert!(session.lines().is_empty());
        assert!(session.history_mut().is_empty());
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let (mut session, api) = session_with(MockApi::default());
        let out = run(&mut session, "  rm -rf /  ").await;
        assert_eq!(out, vec![Line::error("Unknown command: rm -rf /. Type 'help'.")]);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_history_records_trimmed_submissions() {
        let (mut session, _) = session_with(MockApi::default());
        session.submit(" help ").await;
        session.submit("whoami").await;
        session.submit("help").await;
        assert_eq!(
            session.history_mut().entries(),
            &["help".to_string(), "whoami".to_string(), "help".to_string()]
        );
    }

    // ── Static commands ────────────────────────────────────────

    #[tokio::test]
    async fn test_help_lists_commands() {
        let (mut session, _) = session_with(MockApi::default());
        let out = run(&mut session, "help").await;
        let text = out[0].value().unwrap();
        assert!(text.starts_with("Available commands:\n  help      - Show this help"));
        assert!(text.contains("  project <slug> - Show details about a project"));
        assert!(text.contains("  education - Show my education"));
        assert!(text.ends_with("  clear     - Clear the terminal"));
    }

    #[tokio::test]
    async fn test_whoami_and_education_from_config() {
        let client = ClientConfig {
            whoami: "Ada Lovelace".into(),
            education: "Mathematics".into(),
            ..Default::default()
        };
        let mut session = TerminalSession::new(Arc::new(MockApi::default()), &client);
        assert_eq!(session.submit("whoami").await.appended[1], Line::text("Ada Lovelace"));
        assert_eq!(session.submit("education").await.appended[1], Line::text("Mathematics"));
    }

    #[tokio::test]
    async fn test_clear_empties_scrollback() {
        let (mut session, _) = session_with(MockApi::default());
        session.submit("whoami").await;
        session.submit("help").await;
        assert_eq!(session.lines().len(), 4);

        let result = session.submit("clear").await;
        assert!(result.cleared);
        assert!(result.appended.is_empty());
        assert!(session.lines().is_empty());

        session.submit("whoami").await;
        assert_eq!(session.lines().len(), 2);
    }

    // ── Profile ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_about_formats_profile() {
        let (mut session, _) = session_with(MockApi {
            profile: Some(Some(Profile {
                id: "1".into(),
                full_name: "Ada Lovelace".into(),
                professional_title: "Analyst".into(),
                short_bio: "Wrote the first program.".into(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })),
            ..Default::default()
        });
        let out = run(&mut session, "about").await;
        assert_eq!(
            out,
            vec![Line::text("Ada Lovelace — Analyst\n\nWrote the first program.")]
        );
    }

    #[tokio::test]
    async fn test_about_without_profile() {
        let (mut session, _) = session_with(MockApi {
            profile: Some(None),
            ..Default::default()
        });
        let out = run(&mut session, "about").await;
        assert_eq!(out, vec![Line::text("No profile found in database.")]);
    }

    #[tokio::test]
    async fn test_about_when_api_down() {
        let (mut session, _) = session_with(MockApi::default());
        let out = run(&mut session, "about").await;
        assert_eq!(out, vec![Line::error("Failed to load profile.")]);
    }

    // ── Projects ───────────────────────────────────────────────

    #[tokio::test]
    async fn test_projects_listing() {
        let (mut session, _) = session_with(MockApi {
            projects: Some(vec![project("Acme", "acme"), project("Beta", "beta")]),
            ..Default::default()
        });
        let out = run(&mut session, "projects").await;
        assert_eq!(
            out,
            vec![Line::text("- Acme (slug: acme)\n- Beta (slug: beta)")]
        );
    }

    #[tokio::test]
    async fn test_projects_empty_and_failure() {
        let (mut session, _) = session_with(MockApi {
            projects: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(
            run(&mut session, "projects").await,
            vec![Line::text("No projects found.")]
        );

        let (mut session, _) = session_with(MockApi::default());
        assert_eq!(
            run(&mut session, "projects").await,
            vec![Line::error("Failed to load projects. Is the API running?")]
        );
    }

    #[tokio::test]
    async fn test_project_detail_skips_empty_entries() {
        let (mut session, _) = session_with(MockApi {
            projects: Some(vec![project("Acme", "acme")]),
            ..Default::default()
        });
        let out = run(&mut session, "project acme").await;
        assert_eq!(
            out,
            vec![Line::text(
                "Name: Acme\nTech: Rust, SQLite\nAcme does things.\nGitHub: https://github.com/me/acme"
            )]
        );
    }

    #[tokio::test]
    async fn test_project_usage_makes_no_request() {
        let (mut session, api) = session_with(MockApi::default());
        let out = run(&mut session, "project").await;
        assert_eq!(out, vec![Line::error("Usage: project <projectSlug>")]);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_project_not_found_vs_failure() {
        let (mut session, _) = session_with(MockApi {
            projects: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(
            run(&mut session, "project acme-site").await,
            vec![Line::error("Project not found.")]
        );

        let (mut session, _) = session_with(MockApi {
            project_status: Some(500),
            ..Default::default()
        });
        assert_eq!(
            run(&mut session, "project acme-site").await,
            vec![Line::error("Failed to load project.")]
        );
    }

    // ── Skills ─────────────────────────────────────────────────

    #[tokio::test]
    async fn test_skills_results() {
        let (mut session, _) = session_with(MockApi {
            skills: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(
            run(&mut session, "skills").await,
            vec![Line::text("No skills found.")]
        );

        let skill = Skill {
            id: "1".into(),
            name: "Rust".into(),
            category: Some("Languages".into()),
            level: Some("90%".into()),
            created_at: Utc::now(),
        };
        let (mut session, _) = session_with(MockApi {
            skills: Some(vec![skill.clone()]),
            ..Default::default()
        });
        assert_eq!(
            run(&mut session, "skills").await,
            vec![Line::Skills { data: vec![skill] }]
        );

        let (mut session, _) = session_with(MockApi::default());
        assert_eq!(
            run(&mut session, "skills").await,
            vec![Line::error("Failed to load skills. Is the API running?")]
        );
    }

    // ── Themes ─────────────────────────────────────────────────

    #[tokio::test]
    async fn test_themes_listing() {
        let (mut session, _) = session_with(MockApi::default());
        let out = run(&mut session, "themes").await;
        let text = out[0].value().unwrap();
        assert!(text.starts_with("Available themes:\n  - Default\n  - Dracula"));
        assert!(text.ends_with("  - Fedora"));
        assert_eq!(text.lines().count(), 14);
    }

    #[tokio::test]
    async fn test_theme_name_forms_resolve_alike() {
        let (mut session, _) = session_with(MockApi::default());
        let result = session.submit("theme solarized-dark").await;
        assert!(result.theme_changed);
        assert_eq!(result.appended[1], Line::text("Theme changed to: Solarized Dark"));
        assert_eq!(session.theme().name, "Solarized Dark");

        session.submit("theme default").await;
        let result = session.submit("theme   Solarized   Dark").await;
        assert_eq!(result.appended[1], Line::text("Theme changed to: Solarized Dark"));
    }

    #[tokio::test]
    async fn test_unknown_theme_keeps_current() {
        let (mut session, _) = session_with(MockApi::default());
        session.submit("theme nord").await;
        let result = session.submit("theme nonexistent").await;
        assert!(!result.theme_changed);
        assert_eq!(
            result.appended[1],
            Line::error("Theme 'nonexistent' not found. Type 'themes' to see available themes.")
        );
        assert_eq!(session.theme().name, "Nord");

        let result = session.submit("theme").await;
        assert_eq!(
            result.appended[1],
            Line::error("Usage: theme <name>\nType 'themes' to see available themes.")
        );
    }

    #[tokio::test]
    async fn test_theme_choice_persists_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");

        let mut session = TerminalSession::new(Arc::new(MockApi::default()), &ClientConfig::default())
            .with_preferences(ThemePreference::new(&path));
        assert_eq!(session.theme().name, "Default");
        session.submit("theme gruvbox").await;

        let session = TerminalSession::new(Arc::new(MockApi::default()), &ClientConfig::default())
            .with_preferences(ThemePreference::new(&path));
        assert_eq!(session.theme().name, "Gruvbox");
    }

    // ── Completion ─────────────────────────────────────────────

    #[tokio::test]
    async fn test_completion_uses_loaded_slugs() {
        let (mut session, _) = session_with(MockApi {
            projects: Some(vec![project("Acme", "acme-site"), project("Beta", "beta")]),
            ..Default::default()
        });
        assert_eq!(session.complete("project ac"), None);

        session.refresh_project_slugs().await;
        assert_eq!(session.complete("project ac"), Some("project acme-site ".into()));
        assert_eq!(session.complete("proj"), Some("projects ".into()));
        assert_eq!(session.complete("theme fed"), Some("theme Fedora ".into()));
        assert_eq!(session.complete("t"), None);
    }

    #[tokio::test]
    async fn test_slug_refresh_failure_is_silent() {
        let (mut session, _) = session_with(MockApi::default());
        session.refresh_project_slugs().await;
        assert!(session.project_slugs().is_empty());
    }
}
