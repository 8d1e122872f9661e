use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use folio_core::{
    FolioError, NewProfile, NewProject, NewSkill, Profile, Project, Result, SeedData, Skill,
};

use crate::rows::{
    PROFILE_COLUMNS, PROJECT_COLUMNS, SKILL_COLUMNS, profile_from_row, project_from_row,
    skill_from_row, timestamp,
};

fn store_err(e: rusqlite::Error) -> FolioError {
    FolioError::Store(e.to_string())
}

/// Empty optional text is stored as NULL, matching `POST /skills`.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

/// Counts of what a [`PortfolioStore::seed`] call wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub profile: bool,
    pub projects: usize,
    pub skills: usize,
}

/// The portfolio database. Cheap to clone; clones share one connection.
#[derive(Clone)]
pub struct PortfolioStore {
    db: Arc<Mutex<Connection>>,
}

impl PortfolioStore {
    /// Open or create the portfolio database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        info!(?path, "opening portfolio store");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(store_err)?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")
            .map_err(store_err)?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS profiles (
                id TEXT PRIMARY KEY,
                full_name TEXT NOT NULL,
                professional_title TEXT NOT NULL,
                short_bio TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                project_name TEXT NOT NULL,
                project_slug TEXT NOT NULL UNIQUE,
                project_description TEXT NOT NULL,
                technologies_used TEXT NOT NULL DEFAULT '[]',
                github_repository_url TEXT,
                live_demo_url TEXT,
                is_featured INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS skills (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT,
                level TEXT,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_projects_created ON projects(created_at);
            CREATE INDEX IF NOT EXISTS idx_skills_category_name ON skills(category, name);
            ",
        )
        .map_err(store_err)?;

        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        Self::open(Path::new(":memory:"))
    }

    // ── Profile ────────────────────────────────────────────────

    /// The first stored profile, if any. No singleton is enforced.
    pub fn first_profile(&self) -> Result<Option<Profile>> {
        let db = self.db.lock();
        db.query_row(
            &format!("SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY rowid ASC LIMIT 1"),
            [],
            profile_from_row,
        )
        .optional()
        .map_err(store_err)
    }

    /// Replace the contents of the first profile, creating it when absent.
    pub fn upsert_profile(&self, profile: &NewProfile) -> Result<Profile> {
        let now = timestamp(chrono::Utc::now());
        let existing: Option<String> = {
            let db = self.db.lock();
            let id = db
                .query_row(
                    "SELECT id FROM profiles ORDER BY rowid ASC LIMIT 1",
                    [],
                    |r| r.get(0),
                )
                .optional()
                .map_err(store_err)?;
            match &id {
                Some(id) => {
                    db.execute(
                        "UPDATE profiles SET full_name = ?1, professional_title = ?2,
                         short_bio = ?3, updated_at = ?4 WHERE id = ?5",
                        params![
                            profile.full_name,
                            profile.professional_title,
                            profile.short_bio,
                            now,
                            id
                        ],
                    )
                    .map_err(store_err)?;
                }
                None => {
                    db.execute(
                        "INSERT INTO profiles (id, full_name, professional_title, short_bio, created_at, updated_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                        params![
                            Uuid::new_v4().to_string(),
                            profile.full_name,
                            profile.professional_title,
                            profile.short_bio,
                            now
                        ],
                    )
                    .map_err(store_err)?;
                }
            }
            id
        };
        debug!(updated = existing.is_some(), "profile written");

        self.first_profile()?
            .ok_or_else(|| FolioError::Store("profile vanished after write".into()))
    }

    // ── Projects ───────────────────────────────────────────────

    /// All projects, newest first.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let db = self.db.lock();
        let mut stmt = db
            .prepare(&format!(
                "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC, rowid DESC"
            ))
            .map_err(store_err)?;
        let rows = stmt.query_map([], project_from_row).map_err(store_err)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(store_err)
    }

    /// The project with exactly this slug.
    pub fn project_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        let db = self.db.lock();
        db.query_row(
            &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE project_slug = ?1"),
            params![slug],
            project_from_row,
        )
        .optional()
        .map_err(store_err)
    }

    /// Insert a project, or update the one that already has this slug.
    pub fn upsert_project(&self, project: &NewProject) -> Result<Project> {
        let now = timestamp(chrono::Utc::now());
        let technologies = serde_json::to_string(&project.technologies)?;
        {
            let db = self.db.lock();
            db.execute(
                "INSERT INTO projects (id, project_name, project_slug, project_description,
                    technologies_used, github_repository_url, live_demo_url, is_featured,
                    created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
                 ON CONFLICT(project_slug) DO UPDATE SET
                    project_name = excluded.project_name,
                    project_description = excluded.project_description,
                    technologies_used = excluded.technologies_used,
                    github_repository_url = excluded.github_repository_url,
                    live_demo_url = excluded.live_demo_url,
                    is_featured = excluded.is_featured,
                    updated_at = excluded.updated_at",
                params![
                    Uuid::new_v4().to_string(),
                    project.name,
                    project.slug,
                    project.description,
                    technologies,
                    project.github_url,
                    project.live_url,
                    project.featured as i64,
                    now
                ],
            )
            .map_err(store_err)?;
        }

        self.project_by_slug(&project.slug)?
            .ok_or_else(|| FolioError::NotFound(format!("project '{}'", project.slug)))
    }

    // ── Skills ─────────────────────────────────────────────────

    /// All skills ordered by category then name. Uncategorised skills sort last.
    pub fn list_skills(&self) -> Result<Vec<Skill>> {
        let db = self.db.lock();
        let mut stmt = db
            .prepare(&format!(
                "SELECT {SKILL_COLUMNS} FROM skills
                 ORDER BY category IS NULL, category ASC, name ASC, rowid ASC"
            ))
            .map_err(store_err)?;
        let rows = stmt.query_map([], skill_from_row).map_err(store_err)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(store_err)
    }

    /// Insert all skills in one transaction and return how many were written.
    /// Callers validate names; duplicates are kept.
    pub fn create_skills(&self, skills: &[NewSkill]) -> Result<usize> {
        if skills.is_empty() {
            return Ok(0);
        }
        let now = timestamp(chrono::Utc::now());
        let mut db = self.db.lock();
        let tx = db.transaction().map_err(store_err)?;
        let mut inserted = 0;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO skills (id, name, category, level, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .map_err(store_err)?;
            for skill in skills {
                inserted += stmt
                    .execute(params![
                        Uuid::new_v4().to_string(),
                        skill.name,
                        skill.category,
                        skill.level,
                        now
                    ])
                    .map_err(store_err)?;
            }
        }
        tx.commit().map_err(store_err)?;
        debug!(inserted, "skills inserted");
        Ok(inserted)
    }

    // ── Seeding ────────────────────────────────────────────────

    /// Apply a seed document: profile and projects are upserted, skills appended.
    pub fn seed(&self, seed: &SeedData) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        if let Some(profile) = &seed.profile {
            self.upsert_profile(profile)?;
            report.profile = true;
        }

        for project in &seed.projects {
            if project.slug.trim().is_empty() {
                return Err(FolioError::Store(format!(
                    "project '{}' has an empty slug",
                    project.name
                )));
            }
            self.upsert_project(project)?;
            report.projects += 1;
        }

        let skills: Vec<NewSkill> = seed
            .skills
            .iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| NewSkill {
                name: s.name.trim().to_string(),
                category: non_empty(&s.category),
                level: non_empty(&s.level),
            })
            .collect();
        report.skills = self.create_skills(&skills)?;

        info!(
            profile = report.profile,
            projects = report.projects,
            skills = report.skills,
            "seed applied"
        );
        Ok(report)
    }
}
