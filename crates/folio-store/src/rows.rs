//! Row → entity mapping.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_core::{Profile, Project, Skill};
use rusqlite::Row;
use rusqlite::types::Type;

pub(crate) const PROFILE_COLUMNS: &str =
    "id, full_name, professional_title, short_bio, created_at, updated_at";

pub(crate) const PROJECT_COLUMNS: &str = "id, project_name, project_slug, project_description, \
     technologies_used, github_repository_url, live_demo_url, is_featured, created_at, updated_at";

pub(crate) const SKILL_COLUMNS: &str = "id, name, category, level, created_at";

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn profile_from_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        full_name: row.get(1)?,
        professional_title: row.get(2)?,
        short_bio: row.get(3)?,
        created_at: parse_timestamp(row, 4)?,
        updated_at: parse_timestamp(row, 5)?,
    })
}

pub(crate) fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let technologies: String = row.get(4)?;
    let technologies_used: Vec<String> = serde_json::from_str(&technologies)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
    Ok(Project {
        id: row.get(0)?,
        project_name: row.get(1)?,
        project_slug: row.get(2)?,
        project_description: row.get(3)?,
        technologies_used,
        github_repository_url: row.get(5)?,
        live_demo_url: row.get(6)?,
        is_featured: row.get::<_, i64>(7)? != 0,
        created_at: parse_timestamp(row, 8)?,
        updated_at: parse_timestamp(row, 9)?,
    })
}

pub(crate) fn skill_from_row(row: &Row<'_>) -> rusqlite::Result<Skill> {
    Ok(Skill {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        level: row.get(3)?,
        created_at: parse_timestamp(row, 4)?,
    })
}
