//! Grouping and level parsing for the `skills` view.

use folio_core::Skill;
use std::collections::BTreeMap;

pub const OTHER_CATEGORY: &str = "Other";

/// One category heading with its skills, name-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub category: String,
    pub skills: Vec<&'a Skill>,
}

/// Group by trimmed category (blank or missing → `Other`). Categories are
/// sorted lexicographically and skills by name within each.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: BTreeMap<String, Vec<&Skill>> = BTreeMap::new();
    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(OTHER_CATEGORY);
        groups.entry(category.to_string()).or_default().push(skill);
    }

    groups
        .into_iter()
        .map(|(category, mut skills)| {
            skills.sort_by(|a, b| a.name.cmp(&b.name));
            SkillGroup { category, skills }
        })
        .collect()
}

/// The first run of ASCII digits in `level`, e.g. `"Advanced (70%)"` → 70.
/// Values are clamped to 100; `None` when there are no digits.
pub fn parse_level(level: Option<&str>) -> Option<u8> {
    let level = level?;
    let start = level.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = {
        let rest = &level[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    // Long digit runs overflow any integer; they are all "over 100".
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    Some(value.min(100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn skill(name: &str, category: Option<&str>) -> Skill {
        Skill {
            id: name.into(),
            name: name.into(),
            category: category.map(Into::into),
            level: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_grouping_and_order() {
        let skills = vec![
            skill("Vue", Some("Frontend")),
            skill("Rust", Some("Backend")),
            skill("Docker", None),
            skill("Axum", Some("Backend")),
            skill("Git", Some("   ")),
            skill("React", Some(" Frontend ")),
        ];
        let groups = group_skills(&skills);
        let shape: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|g| {
                (
                    g.category.as_str(),
                    g.skills.iter().map(|s| s.name.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Backend", vec!["Axum", "Rust"]),
                ("Frontend", vec!["React", "Vue"]),
                ("Other", vec!["Docker", "Git"]),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(group_skills(&[]).is_empty());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("85%")), Some(85));
        assert_eq!(parse_level(Some("Advanced (70)")), Some(70));
        assert_eq!(parse_level(Some("12 of 34")), Some(12));
        assert_eq!(parse_level(Some("150")), Some(100));
        assert_eq!(parse_level(Some("99999999999999999999")), Some(100));
        assert_eq!(parse_level(Some("0")), Some(0));
        assert_eq!(parse_level(Some("expert")), None);
        assert_eq!(parse_level(Some("")), None);
        assert_eq!(parse_level(None), None);
    }
}
