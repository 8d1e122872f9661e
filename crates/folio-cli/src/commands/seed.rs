use std::path::Path;

use folio_config::FolioConfig;
use folio_core::{FolioError, SeedData};
use folio_store::PortfolioStore;

/// Parse a seed document.
pub(super) fn parse_seed(raw: &str, path: &Path) -> folio_core::Result<SeedData> {
    toml::from_str::<SeedData>(raw)
        .map_err(|e| FolioError::Config(format!("failed to parse {}: {}", path.display(), e)))
}

pub(super) fn cmd_seed(config: FolioConfig, file: &Path) -> folio_core::Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let seed = parse_seed(&raw, file)?;

    let db_path = config.database.resolved_path();
    let store = PortfolioStore::open(&db_path)?;
    let report = store.seed(&seed)?;

    println!("Seeded {}", db_path.display());
    println!(
        "   Profile: {}",
        if report.profile { "written" } else { "unchanged" }
    );
    println!("   Projects: {}", report.projects);
    println!("   Skills: {}", report.skills);
    Ok(())
}
