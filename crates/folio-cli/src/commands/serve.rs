use tracing::info;

use folio_config::FolioConfig;
use folio_store::PortfolioStore;

pub(super) async fn cmd_serve(
    mut config: FolioConfig,
    listen: Option<String>,
) -> folio_core::Result<()> {
    if let Some(listen) = listen {
        config.server.listen = listen;
    }

    let db_path = config.database.resolved_path();
    let store = PortfolioStore::open(&db_path)?;

    println!("Folio v{}", env!("CARGO_PKG_VERSION"));
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}", config.server.listen);
    if config.server.api_prefix {
        println!("   Routes: / and /api");
    }
    println!();

    info!(db = ?db_path, "store ready");
    folio_server::start_server(config.server, store).await
}
