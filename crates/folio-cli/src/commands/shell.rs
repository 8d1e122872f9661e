use folio_config::FolioConfig;
use folio_term::shell;

fn client_config(config: FolioConfig, api: Option<String>) -> folio_config::ClientConfig {
    let mut client = config.client;
    if let Some(api) = api {
        client.api_base_url = api;
    }
    client
}

pub(super) async fn cmd_shell(config: FolioConfig, api: Option<String>) -> folio_core::Result<()> {
    let client = client_config(config, api);
    let session = shell::connect(&client)?;
    shell::run(session).await
}

pub(super) async fn cmd_exec(
    config: FolioConfig,
    api: Option<String>,
    words: Vec<String>,
) -> folio_core::Result<()> {
    let client = client_config(config, api);
    let session = shell::connect(&client)?;
    let lines = shell::run_exec(session, &words.join(" ")).await?;

    if lines.iter().any(|l| l.is_error()) {
        return Err(folio_core::FolioError::Other(
            std::io::Error::other("command reported an error").into(),
        ));
    }
    Ok(())
}
