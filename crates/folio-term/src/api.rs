//! Client side of the portfolio REST API.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use folio_core::{FolioError, Profile, Project, Result, Skill};

/// Read access to the portfolio. The shell talks to this trait so command
/// handlers can be exercised against an in-process fake.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// The profile, or `None` when the server has none.
    async fn profile(&self) -> Result<Option<Profile>>;

    async fn projects(&self) -> Result<Vec<Project>>;

    /// A 404 comes back as `FolioError::Http { status: 404 }`.
    async fn project(&self, slug: &str) -> Result<Project>;

    async fn skills(&self) -> Result<Vec<Skill>>;
}

/// `PortfolioApi` over HTTP with `reqwest`.
pub struct HttpApi {
    base: Url,
    client: reqwest::Client,
}

impl HttpApi {
    /// `timeout` of zero disables the per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| FolioError::Config(format!("invalid API base URL '{base_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(FolioError::Config(format!(
                "'{base_url}' cannot be used as an API base URL"
            )));
        }

        let mut builder = reqwest::Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FolioError::Transport(e.to_string()))?;

        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL with `segments` appended. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FolioError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FolioError::Http {
                status: status.as_u16(),
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| FolioError::Transport(e.to_string()))
    }
}

#[async_trait]
impl PortfolioApi for HttpApi {
    async fn profile(&self) -> Result<Option<Profile>> {
        self.get_json(&["profile"]).await
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.get_json(&["projects"]).await
    }

    async fn project(&self, slug: &str) -> Result<Project> {
        self.get_json(&["projects", slug]).await
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        self.get_json(&["skills"]).await
    }
}
