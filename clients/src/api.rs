use async_trait::async_trait;
use derive_more::Constructor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: {0}")]
    Error(&'static str),
    // the only reason of `reqwest` dependency..
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// One person's identity and contribution count for a repository, as reported
/// by the remote contributor endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u32,
}

#[async_trait]
pub trait ContributorsClient: Send + Sync {
    /// Lists contributors of `owner/repo` in whatever order the endpoint
    /// returns them. Ordering for display is the caller's concern.
    async fn contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>>;
}
