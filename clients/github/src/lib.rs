use async_trait::async_trait;
use clients::api::Contributor;
use clients::api::ContributorsClient;
use clients::api::Result;
use log::debug;
use reqwest::Client;
use reqwest::Response;
use serde::de::DeserializeOwned;

pub use builder::GithubClientBuilder;

use cache::FreshnessCache;

mod builder;
mod cache;
mod payload;

pub struct GithubClient {
    client: Client,
    github_url: String,
    cache: FreshnessCache,
}

#[async_trait]
impl ContributorsClient for GithubClient {
    async fn contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>> {
        let cache_key = format!("{}/{}", owner, repo);
        if let Some(contributors) = self.cache.get(&cache_key).await {
            debug!("Reusing cached contributors of {}", cache_key);
            return Ok(contributors);
        }
        let request_url = format!("{}/repos/{}/{}/contributors", self.github_url, owner, repo);
        let response = self.client.get(request_url).send().await?;
        // The endpoint may answer a bare `null` body; that means no contributors.
        let contributors = read_response::<Option<Vec<payload::Contributor>>>(response)
            .await?
            .unwrap_or_default();
        let contributors: Vec<Contributor> = contributors.into_iter().map(Contributor::from).collect();
        self.cache.put(cache_key, contributors.clone()).await;
        Ok(contributors)
    }
}

async fn read_response<PAYLOAD: DeserializeOwned>(response: Response) -> reqwest::Result<PAYLOAD> {
    response.error_for_status()?.json::<PAYLOAD>().await
}
