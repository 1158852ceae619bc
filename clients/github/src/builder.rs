use crate::cache::FreshnessCache;
use crate::GithubClient;
use clients::api::Result;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use std::time::Duration;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    github_url: String,
    headers: HeaderMap,
    cache_ttl: Duration,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let builder = Self {
            client_builder: ClientBuilder::default(),
            github_url: "https://api.github.com".to_string(),
            headers: HeaderMap::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
        };
        builder
            .try_with_header(header::USER_AGENT, "curl")
            .expect("static default header")
            .try_with_header(header::ACCEPT, "application/vnd.github.v3+json")
            .expect("static default header")
    }
}

impl GithubClientBuilder {
    pub fn try_with_token(self, token: secrecy::SecretString) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::AUTHORIZATION, token.expose_secret())?)
    }

    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_github_url<STR: AsRef<str>>(mut self, url: STR) -> GithubClientBuilder {
        self.github_url = url.as_ref().to_string();
        self
    }

    /// Freshness window for contributor listings. Repeated fetches inside the
    /// window reuse the previous result instead of hitting the API.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> GithubClientBuilder {
        self.cache_ttl = ttl;
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<GithubClientBuilder> {
        let val = HeaderValue::from_str(val.as_ref())?;
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self) -> Result<GithubClient> {
        let client = self.client_builder.default_headers(self.headers).build()?;
        Ok(GithubClient {
            client,
            github_url: self.github_url,
            cache: FreshnessCache::new(self.cache_ttl),
        })
    }
}
