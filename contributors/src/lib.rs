//! Contributor roster for the docs site
//!
//! # Overview
//!
//! The site shows the people who contributed to the repository, fetched from
//! the GitHub contributors endpoint and ordered by contribution count.
//!
//! The loader never fails its caller. A non-success status, a transport error
//! or a malformed payload is logged and degrades to an empty roster, which
//! renders the same placeholder a repository with no contributors would get.
//! Operators can tell the two apart only from the log.

use clients::api::Contributor;
use clients::api::ContributorsClient;
use derive_more::Constructor;
use log::error;
use std::fmt::Display;

mod roster;

pub use roster::sorted_by_contributions;

/// Fetches contributors of `owner/repo`, absorbing every failure into an
/// empty list.
pub async fn load<CLIENT>(client: &CLIENT, owner: &str, repo: &str) -> Vec<Contributor>
where
    CLIENT: ContributorsClient,
{
    client.contributors(owner, repo).await.unwrap_or_else(|err| {
        error!("Failed to fetch contributors of {}/{}: {}", owner, repo, err);
        Vec::new()
    })
}

/// Render-ready contributor listing, ordered by contribution count descending.
#[derive(Debug, PartialEq, Constructor)]
pub struct Roster {
    contributors: Vec<Contributor>,
}

impl Roster {
    pub fn from_unsorted(contributors: Vec<Contributor>) -> Self {
        Roster::new(sorted_by_contributions(contributors))
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }
}

impl Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.contributors.is_empty() {
            return f.write_str("No contributors yet.");
        }
        for contributor in &self.contributors {
            writeln!(
                f,
                "{}\tcontributions: {}\t{}",
                contributor.login, contributor.contributions, contributor.html_url
            )?;
        }
        Ok(())
    }
}

/// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clients::api::Error;
    use clients::api::Result;

    struct FailingClient;

    #[async_trait]
    impl ContributorsClient for FailingClient {
        async fn contributors(&self, _owner: &str, _repo: &str) -> Result<Vec<Contributor>> {
            Err(Error::Error("boom"))
        }
    }

    struct FixedClient(Vec<Contributor>);

    #[async_trait]
    impl ContributorsClient for FixedClient {
        async fn contributors(&self, _owner: &str, _repo: &str) -> Result<Vec<Contributor>> {
            Ok(self.0.clone())
        }
    }

    fn contributor(login: &str, contributions: u32) -> Contributor {
        Contributor::new(login.to_string(), String::new(), String::new(), contributions)
    }

    #[tokio::test]
    async fn load_absorbs_client_failure() {
        let contributors = load(&FailingClient, "minorcell", "perfedge").await;
        assert!(contributors.is_empty());
    }

    #[tokio::test]
    async fn load_passes_payload_through() {
        let expected = vec![contributor("a", 2), contributor("b", 9)];
        let contributors = load(&FixedClient(expected.clone()), "minorcell", "perfedge").await;
        assert_eq!(contributors, expected);
    }

    #[test]
    fn empty_roster_renders_placeholder() {
        let roster = Roster::from_unsorted(Vec::new());
        assert_eq!(roster.to_string(), "No contributors yet.");
    }

    #[test]
    fn roster_orders_by_contributions() {
        let roster = Roster::from_unsorted(vec![
            contributor("b", 2),
            contributor("a", 7),
            contributor("c", 1),
        ]);
        let logins: Vec<&str> = roster.contributors().iter().map(|c| c.login.as_str()).collect();
        assert_eq!(logins, vec!["a", "b", "c"]);
    }
}
