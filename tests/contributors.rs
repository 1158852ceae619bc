use clients::api::ContributorsClient;
use github_client::GithubClientBuilder;
use perfedge_site::contributor_roster;
use perfedge_site::Args;
use perfedge_site::Command;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OWNER: &str = "minorcell";
const REPO: &str = "perfedge";

fn args(api_url: String) -> Args {
    Args {
        repo_owner: OWNER.to_string(),
        repo_name: REPO.to_string(),
        api_token: None,
        api_url,
        cache_ttl: 0,
        command: Command::Contributors,
    }
}

fn contributors_body() -> String {
    // Extra fields mimic the real endpoint payload and must be ignored.
    r#"[
        {"login": "casual", "avatar_url": "https://avatars.test/casual.png", "html_url": "https://github.test/casual", "contributions": 3, "type": "User"},
        {"login": "maintainer", "avatar_url": "https://avatars.test/maintainer.png", "html_url": "https://github.test/maintainer", "contributions": 412, "type": "User"},
        {"login": "drive-by", "avatar_url": "https://avatars.test/drive-by.png", "html_url": "https://github.test/drive-by", "contributions": 1, "type": "User"}
    ]"#
    .to_string()
}

async fn mock_contributors(server: &MockServer, response: ResponseTemplate, expected_requests: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/contributors", OWNER, REPO)))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(response)
        .expect(expected_requests)
        .mount(server)
        .await;
}

#[tokio::test]
async fn roster_is_sorted_by_contributions() {
    let server = MockServer::start().await;
    let response = ResponseTemplate::new(200).set_body_raw(contributors_body(), "application/json");
    mock_contributors(&server, response, 1).await;

    let roster = contributor_roster(&args(server.uri())).await.unwrap();

    let logins: Vec<&str> = roster.contributors().iter().map(|c| c.login.as_str()).collect();
    assert_eq!(logins, vec!["maintainer", "casual", "drive-by"]);
    let counts: Vec<u32> = roster.contributors().iter().map(|c| c.contributions).collect();
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(roster.contributors()[0].avatar_url, "https://avatars.test/maintainer.png");
    assert_eq!(roster.contributors()[0].html_url, "https://github.test/maintainer");
}

#[tokio::test]
async fn non_success_status_degrades_to_empty_roster() {
    let server = MockServer::start().await;
    mock_contributors(&server, ResponseTemplate::new(500), 1).await;

    let roster = contributor_roster(&args(server.uri())).await.unwrap();

    assert!(roster.is_empty());
    assert_eq!(roster.to_string(), "No contributors yet.");
}

#[tokio::test]
async fn malformed_payload_degrades_to_empty_roster() {
    let server = MockServer::start().await;
    let response = ResponseTemplate::new(200).set_body_raw("definitely not json", "application/json");
    mock_contributors(&server, response, 1).await;

    let roster = contributor_roster(&args(server.uri())).await.unwrap();

    assert!(roster.is_empty());
}

#[tokio::test]
async fn null_payload_yields_empty_roster() {
    let server = MockServer::start().await;
    let response = ResponseTemplate::new(200).set_body_raw("null", "application/json");
    mock_contributors(&server, response, 1).await;

    let roster = contributor_roster(&args(server.uri())).await.unwrap();

    assert!(roster.is_empty());
    assert_eq!(roster.to_string(), "No contributors yet.");
}

#[tokio::test]
async fn transport_failure_degrades_to_empty_roster() {
    // Nothing listens here, the connection is refused.
    let roster = contributor_roster(&args("http://127.0.0.1:9".to_string())).await.unwrap();
    assert!(roster.is_empty());
}

#[tokio::test]
async fn freshness_window_reuses_previous_response() {
    let server = MockServer::start().await;
    let response = ResponseTemplate::new(200).set_body_raw(contributors_body(), "application/json");
    mock_contributors(&server, response, 1).await;

    let client = GithubClientBuilder::default()
        .with_github_url(server.uri())
        .with_cache_ttl(Duration::from_secs(3600))
        .build()
        .unwrap();

    let first = client.contributors(OWNER, REPO).await.unwrap();
    let second = client.contributors(OWNER, REPO).await.unwrap();

    assert_eq!(first, second);
    server.verify().await;
}

#[tokio::test]
async fn zero_ttl_fetches_every_time() {
    let server = MockServer::start().await;
    let response = ResponseTemplate::new(200).set_body_raw(contributors_body(), "application/json");
    mock_contributors(&server, response, 2).await;

    let client = GithubClientBuilder::default()
        .with_github_url(server.uri())
        .with_cache_ttl(Duration::ZERO)
        .build()
        .unwrap();

    client.contributors(OWNER, REPO).await.unwrap();
    client.contributors(OWNER, REPO).await.unwrap();

    server.verify().await;
}
