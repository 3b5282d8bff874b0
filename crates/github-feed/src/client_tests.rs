//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use crate::error::GitHubError;
    use folio_core::{
        load_feed, resolve, Category, FallbackReason, FeedOrigin, FolioError, ImageKey,
        RepositorySource,
    };
    use wiremock::matchers::{header, method, path, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock GitHub repository listing entry
    fn mock_github_repo(
        name: &str,
        description: Option<&str>,
        language: Option<&str>,
        topics: &[&str],
    ) -> serde_json::Value {
        serde_json::json!({
            "id": 4242,
            "name": name,
            "full_name": format!("dev/{}", name),
            "description": description,
            "html_url": format!("https://github.com/dev/{}", name),
            "topics": topics,
            "language": language,
            "fork": false,
            "stargazers_count": 3,
            "owner": {"login": "dev", "id": 1}
        })
    }

    async fn mount_listing(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/users/dev/repos"))
            .respond_with(template)
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_list_user_repos() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/dev/repos"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .and(query_param_is_missing("per_page"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_repo("login_mobile", Some("Android login"), Some("Kotlin"), &["android"]),
                mock_github_repo("portfolio-site", None, Some("TypeScript"), &["react"])
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let repos = client.list_user_repos("dev").unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "login_mobile");
        assert_eq!(repos[0].language.as_deref(), Some("Kotlin"));
        assert_eq!(repos[0].topics.as_deref(), Some(&["android".to_string()][..]));
        assert_eq!(repos[1].html_url, "https://github.com/dev/portfolio-site");
        assert!(repos[1].description.is_none());
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash() {
        let mock_server = MockServer::start().await;
        mount_listing(&mock_server, ResponseTemplate::new(200).set_body_json(serde_json::json!([]))).await;

        let client = GitHubClient::with_base_url(&format!("{}/", mock_server.uri()));
        assert!(client.list_user_repos("dev").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})),
        )
        .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let err = client.list_user_repos("dev").unwrap_err();

        assert!(matches!(err, GitHubError::UserNotFound(ref user) if user == "dev"));
    }

    #[tokio::test]
    async fn test_api_error_message() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"message": "API rate limit exceeded"})),
        )
        .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let err = client.list_user_repos("dev").unwrap_err();

        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API rate limit exceeded");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})),
        )
        .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let err = client.list_user_repos("dev").unwrap_err();

        assert!(matches!(err, GitHubError::Parse(_)));
        assert!(matches!(FolioError::from(err), FolioError::Parse(_)));
    }

    #[tokio::test]
    async fn test_repository_source_maps_records() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_repo("tamplate_pesan-makanan", None, Some("Dart"), &["flutter", "mobile"]),
                mock_github_repo("notes", Some("Scratchpad"), None, &[])
            ])),
        )
        .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let repos = client.list_repositories("dev").unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "tamplate_pesan-makanan");
        assert_eq!(repos[0].topics, vec!["flutter", "mobile"]);
        assert_eq!(repos[0].primary_language.as_deref(), Some("Dart"));
        assert_eq!(repos[1].url, "https://github.com/dev/notes");
        assert!(repos[1].primary_language.is_none());
    }

    #[tokio::test]
    async fn test_resolve_classifies_listing() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_repo("tamplate_pesan-makanan", None, Some("Dart"), &["flutter", "mobile"]),
                mock_github_repo("notes", Some("Scratchpad"), None, &[])
            ])),
        )
        .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let projects = resolve(&client, "dev");

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "tamplate pesan makanan");
        assert_eq!(projects[0].description, "Project description not available.");
        assert_eq!(projects[0].category, Category::MobileApp);
        assert_eq!(projects[0].image_url, ImageKey::Flutter.url());
        assert_eq!(projects[0].technologies, vec!["Dart", "flutter", "mobile"]);
        assert_eq!(projects[1].title, "notes");
        assert_eq!(projects[1].category, Category::Other);
        assert_eq!(projects[1].image_url, ImageKey::WebDefault.url());
        assert!(projects[1].technologies.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_server_error_is_empty() {
        let mock_server = MockServer::start().await;
        mount_listing(&mock_server, ResponseTemplate::new(500)).await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        assert!(resolve(&client, "dev").is_empty());
    }

    #[tokio::test]
    async fn test_load_feed_empty_listing_uses_fallback() {
        let mock_server = MockServer::start().await;
        mount_listing(&mock_server, ResponseTemplate::new(200).set_body_json(serde_json::json!([]))).await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let feed = load_feed(&client, "dev");

        assert_eq!(feed.origin, FeedOrigin::Fallback(FallbackReason::Empty));
        let titles: Vec<&str> = feed.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Template Pesan Makanan Mobile", "Login Mobile App"]);
    }

    #[test]
    fn test_unreachable_host() {
        // Nothing listens on port 1
        let client = GitHubClient::with_base_url("http://127.0.0.1:1");

        let err = client.list_user_repos("dev").unwrap_err();
        assert!(matches!(err, GitHubError::Http(_)));

        assert!(resolve(&client, "dev").is_empty());
        let feed = load_feed(&client, "dev");
        assert!(matches!(
            feed.origin,
            FeedOrigin::Fallback(FallbackReason::Unavailable(_))
        ));
    }
}
