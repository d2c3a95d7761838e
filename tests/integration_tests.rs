use jobboard_rust::{ClientOptions, Config, JobBoard};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_expiry_refresh_and_replay_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "first",
            "expiresIn": 3600,
            "user": {
                "id": 7,
                "username": "alice",
                "roles": ["JobSeeker"],
                "verified": true
            }
        })))
        .mount(&server)
        .await;

    // The first token is already expired by the time the job detail is
    // fetched; the request must refresh once and replay.
    Mock::given(method("GET"))
        .and(path("/EmployerPost/42"))
        .and(header("Authorization", "Bearer first"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/EmployerPost/42"))
        .and(header("Authorization", "Bearer second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 42,
                "title": "Backend Engineer",
                "employerName": "Acme Corp"
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/Auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "second"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = JobBoard::new(Config::new(&server.uri()).unwrap()).unwrap();

    client
        .auth()
        .login("alice@example.com", "password123")
        .await
        .unwrap();
    assert!(client.auth().is_authenticated());

    let job = client.jobs().job_detail(42).await.unwrap();
    assert_eq!(job.title, "Backend Engineer");

    // The refreshed token replaced the expired one.
    assert_eq!(client.api().tokens().get(), Some("second".to_string()));
    assert!(client.auth().is_authenticated());
}

#[tokio::test]
async fn bootstrap_gates_anonymous_sessions_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = JobBoard::new(Config::new(&server.uri()).unwrap()).unwrap();

    let session = client.auth().bootstrap().await;
    assert!(session.status.is_settled());
    assert!(!session.is_authenticated);
}

#[tokio::test]
async fn custom_device_info_is_sent_with_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Auth/login"))
        .and(body_partial_json(json!({"deviceInfo": "CliApp"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "tok",
            "user": {
                "id": 7,
                "username": "alice",
                "roles": ["JobSeeker"],
                "verified": true
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ClientOptions::default().with_device_info("CliApp");
    let client =
        JobBoard::new_with_options(Config::new(&server.uri()).unwrap(), options).unwrap();

    client
        .auth()
        .login("alice@example.com", "password123")
        .await
        .unwrap();
}

#[test]
fn config_from_env_reads_the_base_url() {
    dotenv::dotenv().ok();

    std::env::set_var("JOBBOARD_API_URL", "http://localhost:12345/api");
    let config = Config::from_env().unwrap();
    assert_eq!(config.base_url.as_str(), "http://localhost:12345/api");
}

#[test]
fn config_rejects_invalid_urls() {
    assert!(Config::new("not a valid url").is_err());
}
