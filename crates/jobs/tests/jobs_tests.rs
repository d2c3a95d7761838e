use std::sync::Arc;

use jobboard_rust_http::ApiClient;
use jobboard_rust_jobs::JobsClient;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn job_detail_unwraps_the_data_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EmployerPost/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 42,
                "title": "Backend Engineer",
                "location": "Ha Noi",
                "salary": 30000000,
                "employerName": "Acme Corp"
            }
        })))
        .mount(&server)
        .await;

    let api = Arc::new(ApiClient::new(&server.uri()).unwrap());
    let jobs = JobsClient::new(api);

    let post = jobs.job_detail(42).await.unwrap();
    assert_eq!(post.id, 42);
    assert_eq!(post.title, "Backend Engineer");
    assert_eq!(post.employer_name.as_deref(), Some("Acme Corp"));
    assert_eq!(post.salary, Some(30000000));
    assert!(post.logo.is_none());
}

#[tokio::test]
async fn saved_jobs_returns_entries_and_total() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/JobSeekerPost/saved/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "employerPostId": 42,
                    "title": "Backend Engineer",
                    "location": "Ha Noi",
                    "employerName": "Acme Corp",
                    "addedAt": "2025-06-01T08:00:00Z"
                }
            ],
            "total": 1
        })))
        .mount(&server)
        .await;

    let api = Arc::new(ApiClient::new(&server.uri()).unwrap());
    let jobs = JobsClient::new(api);

    let page = jobs.saved_jobs(7).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].employer_post_id, 42);
}

#[tokio::test]
async fn save_job_posts_the_expected_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/JobSeekerPost/save-job"))
        .and(body_json(json!({
            "jobSeekerId": 7,
            "employerPostId": 42,
            "note": null
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = Arc::new(ApiClient::new(&server.uri()).unwrap());
    let jobs = JobsClient::new(api);

    jobs.save_job(7, 42).await.unwrap();
}
