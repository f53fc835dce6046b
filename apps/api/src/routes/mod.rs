pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Headroom over the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Job board
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Resume parsing
        .route(
            "/api/v1/resumes/parse",
            post(resume::handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(matching::handle_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BODY_LIMIT: usize = 1024 * 1024;

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn job_body(title: &str, description: &str, skills: &str) -> Value {
        json!({
            "title": title,
            "company": "Zeta",
            "description": description,
            "required_skills": skills,
            "experience_required": "1-3 years",
            "location": "Remote",
            "job_type": "Full-time",
            "posted_by": "Zeta",
            "contact_email": "jobs@zeta.test"
        })
    }

    fn multipart_request(file_name: &str, content: &[u8]) -> Request<Body> {
        let boundary = "jobmatch-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/parse")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(AppState::new(Config::default()));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_post_job_then_recommend() {
        let router = build_router(AppState::new(Config::default()));

        let (status, created) = send(
            &router,
            json_request(
                "POST",
                "/api/v1/jobs",
                job_body("Rust Engineer", "Build rust services with tokio", "rust, tokio"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        send(
            &router,
            json_request(
                "POST",
                "/api/v1/jobs",
                job_body("Graphic Designer", "Create brand illustrations", "figma, photoshop"),
            ),
        )
        .await;

        let (status, recs) = send(
            &router,
            json_request(
                "POST",
                "/api/v1/recommendations",
                json!({ "profile": { "skills": "rust, tokio" } }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let recs = recs.as_array().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["job_id"], created["id"]);
        assert_eq!(recs[0]["bonuses"]["skills"], 0.0);
        assert!(recs[0]["description"].as_str().unwrap().ends_with("..."));
    }

    #[tokio::test]
    async fn test_recommend_on_empty_board_is_empty() {
        let router = build_router(AppState::new(Config::default()));
        let (status, recs) = send(
            &router,
            json_request(
                "POST",
                "/api/v1/recommendations",
                json!({ "profile": { "skills": "rust" }, "top_n": 3 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(recs, json!([]));
    }

    #[tokio::test]
    async fn test_zero_top_n_is_rejected() {
        let router = build_router(AppState::new(Config::default()));
        let (status, body) = send(
            &router,
            json_request(
                "POST",
                "/api/v1/recommendations",
                json!({ "profile": {}, "top_n": 0 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_job_is_404() {
        let router = build_router(AppState::new(Config::default()));
        let request = Request::builder()
            .uri(format!("/api/v1/jobs/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&router, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_extension() {
        let router = build_router(AppState::new(Config::default()));
        let (status, body) = send(&router, multipart_request("resume.txt", b"python")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("PDF"));
    }

    #[tokio::test]
    async fn test_upload_parses_docx() {
        use crate::resume::extract::tests::{docx_fixture, paragraph};

        let router = build_router(AppState::new(Config::default()));
        let docx = docx_fixture(&paragraph("4 years of experience with Django and SQL"));
        let (status, body) = send(&router, multipart_request("cv.docx", &docx)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["file_name"], "cv.docx");
        assert_eq!(body["signals"]["experience_level"], "3-5 years");
        // "go" is found inside "django".
        assert_eq!(body["signals"]["extracted_skills"], json!(["django", "sql", "go"]));
    }

    #[tokio::test]
    async fn test_corrupt_upload_yields_null_signals() {
        let router = build_router(AppState::new(Config::default()));
        let (status, body) = send(&router, multipart_request("cv.pdf", b"not a pdf")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["signals"].is_null());
    }

    #[tokio::test]
    async fn test_oversize_upload_is_rejected() {
        let config = Config {
            max_upload_bytes: 16,
            ..Config::default()
        };
        let router = build_router(AppState::new(config));
        let (status, _) = send(&router, multipart_request("cv.pdf", &[b'x'; 64])).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
