//! Integration tests for the portfolio backend.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::{Config, LogFormat};
use crate::db::{init_database, Store};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    store: Arc<Store>,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_admin_key(None).await
    }

    async fn with_admin_key(admin_key: Option<String>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let config = Config {
            db_dir: temp_dir.path().to_path_buf(),
            db_name: "test".to_string(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            admin_key,
            seed_path: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        };

        // Initialize database
        let pool = init_database(&config.db_path())
            .await
            .expect("Failed to init DB");
        let store = Arc::new(Store::new(pool));

        let state = AppState {
            store: store.clone(),
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            store,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }
}

fn two_updates() -> Value {
    json!([
        { "id": "update-1", "title": "Graduated", "date": "2024-01-01", "content": "BS CS", "type": "other" },
        { "id": "update-2", "title": "Launched site", "date": "2024-06-01", "content": "Next.js", "type": "project" }
    ])
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_skill_sync_then_read() {
    let fixture = TestFixture::new().await;
    let skills = json!([{ "name": "Rust", "proficiency": "advanced", "categories": ["language"] }]);

    let (status, body) = fixture
        .post("/api/data/skills", json!({ "data": skills }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = fixture.get("/api/data/skills").await;
    assert_eq!(status, 200);
    assert_eq!(body, skills);
}

#[tokio::test]
async fn test_updates_read_newest_first() {
    let fixture = TestFixture::new().await;

    let (status, _) = fixture
        .post("/api/data/updates", json!({ "data": two_updates() }))
        .await;
    assert_eq!(status, 200);

    let (_, body) = fixture.get("/api/data/updates").await;
    let dates: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2024-06-01", "2024-01-01"]);
}

#[tokio::test]
async fn test_courses_read_newest_first() {
    let fixture = TestFixture::new().await;

    let courses = json!([
        { "name": "SQL Fundamentals", "platform": "DataCamp", "startDate": "January 2025",
          "endDate": "February 2025", "description": "SQL", "completed": true },
        { "name": "A+ Core 1", "platform": "Udemy", "instructor": "Mike Meyers",
          "startDate": "March 3, 2025", "description": "Hardware", "completed": false },
        { "name": "Intro", "platform": "Coursera", "startDate": "2023-09-01",
          "description": "Basics", "completed": true }
    ]);

    let (status, _) = fixture
        .post("/api/data/courses", json!({ "data": courses }))
        .await;
    assert_eq!(status, 200);

    let (_, body) = fixture.get("/api/data/courses").await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["A+ Core 1", "SQL Fundamentals", "Intro"]);
    assert_eq!(body[0]["instructor"], "Mike Meyers");
    assert!(body[0].get("endDate").is_none());
}

#[tokio::test]
async fn test_empty_array_clears_every_collection() {
    let fixture = TestFixture::new().await;

    fixture
        .post("/api/data/updates", json!({ "data": two_updates() }))
        .await;

    for path in [
        "/api/data/education",
        "/api/data/certificates",
        "/api/data/courses",
        "/api/data/skills",
        "/api/data/projects",
        "/api/data/updates",
    ] {
        let (status, body) = fixture.post(path, json!({ "data": [] })).await;
        assert_eq!(status, 200, "POST {}", path);
        assert_eq!(body["success"], true);

        let (status, body) = fixture.get(path).await;
        assert_eq!(status, 200, "GET {}", path);
        assert_eq!(body, json!([]), "GET {}", path);
    }
}

#[tokio::test]
async fn test_invalid_skill_batch_keeps_previous_collection() {
    let fixture = TestFixture::new().await;
    let original = json!([{ "name": "SQL", "proficiency": "expert", "categories": ["language", "database"] }]);

    fixture
        .post("/api/data/skills", json!({ "data": original }))
        .await;

    // Second record has no proficiency
    let (status, body) = fixture
        .post(
            "/api/data/skills",
            json!({ "data": [
                { "name": "Rust", "proficiency": "advanced", "categories": ["language"] },
                { "name": "Go", "categories": ["language"] }
            ] }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("proficiency"));

    let (_, body) = fixture.get("/api/data/skills").await;
    assert_eq!(body, original);
}

#[tokio::test]
async fn test_validation_errors() {
    let fixture = TestFixture::new().await;

    // Proficiency outside the enumerated set
    let (status, body) = fixture
        .post(
            "/api/data/skills",
            json!({ "data": [{ "name": "Rust", "proficiency": "master", "categories": ["language"] }] }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Start date that is not a date
    let (status, body) = fixture
        .post(
            "/api/data/courses",
            json!({ "data": [{ "name": "SQL", "platform": "DataCamp", "startDate": "not-a-date",
                               "description": "SQL", "completed": true }] }),
        )
        .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("startDate"));

    // Unknown update type
    let (status, _) = fixture
        .post(
            "/api/data/updates",
            json!({ "data": [{ "id": "u1", "title": "T", "date": "2024-01-01", "content": "c", "type": "blog" }] }),
        )
        .await;
    assert_eq!(status, 400);

    // Education entry missing its location
    let (status, _) = fixture
        .post(
            "/api/data/education",
            json!({ "data": [{ "degree": "BS", "institution": "Butler", "date": "2020 - 2024",
                               "description": "CS" }] }),
        )
        .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_shape_errors() {
    let fixture = TestFixture::new().await;

    // data is not an array
    let (status, body) = fixture
        .post("/api/data/projects", json!({ "data": { "id": "p1" } }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "BAD_REQUEST");

    // data is missing
    let (status, _) = fixture.post("/api/data/projects", json!({})).await;
    assert_eq!(status, 400);

    // Body is not JSON at all
    let resp = fixture
        .client
        .post(fixture.url("/api/data/projects"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_sync_is_idempotent() {
    let fixture = TestFixture::new().await;
    let projects = json!([
        { "id": "project-1", "title": "IT Ticketing System", "description": "C# help desk",
          "tags": ["C#", "SQL"], "featured": true },
        { "id": "project-2", "title": "Scoring Prototype", "description": "Angular",
          "tags": ["Angular"] }
    ]);

    fixture
        .post("/api/data/projects", json!({ "data": projects }))
        .await;
    let (_, once) = fixture.get("/api/data/projects").await;

    fixture
        .post("/api/data/projects", json!({ "data": projects }))
        .await;
    let (_, twice) = fixture.get("/api/data/projects").await;

    assert_eq!(once, projects);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_generic_dispatcher() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post("/api/data", json!({ "type": "updates", "data": two_updates() }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let (status, body) = fixture
        .post(
            "/api/data",
            json!({ "type": "certificates", "data": [
                { "name": "SQL Associate", "issuer": "DataCamp", "date": "February 2025" }
            ] }),
        )
        .await;
    assert_eq!(status, 200, "{}", body);

    let (status, body) = fixture.get("/api/data").await;
    assert_eq!(status, 200);
    for key in [
        "education",
        "certificates",
        "onlineCourses",
        "skills",
        "projects",
        "updates",
    ] {
        assert!(body[key].is_array(), "missing {}", key);
    }
    assert_eq!(body["updates"][0]["id"], "update-2");
    assert_eq!(body["certificates"][0]["name"], "SQL Associate");
    assert_eq!(body["skills"], json!([]));
}

#[tokio::test]
async fn test_dispatcher_rejects_bad_type() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post("/api/data", json!({ "type": "blogPosts", "data": [] }))
        .await;
    assert_eq!(status, 400);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid data type"));

    let (status, _) = fixture.post("/api/data", json!({ "data": [] })).await;
    assert_eq!(status, 400);

    // Validation still applies through the dispatcher
    let (status, _) = fixture
        .post(
            "/api/data",
            json!({ "type": "skills", "data": [{ "name": "Rust", "proficiency": "master", "categories": ["language"] }] }),
        )
        .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_admin_key_guards_writes_only() {
    let fixture = TestFixture::with_admin_key(Some("admin-secret".to_string())).await;
    let payload = json!({ "data": [] });

    // Request without admin key
    let (status, body) = fixture.post("/api/data/skills", payload.clone()).await;
    assert_eq!(status, 401);
    assert_eq!(body["code"], "UNAUTHORIZED");

    // Request with wrong admin key
    let resp = fixture
        .client
        .post(fixture.url("/api/data/skills"))
        .header("x-api-key", "wrong-key")
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Reads stay public
    let (status, _) = fixture.get("/api/data/skills").await;
    assert_eq!(status, 200);

    // Correct key, header and bearer forms
    let resp = fixture
        .client
        .post(fixture.url("/api/data/skills"))
        .header("x-api-key", "admin-secret")
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .post(fixture.url("/api/data"))
        .bearer_auth("admin-secret")
        .json(&json!({ "type": "projects", "data": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_view_endpoints() {
    let fixture = TestFixture::new().await;

    fixture
        .post(
            "/api/data/projects",
            json!({ "data": [
                { "id": "project-3", "title": "Portfolio", "description": "This site",
                  "tags": ["Next.js", "TypeScript"], "featured": true },
                { "id": "project-1", "title": "Ticketing", "description": "Help desk",
                  "tags": ["C#", "SQL"], "featured": false }
            ] }),
        )
        .await;
    fixture
        .post(
            "/api/data/skills",
            json!({ "data": [
                { "name": "Java", "proficiency": "intermediate", "categories": ["language"] },
                { "name": "SQL", "proficiency": "expert", "categories": ["language", "database"] }
            ] }),
        )
        .await;

    let (status, tags) = fixture.get("/api/data/projects/tags").await;
    assert_eq!(status, 200);
    assert_eq!(tags, json!(["C#", "Next.js", "SQL", "TypeScript"]));

    let (_, tagged) = fixture.get("/api/data/projects/tags/SQL").await;
    assert_eq!(tagged.as_array().unwrap().len(), 1);
    assert_eq!(tagged[0]["id"], "project-1");

    let (_, groups) = fixture.get("/api/data/skills/grouped").await;
    assert_eq!(groups[0]["category"], "language");
    assert_eq!(groups[0]["label"], "Programming Languages");
    assert_eq!(groups[0]["skills"][0]["name"], "SQL");
    assert_eq!(groups[1]["category"], "database");

    let (_, highlights) = fixture.get("/api/data/highlights").await;
    assert_eq!(highlights["featuredProjects"][0]["id"], "project-3");
    assert_eq!(highlights["expertSkills"][0]["name"], "SQL");
    assert_eq!(highlights.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_education_page_view() {
    let fixture = TestFixture::new().await;

    fixture
        .post(
            "/api/data/certificates",
            json!({ "data": [
                { "name": "SQL Associate", "issuer": "DataCamp", "date": "February 2025" },
                { "name": "Data Analytics", "issuer": "Google (Coursera)", "date": "2023" }
            ] }),
        )
        .await;
    let (status, _) = fixture
        .post(
            "/api/data/courses",
            json!({ "data": [
                { "name": "Rust", "platform": "Udemy", "startDate": "2024-01-01",
                  "description": "Ownership", "completed": true },
                { "name": "ML", "platform": "Coursera", "startDate": "2024-03-01",
                  "description": "Regression", "completed": false },
                { "name": "Go", "platform": "Udemy", "startDate": "2024-06-01",
                  "description": "Channels", "completed": true }
            ] }),
        )
        .await;
    assert_eq!(status, 200);

    let (status, page) = fixture.get("/api/data/education/page").await;
    assert_eq!(status, 200);
    assert_eq!(page["education"], json!([]));
    assert_eq!(page["professionalCertificates"][0]["name"], "Data Analytics");
    assert_eq!(page["otherCertificates"][0]["name"], "SQL Associate");

    // Courses are read newest first, so Udemy (Go, June) is seen before Coursera.
    let platforms = page["coursePlatforms"].as_array().unwrap();
    assert_eq!(platforms.len(), 2);
    assert_eq!(platforms[0]["platform"], "Udemy");
    assert_eq!(platforms[0]["courses"][0]["name"], "Go");
    assert_eq!(platforms[0]["courses"][1]["name"], "Rust");
    assert_eq!(platforms[1]["platform"], "Coursera");
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let fixture = TestFixture::new().await;
    fixture.store.close().await;

    let (status, body) = fixture.get("/api/data/skills").await;
    assert_eq!(status, 500);
    assert_eq!(body["code"], "DATABASE_ERROR");

    let (status, _) = fixture
        .post("/api/data/updates", json!({ "data": two_updates() }))
        .await;
    assert_eq!(status, 500);

    // Validation still runs first and never reaches the closed store
    let (status, _) = fixture
        .post("/api/data/updates", json!({ "data": "not an array" }))
        .await;
    assert_eq!(status, 400);

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);
}
