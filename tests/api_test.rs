//! API integration tests
//!
//! Exercises every endpoint through the router against a temporary SQLite file

use anyhow::Result;
use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use portfolio::database::entities::{blog_posts, testimonials};
use portfolio::database::setup_database;
use portfolio::server::app::create_app;
use portfolio::server::handlers::contact::{DELIVERED_MESSAGE, UNDELIVERED_MESSAGE};
use portfolio::services::{ContactNotification, Mailer, MemoryMailer, NotificationError};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::NamedTempFile;

struct TestApp {
    server: TestServer,
    db: DatabaseConnection,
    _temp_file: NamedTempFile,
}

/// Relay that rejects every message, like one with missing credentials
struct UnreachableMailer;

#[async_trait]
impl Mailer for UnreachableMailer {
    async fn send(&self, _notification: &ContactNotification) -> Result<(), NotificationError> {
        Err(NotificationError::NotConfigured("EMAIL_PASSWORD".to_string()))
    }
}

async fn setup_test_server_with(mailer: Arc<dyn Mailer>) -> Result<TestApp> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    let app = create_app(db.clone(), mailer, None).await?;
    let server = TestServer::new(app)?;

    Ok(TestApp {
        server,
        db,
        _temp_file: temp_file,
    })
}

async fn setup_test_server() -> Result<TestApp> {
    setup_test_server_with(Arc::new(MemoryMailer::new())).await
}

fn contact_payload() -> Value {
    json!({
        "name": "Sarah Johnson",
        "email": "sarah.johnson@techcorp.com",
        "subject": "Collaboration Opportunity",
        "message": "I'd love to discuss a potential project with you."
    })
}

fn blog_payload(title: &str, published: bool) -> Value {
    json!({
        "title": title,
        "excerpt": "A short summary of the post.",
        "content": "word ".repeat(200),
        "category": "Development",
        "published": published
    })
}

fn violation_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

async fn insert_post(db: &DatabaseConnection, index: i64, published: bool) -> Result<blog_posts::Model> {
    let now = Utc::now();
    let post = blog_posts::ActiveModel {
        id: Set(format!("post-{:02}", index)),
        title: Set(format!("Post number {}", index)),
        excerpt: Set("A short summary of the post.".to_string()),
        content: Set("word ".repeat(60)),
        category: Set(if index % 2 == 0 { "Design" } else { "Development" }.to_string()),
        image: Set(None),
        date: Set(now - Duration::minutes(index)),
        read_time: Set("1 min read".to_string()),
        published: Set(published),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(post.insert(db).await?)
}

#[tokio::test]
async fn test_root_status() -> Result<()> {
    let app = setup_test_server().await?;

    for path in ["/api", "/api/"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["message"], "Portfolio API");
        assert_eq!(body["status"], "active");
    }

    Ok(())
}

#[tokio::test]
async fn test_contact_submission_sends_notification() -> Result<()> {
    let mailer = Arc::new(MemoryMailer::new());
    let app = setup_test_server_with(mailer.clone()).await?;

    let response = app.server.post("/api/contact").json(&contact_payload()).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], DELIVERED_MESSAGE);
    assert!(!body["id"].as_str().unwrap_or_default().is_empty());

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].subject_line(),
        "Portfolio Contact Form: Collaboration Opportunity"
    );

    let response = app.server.get("/api/contact").await;
    let body: Value = response.json();
    let contacts = body["contacts"].as_array().cloned().unwrap_or_default();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["is_read"], false);

    Ok(())
}

#[tokio::test]
async fn test_contact_survives_mail_failure() -> Result<()> {
    let app = setup_test_server_with(Arc::new(UnreachableMailer)).await?;

    let response = app.server.post("/api/contact").json(&contact_payload()).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], UNDELIVERED_MESSAGE);
    let id = body["id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());

    let body: Value = app.server.get("/api/contact").await.json();
    assert_eq!(body["contacts"][0]["id"], id.as_str());

    Ok(())
}

#[tokio::test]
async fn test_contact_validation_names_field() -> Result<()> {
    let mailer = Arc::new(MemoryMailer::new());
    let app = setup_test_server_with(mailer.clone()).await?;

    let mut payload = contact_payload();
    payload["name"] = json!("A");
    payload["email"] = json!("not-an-email");

    let response = app.server.post("/api/contact").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(body["detail"], "Request validation failed");
    assert_eq!(violation_fields(&body), vec!["name", "email"]);

    // Rejected input never reaches the store or the relay
    let body: Value = app.server.get("/api/contact").await.json();
    assert_eq!(body["contacts"].as_array().map(Vec::len), Some(0));
    assert!(mailer.sent().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_identical_submissions_get_distinct_ids() -> Result<()> {
    let app = setup_test_server().await?;

    let first: Value = app.server.post("/api/contact").json(&contact_payload()).await.json();
    let second: Value = app.server.post("/api/contact").json(&contact_payload()).await.json();
    assert_ne!(first["id"], second["id"]);

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_rejected() -> Result<()> {
    let app = setup_test_server().await?;

    let response = app
        .server
        .post("/api/projects")
        .json(&json!(["not", "an", "object"]))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(violation_fields(&body), vec!["body"]);
    assert_eq!(body["errors"][0]["rule"], "malformed_body");

    Ok(())
}

#[tokio::test]
async fn test_blog_create_computes_read_time() -> Result<()> {
    let app = setup_test_server().await?;

    let response = app
        .server
        .post("/api/blog")
        .json(&blog_payload("Two hundred words", true))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let post: Value = response.json();
    assert_eq!(post["read_time"], "1 min read");
    assert_eq!(post["published"], true);

    let mut payload = blog_payload("A thousand words", false);
    payload["content"] = json!("word ".repeat(1000));
    // Server-assigned fields in the input are ignored
    payload["read_time"] = json!("99 min read");
    let post: Value = app.server.post("/api/blog").json(&payload).await.json();
    assert_eq!(post["read_time"], "5 min read");
    assert_eq!(post["published"], false);

    Ok(())
}

#[tokio::test]
async fn test_blog_list_only_published() -> Result<()> {
    let app = setup_test_server().await?;

    app.server.post("/api/blog").json(&blog_payload("Visible post", true)).await;
    app.server.post("/api/blog").json(&blog_payload("Draft post", false)).await;

    let unfiltered = app.server.get("/api/blog").await;
    let development = app
        .server
        .get("/api/blog")
        .add_query_param("category", "Development")
        .await;
    for response in [unfiltered, development] {
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        let posts = body["posts"].as_array().cloned().unwrap_or_default();
        assert_eq!(posts.len(), 1);
        assert!(posts.iter().all(|p| p["published"] == true));
        assert_eq!(body["total"], 1);
        assert_eq!(body["page"], 1);
        assert_eq!(body["per_page"], 10);
    }

    let body: Value = app
        .server
        .get("/api/blog")
        .add_query_param("category", "Design")
        .await
        .json();
    assert_eq!(body["total"], 0);

    Ok(())
}

#[tokio::test]
async fn test_blog_pagination() -> Result<()> {
    let app = setup_test_server().await?;

    // post-01 is the most recent, post-12 the oldest
    for index in 1..=12 {
        insert_post(&app.db, index, true).await?;
    }
    insert_post(&app.db, 13, false).await?;

    let response = app
        .server
        .get("/api/blog")
        .add_query_param("page", 2)
        .add_query_param("per_page", 5)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total"], 12);
    assert_eq!(body["page"], 2);
    assert_eq!(body["per_page"], 5);

    let ids: Vec<&str> = body["posts"]
        .as_array()
        .map(|posts| posts.iter().filter_map(|p| p["id"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec!["post-06", "post-07", "post-08", "post-09", "post-10"]);

    let last: Value = app
        .server
        .get("/api/blog")
        .add_query_param("page", 3)
        .add_query_param("per_page", 5)
        .await
        .json();
    assert_eq!(last["posts"].as_array().map(Vec::len), Some(2));
    assert_eq!(last["total"], 12);

    Ok(())
}

#[tokio::test]
async fn test_blog_pagination_bounds() -> Result<()> {
    let app = setup_test_server().await?;

    let response = app.server.get("/api/blog").add_query_param("per_page", 51).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(violation_fields(&body), vec!["per_page"]);

    let response = app.server.get("/api/blog").add_query_param("page", 0).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    // An offset beyond what the store can address is a range violation
    let response = app
        .server
        .get("/api/blog")
        .add_query_param("page", i64::MAX)
        .add_query_param("per_page", 50)
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(violation_fields(&body), vec!["page"]);
    assert_eq!(body["errors"][0]["rule"], "range");

    Ok(())
}

#[tokio::test]
async fn test_unpublished_post_is_not_found() -> Result<()> {
    let app = setup_test_server().await?;

    let published = insert_post(&app.db, 1, true).await?;
    let draft = insert_post(&app.db, 2, false).await?;

    let response = app.server.get(&format!("/api/blog/{}", published.id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["title"], published.title.as_str());

    let hidden = app.server.get(&format!("/api/blog/{}", draft.id)).await;
    let missing = app.server.get("/api/blog/does-not-exist").await;
    assert_eq!(hidden.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let hidden: Value = hidden.json();
    let missing: Value = missing.json();
    assert_eq!(hidden, missing);
    assert_eq!(missing["detail"], "Blog post not found");

    Ok(())
}

#[tokio::test]
async fn test_testimonials_require_approval() -> Result<()> {
    let app = setup_test_server().await?;

    let response = app
        .server
        .post("/api/testimonials")
        .json(&json!({
            "name": "Michael Chen",
            "position": "Senior Developer",
            "company": "Digital Innovations Ltd.",
            "content": "Excellent code quality and great communication."
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let submitted: Value = response.json();
    assert_eq!(submitted["approved"], false);
    assert_eq!(submitted["rating"], 5);

    let body: Value = app.server.get("/api/testimonials").await.json();
    assert_eq!(body["testimonials"].as_array().map(Vec::len), Some(0));

    testimonials::ActiveModel {
        id: Set("approved-1".to_string()),
        name: Set("Sarah Johnson".to_string()),
        position: Set("Project Manager".to_string()),
        company: Set("Tech Solutions Inc.".to_string()),
        content: Set("A pleasure to work with on every project.".to_string()),
        avatar: Set(None),
        rating: Set(4),
        approved: Set(true),
        created_at: Set(Utc::now()),
    }
    .insert(&app.db)
    .await?;

    let body: Value = app.server.get("/api/testimonials").await.json();
    let listed = body["testimonials"].as_array().cloned().unwrap_or_default();
    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|t| t["approved"] == true));

    Ok(())
}

#[tokio::test]
async fn test_testimonial_rating_range() -> Result<()> {
    let app = setup_test_server().await?;

    let response = app
        .server
        .post("/api/testimonials")
        .json(&json!({
            "name": "Michael Chen",
            "position": "Senior Developer",
            "company": "Digital Innovations Ltd.",
            "content": "Excellent code quality and great communication.",
            "rating": 6
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(violation_fields(&body), vec!["rating"]);

    Ok(())
}

#[tokio::test]
async fn test_project_technologies_required() -> Result<()> {
    let app = setup_test_server().await?;

    let mut payload = json!({
        "title": "Portfolio Site",
        "description": "Personal site with blog and project gallery.",
        "technologies": [],
        "category": "Frontend"
    });

    let response = app.server.post("/api/projects").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(violation_fields(&body), vec!["technologies"]);

    payload["technologies"] = json!(["React"]);
    let response = app.server.post("/api/projects").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let project: Value = response.json();
    assert_eq!(project["technologies"], json!(["React"]));
    assert_eq!(project["featured"], false);

    Ok(())
}

#[tokio::test]
async fn test_project_filters() -> Result<()> {
    let app = setup_test_server().await?;

    for (title, category, featured) in [
        ("Storefront App", "Full Stack", true),
        ("Analytics Board", "Data Analysis", false),
        ("Landing Page", "Frontend", false),
    ] {
        let response = app
            .server
            .post("/api/projects")
            .json(&json!({
                "title": title,
                "description": "A project description long enough.",
                "technologies": ["Rust"],
                "category": category,
                "featured": featured
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let all: Value = app
        .server
        .get("/api/projects")
        .add_query_param("category", "All")
        .await
        .json();
    let unfiltered: Value = app.server.get("/api/projects").await.json();
    assert_eq!(all["projects"].as_array().map(Vec::len), Some(3));
    assert_eq!(all, unfiltered);

    let featured: Value = app
        .server
        .get("/api/projects")
        .add_query_param("featured", true)
        .await
        .json();
    let featured = featured["projects"].as_array().cloned().unwrap_or_default();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["title"], "Storefront App");

    let frontend: Value = app
        .server
        .get("/api/projects")
        .add_query_param("category", "Frontend")
        .add_query_param("featured", false)
        .await
        .json();
    assert_eq!(frontend["projects"].as_array().map(Vec::len), Some(1));

    let response = app
        .server
        .get("/api/projects")
        .add_query_param("featured", "maybe")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn test_cors_headers() -> Result<()> {
    let app = setup_test_server().await?;

    let response = app
        .server
        .get("/api/projects")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("http://localhost:3000"))
    );
    assert_eq!(
        headers.get("access-control-allow-credentials"),
        Some(&HeaderValue::from_static("true"))
    );

    Ok(())
}

#[tokio::test]
async fn test_openapi_document() -> Result<()> {
    let app = setup_test_server().await?;

    let response = app.server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let doc: Value = response.json();
    assert!(doc["paths"]["/api/blog/{id}"].is_object());
    assert!(doc["paths"]["/api/contact"]["post"].is_object());

    Ok(())
}
