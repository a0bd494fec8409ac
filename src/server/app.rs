use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{blog, contact, projects, root, testimonials};
use super::openapi::ApiDoc;
use crate::services::{
    BlogService, ContactService, Mailer, NotificationDispatcher, ProjectService,
    TestimonialService,
};

#[derive(Clone)]
pub struct AppState {
    pub contacts: ContactService,
    pub blog: BlogService,
    pub testimonials: TestimonialService,
    pub projects: ProjectService,
    pub notifier: NotificationDispatcher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            contacts: ContactService::new(db.clone()),
            blog: BlogService::new(db.clone()),
            testimonials: TestimonialService::new(db.clone()),
            projects: ProjectService::new(db),
            notifier: NotificationDispatcher::new(mailer),
        }
    }
}

pub async fn create_app(
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
    cors_origin: Option<&str>,
) -> Result<Router> {
    let state = AppState::new(db, mailer);
    let cors = cors_layer(cors_origin)?;

    let app = Router::new()
        .route("/api", get(root::api_status))
        .route("/api/", get(root::api_status))
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            get(contact::list_contacts).post(contact::submit_contact),
        )
        .route(
            "/blog",
            get(blog::list_blog_posts).post(blog::create_blog_post),
        )
        .route("/blog/:id", get(blog::get_blog_post))
        .route(
            "/testimonials",
            get(testimonials::list_testimonials).post(testimonials::submit_testimonial),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
}

/// Credentials are always allowed, so the wildcard case mirrors the
/// caller's origin, methods and headers instead of answering `*`.
fn cors_layer(cors_origin: Option<&str>) -> Result<CorsLayer> {
    let origin = match cors_origin {
        Some(origin) => AllowOrigin::exact(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?,
        ),
        None => AllowOrigin::mirror_request(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
