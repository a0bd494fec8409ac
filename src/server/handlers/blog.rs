use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::database::entities::blog_posts;
use crate::errors::{ApiError, ApiResult};
use crate::schemas::{BlogListParams, CreateBlogPostRequest};
use crate::server::app::AppState;
use crate::server::middleware::{ValidatedJson, ValidatedQuery};
use crate::services::BlogPage;

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogListResponse {
    pub posts: Vec<blog_posts::Model>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl From<BlogPage> for BlogListResponse {
    fn from(page: BlogPage) -> Self {
        Self {
            posts: page.posts,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/blog",
    params(
        ("category" = Option<String>, Query, description = "Only posts in this category"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("per_page" = Option<u64>, Query, description = "Posts per page, 1 to 50")
    ),
    responses(
        (status = 200, description = "One page of published posts", body = BlogListResponse),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn list_blog_posts(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<BlogListParams>,
) -> ApiResult<Json<BlogListResponse>> {
    let page = state
        .blog
        .list_published(&params)
        .await
        .map_err(|err| ApiError::database("Failed to fetch blog posts", err))?;
    debug!(
        "Blog page {} ({} per page): {} of {} posts",
        page.page,
        page.per_page,
        page.posts.len(),
        page.total
    );

    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    params(
        ("id" = String, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "Published post", body = crate::database::entities::blog_posts::Model),
        (status = 404, description = "Blog post not found")
    )
)]
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<blog_posts::Model>> {
    let post = state
        .blog
        .find_published(&id)
        .await
        .map_err(|err| ApiError::database("Failed to fetch blog post", err))?
        .ok_or_else(|| ApiError::not_found("Blog post"))?;

    Ok(Json(post))
}

#[utoipa::path(
    post,
    path = "/api/blog",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 200, description = "Post created", body = crate::database::entities::blog_posts::Model),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_blog_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBlogPostRequest>,
) -> ApiResult<Json<blog_posts::Model>> {
    let post = state
        .blog
        .create(request)
        .await
        .map_err(|err| ApiError::database("Failed to create blog post", err))?;
    info!("Created blog post {} ({})", post.id, post.read_time);

    Ok(Json(post))
}
