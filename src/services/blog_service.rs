use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, PaginatorTrait, Set};
use uuid::Uuid;

use super::query::ListQuery;
use super::read_time::estimate_read_time;
use crate::database::entities::blog_posts;
use crate::schemas::{BlogListParams, CreateBlogPostRequest};

/// One page of published posts plus the total across all pages.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogPage {
    pub posts: Vec<blog_posts::Model>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Clone)]
pub struct BlogService {
    db: DatabaseConnection,
}

impl BlogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_published(&self, params: &BlogListParams) -> Result<BlogPage, DbErr> {
        let query = ListQuery::blog_posts(params);
        let posts = query.build::<blog_posts::Entity>()?.all(&self.db).await?;
        let total = query.filtered::<blog_posts::Entity>()?.count(&self.db).await?;

        Ok(BlogPage {
            posts,
            total,
            page: params.page,
            per_page: params.per_page,
        })
    }

    /// `None` both for unknown ids and for posts that are not published.
    pub async fn find_published(&self, id: &str) -> Result<Option<blog_posts::Model>, DbErr> {
        ListQuery::published_post(id)
            .build::<blog_posts::Entity>()?
            .one(&self.db)
            .await
    }

    pub async fn create(&self, request: CreateBlogPostRequest) -> Result<blog_posts::Model, DbErr> {
        let now = Utc::now();
        let read_time = estimate_read_time(&request.content);

        let post = blog_posts::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(request.title),
            excerpt: Set(request.excerpt),
            content: Set(request.content),
            category: Set(request.category),
            image: Set(request.image),
            date: Set(now),
            read_time: Set(read_time),
            published: Set(request.published),
            created_at: Set(now),
            updated_at: Set(now),
        };

        post.insert(&self.db).await
    }
}
