use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use uuid::Uuid;

use super::query::ListQuery;
use crate::database::entities::projects::{self, Technologies};
use crate::schemas::{CreateProjectRequest, ProjectListParams};

#[derive(Clone)]
pub struct ProjectService {
    db: DatabaseConnection,
}

impl ProjectService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: &ProjectListParams) -> Result<Vec<projects::Model>, DbErr> {
        ListQuery::projects(params)
            .build::<projects::Entity>()?
            .all(&self.db)
            .await
    }

    pub async fn create(&self, request: CreateProjectRequest) -> Result<projects::Model, DbErr> {
        let project = projects::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(request.title),
            description: Set(request.description),
            technologies: Set(Technologies(request.technologies)),
            category: Set(request.category),
            image: Set(request.image),
            github_url: Set(request.github_url),
            live_url: Set(request.live_url),
            featured: Set(request.featured),
            created_at: Set(Utc::now()),
        };

        project.insert(&self.db).await
    }
}
