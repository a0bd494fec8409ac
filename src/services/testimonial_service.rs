use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use uuid::Uuid;

use super::query::ListQuery;
use crate::database::entities::testimonials;
use crate::schemas::CreateTestimonialRequest;

#[derive(Clone)]
pub struct TestimonialService {
    db: DatabaseConnection,
}

impl TestimonialService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_approved(&self) -> Result<Vec<testimonials::Model>, DbErr> {
        ListQuery::testimonials()
            .build::<testimonials::Entity>()?
            .all(&self.db)
            .await
    }

    /// Submissions always start unapproved
    pub async fn submit(
        &self,
        request: CreateTestimonialRequest,
    ) -> Result<testimonials::Model, DbErr> {
        let testimonial = testimonials::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(request.name),
            position: Set(request.position),
            company: Set(request.company),
            content: Set(request.content),
            avatar: Set(request.avatar),
            rating: Set(request.rating),
            approved: Set(false),
            created_at: Set(Utc::now()),
        };

        testimonial.insert(&self.db).await
    }
}
