use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use uuid::Uuid;

use super::query::ListQuery;
use crate::database::entities::contacts;
use crate::schemas::CreateContactRequest;

#[derive(Clone)]
pub struct ContactService {
    db: DatabaseConnection,
}

impl ContactService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Store a new, unread submission
    pub async fn create(&self, request: CreateContactRequest) -> Result<contacts::Model, DbErr> {
        let contact = contacts::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(request.name),
            email: Set(request.email),
            subject: Set(request.subject),
            message: Set(request.message),
            is_read: Set(false),
            created_at: Set(Utc::now()),
        };

        contact.insert(&self.db).await
    }

    /// Most recent submissions first
    pub async fn list(&self) -> Result<Vec<contacts::Model>, DbErr> {
        ListQuery::contacts()
            .build::<contacts::Entity>()?
            .all(&self.db)
            .await
    }
}
