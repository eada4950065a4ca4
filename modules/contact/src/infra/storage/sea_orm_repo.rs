use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::domain::model::ContactMessage;
use crate::domain::repo::ContactRepository;

use super::entity;

pub struct SeaOrmContactRepository {
    db: DatabaseConnection,
}

impl SeaOrmContactRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn insert(&self, message: ContactMessage) -> anyhow::Result<()> {
        let active_model = entity::ActiveModel {
            id: ActiveValue::Set(message.id),
            name: ActiveValue::Set(message.name),
            email: ActiveValue::Set(message.email),
            phone: ActiveValue::Set(message.phone),
            message: ActiveValue::Set(message.message),
            submitted_at: ActiveValue::Set(message.submitted_at),
            ip_address: ActiveValue::Set(message.ip_address),
            user_agent: ActiveValue::Set(message.user_agent),
            email_sent: ActiveValue::Set(message.email_sent),
            email_error: ActiveValue::Set(message.email_error),
        };
        active_model.insert(&self.db).await?;
        Ok(())
    }
}
