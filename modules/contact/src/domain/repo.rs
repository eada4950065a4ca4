use async_trait::async_trait;

use super::model::ContactMessage;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a contact message. Insert-only.
    async fn insert(&self, message: ContactMessage) -> anyhow::Result<()>;
}
