use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::info;
use travelgo_core::repository::DraftStore;
use travelgo_core::BookingDraft;

#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
}

impl RedisClient {
    pub async fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }

    fn draft_key(email: &str) -> String {
        format!("draft:{}", email)
    }
}

#[async_trait]
impl DraftStore for RedisClient {
    async fn stage(
        &self,
        email: &str,
        draft: &BookingDraft,
        ttl_seconds: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload = serde_json::to_string(draft)?;
        conn.set_ex::<_, _, ()>(Self::draft_key(email), payload, ttl_seconds)
            .await?;
        info!("Draft staged for {}: {}", email, draft.transport_id);
        Ok(())
    }

    async fn get(
        &self,
        email: &str,
    ) -> Result<Option<BookingDraft>, Box<dyn std::error::Error + Send + Sync>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = conn.get(Self::draft_key(email)).await?;

        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn clear(
        &self,
        email: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(Self::draft_key(email)).await?;
        Ok(())
    }
}
