use async_trait::async_trait;

/// Best-effort fan-out notification sink.
///
/// Callers treat a publish failure as non-fatal: it is logged and the
/// surrounding transaction neither retries nor rolls back.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(
        &self,
        subject: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
