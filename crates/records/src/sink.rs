use super::Episode;
use mt_core::ID;

/// Contract for the persistence collaborator.
///
/// The session coordinator hands each sealed episode to a sink exactly
/// once, fire-and-forget: failures are logged by the caller and never
/// block or roll back gameplay. Object-safe so the coordinator can hold
/// `Arc<dyn EpisodeSink>` and tests can substitute an in-memory sink.
#[async_trait::async_trait]
pub trait EpisodeSink: Send + Sync {
    async fn save(&self, episode: &Episode) -> anyhow::Result<ID<Episode>>;
}
