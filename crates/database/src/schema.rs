//! Table metadata and DDL for persisted entities.
use super::EPISODES;
use mt_records::Episode;
use tokio_postgres::Client;

/// Table metadata and DDL generation. Local trait so it can be
/// implemented for types owned by other crates.
pub trait Schema {
    fn name() -> &'static str;
    fn creates() -> &'static str;
    fn indices() -> &'static str;
}

impl Schema for Episode {
    fn name() -> &'static str {
        EPISODES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            EPISODES,
            " (
                id              UUID PRIMARY KEY,
                room            TEXT NOT NULL,
                mouse_start_col SMALLINT NOT NULL,
                winner          TEXT,
                total_moves     INTEGER NOT NULL,
                started_at      BIGINT NOT NULL,
                ended_at        BIGINT NOT NULL,
                duration_ms     BIGINT NOT NULL,
                data            JSONB NOT NULL
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_",
            EPISODES,
            "_started ON ",
            EPISODES,
            " (started_at);
             CREATE INDEX IF NOT EXISTS idx_",
            EPISODES,
            "_winner ON ",
            EPISODES,
            " (winner);"
        )
    }
}

/// Creates tables and indices if absent. Idempotent; runs at startup
/// before the server binds.
pub async fn migrate(client: &Client) -> anyhow::Result<()> {
    client.batch_execute(Episode::creates()).await?;
    client.batch_execute(Episode::indices()).await?;
    log::info!("schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn ddl_targets_the_episodes_table() {
        assert_eq!(Episode::name(), "episodes");
        assert!(Episode::creates().contains("CREATE TABLE IF NOT EXISTS episodes"));
        assert!(Episode::creates().contains("data            JSONB NOT NULL"));
        assert!(Episode::indices().contains("idx_episodes_started"));
    }
}
