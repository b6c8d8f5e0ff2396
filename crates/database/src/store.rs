use super::EPISODES;
use mt_core::ID;
use mt_core::Unique;
use mt_records::Episode;
use mt_records::EpisodeSink;
use serde::Serialize;
use std::sync::Arc;
use tokio_postgres::Client;

/// Aggregate statistics over every persisted episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stats {
    pub episodes: i64,
    pub mouse_wins: i64,
    pub cats_wins: i64,
    pub avg_moves: f64,
    pub avg_duration_ms: f64,
}

/// Episode writes and dataset reads against the shared connection.
///
/// Each episode row carries scalar columns for the queries the API serves
/// plus the complete document under `data`; the document is the export
/// format, so reads never reassemble episodes from columns.
pub struct Store {
    client: Arc<Client>,
}

impl Store {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
    /// Inserts one sealed episode. Ids are UUIDv7, so replays of the same
    /// hand-off are the only possible conflict and the primary key rejects
    /// them.
    pub async fn save(&self, episode: &Episode) -> anyhow::Result<ID<Episode>> {
        let sql = const_format::concatcp!(
            "INSERT INTO ",
            EPISODES,
            " (id, room, mouse_start_col, winner, total_moves,
               started_at, ended_at, duration_ms, data)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
        );
        let data = serde_json::to_value(episode)?;
        let winner = episode.winner().map(|side| side.to_string());
        self.client
            .execute(
                sql,
                &[
                    &episode.id().inner(),
                    &episode.room(),
                    &(episode.mouse_start_col() as i16),
                    &winner,
                    &(episode.total_moves() as i32),
                    &(episode.started_at() as i64),
                    &(episode.ended_at() as i64),
                    &(episode.duration_ms() as i64),
                    &data,
                ],
            )
            .await
            .map_err(|e| anyhow::anyhow!("save episode: {}", e))?;
        Ok(episode.id())
    }
    /// The most recent episode documents, newest first.
    pub async fn recent(&self, limit: i64) -> anyhow::Result<Vec<serde_json::Value>> {
        let sql = const_format::concatcp!(
            "SELECT data FROM ",
            EPISODES,
            " ORDER BY started_at DESC, id DESC LIMIT $1"
        );
        let rows = self
            .client
            .query(sql, &[&limit])
            .await
            .map_err(|e| anyhow::anyhow!("list episodes: {}", e))?;
        Ok(rows.iter().map(|row| row.get(0)).collect())
    }
    /// Every episode document in play order, as one training dataset.
    pub async fn export(&self) -> anyhow::Result<Vec<serde_json::Value>> {
        let sql = const_format::concatcp!(
            "SELECT data FROM ",
            EPISODES,
            " ORDER BY started_at ASC, id ASC"
        );
        let rows = self
            .client
            .query(sql, &[])
            .await
            .map_err(|e| anyhow::anyhow!("export dataset: {}", e))?;
        Ok(rows.iter().map(|row| row.get(0)).collect())
    }
    /// Win counts and average game length across all episodes. Averages
    /// are zero, not NULL, when the table is empty.
    pub async fn statistics(&self) -> anyhow::Result<Stats> {
        let sql = const_format::concatcp!(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE winner = 'mouse'),
                    COUNT(*) FILTER (WHERE winner = 'cats'),
                    COALESCE(AVG(total_moves), 0)::DOUBLE PRECISION,
                    COALESCE(AVG(duration_ms), 0)::DOUBLE PRECISION
             FROM ",
            EPISODES
        );
        let row = self
            .client
            .query_one(sql, &[])
            .await
            .map_err(|e| anyhow::anyhow!("compute statistics: {}", e))?;
        Ok(Stats {
            episodes: row.get(0),
            mouse_wins: row.get(1),
            cats_wins: row.get(2),
            avg_moves: row.get(3),
            avg_duration_ms: row.get(4),
        })
    }
}

#[async_trait::async_trait]
impl EpisodeSink for Store {
    async fn save(&self, episode: &Episode) -> anyhow::Result<ID<Episode>> {
        Store::save(self, episode).await
    }
}
