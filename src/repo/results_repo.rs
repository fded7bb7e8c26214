use crate::scoring::types::JoinedResult;
use anyhow::Result;
use sqlx::{PgPool, Row};

#[async_trait::async_trait]
pub trait ResultsStore: Send + Sync {
    /// Finishing records of `driver_ids` at races held on `circuit_id`.
    async fn results_at_circuit(&self, driver_ids: &[i64], circuit_id: i64) -> Result<Vec<JoinedResult>>;

    async fn ping(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct ResultsRepo {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl ResultsStore for ResultsRepo {
    async fn results_at_circuit(&self, driver_ids: &[i64], circuit_id: i64) -> Result<Vec<JoinedResult>> {
        let rows = sqlx::query(
            "SELECT r.driver_id::BIGINT AS driver_id, r.position::TEXT AS position FROM results r INNER JOIN races ra ON ra.race_id = r.race_id WHERE r.driver_id = ANY($1) AND ra.circuit_id = $2 ORDER BY ra.race_id ASC, r.driver_id ASC",
        )
        .bind(driver_ids)
        .bind(circuit_id)
        .fetch_all(&self.pool)
        .await?;

        // NULL positions fall through to the DNF branch of the scorer.
        Ok(rows
            .into_iter()
            .map(|r| JoinedResult {
                driver_id: r.get("driver_id"),
                position: r.get::<Option<String>, _>("position").unwrap_or_default(),
            })
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
