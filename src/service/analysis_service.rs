use crate::domain::analysis::{AnalyzeRequest, ScoredDriver};
use crate::domain::error::AnalysisError;
use crate::repo::results_repo::ResultsStore;
use crate::scoring::engine::rank_drivers;
use std::sync::Arc;

#[derive(Clone)]
pub struct AnalysisService {
    pub store: Option<Arc<dyn ResultsStore>>,
}

impl AnalysisService {
    pub fn new(store: Option<Arc<dyn ResultsStore>>) -> Self {
        Self { store }
    }

    pub async fn analyze(&self, body: &[u8]) -> Result<Vec<ScoredDriver>, AnalysisError> {
        let store = self.store.as_ref().ok_or(AnalysisError::StoreNotConfigured)?;
        let req = AnalyzeRequest::parse(body)?;

        let rows = store
            .results_at_circuit(&req.driver_ids(), req.circuit_id)
            .await?;
        if rows.is_empty() {
            tracing::info!(circuit_id = req.circuit_id, drivers = req.drivers.len(), "no results at circuit");
            return Ok(Vec::new());
        }

        let ranked = rank_drivers(&req.drivers, &rows);
        tracing::info!(
            circuit_id = req.circuit_id,
            drivers = req.drivers.len(),
            rows = rows.len(),
            ranked = ranked.len(),
            "analysis complete"
        );
        Ok(ranked)
    }

    pub async fn store_ready(&self) -> bool {
        match &self.store {
            Some(store) => match store.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = ?e, "results store ping failed");
                    false
                }
            },
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::JoinedResult;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingStore {
        rows: Vec<JoinedResult>,
        calls: Mutex<Vec<(Vec<i64>, i64)>>,
    }

    #[async_trait::async_trait]
    impl ResultsStore for RecordingStore {
        async fn results_at_circuit(&self, driver_ids: &[i64], circuit_id: i64) -> anyhow::Result<Vec<JoinedResult>> {
            self.calls
                .lock()
                .unwrap()
                .push((driver_ids.to_vec(), circuit_id));
            Ok(self.rows.clone())
        }

        async fn ping(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct FailingStore;

    #[async_trait::async_trait]
    impl ResultsStore for FailingStore {
        async fn results_at_circuit(&self, _: &[i64], _: i64) -> anyhow::Result<Vec<JoinedResult>> {
            anyhow::bail!("pool timed out while waiting for an open connection")
        }

        async fn ping(&self) -> anyhow::Result<()> {
            anyhow::bail!("unreachable")
        }
    }

    fn body(value: serde_json::Value) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    #[tokio::test]
    async fn queries_store_once_with_deduplicated_ids() {
        let store = Arc::new(RecordingStore {
            rows: vec![JoinedResult::new(1, "1"), JoinedResult::new(4, "3")],
            calls: Mutex::new(Vec::new()),
        });
        let service = AnalysisService::new(Some(store.clone()));

        let ranked = service
            .analyze(&body(json!({
                "drivers": [{"id": 1}, {"id": 4}, {"id": 1}],
                "circuitId": 14
            })))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2);
        let calls = store.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(vec![1, 4], 14)]);
    }

    #[tokio::test]
    async fn missing_store_wins_over_bad_body() {
        let service = AnalysisService::new(None);
        let err = service.analyze(b"").await.unwrap_err();
        assert!(matches!(err, AnalysisError::StoreNotConfigured));
        assert!(!service.store_ready().await);
    }

    #[tokio::test]
    async fn store_failure_is_unexpected() {
        let service = AnalysisService::new(Some(Arc::new(FailingStore)));
        let err = service
            .analyze(&body(json!({"drivers": [{"id": 1}], "circuitId": 6})))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Unexpected(_)));
        assert!(!service.store_ready().await);
    }

    #[tokio::test]
    async fn validation_runs_before_store_access() {
        let store = Arc::new(RecordingStore {
            rows: Vec::new(),
            calls: Mutex::new(Vec::new()),
        });
        let service = AnalysisService::new(Some(store.clone()));

        let err = service
            .analyze(&body(json!({"drivers": [{"id": 1}]})))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MissingFields));
        assert!(store.calls.lock().unwrap().is_empty());
    }
}
