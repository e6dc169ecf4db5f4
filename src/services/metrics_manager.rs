use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub topic_usage: HashMap<String, u64>,
    pub outcomes: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn increment_topic(&self, topic: &str) {
        let mut data = self.inner.write().await;
        *data.topic_usage.entry(topic.to_string()).or_insert(0) += 1;
    }

    /// `outcome` is `reply`, `empty_completion`, or an error kind.
    pub async fn increment_outcome(&self, outcome: &str) {
        let mut data = self.inner.write().await;
        *data.outcomes.entry(outcome.to_string()).or_insert(0) += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counters_accumulate() {
        let metrics = MetricsManager::new();
        metrics.increment_topic("dog-care").await;
        metrics.increment_topic("dog-care").await;
        metrics.increment_outcome("timeout").await;

        let data = metrics.get_metrics().await;
        assert_eq!(data.topic_usage.get("dog-care"), Some(&2));
        assert_eq!(data.outcomes.get("timeout"), Some(&1));
        assert!(data.outcomes.get("reply").is_none());
    }
}
