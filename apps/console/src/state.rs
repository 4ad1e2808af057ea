use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::agent_client::{AgentBackend, OfflineDemo};
use crate::config::Config;
use crate::intent::{Catalog, KeywordClassifier, DEFAULT_RULES};
use crate::render::ApiStatus;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote HTTP client, or the offline demo when the backend was unreachable at boot.
    pub backend: Arc<dyn AgentBackend>,
    /// Classifier compiled against the catalog resolved at boot. Holds the catalog.
    pub classifier: Arc<KeywordClassifier>,
    pub status: ApiStatus,
    pub config: Config,
}

impl AppState {
    /// Probes `remote`, picks the serving backend, and resolves the category
    /// catalog. Backend failures are logged and degrade; they never abort boot.
    pub async fn bootstrap(
        config: Config,
        remote: Arc<dyn AgentBackend>,
    ) -> Result<Self, regex::Error> {
        let defaults = Arc::new(Catalog::default());

        let (backend, status): (Arc<dyn AgentBackend>, ApiStatus) = match remote.health().await {
            Ok(_) => {
                info!("Agent backend reachable at {}", config.api_base);
                (remote, ApiStatus::Connected)
            }
            Err(e) if config.offline_fallback => {
                warn!("Agent backend health check failed ({e}); serving offline demo");
                let offline: Arc<dyn AgentBackend> = Arc::new(OfflineDemo::new(defaults.clone()));
                (offline, ApiStatus::Offline)
            }
            Err(e) => {
                warn!("Agent backend health check failed ({e}); runs will likely fail");
                (remote, ApiStatus::Unreachable)
            }
        };

        let catalog = match backend.agents().await {
            Ok(list) => {
                debug!("Merging {} categories from backend", list.len());
                Arc::new(defaults.merged(&list))
            }
            Err(e) => {
                debug!("Agents endpoint unavailable, keeping defaults: {e}");
                defaults
            }
        };

        let classifier = Arc::new(KeywordClassifier::new(DEFAULT_RULES, catalog)?);

        Ok(AppState {
            backend,
            classifier,
            status,
            config,
        })
    }

    /// Backend base shown in the page header; `None` in offline demo mode.
    pub fn api_origin(&self) -> Option<&str> {
        match self.status {
            ApiStatus::Offline => None,
            _ => Some(self.config.api_base.as_str()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.classifier.catalog()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::agent_client::testing::StubBackend;
    use crate::agent_client::BackendMode;
    use crate::models::Category;

    pub(crate) fn test_config(offline_fallback: bool) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            public_origin: "http://127.0.0.1:8080".to_string(),
            api_base: "http://agents.test".to_string(),
            offline_fallback,
        }
    }

    #[tokio::test]
    async fn test_healthy_backend_is_connected_and_merges_agents() {
        let stub = StubBackend {
            agents: Some(vec![
                Category::new("SA", "Sales Desk"),
                Category::new("ARA", "Arts Desk"),
            ]),
            ..StubBackend::healthy()
        };
        let state = AppState::bootstrap(test_config(true), Arc::new(stub))
            .await
            .unwrap();

        assert_eq!(state.status, ApiStatus::Connected);
        assert_eq!(state.backend.mode(), BackendMode::Remote);
        assert_eq!(state.catalog().label("SA"), Some("Sales Desk"));
        assert_eq!(state.catalog().label("ArA"), Some("Arts Desk"));
        assert_eq!(state.api_origin(), Some("http://agents.test"));
    }

    #[tokio::test]
    async fn test_missing_agents_endpoint_keeps_defaults() {
        let state = AppState::bootstrap(test_config(true), Arc::new(StubBackend::healthy()))
            .await
            .unwrap();
        assert_eq!(state.catalog(), &Catalog::default());
    }

    #[tokio::test]
    async fn test_failed_health_switches_to_offline_demo() {
        let state = AppState::bootstrap(test_config(true), Arc::new(StubBackend::down()))
            .await
            .unwrap();
        assert_eq!(state.status, ApiStatus::Offline);
        assert_eq!(state.backend.mode(), BackendMode::Offline);
        assert_eq!(state.api_origin(), None);
        assert_eq!(state.catalog(), &Catalog::default());
    }

    #[tokio::test]
    async fn test_failed_health_without_fallback_reports_unreachable() {
        let state = AppState::bootstrap(test_config(false), Arc::new(StubBackend::down()))
            .await
            .unwrap();
        assert_eq!(state.status, ApiStatus::Unreachable);
        assert_eq!(state.backend.mode(), BackendMode::Remote);
        assert_eq!(state.api_origin(), Some("http://agents.test"));
    }
}
