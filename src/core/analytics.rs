//! 產品使用分析：啟動事件、定時 heartbeat 與已啟用 pipe 的統計
//!
//! 事件透過 [`EventSink`] 送出；本機 API (`/health`、`/pipes/list`) 用 reqwest 直接查詢。
//! 所有失敗只會記錄 log，不會中斷呼叫端。

use crate::adapters::http::PostHogSink;
use crate::config::toml_config::AnalyticsConfig;
use crate::domain::model::{HealthStatus, PipeListResponse};
use crate::domain::ports::EventSink;
use crate::utils::error::Result;
use crate::utils::system::SystemSnapshot;
use crate::utils::validation::Validate;
use reqwest::Client;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub const DEV_MODE_ENV_VAR: &str = "HELPERKIT_ENV_DEBUG";

pub struct AnalyticsManager<S: EventSink> {
    sink: S,
    client: Client,
    api_key: String,
    distinct_id: String,
    interval: Duration,
    enabled: Arc<Mutex<bool>>,
    local_api_base_url: String,
    system: SystemSnapshot,
}

impl<S: EventSink> AnalyticsManager<S> {
    /// debug build 預設停用，需要時呼叫 [`AnalyticsManager::set_enabled`]
    pub fn new(config: &AnalyticsConfig, sink: S, client: Client) -> Self {
        Self {
            sink,
            client,
            api_key: config.api_key.clone(),
            distinct_id: config.distinct_id.clone(),
            interval: config.interval(),
            enabled: Arc::new(Mutex::new(config.enabled && !cfg!(debug_assertions))),
            local_api_base_url: config.local_api_base_url.trim_end_matches('/').to_string(),
            system: SystemSnapshot::capture(),
        }
    }

    pub async fn set_enabled(&self, enabled: bool) {
        *self.enabled.lock().await = enabled;
    }

    pub async fn is_enabled(&self) -> bool {
        *self.enabled.lock().await
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 組出 capture payload，呼叫端的 properties 會覆蓋同名的系統欄位
    pub fn build_payload(&self, event: &str, properties: Option<Value>) -> Value {
        let mut merged = Map::new();
        merged.insert("distinct_id".to_string(), json!(self.distinct_id));
        merged.insert("$lib".to_string(), json!("rust-reqwest"));
        merged.extend(self.system.to_properties());

        if let Some(Value::Object(extra)) = properties {
            merged.extend(extra);
        }

        json!({
            "api_key": self.api_key,
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "properties": Value::Object(merged),
        })
    }

    pub async fn send_event(&self, event: &str, properties: Option<Value>) -> Result<()> {
        if !self.is_enabled().await {
            tracing::debug!("Analytics disabled, skipping event '{}'", event);
            return Ok(());
        }

        let payload = self.build_payload(event, properties);
        self.sink.capture(payload).await?;
        tracing::debug!("📈 Sent analytics event '{}'", event);
        Ok(())
    }

    pub async fn check_recording_health(&self) -> Result<HealthStatus> {
        let health_url = format!("{}/health", self.local_api_base_url);
        let response = self.client.get(&health_url).send().await?;

        if !response.status().is_success() {
            return Ok(HealthStatus::failed(format!(
                "Health check failed with status: {}",
                response.status()
            )));
        }

        let health: Value = response.json().await?;
        let status_of = |field: &str| health[field].as_str().unwrap_or("unknown").to_string();

        Ok(HealthStatus::from_statuses(
            &status_of("frame_status"),
            &status_of("audio_status"),
            &status_of("ui_status"),
        ))
    }

    pub async fn track_enabled_pipes(&self) -> Result<()> {
        let pipes_url = format!("{}/pipes/list", self.local_api_base_url);
        let response: PipeListResponse = self
            .client
            .get(&pipes_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let enabled_pipes: Vec<String> = response
            .data
            .into_iter()
            .filter(|pipe| pipe.enabled)
            .map(|pipe| pipe.id)
            .collect();

        let properties = json!({
            "enabled_pipe_count": enabled_pipes.len(),
            "enabled_pipes": enabled_pipes,
        });

        self.send_event("enabled_pipes_hourly", Some(properties)).await
    }

    /// 定時任務的單次執行：送出健康狀態，再統計已啟用的 pipe
    pub async fn heartbeat(&self) {
        if !self.is_enabled().await {
            return;
        }

        let health = match self.check_recording_health().await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!("❌ Failed to check recording health: {}", e);
                HealthStatus::failed(e.to_string())
            }
        };

        match serde_json::to_value(&health) {
            Ok(properties) => {
                if let Err(e) = self.send_event("app_still_running", Some(properties)).await {
                    tracing::error!("❌ Failed to send periodic analytics event: {}", e);
                }
            }
            Err(e) => tracing::error!("❌ Failed to serialize health status: {}", e),
        }

        if let Err(e) = self.track_enabled_pipes().await {
            tracing::warn!("⚠️ Failed to track enabled pipes: {}, is the local API up?", e);
        }
    }

    pub async fn start_periodic_event(&self) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            self.heartbeat().await;
        }
    }
}

pub fn is_dev_mode() -> bool {
    cfg!(debug_assertions) || env_requests_dev_mode(std::env::var(DEV_MODE_ENV_VAR).ok().as_deref())
}

fn env_requests_dev_mode(value: Option<&str>) -> bool {
    value == Some("true")
}

/// 建立分析管理器並在背景送出 `app_started` 與定時事件
///
/// 必須在 tokio runtime 內呼叫。開發模式下只建立管理器，不啟動背景任務。
pub fn start_analytics(config: &AnalyticsConfig) -> Result<Arc<AnalyticsManager<PostHogSink>>> {
    config.validate()?;

    let client = Client::new();
    let sink = PostHogSink::new(client.clone(), &config.api_host);
    let manager = Arc::new(AnalyticsManager::new(config, sink, client));

    spawn_analytics(&manager, is_dev_mode());
    Ok(manager)
}

/// 啟動 `app_started` 與定時事件兩個背景任務，開發模式下不啟動任何任務
pub fn spawn_analytics<S>(manager: &Arc<AnalyticsManager<S>>, dev_mode: bool) -> Vec<JoinHandle<()>>
where
    S: EventSink + 'static,
{
    if dev_mode {
        tracing::info!("Skipping analytics in development mode");
        return Vec::new();
    }

    let started = tokio::spawn({
        let manager = Arc::clone(manager);
        async move {
            if let Err(e) = manager.send_event("app_started", None).await {
                tracing::error!("❌ Failed to send initial analytics event: {}", e);
            }
        }
    });

    let periodic = tokio::spawn({
        let manager = Arc::clone(manager);
        async move {
            manager.start_periodic_event().await;
        }
    });

    tracing::info!(
        "📈 Analytics started, heartbeat every {:?}",
        manager.interval()
    );
    vec![started, periodic]
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use httpmock::prelude::*;

    #[derive(Clone, Default)]
    struct RecordingSink {
        events: Arc<Mutex<Vec<Value>>>,
    }

    impl RecordingSink {
        async fn events(&self) -> Vec<Value> {
            self.events.lock().await.clone()
        }
    }

    #[async_trait]
    impl EventSink for RecordingSink {
        async fn capture(&self, payload: Value) -> Result<()> {
            self.events.lock().await.push(payload);
            Ok(())
        }
    }

    fn test_config(local_api_base_url: &str) -> AnalyticsConfig {
        AnalyticsConfig {
            enabled: true,
            api_key: "phc_test".to_string(),
            distinct_id: "user-42".to_string(),
            api_host: "http://127.0.0.1:9".to_string(),
            local_api_base_url: local_api_base_url.to_string(),
            interval_hours: 1,
        }
    }

    async fn enabled_manager(
        local_api_base_url: &str,
    ) -> (AnalyticsManager<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        let manager =
            AnalyticsManager::new(&test_config(local_api_base_url), sink.clone(), Client::new());
        manager.set_enabled(true).await;
        (manager, sink)
    }

    #[test]
    fn test_build_payload_merges_properties() {
        let manager = AnalyticsManager::new(
            &test_config("http://localhost:3030"),
            RecordingSink::default(),
            Client::new(),
        );

        let payload = manager.build_payload(
            "app_started",
            Some(json!({"os_name": "override", "custom": 1})),
        );

        assert_eq!(payload["api_key"], "phc_test");
        assert_eq!(payload["event"], "app_started");
        assert!(payload["timestamp"].as_str().is_some());
        assert_eq!(payload["properties"]["distinct_id"], "user-42");
        assert_eq!(payload["properties"]["$lib"], "rust-reqwest");
        assert_eq!(payload["properties"]["os_name"], "override");
        assert_eq!(payload["properties"]["custom"], 1);
        assert!(payload["properties"]["cpu_count"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_disabled_manager_sends_nothing() {
        let sink = RecordingSink::default();
        let manager =
            AnalyticsManager::new(&test_config("http://localhost:3030"), sink.clone(), Client::new());
        manager.set_enabled(false).await;

        manager.send_event("app_started", None).await.unwrap();
        manager.heartbeat().await;

        assert!(sink.events().await.is_empty());
    }

    #[tokio::test]
    async fn test_check_recording_health() {
        let server = MockServer::start();
        let health_mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).json_body(json!({
                "frame_status": "ok",
                "audio_status": "disabled",
                "ui_status": "ok"
            }));
        });

        let (manager, _) = enabled_manager(&server.base_url()).await;
        let status = manager.check_recording_health().await.unwrap();

        health_mock.assert();
        assert!(status.is_healthy);
        assert_eq!(status.audio_status, "disabled");
    }

    #[tokio::test]
    async fn test_check_recording_health_missing_fields_unhealthy() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).json_body(json!({"frame_status": "ok"}));
        });

        let (manager, _) = enabled_manager(&server.base_url()).await;
        let status = manager.check_recording_health().await.unwrap();

        assert!(!status.is_healthy);
        assert_eq!(status.audio_status, "unknown");
    }

    #[tokio::test]
    async fn test_check_recording_health_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(503);
        });

        let (manager, _) = enabled_manager(&server.base_url()).await;
        let status = manager.check_recording_health().await.unwrap();

        assert!(!status.is_healthy);
        assert_eq!(status.frame_status, "error");
        assert!(status.error.unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_track_enabled_pipes() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pipes/list");
            then.status(200).json_body(json!({
                "data": [
                    {"id": "obsidian", "enabled": true},
                    {"id": "search", "enabled": false},
                    {"id": "meeting", "enabled": true}
                ],
                "success": true
            }));
        });

        let (manager, sink) = enabled_manager(&server.base_url()).await;
        manager.track_enabled_pipes().await.unwrap();

        let events = sink.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "enabled_pipes_hourly");
        assert_eq!(events[0]["properties"]["enabled_pipe_count"], 2);
        assert_eq!(
            events[0]["properties"]["enabled_pipes"],
            json!(["obsidian", "meeting"])
        );
    }

    #[tokio::test]
    async fn test_heartbeat_survives_local_api_failures() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(GET).path("/pipes/list");
            then.status(500);
        });

        let (manager, sink) = enabled_manager(&server.base_url()).await;
        manager.heartbeat().await;

        let events = sink.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "app_still_running");
        assert_eq!(events[0]["properties"]["is_healthy"], false);
        assert_eq!(events[0]["properties"]["ui_status"], "error");
    }

    #[test]
    fn test_env_requests_dev_mode() {
        assert!(env_requests_dev_mode(Some("true")));
        assert!(!env_requests_dev_mode(Some("false")));
        assert!(!env_requests_dev_mode(Some("TRUE ")));
        assert!(!env_requests_dev_mode(None));
    }

    #[test]
    fn test_is_dev_mode_with_env_var() {
        std::env::set_var(DEV_MODE_ENV_VAR, "true");
        assert!(is_dev_mode());
        std::env::remove_var(DEV_MODE_ENV_VAR);

        assert_eq!(is_dev_mode(), cfg!(debug_assertions));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut config = test_config("http://localhost:3030");
        config.interval_hours = 0;
        let manager = AnalyticsManager::new(&config, RecordingSink::default(), Client::new());
        assert_eq!(manager.interval(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_spawn_analytics_dev_mode_spawns_nothing() {
        let (manager, sink) = enabled_manager("http://127.0.0.1:9").await;
        let manager = Arc::new(manager);

        let handles = spawn_analytics(&manager, true);

        assert!(handles.is_empty());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(sink.events().await.is_empty());
    }

    #[tokio::test]
    async fn test_spawn_analytics_sends_app_started_and_heartbeat() {
        let server = MockServer::start();
        let started_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/capture/")
                .json_body_partial(r#"{"api_key": "phc_test", "event": "app_started"}"#);
            then.status(200);
        });
        let running_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/capture/")
                .json_body_partial(r#"{"event": "app_still_running"}"#);
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).json_body(json!({
                "frame_status": "ok",
                "audio_status": "ok",
                "ui_status": "ok"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/pipes/list");
            then.status(200).json_body(json!({"data": [], "success": true}));
        });

        let mut config = test_config(&server.base_url());
        config.api_host = server.base_url();
        let client = Client::new();
        let sink = PostHogSink::new(client.clone(), &config.api_host);
        let manager = Arc::new(AnalyticsManager::new(&config, sink, client));
        manager.set_enabled(true).await;

        let handles = spawn_analytics(&manager, false);
        assert_eq!(handles.len(), 2);

        // interval 的第一次 tick 立即觸發，所以兩種事件都會很快送出
        for _ in 0..100 {
            if started_mock.hits() >= 1 && running_mock.hits() >= 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        for handle in &handles {
            handle.abort();
        }

        started_mock.assert();
        running_mock.assert();
    }
}
