use serde::{Deserialize, Serialize};
use std::fmt;

/// 以 `std::env::consts::OS` 判斷的作業系統
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Unsupported(String),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn from_os_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Unsupported(name) => name,
        }
    }

    pub fn is_macos(&self) -> bool {
        matches!(self, Platform::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 本機 API `/health` 的摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub is_healthy: bool,
    pub frame_status: String,
    pub audio_status: String,
    pub ui_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn from_statuses(frame_status: &str, audio_status: &str, ui_status: &str) -> Self {
        let usable = |status: &str| status == "ok" || status == "disabled";

        Self {
            is_healthy: usable(frame_status) && usable(audio_status) && usable(ui_status),
            frame_status: frame_status.to_string(),
            audio_status: audio_status.to_string(),
            ui_status: ui_status.to_string(),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            is_healthy: false,
            frame_status: "error".to_string(),
            audio_status: "error".to_string(),
            ui_status: "error".to_string(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipeInfo {
    pub id: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipeListResponse {
    pub data: Vec<PipeInfo>,
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_os_name() {
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("Windows"), Platform::Windows);
        assert_eq!(Platform::from_os_name("linux"), Platform::Linux);
        assert_eq!(
            Platform::from_os_name("freebsd"),
            Platform::Unsupported("freebsd".to_string())
        );
        assert_eq!(Platform::MacOs.to_string(), "macos");
    }

    #[test]
    fn test_health_status_rules() {
        assert!(HealthStatus::from_statuses("ok", "disabled", "ok").is_healthy);
        assert!(!HealthStatus::from_statuses("ok", "stale", "ok").is_healthy);
        assert!(!HealthStatus::from_statuses("unknown", "ok", "ok").is_healthy);

        let failed = HealthStatus::failed("connection refused");
        assert!(!failed.is_healthy);
        assert_eq!(failed.ui_status, "error");
        assert_eq!(failed.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_health_status_serialization_skips_empty_error() {
        let json = serde_json::to_value(HealthStatus::from_statuses("ok", "ok", "ok")).unwrap();
        assert_eq!(json["is_healthy"], true);
        assert!(json.get("error").is_none());
    }
}
