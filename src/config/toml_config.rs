use crate::domain::model::Platform;
use crate::utils::error::{HelperError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_HOST: &str = "https://eu.i.posthog.com";
pub const DEFAULT_LOCAL_API_BASE_URL: &str = "http://localhost:3030";
pub const MAX_INTERVAL_HOURS: u64 = 168;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    pub analytics: Option<AnalyticsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// 覆寫偵測到的平台 (windows / macos / linux)
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub api_key: String,
    pub distinct_id: String,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default = "default_local_api_base_url")]
    pub local_api_base_url: String,
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_local_api_base_url() -> String {
    DEFAULT_LOCAL_API_BASE_URL.to_string()
}

fn default_interval_hours() -> u64 {
    1
}

impl AnalyticsConfig {
    /// heartbeat 間隔，限制在一秒到 [`MAX_INTERVAL_HOURS`] 之間，未驗證的設定也不會溢位
    pub fn interval(&self) -> Duration {
        let secs = self
            .interval_hours
            .saturating_mul(3600)
            .clamp(1, MAX_INTERVAL_HOURS * 3600);
        Duration::from_secs(secs)
    }
}

impl Validate for AnalyticsConfig {
    fn validate(&self) -> Result<()> {
        validate_url("analytics.api_host", &self.api_host)?;
        validate_url("analytics.local_api_base_url", &self.local_api_base_url)?;
        validate_range(
            "analytics.interval_hours",
            self.interval_hours,
            1,
            MAX_INTERVAL_HOURS,
        )?;

        if self.enabled {
            validate_non_empty_string("analytics.api_key", &self.api_key)?;
            validate_non_empty_string("analytics.distinct_id", &self.distinct_id)?;
        }

        Ok(())
    }
}

impl ToolConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HelperError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HelperError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${POSTHOG_API_KEY})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use once_cell::sync::Lazy;
        use regex::Regex;

        static ENV_VAR: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 設定檔指定的平台，沒有指定時使用目前的作業系統
    pub fn platform(&self) -> Platform {
        self.general
            .platform
            .as_deref()
            .map(Platform::from_os_name)
            .unwrap_or_else(Platform::current)
    }

    /// 取得分析設定，沒有 `[analytics]` 區段時回傳錯誤
    pub fn analytics(&self) -> Result<&AnalyticsConfig> {
        validate_required_field("analytics", &self.analytics)
    }
}

/// 只驗證 `[general]`；`[analytics]` 由實際使用它的地方 (`ping`、`start_analytics`) 驗證
impl Validate for ToolConfig {
    fn validate(&self) -> Result<()> {
        if let Some(platform) = &self.general.platform {
            validate_non_empty_string("general.platform", platform)?;
        }
        Ok(())
    }
}
