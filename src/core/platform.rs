use crate::domain::model::Platform;
use crate::utils::error::{HelperError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::PathBuf;

const WINDOWS_CLI_PATH: &str = r"%LOCALAPPDATA%\screenpipe\screenpipe.exe";
const MACOS_CLI_PATH: &str = "/Applications/screenpipe.app/Contents/MacOS/screenpipe";
const LINUX_CLI_PATH: &str = "/usr/local/bin/screenpipe";

static WINDOWS_ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%([A-Za-z0-9_]+)%").expect("env var pattern is valid"));

/// 取得各平台 CLI 執行檔的固定安裝位置（Windows 路徑保留 `%LOCALAPPDATA%` 未展開）
pub fn cli_path(platform: &Platform) -> Result<&'static str> {
    match platform {
        Platform::Windows => Ok(WINDOWS_CLI_PATH),
        Platform::MacOs => Ok(MACOS_CLI_PATH),
        Platform::Linux => Ok(LINUX_CLI_PATH),
        Platform::Unsupported(os) => Err(HelperError::UnsupportedPlatform { os: os.clone() }),
    }
}

/// 同 [`cli_path`]，並以環境變數展開 `%VAR%`；找不到的變數保留原樣
pub fn resolve_cli_path(platform: &Platform) -> Result<PathBuf> {
    let raw = cli_path(platform)?;
    let expanded = expand_windows_env_vars(raw, |name| std::env::var(name).ok());
    tracing::debug!("Resolved CLI path for {}: {}", platform, expanded);
    Ok(PathBuf::from(expanded))
}

fn expand_windows_env_vars<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    WINDOWS_ENV_VAR
        .replace_all(input, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
