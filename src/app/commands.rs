use crate::adapters::http::PostHogSink;
use crate::adapters::storage::LocalFileSystem;
use crate::config::toml_config::ToolConfig;
use crate::config::Command;
use crate::core::analytics::AnalyticsManager;
use crate::core::{ansi, casing, color, encode, file_size, flatten, html, platform, shortcut};
use crate::domain::model::Platform;
use crate::utils::error::{HelperError, Result};
use crate::utils::validation::Validate;
use serde_json::Value;
use std::io::Read;

/// 執行單一子命令並回傳要輸出到 stdout 的文字
pub async fn run_command(
    command: &Command,
    config: &ToolConfig,
    stdin: &mut dyn Read,
) -> Result<String> {
    tracing::debug!("Running command: {:?}", command);

    match command {
        Command::Camel { text } => Ok(casing::to_camel_case(text)),
        Command::CamelKeys => {
            let value = read_json(stdin)?;
            to_pretty_json(&casing::keys_to_camel_case(value))
        }
        Command::StripAnsi { text } => {
            let input = text_or_stdin(text, stdin)?;
            Ok(ansi::strip_ansi_codes(&input))
        }
        Command::Html { text, plain } => {
            let input = text_or_stdin(text, stdin)?;
            if *plain {
                Ok(html::html_to_text(&input))
            } else {
                Ok(html::html_to_markdown(&input))
            }
        }
        Command::Color { text } => Ok(color::string_to_color(text)),
        Command::Flatten { prefix } => match read_json(stdin)? {
            Value::Object(obj) => to_pretty_json(&Value::Object(flatten::flatten_object(&obj, prefix))),
            other => Err(not_an_object(&other)),
        },
        Command::Unflatten => match read_json(stdin)? {
            Value::Object(obj) => to_pretty_json(&flatten::unflatten_object(&obj)),
            other => Err(not_an_object(&other)),
        },
        Command::Encode { text } => Ok(encode::encode_uri_component(text)),
        Command::CliPath {
            platform: requested,
            resolve,
        } => {
            let target = pick_platform(requested.as_deref(), config);
            if *resolve {
                Ok(platform::resolve_cli_path(&target)?.display().to_string())
            } else {
                Ok(platform::cli_path(&target)?.to_string())
            }
        }
        Command::Shortcut {
            combo,
            platform: requested,
        } => {
            let target = pick_platform(requested.as_deref(), config);
            Ok(shortcut::parse_keyboard_shortcut(combo, &target))
        }
        Command::FileSize { path } => {
            let size = file_size::get_file_size(&LocalFileSystem::new(), path).await?;
            Ok(size.to_string())
        }
        Command::Ping { event } => ping(event, config).await,
    }
}

async fn ping(event: &str, config: &ToolConfig) -> Result<String> {
    let analytics = config.analytics()?;
    analytics.validate()?;

    if !analytics.enabled {
        tracing::info!("Analytics disabled in config, not sending '{}'", event);
        return Ok(format!("analytics disabled, '{}' not sent", event));
    }

    let client = reqwest::Client::new();
    let sink = PostHogSink::new(client.clone(), &analytics.api_host);
    let manager = AnalyticsManager::new(analytics, sink, client);
    // 明確要求送出時不受 debug build 預設停用影響
    manager.set_enabled(true).await;
    manager.send_event(event, None).await?;

    Ok(format!("sent '{}'", event))
}

fn pick_platform(requested: Option<&str>, config: &ToolConfig) -> Platform {
    requested
        .map(Platform::from_os_name)
        .unwrap_or_else(|| config.platform())
}

fn text_or_stdin(text: &Option<String>, stdin: &mut dyn Read) -> Result<String> {
    match text {
        Some(text) => Ok(text.clone()),
        None => {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn read_json(stdin: &mut dyn Read) -> Result<Value> {
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(serde_json::from_str(&buffer)?)
}

fn to_pretty_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn not_an_object(value: &Value) -> HelperError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    HelperError::InvalidInput {
        message: format!("expected a JSON object, got {}", kind),
    }
}
