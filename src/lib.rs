pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{http::PostHogSink, storage::LocalFileSystem};
pub use config::toml_config::{AnalyticsConfig, ToolConfig};
pub use crate::core::analytics::{start_analytics, AnalyticsManager};
pub use crate::core::ansi::strip_ansi_codes;
pub use crate::core::casing::{keys_to_camel_case, to_camel_case};
pub use crate::core::color::string_to_color;
pub use crate::core::encode::encode_uri_component;
pub use crate::core::file_size::get_file_size;
pub use crate::core::flatten::{flatten_object, unflatten_object};
pub use crate::core::html::{html_to_markdown, html_to_text};
pub use crate::core::platform::{cli_path, resolve_cli_path};
pub use crate::core::shortcut::{parse_keyboard_shortcut, parse_keyboard_shortcut_for_current_platform};
pub use domain::model::Platform;
pub use utils::error::{HelperError, Result};
