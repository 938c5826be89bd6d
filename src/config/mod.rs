pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "helperkit")]
#[command(about = "Text, JSON and platform helpers for desktop app tooling")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert snake_case / kebab-case text to camelCase
    Camel { text: String },

    /// Rewrite every key of a JSON document (stdin) to camelCase
    CamelKeys,

    /// Remove ANSI escape sequences (reads stdin when no text is given)
    StripAnsi { text: Option<String> },

    /// Convert HTML to Markdown-flavoured text
    Html {
        /// HTML input; reads stdin when omitted
        text: Option<String>,

        /// Drop images instead of rendering them as Markdown
        #[arg(long)]
        plain: bool,
    },

    /// Hash text to a stable #rrggbb color
    Color { text: String },

    /// Flatten a JSON object (stdin) into dotted keys
    Flatten {
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Rebuild a nested JSON object (stdin) from dotted keys
    Unflatten,

    /// Percent-encode text for use in a URI component
    Encode { text: String },

    /// Print the CLI executable location for a platform
    CliPath {
        /// windows, macos or linux; defaults to config, then the current OS
        #[arg(long)]
        platform: Option<String>,

        /// Expand %VAR% placeholders from the environment
        #[arg(long)]
        resolve: bool,
    },

    /// Format a keyboard shortcut such as "ctrl+shift+k" for display
    Shortcut {
        combo: String,

        #[arg(long)]
        platform: Option<String>,
    },

    /// Print a file's size in bytes
    FileSize { path: String },

    /// Send a single analytics event using the [analytics] config section
    Ping {
        #[arg(default_value = "app_started")]
        event: String,
    },
}
