use clap::Parser;
use helperkit::app::commands::run_command;
use helperkit::utils::error::ErrorSeverity;
use helperkit::utils::{logger, validation::Validate};
use helperkit::{CliConfig, ToolConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 載入 TOML 配置（可選）
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match ToolConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => ToolConfig::default(),
    };

    // 驗證 [general]；[analytics] 只在 ping 時驗證
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut stdin = std::io::stdin();
    match run_command(&cli.command, &config, &mut stdin).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
