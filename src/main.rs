use anyhow::Context;
use clap::Parser;
use clean_docs::utils::error::ErrorSeverity;
use clean_docs::utils::{logger, validation::Validate};
use clean_docs::{CliConfig, LocalFs, SweepEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 設定錯誤發生在日誌初始化之前，直接交給 anyhow 輸出
    config.validate().context("Invalid command line arguments")?;
    let file_config = config
        .load_file_config()
        .context("Failed to load config file")?;
    if let Some(file_config) = &file_config {
        file_config.validate().context("Invalid config file")?;
    }

    let (level, format) = match &file_config {
        Some(c) => (c.log_level(), c.log_format()),
        None => (None, logger::LogFormat::default()),
    };
    logger::init_cli_logger(config.verbose, level, format);

    tracing::info!("Starting clean-docs");
    tracing::debug!("CLI config: {:?}", config);

    let root = config
        .resolve_root(file_config.as_ref())
        .context("Failed to resolve docs root")?;

    let engine = SweepEngine::new(LocalFs::new());
    match engine.run(&root) {
        Ok(report) => {
            println!(
                "✅ Docs cleanup complete: {} deleted, {} renamed",
                report.deleted.len(),
                report.renamed.len()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Docs cleanup aborted: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
