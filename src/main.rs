use clap::Parser;
use course_catalog::domain::ports::ConfigProvider;
use course_catalog::utils::monitor::SystemMonitor;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{build_router, AppState, CatalogService, CliConfig, MongoStore, TomlConfig};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting course-catalog service");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置（--config 指定 TOML 檔案時優先）
    let mut monitor_enabled = cli.monitor;
    let mut monitor_interval = Duration::from_secs(60);
    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let toml_config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            };
            if let Err(e) = toml_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            monitor_enabled = monitor_enabled || toml_config.monitoring_enabled();
            monitor_interval = Duration::from_secs(toml_config.monitor_interval_secs());
            Box::new(toml_config)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            Box::new(cli.clone())
        }
    };

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    match run(config.as_ref(), monitor_enabled, monitor_interval).await {
        Ok(()) => {
            tracing::info!("✅ Server shut down cleanly");
        }
        Err(e) => {
            tracing::error!(
                "❌ Service failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                course_catalog::utils::error::ErrorSeverity::Low => 0,
                course_catalog::utils::error::ErrorSeverity::Medium => 2,
                course_catalog::utils::error::ErrorSeverity::High => 1,
                course_catalog::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(
    config: &dyn ConfigProvider,
    monitor_enabled: bool,
    monitor_interval: Duration,
) -> course_catalog::Result<()> {
    let store = MongoStore::connect(
        config.mongo_uri(),
        config.database_name(),
        config.collection_name(),
        Duration::from_secs(config.server_selection_timeout_secs()),
    )
    .await?;

    let catalog = CatalogService::new(Arc::new(store));
    let router = build_router(AppState { catalog });

    let monitor = Arc::new(SystemMonitor::new(monitor_enabled));
    monitor.log_stats("startup");
    let monitor_task = monitor.spawn_periodic(monitor_interval);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("🚀 Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    monitor_task.abort();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
