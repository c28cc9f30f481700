use std::process::ExitCode;
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;
use diagnostics_cell::run_suites;
use shared_config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Loading Env Vars
    dotenv().ok();

    // Logs go to stderr so the report on stdout stays readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!("Starting clinic smoke checks");

    let config = AppConfig::from_env();
    if !config.is_configured() {
        eprintln!("❌ Set SUPABASE_URL and SUPABASE_ANON_KEY (or their EXPO_PUBLIC_ variants)");
        return ExitCode::from(cli::EXIT_CONFIG);
    }

    let suites = match cli.build_suites(&config, Local::now().date_naive()) {
        Ok(suites) => suites,
        Err(e) => {
            error!("Invalid arguments: {}", e);
            eprintln!("❌ {}", e);
            return ExitCode::from(cli::EXIT_CONFIG);
        }
    };

    println!("🚀 Starting backend smoke checks");
    println!("📍 Base URL: {}", config.supabase_url);

    let report = run_suites(&suites).await;
    report.summary();

    ExitCode::from(cli.exit_status(&report))
}
