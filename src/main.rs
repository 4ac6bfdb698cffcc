use anyhow::Result;
use quizterm::ui::terminal_guard::install_panic_hook;
use quizterm::{util, App, Config};
use std::fs::{self, OpenOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to file (~/.quizterm/logs/quizterm.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    install_panic_hook();

    let config = Config::load();
    tracing::info!(base_url = %config.base_url, "Starting quizterm");

    let mut app = App::new(&config)?;
    app.run().await
}
