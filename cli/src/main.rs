//! `todo-list` — interactive client for the todo-list backend.
//!
//! Usage:
//!   todo-list [--api-url <url>] [--workers <n>] [--timeout-secs <n>]
//!
//! Reads one command per line from stdin and redraws the list after each.
//! Logs go to stderr; set `RUST_LOG=debug` for request-level detail.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use todo_list_cli::{App, Command, Flow, UreqTransport};
use todo_list_core::config::{
    DEFAULT_BASE_URL, DEFAULT_BULK_DELETE_WORKERS, DEFAULT_REQUEST_TIMEOUT,
};
use todo_list_core::{ClientConfig, TodoController};
use tracing::info;

/// Todo-list client.
#[derive(Parser, Debug)]
#[command(name = "todo-list", about = "Interactive todo-list client")]
struct Cli {
    /// Base URL of the backend.
    #[arg(long = "api-url", env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Maximum concurrent requests during a bulk delete.
    #[arg(
        long = "workers",
        env = "TODO_BULK_WORKERS",
        default_value_t = DEFAULT_BULK_DELETE_WORKERS
    )]
    workers: usize,

    /// Per-request timeout in seconds; 0 disables it.
    #[arg(
        long = "timeout-secs",
        env = "TODO_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs()
    )]
    timeout_secs: u64,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        ClientConfig::default()
            .with_base_url(self.api_url.clone())
            .with_bulk_delete_workers(self.workers)
            .with_request_timeout(timeout)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.client_config();
    info!(base_url = %config.base_url, workers = config.bulk_delete_workers, "starting");

    let transport = UreqTransport::new(config.request_timeout);
    let mut app = App::new(TodoController::new(&config, transport));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}> ", app.start())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let text = match Command::parse(&line) {
            Ok(command) => match app.handle(command) {
                Flow::Continue(text) => text,
                Flow::Quit => break,
            },
            Err(todo_list_cli::ParseError::Empty) => app.render(),
            Err(e) => format!("{e}\n"),
        };
        write!(out, "{text}> ")?;
        out.flush()?;
    }
    info!("bye");
    Ok(())
}
