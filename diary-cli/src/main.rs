mod cli;
mod command_loop;
mod render;

use anyhow::{Context, Result};
use cli::Cli;
use command_loop::CommandLoop;
use diary_core::{Config, EntryStore};
use render::{ColorMode, RenderOptions, Renderer};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("diary: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let mut config = Config::load()?;
    if let Some(dir) = cli.dir {
        config = config.with_entries_dir(dir);
    }

    let color = cli
        .color
        .or_else(|| config.color.as_deref().and_then(ColorMode::from_config))
        .unwrap_or(ColorMode::Auto);
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: color.use_color(),
    }));

    let store = EntryStore::with_config(&config)
        .with_context(|| format!("creating diary directory {}", config.entries_dir.display()))?;
    tracing::info!(root = %store.root().display(), "diary opened");

    let stdin = io::stdin();
    let stdout = io::stdout();
    CommandLoop::new(&store, stdin.lock(), stdout.lock(), renderer).run()
}

/// Logs go to stderr so they never mix with the menu; quiet unless `RUST_LOG` asks otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
