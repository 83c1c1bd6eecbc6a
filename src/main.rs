use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quotedeck::app::{AppContext, SourceChoice};
use quotedeck::cli::{commands, Cli, Commands};
use quotedeck::config::Config;

fn init_tracing(to_file: bool) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if to_file {
        // The TUI owns the terminal, so logs go next to the database instead.
        let dir = AppContext::default_data_dir()?;
        std::fs::create_dir_all(&dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("quotedeck.log"))?;
        registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Commands::Tui))?;

    let config = Config::load()?;
    let source = SourceChoice::resolve(cli.source_choice(), &config);
    let db_path = cli.db.clone().or_else(|| config.storage.path.clone());
    let ctx = AppContext::new(source, db_path)?;

    match cli.command {
        Commands::List { filter } => {
            commands::list_cards(&ctx, &filter).await?;
        }
        Commands::Authors => {
            commands::list_authors(&ctx).await?;
        }
        Commands::Favorite { id } => {
            commands::toggle_favorite(&ctx, id).await?;
        }
        Commands::Export { out, title, filter } => {
            commands::export_html(&ctx, &out, &title, &filter).await?;
        }
        Commands::Tui => {
            quotedeck::tui::run(&ctx, &config).await?;
        }
    }

    Ok(())
}
