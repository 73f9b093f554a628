mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "embed-messages", version, about = "Embed Messages — modmail embed formatting")]
struct App {
    /// Host config file (JSON or TOML). Defaults to $EMBED_MESSAGES_CONFIG
    /// or the per-user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show effective settings and any rejected overrides
    Settings,
    /// List directions and whether each formatter would be registered
    Directions,
    /// Format one thread message and print the embed payload
    Render {
        /// Direction, e.g. staff-reply-thread
        #[arg(long)]
        direction: String,
        /// Thread message JSON file ("-" for stdin)
        #[arg(long)]
        message: PathBuf,
        /// JSON array of cached users: [{"id": "...", "avatar_url": "..."}]
        #[arg(long)]
        users: Option<PathBuf>,
        /// Bot avatar URL
        #[arg(long, default_value = "")]
        bot_avatar: String,
    },
}

fn main() {
    let app = App::parse();

    match &app.log_file {
        Some(path) => embed_messages::tracing_init::init_file_tracing(path),
        None => embed_messages::tracing_init::init_tracing(),
    }

    let config = app.config.as_deref();
    let result = match app.command {
        Commands::Settings => cli::settings::run_show(config),
        Commands::Directions => cli::settings::run_directions(config),
        Commands::Render { direction, message, users, bot_avatar } => {
            cli::render::run(config, &direction, &message, users.as_deref(), &bot_avatar)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
