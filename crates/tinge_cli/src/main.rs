//! CLI entry point for tinge.studio.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Load environment configuration: the nearest `.env` up from the working
/// directory (so `TINGE_*` overrides apply without exporting).
fn load_env_config() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    load_env_config();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
