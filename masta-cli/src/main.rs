use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use masta::MastaClient;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod config;

use commands::{delete, follow, login, notifications, search, timeline, toot, upload};
use config::ConfigToml;

#[derive(Parser, Debug)]
#[command(version, about = "Command-line client for Mastodon and Pleroma servers.")]
struct Cli {
    /// Config file [default: <config dir>/plem/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum tracing verbosity to enable: error|warn|info|debug|trace
    #[arg(long, global = true, default_value_t = LevelFilter::WARN, value_parser = clap::value_parser!(LevelFilter))]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with a password and save the credentials
    Login(login::LoginArgs),
    /// Post a status
    Toot(toot::TootArgs),
    /// Delete statuses
    Delete(delete::DeleteArgs),
    /// Follow accounts
    Follow(follow::FollowArgs),
    /// Show a timeline
    Timeline(timeline::TimelineArgs),
    /// Show notifications
    Notifications(notifications::NotificationsArgs),
    /// Search accounts, hashtags and statuses
    Search(search::SearchArgs),
    /// Upload a media file
    Upload(upload::UploadArgs),
    /// List the instances this server federates with
    InstancePeers,
    /// Show the logged-in account
    Account,
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        config,
        log_level,
        command,
    } = Cli::parse();
    init_tracing(log_level);

    let config_path = match config {
        Some(path) => path,
        None => ConfigToml::default_path()?,
    };
    debug!(path = %config_path.display(), "using config file");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let client = || load_client(&config_path);
    match command {
        Command::Login(args) => login::run(args, &config_path, &mut out).await?,
        Command::Toot(args) => toot::run(&client()?, args, &mut out).await?,
        Command::Delete(args) => delete::run(&client()?, args, &mut out).await?,
        Command::Follow(args) => follow::run(&client()?, args, &mut out).await?,
        Command::Timeline(args) => timeline::run(&client()?, args, &mut out).await?,
        Command::Notifications(args) => notifications::run(&client()?, args, &mut out).await?,
        Command::Search(args) => search::run(&client()?, args, &mut out).await?,
        Command::Upload(args) => upload::run(&client()?, args, &mut out).await?,
        Command::InstancePeers => commands::instance_peers::run(&client()?, &mut out).await?,
        Command::Account => commands::account::run(&client()?, &mut out).await?,
    }
    out.flush()?;
    Ok(())
}

fn load_client(path: &Path) -> Result<MastaClient> {
    let config = ConfigToml::from_file(path)
        .with_context(|| format!("reading {}; run `plem login` first", path.display()))?;
    if config.access_token.is_empty() {
        bail!("{} has no access token; run `plem login`", path.display());
    }
    Ok(config.client_builder().build()?)
}

fn init_tracing(level: LevelFilter) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
