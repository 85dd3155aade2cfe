use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use trackferry::{cli, config, error, types::AuthSession};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Show the authenticated user's profile
    Profile,

    /// List the user's playlists
    Playlists,

    /// List the tracks of a playlist
    Tracks(TracksOptions),

    /// Add tracks to the transfer selection
    Select(SelectOptions),

    /// Show or clear the transfer selection
    Selection(SelectionOptions),

    /// Copy the selected tracks into a target playlist
    Transfer(TransferOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// ID of the playlist to list
    playlist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SelectOptions {
    /// Track URIs to add (or remove with --remove)
    #[clap(required = true)]
    uris: Vec<String>,

    /// Remove the given URIs from the selection instead of adding them
    #[clap(long)]
    remove: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SelectionOptions {
    /// Empty the selection
    #[clap(long)]
    clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TransferOptions {
    /// ID of the target playlist
    #[clap(long = "to")]
    to: String,

    /// Keep the selection after a successful transfer
    #[clap(long)]
    keep: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<AuthSession>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Profile => cli::profile().await,
        Command::Playlists => cli::list_playlists().await,
        Command::Tracks(opt) => cli::list_tracks(opt.playlist_id).await,
        Command::Select(opt) => {
            if opt.remove {
                cli::unselect(opt.uris).await
            } else {
                cli::select(opt.uris).await
            }
        }
        Command::Selection(opt) => {
            if opt.clear {
                cli::clear_selection().await
            } else {
                cli::show_selection().await
            }
        }
        Command::Transfer(opt) => cli::transfer(opt.to, opt.keep).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
