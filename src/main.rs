//! `quizlet` command-line client
//!
//! # Usage
//!
//! ```bash
//! quizlet auth
//! quizlet set create --title "Spanish" --term uno=one --term dos=two
//! quizlet set terms 415
//! quizlet term add 415 --term tres --definition three
//! quizlet user
//! quizlet --manual walkthrough
//! ```

use clap::{Parser, Subcommand};

use quizlet_api_client::cli::{
    CliContext, GlobalArgs,
    api::{SetCommand, TermCommand, run_set_command, run_term_command, run_user_command},
    auth::run_auth,
    walkthrough::run_walkthrough,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "quizlet")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Obtain read and write access tokens and cache them
    Auth,

    /// Create, read, edit and delete sets
    #[command(subcommand)]
    Set(SetCommand),

    /// Add, edit and delete single terms
    #[command(subcommand)]
    Term(TermCommand),

    /// Show a user's details (defaults to the account in the credentials file)
    User { username: Option<String> },

    /// Run every endpoint against a throwaway set
    Walkthrough,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::load(&cli.global)?;

    match cli.command {
        Commands::Auth => run_auth(&ctx).await,
        Commands::Set(command) => run_set_command(&ctx, command).await,
        Commands::Term(command) => run_term_command(&ctx, command).await,
        Commands::User { username } => run_user_command(&ctx, username).await,
        Commands::Walkthrough => run_walkthrough(&ctx).await,
    }
}
