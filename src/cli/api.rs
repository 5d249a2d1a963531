//! Set, term and user subcommands
//!
//! Each subcommand maps to one API call and prints the raw response body.

use super::context::CliContext;
use crate::api::{NewSet, QuizletClient, Term};
use anyhow::Result;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum SetCommand {
    /// Create a set (at least two terms)
    Create {
        #[arg(long)]
        title: String,

        /// Term and definition, repeatable
        #[arg(long = "term", value_name = "TERM=DEFINITION", required = true)]
        terms: Vec<Term>,

        #[arg(long, default_value = "en")]
        lang_terms: String,

        #[arg(long, default_value = "en")]
        lang_definitions: String,
    },
    /// List the terms of a set
    Terms { set_id: u64 },
    /// Show a set with all its details
    Show { set_id: u64 },
    /// Replace title and terms of a set
    Edit {
        set_id: u64,

        #[arg(long)]
        title: String,

        /// Term and definition, repeatable; replaces all existing terms
        #[arg(long = "term", value_name = "TERM=DEFINITION")]
        terms: Vec<Term>,
    },
    /// Delete a set
    Delete { set_id: u64 },
}

#[derive(Debug, Subcommand)]
pub enum TermCommand {
    /// Add a term to a set
    Add {
        set_id: u64,
        #[arg(long)]
        term: String,
        #[arg(long)]
        definition: String,
    },
    /// Edit a single term
    Edit {
        set_id: u64,
        term_id: u64,
        #[arg(long)]
        term: String,
        #[arg(long)]
        definition: String,
    },
    /// Delete a single term
    Delete { set_id: u64, term_id: u64 },
}

pub async fn run_set_command(ctx: &CliContext, command: SetCommand) -> Result<()> {
    let client = ctx.client().await?;
    let body = set_command(&client, command).await?;
    println!("{}", body);
    Ok(())
}

pub async fn run_term_command(ctx: &CliContext, command: TermCommand) -> Result<()> {
    let client = ctx.client().await?;
    let body = term_command(&client, command).await?;
    println!("{}", body);
    Ok(())
}

/// Show a user, defaulting to the account in the credentials file
pub async fn run_user_command(ctx: &CliContext, username: Option<String>) -> Result<()> {
    let client = ctx.client().await?;
    let username = username.unwrap_or_else(|| ctx.credentials.username.clone());
    println!("{}", client.user_details(&username).await?);
    Ok(())
}

async fn set_command(client: &QuizletClient, command: SetCommand) -> crate::Result<String> {
    match command {
        SetCommand::Create {
            title,
            terms,
            lang_terms,
            lang_definitions,
        } => {
            let set = NewSet::new(title, terms).with_languages(lang_terms, lang_definitions);
            client.create_set(&set).await
        }
        SetCommand::Terms { set_id } => client.set_terms(set_id).await,
        SetCommand::Show { set_id } => client.set_details(set_id).await,
        SetCommand::Edit {
            set_id,
            title,
            terms,
        } => client.edit_set(set_id, &title, &terms).await,
        SetCommand::Delete { set_id } => client.delete_set(set_id).await,
    }
}

async fn term_command(client: &QuizletClient, command: TermCommand) -> crate::Result<String> {
    match command {
        TermCommand::Add {
            set_id,
            term,
            definition,
        } => client.add_term(set_id, &Term::new(term, definition)).await,
        TermCommand::Edit {
            set_id,
            term_id,
            term,
            definition,
        } => {
            client
                .edit_term(set_id, term_id, &Term::new(term, definition))
                .await
        }
        TermCommand::Delete { set_id, term_id } => client.delete_term(set_id, term_id).await,
    }
}
