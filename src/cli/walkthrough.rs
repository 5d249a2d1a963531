//! `quizlet walkthrough`
//!
//! Exercises every endpoint against a throwaway set: create it, read it,
//! add, edit and delete a term, look up the user, delete the set.

use super::context::CliContext;
use crate::api::{NewSet, QuizletClient, Term, new_set_id, new_term_id};
use anyhow::{Context, Result};
use tracing::info;

pub async fn run_walkthrough(ctx: &CliContext) -> Result<()> {
    let client = ctx.client().await?;
    walkthrough(&client, &ctx.credentials.username, |step, body| {
        println!("== {}\n{}", step, body);
    })
    .await
}

/// Run the sequence, handing each raw body to `report`
pub async fn walkthrough<F>(client: &QuizletClient, username: &str, mut report: F) -> Result<()>
where
    F: FnMut(&str, &str),
{
    let set = NewSet::new(
        "title",
        vec![
            Term::new("term1", "def1"),
            Term::new("term2", "def2"),
            Term::new("term3", "def3"),
        ],
    );
    let created = client.create_set(&set).await?;
    report("create set", &created);
    let set_id = new_set_id(&created).context("create set response carried no set_id")?;
    info!("Created set {}", set_id);

    report("set terms", &client.set_terms(set_id).await?);
    report("set details", &client.set_details(set_id).await?);

    let added = client
        .add_term(set_id, &Term::new("term4", "definition4"))
        .await?;
    report("add term", &added);
    let term_id = new_term_id(&added).context("add term response carried no id")?;

    report(
        "edit term",
        &client
            .edit_term(set_id, term_id, &Term::new("new_term", "new_definition"))
            .await?,
    );
    report("delete term", &client.delete_term(set_id, term_id).await?);
    report("user details", &client.user_details(username).await?);
    report("delete set", &client.delete_set(set_id).await?);

    Ok(())
}
