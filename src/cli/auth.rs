//! `quizlet auth`

use super::context::CliContext;
use anyhow::Result;

/// Make sure both access tokens exist and report where they are cached
pub async fn run_auth(ctx: &CliContext) -> Result<()> {
    let (_, cache_path) = ctx.access_tokens().await?;
    println!("{}", cache_path.display());
    Ok(())
}
