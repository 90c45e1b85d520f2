use std::io::Write;

use anyhow::Result;
use clap::Args;
use swapi_lib::{validation, CategoryRequester};

#[derive(Args)]
pub struct FetchArgs {
    /// Category name as listed by `swapi categories` (e.g. people, planets)
    pub name: String,
}

/// Writes the category body to stdout exactly as received.
pub async fn run(args: &FetchArgs, requester: &CategoryRequester) -> Result<()> {
    let name = validation::validate_category_name(&args.name)?;
    let body = requester.fetch_category(name).await?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
