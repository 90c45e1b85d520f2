use anyhow::Result;
use clap::Args;
use swapi_lib::CategoryRequester;

use crate::output::{print_categories, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {}

pub async fn run(
    _args: &CategoriesArgs,
    requester: &CategoryRequester,
    format: &OutputFormat,
) -> Result<()> {
    let categories = requester.list_categories().await?;
    print_categories(&categories, format);
    Ok(())
}
