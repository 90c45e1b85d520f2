use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use swapi_lib::{save_categories, CategoryRequester, Config, FailurePolicy, SaveOptions};

use crate::output::{print_save_report, OutputFormat};

#[derive(Args)]
pub struct SaveArgs {
    /// Directory to write `<category>.txt` files into (created if missing)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Skip categories that fail instead of stopping at the first failure
    #[arg(long)]
    pub keep_going: bool,
}

impl SaveArgs {
    fn options(&self, config: &Config) -> SaveOptions {
        let out_dir = self.out_dir.clone().unwrap_or_else(|| config.out_dir.clone());
        let policy = if self.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };
        SaveOptions::new(out_dir).with_policy(policy)
    }
}

pub async fn run(
    args: &SaveArgs,
    requester: &CategoryRequester,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let options = args.options(config);
    eprintln!(
        "Saving categories from {} into {}",
        requester.base_url(),
        options.out_dir.display()
    );

    let report = save_categories(requester, &options).await?;
    print_save_report(&report, format);

    if !report.is_complete() {
        bail!(
            "{} of {} categories failed",
            report.failed.len(),
            report.failed.len() + report.saved_count()
        );
    }
    Ok(())
}
