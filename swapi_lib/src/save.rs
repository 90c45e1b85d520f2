//! Saves every category's raw body to `{out_dir}/{category}.txt`.
//!
//! Categories are fetched one at a time; each file is written before the
//! next request is sent.

use std::path::{Path, PathBuf};

use swapi_api::CategoryRequester;

use crate::config::DEFAULT_OUT_DIR;
use crate::error::SaveError;
use crate::validation::validate_category_name;

/// What to do when a single category cannot be fetched or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop and return the first error.
    #[default]
    Abort,
    /// Log the error, record it in the report, and continue.
    Skip,
}

#[derive(Debug, Clone)]
pub struct SaveOptions {
    pub out_dir: PathBuf,
    pub on_error: FailurePolicy,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            on_error: FailurePolicy::Abort,
        }
    }
}

impl SaveOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, on_error: FailurePolicy) -> Self {
        self.on_error = on_error;
        self
    }
}

/// Outcome of [`save_categories`].
#[derive(Debug)]
pub struct SaveReport {
    pub out_dir: PathBuf,
    /// Files written, in category order.
    pub saved: Vec<PathBuf>,
    /// Categories skipped under [`FailurePolicy::Skip`].
    pub failed: Vec<(String, SaveError)>,
}

impl SaveReport {
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// File name a category is stored under.
pub fn category_file_name(name: &str) -> String {
    format!("{}.txt", name)
}

/// Lists the categories, creates the output directory if needed, and writes
/// one file per category, overwriting existing files.
///
/// A listing failure always aborts. Per-category failures follow
/// `options.on_error`.
pub async fn save_categories(
    requester: &CategoryRequester,
    options: &SaveOptions,
) -> Result<SaveReport, SaveError> {
    let categories = requester.list_categories().await?;

    tokio::fs::create_dir_all(&options.out_dir)
        .await
        .map_err(|e| SaveError::io(&options.out_dir, e))?;

    let mut report = SaveReport {
        out_dir: options.out_dir.clone(),
        saved: Vec::with_capacity(categories.len()),
        failed: Vec::new(),
    };

    for name in &categories {
        match save_category(requester, &options.out_dir, name).await {
            Ok(path) => report.saved.push(path),
            Err(err) => match options.on_error {
                FailurePolicy::Abort => {
                    tracing::error!("Failed to save category {}: {}", name, err);
                    return Err(err);
                }
                FailurePolicy::Skip => {
                    tracing::warn!("Skipping category {}: {}", name, err);
                    report.failed.push((name.clone(), err));
                }
            },
        }
    }

    tracing::info!(
        "Saved {} files to {}",
        report.saved_count(),
        report.out_dir.display()
    );
    if !report.is_complete() {
        tracing::warn!("{} categories failed", report.failed.len());
    }
    Ok(report)
}

/// Fetches one category and writes it into `out_dir`, which must exist.
pub async fn save_category(
    requester: &CategoryRequester,
    out_dir: &Path,
    name: &str,
) -> Result<PathBuf, SaveError> {
    validate_category_name(name)?;
    let body = requester.fetch_category(name).await?;
    let path = out_dir.join(category_file_name(name));
    tokio::fs::write(&path, body)
        .await
        .map_err(|e| SaveError::io(&path, e))?;
    tracing::info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name() {
        assert_eq!(category_file_name("people"), "people.txt");
    }

    #[test]
    fn default_options() {
        let options = SaveOptions::default();
        assert_eq!(options.out_dir, PathBuf::from("data"));
        assert_eq!(options.on_error, FailurePolicy::Abort);
    }

    #[test]
    fn options_builder() {
        let options = SaveOptions::new("out").with_policy(FailurePolicy::Skip);
        assert_eq!(options.out_dir, PathBuf::from("out"));
        assert_eq!(options.on_error, FailurePolicy::Skip);
    }
}
