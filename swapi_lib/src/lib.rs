//! Library layer for swapi: configuration, category-name validation, and
//! saving category bodies to disk.
//!
//! Wraps the `swapi_api` crate, which does the HTTP work.

pub mod config;
pub mod error;
pub mod save;
pub mod validation;

pub use swapi_api;
pub use swapi_api::{ApiRequester, BaseUrl, CategoryRequester, CategorySet};

pub use config::{Config, ConfigError};
pub use error::SaveError;
pub use save::{save_categories, save_category, FailurePolicy, SaveOptions, SaveReport};
