//! Client for JSON REST APIs that expose their resource collections as the
//! keys of a root object, such as SWAPI.

mod base_url;
mod categories;
mod client;
mod errors;
pub mod types;
mod user_agent;
pub use self::base_url::BaseUrl;
pub use self::categories::CategoryRequester;
pub use self::client::{ApiRequester, ApiRequesterBuilder};
pub use self::errors::Error;
pub use self::types::{ApiResponse, CategorySet};
