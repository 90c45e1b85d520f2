mod response;
pub use self::response::ApiResponse;

/// Names of the top-level collections exposed by the API root.
///
/// Iterates alphabetically; only set semantics are guaranteed.
pub type CategorySet = std::collections::BTreeSet<String>;
