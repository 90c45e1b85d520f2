/// User agent sent when the caller does not configure one.
pub(crate) fn default_user_agent() -> &'static str {
    concat!("swapi/", env!("CARGO_PKG_VERSION"))
}
