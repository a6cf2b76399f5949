/// User agent sent when the configuration does not override it.
pub(crate) fn get_user_agent() -> String {
    format!("rio-client/{}", env!("CARGO_PKG_VERSION"))
}
