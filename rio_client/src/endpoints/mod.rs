//! Endpoint methods, one `impl Client` block per resource family.

mod brokers;
mod client_data;
mod devices;
mod jobs;
mod lifecycles;
mod logsets;
mod rio_groups;
mod system;
mod users;

/// `Some("true")` for a set flag, nothing otherwise.
fn flag(name: &str, set: bool) -> (String, Option<String>) {
    (name.to_string(), set.then(|| "true".to_string()))
}
