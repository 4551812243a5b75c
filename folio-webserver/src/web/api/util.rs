use super::*;

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

/// Splits a comma separated list, ignoring empty entries.
pub fn split_ids(ids: &str) -> Vec<&str> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect()
}
