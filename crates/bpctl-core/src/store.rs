use std::collections::BTreeMap;

use thiserror::Error;

use crate::buildpack::BuildpackList;

/// Failures reported by the remote platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("Invalid credentials provided.")]
    Unauthorized,
    #[error("Couldn't find that {resource}.")]
    NotFound { resource: String },
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("unable to reach the platform API: {0}")]
    Transport(String),
    #[error("unexpected response from the platform API: {0}")]
    Decode(String),
}

/// Whole-list access to an app's buildpacks.
///
/// There is no partial update: `replace` always receives the complete list,
/// and an empty slice clears the app.
pub trait BuildpackStore {
    /// Fetches the current list. Ordinals are authoritative for this call only.
    fn fetch(&self, app: &str) -> Result<BuildpackList, RemoteError>;
    /// Makes `urls` the app's complete buildpack list.
    fn replace(&self, app: &str, urls: &[String]) -> Result<(), RemoteError>;
}

/// Read access to an app's config vars.
pub trait ConfigVarSource {
    fn config_vars(&self, app: &str) -> Result<BTreeMap<String, String>, RemoteError>;
}
