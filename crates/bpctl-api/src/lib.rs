//! Platform API implementation of the buildpack and config-var stores.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use bpctl_core::config::ApiConfig;
use bpctl_core::{BuildpackEntry, BuildpackList, BuildpackStore, ConfigVarSource, RemoteError};

/// Media type selecting version 3 of the platform API.
pub const ACCEPT_V3: &str = "application/vnd.heroku+json; version=3";

/// Connection settings for [`PlatformClient`].
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl From<&ApiConfig> for ApiSettings {
    fn from(cfg: &ApiConfig) -> Self {
        Self {
            base_url: cfg.base_url.clone(),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

/// Blocking client for the buildpack-installations and config-vars endpoints.
pub struct PlatformClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl PlatformClient {
    pub fn new(settings: ApiSettings, token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(settings.timeout)
            .user_agent(&format!("bpctl/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn app_url(&self, app: &str, resource: &str) -> String {
        format!("{}/apps/{}/{}", self.base_url, app, resource)
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        let request = self.agent.request(method, url).set("Accept", ACCEPT_V3);
        match &self.token {
            Some(token) => request.set("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }
}

impl BuildpackStore for PlatformClient {
    #[instrument(skip(self))]
    fn fetch(&self, app: &str) -> Result<BuildpackList, RemoteError> {
        let url = self.app_url(app, "buildpack-installations");
        debug!("GET {}", url);
        let records = self
            .request("GET", &url)
            .call()
            .map_err(|e| map_error(e, "app"))?
            .into_json::<Vec<InstallationRecord>>()
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(into_list(records))
    }

    #[instrument(skip(self))]
    fn replace(&self, app: &str, urls: &[String]) -> Result<(), RemoteError> {
        let url = self.app_url(app, "buildpack-installations");
        debug!("PUT {} ({} updates)", url, urls.len());
        self.request("PUT", &url)
            .send_json(UpdateRequest::new(urls))
            .map_err(|e| map_error(e, "app"))?;
        Ok(())
    }
}

impl ConfigVarSource for PlatformClient {
    #[instrument(skip(self))]
    fn config_vars(&self, app: &str) -> Result<BTreeMap<String, String>, RemoteError> {
        let url = self.app_url(app, "config-vars");
        debug!("GET {}", url);
        let vars = self
            .request("GET", &url)
            .call()
            .map_err(|e| map_error(e, "app"))?
            .into_json::<BTreeMap<String, Option<String>>>()
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(present_vars(vars))
    }
}

#[derive(Debug, Deserialize)]
struct InstallationRecord {
    buildpack: BuildpackRef,
    ordinal: usize,
}

#[derive(Debug, Deserialize)]
struct BuildpackRef {
    url: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    updates: Vec<Update<'a>>,
}

#[derive(Debug, Serialize)]
struct Update<'a> {
    buildpack: &'a str,
}

impl<'a> UpdateRequest<'a> {
    fn new(urls: &'a [String]) -> Self {
        Self {
            updates: urls
                .iter()
                .map(|url| Update {
                    buildpack: url.as_str(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn into_list(records: Vec<InstallationRecord>) -> BuildpackList {
    let entries = records
        .into_iter()
        .map(|record| {
            debug!(
                "installation {} -> {} ({:?})",
                record.ordinal, record.buildpack.url, record.buildpack.name
            );
            BuildpackEntry {
                url: record.buildpack.url,
                ordinal: record.ordinal,
            }
        })
        .collect();
    BuildpackList::from_entries(entries)
}

fn present_vars(vars: BTreeMap<String, Option<String>>) -> BTreeMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

fn map_error(err: ureq::Error, resource: &str) -> RemoteError {
    match err {
        ureq::Error::Status(401 | 403, _) => RemoteError::Unauthorized,
        ureq::Error::Status(404, _) => RemoteError::NotFound {
            resource: resource.to_string(),
        },
        ureq::Error::Status(status, response) => RemoteError::Status {
            status,
            message: error_message(status, response),
        },
        ureq::Error::Transport(transport) => RemoteError::Transport(transport.to_string()),
    }
}

/// Prefers the API's `message` field, then the status text, then the body.
fn error_message(status: u16, response: ureq::Response) -> String {
    let status_text = response.status_text().trim().to_string();
    let body = response.into_string().unwrap_or_default();

    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(e) => {
            debug!("undecodable error body for HTTP {}: {}", status, e);
            if !status_text.is_empty() {
                status_text
            } else {
                body.split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .chars()
                    .take(120)
                    .collect()
            }
        }
    }
}
