//! Constants used across the bpctl workspace.

/// The filename for bpctl's configuration.
pub const CONFIG_FILE: &str = "bpctl.toml";

/// Platform API endpoint used unless configured otherwise.
pub const DEFAULT_API_URL: &str = "https://api.heroku.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables consulted by the CLI.
pub const ENV_API_KEY: &str = "HEROKU_API_KEY";
pub const ENV_APP: &str = "HEROKU_APP";
pub const ENV_API_URL: &str = "BPCTL_API_URL";
