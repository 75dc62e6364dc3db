//! Human-facing output for each command.

use crate::buildpack::BuildpackList;

/// Release hint used when the config does not name one.
pub const DEFAULT_RELEASE_HINT: &str = "git push heroku master";

/// The edit that produced a list, as it reads in the success line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Set,
    Added,
    Removed,
    Cleared,
}

impl Verb {
    fn label(self) -> &'static str {
        match self {
            Self::Set => "Buildpack set",
            Self::Added => "Buildpack added",
            Self::Removed => "Buildpack removed",
            Self::Cleared => "Buildpack(s) cleared",
        }
    }
}

/// Rendered output. `lines` belong on stdout, `warnings` on stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
}

/// Renders the outcome of an edit.
///
/// `legacy_key` is only consulted when `urls` is empty.
pub fn edited(
    app: &str,
    verb: Verb,
    urls: &[String],
    legacy_key: Option<&str>,
    release_hint: &str,
) -> Report {
    let label = verb.label();
    let mut report = Report::default();

    match urls {
        [] => match legacy_key {
            Some(key) => {
                report.lines.push(format!("{label}."));
                report.warnings.push(format!(
                    "WARNING: The {key} config var is still set and will be used for the next release"
                ));
            }
            None => report.lines.push(format!(
                "{label}. Next release on {app} will detect buildpack normally."
            )),
        },
        [url] => {
            report
                .lines
                .push(format!("{label}. Next release on {app} will use {url}."));
            report.lines.push(format!(
                "Run `{release_hint}` to create a new release using this buildpack."
            ));
        }
        many => {
            report
                .lines
                .push(format!("{label}. Next release on {app} will use:"));
            report.lines.extend(enumerate(many));
            report.lines.push(format!(
                "Run `{release_hint}` to create a new release using these buildpacks."
            ));
        }
    }

    report
}

/// Renders the current list for `show`.
pub fn listing(app: &str, list: &BuildpackList) -> Report {
    let urls = list.urls();
    let mut report = Report::default();

    match urls.as_slice() {
        [] => report.lines.push(format!("{app} has no Buildpack URL set.")),
        [url] => {
            report.lines.push(format!("=== {app} Buildpack URL"));
            report.lines.push(url.clone());
        }
        many => {
            report.lines.push(format!("=== {app} Buildpack URLs"));
            report.lines.extend(enumerate(many));
        }
    }

    report
}

fn enumerate(urls: &[String]) -> impl Iterator<Item = String> + '_ {
    urls.iter()
        .enumerate()
        .map(|(i, url)| format!("  {}. {}", i + 1, url))
}
