use tracing::debug;

use crate::command::BuildpackCommand;
use crate::error::CommandError;
use crate::report::Verb;

/// A requested edit, still in the operator's 1-based terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Set { index: Option<i64>, url: String },
    Add { index: Option<i64>, url: String },
    /// At most one of `index`/`url` is set; neither means the first entry.
    Remove { index: Option<i64>, url: Option<String> },
    Clear,
}

impl Operation {
    /// Builds the edit for `command` from its positional url and `--index`.
    ///
    /// # Errors
    /// `Usage` when set/add lack a url, when remove gets both a url and an
    /// index, or when `command` does not edit anything.
    pub fn from_args(
        command: BuildpackCommand,
        url: Option<String>,
        index: Option<i64>,
    ) -> Result<Self, CommandError> {
        match command {
            BuildpackCommand::Set => Ok(Self::Set {
                index,
                url: required_url(command, url)?,
            }),
            BuildpackCommand::Add => Ok(Self::Add {
                index,
                url: required_url(command, url)?,
            }),
            BuildpackCommand::Remove => {
                if url.is_some() && index.is_some() {
                    return Err(CommandError::Usage(
                        "Please choose either index or Buildpack URL, but not both, as arguments to this command!"
                            .to_string(),
                    ));
                }
                Ok(Self::Remove { index, url })
            }
            BuildpackCommand::Clear => {
                if url.is_some() || index.is_some() {
                    debug!("ignoring url/index arguments for {}", command);
                }
                Ok(Self::Clear)
            }
            BuildpackCommand::Show => Err(CommandError::Usage(format!(
                "{command} does not modify buildpacks"
            ))),
        }
    }

    pub fn verb(&self) -> Verb {
        match self {
            Self::Set { .. } => Verb::Set,
            Self::Add { .. } => Verb::Added,
            Self::Remove { .. } => Verb::Removed,
            Self::Clear => Verb::Cleared,
        }
    }
}

fn required_url(command: BuildpackCommand, url: Option<String>) -> Result<String, CommandError> {
    match url {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(CommandError::Usage(format!(
            "Usage: bpctl {command} BUILDPACK_URL. Must specify target buildpack URL."
        ))),
    }
}
