use thiserror::Error;

use crate::editor::EditError;
use crate::store::RemoteError;

/// Coarse classification of a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    NotFound,
    OutOfRange,
    Remote,
}

/// Everything that can end a command.
///
/// Only `GuardUnavailable`, or a `Remote` error from the replace call itself,
/// can follow a write. Every other failure leaves the remote list untouched.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("No buildpacks were found. Next release on {app} will detect buildpack normally.")]
    NoBuildpacks { app: String },
    #[error(transparent)]
    Edit(EditError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("Buildpack changes were saved, but config vars could not be read: {0}")]
    GuardUnavailable(RemoteError),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::NoBuildpacks { .. } => ErrorKind::NotFound,
            Self::Edit(EditError::Empty | EditError::UrlNotFound { .. }) => ErrorKind::NotFound,
            Self::Edit(EditError::OutOfRange { .. }) => ErrorKind::OutOfRange,
            Self::Remote(_) | Self::GuardUnavailable(_) => ErrorKind::Remote,
        }
    }

    /// Lifts an editor failure, attaching the app where the message needs it.
    pub(crate) fn from_edit(err: EditError, app: &str) -> Self {
        match err {
            EditError::Empty => Self::NoBuildpacks {
                app: app.to_string(),
            },
            other => Self::Edit(other),
        }
    }
}
