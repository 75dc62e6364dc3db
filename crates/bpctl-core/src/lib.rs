//! Core logic for editing an app's buildpack list.
//!
//! This crate defines the buildpack data model, index resolution, the pure
//! list editor, report rendering, and the command cycle that ties them to a
//! remote store. Network access lives behind the traits in [`store`].

pub mod buildpack;
pub mod command;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod guard;
pub mod index;
pub mod operation;
pub mod report;
pub mod session;
pub mod store;

pub use buildpack::{BuildpackEntry, BuildpackList, DesiredList};
pub use command::{BuildpackCommand, CommandParseError};
pub use config::BpctlConfig;
pub use editor::{EditError, RemoveSelector};
pub use error::{CommandError, ErrorKind};
pub use index::{EditKind, Target};
pub use operation::Operation;
pub use report::{Report, Verb};
pub use store::{BuildpackStore, ConfigVarSource, RemoteError};
