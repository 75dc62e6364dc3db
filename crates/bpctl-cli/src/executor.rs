use anyhow::Result;
use tracing::{debug, instrument};

use bpctl_core::{session, BuildpackCommand, BuildpackStore, ConfigVarSource, Operation, Report};

use crate::Cli;

/// Translates the parsed arguments into an edit.
///
/// Returns `None` for `show`. Runs before any remote call so that usage
/// errors never reach the platform.
pub fn operation_for(cli: &Cli, command: BuildpackCommand) -> Result<Option<Operation>> {
    if !command.is_mutating() {
        return Ok(None);
    }
    let op = Operation::from_args(command, cli.url.clone(), cli.index)?;
    debug!("resolved {} to {:?}", command, op);
    Ok(Some(op))
}

/// Runs one command cycle against `platform`.
#[instrument(skip(platform, release_hint))]
pub fn run<P>(
    platform: &P,
    app: &str,
    op: Option<&Operation>,
    release_hint: &str,
) -> Result<Report>
where
    P: BuildpackStore + ConfigVarSource,
{
    let report = match op {
        None => session::show(platform, app)?,
        Some(op) => session::apply(platform, platform, app, op, release_hint)?,
    };
    Ok(report)
}
