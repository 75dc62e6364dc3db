//! One command cycle: fetch, edit, replace, report.

use tracing::{debug, info, instrument};

use crate::buildpack::{BuildpackList, DesiredList};
use crate::editor::{self, EditError, RemoveSelector};
use crate::error::CommandError;
use crate::guard;
use crate::index::{self, EditKind};
use crate::operation::Operation;
use crate::report::{self, Report};
use crate::store::{BuildpackStore, ConfigVarSource};

/// Fetches and renders the app's current buildpacks.
#[instrument(skip(store))]
pub fn show<S>(store: &S, app: &str) -> Result<Report, CommandError>
where
    S: BuildpackStore + ?Sized,
{
    let current = store.fetch(app)?;
    debug!("fetched {} buildpacks", current.len());
    Ok(report::listing(app, &current))
}

/// Runs `op` against the app's list and renders the result.
///
/// Validation failures return before `replace` is called. When the new
/// list is empty, `vars` is consulted for legacy overrides.
#[instrument(skip(store, vars, release_hint))]
pub fn apply<S, V>(
    store: &S,
    vars: &V,
    app: &str,
    op: &Operation,
    release_hint: &str,
) -> Result<Report, CommandError>
where
    S: BuildpackStore + ?Sized,
    V: ConfigVarSource + ?Sized,
{
    let desired = match op {
        Operation::Clear => editor::clear(),
        edit => {
            let current = store.fetch(app)?;
            debug!("fetched {} buildpacks", current.len());
            plan(&current, edit).map_err(|err| CommandError::from_edit(err, app))?
        }
    };

    info!("replacing buildpacks on {} with {} entries", app, desired.len());
    store.replace(app, &desired)?;

    let legacy_key = if desired.is_empty() {
        guard::check(vars, app).map_err(CommandError::GuardUnavailable)?
    } else {
        None
    };

    Ok(report::edited(
        app,
        op.verb(),
        &desired,
        legacy_key,
        release_hint,
    ))
}

/// Computes the full list `op` would submit for `current`.
pub fn plan(current: &BuildpackList, op: &Operation) -> Result<DesiredList, EditError> {
    match op {
        Operation::Set { index, url } => Ok(editor::set(
            current,
            index::resolve(EditKind::Set, *index),
            url,
        )),
        Operation::Add { index, url } => Ok(editor::add(
            current,
            index::resolve(EditKind::Add, *index),
            url,
        )),
        Operation::Remove { url: Some(url), .. } => {
            editor::remove(current, &RemoveSelector::Url(url.clone()))
        }
        Operation::Remove { index, url: None } => {
            let target = index::resolve(EditKind::Remove, *index);
            editor::remove(current, &RemoveSelector::Ordinal(target.ordinal(current.len())))
        }
        Operation::Clear => Ok(editor::clear()),
    }
}
