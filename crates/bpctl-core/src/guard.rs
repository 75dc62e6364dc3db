use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::store::{ConfigVarSource, RemoteError};

/// Legacy config vars that still pick the buildpack, highest priority first.
pub const LEGACY_OVERRIDE_KEYS: [&str; 2] = ["BUILDPACK_URL", "LANGUAGE_PACK_URL"];

/// Returns the first legacy key present in `vars`.
pub fn legacy_override(vars: &BTreeMap<String, String>) -> Option<&'static str> {
    LEGACY_OVERRIDE_KEYS
        .into_iter()
        .find(|key| vars.contains_key(*key))
}

/// Looks up whether a legacy config var will override an empty buildpack list.
#[instrument(skip(source))]
pub fn check<S>(source: &S, app: &str) -> Result<Option<&'static str>, RemoteError>
where
    S: ConfigVarSource + ?Sized,
{
    let vars = source.config_vars(app)?;
    let found = legacy_override(&vars);
    debug!("legacy buildpack override: {:?}", found);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(keys: &[&str]) -> BTreeMap<String, String> {
        keys.iter()
            .map(|k| (k.to_string(), "https://example.com/pack.tgz".to_string()))
            .collect()
    }

    #[test]
    fn no_legacy_keys() {
        assert_eq!(legacy_override(&vars(&["DATABASE_URL"])), None);
    }

    #[test]
    fn buildpack_url_wins_over_language_pack_url() {
        assert_eq!(
            legacy_override(&vars(&["LANGUAGE_PACK_URL", "BUILDPACK_URL"])),
            Some("BUILDPACK_URL")
        );
        assert_eq!(
            legacy_override(&vars(&["LANGUAGE_PACK_URL"])),
            Some("LANGUAGE_PACK_URL")
        );
    }

    struct FailingSource;

    impl ConfigVarSource for FailingSource {
        fn config_vars(&self, _app: &str) -> Result<BTreeMap<String, String>, RemoteError> {
            Err(RemoteError::Unauthorized)
        }
    }

    #[test]
    fn check_propagates_source_errors() {
        let err = check(&FailingSource, "example").unwrap_err();
        assert_eq!(err, RemoteError::Unauthorized);
    }
}
