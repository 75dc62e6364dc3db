//! Pure transforms from the fetched list to the list submitted on replace.
//!
//! None of these functions mutate their input. Each returns the complete
//! desired list, never a delta.

use thiserror::Error;

use crate::buildpack::{BuildpackList, DesiredList};
use crate::index::Target;

/// What a removal should match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveSelector {
    /// 0-based ordinal; must be in bounds.
    Ordinal(i64),
    /// Exact url; every matching entry is removed.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("No buildpacks were found.")]
    Empty,
    #[error("Buildpack not found. Nothing was removed.")]
    UrlNotFound { url: String },
    #[error("{}", out_of_range_message(*len))]
    OutOfRange { index: i64, len: usize },
}

fn out_of_range_message(len: usize) -> String {
    if len == 1 {
        "Invalid index. Only valid value is 1.".to_string()
    } else {
        format!("Invalid index. Please choose a value between 1 and {len}")
    }
}

/// Overwrites the entry at `target`, or appends when `target` is out of range.
pub fn set(list: &BuildpackList, target: Target, url: &str) -> DesiredList {
    let Some(position) = target.within(list.len()) else {
        return append(list, url);
    };

    list.iter()
        .map(|entry| {
            if entry.ordinal == position {
                url.to_string()
            } else {
                entry.url.clone()
            }
        })
        .collect()
}

/// Inserts before the entry at `target`, or appends when `target` is out of range.
pub fn add(list: &BuildpackList, target: Target, url: &str) -> DesiredList {
    let Some(position) = target.within(list.len()) else {
        return append(list, url);
    };

    list.iter()
        .flat_map(|entry| {
            let inserted = (entry.ordinal == position).then(|| url.to_string());
            inserted.into_iter().chain(std::iter::once(entry.url.clone()))
        })
        .collect()
}

/// Drops the selected entries.
///
/// # Errors
/// `Empty` when there is nothing to remove, `OutOfRange` for an ordinal
/// outside `[0, len)`, and `UrlNotFound` when no entry has the url.
pub fn remove(list: &BuildpackList, selector: &RemoveSelector) -> Result<DesiredList, EditError> {
    if list.is_empty() {
        return Err(EditError::Empty);
    }

    match selector {
        RemoveSelector::Ordinal(ordinal) => {
            let position = Target::At(*ordinal)
                .within(list.len())
                .ok_or(EditError::OutOfRange {
                    index: *ordinal,
                    len: list.len(),
                })?;
            Ok(list
                .iter()
                .filter(|entry| entry.ordinal != position)
                .map(|entry| entry.url.clone())
                .collect())
        }
        RemoveSelector::Url(url) => {
            let remaining: DesiredList = list
                .iter()
                .filter(|entry| entry.url != *url)
                .map(|entry| entry.url.clone())
                .collect();
            if remaining.len() == list.len() {
                return Err(EditError::UrlNotFound { url: url.clone() });
            }
            Ok(remaining)
        }
    }
}

/// Always the empty list.
pub fn clear() -> DesiredList {
    DesiredList::new()
}

fn append(list: &BuildpackList, url: &str) -> DesiredList {
    let mut urls = list.urls();
    urls.push(url.to_string());
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAVA: &str = "https://github.com/heroku/heroku-buildpack-java";
    const NODEJS: &str = "https://github.com/heroku/heroku-buildpack-nodejs";
    const RUBY: &str = "https://github.com/heroku/heroku-buildpack-ruby";

    fn list(urls: &[&str]) -> BuildpackList {
        BuildpackList::from_urls(urls.iter().copied())
    }

    #[test]
    fn set_overwrites_in_place() {
        let out = set(&list(&[RUBY]), Target::At(0), JAVA);
        assert_eq!(out, vec![JAVA]);

        let out = set(&list(&[JAVA, NODEJS]), Target::At(1), RUBY);
        assert_eq!(out, vec![JAVA, RUBY]);
    }

    #[test]
    fn set_out_of_range_appends() {
        let before = list(&[JAVA, NODEJS]);
        for target in [Target::At(2), Target::At(98), Target::At(-1), Target::End] {
            assert_eq!(set(&before, target, RUBY), vec![JAVA, NODEJS, RUBY], "{target:?}");
        }
        assert_eq!(set(&list(&[]), Target::At(0), RUBY), vec![RUBY]);
    }

    #[test]
    fn add_inserts_before_target() {
        let out = add(&list(&[JAVA, NODEJS]), Target::At(1), RUBY);
        assert_eq!(out, vec![JAVA, RUBY, NODEJS]);

        let out = add(&list(&[JAVA]), Target::At(0), RUBY);
        assert_eq!(out, vec![RUBY, JAVA]);
    }

    #[test]
    fn add_out_of_range_appends() {
        let before = list(&[JAVA, NODEJS]);
        for target in [Target::At(2), Target::At(-2), Target::End] {
            assert_eq!(add(&before, target, RUBY), vec![JAVA, NODEJS, RUBY], "{target:?}");
        }
        assert_eq!(add(&list(&[]), Target::At(0), RUBY), vec![RUBY]);
    }

    #[test]
    fn edits_leave_input_untouched() {
        let before = list(&[JAVA, NODEJS]);
        let _ = add(&before, Target::At(0), RUBY);
        let _ = set(&before, Target::At(0), RUBY);
        let _ = remove(&before, &RemoveSelector::Ordinal(0));
        assert_eq!(before.urls(), vec![JAVA, NODEJS]);
    }

    #[test]
    fn remove_by_ordinal() {
        let out = remove(&list(&[JAVA, NODEJS, RUBY]), &RemoveSelector::Ordinal(1)).unwrap();
        assert_eq!(out, vec![JAVA, RUBY]);
    }

    #[test]
    fn remove_by_url_drops_every_match() {
        let out = remove(
            &list(&[RUBY, JAVA, RUBY]),
            &RemoveSelector::Url(RUBY.to_string()),
        )
        .unwrap();
        assert_eq!(out, vec![JAVA]);
    }

    #[test]
    fn remove_from_empty_list_fails() {
        let err = remove(&list(&[]), &RemoveSelector::Ordinal(0)).unwrap_err();
        assert_eq!(err, EditError::Empty);

        let err = remove(&list(&[]), &RemoveSelector::Url(RUBY.to_string())).unwrap_err();
        assert_eq!(err, EditError::Empty);
    }

    #[test]
    fn remove_out_of_range_message_depends_on_length() {
        let err = remove(&list(&[JAVA]), &RemoveSelector::Ordinal(8)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid index. Only valid value is 1.");

        let err = remove(&list(&[JAVA, NODEJS]), &RemoveSelector::Ordinal(8)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid index. Please choose a value between 1 and 2"
        );
    }

    #[test]
    fn remove_rejects_both_bounds() {
        let before = list(&[JAVA, NODEJS]);
        assert!(matches!(
            remove(&before, &RemoveSelector::Ordinal(2)),
            Err(EditError::OutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            remove(&before, &RemoveSelector::Ordinal(-1)),
            Err(EditError::OutOfRange { index: -1, len: 2 })
        ));
    }

    #[test]
    fn remove_unknown_url_fails() {
        let err = remove(
            &list(&[JAVA]),
            &RemoveSelector::Url("https://github.com/heroku/heroku-buildpack-foobar".to_string()),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Buildpack not found. Nothing was removed.");
    }

    #[test]
    fn clear_is_always_empty() {
        assert!(clear().is_empty());
    }
}
