//! The app's ordered buildpack list as held by the remote store.

/// One installed buildpack and its current rank.
///
/// `ordinal` is assigned by the remote store and recomputed after every
/// replace, so it is only meaningful within a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildpackEntry {
    pub url: String,
    pub ordinal: usize,
}

/// Ordered buildpacks where `entries[i].ordinal == i` for every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildpackList {
    entries: Vec<BuildpackEntry>,
}

/// The full replacement payload submitted to the remote store.
pub type DesiredList = Vec<String>;

impl BuildpackList {
    /// Builds a list ranking `urls` in the order given.
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = urls
            .into_iter()
            .enumerate()
            .map(|(ordinal, url)| BuildpackEntry {
                url: url.into(),
                ordinal,
            })
            .collect();
        Self { entries }
    }

    /// Builds a list from records in any order.
    ///
    /// Records are sorted by the ordinal the store reported and then
    /// re-ranked 0..n-1, so gaps or duplicates in the input collapse.
    pub fn from_entries(mut entries: Vec<BuildpackEntry>) -> Self {
        entries.sort_by_key(|entry| entry.ordinal);
        Self::from_urls(entries.into_iter().map(|entry| entry.url))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BuildpackEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildpackEntry> {
        self.entries.iter()
    }

    pub fn urls(&self) -> DesiredList {
        self.entries.iter().map(|entry| entry.url.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, ordinal: usize) -> BuildpackEntry {
        BuildpackEntry {
            url: url.to_string(),
            ordinal,
        }
    }

    #[test]
    fn from_urls_assigns_contiguous_ordinals() {
        let list = BuildpackList::from_urls(["java", "nodejs"]);
        let ordinals = list.iter().map(|e| e.ordinal).collect::<Vec<_>>();
        assert_eq!(ordinals, vec![0, 1]);
    }

    #[test]
    fn from_entries_sorts_and_reranks() {
        let list = BuildpackList::from_entries(vec![entry("nodejs", 4), entry("java", 2)]);
        assert_eq!(list.urls(), vec!["java", "nodejs"]);
        assert_eq!(list.entries()[1], entry("nodejs", 1));
    }
}
