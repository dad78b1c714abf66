//! Version history extracted from a distribution comparison table

use serde::{Deserialize, Serialize};

/// One distribution release and the package version it ships
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Package version as printed in the table (e.g., `2.17`, `--`)
    pub package_version: String,
    /// Distribution release identifier (e.g., `22.04`)
    pub distribution_version: String,
}

impl HistoryEntry {
    /// Creates a new HistoryEntry
    pub fn new(package_version: impl Into<String>, distribution_version: impl Into<String>) -> Self {
        Self {
            package_version: package_version.into(),
            distribution_version: distribution_version.into(),
        }
    }
}

/// Everything the extractor learned about one distribution
///
/// Entries are ordered newest release first, as on the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistroHistory {
    /// Human-readable distribution name from the page title
    pub title: String,
    /// Release history, newest first
    pub entries: Vec<HistoryEntry>,
}

impl DistroHistory {
    /// Creates a new DistroHistory
    pub fn new(title: impl Into<String>, entries: Vec<HistoryEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// Builds the history by pairing package versions with release columns
    ///
    /// The shorter of the two lists decides the length.
    pub fn from_columns<P, D>(title: impl Into<String>, package_versions: P, distro_versions: D) -> Self
    where
        P: IntoIterator<Item = String>,
        D: IntoIterator<Item = String>,
    {
        let entries = package_versions
            .into_iter()
            .zip(distro_versions)
            .map(|(package, distro)| HistoryEntry::new(package, distro))
            .collect();
        Self::new(title, entries)
    }

    /// Returns the newest entry, if any
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_pairs_in_order() {
        let history = DistroHistory::from_columns(
            "Ubuntu",
            vec!["2.39".to_string(), "2.35".to_string()],
            vec!["24.04".to_string(), "22.04".to_string()],
        );
        assert_eq!(history.title, "Ubuntu");
        assert_eq!(
            history.entries,
            vec![
                HistoryEntry::new("2.39", "24.04"),
                HistoryEntry::new("2.35", "22.04"),
            ]
        );
    }

    #[test]
    fn test_from_columns_truncates_to_shorter() {
        let history = DistroHistory::from_columns(
            "Debian",
            vec!["2.36".to_string()],
            vec!["12".to_string(), "11".to_string(), "10".to_string()],
        );
        assert_eq!(history.len(), 1);
        assert_eq!(history.newest(), Some(&HistoryEntry::new("2.36", "12")));
    }

    #[test]
    fn test_empty_history() {
        let history = DistroHistory::new("Empty", Vec::new());
        assert!(history.is_empty());
        assert!(history.newest().is_none());
    }
}
