//! Client-side name filtering

use super::{Album, Artist, Track};

/// Anything with a display name that can be filtered.
pub trait Named {
    /// The display name matched against filter queries.
    fn name(&self) -> &str;
}

impl Named for Artist {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Album {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Track {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Keeps the items whose name contains `query`, ignoring case.
///
/// An empty query keeps everything.
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Item(&'static str);

    impl Named for Item {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_filter_ignores_case() {
        let items = [Item("Global Warming"), Item("Planet Pit"), Item("Climate Change")];
        let names: Vec<_> = filter_by_name(&items, "GLOBAL").iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["Global Warming"]);
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let items = [Item("a"), Item("b")];
        assert_eq!(filter_by_name(&items, "").len(), 2);
    }

    #[test]
    fn test_no_match() {
        let items = [Item("Timber")];
        assert!(filter_by_name(&items, "rain").is_empty());
    }
}
