use crate::consts::{
    COMPACT_RECENT_COUNT, OVERFLOW_INITIAL_WINDOW, RECENT_COUNT, SEARCH_INITIAL_WINDOW,
};

/// Display surface the listing is rendered for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) compact: bool,
}

impl Layout {
    pub(crate) fn recent_count(self) -> usize {
        if self.compact {
            COMPACT_RECENT_COUNT
        } else {
            RECENT_COUNT
        }
    }
}

/// Listing sections a renderer may page through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Recent,
    Overflow,
    Search,
}

impl Section {
    /// Rows shown before the "N more" line; `None` shows the whole section.
    pub(crate) fn initial_window(self) -> Option<usize> {
        match self {
            Section::Recent => None,
            Section::Overflow => Some(OVERFLOW_INITIAL_WINDOW),
            Section::Search => Some(SEARCH_INITIAL_WINDOW),
        }
    }
}

/// Which subset of the collection to show, and how
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Partition<'a, T> {
    /// A search produced nothing; the caller shows its empty state
    Empty,
    /// Search results, undivided
    Search { all: &'a [T], count: usize },
    /// Default listing: a short head of recent items and the rest
    Curated { recent: &'a [T], overflow: &'a [T] },
}

/// Split `items` for display.
///
/// A non-empty `search_keyword` selects search mode, which keeps the whole
/// collection together. Otherwise the first `layout.recent_count()` items
/// form the recent head and everything after them the overflow tail.
/// Items are borrowed in their original order and never inspected.
pub(crate) fn partition<'a, T>(
    items: &'a [T],
    layout: Layout,
    search_keyword: Option<&str>,
) -> Partition<'a, T> {
    if search_keyword.is_some_and(|k| !k.is_empty()) {
        if items.is_empty() {
            return Partition::Empty;
        }
        return Partition::Search {
            all: items,
            count: items.len(),
        };
    }

    let split = items.len().min(layout.recent_count());
    let (recent, overflow) = items.split_at(split);
    Partition::Curated { recent, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Layout = Layout { compact: false };
    const COMPACT: Layout = Layout { compact: true };

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i}")).collect()
    }

    fn curated<'a, T>(p: Partition<'a, T>) -> (&'a [T], &'a [T]) {
        match p {
            Partition::Curated { recent, overflow } => (recent, overflow),
            _ => panic!("expected curated partition"),
        }
    }

    #[test]
    fn curated_ten_items_wide() {
        let all = items(10);
        let (recent, overflow) = curated(partition(&all, WIDE, None));
        assert_eq!(recent.len(), 8);
        assert_eq!(overflow.len(), 2);
        assert_eq!(overflow[0], "item-8");
    }

    #[test]
    fn curated_three_items_compact() {
        let all = items(3);
        let (recent, overflow) = curated(partition(&all, COMPACT, None));
        assert_eq!(recent, all.as_slice());
        assert!(overflow.is_empty());
    }

    #[test]
    fn curated_exact_head_size_has_no_overflow() {
        let all = items(4);
        let (recent, overflow) = curated(partition(&all, COMPACT, None));
        assert_eq!(recent.len(), 4);
        assert!(overflow.is_empty());
    }

    #[test]
    fn curated_empty_collection() {
        let all: Vec<String> = Vec::new();
        let (recent, overflow) = curated(partition(&all, WIDE, None));
        assert!(recent.is_empty());
        assert!(overflow.is_empty());
    }

    #[test]
    fn curated_concatenation_reconstructs_input() {
        for n in 0..20 {
            let all = items(n);
            for layout in [WIDE, COMPACT] {
                let (recent, overflow) = curated(partition(&all, layout, None));
                assert_eq!(recent.len(), n.min(layout.recent_count()));
                let joined: Vec<_> = recent.iter().chain(overflow).cloned().collect();
                assert_eq!(joined, all);
            }
        }
    }

    #[test]
    fn empty_keyword_is_curated_mode() {
        let all = items(9);
        let (recent, overflow) = curated(partition(&all, WIDE, Some("")));
        assert_eq!(recent.len(), 8);
        assert_eq!(overflow.len(), 1);
    }

    #[test]
    fn search_with_no_items_is_empty_state() {
        let all: Vec<String> = Vec::new();
        assert_eq!(partition(&all, WIDE, Some("writer")), Partition::Empty);
        assert_eq!(partition(&all, COMPACT, Some("writer")), Partition::Empty);
    }

    #[test]
    fn search_returns_collection_undivided() {
        let all = items(30);
        for layout in [WIDE, COMPACT] {
            match partition(&all, layout, Some("item")) {
                Partition::Search { all: found, count } => {
                    assert_eq!(count, 30);
                    assert_eq!(found, all.as_slice());
                }
                other => panic!("expected search partition, got {other:?}"),
            }
        }
    }

    #[test]
    fn recent_count_by_layout() {
        assert_eq!(WIDE.recent_count(), 8);
        assert_eq!(COMPACT.recent_count(), 4);
        assert_eq!(Layout::default(), WIDE);
    }

    #[test]
    fn initial_windows() {
        assert_eq!(Section::Recent.initial_window(), None);
        assert_eq!(Section::Overflow.initial_window(), Some(12));
        assert_eq!(Section::Search.initial_window(), Some(24));
    }
}
