//! Offset/limit ranges and result pages.

use serde::{Deserialize, Serialize};

/// A zero-based window over a sorted result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Number of matching documents to skip.
    #[serde(default)]
    pub offset: u64,
    /// Maximum page length; `None` means unbounded.
    #[serde(default)]
    pub limit: Option<u64>,
}

impl Range {
    /// A bounded window.
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }

    /// Everything from `offset` on.
    pub fn unbounded(offset: u64) -> Self {
        Self {
            offset,
            limit: None,
        }
    }

    /// Build a window from inclusive `[start, end]` bounds.
    ///
    /// An `end` before `start` yields an empty window. The limit
    /// saturates at `u64::MAX`.
    pub fn from_bounds(start: u64, end: u64) -> Self {
        let limit = if end < start {
            0
        } else {
            (end - start).saturating_add(1)
        };
        Self::new(start, limit)
    }

    /// The following window of the same size.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit.unwrap_or(0)),
            limit: self.limit,
        }
    }

    /// Cap the limit at `max`.
    pub fn clamped(self, max: u64) -> Self {
        Self {
            offset: self.offset,
            limit: Some(self.limit.map_or(max, |l| l.min(max))),
        }
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The documents on this page.
    pub items: Vec<T>,
    /// Number of documents matching the filter, before pagination.
    pub total: u64,
    /// Offset the page starts at.
    pub offset: u64,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, total: u64, offset: u64) -> Self {
        Self {
            items,
            total,
            offset,
        }
    }

    /// An empty page.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0)
    }

    /// A page holding a complete, unpaginated result.
    pub fn complete(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self::new(items, total, 0)
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether documents remain after this page.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len() as u64) < self.total
    }

    /// Convert every item, failing on the first error.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Page {
            items,
            total: self.total,
            offset: self.offset,
        })
    }

    /// Admin-UI style `Content-Range` value, e.g. `roles 0-24/319`.
    pub fn content_range(&self, resource: &str) -> String {
        if self.items.is_empty() {
            return format!("{resource} */{}", self.total);
        }
        let last = self.offset.saturating_add(self.items.len() as u64 - 1);
        format!("{resource} {}-{last}/{}", self.offset, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds_is_inclusive() {
        assert_eq!(Range::from_bounds(0, 24), Range::new(0, 25));
        assert_eq!(Range::from_bounds(10, 9), Range::new(10, 0));
    }

    #[test]
    fn test_from_bounds_saturates_at_max() {
        assert_eq!(Range::from_bounds(0, u64::MAX), Range::new(0, u64::MAX));
        assert_eq!(Range::from_bounds(u64::MAX, u64::MAX), Range::new(u64::MAX, 1));
    }

    #[test]
    fn test_next_window_is_contiguous() {
        let range = Range::new(4, 2);
        assert_eq!(range.next(), Range::new(6, 2));
        assert_eq!(Range::new(u64::MAX - 1, 5).next().offset, u64::MAX);
    }

    #[test]
    fn test_has_more_near_max_offset() {
        let page = Page::new(vec!["a"], 3, u64::MAX);
        assert!(!page.has_more());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Range::new(0, 5000).clamped(100), Range::new(0, 100));
        assert_eq!(Range::unbounded(3).clamped(100), Range::new(3, 100));
        assert_eq!(Range::new(0, 10).clamped(100), Range::new(0, 10));
    }

    #[test]
    fn test_content_range() {
        let page = Page::new(vec!["a", "b"], 3, 0);
        assert_eq!(page.content_range("roles"), "roles 0-1/3");
        assert!(page.has_more());
        let empty: Page<&str> = Page::new(Vec::new(), 3, 5);
        assert_eq!(empty.content_range("roles"), "roles */3");
    }
}
