use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Optional paging parameters for a connection request: an offset/limit
/// window plus unix-time bounds. Only the parameters that are set are
/// emitted into the query map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingParameters {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub since: Option<i64>,
    pub until: Option<i64>,
}

impl PagingParameters {
    pub fn new(
        offset: Option<u32>,
        limit: Option<u32>,
        since: Option<i64>,
        until: Option<i64>,
    ) -> Self {
        Self {
            offset,
            limit,
            since,
            until,
        }
    }

    /// Offset/limit window with no time bounds.
    pub fn with_offset_limit(offset: u32, limit: u32) -> Self {
        Self::new(Some(offset), Some(limit), None, None)
    }

    /// Assemble the query-parameter map for this window. Keys are unique and
    /// unordered; absent parameters produce no key.
    pub fn to_query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(offset) = self.offset {
            params.insert("offset".to_string(), offset.to_string());
        }
        if let Some(limit) = self.limit {
            params.insert("limit".to_string(), limit.to_string());
        }
        if let Some(since) = self.since {
            params.insert("since".to_string(), since.to_string());
        }
        if let Some(until) = self.until {
            params.insert("until".to_string(), until.to_string());
        }
        params
    }
}

/// One page of connection results plus cursors for the adjacent pages.
/// Owned transiently per call; never cached by the adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub previous: Option<PagingParameters>,
    pub next: Option<PagingParameters>,
}

impl<T> PagedList<T> {
    pub fn new(
        items: Vec<T>,
        previous: Option<PagingParameters>,
        next: Option<PagingParameters>,
    ) -> Self {
        Self {
            items,
            previous,
            next,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
