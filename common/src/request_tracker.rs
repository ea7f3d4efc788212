//! Stale-response protection for filter-driven requests.
//!
//! Requests are never cancelled when the filters change, so an older, slower
//! response can arrive after a newer one. Every request is tagged when issued
//! and its response is only accepted if that tag is still the latest one.

use crate::{error::DashboardError, filter_set::FilterSet, querystring};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTag {
    pub sequence: u64,
    /// Encoded filters the request was issued with.
    pub query: String,
}

/// One tracker per view (counter, table, histogram, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
    latest_query: String,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, filters: &FilterSet) -> RequestTag {
        self.issue_query(querystring::encode(filters))
    }

    /// For requests whose identity includes more than the filters (page number, zoom, ...).
    pub fn issue_query(&mut self, query: String) -> RequestTag {
        self.latest += 1;
        self.latest_query = query.clone();
        RequestTag { sequence: self.latest, query }
    }

    pub fn latest_sequence(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, tag: &RequestTag) -> bool {
        tag.sequence == self.latest && tag.query == self.latest_query
    }

    /// Hands the response back only when `tag` is still current.
    pub fn accept<T>(&self, tag: &RequestTag, response: T) -> Result<T, DashboardError> {
        if self.is_current(tag) {
            Ok(response)
        } else {
            tracing::debug!("discarding response #{} (latest #{})", tag.sequence, self.latest);
            Err(DashboardError::StaleResponse { issued: tag.sequence, latest: self.latest })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_the_latest_request_is_accepted() {
        let mut tracker = RequestTracker::new();
        let mut f = FilterSet::default();

        f.set_species([1_u64]).unwrap();
        let a = tracker.issue(&f);
        f.set_species([2_u64]).unwrap();
        let b = tracker.issue(&f);

        assert_eq!(tracker.accept(&b, "S2"), Ok("S2"));
        assert_eq!(tracker.accept(&a, "S1"), Err(DashboardError::StaleResponse { issued: 1, latest: 2 }));
    }

    #[test]
    fn reissuing_same_filters_still_invalidates_older_requests() {
        let mut tracker = RequestTracker::new();
        let f = FilterSet::default();
        let first = tracker.issue(&f);
        let refresh = tracker.issue(&f);
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&refresh));
        assert_eq!(refresh.query, "");
    }
}
