//! Route query segment carrying the dashboard filters.

use std::fmt::Display;

use common::{filter_set::FilterSet, querystring};

/// Parses leniently: a hand-edited or stale link still opens the dashboard,
/// with the unreadable parts dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterQuery(pub FilterSet);

impl From<FilterSet> for FilterQuery {
    fn from(value: FilterSet) -> Self {
        FilterQuery(value)
    }
}

impl From<&str> for FilterQuery {
    fn from(query: &str) -> Self {
        let (filters, warnings) = querystring::decode_with_warnings(query);
        for warning in warnings {
            dioxus::logger::tracing::warn!("ignoring part of the page URL: {warning}");
        }
        FilterQuery(filters)
    }
}

impl Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", querystring::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_query_round_trip() {
        let parsed = FilterQuery::from("speciesIds[]=4&speciesIds[]=1&status=unseen");
        assert_eq!(parsed.to_string(), "speciesIds[]=1&speciesIds[]=4&status=unseen");
        assert_eq!(FilterQuery::from(parsed.to_string().as_str()), parsed);
    }

    #[test]
    fn broken_links_still_open() {
        let parsed = FilterQuery::from("startDate=yesterday&areaIds[]=x&areaIds[]=3");
        assert_eq!(parsed.0.start_date, None);
        assert_eq!(parsed.to_string(), "areaIds[]=3");
    }
}
