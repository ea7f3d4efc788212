//! URL builders for filtered-observation endpoints.

use common::{filter_set::FilterSet, querystring};

use crate::http_utils::observation_api::url_with_query;

pub fn filtered_url(endpoint: &str, filters: &FilterSet) -> String {
    url_with_query(endpoint, &querystring::encode(filters))
}

/// Filters first, then endpoint-specific parameters.
pub fn filtered_url_with_params(endpoint: &str, filters: &FilterSet, extra: &[(&str, String)]) -> String {
    let query = querystring::with_extra_params(&querystring::encode(filters), extra);
    url_with_query(endpoint, &query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::observations::TablePageRequest;
    use pretty_assertions::assert_eq;

    #[test]
    fn unfiltered_requests_have_no_query() {
        assert_eq!(filtered_url("http://h/count/", &FilterSet::default()), "http://h/count/");
    }

    #[test]
    fn table_page_params_follow_the_filters() {
        let mut filters = FilterSet::default();
        filters.set_species([3_u64]).unwrap();
        let page = TablePageRequest { page_number: 2, page_size: 20, order: "-date".to_string() };
        assert_eq!(
            filtered_url_with_params("http://h/page/", &filters, &page.to_params()),
            "http://h/page/?speciesIds[]=3&order=-date&limit=20&page_number=2"
        );
    }
}
