use dioxus::prelude::*;

use common::filter_set::FilterSet;

use crate::components::navbar::Navbar;
use crate::data_definitions::filter_query::FilterQuery;
use crate::pages::index_page::IndexPage;

/// The whole dashboard state that is worth sharing lives in the query string,
/// in the same format the observation API reads.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/?:..filters")]
    IndexPage { filters: FilterQuery },
}

impl Route {
    pub fn index_page_from_filters(filters: FilterSet) -> Self {
        Self::IndexPage { filters: FilterQuery::from(filters) }
    }
}
