use common::{
    filter_set::FilterSet,
    observations::{ObservationsPage, TablePageRequest},
};

use crate::{
    api::observations::observations_url::filtered_url_with_params, config::get_api_config,
    http_utils::observation_api::api_get_json,
};

/// The API clamps out-of-range page numbers to the last page.
pub async fn filtered_observations_page(filters: FilterSet, page: TablePageRequest) -> anyhow::Result<ObservationsPage> {
    let config = get_api_config();
    let url = filtered_url_with_params(&config.url(&config.endpoints.observations_json_url), &filters, &page.to_params());
    api_get_json(url).await
}
