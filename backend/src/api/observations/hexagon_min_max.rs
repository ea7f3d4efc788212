use common::{filter_set::FilterSet, observations::HexagonMinMax};

use crate::{
    api::observations::observations_url::filtered_url_with_params, config::get_api_config,
    http_utils::observation_api::api_get_json,
};

/// Count range over the whole hexagon grid at `zoom`, used to scale the choropleth.
pub async fn hexagon_min_max(filters: FilterSet, zoom: u32) -> anyhow::Result<HexagonMinMax> {
    let config = get_api_config();
    let url = filtered_url_with_params(
        &config.url(&config.endpoints.min_max_occ_per_hexagon_url),
        &filters,
        &[("zoom", zoom.to_string())],
    );
    api_get_json(url).await
}
