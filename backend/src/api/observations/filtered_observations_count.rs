use common::{filter_set::FilterSet, observations::ObservationsCount};

use crate::{api::observations::observations_url::filtered_url, config::get_api_config, http_utils::observation_api::api_get_json};

pub async fn filtered_observations_count(filters: FilterSet) -> anyhow::Result<u64> {
    let config = get_api_config();
    let url = filtered_url(&config.url(&config.endpoints.observations_counter_url), &filters);
    let response: ObservationsCount = api_get_json(url).await?;
    Ok(response.count)
}
