use common::{
    filter_set::FilterSet,
    histogram::{HistogramBucket, HistogramDataEntry, bucket_monthly},
};

use crate::{api::observations::observations_url::filtered_url, config::get_api_config, http_utils::observation_api::api_get_json};

pub async fn filtered_observations_histogram(filters: FilterSet) -> anyhow::Result<Vec<HistogramBucket>> {
    let config = get_api_config();
    let url = filtered_url(&config.url(&config.endpoints.observations_histogram_data_url), &filters);
    let entries: Vec<HistogramDataEntry> = api_get_json(url).await?;
    Ok(bucket_monthly(&entries))
}
