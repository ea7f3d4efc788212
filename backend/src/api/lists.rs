//! Entity lists feeding the filter selectors.

use common::selector_data::{AreaInformation, DataImportInformation, DatasetInformation, SpeciesInformation};

use crate::{config::get_api_config, http_utils::observation_api::api_get_json};

pub async fn list_species() -> anyhow::Result<Vec<SpeciesInformation>> {
    let config = get_api_config();
    api_get_json(config.url(&config.endpoints.species_list_url)).await
}

pub async fn list_datasets() -> anyhow::Result<Vec<DatasetInformation>> {
    let config = get_api_config();
    api_get_json(config.url(&config.endpoints.datasets_list_url)).await
}

/// Public areas, plus the user's own when the API sees an authenticated session.
pub async fn list_areas() -> anyhow::Result<Vec<AreaInformation>> {
    let config = get_api_config();
    api_get_json(config.url(&config.endpoints.areas_list_url)).await
}

pub async fn list_data_imports() -> anyhow::Result<Vec<DataImportInformation>> {
    let config = get_api_config();
    let mut imports: Vec<DataImportInformation> = api_get_json(config.url(&config.endpoints.data_imports_list_url)).await?;
    // API order is undetermined, the selector lists the most recent first
    imports.sort_by(|a, b| b.start_timestamp.cmp(&a.start_timestamp));
    Ok(imports)
}
