//! Client API calls for the dashboard, proxied to the observation API.

use common::{
    config::FrontEndConfig,
    filter_set::FilterSet,
    histogram::HistogramBucket,
    observations::{HexagonMinMax, ObservationsPage, TablePageRequest},
    selector_data::{AreaInformation, DataImportInformation, DatasetInformation, SpeciesInformation},
};
use dioxus::prelude::*;

#[server]
pub async fn get_frontend_config() -> Result<FrontEndConfig, ServerFnError> {
    Ok(backend::config::get_api_config().frontend_config())
}

#[server]
pub async fn list_species() -> Result<Vec<SpeciesInformation>, ServerFnError> {
    let x = backend::api::lists::list_species().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_datasets() -> Result<Vec<DatasetInformation>, ServerFnError> {
    let x = backend::api::lists::list_datasets().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_areas() -> Result<Vec<AreaInformation>, ServerFnError> {
    let x = backend::api::lists::list_areas().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_data_imports() -> Result<Vec<DataImportInformation>, ServerFnError> {
    let x = backend::api::lists::list_data_imports().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn filtered_observations_count(filters: FilterSet) -> Result<u64, ServerFnError> {
    let x = backend::api::observations::filtered_observations_count(filters).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn filtered_observations_page(filters: FilterSet, page: TablePageRequest) -> Result<ObservationsPage, ServerFnError> {
    let x = backend::api::observations::filtered_observations_page(filters, page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn filtered_observations_histogram(filters: FilterSet) -> Result<Vec<HistogramBucket>, ServerFnError> {
    let x = backend::api::observations::filtered_observations_histogram(filters).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn hexagon_min_max(filters: FilterSet, zoom: u32) -> Result<HexagonMinMax, ServerFnError> {
    let x = backend::api::observations::hexagon_min_max(filters, zoom).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn mark_observations_as_seen(filters: FilterSet) -> Result<bool, ServerFnError> {
    let x = backend::api::observations::mark_observations_as_seen(filters).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
