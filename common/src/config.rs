//! Page configuration handed to the front end.

use serde::{Deserialize, Serialize};

use crate::map_layers::{DEFAULT_BASE_LAYER, MapDisplayOptions, ObservationTileTemplates};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiEndpoints {
    pub species_list_url: String,
    pub datasets_list_url: String,
    pub areas_list_url: String,
    pub data_imports_list_url: String,
    pub observations_counter_url: String,
    pub observations_json_url: String,
    pub observations_histogram_data_url: String,
    pub mark_observations_as_seen_url: String,
    pub tile_server_aggregated_url_template: String,
    pub tile_server_url_template: String,
    pub min_max_occ_per_hexagon_url: String,
    pub observation_details_url_template: String,
    pub areas_url_template: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            species_list_url: "/api/species/".to_string(),
            datasets_list_url: "/api/internal/datasets/".to_string(),
            areas_list_url: "/api/internal/areas/".to_string(),
            data_imports_list_url: "/api/internal/dataimports/".to_string(),
            observations_counter_url: "/api/internal/filtered_observations/counter/".to_string(),
            observations_json_url: "/api/internal/filtered_observations/data_page/".to_string(),
            observations_histogram_data_url: "/api/internal/filtered_observations/monthly_histogram/".to_string(),
            mark_observations_as_seen_url: "/api/internal/filtered_observations/mark_as_seen/".to_string(),
            tile_server_aggregated_url_template: "/api/internal/maps/tiles/observations/hexagon-grid-aggregated/{z}/{x}/{y}.mvt"
                .to_string(),
            tile_server_url_template: "/api/internal/maps/tiles/observations/{z}/{x}/{y}.mvt".to_string(),
            min_max_occ_per_hexagon_url: "/api/internal/maps/observation_min_max_in_hex_grid/".to_string(),
            observation_details_url_template: "/observation/{stable_id}".to_string(),
            areas_url_template: "/api/internal/areas/{id}".to_string(),
        }
    }
}

impl ApiEndpoints {
    pub fn tile_templates(&self) -> ObservationTileTemplates {
        ObservationTileTemplates {
            aggregated: self.tile_server_aggregated_url_template.clone(),
            raw: self.tile_server_url_template.clone(),
        }
    }

    pub fn observation_details_url(&self, stable_id: &str) -> String {
        self.observation_details_url_template.replace("{stable_id}", stable_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MainMapConfig {
    pub initial_zoom: f64,
    pub initial_lat: f64,
    pub initial_lon: f64,
    pub base_layer: String,
    pub display: MapDisplayOptions,
}

impl Default for MainMapConfig {
    fn default() -> Self {
        Self {
            initial_zoom: 8.0,
            initial_lat: 50.5,
            initial_lon: 4.5,
            base_layer: DEFAULT_BASE_LAYER.to_string(),
            display: MapDisplayOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontEndConfig {
    pub authenticated_user: bool,
    pub user_id: Option<u64>,
    pub current_language_code: String,
    pub api_endpoints: ApiEndpoints,
    pub main_map_config: MainMapConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: FrontEndConfig = serde_json::from_str(
            r#"{"authenticatedUser": true, "userId": 3, "apiEndpoints": {"speciesListUrl": "/custom/species"},
                "mainMapConfig": {"initialZoom": 5}}"#,
        )
        .unwrap();
        assert!(config.authenticated_user);
        assert_eq!(config.api_endpoints.species_list_url, "/custom/species");
        assert_eq!(config.api_endpoints.datasets_list_url, ApiEndpoints::default().datasets_list_url);
        assert_eq!(config.main_map_config.initial_zoom, 5.0);
        assert_eq!(config.main_map_config.base_layer, "osmHot");
        assert_eq!(config.api_endpoints.areas_url_template, "/api/internal/areas/{id}");
        assert_eq!(config.main_map_config.display, MapDisplayOptions::default());
    }

    #[test]
    fn observation_details_link() {
        assert_eq!(ApiEndpoints::default().observation_details_url("abc"), "/observation/abc");
    }
}
