//! Where the observation API lives, read from the environment.

use common::config::{ApiEndpoints, FrontEndConfig, MainMapConfig};

use crate::server_extra::observation_tiles::OBSERVATION_TILE_ROUTE;

pub const API_URL_ENV: &str = "GBIF_ALERT_API_URL";
/// Set when the dashboard is served on behalf of a logged-in user.
pub const USER_ID_ENV: &str = "GBIF_ALERT_USER_ID";
pub const LANGUAGE_ENV: &str = "GBIF_ALERT_LANGUAGE";
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: ApiEndpoints,
    pub user_id: Option<u64>,
    pub language_code: String,
}

pub fn get_api_config() -> ApiConfig {
    ApiConfig::from_env()
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or(DEFAULT_API_URL.to_string());
        let mut config = Self::new(base_url, ApiEndpoints::default());
        config.user_id = std::env::var(USER_ID_ENV).ok().and_then(|v| match v.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("ignoring {USER_ID_ENV}={v:?}, not a user id");
                None
            }
        });
        if let Ok(language_code) = std::env::var(LANGUAGE_ENV) {
            config.language_code = language_code;
        }
        config
    }

    pub fn new(base_url: impl Into<String>, endpoints: ApiEndpoints) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, endpoints, user_id: None, language_code: "en".to_string() }
    }

    /// Absolute URL of an endpoint path (or template).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute endpoints for the browser side. Tiles go through the same-origin
    /// proxy, which picks the aggregated or raw upstream by zoom.
    pub fn frontend_config(&self) -> FrontEndConfig {
        let e = &self.endpoints;
        FrontEndConfig {
            authenticated_user: self.user_id.is_some(),
            user_id: self.user_id,
            current_language_code: self.language_code.clone(),
            api_endpoints: ApiEndpoints {
                species_list_url: self.url(&e.species_list_url),
                datasets_list_url: self.url(&e.datasets_list_url),
                areas_list_url: self.url(&e.areas_list_url),
                data_imports_list_url: self.url(&e.data_imports_list_url),
                observations_counter_url: self.url(&e.observations_counter_url),
                observations_json_url: self.url(&e.observations_json_url),
                observations_histogram_data_url: self.url(&e.observations_histogram_data_url),
                mark_observations_as_seen_url: self.url(&e.mark_observations_as_seen_url),
                tile_server_aggregated_url_template: OBSERVATION_TILE_ROUTE.to_string(),
                tile_server_url_template: OBSERVATION_TILE_ROUTE.to_string(),
                min_max_occ_per_hexagon_url: self.url(&e.min_max_occ_per_hexagon_url),
                observation_details_url_template: self.url(&e.observation_details_url_template),
                areas_url_template: self.url(&e.areas_url_template),
            },
            main_map_config: MainMapConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trailing_slash_is_not_doubled() {
        let config = ApiConfig::new("https://alert.example.org/", ApiEndpoints::default());
        assert_eq!(config.url("/api/species/"), "https://alert.example.org/api/species/");
        assert_eq!(
            config.frontend_config().api_endpoints.areas_url_template,
            "https://alert.example.org/api/internal/areas/{id}"
        );
    }

    #[test]
    fn browser_tiles_go_through_the_proxy() {
        let endpoints = ApiConfig::new("https://alert.example.org", ApiEndpoints::default()).frontend_config().api_endpoints;
        assert_eq!(endpoints.tile_server_url_template, "/_observation_tiles/{z}/{x}/{y}");
        assert_eq!(endpoints.tile_server_aggregated_url_template, "/_observation_tiles/{z}/{x}/{y}");
        assert_eq!(
            common::map_layers::fill_tile_template(&endpoints.tile_server_url_template, 14, 8345, 5470),
            "/_observation_tiles/14/8345/5470"
        );
    }

    #[test]
    fn anonymous_unless_a_user_is_configured() {
        let mut config = ApiConfig::new("http://h", ApiEndpoints::default());
        assert!(!config.frontend_config().authenticated_user);
        config.user_id = Some(7);
        let front = config.frontend_config();
        assert!(front.authenticated_user);
        assert_eq!(front.user_id, Some(7));
    }
}
