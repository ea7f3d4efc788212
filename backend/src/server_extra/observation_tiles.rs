//! Same-origin proxy for the observation vector tiles.

use axum::{
    body::Body,
    extract::{Path, RawQuery},
    response::{IntoResponse, Response},
};
use common::map_layers::{AggregationMode, aggregation_mode_for_zoom, fill_tile_template};
use reqwest::StatusCode;
use tracing::info;

use crate::{config::get_api_config, http_utils::observation_api::{api_get_bytes, url_with_query}};

/// Mounted by the server; the browser loads every observation tile through it.
pub const OBSERVATION_TILE_ROUTE: &str = "/_observation_tiles/{z}/{x}/{y}";

const MVT_CONTENT_TYPE: &str = "application/vnd.mapbox-vector-tile";

/// Upstream URL of tile `z/x/y`: hexagon grid below the aggregation threshold,
/// individual observations from it on.
pub fn observation_tile_upstream_url(z: u32, x: u32, y: u32, query: Option<&str>) -> String {
    let config = get_api_config();
    let template = match aggregation_mode_for_zoom(z as f64) {
        AggregationMode::Aggregated => &config.endpoints.tile_server_aggregated_url_template,
        AggregationMode::Raw => &config.endpoints.tile_server_url_template,
    };
    let url = fill_tile_template(&config.url(template), z, x, y);
    url_with_query(&url, query.unwrap_or(""))
}

async fn _observation_tile(z: u32, x: u32, y: u32, query: Option<String>) -> anyhow::Result<Response> {
    let url = observation_tile_upstream_url(z, x, y, query.as_deref());
    info!("Proxying observation tile {}/{}/{}", z, x, y);
    let (content_type, body) = api_get_bytes(url).await?;
    let content_type = if content_type == "application/octet-stream" { MVT_CONTENT_TYPE.to_string() } else { content_type };
    Ok(([("Content-Type", content_type)], Body::from(body)).into_response())
}

pub async fn observation_tile(Path((z, x, y)): Path<(u32, u32, u32)>, RawQuery(query): RawQuery) -> Response {
    match _observation_tile(z, x, y, query).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("observation_tile: request failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zoom_picks_the_upstream_template() {
        let low = observation_tile_upstream_url(4, 8, 5, Some("status=unseen"));
        assert!(low.ends_with("/hexagon-grid-aggregated/4/8/5.mvt?status=unseen"), "{low}");
        let high = observation_tile_upstream_url(13, 4170, 2740, None);
        assert!(high.ends_with("/api/internal/maps/tiles/observations/13/4170/2740.mvt"), "{high}");
        assert_eq!(high.contains("hexagon"), false);
    }
}
