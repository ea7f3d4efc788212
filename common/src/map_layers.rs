//! Base layer registry and the choice between aggregated and raw observation tiles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{error::DashboardError, querystring::with_extra_params};

/// Below this zoom the hexagon-aggregated endpoint is used, at or above it the
/// per-observation endpoint.
pub const AGGREGATION_ZOOM_THRESHOLD: f64 = 13.0;

pub const DEFAULT_BASE_LAYER: &str = "osmHot";

// Hexagon edge (meters) per zoom level, before the multiplier.
const ZOOM_TO_HEX_SIZE_BASELINE: [u32; 21] = [
    640000, 320000, 160000, 80000, 40000, 20000, 10000, 5000, 2500, 1250, 675, 335, 160, 80, 40, 20, 10, 5, 5, 5, 5,
];
const ZOOM_TO_HEX_SIZE_MULTIPLIER: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregationMode {
    /// Hexagon-binned counts, drawn as a choropleth.
    Aggregated,
    /// One feature per observation.
    Raw,
}

pub fn aggregation_mode_for_zoom(zoom: f64) -> AggregationMode {
    if zoom < AGGREGATION_ZOOM_THRESHOLD {
        AggregationMode::Aggregated
    } else {
        AggregationMode::Raw
    }
}

/// Hexagon size used server-side for a given (rounded, clamped) zoom level.
pub fn hex_size_meters(zoom: f64) -> u32 {
    let level = zoom.round().clamp(0.0, 20.0) as usize;
    ZOOM_TO_HEX_SIZE_BASELINE[level] * ZOOM_TO_HEX_SIZE_MULTIPLIER
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewState {
    pub zoom: f64,
    pub visible_extent: BoundingBox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayerEntry<L> {
    pub name: String,
    pub layer: L,
}

/// Immutable once built. Layers are always referenced by name from the UI so
/// that a serialized selection never holds a live handle.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayerRegistry<L> {
    entries: Vec<BaseLayerEntry<L>>,
}

impl<L> BaseLayerRegistry<L> {
    pub fn new(entries: Vec<BaseLayerEntry<L>>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&L> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.layer)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[BaseLayerEntry<L>] {
        &self.entries
    }
}

/// XYZ tile source of a base layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    pub label: &'static str,
    pub url_template: &'static str,
    pub max_zoom: u8,
}

pub fn default_base_layers() -> BaseLayerRegistry<TileSource> {
    BaseLayerRegistry::new(vec![
        BaseLayerEntry {
            name: "toner".to_string(),
            layer: TileSource {
                label: "Stamen Toner",
                url_template: "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}.png",
                max_zoom: 20,
            },
        },
        BaseLayerEntry {
            name: "osmHot".to_string(),
            layer: TileSource {
                label: "OSM HOT",
                url_template: "https://a.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
                max_zoom: 19,
            },
        },
        BaseLayerEntry {
            name: "esriImagery".to_string(),
            layer: TileSource {
                label: "Esri World Imagery",
                url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                max_zoom: 19,
            },
        },
    ])
}

pub fn fill_tile_template(template: &str, z: u32, x: u32, y: u32) -> String {
    template
        .replace("{z}", &z.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationTileTemplates {
    pub aggregated: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapLayerSelector<L> {
    registry: BaseLayerRegistry<L>,
    tiles: ObservationTileTemplates,
    base_layer: String,
    aggregation_mode: AggregationMode,
}

impl<L> MapLayerSelector<L> {
    pub fn new(
        registry: BaseLayerRegistry<L>,
        tiles: ObservationTileTemplates,
        initial_base_layer: &str,
        initial_zoom: f64,
    ) -> Result<Self, DashboardError> {
        if registry.get(initial_base_layer).is_none() {
            return Err(DashboardError::UnknownBaseLayer(initial_base_layer.to_string()));
        }
        Ok(Self {
            registry,
            tiles,
            base_layer: initial_base_layer.to_string(),
            aggregation_mode: aggregation_mode_for_zoom(initial_zoom),
        })
    }

    pub fn base_layer_name(&self) -> &str {
        &self.base_layer
    }

    pub fn base_layer(&self) -> Option<&L> {
        self.registry.get(&self.base_layer)
    }

    pub fn registry(&self) -> &BaseLayerRegistry<L> {
        &self.registry
    }

    pub fn aggregation_mode(&self) -> AggregationMode {
        self.aggregation_mode
    }

    /// On failure the previously active layer stays selected.
    pub fn select_base_layer(&mut self, name: &str) -> Result<(), DashboardError> {
        if self.registry.get(name).is_none() {
            tracing::warn!("unknown base layer {name:?}, keeping {:?}", self.base_layer);
            return Err(DashboardError::UnknownBaseLayer(name.to_string()));
        }
        self.base_layer = name.to_string();
        Ok(())
    }

    /// Evaluated on every viewport change. Returns whether the mode flipped.
    pub fn on_viewport_change(&mut self, view: &MapViewState) -> bool {
        let mode = aggregation_mode_for_zoom(view.zoom);
        let changed = mode != self.aggregation_mode;
        if changed {
            tracing::debug!("zoom {} -> observation tiles {:?}", view.zoom, mode);
        }
        self.aggregation_mode = mode;
        changed
    }

    pub fn active_tile_template(&self) -> &str {
        match self.aggregation_mode {
            AggregationMode::Aggregated => &self.tiles.aggregated,
            AggregationMode::Raw => &self.tiles.raw,
        }
    }

    /// `refresh` is sent as `v=<refresh>` so that a new store revision yields
    /// a new URL even when the filters did not change.
    pub fn active_tile_url(&self, z: u32, x: u32, y: u32, filters_query: &str, refresh: u64) -> String {
        let url = fill_tile_template(self.active_tile_template(), z, x, y);
        let query = with_extra_params(filters_query, &[("v", refresh.to_string())]);
        format!("{url}?{query}")
    }
}

pub const DEFAULT_DATA_LAYER_OPACITY: f64 = 0.8;

/// Map view settings that are not filters and never go into the URL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapDisplayOptions {
    pub data_layer_opacity: f64,
    pub show_area_outlines: bool,
}

impl Default for MapDisplayOptions {
    fn default() -> Self {
        Self { data_layer_opacity: DEFAULT_DATA_LAYER_OPACITY, show_area_outlines: true }
    }
}

impl MapDisplayOptions {
    /// Out of range and NaN values are clamped into 0..=1.
    pub fn set_data_layer_opacity(&mut self, opacity: f64) {
        self.data_layer_opacity = if opacity.is_nan() { DEFAULT_DATA_LAYER_OPACITY } else { opacity.clamp(0.0, 1.0) };
    }

    pub fn area_overlays(&self, areas_url_template: &str, area_ids: &BTreeSet<u64>) -> Vec<(u64, String)> {
        if !self.show_area_outlines {
            return Vec::new();
        }
        area_overlay_urls(areas_url_template, area_ids)
    }
}

/// One outline URL per selected area, in id order.
pub fn area_overlay_urls(areas_url_template: &str, area_ids: &BTreeSet<u64>) -> Vec<(u64, String)> {
    area_ids.iter().map(|id| (*id, areas_url_template.replace("{id}", &id.to_string()))).collect()
}

/// Linear color ramp over the per-hexagon count range of the current grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonColorScale {
    min: u64,
    max: u64,
}

const LOW_COUNT_COLOR: [u8; 3] = [255, 237, 160];
const HIGH_COUNT_COLOR: [u8; 3] = [189, 0, 38];

impl HexagonColorScale {
    pub fn from_min_max(min: u64, max: u64) -> Self {
        Self { min: min.min(max), max: max.max(min) }
    }

    pub fn color_for_count(&self, count: u64) -> String {
        let t = if self.max == self.min {
            1.0
        } else {
            (count.clamp(self.min, self.max) - self.min) as f64 / (self.max - self.min) as f64
        };
        let channel = |i: usize| {
            let low = LOW_COUNT_COLOR[i] as f64;
            let high = HIGH_COUNT_COLOR[i] as f64;
            (low + (high - low) * t).round() as u8
        };
        format!("#{:02x}{:02x}{:02x}", channel(0), channel(1), channel(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view(zoom: f64) -> MapViewState {
        MapViewState { zoom, visible_extent: BoundingBox { min_x: 0.0, min_y: 0.0, max_x: 1.0, max_y: 1.0 } }
    }

    fn selector() -> MapLayerSelector<TileSource> {
        MapLayerSelector::new(
            default_base_layers(),
            ObservationTileTemplates {
                aggregated: "/api/maps/tiles/hexagon-grid-aggregated/{z}/{x}/{y}.mvt".to_string(),
                raw: "/api/maps/tiles/observations/{z}/{x}/{y}.mvt".to_string(),
            },
            DEFAULT_BASE_LAYER,
            8.0,
        )
        .unwrap()
    }

    #[test]
    fn threshold_is_exclusive_for_aggregation() {
        assert_eq!(aggregation_mode_for_zoom(0.0), AggregationMode::Aggregated);
        assert_eq!(aggregation_mode_for_zoom(12.99), AggregationMode::Aggregated);
        assert_eq!(aggregation_mode_for_zoom(13.0), AggregationMode::Raw);
        assert_eq!(aggregation_mode_for_zoom(18.0), AggregationMode::Raw);
    }

    #[test]
    fn every_viewport_change_is_evaluated() {
        let mut s = selector();
        assert_eq!(s.aggregation_mode(), AggregationMode::Aggregated);
        assert!(!s.on_viewport_change(&view(10.0)));
        assert!(s.on_viewport_change(&view(14.0)));
        assert_eq!(
            s.active_tile_url(14, 8345, 5470, "speciesIds[]=1", 3),
            "/api/maps/tiles/observations/14/8345/5470.mvt?speciesIds[]=1&v=3"
        );
        assert!(s.on_viewport_change(&view(4.0)));
        assert_eq!(s.active_tile_url(4, 8, 5, "", 0), "/api/maps/tiles/hexagon-grid-aggregated/4/8/5.mvt?v=0");
    }

    #[test]
    fn selected_areas_get_one_outline_each() {
        let ids = BTreeSet::from([12_u64, 3]);
        assert_eq!(
            area_overlay_urls("/api/internal/areas/{id}", &ids),
            vec![(3, "/api/internal/areas/3".to_string()), (12, "/api/internal/areas/12".to_string())]
        );
        assert!(area_overlay_urls("/api/internal/areas/{id}", &BTreeSet::new()).is_empty());
    }

    #[test]
    fn hidden_outlines_and_opacity_bounds() {
        let ids = BTreeSet::from([1_u64]);
        let mut options = MapDisplayOptions::default();
        assert_eq!(options.data_layer_opacity, 0.8);
        assert_eq!(options.area_overlays("/a/{id}", &ids).len(), 1);
        options.show_area_outlines = false;
        assert!(options.area_overlays("/a/{id}", &ids).is_empty());

        options.set_data_layer_opacity(1.7);
        assert_eq!(options.data_layer_opacity, 1.0);
        options.set_data_layer_opacity(-0.2);
        assert_eq!(options.data_layer_opacity, 0.0);
        options.set_data_layer_opacity(f64::NAN);
        assert_eq!(options.data_layer_opacity, DEFAULT_DATA_LAYER_OPACITY);
    }

    #[test]
    fn unknown_base_layer_keeps_the_previous_one() {
        let mut s = selector();
        s.select_base_layer("toner").unwrap();
        assert_eq!(s.select_base_layer("watercolor"), Err(DashboardError::UnknownBaseLayer("watercolor".to_string())));
        assert_eq!(s.base_layer_name(), "toner");
        assert_eq!(s.base_layer().map(|l| l.label), Some("Stamen Toner"));
    }

    #[test]
    fn constructor_rejects_unknown_initial_layer() {
        let r = MapLayerSelector::new(
            default_base_layers(),
            ObservationTileTemplates { aggregated: String::new(), raw: String::new() },
            "nope",
            1.0,
        );
        assert!(r.is_err());
    }

    #[test]
    fn hex_sizes() {
        assert_eq!(hex_size_meters(0.0), 1_280_000);
        assert_eq!(hex_size_meters(10.2), 1350);
        assert_eq!(hex_size_meters(25.0), 10);
        assert_eq!(hex_size_meters(-3.0), 1_280_000);
    }

    #[test]
    fn color_scale_endpoints() {
        let scale = HexagonColorScale::from_min_max(1, 101);
        assert_eq!(scale.color_for_count(1), "#ffeda0");
        assert_eq!(scale.color_for_count(101), "#bd0026");
        assert_eq!(scale.color_for_count(5000), "#bd0026");
        assert_eq!(HexagonColorScale::from_min_max(7, 7).color_for_count(7), "#bd0026");
    }
}
