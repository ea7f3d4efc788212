//! Map controls: base layer, zoom, and which observation tiles are active.
//!
//! Drawing tiles is left to the browser; this view owns the viewport state and
//! derives every URL the renderer needs from it.

use std::f64::consts::PI;

use common::{
    config::FrontEndConfig,
    error::DashboardError,
    map_layers::{
        AggregationMode, BoundingBox, DEFAULT_BASE_LAYER, HexagonColorScale, MapDisplayOptions, MapLayerSelector,
        MapViewState, TileSource, default_base_layers, fill_tile_template, hex_size_meters,
    },
    observations::HexagonMinMax,
    querystring,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdZoomIn, MdZoomOut}, md_maps_icons::MdLayers}};

use crate::{
    api::observations_api::hexagon_min_max,
    components::error_boundary::ComponentErrorDisplay,
    data_definitions::{dashboard_context::DashboardContext, tracked_request::use_tracked_request},
};

const LEGEND_STEPS: u64 = 5;

fn build_selector(config: &FrontEndConfig) -> Result<MapLayerSelector<TileSource>, DashboardError> {
    let map_config = &config.main_map_config;
    let tiles = config.api_endpoints.tile_templates();
    MapLayerSelector::new(default_base_layers(), tiles.clone(), &map_config.base_layer, map_config.initial_zoom).or_else(|e| {
        dioxus::logger::tracing::warn!("{e}, falling back to {DEFAULT_BASE_LAYER}");
        MapLayerSelector::new(default_base_layers(), tiles, DEFAULT_BASE_LAYER, map_config.initial_zoom)
    })
}

/// Slippy map tile containing the point at integer zoom `z`.
fn tile_for(lat: f64, lon: f64, z: u32) -> (u32, u32) {
    let n = 2_f64.powi(z as i32);
    let lat_rad = lat.to_radians();
    let x = ((lon + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor();
    let max = n - 1.0;
    (x.clamp(0.0, max) as u32, y.clamp(0.0, max) as u32)
}

fn view_state(lat: f64, lon: f64, zoom: f64) -> MapViewState {
    // roughly two tiles around the center
    let half_width = 360.0 / 2_f64.powf(zoom);
    let half_height = half_width / 2.0;
    MapViewState {
        zoom,
        visible_extent: BoundingBox {
            min_x: lon - half_width,
            min_y: (lat - half_height).max(-85.0),
            max_x: lon + half_width,
            max_y: (lat + half_height).min(85.0),
        },
    }
}

#[component]
pub fn ObservationsMap() -> Element {
    let ctx = use_context::<DashboardContext>();
    let selector = use_signal(move || build_selector(&ctx.config.peek()));

    match &*selector.read() {
        Ok(_) => rsx! { MapControls { selector } },
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: e.to_string() } },
    }
}

#[component]
fn MapControls(selector: Signal<Result<MapLayerSelector<TileSource>, DashboardError>>) -> Element {
    let ctx = use_context::<DashboardContext>();
    let map_config = ctx.config.read().main_map_config.clone();
    let mut zoom = use_signal(|| map_config.initial_zoom.round());
    let center = use_signal(|| (map_config.initial_lat, map_config.initial_lon));
    let mut display = use_signal(|| map_config.display);

    // every viewport change is evaluated, there is no debouncing
    use_effect(move || {
        let (lat, lon) = center();
        let view = view_state(lat, lon, zoom());
        if let Ok(selector) = selector.write().as_mut() {
            selector.on_viewport_change(&view);
        }
    });

    let min_max = use_tracked_request(move || {
        let _ = ctx.revision.read();
        let filters = ctx.filters.read().clone();
        let z = zoom().round() as u32;
        let aggregated = aggregation_mode(&selector.read()) == AggregationMode::Aggregated;
        let query = querystring::with_extra_params(&querystring::encode(&filters), &[("zoom", z.to_string())]);
        let future = async move {
            if aggregated { hexagon_min_max(filters, z).await } else { Ok(HexagonMinMax::default()) }
        };
        (query, future)
    });

    let selector_guard = selector.read();
    let Ok(layer_selector) = selector_guard.as_ref() else {
        return rsx! {};
    };
    let max_zoom = layer_selector.base_layer().map(|l| l.max_zoom as f64).unwrap_or(18.0);
    let z = zoom().round() as u32;
    let (lat, lon) = center();
    let (x, y) = tile_for(lat, lon, z);
    let mode = layer_selector.aggregation_mode();
    let filters = ctx.filters.read().clone();
    let filters_query = querystring::encode(&filters);
    // a new revision after mark-as-seen must reload tiles for unchanged filters
    let observation_tile_url = layer_selector.active_tile_url(z, x, y, &filters_query, *ctx.revision.read());
    let MapDisplayOptions { data_layer_opacity, show_area_outlines } = display();
    let area_overlays = display.read().area_overlays(&ctx.config.read().api_endpoints.areas_url_template, &filters.area_ids);
    let opacity_txt = format!("{}: {:.0}%", ctx.t("dataLayerOpacity"), data_layer_opacity * 100.0);
    let outlines_label = ctx.t("showAreaOutlines");
    let base_tile_url = layer_selector.base_layer().map(|l| fill_tile_template(l.url_template, z, x, y)).unwrap_or_default();
    let active_layer = layer_selector.base_layer_name().to_string();
    let layers = layer_selector
        .registry()
        .entries()
        .iter()
        .map(|entry| (entry.name.clone(), entry.layer.label, entry.name == active_layer))
        .collect::<Vec<_>>();

    let mode_label = match mode {
        AggregationMode::Aggregated => ctx.t("aggregated"),
        AggregationMode::Raw => ctx.t("raw"),
    };
    let hex_txt = format!("{}: {} m", ctx.t("hexagonSize"), hex_size_meters(zoom()));
    let zoom_txt = format!("{}: {z}", ctx.t("zoom"));
    let base_layer_label = ctx.t("baseLayer");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; background: white; border-radius: 8px; padding: 10px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
                Icon { icon: MdLayers, style: "width: 20px; height: 20px; color: rgb(75, 87, 112);" }
                label { "{base_layer_label}" }
                select {
                    onchange: move |e| {
                        if let Ok(selector) = selector.write().as_mut() {
                            let _ = selector.select_base_layer(&e.value());
                        }
                    },
                    for (name, label, selected) in layers {
                        option { key: "{name}", value: "{name}", selected, "{label}" }
                    }
                }
                div { style: "flex-grow: 1;" }
                button {
                    disabled: zoom() <= 0.0,
                    onclick: move |_| zoom.set((zoom() - 1.0).max(0.0)),
                    Icon { icon: MdZoomOut, style: "width: 20px; height: 20px;" }
                }
                span { "{zoom_txt}" }
                button {
                    disabled: zoom() >= max_zoom,
                    onclick: move |_| zoom.set((zoom() + 1.0).min(max_zoom)),
                    Icon { icon: MdZoomIn, style: "width: 20px; height: 20px;" }
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px;",
                img {
                    src: "{base_tile_url}",
                    width: "256",
                    height: "256",
                    style: "border: 1px solid rgba(0,0,0,0.2);",
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 6px; font-size: 13px; min-width: 0;",
                    div {
                        style: "display: flex; flex-direction: column; gap: 6px; opacity: {data_layer_opacity};",
                        b { "{mode_label}" }
                        code { style: "word-break: break-all; color: #6B7280;", "{observation_tile_url}" }
                        if mode == AggregationMode::Aggregated {
                            span { "{hex_txt}" }
                            HexagonLegend { min_max: min_max.read().as_ref().and_then(|r| r.as_ref().ok().copied()).unwrap_or_default() }
                        }
                    }
                    for (id, url) in area_overlays {
                        code { key: "{id}", style: "word-break: break-all; color: #2563EB;", "{url}" }
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px; font-size: 13px;",
                label { "{opacity_txt}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.05",
                    value: "{data_layer_opacity}",
                    oninput: move |e| {
                        if let Ok(opacity) = e.value().parse::<f64>() {
                            display.write().set_data_layer_opacity(opacity);
                        }
                    },
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: show_area_outlines,
                        onchange: move |e| display.write().show_area_outlines = e.checked(),
                    }
                    " {outlines_label}"
                }
            }
        }
    }
}

fn aggregation_mode(selector: &Result<MapLayerSelector<TileSource>, DashboardError>) -> AggregationMode {
    selector.as_ref().map(|s| s.aggregation_mode()).unwrap_or(AggregationMode::Aggregated)
}

#[component]
fn HexagonLegend(min_max: HexagonMinMax) -> Element {
    let HexagonMinMax { min: Some(min), max: Some(max) } = min_max else {
        return rsx! {};
    };
    let scale = HexagonColorScale::from_min_max(min, max);
    let span = max.saturating_sub(min);
    let steps = (0..LEGEND_STEPS)
        .map(|i| {
            let count = min + span * i / (LEGEND_STEPS - 1);
            (count, scale.color_for_count(count))
        })
        .collect::<Vec<_>>();
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 2px; align-items: center;",
            for (count, color) in steps {
                span {
                    key: "{count}",
                    style: "background-color: {color}; padding: 2px 6px; font-size: 11px;",
                    "{count}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_tile() {
        assert_eq!(tile_for(50.85, 4.35, 10), (524, 343));
        assert_eq!(tile_for(0.0, 0.0, 1), (1, 1));
        // clamped near the poles
        assert_eq!(tile_for(89.9, 179.99, 2), (3, 0));
    }

    #[test]
    fn viewport_follows_zoom() {
        let wide = view_state(50.0, 4.0, 2.0);
        let close = view_state(50.0, 4.0, 14.0);
        assert!(wide.visible_extent.max_x - wide.visible_extent.min_x > close.visible_extent.max_x - close.visible_extent.min_x);
        assert_eq!(close.zoom, 14.0);
    }

    #[test]
    fn configured_unknown_layer_falls_back() {
        let mut config = FrontEndConfig::default();
        config.main_map_config.base_layer = "watercolor".to_string();
        let selector = build_selector(&config).unwrap();
        assert_eq!(selector.base_layer_name(), DEFAULT_BASE_LAYER);
    }
}
