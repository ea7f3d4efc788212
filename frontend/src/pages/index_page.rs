use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdTableChart, md_maps_icons::MdMap}};

use common::{config::FrontEndConfig, filter_set::FilterSet, filter_store::FilterStore};
use crate::{
    api::observations_api::get_frontend_config,
    components::{
        error_boundary::ComponentErrorDisplay,
        filter_components::filter_panel::FilterPanel,
        observation_views::{
            mark_as_seen_button::MarkAllAsSeenButton, observations_counter::ObservationsCounter,
            observations_histogram::ObservationsHistogram, observations_map::ObservationsMap,
            observations_table::ObservationsTable,
        },
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::{dashboard_context::DashboardContext, filter_query::FilterQuery},
    routes::Route,
};

/// Dashboard page
#[component]
pub fn IndexPage(filters: FilterQuery) -> Element {
    let config = use_resource(move || get_frontend_config());
    let active = filters.0.active_dimensions();

    let config = config.read();
    let root = match config.as_ref() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! { ComponentErrorDisplay { error_txt: format!("{e:#?}") } },
        Some(Ok(config)) => rsx! {
            DashboardRoot { route_filters: filters.0.clone(), config: config.clone() }
        },
    };
    rsx! {
        Title { "GBIF Alert: observations ({active} filters)" }
        {root}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Map,
    Table,
}

/// Builds the page's filter store from the URL and keeps both in sync.
#[component]
fn DashboardRoot(route_filters: ReadSignal<FilterSet>, config: ReadSignal<FrontEndConfig>) -> Element {
    let mut published = use_signal(|| (route_filters.peek().clone(), 0_u64));
    let mut store = use_signal(move || {
        let mut store = FilterStore::new(route_filters.peek().clone());
        store.subscribe(move |filters, revision| published.set((filters.clone(), revision)));
        store
    });
    let filters = use_memo(move || published.read().0.clone());
    let revision = use_memo(move || published.read().1);

    // back/forward navigation and edited links
    use_effect(move || {
        let from_route = route_filters.read().clone();
        if &from_route != store.peek().filters() {
            store.write().replace(from_route);
        }
    });
    // filter changes become history entries, so every state can be shared
    use_effect(move || {
        let current = filters();
        if current != *route_filters.peek() {
            navigator().push(Route::index_page_from_filters(current));
        }
    });

    let context = use_context_provider(move || DashboardContext {
        store,
        filters: filters.into(),
        revision: revision.into(),
        config,
    });

    let mut tab = use_signal(|| DashboardTab::Map);

    rsx! {
        div {
            id: "x-dashboard-root",
            style: "
                display: flex;
                flex-direction: row;
                height: 100%;
                width: 100%;
            ",
            div {
                id: "x-dashboard-filter-panel",
                style: "
                    width: 340px;
                    min-width: 280px;
                    height: 100%;
                    overflow-y: auto;
                    background-color: #ECEEF2;
                    border-right: 1px solid rgb(164, 164, 164);
                ",
                SuspendWrapper { FilterPanel {} }
            }
            div {
                id: "x-dashboard-views",
                style: "
                    flex-grow: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                    padding: 10px;
                    min-width: 400px;
                    overflow-y: auto;
                ",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
                    ObservationsCounter {}
                    div { style: "flex-grow: 1;" }
                    if context.authenticated() {
                        MarkAllAsSeenButton {}
                    }
                }
                div {
                    style: "display: flex; flex-direction: row; gap: 4px; border-bottom: 1px solid rgb(75, 87, 112);",
                    TabButton {
                        label: context.t("map"),
                        active: tab() == DashboardTab::Map,
                        onclick: move |_| tab.set(DashboardTab::Map),
                        Icon { icon: MdMap, style: "width: 20px; height: 20px;" }
                    }
                    TabButton {
                        label: context.t("table"),
                        active: tab() == DashboardTab::Table,
                        onclick: move |_| tab.set(DashboardTab::Table),
                        Icon { icon: MdTableChart, style: "width: 20px; height: 20px;" }
                    }
                }
                // both views stay mounted so that switching tabs does not refetch
                div {
                    style: if tab() == DashboardTab::Map { "display: block;" } else { "display: none;" },
                    SuspendWrapper { ObservationsMap {} }
                }
                div {
                    style: if tab() == DashboardTab::Table { "display: block;" } else { "display: none;" },
                    SuspendWrapper { ObservationsTable {} }
                }
                SuspendWrapper { ObservationsHistogram {} }
            }
        }
    }
}

#[component]
fn TabButton(label: String, active: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let background = if active { "white" } else { "transparent" };
    let weight = if active { "500" } else { "300" };
    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 8px 16px;
                border: 1px solid rgb(164, 164, 164);
                border-bottom: none;
                border-radius: 8px 8px 0 0;
                cursor: pointer;
                background: {background};
                font-weight: {weight};
                color: rgb(75, 87, 112);
            ",
            onclick: move |e| onclick.call(e),
            {children}
            "{label}"
        }
    }
}
