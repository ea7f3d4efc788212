//! Paged, sortable table of the filtered observations.

use common::{
    observations::{JsonObservation, ObservationsPage, TablePageRequest},
    querystring,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowDownward, MdArrowForward, MdArrowUpward}};

use crate::{
    api::observations_api::filtered_observations_page,
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::LoadingIndicator},
    data_definitions::{dashboard_context::DashboardContext, tracked_request::use_tracked_request},
};

#[component]
pub fn ObservationsTable() -> Element {
    let ctx = use_context::<DashboardContext>();
    let mut page_request = use_signal(TablePageRequest::default);

    // a new filter set starts over from the first page
    use_effect(move || {
        let _ = ctx.filters.read();
        if page_request.peek().page_number != 1 {
            page_request.write().page_number = 1;
        }
    });

    let page = use_tracked_request(move || {
        let _ = ctx.revision.read();
        let filters = ctx.filters.read().clone();
        let request = page_request.read().clone();
        let query = querystring::with_extra_params(&querystring::encode(&filters), &request.to_params());
        (query, filtered_observations_page(filters, request))
    });

    let sort_by = Callback::new(move |field: &'static str| page_request.write().toggle_order(field));
    let go_to_page = Callback::new(move |page_number: u64| page_request.write().page_number = page_number);

    let page = page.read();
    match page.as_ref() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! { ComponentErrorDisplay { error_txt: format!("{e:#?}") } },
        Some(Ok(page)) => rsx! {
            ObservationsTablePage { page: page.clone(), order: page_request.read().order.clone(), sort_by, go_to_page }
        },
    }
}

#[component]
fn ObservationsTablePage(
    page: ObservationsPage,
    order: String,
    sort_by: Callback<&'static str>,
    go_to_page: Callback<u64>,
) -> Element {
    let ctx = use_context::<DashboardContext>();
    let show_seen = ctx.authenticated();

    if page.results.is_empty() {
        let no_data = ctx.t("noData");
        return rsx! { p { style: "color: #6B7280; padding: 20px;", "{no_data}" } };
    }

    let page_number = page.page_number;
    let vernacular_label = ctx.t("vernacularName");
    let seen_label = ctx.t("seen");
    let page_txt = format!("{} {} / {} ({})", ctx.t("page"), page.page_number, page.last_page, page.total_results_count);
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; background: white; border-radius: 8px; padding: 8px;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        SortableHeader { field: "date", label: ctx.t("date"), order: order.clone(), sort_by }
                        SortableHeader { field: "species", label: ctx.t("scientificName"), order: order.clone(), sort_by }
                        th { style: "text-align: left;", "{vernacular_label}" }
                        SortableHeader { field: "source_dataset", label: ctx.t("dataset"), order: order.clone(), sort_by }
                        if show_seen {
                            th { style: "text-align: left;", "{seen_label}" }
                        }
                    }
                }
                tbody {
                    for observation in page.results.iter().cloned() {
                        ObservationRow { key: "{observation.stable_id}", observation: observation.clone(), show_seen }
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: center; gap: 16px;",
                button {
                    disabled: !page.has_previous(),
                    onclick: move |_| go_to_page.call(page_number - 1),
                    Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
                }
                span { style: "color: rgb(75, 87, 112);", "{page_txt}" }
                button {
                    disabled: !page.has_next(),
                    onclick: move |_| go_to_page.call(page_number + 1),
                    Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}

#[component]
fn SortableHeader(field: &'static str, label: String, order: String, sort_by: Callback<&'static str>) -> Element {
    let ascending = order == field;
    let descending = order.strip_prefix('-') == Some(field);
    rsx! {
        th {
            style: "text-align: left; cursor: pointer; white-space: nowrap;",
            onclick: move |_| sort_by.call(field),
            "{label}"
            if ascending {
                Icon { icon: MdArrowUpward, style: "width: 14px; height: 14px;" }
            }
            if descending {
                Icon { icon: MdArrowDownward, style: "width: 14px; height: 14px;" }
            }
        }
    }
}

#[component]
fn ObservationRow(observation: JsonObservation, show_seen: bool) -> Element {
    let ctx = use_context::<DashboardContext>();
    let details_url = ctx.config.read().api_endpoints.observation_details_url(&observation.stable_id);
    let weight = if observation.seen_by_current_user == Some(false) { "600" } else { "400" };
    let seen_mark = match observation.seen_by_current_user {
        Some(true) => "✓",
        _ => "",
    };
    rsx! {
        tr {
            style: "border-top: 1px solid rgba(0,0,0,0.08); font-weight: {weight};",
            td { a { href: "{details_url}", "{observation.date}" } }
            td { i { "{observation.scientific_name}" } }
            td { "{observation.vernacular_name}" }
            td { "{observation.dataset_name}" }
            if show_seen {
                td { "{seen_mark}" }
            }
        }
    }
}
