use common::{histogram::fill_gaps, querystring};
use dioxus::prelude::*;

use crate::{
    api::observations_api::filtered_observations_histogram,
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::LoadingIndicator},
    data_definitions::{dashboard_context::DashboardContext, tracked_request::use_tracked_request},
};

const CHART_HEIGHT_PX: u64 = 120;

#[component]
pub fn ObservationsHistogram() -> Element {
    let ctx = use_context::<DashboardContext>();
    let buckets = use_tracked_request(move || {
        let _ = ctx.revision.read();
        let filters = ctx.filters.read().clone();
        (querystring::encode(&filters), filtered_observations_histogram(filters))
    });
    let bars = use_memo(move || match buckets.read().as_ref() {
        Some(Ok(buckets)) => fill_gaps(buckets),
        _ => Vec::new(),
    });

    let title = ctx.t("histogram");
    let body = match buckets.read().as_ref() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! { ComponentErrorDisplay { error_txt: format!("{e:#?}") } },
        Some(Ok(_)) if bars.read().is_empty() => {
            let no_data = ctx.t("noData");
            rsx! { p { style: "color: #6B7280;", "{no_data}" } }
        }
        Some(Ok(_)) => {
            let bars = bars.read();
            let max = bars.iter().map(|b| b.count).max().unwrap_or(1).max(1);
            let columns = bars
                .iter()
                .map(|b| (b.year_month.clone(), b.count, b.count * CHART_HEIGHT_PX / max))
                .collect::<Vec<_>>();
            let first = bars.first().map(|b| b.year_month.clone()).unwrap_or_default();
            let last = bars.last().map(|b| b.year_month.clone()).unwrap_or_default();
            rsx! {
                div {
                    style: "display: flex; flex-direction: row; align-items: flex-end; gap: 1px; height: {CHART_HEIGHT_PX}px;",
                    for (year_month, count, height) in columns {
                        div {
                            key: "{year_month}",
                            title: "{year_month}: {count}",
                            style: "flex: 1; min-width: 2px; background: #3B82F6; height: {height}px;",
                        }
                    }
                }
                div {
                    style: "display: flex; flex-direction: row; justify-content: space-between; font-size: 12px; color: #6B7280;",
                    span { "{first}" }
                    span { "{last}" }
                }
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; background: white; border-radius: 8px; padding: 10px;",
            h2 { style: "font-size: 16px; font-weight: 400; color: rgb(75, 87, 112); margin: 0;", "{title}" }
            {body}
        }
    }
}
