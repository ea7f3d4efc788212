use common::querystring;
use dioxus::prelude::*;

use crate::{
    api::observations_api::filtered_observations_count,
    data_definitions::{dashboard_context::DashboardContext, tracked_request::use_tracked_request},
};

#[component]
pub fn ObservationsCounter() -> Element {
    let ctx = use_context::<DashboardContext>();
    let count = use_tracked_request(move || {
        let _ = ctx.revision.read();
        let filters = ctx.filters.read().clone();
        (querystring::encode(&filters), filtered_observations_count(filters))
    });

    let suffix = ctx.t("observationsMatching");
    let count_txt = match count.read().as_ref() {
        None => "...".to_string(),
        Some(Ok(n)) => n.to_string(),
        Some(Err(e)) => {
            dioxus::logger::tracing::error!("observation counter failed: {e}");
            "?".to_string()
        }
    };
    rsx! {
        h1 {
            style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); margin: 0;",
            b { "{count_txt}" }
            " {suffix}"
        }
    }
}
