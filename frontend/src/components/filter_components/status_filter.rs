use common::filter_set::ObservationStatus;
use dioxus::prelude::*;

use crate::data_definitions::dashboard_context::DashboardContext;

/// Seen/unseen only means something for a logged-in user.
#[component]
pub fn StatusFilter() -> Element {
    let ctx = use_context::<DashboardContext>();
    let status = use_memo(move || ctx.filters.read().status);

    let title = ctx.t("status");
    let options = [
        ("", ctx.t("all"), status().is_none()),
        (ObservationStatus::Unseen.as_str(), ctx.t("unseen"), status() == Some(ObservationStatus::Unseen)),
        (ObservationStatus::Seen.as_str(), ctx.t("seen"), status() == Some(ObservationStatus::Seen)),
    ];

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px; margin: 6px 10px; padding: 8px; border-radius: 8px; background: white;",
            span { style: "font-weight: 500; color: rgb(75, 87, 112); flex-grow: 1;", "{title}" }
            select {
                onchange: move |e| {
                    let _ = ctx.update(|f| f.set_status_str(&e.value()));
                },
                for (value, label, selected) in options {
                    option { key: "{value}", value, selected, "{label}" }
                }
            }
        }
    }
}
