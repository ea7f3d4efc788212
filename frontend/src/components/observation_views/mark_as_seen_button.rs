use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdVisibility};

use crate::{api::observations_api::mark_observations_as_seen, data_definitions::dashboard_context::DashboardContext};

/// Marks everything matching the current filters as seen, then makes every
/// view refetch so that rows and tiles already on screen pick up the change.
#[component]
pub fn MarkAllAsSeenButton() -> Element {
    let ctx = use_context::<DashboardContext>();
    let mut in_progress = use_signal(|| false);

    let mark_all = move |_: MouseEvent| {
        if in_progress() {
            return;
        }
        in_progress.set(true);
        let filters = ctx.filters.peek().clone();
        spawn(async move {
            match mark_observations_as_seen(filters).await {
                Ok(_) => {
                    let toast_api = dioxus_primitives::toast::consume_toast();
                    toast_api.info(
                        ctx.t("markAsSeenQueued"),
                        dioxus_primitives::toast::ToastOptions::new()
                            .duration(Duration::from_secs(5))
                            .permanent(false),
                    );
                }
                Err(e) => dioxus::logger::tracing::error!("mark as seen failed: {e}"),
            }
            ctx.invalidate();
            in_progress.set(false);
        });
    };

    let label = ctx.t("markAllAsSeen");
    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 6px 12px;
                border: 1px solid rgb(75, 87, 112);
                border-radius: 8px;
                background: white;
                color: rgb(75, 87, 112);
                cursor: pointer;
            ",
            disabled: in_progress(),
            onclick: mark_all,
            Icon { icon: MdVisibility, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}
