//! Left column: every filter dimension plus the shareable link.

use std::time::Duration;

use common::querystring::dashboard_url;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::{MdClear, MdFilterList}, md_editor_icons::MdInsertLink}};

use crate::{
    components::filter_components::{
        date_range_filter::DateRangeFilter,
        entity_selectors::{AreaSelector, DataImportSelector, DatasetSelector, SpeciesSelector},
        status_filter::StatusFilter,
    },
    data_definitions::dashboard_context::DashboardContext,
};

#[component]
pub fn FilterPanel() -> Element {
    let ctx = use_context::<DashboardContext>();
    let active = use_memo(move || ctx.filters.read().active_dimensions());

    let copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else { return };
        let origin = window.location().origin().unwrap_or_default();
        let url = format!("{origin}{}", dashboard_url("/", &ctx.filters.peek()));
        let _promise = window.navigator().clipboard().write_text(&url);
        dioxus::logger::tracing::info!("Link copied to clipboard: {}", url);

        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.info(
            ctx.t("linkCopied"),
            dioxus_primitives::toast::ToastOptions::new()
                .description(url)
                .duration(Duration::from_secs(10))
                .permanent(false),
        );
    });

    let title = format!("{} ({})", ctx.t("filters"), active());
    let clear_label = ctx.t("clearAll");
    let copy_label = ctx.t("copyLink");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; padding-bottom: 20px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; padding: 12px 10px;",
                Icon { icon: MdFilterList, style: "width: 22px; height: 22px; color: rgb(75, 87, 112);" }
                h2 { style: "font-size: 18px; font-weight: 400; color: rgb(75, 87, 112); margin: 0; flex-grow: 1;", "{title}" }
                button {
                    style: "border: 1px solid rgba(0,0,0,0.3); border-radius: 6px; background: white; cursor: pointer; padding: 4px;",
                    title: "{copy_label}",
                    onclick: move |_| copy_link.call(()),
                    Icon { icon: MdInsertLink, style: "width: 18px; height: 18px;" }
                }
                button {
                    style: "border: 1px solid rgba(0,0,0,0.3); border-radius: 6px; background: white; cursor: pointer; padding: 4px;",
                    title: "{clear_label}",
                    disabled: active() == 0,
                    onclick: move |_| {
                        let _ = ctx.update(|f| {
                            f.clear();
                            Ok(())
                        });
                    },
                    Icon { icon: MdClear, style: "width: 18px; height: 18px;" }
                }
            }
            SpeciesSelector {}
            DateRangeFilter {}
            AreaSelector {}
            DatasetSelector {}
            if ctx.authenticated() {
                StatusFilter {}
            }
            DataImportSelector {}
        }
    }
}
