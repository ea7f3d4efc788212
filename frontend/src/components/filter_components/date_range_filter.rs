use common::{
    date_codec::{format_filter_date, parse_filter_param, to_filter_param},
    filter_set::FilterSet,
};
use dioxus::prelude::*;

use crate::data_definitions::dashboard_context::DashboardContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeEnd {
    Start,
    End,
}

#[component]
pub fn DateRangeFilter() -> Element {
    let ctx = use_context::<DashboardContext>();
    let mut rejected = use_signal(|| None::<String>);

    let start_value = use_memo(move || format_filter_date(ctx.filters.read().start_date).unwrap_or_default());
    let end_value = use_memo(move || format_filter_date(ctx.filters.read().end_date).unwrap_or_default());

    let set_bound = Callback::new(move |(end, raw): (RangeEnd, String)| {
        // browsers report an empty string for a cleared date input
        let date = to_filter_param(Some(&raw)).and_then(|param| parse_filter_param(&param).ok());
        let result = ctx.update(move |f: &mut FilterSet| match end {
            RangeEnd::Start => f.set_date_range(date, f.end_date),
            RangeEnd::End => f.set_date_range(f.start_date, date),
        });
        rejected.set(result.err().map(|e| e.to_string()));
    });
    let title = ctx.t("dateRange");
    let from_label = ctx.t("from");
    let to_label = ctx.t("to");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; margin: 6px 10px; padding: 8px; border-radius: 8px; background: white;",
            span { style: "font-weight: 500; color: rgb(75, 87, 112);", "{title}" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center; font-size: 13px;",
                label { "{from_label}" }
                input {
                    r#type: "date",
                    value: "{start_value}",
                    oninput: move |e| set_bound.call((RangeEnd::Start, e.value())),
                }
                label { "{to_label}" }
                input {
                    r#type: "date",
                    value: "{end_value}",
                    oninput: move |e| set_bound.call((RangeEnd::End, e.value())),
                }
            }
            if let Some(error) = rejected() {
                span { style: "color: darkred; font-size: 12px;", "{error}" }
            }
        }
    }
}
