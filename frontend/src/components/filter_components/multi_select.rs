//! Searchable, taggable multi-select shared by all entity filters.

use std::collections::BTreeSet;

use common::{
    selector_data::{ColumnMetadata, DataRow, available_tags, filter_rows, rows_with_tag, selection_summary},
    tag_color::{color_for, legible_color},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdClear, md_navigation_icons::{MdArrowDropDown, MdArrowDropUp}}};

use crate::data_definitions::dashboard_context::DashboardContext;

#[component]
pub fn MultiSelect(
    title: String,
    rows: ReadSignal<Vec<DataRow>>,
    columns: &'static [ColumnMetadata],
    selected: ReadSignal<BTreeSet<u64>>,
    on_change: Callback<BTreeSet<u64>>,
) -> Element {
    let ctx = use_context::<DashboardContext>();
    let mut is_expanded = use_signal(|| false);
    let mut search = use_signal(String::new);

    let summary = use_memo(move || selection_summary(&selected.read(), &rows.read()));
    let visible_rows = use_memo(move || {
        let rows = rows.read();
        filter_rows(&rows, &search.read(), columns).into_iter().cloned().collect::<Vec<_>>()
    });
    let tags = use_memo(move || available_tags(&rows.read()));

    let toggle = Callback::new(move |id: u64| {
        let mut next = selected.peek().clone();
        if !next.remove(&id) {
            next.insert(id);
        }
        on_change.call(next);
    });
    let select_tag = Callback::new(move |tag: String| {
        let mut next = selected.peek().clone();
        next.extend(rows_with_tag(&rows.peek(), &tag).into_iter().map(|row| row.id));
        on_change.call(next);
    });

    let summary_txt = summary().unwrap_or_else(|| ctx.t("all"));
    let clear_txt = ctx.t("none");
    let select_tag_txt = ctx.t("selectTag");
    let has_selection = !selected.read().is_empty();
    let border_color = if has_selection { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.3)" };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                margin: 6px 10px;
                border: 1px solid {border_color};
                border-radius: 8px;
                background: white;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 6px; padding: 8px; cursor: pointer;",
                onclick: move |_| *is_expanded.write() ^= true,
                span { style: "font-weight: 500; color: rgb(75, 87, 112);", "{title}" }
                span { style: "flex-grow: 1; text-align: right; color: #111827; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{summary_txt}" }
                if has_selection {
                    button {
                        style: "border: none; background: transparent; cursor: pointer; padding: 0;",
                        title: "{clear_txt}",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_change.call(BTreeSet::new());
                        },
                        Icon { icon: MdClear, style: "width: 18px; height: 18px;" }
                    }
                }
                if is_expanded() {
                    Icon { icon: MdArrowDropUp, style: "width: 22px; height: 22px;" }
                } else {
                    Icon { icon: MdArrowDropDown, style: "width: 22px; height: 22px;" }
                }
            }
            if is_expanded() {
                div {
                    style: "display: flex; flex-direction: column; gap: 6px; padding: 8px; border-top: 1px solid rgba(0,0,0,0.1);",
                    input {
                        r#type: "text",
                        placeholder: ctx.t("search"),
                        value: "{search}",
                        style: "border: 1px solid rgba(0,0,0,0.3); border-radius: 6px; padding: 4px 8px;",
                        oninput: move |e| search.set(e.value()),
                    }
                    if !tags.read().is_empty() {
                        div {
                            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 4px; align-items: center;",
                            span { style: "font-size: 12px; color: #6B7280;", "{select_tag_txt}:" }
                            for tag in tags.read().iter().cloned() {
                                TagBadge { key: "{tag}", tag: tag.clone(), on_select: select_tag }
                            }
                        }
                    }
                    div {
                        style: "max-height: 260px; overflow-y: auto;",
                        table {
                            style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                            thead {
                                tr {
                                    th {}
                                    for column in columns.iter() {
                                        th { style: "text-align: left; color: #6B7280; font-weight: 400;", "{ctx.t(column.label)}" }
                                    }
                                    th {}
                                }
                            }
                            tbody {
                                for row in visible_rows.read().iter().cloned() {
                                    SelectableRow {
                                        key: "{row.id}",
                                        checked: selected.read().contains(&row.id),
                                        row: row.clone(),
                                        on_toggle: toggle,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SelectableRow(row: DataRow, checked: bool, on_toggle: Callback<u64>) -> Element {
    let id = row.id;
    let background = if checked { "#EEF2FF" } else { "transparent" };
    rsx! {
        tr {
            style: "cursor: pointer; background: {background};",
            onclick: move |_| on_toggle.call(id),
            td {
                input { r#type: "checkbox", checked, readonly: true }
            }
            for (i, cell) in row.column_data.iter().enumerate() {
                td { key: "{i}", "{cell.as_display_string()}" }
            }
            td {
                for tag in row.tags.iter().cloned() {
                    TagBadge { key: "{tag}", tag: tag.clone() }
                }
            }
        }
    }
}

/// Tag chip colored from the tag text.
#[component]
pub fn TagBadge(tag: String, on_select: Option<Callback<String>>) -> Element {
    let background = color_for(&tag);
    let color = legible_color(&background);
    let cursor = if on_select.is_some() { "pointer" } else { "default" };
    let label = tag.clone();
    rsx! {
        span {
            style: "
                display: inline-block;
                margin: 1px;
                padding: 1px 6px;
                border-radius: 9999px;
                font-size: 11px;
                background-color: {background};
                color: {color};
                cursor: {cursor};
            ",
            onclick: move |e| {
                if let Some(on_select) = on_select {
                    e.stop_propagation();
                    on_select.call(tag.clone());
                }
            },
            "{label}"
        }
    }
}
