//! One multi-select per entity filter, fed by the backend lists.

use std::collections::BTreeSet;

use common::selector_data::{
    AREAS_COLUMNS, ColumnMetadata, DATA_IMPORTS_COLUMNS, DATASETS_COLUMNS, DataRow, SPECIES_COLUMNS, prepare_areas_data,
    prepare_data_imports_data, prepare_datasets_data, prepare_species_data,
};
use dioxus::prelude::*;

use crate::{
    api::observations_api::{list_areas, list_data_imports, list_datasets, list_species},
    components::{error_boundary::ComponentErrorDisplay, filter_components::multi_select::MultiSelect},
    data_definitions::dashboard_context::DashboardContext,
};

/// Shows the list once loaded, or its loading error in place of the selector.
#[component]
fn EntitySelector(
    title: String,
    rows: ReadSignal<Option<Result<Vec<DataRow>, String>>>,
    columns: &'static [ColumnMetadata],
    selected: ReadSignal<BTreeSet<u64>>,
    on_change: Callback<BTreeSet<u64>>,
) -> Element {
    let loaded = use_memo(move || match rows.read().as_ref() {
        Some(Ok(rows)) => rows.clone(),
        _ => Vec::new(),
    });
    let error = rows.read().as_ref().and_then(|r| r.as_ref().err().cloned());
    rsx! {
        if let Some(error_txt) = error {
            ComponentErrorDisplay { error_txt }
        } else {
            MultiSelect { title, rows: loaded, columns, selected, on_change }
        }
    }
}

#[component]
pub fn SpeciesSelector() -> Element {
    let ctx = use_context::<DashboardContext>();
    let species = use_resource(move || list_species());
    let rows = use_memo(move || species.read().as_ref().map(|r| r.as_ref().map(|s| prepare_species_data(s)).map_err(|e| e.to_string())));
    let selected = use_memo(move || ctx.filters.read().species_ids.clone());
    let on_change = Callback::new(move |ids: BTreeSet<u64>| {
        let _ = ctx.update(|f| f.set_species(ids));
    });
    rsx! {
        EntitySelector { title: ctx.t("species"), rows, columns: SPECIES_COLUMNS, selected, on_change }
    }
}

#[component]
pub fn DatasetSelector() -> Element {
    let ctx = use_context::<DashboardContext>();
    let datasets = use_resource(move || list_datasets());
    let rows = use_memo(move || datasets.read().as_ref().map(|r| r.as_ref().map(|d| prepare_datasets_data(d)).map_err(|e| e.to_string())));
    let selected = use_memo(move || ctx.filters.read().dataset_ids.clone());
    let on_change = Callback::new(move |ids: BTreeSet<u64>| {
        let _ = ctx.update(|f| f.set_datasets(ids));
    });
    rsx! {
        EntitySelector { title: ctx.t("datasets"), rows, columns: DATASETS_COLUMNS, selected, on_change }
    }
}

#[component]
pub fn AreaSelector() -> Element {
    let ctx = use_context::<DashboardContext>();
    let areas = use_resource(move || list_areas());
    let rows = use_memo(move || {
        areas.read().as_ref().map(|r| r.as_ref().map(|a| prepare_areas_data(a, |key| ctx.t(key))).map_err(|e| e.to_string()))
    });
    let selected = use_memo(move || ctx.filters.read().area_ids.clone());
    let on_change = Callback::new(move |ids: BTreeSet<u64>| {
        let _ = ctx.update(|f| f.set_areas(ids));
    });
    rsx! {
        EntitySelector { title: ctx.t("areas"), rows, columns: AREAS_COLUMNS, selected, on_change }
    }
}

#[component]
pub fn DataImportSelector() -> Element {
    let ctx = use_context::<DashboardContext>();
    let imports = use_resource(move || list_data_imports());
    let rows = use_memo(move || {
        imports.read().as_ref().map(|r| r.as_ref().map(|i| prepare_data_imports_data(i)).map_err(|e| e.to_string()))
    });
    let selected = use_memo(move || ctx.filters.read().initial_data_import_ids.clone());
    let on_change = Callback::new(move |ids: BTreeSet<u64>| {
        let _ = ctx.update(|f| f.set_initial_data_imports(ids));
    });
    rsx! {
        EntitySelector { title: ctx.t("dataImports"), rows, columns: DATA_IMPORTS_COLUMNS, selected, on_change }
    }
}
