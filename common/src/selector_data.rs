//! Projection of backend list records into the uniform row shape of the
//! generic multi-select.
//!
//! The order of `column_data` is part of the contract: each `*_COLUMNS`
//! constant describes the same positions as the matching `prepare_*` function.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(i64),
    Text(String),
}

impl CellValue {
    pub fn as_display_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRow {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub column_data: Vec<CellValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Translation key of the column header.
    pub label: &'static str,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesInformation {
    pub id: u64,
    pub scientific_name: String,
    #[serde(default)]
    pub vernacular_name: String,
    pub gbif_taxon_key: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInformation {
    pub id: u64,
    pub gbif_key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaInformation {
    pub id: u64,
    pub name: String,
    pub is_user_specific: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataImportInformation {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub start_timestamp: DateTime<Utc>,
    pub imported_observations_counter: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub const SPECIES_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata { label: "scientificName", searchable: true },
    ColumnMetadata { label: "vernacularName", searchable: true },
    ColumnMetadata { label: "gbifTaxonKey", searchable: true },
];

pub const DATASETS_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata { label: "name", searchable: true },
    ColumnMetadata { label: "gbifKey", searchable: true },
];

pub const AREAS_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata { label: "name", searchable: true },
    ColumnMetadata { label: "type", searchable: false },
];

pub const DATA_IMPORTS_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata { label: "id", searchable: true },
    ColumnMetadata { label: "date", searchable: true },
    ColumnMetadata { label: "numberOfObservations", searchable: false },
];

pub fn prepare_species_data(species: &[SpeciesInformation]) -> Vec<DataRow> {
    species
        .iter()
        .map(|s| DataRow {
            id: s.id,
            tags: s.tags.clone(),
            column_data: vec![
                s.scientific_name.as_str().into(),
                s.vernacular_name.as_str().into(),
                s.gbif_taxon_key.into(),
            ],
        })
        .collect()
}

pub fn prepare_datasets_data(datasets: &[DatasetInformation]) -> Vec<DataRow> {
    datasets
        .iter()
        .map(|d| DataRow {
            id: d.id,
            tags: vec![],
            column_data: vec![d.name.as_str().into(), d.gbif_key.as_str().into()],
        })
        .collect()
}

/// `translate` maps the keys `"userSpecific"` / `"shared"` to display labels.
pub fn prepare_areas_data(areas: &[AreaInformation], translate: impl Fn(&str) -> String) -> Vec<DataRow> {
    areas
        .iter()
        .map(|a| {
            let kind = if a.is_user_specific { "userSpecific" } else { "shared" };
            DataRow {
                id: a.id,
                tags: a.tags.clone(),
                column_data: vec![a.name.as_str().into(), translate(kind).into()],
            }
        })
        .collect()
}

pub fn prepare_data_imports_data(imports: &[DataImportInformation]) -> Vec<DataRow> {
    imports
        .iter()
        .map(|i| DataRow {
            id: i.id,
            tags: i.tags.clone(),
            column_data: vec![
                (i.id as i64).into(),
                i.start_timestamp.format("%Y-%m-%d").to_string().into(),
                i.imported_observations_counter.into(),
            ],
        })
        .collect()
}

/// Case-insensitive substring match on the searchable columns only.
pub fn filter_rows<'a>(rows: &'a [DataRow], search: &str, columns: &[ColumnMetadata]) -> Vec<&'a DataRow> {
    let needle = search.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            needle.is_empty()
                || row.column_data.iter().zip(columns).any(|(cell, meta)| {
                    meta.searchable && cell.as_display_string().to_lowercase().contains(&needle)
                })
        })
        .collect()
}

pub fn available_tags(rows: &[DataRow]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn rows_with_tag<'a>(rows: &'a [DataRow], tag: &str) -> Vec<&'a DataRow> {
    rows.iter().filter(|row| row.tags.iter().any(|t| t == tag)).collect()
}

/// `None` when nothing is selected (the selector shows its "all" label then).
pub fn selection_summary(selected: &BTreeSet<u64>, rows: &[DataRow]) -> Option<String> {
    match selected.len() {
        0 => None,
        1 => {
            let id = selected.iter().next()?;
            let row = rows.iter().find(|r| r.id == *id)?;
            row.column_data.first().map(|c| c.as_display_string())
        }
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use pretty_assertions::assert_eq;

    fn frog() -> SpeciesInformation {
        SpeciesInformation {
            id: 1,
            scientific_name: "Rana".to_string(),
            vernacular_name: "Frog".to_string(),
            gbif_taxon_key: 42,
            tags: vec!["x".to_string()],
        }
    }

    #[test]
    fn species_column_order() {
        let rows = prepare_species_data(&[frog()]);
        assert_eq!(
            rows,
            vec![DataRow {
                id: 1,
                tags: vec!["x".to_string()],
                column_data: vec!["Rana".into(), "Frog".into(), 42_i64.into()],
            }]
        );
        assert_eq!(rows[0].column_data.len(), SPECIES_COLUMNS.len());
    }

    #[test]
    fn species_rows_serialize_like_the_selector_expects() {
        let json = serde_json::to_value(prepare_species_data(&[frog()])).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": 1, "tags": ["x"], "columnData": ["Rana", "Frog", 42]}])
        );
    }

    #[test]
    fn species_records_parse_from_the_api_shape() {
        let parsed: Vec<SpeciesInformation> = serde_json::from_str(
            r#"[{"id": 1, "scientificName": "Rana", "vernacularName": "Frog", "gbifTaxonKey": 42, "tags": ["x"], "groupCode": "AM"}]"#,
        )
        .unwrap();
        assert_eq!(parsed, vec![frog()]);
    }

    #[test]
    fn area_label_is_translated_by_the_adapter() {
        let areas = vec![
            AreaInformation { id: 3, name: "Meuse".to_string(), is_user_specific: false, tags: vec![] },
            AreaInformation { id: 4, name: "My garden".to_string(), is_user_specific: true, tags: vec![] },
        ];
        let rows = prepare_areas_data(&areas, |key| format!("t:{key}"));
        assert_eq!(rows[0].column_data, vec!["Meuse".into(), "t:shared".into()]);
        assert_eq!(rows[1].column_data, vec!["My garden".into(), "t:userSpecific".into()]);
        assert_eq!(rows[1].column_data.len(), AREAS_COLUMNS.len());
    }

    #[test]
    fn dataset_and_import_columns() {
        let datasets = vec![DatasetInformation { id: 8, gbif_key: "abc-123".to_string(), name: "Waarnemingen".to_string() }];
        assert_eq!(prepare_datasets_data(&datasets)[0].column_data, vec!["Waarnemingen".into(), "abc-123".into()]);

        let imports = vec![DataImportInformation {
            id: 5,
            name: "Data import #5".to_string(),
            start_timestamp: Utc.with_ymd_and_hms(2023, 8, 21, 10, 0, 0).unwrap(),
            imported_observations_counter: 1200,
            tags: vec![],
        }];
        let rows = prepare_data_imports_data(&imports);
        assert_eq!(rows[0].column_data, vec![5_i64.into(), "2023-08-21".into(), 1200_i64.into()]);
        assert_eq!(rows[0].column_data.len(), DATA_IMPORTS_COLUMNS.len());
    }

    #[test]
    fn search_only_looks_at_searchable_columns() {
        let areas = vec![AreaInformation { id: 3, name: "Meuse".to_string(), is_user_specific: false, tags: vec![] }];
        let rows = prepare_areas_data(&areas, |k| k.to_string());
        assert_eq!(filter_rows(&rows, "meu", AREAS_COLUMNS).len(), 1);
        assert_eq!(filter_rows(&rows, "shared", AREAS_COLUMNS).len(), 0);
        assert_eq!(filter_rows(&rows, "  ", AREAS_COLUMNS).len(), 1);

        let species = prepare_species_data(&[frog()]);
        assert_eq!(filter_rows(&species, "42", SPECIES_COLUMNS).len(), 1);
    }

    #[test]
    fn tags_and_summary() {
        let mut toad = frog();
        toad.id = 2;
        toad.scientific_name = "Bufo".to_string();
        toad.tags = vec!["y".to_string(), "x".to_string()];
        let rows = prepare_species_data(&[frog(), toad]);

        assert_eq!(available_tags(&rows), vec!["x".to_string(), "y".to_string()]);
        assert_eq!(rows_with_tag(&rows, "y").len(), 1);

        assert_eq!(selection_summary(&BTreeSet::new(), &rows), None);
        assert_eq!(selection_summary(&BTreeSet::from([2]), &rows), Some("Bufo".to_string()));
        assert_eq!(selection_summary(&BTreeSet::from([1, 2]), &rows), Some("2".to_string()));
    }
}
