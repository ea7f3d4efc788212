//! Query string wire format of a [`FilterSet`].
//!
//! Array dimensions use repeated bracketed keys (`speciesIds[]=1&speciesIds[]=2`),
//! scalars are plain `key=value`. A missing key means the dimension is not
//! filtered; `None` values are never written out as `key=`.

use std::collections::BTreeSet;

use crate::{
    date_codec::{format_filter_date, parse_filter_param},
    error::DashboardError,
    filter_set::{FilterSet, ObservationStatus},
};

pub const SPECIES_IDS_KEY: &str = "speciesIds[]";
pub const DATASETS_IDS_KEY: &str = "datasetsIds[]";
pub const AREA_IDS_KEY: &str = "areaIds[]";
pub const INITIAL_DATA_IMPORT_IDS_KEY: &str = "initialDataImportIds[]";
pub const START_DATE_KEY: &str = "startDate";
pub const END_DATE_KEY: &str = "endDate";
pub const STATUS_KEY: &str = "status";

fn push_array(pairs: &mut Vec<String>, key: &str, ids: &BTreeSet<u64>) {
    pairs.extend(ids.iter().map(|id| format!("{key}={id}")));
}

fn push_scalar(pairs: &mut Vec<String>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        pairs.push(format!("{key}={value}"));
    }
}

pub fn encode(filters: &FilterSet) -> String {
    let mut pairs = Vec::new();
    push_array(&mut pairs, SPECIES_IDS_KEY, &filters.species_ids);
    push_array(&mut pairs, DATASETS_IDS_KEY, &filters.dataset_ids);
    push_scalar(&mut pairs, START_DATE_KEY, format_filter_date(filters.start_date));
    push_scalar(&mut pairs, END_DATE_KEY, format_filter_date(filters.end_date));
    push_array(&mut pairs, AREA_IDS_KEY, &filters.area_ids);
    push_scalar(&mut pairs, STATUS_KEY, filters.status.map(|s| s.to_string()));
    push_array(&mut pairs, INITIAL_DATA_IMPORT_IDS_KEY, &filters.initial_data_import_ids);
    pairs.join("&")
}

pub fn decode(query: &str) -> FilterSet {
    decode_with_warnings(query).0
}

/// Bracket keys may arrive percent-encoded from array-aware JS serializers.
fn normalize_key(key: &str) -> String {
    let key = key.replace("%5B", "[").replace("%5D", "]");
    key.replace("%5b", "[").replace("%5d", "]")
}

fn is_null_value(value: &str) -> bool {
    value.is_empty() || value == "null"
}

/// Never aborts: every problem is reported as a warning and the offending
/// value is left out of the result.
pub fn decode_with_warnings(query: &str) -> (FilterSet, Vec<DashboardError>) {
    let mut filters = FilterSet::default();
    let mut warnings = Vec::new();

    let query = query.trim().trim_start_matches('?');
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let mut kv = pair.splitn(2, '=');
        let key = normalize_key(kv.next().unwrap_or(""));
        let value = kv.next().unwrap_or("");

        let (field, target) = match key.as_str() {
            SPECIES_IDS_KEY => ("speciesIds", &mut filters.species_ids),
            DATASETS_IDS_KEY | "datasetIds[]" => ("datasetsIds", &mut filters.dataset_ids),
            AREA_IDS_KEY => ("areaIds", &mut filters.area_ids),
            INITIAL_DATA_IMPORT_IDS_KEY => ("initialDataImportIds", &mut filters.initial_data_import_ids),
            START_DATE_KEY | END_DATE_KEY => {
                if is_null_value(value) {
                    continue;
                }
                match parse_filter_param(value) {
                    Ok(date) if key == START_DATE_KEY => filters.start_date = Some(date),
                    Ok(date) => filters.end_date = Some(date),
                    Err(e) => warnings.push(e),
                }
                continue;
            }
            STATUS_KEY => {
                if !is_null_value(value) {
                    match value.parse::<ObservationStatus>() {
                        Ok(status) => filters.status = Some(status),
                        Err(e) => warnings.push(e),
                    }
                }
                continue;
            }
            _ => continue,
        };
        match value.parse::<u64>() {
            Ok(id) => {
                target.insert(id);
            }
            Err(_) => warnings.push(DashboardError::invalid_value(field, value)),
        }
    }

    if let (Some(start), Some(end)) = (filters.start_date, filters.end_date) {
        if start > end {
            warnings.push(DashboardError::invalid_value("endDate", end));
            filters.end_date = None;
        }
    }

    for warning in &warnings {
        tracing::debug!("ignored query string value: {warning}");
    }
    (filters, warnings)
}

/// Shareable link to the dashboard with `filters` applied.
pub fn dashboard_url(base_path: &str, filters: &FilterSet) -> String {
    let query = encode(filters);
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

/// Appends non-filter parameters (paging, zoom, ...) to an encoded filter query.
pub fn with_extra_params(query: &str, extra: &[(&str, String)]) -> String {
    let mut pairs = Vec::new();
    if !query.is_empty() {
        pairs.push(query.to_string());
    }
    pairs.extend(extra.iter().map(|(k, v)| format!("{k}={v}")));
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> FilterSet {
        let mut f = FilterSet::default();
        f.set_species([2_u64, 1]).unwrap();
        f.set_datasets([9_u64]).unwrap();
        f.set_areas([4_u64]).unwrap();
        f.set_initial_data_imports([11_u64, 12]).unwrap();
        f.set_date_range(NaiveDate::from_ymd_opt(2021, 7, 31), NaiveDate::from_ymd_opt(2022, 1, 21)).unwrap();
        f.set_status(Some(ObservationStatus::Unseen));
        f
    }

    #[test]
    fn encodes_arrays_with_brackets_in_fixed_order() {
        assert_eq!(
            encode(&sample()),
            "speciesIds[]=1&speciesIds[]=2&datasetsIds[]=9&startDate=2021-07-31&endDate=2022-01-21\
             &areaIds[]=4&status=unseen&initialDataImportIds[]=11&initialDataImportIds[]=12"
        );
    }

    #[test]
    fn empty_filters_encode_to_nothing() {
        assert_eq!(encode(&FilterSet::default()), "");
        assert_eq!(dashboard_url("/", &FilterSet::default()), "/");
    }

    #[test]
    fn null_dates_are_absent() {
        let mut f = sample();
        f.set_date_range(None, NaiveDate::from_ymd_opt(2022, 1, 21)).unwrap();
        let qs = encode(&f);
        assert!(!qs.contains("startDate"));
        assert!(qs.contains("endDate=2022-01-21"));
    }

    #[test]
    fn round_trip() {
        let f = sample();
        assert_eq!(decode(&encode(&f)), f);
        assert_eq!(decode(&encode(&FilterSet::default())), FilterSet::default());
    }

    #[test]
    fn decoding_is_forgiving() {
        let (f, warnings) = decode_with_warnings(
            "?speciesIds%5B%5D=3&speciesIds[]=abc&foo=bar&datasetIds[]=5&startDate=2022-02-30&endDate=null&status=maybe",
        );
        assert_eq!(f.species_ids, BTreeSet::from([3]));
        assert_eq!(f.dataset_ids, BTreeSet::from([5]));
        assert_eq!(f.start_date, None);
        assert_eq!(f.end_date, None);
        assert_eq!(f.status, None);
        assert_eq!(
            warnings,
            vec![
                DashboardError::invalid_value("speciesIds", "abc"),
                DashboardError::InvalidDateFormat("2022-02-30".to_string()),
                DashboardError::invalid_value("status", "maybe"),
            ]
        );
    }

    #[test]
    fn inverted_range_drops_the_end_date() {
        let f = decode("startDate=2022-05-01&endDate=2022-01-01");
        assert_eq!(f.start_date, NaiveDate::from_ymd_opt(2022, 5, 1));
        assert_eq!(f.end_date, None);
    }

    #[test]
    fn extra_params_are_appended() {
        let mut f = FilterSet::default();
        f.set_species([1_u64]).unwrap();
        assert_eq!(
            with_extra_params(&encode(&f), &[("page_number", "2".to_string())]),
            "speciesIds[]=1&page_number=2"
        );
        assert_eq!(with_extra_params("", &[("zoom", "4".to_string())]), "zoom=4");
    }
}
