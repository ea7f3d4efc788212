//! The canonical filter state shared by the map, table, counter and histogram.

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationStatus {
    Seen,
    Unseen,
}

impl ObservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seen => "seen",
            Self::Unseen => "unseen",
        }
    }
}

impl Display for ObservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seen" => Ok(Self::Seen),
            "unseen" => Ok(Self::Unseen),
            other => Err(DashboardError::invalid_value("status", other)),
        }
    }
}

/// Raw identifier input as it reaches the filter model: typed ids from code,
/// strings from form inputs.
pub trait IntoFilterId {
    fn into_filter_id(self, field: &'static str) -> Result<u64, DashboardError>;
}

impl IntoFilterId for u64 {
    fn into_filter_id(self, _field: &'static str) -> Result<u64, DashboardError> {
        Ok(self)
    }
}

impl IntoFilterId for u32 {
    fn into_filter_id(self, _field: &'static str) -> Result<u64, DashboardError> {
        Ok(self as u64)
    }
}

impl IntoFilterId for i64 {
    fn into_filter_id(self, field: &'static str) -> Result<u64, DashboardError> {
        u64::try_from(self).map_err(|_| DashboardError::invalid_value(field, self))
    }
}

impl IntoFilterId for i32 {
    fn into_filter_id(self, field: &'static str) -> Result<u64, DashboardError> {
        (self as i64).into_filter_id(field)
    }
}

impl IntoFilterId for &str {
    fn into_filter_id(self, field: &'static str) -> Result<u64, DashboardError> {
        self.trim().parse::<u64>().map_err(|_| DashboardError::invalid_value(field, self))
    }
}

impl IntoFilterId for String {
    fn into_filter_id(self, field: &'static str) -> Result<u64, DashboardError> {
        self.as_str().into_filter_id(field)
    }
}

fn collect_ids<I, T>(field: &'static str, ids: I) -> Result<BTreeSet<u64>, DashboardError>
where
    I: IntoIterator<Item = T>,
    T: IntoFilterId,
{
    ids.into_iter().map(|id| id.into_filter_id(field)).collect()
}

/// All active filter dimensions. An empty set or `None` means "no filter on that dimension".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSet {
    pub species_ids: BTreeSet<u64>,
    pub dataset_ids: BTreeSet<u64>,
    pub area_ids: BTreeSet<u64>,
    pub initial_data_import_ids: BTreeSet<u64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ObservationStatus>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_species<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.species_ids = collect_ids("speciesIds", ids)?;
        Ok(())
    }

    pub fn set_datasets<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.dataset_ids = collect_ids("datasetsIds", ids)?;
        Ok(())
    }

    pub fn set_areas<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.area_ids = collect_ids("areaIds", ids)?;
        Ok(())
    }

    pub fn set_initial_data_imports<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.initial_data_import_ids = collect_ids("initialDataImportIds", ids)?;
        Ok(())
    }

    /// Both bounds are inclusive; `start > end` is rejected.
    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), DashboardError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DashboardError::invalid_value("dateRange", format!("{s} > {e}")));
            }
        }
        self.start_date = start;
        self.end_date = end;
        Ok(())
    }

    pub fn set_status(&mut self, status: Option<ObservationStatus>) {
        self.status = status;
    }

    /// Form-input variant: `""` and `"null"` clear the status filter.
    pub fn set_status_str(&mut self, status: &str) -> Result<(), DashboardError> {
        let status = match status {
            "" | "null" => None,
            s => Some(s.parse::<ObservationStatus>()?),
        };
        self.status = status;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.active_dimensions() == 0
    }

    /// Number of dimensions currently filtering; the date range counts once.
    pub fn active_dimensions(&self) -> usize {
        [
            !self.species_ids.is_empty(),
            !self.dataset_ids.is_empty(),
            !self.area_ids.is_empty(),
            !self.initial_data_import_ids.is_empty(),
            self.start_date.is_some() || self.end_date.is_some(),
            self.status.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn mutations_replace_the_whole_field() {
        let mut f = FilterSet::new();
        f.set_species([1_u64, 2, 3]).unwrap();
        f.set_species([7_u64]).unwrap();
        assert_eq!(f.species_ids, BTreeSet::from([7]));
    }

    #[test]
    fn string_ids_from_form_inputs_are_accepted() {
        let mut f = FilterSet::new();
        f.set_datasets(["4", " 12 "]).unwrap();
        assert_eq!(f.dataset_ids, BTreeSet::from([4, 12]));
    }

    #[test]
    fn malformed_id_is_rejected_and_state_kept() {
        let mut f = FilterSet::new();
        f.set_areas([5_u64]).unwrap();

        let err = f.set_areas(["6", "six"]).unwrap_err();
        assert_eq!(err, DashboardError::invalid_value("areaIds", "six"));
        assert_eq!(f.area_ids, BTreeSet::from([5]));

        assert!(f.set_initial_data_imports([3_i64, -1]).is_err());
        assert!(f.initial_data_import_ids.is_empty());
    }

    #[test]
    fn inverted_date_range_is_rejected() {
        let mut f = FilterSet::new();
        f.set_date_range(Some(date(2022, 1, 1)), Some(date(2022, 2, 1))).unwrap();

        assert!(f.set_date_range(Some(date(2023, 1, 1)), Some(date(2022, 1, 1))).is_err());
        assert_eq!(f.start_date, Some(date(2022, 1, 1)));
        assert_eq!(f.end_date, Some(date(2022, 2, 1)));

        // open-ended ranges are fine
        f.set_date_range(None, Some(date(2020, 5, 5))).unwrap();
        assert_eq!(f.start_date, None);
    }

    #[test]
    fn status_strings() {
        let mut f = FilterSet::new();
        f.set_status_str("seen").unwrap();
        assert_eq!(f.status, Some(ObservationStatus::Seen));
        f.set_status_str("null").unwrap();
        assert_eq!(f.status, None);
        assert!(f.set_status_str("maybe").is_err());
    }

    #[test]
    fn active_dimensions_counts_date_range_once() {
        let mut f = FilterSet::new();
        assert!(f.is_empty());
        f.set_date_range(Some(date(2022, 1, 1)), Some(date(2022, 2, 1))).unwrap();
        f.set_status(Some(ObservationStatus::Unseen));
        assert_eq!(f.active_dimensions(), 2);
        f.clear();
        assert!(f.is_empty());
    }
}
