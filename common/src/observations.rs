//! JSON shapes returned by the observation API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonObservation {
    pub id: u64,
    pub stable_id: String,
    pub gbif_id: String,
    pub lat: f64,
    pub lon: f64,
    pub date: String,
    #[serde(alias = "speciesName")]
    pub scientific_name: String,
    #[serde(default)]
    pub vernacular_name: String,
    pub dataset_name: String,
    /// Only present for authenticated users.
    #[serde(default, alias = "viewedByCurrentUser", skip_serializing_if = "Option::is_none")]
    pub seen_by_current_user: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationsPage {
    pub results: Vec<JsonObservation>,
    pub page_number: u64,
    pub first_page: u64,
    pub last_page: u64,
    pub total_results_count: u64,
}

impl ObservationsPage {
    pub fn has_previous(&self) -> bool {
        self.page_number > self.first_page
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.last_page
    }
}

/// Sort column and page of the observations table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePageRequest {
    pub page_number: u64,
    pub page_size: u64,
    /// Field name, `-` prefix for descending order.
    pub order: String,
}

pub const DEFAULT_TABLE_PAGE_SIZE: u64 = 20;

impl Default for TablePageRequest {
    fn default() -> Self {
        Self { page_number: 1, page_size: DEFAULT_TABLE_PAGE_SIZE, order: "-date".to_string() }
    }
}

impl TablePageRequest {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("order", self.order.clone()),
            ("limit", self.page_size.to_string()),
            ("page_number", self.page_number.to_string()),
        ]
    }

    /// Clicking the active column flips its direction, another column sorts ascending.
    pub fn toggle_order(&mut self, field: &str) {
        self.order = match self.order.strip_prefix('-') {
            Some(current) if current == field => field.to_string(),
            None if self.order == field => format!("-{field}"),
            _ => field.to_string(),
        };
        self.page_number = 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationsCount {
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HexagonMinMax {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAsSeenReply {
    pub queued: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_page_from_the_api() {
        let page: ObservationsPage = serde_json::from_str(
            r#"{
              "results": [{
                  "id": 1130128,
                  "stableId": "58b86259157a6c9bd98f6fc8025bc51a796fdf7d",
                  "gbifId": "4399020308",
                  "lat": 50.62886099999997,
                  "lon": 4.453551,
                  "scientificName": "Vespa Velutina",
                  "vernacularName": "",
                  "datasetName": "DEMNA-DNE",
                  "date": "2023-08-21",
                  "seenByCurrentUser": false
              }],
              "pageNumber": 1, "firstPage": 1, "lastPage": 44436, "totalResultsCount": 133306
            }"#,
        )
        .unwrap();
        assert_eq!(page.results[0].seen_by_current_user, Some(false));
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn older_field_names_are_accepted() {
        let obs: JsonObservation = serde_json::from_str(
            r#"{"id": 1, "stableId": "s", "gbifId": "9", "lat": 0.0, "lon": 0.0, "date": "2021-01-01",
                "speciesName": "Rana", "datasetName": "d", "viewedByCurrentUser": true}"#,
        )
        .unwrap();
        assert_eq!(obs.scientific_name, "Rana");
        assert_eq!(obs.seen_by_current_user, Some(true));
    }

    #[test]
    fn order_toggling() {
        let mut req = TablePageRequest { page_number: 4, ..Default::default() };
        req.toggle_order("date");
        assert_eq!(req.order, "date");
        assert_eq!(req.page_number, 1);
        req.toggle_order("date");
        assert_eq!(req.order, "-date");
        req.toggle_order("species");
        assert_eq!(req.order, "species");
    }

    #[test]
    fn empty_grid_min_max() {
        let mm: HexagonMinMax = serde_json::from_str(r#"{"min": null, "max": null}"#).unwrap();
        assert_eq!(mm, HexagonMinMax::default());
    }
}
