//! Monthly buckets for the observations bar chart.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    /// `YYYY-MM`, fixed width so that lexicographic order is chronological.
    pub year_month: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawHistogramEntry<D> {
    pub timestamp: D,
    pub count: u64,
}

/// Entry of the monthly histogram endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramDataEntry {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

const KEY_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// `None` for years that do not fit the four-digit key.
fn year_month_key(year: i32, month: u32) -> Option<String> {
    KEY_YEARS.contains(&year).then(|| format!("{year:04}-{month:02}"))
}

fn into_buckets(sums: BTreeMap<String, u64>) -> Vec<HistogramBucket> {
    sums.into_iter().map(|(year_month, count)| HistogramBucket { year_month, count }).collect()
}

/// Sums counts per (year, month). Months without entries are not synthesized,
/// entries outside years 0 to 9999 are dropped.
pub fn bucket<D: Datelike>(entries: &[RawHistogramEntry<D>]) -> Vec<HistogramBucket> {
    let mut sums = BTreeMap::new();
    for entry in entries {
        let Some(key) = year_month_key(entry.timestamp.year(), entry.timestamp.month()) else {
            tracing::warn!("skipping histogram entry with year {}", entry.timestamp.year());
            continue;
        };
        *sums.entry(key).or_insert(0) += entry.count;
    }
    into_buckets(sums)
}

pub fn bucket_monthly(entries: &[HistogramDataEntry]) -> Vec<HistogramBucket> {
    let mut sums = BTreeMap::new();
    for entry in entries {
        if !(1..=12).contains(&entry.month) {
            tracing::warn!("skipping histogram entry with month {}", entry.month);
            continue;
        }
        let Some(key) = year_month_key(entry.year, entry.month) else {
            tracing::warn!("skipping histogram entry with year {}", entry.year);
            continue;
        };
        *sums.entry(key).or_insert(0) += entry.count;
    }
    into_buckets(sums)
}

fn parse_year_month(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.split_once('-')?;
    Some((year.parse().ok()?, month.parse().ok()?))
}

/// Dense month axis from the first to the last bucket, missing months at 0.
pub fn fill_gaps(buckets: &[HistogramBucket]) -> Vec<HistogramBucket> {
    let (Some(first), Some(last)) = (buckets.first(), buckets.last()) else {
        return Vec::new();
    };
    let (Some((mut year, mut month)), Some(end)) = (parse_year_month(&first.year_month), parse_year_month(&last.year_month))
    else {
        return buckets.to_vec();
    };

    let counts: BTreeMap<&str, u64> = buckets.iter().map(|b| (b.year_month.as_str(), b.count)).collect();
    let mut dense = Vec::new();
    while (year, month) <= end {
        let Some(key) = year_month_key(year, month) else {
            break;
        };
        let count = counts.get(key.as_str()).copied().unwrap_or(0);
        dense.push(HistogramBucket { year_month: key, count });
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    dense
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(y: i32, m: u32, d: u32, count: u64) -> RawHistogramEntry<NaiveDate> {
        RawHistogramEntry { timestamp: NaiveDate::from_ymd_opt(y, m, d).unwrap(), count }
    }

    fn b(year_month: &str, count: u64) -> HistogramBucket {
        HistogramBucket { year_month: year_month.to_string(), count }
    }

    #[test]
    fn empty_input_gives_no_buckets() {
        assert_eq!(bucket::<NaiveDate>(&[]), vec![]);
        assert_eq!(fill_gaps(&[]), vec![]);
    }

    #[test]
    fn buckets_are_sparse_and_sorted() {
        let entries = [entry(2022, 3, 1, 1), entry(2022, 1, 5, 3), entry(2022, 1, 20, 2)];
        assert_eq!(bucket(&entries), vec![b("2022-01", 5), b("2022-03", 1)]);
    }

    #[test]
    fn lexicographic_order_crosses_years() {
        let entries = [entry(2023, 1, 1, 1), entry(2022, 12, 31, 1), entry(999, 6, 1, 4)];
        assert_eq!(bucket(&entries), vec![b("0999-06", 4), b("2022-12", 1), b("2023-01", 1)]);
    }

    #[test]
    fn api_entries() {
        let entries = [
            HistogramDataEntry { year: 2021, month: 7, count: 10 },
            HistogramDataEntry { year: 2021, month: 13, count: 99 },
            HistogramDataEntry { year: 2020, month: 2, count: 1 },
        ];
        assert_eq!(bucket_monthly(&entries), vec![b("2020-02", 1), b("2021-07", 10)]);
    }

    #[test]
    fn five_digit_years_are_dropped() {
        let entries = [entry(9999, 12, 31, 2), entry(10000, 1, 1, 5)];
        assert_eq!(bucket(&entries), vec![b("9999-12", 2)]);
        let api = [
            HistogramDataEntry { year: 10000, month: 1, count: 5 },
            HistogramDataEntry { year: -1, month: 3, count: 1 },
            HistogramDataEntry { year: 9999, month: 12, count: 2 },
        ];
        assert_eq!(bucket_monthly(&api), vec![b("9999-12", 2)]);
    }

    #[test]
    fn gaps_are_filled_only_on_request() {
        let sparse = vec![b("2022-11", 2), b("2023-02", 1)];
        assert_eq!(
            fill_gaps(&sparse),
            vec![b("2022-11", 2), b("2022-12", 0), b("2023-01", 0), b("2023-02", 1)]
        );
    }
}
