//! Serde model of one `/data` observation row.
//!
//! Field casing follows the backend exactly (`NEWsiteID`, `TPR`), mapped
//! to Rust names via serde renames so the structs can be passed to
//! Plotly as JSON from the WASM frontend without re-keying.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::column::MeasureColumn;

/// One monthly observation reported by a surveillance site.
///
/// Measurements are nullable: a null means the site did not report that
/// measure for the month, not zero. Immutable once received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveillanceRecord {
    pub id: Option<i64>,
    /// Month of observation; the backend can emit null for legacy rows.
    pub monthyear: Option<NaiveDate>,
    pub site: Option<String>,
    #[serde(rename = "NEWsiteID")]
    pub new_site_id: Option<String>,
    pub region: Option<String>,
    pub malinc: Option<f64>,
    pub propsuspected: Option<f64>,
    #[serde(rename = "TPR")]
    pub tpr: Option<f64>,
}

impl SurveillanceRecord {
    /// The value of the selected measurement column, if reported.
    pub fn value(&self, column: MeasureColumn) -> Option<f64> {
        match column {
            MeasureColumn::Malinc => self.malinc,
            MeasureColumn::PropSuspected => self.propsuspected,
            MeasureColumn::Tpr => self.tpr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_row() {
        let record: SurveillanceRecord = serde_json::from_value(serde_json::json!({
            "id": 7,
            "monthyear": "2020-01-01",
            "site": "Site001",
            "NEWsiteID": "S001",
            "region": "Central",
            "malinc": 12.5,
            "propsuspected": null,
            "TPR": 0.31,
        }))
        .unwrap();

        assert_eq!(
            record.monthyear,
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(record.value(MeasureColumn::Malinc), Some(12.5));
        assert_eq!(record.value(MeasureColumn::PropSuspected), None);
        assert_eq!(record.value(MeasureColumn::Tpr), Some(0.31));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let record: SurveillanceRecord =
            serde_json::from_value(serde_json::json!({ "region": "Eastern" })).unwrap();
        assert_eq!(record.region.as_deref(), Some("Eastern"));
        assert_eq!(record.monthyear, None);
        assert_eq!(record.malinc, None);
    }
}
