//! The measurement columns an analyst can chart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric measurement column in the surveillance data set.
///
/// Wire names match the backend's column names exactly, including the
/// upper-case `TPR`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum MeasureColumn {
    #[serde(rename = "malinc")]
    Malinc,
    #[serde(rename = "propsuspected")]
    PropSuspected,
    #[serde(rename = "TPR")]
    Tpr,
}

impl MeasureColumn {
    /// All selectable columns, in the order the column picker lists them.
    pub const ALL: [MeasureColumn; 3] = [
        MeasureColumn::Malinc,
        MeasureColumn::PropSuspected,
        MeasureColumn::Tpr,
    ];

    /// The backend's name for this column, used in query parameters and
    /// as the per-group value key in `/box_data` rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureColumn::Malinc => "malinc",
            MeasureColumn::PropSuspected => "propsuspected",
            MeasureColumn::Tpr => "TPR",
        }
    }

    /// Human-readable label for the column picker.
    pub fn label(&self) -> &'static str {
        match self {
            MeasureColumn::Malinc => "Malaria Incidence (malinc)",
            MeasureColumn::PropSuspected => "Proportion Suspected (propsuspected)",
            MeasureColumn::Tpr => "Total Positive Rate (TPR)",
        }
    }
}

impl fmt::Display for MeasureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureColumn {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "malinc" => Ok(MeasureColumn::Malinc),
            "propsuspected" => Ok(MeasureColumn::PropSuspected),
            "TPR" | "tpr" => Ok(MeasureColumn::Tpr),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MeasureColumn;

    #[test]
    fn wire_names_round_trip() {
        for column in MeasureColumn::ALL {
            assert_eq!(column.as_str().parse::<MeasureColumn>(), Ok(column));
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&MeasureColumn::Tpr).unwrap();
        assert_eq!(json, "\"TPR\"");
    }

    #[test]
    fn unknown_column_is_rejected() {
        assert!("deaths".parse::<MeasureColumn>().is_err());
    }
}
