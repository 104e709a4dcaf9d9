//! Dataset and file-level results.

use serde::Serialize;

use super::{XptColumn, XptValue};

/// Maximum number of observation rows materialized per dataset.
///
/// `XptDataset::observation_count` always reflects the true total so callers
/// can report "N total observations" distinct from the rows actually held.
pub const PREVIEW_ROWS: usize = 100;

/// One dataset (member) decoded from a transport file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XptDataset {
    /// Dataset name (8 characters maximum).
    pub name: String,
    /// Dataset label (40 characters maximum).
    pub label: Option<String>,
    /// Dataset type label, rarely populated.
    pub dataset_type: Option<String>,
    /// Created datetime string (`ddMMMyy:hh:mm:ss`) from the member header.
    #[serde(rename = "createdDate")]
    pub created: Option<String>,
    /// Modified datetime string from the member header.
    #[serde(rename = "modifiedDate")]
    pub modified: Option<String>,
    /// True total observation count, independent of the preview cap.
    pub observation_count: usize,
    /// Variables in declaration order; this order defines the row layout.
    #[serde(rename = "fields")]
    pub columns: Vec<XptColumn>,
    /// Decoded rows, at most [`PREVIEW_ROWS`] entries. Each row holds exactly
    /// `columns.len()` values, positionally aligned with `columns`.
    pub rows: Vec<Vec<XptValue>>,
}

impl XptDataset {
    /// Number of materialized preview rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of variables.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&XptColumn> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Index of a column by name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Total row byte length: sum of all column lengths.
    #[must_use]
    pub fn observation_length(&self) -> usize {
        self.columns.iter().map(|col| col.length as usize).sum()
    }

    /// Created datetime parsed from the member header, when well-formed.
    #[must_use]
    pub fn created_datetime(&self) -> Option<chrono::NaiveDateTime> {
        crate::header::parse_xpt_datetime(self.created.as_deref()?)
    }

    /// Modified datetime parsed from the member header, when well-formed.
    #[must_use]
    pub fn modified_datetime(&self) -> Option<chrono::NaiveDateTime> {
        crate::header::parse_xpt_datetime(self.modified.as_deref()?)
    }
}

/// A fully decoded transport file.
///
/// Serializes as a plain self-contained value: the display layer can render
/// it without calling back into the decoder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XptFile {
    /// Path the bytes were read from, as supplied by the caller.
    pub path: String,
    /// Datasets in file order. A file may contain zero, one, or many.
    pub datasets: Vec<XptDataset>,
}

impl XptFile {
    /// Look up a dataset by name.
    #[must_use]
    pub fn dataset(&self, name: &str) -> Option<&XptDataset> {
        self.datasets.iter().find(|ds| ds.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::XptType;

    fn sample_dataset() -> XptDataset {
        XptDataset {
            name: "DM".to_string(),
            label: Some("Demographics".to_string()),
            dataset_type: None,
            created: Some("15MAR24:14:30:45".to_string()),
            modified: None,
            observation_count: 2,
            columns: vec![
                XptColumn::character("USUBJID", 12),
                XptColumn::numeric("AGE"),
            ],
            rows: vec![
                vec![XptValue::character("SUBJ-001"), XptValue::numeric(34.0)],
                vec![XptValue::character("SUBJ-002"), XptValue::numeric_missing()],
            ],
        }
    }

    #[test]
    fn test_lookup_helpers() {
        let ds = sample_dataset();
        assert_eq!(ds.num_rows(), 2);
        assert_eq!(ds.num_columns(), 2);
        assert_eq!(ds.column("AGE").unwrap().data_type, XptType::Num);
        assert_eq!(ds.column_index("USUBJID"), Some(0));
        assert_eq!(ds.column("MISSING"), None);
        assert_eq!(ds.observation_length(), 20);
    }

    #[test]
    fn test_created_datetime() {
        let ds = sample_dataset();
        let dt = ds.created_datetime().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-15 14:30:45");
        assert_eq!(ds.modified_datetime(), None);
    }

    #[test]
    fn test_serialize_payload_shape() {
        let file = XptFile {
            path: "/tmp/dm.xpt".to_string(),
            datasets: vec![sample_dataset()],
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["path"], "/tmp/dm.xpt");
        let ds = &json["datasets"][0];
        assert_eq!(ds["name"], "DM");
        assert_eq!(ds["observationCount"], 2);
        assert_eq!(ds["fields"][1]["name"], "AGE");
        // Missing numerics cross the boundary as null
        assert_eq!(ds["rows"][1][1], serde_json::Value::Null);
    }
}
