//! Row Data
//!
//! A row maps column keys to displayable cell values. Rows come from the
//! caller; a key the row lacks renders as an empty cell.

use std::cmp::Ordering;
use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single displayable cell value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Integer(_) | CellValue::Float(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Empty => 3,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Total ordering used by caller-side sorting.
    ///
    /// Numbers compare numerically across integer/float, text lexically, and
    /// empty cells sort after everything else.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Integer(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: AHashMap<String, CellValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    /// Display text for a field; missing fields render as an empty string
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

/// Parse a JSON array of objects into rows
pub fn rows_from_json(json: &str) -> Result<Vec<Row>> {
    Ok(serde_json::from_str(json)?)
}

/// Sort direction for caller-side sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flip the direction
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Stable sort of rows by one field
pub fn sort_rows(rows: &mut [Row], key: &str, direction: SortDirection) {
    let empty = CellValue::Empty;
    rows.sort_by(|a, b| {
        let ord = a
            .get(key)
            .unwrap_or(&empty)
            .compare(b.get(key).unwrap_or(&empty));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Rows whose `key` field contains `needle`, case-insensitively.
/// An empty needle keeps every row.
pub fn filter_rows(rows: &[Row], key: &str, needle: &str) -> Vec<Row> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| row.display(key).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dessert(name: &str, calories: i64, fat: f64) -> Row {
        Row::new()
            .with("name", name)
            .with("calories", calories)
            .with("fat", fat)
    }

    #[test]
    fn missing_field_displays_empty() {
        let row = dessert("Eclair", 262, 16.0);
        assert_eq!(row.display("name"), "Eclair");
        assert_eq!(row.display("protein"), "");
    }

    #[test]
    fn parses_json_rows() {
        let rows = rows_from_json(
            r#"[{"name": "Frozen yoghurt", "calories": 159, "fat": 6.5, "vegan": false, "note": null}]"#,
        )
        .expect("valid json");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("calories"), Some(&CellValue::Integer(159)));
        assert_eq!(rows[0].get("fat"), Some(&CellValue::Float(6.5)));
        assert_eq!(rows[0].get("vegan"), Some(&CellValue::Bool(false)));
        assert_eq!(rows[0].get("note"), Some(&CellValue::Empty));
        assert_eq!(rows[0].display("note"), "");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            rows_from_json("{not json"),
            Err(crate::error::Error::Json { .. })
        ));
    }

    #[test]
    fn compare_mixes_integers_and_floats() {
        assert_eq!(
            CellValue::Integer(3).compare(&CellValue::Float(3.5)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Empty.compare(&CellValue::Text("a".into())),
            Ordering::Greater
        );
    }

    #[test]
    fn sort_rows_both_directions() {
        let mut rows = vec![
            dessert("Cupcake", 305, 3.7),
            dessert("Donut", 452, 25.0),
            dessert("Eclair", 262, 16.0),
        ];

        sort_rows(&mut rows, "calories", SortDirection::Ascending);
        let names: Vec<_> = rows.iter().map(|r| r.display("name")).collect();
        assert_eq!(names, vec!["Eclair", "Cupcake", "Donut"]);

        sort_rows(&mut rows, "name", SortDirection::Descending);
        let names: Vec<_> = rows.iter().map(|r| r.display("name")).collect();
        assert_eq!(names, vec!["Eclair", "Donut", "Cupcake"]);
    }

    #[test]
    fn filter_rows_is_case_insensitive() {
        let rows = vec![
            dessert("Cupcake", 305, 3.7),
            dessert("Donut", 452, 25.0),
            dessert("Gingerbread", 356, 16.0),
        ];

        let hits = filter_rows(&rows, "name", "CAKE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display("name"), "Cupcake");

        assert_eq!(filter_rows(&rows, "name", "  ").len(), 3);
    }

    #[test]
    fn sort_direction_toggles() {
        assert_eq!(SortDirection::default().toggle(), SortDirection::Descending);
        assert_eq!(
            SortDirection::Descending.toggle(),
            SortDirection::Ascending
        );
    }
}
