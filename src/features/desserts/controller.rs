//! Desserts Controller
//!
//! Caller side of the demo table: owns the full data set and applies the
//! sort and filter intents the table raises.

use gpui::SharedString;
use tracing::info;

use crate::domain::row::{filter_rows, rows_from_json, sort_rows};
use crate::domain::{ColumnDef, Row, SortDirection};
use crate::error::Result;
use crate::states::TableEvent;

const SAMPLE_ROWS: &str = include_str!("../../../assets/desserts.json");

/// Bundled sample data
pub fn sample_rows() -> Result<Vec<Row>> {
    rows_from_json(SAMPLE_ROWS)
}

/// Columns of the desserts table
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Dessert (100g serving)").id("name"),
        ColumnDef::new("calories", "Calories").numeric().filterable(false),
        ColumnDef::new("fat", "Fat (g)").numeric().filterable(false),
        ColumnDef::new("carbs", "Carbs (g)").numeric().filterable(false),
        ColumnDef::new("protein", "Protein (g)").numeric().filterable(false),
    ]
}

/// Short human-readable form of an intent
pub fn describe_event(event: &TableEvent) -> String {
    match event {
        TableEvent::SortChange(column) => format!("sort by {}", column.key),
        TableEvent::FilterChange { column, value } => format!("filter {} by \"{value}\"", column.key),
        TableEvent::PageChange(page) => format!("page {page}"),
        TableEvent::PageSizeChange(size) => format!("page size {size}"),
    }
}

/// Desserts page controller
pub struct DessertsController {
    all_rows: Vec<Row>,
    sort: Option<(SharedString, SortDirection)>,
    filter: Option<(SharedString, String)>,
}

impl DessertsController {
    /// Create a new controller over the full data set
    pub fn new(all_rows: Vec<Row>) -> Self {
        Self {
            all_rows,
            sort: None,
            filter: None,
        }
    }

    /// Current sort column and direction
    pub fn sort(&self) -> Option<&(SharedString, SortDirection)> {
        self.sort.as_ref()
    }

    /// Rows after the current filter and sort
    pub fn view_rows(&self) -> Vec<Row> {
        let mut rows = match &self.filter {
            Some((key, needle)) => filter_rows(&self.all_rows, key, needle),
            None => self.all_rows.clone(),
        };

        if let Some((key, direction)) = &self.sort {
            sort_rows(&mut rows, key, *direction);
        }

        rows
    }

    /// Apply an intent. Returns the new row set when the intent changes what
    /// the table should show.
    pub fn handle(&mut self, event: &TableEvent) -> Option<Vec<Row>> {
        info!(intent = %describe_event(event), "Table intent");

        match event {
            TableEvent::SortChange(column) => {
                // Same column flips direction, a new column starts ascending
                let direction = match &self.sort {
                    Some((key, direction)) if *key == column.key => direction.toggle(),
                    _ => SortDirection::Ascending,
                };
                self.sort = Some((column.key.clone(), direction));
                Some(self.view_rows())
            }
            TableEvent::FilterChange { column, value } => {
                self.filter = if value.trim().is_empty() {
                    None
                } else {
                    Some((column.key.clone(), value.clone()))
                };
                Some(self.view_rows())
            }
            TableEvent::PageChange(_) | TableEvent::PageSizeChange(_) => None,
        }
    }
}
