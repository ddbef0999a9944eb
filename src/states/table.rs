//! Table state
//!
//! Everything the DataTable renders, kept free of GPUI contexts so the
//! windowing and intent rules can be exercised directly. Mutations that
//! correspond to user actions return the [`TableEvent`] the view emits.

use tracing::{debug, warn};

use crate::domain::{ColumnDef, PaginationMode, Row, TableConfig};
use crate::states::pagination::PaginationState;

/// Intents a table raises towards its owner
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// A sortable header was clicked
    SortChange(ColumnDef),
    /// A filter value was entered for a column
    FilterChange { column: ColumnDef, value: String },
    /// The user navigated to another page
    PageChange(usize),
    /// The user picked another page size (page is back at 0)
    PageSizeChange(usize),
}

/// Blank row that keeps the body height stable on a short last page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillerRow {
    /// Number of data rows it stands in for
    pub empty_rows: usize,
    /// Pixel height (`row_height * empty_rows`)
    pub height: f32,
    /// Columns it spans
    pub colspan: usize,
}

/// What the body section renders
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<'a> {
    /// No rows at all: a single placeholder spanning every column
    NoData {
        colspan: usize,
        filler: Option<FillerRow>,
    },
    /// The current page window
    Rows {
        rows: &'a [Row],
        /// Absolute index of `rows[0]`, for zebra striping and element ids
        first_index: usize,
        filler: Option<FillerRow>,
    },
}

/// Render state for one table instance
pub struct TableState {
    columns: Vec<ColumnDef>,
    rows: Vec<Row>,
    total_count: usize,
    pagination: PaginationState,
    mode: PaginationMode,
    config: TableConfig,
}

impl TableState {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            total_count: 0,
            pagination: PaginationState::new(config.default_page_size),
            mode: config.mode,
            config: config.clone(),
        }
    }

    // ==================== Getters ====================

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn row_height(&self) -> f32 {
        self.config.row_height
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.config.page_size_options
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|col| col.key.as_ref() == key)
    }

    /// Rows rendered on the current page
    pub fn visible_rows(&self) -> &[Row] {
        match self.mode {
            PaginationMode::Client => &self.rows[self.pagination.window(self.rows.len())],
            PaginationMode::Server => {
                let end = self.rows.len().min(self.pagination.page_size());
                &self.rows[..end]
            }
        }
    }

    /// Rows missing from the current page
    pub fn empty_rows(&self) -> usize {
        match self.mode {
            PaginationMode::Client => self.pagination.empty_rows(self.rows.len()),
            PaginationMode::Server if self.pagination.page() > 0 => {
                self.pagination.page_size().saturating_sub(self.rows.len())
            }
            PaginationMode::Server => 0,
        }
    }

    fn filler(&self) -> Option<FillerRow> {
        let empty_rows = self.empty_rows();
        (empty_rows > 0).then(|| FillerRow {
            empty_rows,
            height: self.row_height() * empty_rows as f32,
            colspan: self.columns.len(),
        })
    }

    /// Body layout for the current state
    pub fn body(&self) -> TableBody<'_> {
        if self.rows.is_empty() {
            return TableBody::NoData {
                colspan: self.columns.len(),
                filler: self.filler(),
            };
        }

        let first_index = match self.mode {
            PaginationMode::Client => self.pagination.window(self.rows.len()).start,
            PaginationMode::Server => self.pagination.window_start(),
        };

        TableBody::Rows {
            rows: self.visible_rows(),
            first_index,
            filler: self.filler(),
        }
    }

    // ==================== Caller inputs ====================

    pub fn set_columns(&mut self, columns: Vec<ColumnDef>) {
        self.columns = columns;
    }

    /// Replace the rows; `None` is treated as no rows
    pub fn set_rows(&mut self, rows: Option<Vec<Row>>) {
        self.rows = rows.unwrap_or_default();
    }

    /// Replace the total count; `None` is treated as 0
    pub fn set_total_count(&mut self, total_count: Option<usize>) {
        self.total_count = total_count.unwrap_or(0);
    }

    pub fn set_mode(&mut self, mode: PaginationMode) {
        self.mode = mode;
    }

    // ==================== User actions ====================

    /// Navigate to `page`
    pub fn change_page(&mut self, page: usize) -> TableEvent {
        debug!(from = self.pagination.page(), to = page, "Page change");
        self.pagination.set_page(page);
        TableEvent::PageChange(page)
    }

    /// Pick a new page size. Sizes outside the option set snap to the
    /// nearest option. Picking the current size keeps the page and raises
    /// no intent.
    pub fn change_page_size(&mut self, size: usize) -> Option<TableEvent> {
        let size = if self.page_size_options().contains(&size) {
            size
        } else {
            let snapped = self.config.nearest_page_size(size);
            warn!(requested = size, snapped, "Unsupported page size");
            snapped
        };

        if size == self.pagination.page_size() {
            return None;
        }

        debug!(page_size = size, "Page size change");
        self.pagination.set_page_size(size);
        Some(TableEvent::PageSizeChange(size))
    }

    /// Click on the header at position `ix`. No intent for out-of-range or
    /// non-sortable columns. Sort order stays with the caller.
    pub fn sort_by(&self, ix: usize) -> Option<TableEvent> {
        let column = self.columns.get(ix).filter(|col| col.sortable)?;
        debug!(column = %column.key, ix, "Sort intent");
        Some(TableEvent::SortChange(column.clone()))
    }

    /// Filter input for the column reading `key`
    pub fn filter(&self, key: &str, value: impl Into<String>) -> Option<TableEvent> {
        let Some(column) = self.column(key).filter(|col| col.filterable) else {
            debug!(column = key, "Filter intent ignored");
            return None;
        };

        let value = value.into();
        debug!(column = %column.key, value = %value, "Filter intent");
        Some(TableEvent::FilterChange {
            column: column.clone(),
            value,
        })
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellAlign;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name", "Dessert"),
            ColumnDef::new("calories", "Calories").numeric(),
            ColumnDef::new("fat", "Fat (g)").numeric().sortable(false),
        ]
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row::new().with("name", format!("row-{i}")).with("calories", i as i64))
            .collect()
    }

    fn state_with(n: usize) -> TableState {
        let mut state = TableState::default();
        state.set_columns(columns());
        state.set_rows(Some(rows(n)));
        state.set_total_count(Some(n));
        state
    }

    #[test]
    fn absent_inputs_default_to_empty() {
        let mut state = state_with(3);
        state.set_rows(None);
        state.set_total_count(None);

        assert!(state.rows().is_empty());
        assert_eq!(state.total_count(), 0);
        assert_eq!(
            state.body(),
            TableBody::NoData {
                colspan: 3,
                filler: None
            }
        );
    }

    #[test]
    fn no_data_regardless_of_page() {
        let mut state = state_with(0);
        state.change_page_size(25);
        state.change_page(3);
        assert!(matches!(state.body(), TableBody::NoData { colspan: 3, .. }));
    }

    #[test]
    fn third_page_of_twelve() {
        let mut state = state_with(12);
        state.change_page(2);

        match state.body() {
            TableBody::Rows {
                rows,
                first_index,
                filler,
            } => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].display("name"), "row-10");
                assert_eq!(first_index, 10);
                assert_eq!(
                    filler,
                    Some(FillerRow {
                        empty_rows: 3,
                        height: 3.0 * 53.0,
                        colspan: 3
                    })
                );
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn first_page_never_pads() {
        let state = state_with(2);
        assert_eq!(state.visible_rows().len(), 2);
        assert_eq!(state.empty_rows(), 0);
    }

    #[test]
    fn total_count_does_not_affect_window() {
        let mut state = state_with(7);
        state.set_total_count(Some(1000));
        state.change_page(1);
        assert_eq!(state.visible_rows().len(), 2);
    }

    #[test]
    fn page_size_change_resets_and_signals_once() {
        let mut state = state_with(40);
        state.change_page(3);

        let event = state.change_page_size(10);
        assert_eq!(event, Some(TableEvent::PageSizeChange(10)));
        assert_eq!(state.page(), 0);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.visible_rows().len(), 10);
    }

    #[test]
    fn unsupported_page_size_snaps() {
        let mut state = state_with(40);
        assert_eq!(state.change_page_size(12), Some(TableEvent::PageSizeChange(10)));
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn reselecting_current_page_size_keeps_page() {
        let mut state = state_with(12);
        state.change_page(2);

        assert_eq!(state.change_page_size(5), None);
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_size(), 5);

        // A request that snaps onto the current size is a no-op too
        assert_eq!(state.change_page_size(6), None);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn page_change_signals_new_index() {
        let mut state = state_with(12);
        assert_eq!(state.change_page(1), TableEvent::PageChange(1));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn sort_intent_leaves_state_untouched() {
        let state = state_with(12);
        let before = state.visible_rows().to_vec();

        let event = state.sort_by(1);
        assert_eq!(
            event,
            Some(TableEvent::SortChange(
                ColumnDef::new("calories", "Calories").align(CellAlign::Right)
            ))
        );
        assert_eq!(state.visible_rows(), before.as_slice());
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn sort_ignores_unsortable_and_unknown_columns() {
        let state = state_with(3);
        assert_eq!(state.sort_by(2), None);
        assert_eq!(state.sort_by(3), None);
    }

    #[test]
    fn sort_carries_the_clicked_column() {
        let mut state = state_with(3);
        state.set_columns(vec![
            ColumnDef::new("calories", "Calories").id("kcal"),
            ColumnDef::new("calories", "Energy").id("energy").numeric(),
        ]);

        match state.sort_by(1) {
            Some(TableEvent::SortChange(column)) => {
                assert_eq!(column.id.as_ref().map(|s| s.as_str()), Some("energy"));
                assert_eq!(column.align, CellAlign::Right);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn filter_intent_carries_value() {
        let mut state = state_with(3);
        let mut cols = columns();
        cols[1] = cols[1].clone().filterable(false);
        state.set_columns(cols);

        match state.filter("name", "cake") {
            Some(TableEvent::FilterChange { column, value }) => {
                assert_eq!(column.key.as_str(), "name");
                assert_eq!(value, "cake");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(state.filter("calories", "1"), None);
    }

    #[test]
    fn server_mode_trusts_rows_as_one_page() {
        let mut state = state_with(3);
        state.set_mode(PaginationMode::Server);
        state.change_page(2);

        match state.body() {
            TableBody::Rows {
                rows,
                first_index,
                filler,
            } => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0].display("name"), "row-0");
                assert_eq!(first_index, 10);
                assert_eq!(filler.map(|f| f.empty_rows), Some(2));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn server_mode_truncates_oversized_page() {
        let mut state = state_with(8);
        state.set_mode(PaginationMode::Server);
        assert_eq!(state.visible_rows().len(), 5);
        assert_eq!(state.empty_rows(), 0);
    }
}
