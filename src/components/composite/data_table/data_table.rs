//! DataTable Component
//!
//! A paginated table. The view owns a [`TableState`] and re-emits the
//! intents it produces as [`TableEvent`]s; owners subscribe to the ones they
//! care about.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, EventEmitter, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};
use gpui_component::v_flex;

use super::pagination::Pagination;
use crate::constants::HEADER_HEIGHT;
use crate::domain::{CellAlign, ColumnDef, PaginationMode, Row, TableConfig};
use crate::i18n::i18n_table;
use crate::states::{FillerRow, TableBody, TableEvent, TableState};
use crate::theme::colors::TableColors;
use crate::theme::typography::Typography;

/// DataTable component
pub struct DataTable {
    state: TableState,
    locale: SharedString,
}

impl EventEmitter<TableEvent> for DataTable {}

impl DataTable {
    /// Create a new data table
    pub fn new(config: &TableConfig, locale: impl Into<SharedString>, _cx: &mut Context<Self>) -> Self {
        Self {
            state: TableState::new(config),
            locale: locale.into(),
        }
    }

    /// Read-only access to the render state
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<ColumnDef>, cx: &mut Context<Self>) {
        self.state.set_columns(columns);
        cx.notify();
    }

    /// Set the rows; `None` renders the "no data" placeholder
    pub fn set_rows(&mut self, rows: Option<Vec<Row>>, cx: &mut Context<Self>) {
        self.state.set_rows(rows);
        cx.notify();
    }

    /// Set the total row count shown by the footer
    pub fn set_total_count(&mut self, total_count: Option<usize>, cx: &mut Context<Self>) {
        self.state.set_total_count(total_count);
        cx.notify();
    }

    /// Set who owns pagination of the rows
    pub fn set_mode(&mut self, mode: PaginationMode, cx: &mut Context<Self>) {
        self.state.set_mode(mode);
        cx.notify();
    }

    /// Set the UI language
    pub fn set_locale(&mut self, locale: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.locale = locale.into();
        cx.notify();
    }

    /// Navigate to `page` and emit [`TableEvent::PageChange`]
    pub fn change_page(&mut self, page: usize, cx: &mut Context<Self>) {
        let event = self.state.change_page(page);
        cx.emit(event);
        cx.notify();
    }

    /// Switch page size, back to the first page, and emit
    /// [`TableEvent::PageSizeChange`]. The current size is a no-op.
    pub fn change_page_size(&mut self, size: usize, cx: &mut Context<Self>) {
        if let Some(event) = self.state.change_page_size(size) {
            cx.emit(event);
            cx.notify();
        }
    }

    /// Emit [`TableEvent::SortChange`] for the sortable column at `ix`
    pub fn sort_by(&mut self, ix: usize, cx: &mut Context<Self>) {
        if let Some(event) = self.state.sort_by(ix) {
            cx.emit(event);
        }
    }

    /// Emit [`TableEvent::FilterChange`] for a filterable column
    pub fn filter(&mut self, key: &str, value: impl Into<String>, cx: &mut Context<Self>) {
        if let Some(event) = self.state.filter(key, value) {
            cx.emit(event);
        }
    }

    fn aligned<E: Styled>(cell: E, align: CellAlign) -> E {
        match align {
            CellAlign::Left => cell.justify_start(),
            CellAlign::Center => cell.justify_center(),
            CellAlign::Right => cell.justify_end(),
        }
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .flex_none()
            .items_center()
            .bg(TableColors::header_bg())
            .children(self.state.columns().iter().enumerate().map(|(ix, col)| {
                let cell = div()
                    .id(col.element_key())
                    .h_full()
                    .flex_1()
                    .min_w_0()
                    .flex()
                    .items_center()
                    .px_4()
                    .text_size(px(Typography::TEXT_SM))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(TableColors::header_text())
                    .child(col.label.clone());
                let cell = Self::aligned(cell, col.align);

                if col.sortable {
                    cell.cursor_pointer()
                        .hover(|s| s.bg(TableColors::header_hover()))
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.sort_by(ix, cx);
                        }))
                } else {
                    cell
                }
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &Row, index: usize, is_last: bool) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            TableColors::row_alt()
        } else {
            TableColors::row_bg()
        };

        let mut row_el = div()
            .id(("data-row", index))
            .h(px(self.state.row_height()))
            .w_full()
            .flex()
            .flex_none()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(TableColors::row_hover()));

        if !is_last {
            row_el = row_el.border_b_1().border_color(TableColors::border());
        }

        row_el.children(self.state.columns().iter().map(|col| {
            let cell = div()
                .h_full()
                .flex_1()
                .min_w_0()
                .flex()
                .items_center()
                .px_4()
                .overflow_hidden()
                .text_size(px(Typography::TEXT_SM))
                .text_color(TableColors::text_primary())
                .child(row.display(&col.key));
            Self::aligned(cell, col.align)
        }))
    }

    /// Render the "no data" placeholder spanning every column
    fn render_no_data(&self) -> impl IntoElement {
        div()
            .h(px(self.state.row_height()))
            .w_full()
            .flex()
            .flex_none()
            .items_center()
            .px_4()
            .text_size(px(Typography::TEXT_SM))
            .text_color(TableColors::text_muted())
            .child(i18n_table(&self.locale, "no_data"))
    }

    /// Render a blank row holding the height of the missing rows
    fn render_filler(&self, filler: FillerRow) -> impl IntoElement {
        div().h(px(filler.height)).w_full().flex_none()
    }

    fn render_body(&self) -> impl IntoElement {
        let mut body = div()
            .id("data-table-body")
            .flex_1()
            .min_h(px(0.))
            .flex()
            .flex_col()
            .overflow_y_scroll();

        let filler = match self.state.body() {
            TableBody::NoData { filler, .. } => {
                body = body.child(self.render_no_data());
                filler
            }
            TableBody::Rows {
                rows,
                first_index,
                filler,
            } => {
                let count = rows.len();
                body = body.children(rows.iter().enumerate().map(|(offset, row)| {
                    self.render_row(row, first_index + offset, offset + 1 == count && filler.is_none())
                }));
                filler
            }
        };

        if let Some(filler) = filler {
            body = body.child(self.render_filler(filler));
        }

        body
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        Pagination::new(
            self.state.total_count(),
            self.state.page_size(),
            self.state.page(),
        )
        .options(self.state.page_size_options())
        .locale(self.locale.clone())
        .on_page_change(cx.listener(|this, page: &usize, _window, cx| {
            this.change_page(*page, cx);
        }))
        .on_rows_per_page_change(cx.listener(|this, size: &usize, _window, cx| {
            this.change_page_size(*size, cx);
        }))
    }
}

impl Render for DataTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let config = self.state.config();

        // Header stays outside the scrolling body
        v_flex()
            .w_full()
            .min_w(px(config.min_width))
            .max_h(px(config.max_height))
            .bg(TableColors::surface())
            .border_1()
            .border_color(TableColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header(cx))
            .child(self.render_body())
            .child(self.render_footer(cx))
    }
}

/// Helper to create a DataTable entity
pub fn data_table<V: 'static>(
    config: &TableConfig,
    locale: impl Into<SharedString>,
    columns: Vec<ColumnDef>,
    rows: Vec<Row>,
    cx: &mut Context<V>,
) -> Entity<DataTable> {
    let total_count = rows.len();
    cx.new(|cx| {
        let mut table = DataTable::new(config, locale, cx);
        table.state.set_columns(columns);
        table.state.set_rows(Some(rows));
        table.state.set_total_count(Some(total_count));
        table
    })
}
