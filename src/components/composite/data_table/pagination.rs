//! Pagination Component
//!
//! Footer of the DataTable: rows-per-page selector, "from–to of count"
//! label, and first/previous/next/last page buttons.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};
use gpui_component::h_flex;

use crate::components::primitives::button::Button;
use crate::components::primitives::select::{Select, SelectOption};
use crate::constants::FOOTER_HEIGHT;
use crate::i18n::{displayed_rows, i18n_table};
use crate::states::{displayed_range, page_nav};
use crate::theme::colors::TableColors;

type Handler = Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    count: usize,
    rows_per_page: usize,
    page: usize,
    options: Vec<usize>,
    locale: SharedString,
    on_page_change: Option<Handler>,
    on_rows_per_page_change: Option<Handler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(count: usize, rows_per_page: usize, page: usize) -> Self {
        Self {
            count,
            rows_per_page,
            page,
            options: Vec::new(),
            locale: "en".into(),
            on_page_change: None,
            on_rows_per_page_change: None,
        }
    }

    /// Set the rows-per-page choices
    pub fn options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.options = options.into();
        self
    }

    /// Set the UI language
    pub fn locale(mut self, locale: impl Into<SharedString>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    /// Set the rows-per-page change handler
    pub fn on_rows_per_page_change(
        mut self,
        handler: impl Fn(&usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_rows_per_page_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(&self, id: &'static str, label: &'static str, target: usize, enabled: bool) -> Button {
        let mut button = Button::ghost(id, label)
            .tooltip(i18n_table(&self.locale, id))
            .disabled(!enabled);

        if let Some(handler) = self.on_page_change.clone() {
            button = button.on_click(move |_, window, cx| handler(&target, window, cx));
        }

        button
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let locale = self.locale.clone();
        let nav = page_nav(self.count, self.rows_per_page, self.page);
        let (from, to) = displayed_range(self.count, self.rows_per_page, self.page);

        let options = self
            .options
            .iter()
            .map(|size| SelectOption::new(size.to_string(), size.to_string()))
            .collect();

        let mut select = Select::new("rows-per-page")
            .options(options)
            .selected(self.rows_per_page.to_string());

        if let Some(handler) = self.on_rows_per_page_change.clone() {
            select = select.on_change(move |value, window, cx| {
                if let Ok(size) = value.parse::<usize>() {
                    handler(&size, window, cx);
                }
            });
        }

        h_flex()
            .w_full()
            .h(px(FOOTER_HEIGHT))
            .px_4()
            .gap_4()
            .justify_end()
            .border_t_1()
            .border_color(TableColors::border())
            .text_sm()
            .text_color(TableColors::text_secondary())
            // Rows per page
            .child(
                h_flex()
                    .gap_2()
                    .child(i18n_table(&locale, "rows_per_page"))
                    .child(select),
            )
            // Displayed range
            .child(div().child(displayed_rows(&locale, from, to, self.count)))
            // Page navigation
            .child(
                h_flex()
                    .gap_1()
                    .child(self.nav_button("first_page", "⏮", nav.first, nav.can_prev))
                    .child(self.nav_button("prev_page", "←", nav.prev, nav.can_prev))
                    .child(self.nav_button("next_page", "→", nav.next, nav.can_next))
                    .child(self.nav_button("last_page", "⏭", nav.last, nav.can_next)),
            )
    }
}
