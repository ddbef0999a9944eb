//! Desserts Page
//!
//! Hosts the demo table with a name filter above it and the last intent the
//! table raised below it.

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window,
};
use gpui_component::{
    input::{Input, InputEvent, InputState},
    v_flex,
};

use crate::components::composite::data_table::{data_table, DataTable};
use crate::domain::{Row, TableConfig};
use crate::features::desserts::controller::{columns, describe_event, DessertsController};
use crate::i18n::{i18n_demo, last_intent};
use crate::states::TableEvent;
use crate::theme::colors::TableColors;

/// Desserts page component
pub struct DessertsPage {
    controller: DessertsController,
    table: Entity<DataTable>,
    filter_state: Entity<InputState>,
    last_intent: Option<String>,
    locale: SharedString,
    _subscriptions: Vec<Subscription>,
}

impl DessertsPage {
    pub fn new(
        config: &TableConfig,
        locale: impl Into<SharedString>,
        rows: Vec<Row>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = locale.into();
        let controller = DessertsController::new(rows);
        let table = data_table(config, locale.clone(), columns(), controller.view_rows(), cx);

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.subscribe(&table, |this, _table, event: &TableEvent, cx| {
            this.on_table_event(event, cx);
        }));

        let placeholder = i18n_demo(&locale, "filter_placeholder");
        let filter_state = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        // Typing in the filter box raises a filter intent on the name column
        let table_clone = table.clone();
        subscriptions.push(cx.subscribe(&filter_state, move |_this, state, event: &InputEvent, cx| {
            if matches!(event, InputEvent::Change) {
                let value = state.read(cx).value().to_string();
                table_clone.update(cx, |table, cx| {
                    table.filter("name", value, cx);
                });
            }
        }));

        Self {
            controller,
            table,
            filter_state,
            last_intent: None,
            locale,
            _subscriptions: subscriptions,
        }
    }

    fn on_table_event(&mut self, event: &TableEvent, cx: &mut Context<Self>) {
        self.last_intent = Some(describe_event(event));

        if let Some(rows) = self.controller.handle(event) {
            let total = rows.len();
            self.table.update(cx, |table, cx| {
                table.set_rows(Some(rows), cx);
                table.set_total_count(Some(total), cx);
            });
        }

        cx.notify();
    }
}

impl Render for DessertsPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let intent = match &self.last_intent {
            Some(intent) => last_intent(&self.locale, intent),
            None => i18n_demo(&self.locale, "no_intent"),
        };

        v_flex()
            .size_full()
            .p_4()
            .gap_4()
            .bg(TableColors::surface())
            // Header
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(TableColors::text_primary())
                    .child(i18n_demo(&self.locale, "title")),
            )
            // Filter
            .child(div().w_full().child(Input::new(&self.filter_state).w_full().cleanable(true)))
            // Table
            .child(self.table.clone())
            // Last intent
            .child(
                div()
                    .text_sm()
                    .text_color(TableColors::text_secondary())
                    .child(intent),
            )
    }
}
