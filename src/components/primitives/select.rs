//! Select Component
//!
//! Inline single-choice selector: every option is shown and the current one
//! is highlighted. Picking a different option reports its value; picking the
//! highlighted one does nothing.

use std::rc::Rc;

use gpui::{
    div, prelude::*, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

type ChangeHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A select component
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    selected: Option<String>,
    options: Vec<SelectOption>,
    on_change: Option<ChangeHandler>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            on_change: None,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the change handler, called with the picked option's value
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.selected;
        let on_change = self.on_change;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .children(self.options.into_iter().enumerate().map(|(ix, option)| {
                let is_selected = selected.as_deref() == Some(option.value.as_str());
                let variant = if is_selected {
                    ButtonVariant::Selected
                } else {
                    ButtonVariant::Ghost
                };

                let mut button = Button::new(("select-option", ix), option.label)
                    .variant(variant)
                    .size(ButtonSize::Small);

                if !is_selected {
                    if let Some(handler) = on_change.clone() {
                        let value = option.value;
                        button = button.on_click(move |_, window, cx| handler(&value, window, cx));
                    }
                }

                button
            }))
    }
}
