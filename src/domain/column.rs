//! Column Definition
//!
//! Describes one table column: which row field it reads, how it is labelled
//! and aligned, and which intents its header may raise.

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a column's header and body cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Column definition for the DataTable
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Optional stable identifier, used as the header element id when present
    pub id: Option<SharedString>,
    /// Row field this column reads
    pub key: SharedString,
    /// Header label
    pub label: SharedString,
    /// Cell alignment
    pub align: CellAlign,
    /// Whether clicking the header raises a sort intent
    pub sortable: bool,
    /// Whether the column accepts filter intents
    pub filterable: bool,
}

impl ColumnDef {
    /// Create a new column reading `key`, labelled `label`
    pub fn new(key: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: None,
            key: key.into(),
            label: label.into(),
            align: CellAlign::default(),
            sortable: true,
            filterable: true,
        }
    }

    /// Set an explicit identifier
    pub fn id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the alignment
    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    /// Right-align the column (numeric data)
    pub fn numeric(self) -> Self {
        self.align(CellAlign::Right)
    }

    /// Enable or disable sort intents from the header
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enable or disable filter intents
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Element id of the header cell: the id, falling back to the label
    pub fn element_key(&self) -> SharedString {
        self.id.clone().unwrap_or_else(|| self.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_both_intents() {
        let col = ColumnDef::new("name", "Dessert");
        assert_eq!(col.align, CellAlign::Left);
        assert!(col.sortable);
        assert!(col.filterable);
    }

    #[test]
    fn element_key_prefers_id() {
        let col = ColumnDef::new("fat", "Fat (g)");
        assert_eq!(col.element_key().as_str(), "Fat (g)");

        let col = col.id("fat-col");
        assert_eq!(col.element_key().as_str(), "fat-col");
    }

    #[test]
    fn numeric_right_aligns() {
        let col = ColumnDef::new("calories", "Calories").numeric().sortable(false);
        assert_eq!(col.align, CellAlign::Right);
        assert!(!col.sortable);
    }
}
