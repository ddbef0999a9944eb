//! Paged Table
//!
//! A paginated, sortable, filterable data table component for GPUI. The
//! table renders one page of caller-supplied rows, owns its page index and
//! page size, and reports sort, filter and paging intents to its owner as
//! [`states::TableEvent`]s.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod states;
pub mod theme;
