//! i18n - Internationalization Helpers
//!
//! Translations live in `locales/*.yml` and are compiled in by `rust-i18n`.

use gpui::SharedString;
use rust_i18n::t;

/// Get translated string from "table" namespace
pub fn i18n_table(locale: &str, key: &str) -> SharedString {
    t!(format!("table.{key}"), locale = locale).into()
}

/// Get translated string from "demo" namespace
pub fn i18n_demo(locale: &str, key: &str) -> SharedString {
    t!(format!("demo.{key}"), locale = locale).into()
}

/// "from–to of count" label of the pagination footer
pub fn displayed_rows(locale: &str, from: usize, to: usize, count: usize) -> SharedString {
    t!(
        "table.displayed_rows",
        locale = locale,
        from = from,
        to = to,
        count = count
    )
    .into()
}

/// "Last intent: ..." label of the demo view
pub fn last_intent(locale: &str, intent: &str) -> SharedString {
    t!("demo.last_intent", locale = locale, intent = intent).into()
}
