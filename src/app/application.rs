//! Application - App Initialization and Window Management
//!
//! Opens the demo window hosting the desserts table.

use gpui::{
    actions, px, App, AppContext, Application, AnyView, Bounds, KeyBinding, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::{Row, TableConfig};
use crate::features::desserts::page::DessertsPage;
use crate::states::resolve_locale;

actions!(paged_table, [Quit]);

/// Run the demo application
pub fn run_app(config: TableConfig, rows: Vec<Row>) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let locale = resolve_locale(config.locale.as_deref());
        info!(locale = %locale, mode = ?config.mode, "Opening table window");

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Paged Table")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let page = cx.new(|cx| DessertsPage::new(&config, locale, rows, window, cx));
            let view: AnyView = page.into();
            cx.new(|cx| Root::new(view, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
